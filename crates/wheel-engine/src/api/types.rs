use bytemuck::{Pod, Zeroable};

/// A game event communicated from Rust to the host through the event buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: u32, a: f32, b: f32, c: f32) -> Self {
        Self { kind: kind as f32, a, b, c }
    }

    /// An event with no payload.
    pub fn signal(kind: u32) -> Self {
        Self::new(kind, 0.0, 0.0, 0.0)
    }
}
