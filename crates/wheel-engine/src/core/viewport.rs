/// Host window size in CSS pixels.
///
/// Starts at 0 × 0 until the host reports its first size, which maps to the
/// smallest sizing tier.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the host has reported a size yet.
    pub fn is_known(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_until_first_resize() {
        assert!(!Viewport::default().is_known());
        assert!(Viewport::new(1280.0, 720.0).is_known());
    }
}
