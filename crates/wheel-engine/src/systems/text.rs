//! Text labels.
//!
//! Glyphs are drawn by the host (canvas or DOM) so names render with the
//! page's fonts. Rust only decides what each label says and where it sits;
//! the host reads the frame's labels as JSON.

use glam::Vec2;
use serde::Serialize;

/// A piece of text anchored at its center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub x: f32,
    pub y: f32,
    /// Clockwise rotation in degrees, matching CSS `rotate()`.
    pub rotation: f32,
    /// Font size in points.
    pub font_size: u32,
}

impl Label {
    pub fn new(text: impl Into<String>, pos: Vec2, rotation: f32, font_size: u32) -> Self {
        Self {
            text: text.into(),
            x: pos.x,
            y: pos.y,
            rotation,
            font_size,
        }
    }
}

/// Keep the first `max_words` space-separated words and append an ellipsis.
/// The ellipsis is always appended, even when nothing was cut.
pub fn truncate_words(text: &str, max_words: usize) -> String {
    let kept: Vec<&str> = text.split(' ').take(max_words).collect();
    format!("{}...", kept.join(" "))
}

/// Per-frame label list.
#[derive(Debug, Default)]
pub struct TextState {
    labels: Vec<Label>,
}

impl TextState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all labels. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn push(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Serialize the frame's labels for the host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.labels)
    }
}
