//! Wheel drawing: sectors, outline, pointer and labels.
//!
//! Coordinates are local to the wheel's square chart area: `(0, 0)` is the
//! top-left corner and the wheel is centered at `(wheel_px / 2, wheel_px / 2)`.

use glam::Vec2;

use crate::systems::text::{truncate_words, Label, TextState};
use crate::systems::vector::{VectorColor, VectorState};
use super::candidate::CandidateSet;
use super::geometry::{normalize_deg, point_at, wheel_sectors, Pointer, SectorArc};
use super::sizing::Layout;

/// Sector outline width in pixels.
pub const OUTLINE_WIDTH: f32 = 2.0;
/// Words kept from a name before the ellipsis.
pub const LABEL_WORDS: usize = 3;
/// Longest arc segment when flattening sector rims.
const ARC_STEP_DEG: f32 = 3.0;

pub struct WheelView<'a> {
    candidates: &'a CandidateSet,
    layout: Layout,
    rotation_deg: f32,
    pointer_angle_deg: f32,
}

impl<'a> WheelView<'a> {
    pub fn new(candidates: &'a CandidateSet, layout: Layout, rotation_deg: f32, pointer_angle_deg: f32) -> Self {
        Self { candidates, layout, rotation_deg, pointer_angle_deg }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::splat(self.layout.wheel_px as f32 * 0.5)
    }

    pub fn sectors(&self) -> Vec<SectorArc> {
        wheel_sectors(&self.candidates.weights(), self.layout.wheel_px, self.rotation_deg)
    }

    /// Tessellate sectors and the pointer into `vectors`.
    pub fn draw(&self, vectors: &mut VectorState) {
        let center = self.center();
        for (sector, item) in self.sectors().iter().zip(self.candidates.iter()) {
            let outline = sector.outline(center, ARC_STEP_DEG);
            let fill = VectorColor::from_hex(item.color).unwrap_or_default();
            vectors.fill_polygon(&outline, fill);
            vectors.stroke_polygon(&outline, OUTLINE_WIDTH, VectorColor::WHITE);
        }
        vectors.fill_polygon(&self.pointer_triangle(), VectorColor::DARK_GRAY);
    }

    /// Triangle pointing at the center, straddling the rim.
    pub fn pointer_triangle(&self) -> [Vec2; 3] {
        let pointer = Pointer::for_wheel(self.layout.wheel_px, self.pointer_angle_deg);
        let center = self.center();
        let half = pointer.half_span_deg();
        let outer = pointer.radius + pointer.width * 0.5;
        [
            point_at(center, pointer.radius - pointer.width * 0.5, pointer.angle_deg),
            point_at(center, outer, pointer.angle_deg - half),
            point_at(center, outer, pointer.angle_deg + half),
        ]
    }

    /// One label per sector at half the radius on its middle angle.
    pub fn labels(&self, text: &mut TextState) {
        let center = self.center();
        let rotation = normalize_deg(self.rotation_deg);
        for (sector, item) in self.sectors().iter().zip(self.candidates.iter()) {
            let radius = sector.inner_radius + (sector.outer_radius - sector.inner_radius) * 0.5;
            let pos = point_at(center, radius, sector.mid_deg());
            text.push(Label::new(
                truncate_words(&item.name, LABEL_WORDS),
                pos,
                rotation,
                self.layout.font_pt,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::candidate::sample_set;

    fn set() -> CandidateSet {
        sample_set(["Baja Fish Tacos with Slaw", "Al Pastor", "Barbacoa", "Chorizo"])
    }

    #[test]
    fn labels_sit_at_half_radius_and_truncate() {
        let candidates = set();
        let view = WheelView::new(&candidates, Layout::LARGE, 0.0, 90.0);
        let mut text = TextState::new();
        view.labels(&mut text);

        assert_eq!(text.len(), 4);
        let first = &text.labels()[0];
        assert_eq!(first.text, "Baja Fish Tacos...");
        assert_eq!(first.font_size, 12);
        // Sector 0 spans 0°..90°; its middle at 45°, 120px out from (300, 300)
        let expected = point_at(Vec2::new(300.0, 300.0), 120.0, 45.0);
        assert!((Vec2::new(first.x, first.y) - expected).length() < 1e-3);
        assert_eq!(text.labels()[1].text, "Al Pastor...");
    }

    #[test]
    fn labels_turn_with_the_wheel() {
        let candidates = set();
        let view = WheelView::new(&candidates, Layout::SMALL, 1500.0, 90.0);
        let mut text = TextState::new();
        view.labels(&mut text);

        let first = &text.labels()[0];
        assert_eq!(first.rotation, 60.0);
        assert_eq!(first.font_size, 8);
        // Middle of sector 0 moved from 45° to -15°
        let expected = point_at(Vec2::new(150.0, 150.0), 60.0, -15.0);
        assert!((Vec2::new(first.x, first.y) - expected).length() < 1e-3);
    }

    #[test]
    fn draw_fills_every_sector_in_palette_order() {
        let candidates = set();
        let view = WheelView::new(&candidates, Layout::MEDIUM, 0.0, 90.0);
        let mut vectors = VectorState::default();
        view.draw(&mut vectors);

        assert!(vectors.vertex_count() > 0);
        assert_eq!(vectors.vertex_count() % 3, 0);
        // First vertex belongs to sector 0's fill
        let red = VectorColor::from_hex("#F87171").unwrap();
        assert_eq!(&vectors.buffer()[2..5], &[red.r, red.g, red.b]);
    }

    #[test]
    fn pointer_tip_faces_the_center() {
        let candidates = set();
        let view = WheelView::new(&candidates, Layout::LARGE, 0.0, 90.0);
        let [tip, left, right] = view.pointer_triangle();
        // Wheel center (300, 300), rim 240px out, pointer 60px wide
        assert!((tip - Vec2::new(300.0, 90.0)).length() < 1e-3);
        assert!(left.y < tip.y && right.y < tip.y);
        assert!((left.y - right.y).abs() < 1e-3);
    }
}
