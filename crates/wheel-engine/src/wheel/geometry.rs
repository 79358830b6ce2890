//! Sector geometry and pointer hit-testing.
//!
//! Angles are degrees, counter-clockwise from 3 o'clock (math convention).
//! Wheel rotation is clockwise on screen, so rotating by `r` subtracts `r`
//! from every sector angle. Screen space is Y-down; [`point_at`] does the flip.

use glam::Vec2;

/// Outer radius as a fraction of half the wheel's edge length.
pub const OUTER_RADIUS_RATIO: f32 = 0.8;
/// Pointer width as a fraction of the wheel's edge length.
pub const POINTER_WIDTH_RATIO: f32 = 0.1;
/// Where the pointer sits: 12 o'clock.
pub const POINTER_ANGLE_DEG: f32 = 90.0;

/// Slack for comparing f32 overlaps (px) and mid-angle distances (deg). A
/// wheel resting on a boundary gives both neighbors the same overlap up to
/// rounding; within this slack they count as equal so the tie-break decides.
const EPSILON: f32 = 1e-3;

/// Wrap an angle into [0, 360).
pub fn normalize_deg(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 { 0.0 } else { a }
}

/// Shortest signed rotation from `from` to `to`, in (-180, 180].
pub fn signed_delta_deg(from: f32, to: f32) -> f32 {
    let d = normalize_deg(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Unsigned shortest angular distance, in [0, 180].
pub fn angular_distance(a: f32, b: f32) -> f32 {
    signed_delta_deg(a, b).abs()
}

/// Screen-space point at `radius` and `angle_deg` around `center`.
pub fn point_at(center: Vec2, radius: f32, angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

/// Outer radius of the wheel for a given edge length.
pub fn outer_radius(wheel_px: u32) -> f32 {
    wheel_px as f32 * 0.5 * OUTER_RADIUS_RATIO
}

fn interval_overlap(a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

/// One annular wedge of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorArc {
    pub start_deg: f32,
    pub end_deg: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
}

impl SectorArc {
    pub fn span_deg(&self) -> f32 {
        self.end_deg - self.start_deg
    }

    pub fn mid_deg(&self) -> f32 {
        self.start_deg + self.span_deg() * 0.5
    }

    /// The same wedge after the wheel turns `clockwise_deg`.
    pub fn rotated(&self, clockwise_deg: f32) -> Self {
        Self {
            start_deg: self.start_deg - clockwise_deg,
            end_deg: self.end_deg - clockwise_deg,
            ..*self
        }
    }

    /// Whether the ray at `angle_deg` passes through this wedge (start inclusive).
    pub fn contains_angle(&self, angle_deg: f32) -> bool {
        normalize_deg(angle_deg - self.start_deg) < self.span_deg()
    }

    /// Degrees of this wedge inside the window `center_deg ± half_deg`.
    pub fn overlap_deg(&self, center_deg: f32, half_deg: f32) -> f32 {
        let rel_start = normalize_deg(self.start_deg - center_deg);
        let rel_end = rel_start + self.span_deg();
        // The window repeats every turn; a wedge can reach into at most three copies.
        (0..3)
            .map(|turn| {
                let c = turn as f32 * 360.0;
                interval_overlap(rel_start, rel_end, c - half_deg, c + half_deg)
            })
            .sum()
    }

    /// Whether a point at `radius` lies within this wedge's ring, padded by `slack`.
    pub fn reaches(&self, radius: f32, slack: f32) -> bool {
        radius >= self.inner_radius - slack && radius <= self.outer_radius + slack
    }

    /// Closed outline in screen space, with arc segments no longer than `max_step_deg`.
    pub fn outline(&self, center: Vec2, max_step_deg: f32) -> Vec<Vec2> {
        let span = self.span_deg();
        let steps = (span / max_step_deg.max(0.1)).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps * 2 + 2);

        for i in 0..=steps {
            let a = self.start_deg + span * i as f32 / steps as f32;
            points.push(point_at(center, self.outer_radius, a));
        }
        if self.inner_radius > 0.0 {
            for i in (0..=steps).rev() {
                let a = self.start_deg + span * i as f32 / steps as f32;
                points.push(point_at(center, self.inner_radius, a));
            }
        } else {
            points.push(center);
        }
        points
    }
}

/// Pie layout: wedges proportional to `weights`, from 0° counter-clockwise to 360°.
/// An all-zero weight list yields no wedges.
pub fn layout_sectors(weights: &[u32], inner_radius: f32, outer_radius: f32) -> Vec<SectorArc> {
    let total: u64 = weights.iter().map(|&w| w as u64).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut acc = 0u64;
    weights
        .iter()
        .map(|&w| {
            let start = 360.0 * acc as f32 / total as f32;
            acc += w as u64;
            let end = 360.0 * acc as f32 / total as f32;
            SectorArc { start_deg: start, end_deg: end, inner_radius, outer_radius }
        })
        .collect()
}

/// Wedges of a wheel with edge length `wheel_px`, turned clockwise by `rotation_deg`.
pub fn wheel_sectors(weights: &[u32], wheel_px: u32, rotation_deg: f32) -> Vec<SectorArc> {
    layout_sectors(weights, 0.0, outer_radius(wheel_px))
        .into_iter()
        .map(|s| s.rotated(rotation_deg))
        .collect()
}

/// The fixed marker the winning sector must line up with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub angle_deg: f32,
    /// Distance of the pointer tip from the wheel center.
    pub radius: f32,
    /// Tip width in pixels, measured along the rim.
    pub width: f32,
}

impl Pointer {
    /// Pointer on the rim of a wheel with edge length `wheel_px`.
    pub fn for_wheel(wheel_px: u32, angle_deg: f32) -> Self {
        Self {
            angle_deg,
            radius: outer_radius(wheel_px),
            width: wheel_px as f32 * POINTER_WIDTH_RATIO,
        }
    }

    /// Half of the pointer's width as an angle at its radius.
    pub fn half_span_deg(&self) -> f32 {
        if self.radius <= 0.0 {
            return 0.0;
        }
        (self.width * 0.5 / self.radius).to_degrees().min(179.0)
    }
}

/// Decides which rendered sector lines up with the pointer.
pub trait HitTest {
    /// Index of the winning sector, or `None` if the pointer touches nothing.
    fn hit_test(&self, sectors: &[SectorArc], pointer: &Pointer, tolerance_px: f32) -> Option<usize>;
}

/// Analytic arc-overlap hit test.
///
/// A sector hits when the pointer overlaps it by at least `tolerance_px`
/// along the rim (within [`EPSILON`]). Among hits the largest overlap wins, then the sector whose
/// middle is closest to the pointer, then the lowest index. With no hit, the
/// sector under the pointer's center line wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcHitTest;

impl HitTest for ArcHitTest {
    fn hit_test(&self, sectors: &[SectorArc], pointer: &Pointer, tolerance_px: f32) -> Option<usize> {
        let half = pointer.half_span_deg();
        let mut best: Option<(usize, f32, f32)> = None;

        for (i, sector) in sectors.iter().enumerate() {
            if !sector.reaches(pointer.radius, pointer.width) {
                continue;
            }
            let overlap_px = sector.overlap_deg(pointer.angle_deg, half).to_radians() * pointer.radius;
            if overlap_px <= EPSILON || overlap_px + EPSILON < tolerance_px {
                continue;
            }
            let distance = angular_distance(sector.mid_deg(), pointer.angle_deg);
            log::debug!("hit-test: sector {} overlap {:.1}px, {:.1}° off center", i, overlap_px, distance);

            let better = match best {
                None => true,
                Some((_, best_overlap, best_distance)) => {
                    overlap_px > best_overlap + EPSILON
                        || ((overlap_px - best_overlap).abs() <= EPSILON && distance < best_distance - EPSILON)
                }
            };
            if better {
                best = Some((i, overlap_px, distance));
            }
        }

        best.map(|(i, _, _)| i).or_else(|| {
            sectors
                .iter()
                .position(|s| s.reaches(pointer.radius, pointer.width) && s.contains_angle(pointer.angle_deg))
        })
    }
}
