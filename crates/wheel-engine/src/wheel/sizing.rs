//! Responsive sizing: viewport width → coupled presentation parameters.
//!
//! Wheel size, label font size and hit-test tolerance always come from the
//! same breakpoint row so text and pointer tolerance stay proportional to the
//! wheel.

use std::fmt;

/// One row of the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    /// Row applies when the viewport is strictly wider than this.
    pub min_width_exclusive: f32,
    pub layout: Layout,
}

/// Presentation parameters for one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Wheel (chart) edge length in pixels.
    pub wheel_px: u32,
    /// Label font size in points.
    pub font_pt: u32,
    /// Minimum pointer/sector overlap in pixels for a hit.
    pub threshold_px: u32,
}

impl Layout {
    pub const LARGE: Layout = Layout { wheel_px: 600, font_pt: 12, threshold_px: 30 };
    pub const MEDIUM: Layout = Layout { wheel_px: 400, font_pt: 10, threshold_px: 20 };
    pub const SMALL: Layout = Layout { wheel_px: 300, font_pt: 8, threshold_px: 10 };

    /// Look up a single parameter.
    pub fn param(&self, param: SizingParam) -> SizingValue {
        match param {
            SizingParam::Wheel => SizingValue::Wheel(self.wheel_px),
            SizingParam::FontSize => SizingValue::FontSize(self.font_pt),
            SizingParam::Threshold => SizingValue::Threshold(self.threshold_px),
        }
    }

    /// Threshold in CSS notation, e.g. `"30px"`.
    pub fn threshold_css(&self) -> String {
        self.param(SizingParam::Threshold).to_string()
    }
}

/// Which presentation parameter to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingParam {
    Wheel,
    FontSize,
    Threshold,
}

/// A looked-up parameter. Displays the way the page consumes it: wheel and
/// font size as bare numbers, the threshold with a `px` suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingValue {
    Wheel(u32),
    FontSize(u32),
    Threshold(u32),
}

impl SizingValue {
    pub fn value(self) -> u32 {
        match self {
            SizingValue::Wheel(v) | SizingValue::FontSize(v) | SizingValue::Threshold(v) => v,
        }
    }
}

impl fmt::Display for SizingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingValue::Wheel(v) | SizingValue::FontSize(v) => write!(f, "{}", v),
            SizingValue::Threshold(v) => write!(f, "{}px", v),
        }
    }
}

/// Ordered breakpoint table, widest tier first.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingPolicy {
    tiers: Vec<Breakpoint>,
    fallback: Layout,
}

impl SizingPolicy {
    /// Build a policy from tiers (any order) and the layout used below all of them.
    pub fn new(mut tiers: Vec<Breakpoint>, fallback: Layout) -> Self {
        tiers.sort_by(|a, b| b.min_width_exclusive.total_cmp(&a.min_width_exclusive));
        Self { tiers, fallback }
    }

    /// The coupled parameters for a viewport width.
    pub fn layout(&self, width: f32) -> Layout {
        self.tiers
            .iter()
            .find(|tier| width > tier.min_width_exclusive)
            .map(|tier| tier.layout)
            .unwrap_or(self.fallback)
    }

    pub fn calc(&self, width: f32, param: SizingParam) -> SizingValue {
        self.layout(width).param(param)
    }
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self::new(
            vec![
                Breakpoint { min_width_exclusive: 1150.0, layout: Layout::LARGE },
                Breakpoint { min_width_exclusive: 800.0, layout: Layout::MEDIUM },
            ],
            Layout::SMALL,
        )
    }
}

/// Look up one parameter in the default breakpoint table.
pub fn calc_size(width: f32, param: SizingParam) -> SizingValue {
    SizingPolicy::default().calc(width, param)
}
