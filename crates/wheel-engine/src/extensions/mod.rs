// extensions/mod.rs
//
// Optional extension modules for WheelEngine.
// Games opt in by owning these systems; the runner never ticks them.

pub mod easing;
pub mod tween;

pub use easing::{Easing, lerp, ease};
pub use tween::{TweenState, Tween, TweenId};
