//! The wheel domain: candidates, sizing, geometry, spin resolution and drawing.

pub mod acquire;
pub mod candidate;
pub mod geometry;
pub mod resolver;
pub mod sizing;
pub mod view;

pub use acquire::{acquire, ItemSource, RandomItem};
pub use candidate::{CandidateItem, CandidateSet, ItemId, Palette, CANDIDATE_COUNT, DEFAULT_PALETTE};
pub use geometry::{ArcHitTest, HitTest, Pointer, SectorArc};
pub use resolver::{SpinConfig, SpinPhase, SpinResolver, SpinStart};
pub use sizing::{calc_size, Breakpoint, Layout, SizingParam, SizingPolicy, SizingValue};
pub use view::WheelView;
