pub mod api;
pub mod core;
pub mod systems;
pub mod bridge;
pub mod input;
pub mod extensions;
pub mod wheel;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::GameEvent;
pub use core::time::FixedTimestep;
pub use core::viewport::Viewport;
pub use input::queue::{InputEvent, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use error::{AcquireError, SpinError};
pub use systems::rng::Rng;
pub use systems::text::{Label, TextState};
pub use systems::vector::{VectorState, VectorVertex, VectorColor};

pub use wheel::{
    CandidateItem, CandidateSet, ItemId, Palette, DEFAULT_PALETTE,
    SpinConfig, SpinPhase, SpinResolver, SpinStart,
    Layout, SizingParam, SizingPolicy, SizingValue,
    ItemSource, RandomItem, WheelView,
};

// Extensions: decoupled optional systems
pub use extensions::{Easing, lerp, ease, TweenState, Tween, TweenId};
