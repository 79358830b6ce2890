use crate::api::types::GameEvent;
use crate::core::viewport::Viewport;
use crate::input::queue::InputQueue;
use crate::systems::rng::Rng;
use crate::systems::text::TextState;
use crate::systems::vector::VectorState;
use crate::wheel::candidate::{CandidateItem, CandidateSet, Palette};
use crate::wheel::resolver::SpinConfig;
use crate::wheel::sizing::{Layout, SizingPolicy};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of vector vertices per frame (default: 16384).
    pub max_vector_vertices: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Seed for the spin RNG. 0 seeds from the host clock.
    pub rng_seed: u64,
    /// Endpoint returning one random item per request. `None` disables acquisition.
    pub feed_url: Option<&'static str>,
    /// Sector colors in acquisition order.
    pub palette: Palette,
    pub spin: SpinConfig,
    pub sizing: SizingPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_vector_vertices: 16384,
            max_events: 32,
            rng_seed: 0,
            feed_url: None,
            palette: Palette::default(),
            spin: SpinConfig::default(),
            sizing: SizingPolicy::default(),
        }
    }
}

/// The core contract every wheel game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. React to input, advance animations, settle spins.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Optional read-only render pass.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// The acquired candidates arrived. Called at most once.
    fn on_candidates(&mut self, ctx: &mut EngineContext, candidates: CandidateSet);

    /// Whether the wheel can be spun.
    fn is_ready(&self) -> bool;

    /// The most recent winner, if any spin has settled.
    fn winner(&self) -> Option<&CandidateItem> {
        None
    }

    /// Current visual rotation of the wheel in degrees.
    fn rotation_deg(&self) -> f32 {
        0.0
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub viewport: Viewport,
    pub sizing: SizingPolicy,
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    /// Fixed step length in seconds.
    pub dt: f32,
    /// The game's spin tunables, as reported by `Game::config`.
    pub spin: SpinConfig,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default(), 42)
    }

    /// Create a context for `config`, seeding the RNG with `seed`.
    pub fn from_config(config: &GameConfig, seed: u64) -> Self {
        Self {
            viewport: Viewport::default(),
            sizing: config.sizing.clone(),
            rng: Rng::new(seed),
            events: Vec::with_capacity(config.max_events),
            dt: config.fixed_dt,
            spin: config.spin,
            max_events: config.max_events,
        }
    }

    /// The coupled presentation parameters for the current viewport.
    pub fn layout(&self) -> Layout {
        self.sizing.layout(self.viewport.width)
    }

    /// Emit a game event to be forwarded to the host.
    /// Events past the per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("events: dropping kind {} past capacity {}", event.kind, self.max_events);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the game's draw pass.
pub struct RenderContext<'a> {
    pub vectors: &'a mut VectorState,
    pub text: &'a mut TextState,
    pub layout: Layout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_follows_viewport() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.layout(), Layout::SMALL);
        ctx.viewport = Viewport::new(1200.0, 900.0);
        assert_eq!(ctx.layout(), Layout::LARGE);
    }

    #[test]
    fn context_carries_spin_config() {
        let spin = SpinConfig { min_delta_deg: 360, max_delta_deg: 720, ..SpinConfig::default() };
        let config = GameConfig { spin, ..GameConfig::default() };
        let ctx = EngineContext::from_config(&config, 3);
        assert_eq!(ctx.spin, spin);
        assert_eq!(ctx.dt, config.fixed_dt);
    }

    #[test]
    fn events_past_capacity_are_dropped() {
        let config = GameConfig { max_events: 2, ..GameConfig::default() };
        let mut ctx = EngineContext::from_config(&config, 7);
        for kind in 0..5 {
            ctx.emit_event(GameEvent::signal(kind));
        }
        assert_eq!(ctx.events.len(), 2);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
