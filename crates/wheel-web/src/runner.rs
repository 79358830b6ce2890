use wheel_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, FixedTimestep, ProtocolLayout,
    CandidateSet, Palette, TextState, VectorState, Viewport,
};
use wheel_engine::bridge::protocol::{
    HEADER_FLOATS, HEADER_FRAME_COUNTER, HEADER_VECTOR_VERTEX_COUNT,
    HEADER_EVENT_COUNT, HEADER_WHEEL_SIZE, HEADER_READY,
};

/// Frame counter wraps here so it stays exact as an f32.
const FRAME_COUNTER_WRAP: u32 = 1 << 24;

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `taco-wheel`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    vectors: VectorState,
    text: TextState,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// Candidates published between ticks, handed to the game on the next tick.
    pending_candidates: Option<CandidateSet>,
    labels_json: String,
    /// Shared-buffer header, rewritten at the end of every tick.
    header: [f32; HEADER_FLOATS],
    frame: u32,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let seed = match game.config().rng_seed {
            0 => clock_seed(),
            seed => seed,
        };
        Self::with_seed(game, seed)
    }

    /// Build a runner whose spin RNG starts from `seed`.
    pub fn with_seed(game: G, seed: u64) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);

        Self {
            ctx: EngineContext::from_config(&config, seed),
            vectors: VectorState::new(config.max_vector_vertices),
            text: TextState::new(),
            input: InputQueue::new(),
            game,
            timestep,
            header: layout.header(),
            frame: 0,
            layout,
            config,
            initialized: false,
            pending_candidates: None,
            labels_json: String::from("[]"),
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Queue a host resize; applied at the start of the next tick.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.input.push(InputEvent::Resize { width, height });
    }

    /// Hand over the acquired candidates. Delivered to the game on the next tick.
    pub fn publish_candidates(&mut self, candidates: CandidateSet) {
        if self.pending_candidates.is_some() || self.game.is_ready() {
            log::warn!("runner: candidates already published, ignoring");
            return;
        }
        self.pending_candidates = Some(candidates);
    }

    /// Run one frame tick: apply resizes, update game, rebuild frame buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        if let Some((width, height)) = self.input.last_resize() {
            if !self.ctx.viewport.is_known() {
                log::debug!("runner: first viewport {}x{}", width, height);
            }
            self.ctx.viewport = Viewport::new(width, height);
        }

        if let Some(candidates) = self.pending_candidates.take() {
            self.game.on_candidates(&mut self.ctx, candidates);
        }

        // Fixed timestep accumulation. Input is seen by the first step only.
        let steps = self.timestep.accumulate(dt);
        let no_input = InputQueue::new();
        for step in 0..steps {
            let input = if step == 0 { &self.input } else { &no_input };
            self.game.update(&mut self.ctx, input);
        }

        // Drain input once a step has consumed it
        if steps > 0 {
            self.input.drain();
        }

        self.vectors.clear();
        self.text.clear();
        {
            let mut render_ctx = RenderContext {
                vectors: &mut self.vectors,
                text: &mut self.text,
                layout: self.ctx.layout(),
            };
            self.game.render(&mut render_ctx);
        }

        self.labels_json = match self.text.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("runner: label serialization failed: {}", err);
                String::from("[]")
            }
        };

        self.write_header();
    }

    fn write_header(&mut self) {
        self.frame = (self.frame + 1) % FRAME_COUNTER_WRAP;
        self.header[HEADER_FRAME_COUNTER] = self.frame as f32;
        self.header[HEADER_VECTOR_VERTEX_COUNT] = self.vectors.vertex_count() as f32;
        self.header[HEADER_EVENT_COUNT] = self.ctx.events.len() as f32;
        self.header[HEADER_WHEEL_SIZE] = self.ctx.layout().wheel_px as f32;
        self.header[HEADER_READY] = if self.game.is_ready() { 1.0 } else { 0.0 };
    }

    // ---- Pointer accessors for shared buffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.vectors.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.vectors.vertex_count() as u32
    }

    pub fn vector_vertices(&self) -> &[f32] {
        self.vectors.buffer()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn game_events(&self) -> &[wheel_engine::GameEvent] {
        &self.ctx.events
    }

    // ---- Capacity accessors (read by the host via wasm_bindgen exports) ----

    pub fn max_vector_vertices(&self) -> u32 {
        self.layout.max_vector_vertices as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    // ---- Wheel state accessors ----

    pub fn is_ready(&self) -> bool {
        self.game.is_ready()
    }

    pub fn wheel_size(&self) -> u32 {
        self.ctx.layout().wheel_px
    }

    pub fn font_size(&self) -> u32 {
        self.ctx.layout().font_pt
    }

    pub fn hit_threshold(&self) -> String {
        self.ctx.layout().threshold_css()
    }

    pub fn rotation(&self) -> f32 {
        self.game.rotation_deg()
    }

    pub fn labels_json(&self) -> &str {
        &self.labels_json
    }

    pub fn winner_name(&self) -> Option<String> {
        self.game.winner().map(|w| w.name.clone())
    }

    pub fn winner_url(&self) -> Option<String> {
        self.game.winner().map(|w| w.url.clone())
    }

    pub fn feed_url(&self) -> Option<&'static str> {
        self.config.feed_url
    }

    pub fn palette(&self) -> Palette {
        self.config.palette
    }

    pub fn game(&self) -> &G {
        &self.game
    }
}

/// Seed derived from the host clock.
fn clock_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    }
}
