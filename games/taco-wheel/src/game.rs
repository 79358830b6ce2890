use wheel_engine::*;

/// Random taco recipe endpoint; one base layer per request.
const FEED_URL: &str = "https://taco-randomizer.herokuapp.com/random/";

// Game event kinds (Rust → page)
pub const EVENT_READY: f32 = 1.0;
pub const EVENT_SPIN_STARTED: f32 = 2.0;
pub const EVENT_WINNER: f32 = 3.0;
pub const EVENT_SPIN_REJECTED: f32 = 4.0;

// Custom event kinds (page → Rust)
pub const CUSTOM_SPIN: u32 = 1;

// Tween completion id of the spin animation
const SPIN_SETTLED: u32 = 1;

/// The Wheel of Taco: four random base layers, spin to pick dinner.
pub struct TacoWheel {
    spin: SpinConfig,
    resolver: SpinResolver,
    tweens: TweenState,
    /// Visual rotation in degrees, driven by the spin tween.
    rotation: f32,
}

impl TacoWheel {
    pub fn new() -> Self {
        Self::with_spin(SpinConfig::default())
    }

    /// A wheel with custom spin tunables.
    pub fn with_spin(spin: SpinConfig) -> Self {
        Self {
            spin,
            resolver: SpinResolver::new(spin),
            tweens: TweenState::new(),
            rotation: 0.0,
        }
    }

    fn spin(&mut self, ctx: &mut EngineContext) {
        match self.resolver.begin_spin(&mut ctx.rng) {
            Ok(start) => {
                let tween = start.tween(self.resolver.config()).with_on_complete(SPIN_SETTLED);
                self.tweens.add(tween);
                // Target split into rest angle and whole turns to stay exact in f32
                ctx.emit_event(GameEvent {
                    kind: EVENT_SPIN_STARTED,
                    a: start.delta as f32,
                    b: (start.target % 360) as f32,
                    c: (start.target / 360) as f32,
                });
            }
            Err(err) => {
                log::warn!("taco-wheel: spin rejected: {}", err);
                ctx.emit_event(GameEvent { kind: EVENT_SPIN_REJECTED, a: err.code() as f32, b: 0.0, c: 0.0 });
            }
        }
    }

    fn settle(&mut self, ctx: &mut EngineContext) {
        let layout = ctx.layout();
        match self.resolver.settle(&layout) {
            Ok(Some(winner)) => {
                let index = winner.id.0 as f32;
                ctx.emit_event(GameEvent { kind: EVENT_WINNER, a: index, b: 0.0, c: 0.0 });
            }
            Ok(None) => {}
            Err(err) => log::warn!("taco-wheel: settle ignored: {}", err),
        }
    }
}

impl Default for TacoWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TacoWheel {
    fn config(&self) -> GameConfig {
        GameConfig {
            feed_url: Some(FEED_URL),
            spin: self.spin,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.resolver = SpinResolver::new(ctx.spin);
        log::info!("taco-wheel: loading candidates");
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::Custom { kind: CUSTOM_SPIN, .. } = event {
                self.spin(ctx);
            }
        }

        let rotation = &mut self.rotation;
        self.tweens.tick(ctx.dt, |_, value| *rotation = value);

        let settled: Vec<u32> = self.tweens.drain_completed().collect();
        if settled.contains(&SPIN_SETTLED) {
            self.settle(ctx);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        let Some(candidates) = self.resolver.candidates() else {
            return;
        };
        let view = WheelView::new(candidates, ctx.layout, self.rotation, self.resolver.config().pointer_angle_deg);
        view.draw(ctx.vectors);
        view.labels(ctx.text);
    }

    fn on_candidates(&mut self, ctx: &mut EngineContext, candidates: CandidateSet) {
        self.resolver.load(candidates);
        ctx.emit_event(GameEvent { kind: EVENT_READY, a: 0.0, b: 0.0, c: 0.0 });
    }

    fn is_ready(&self) -> bool {
        self.resolver.is_ready()
    }

    fn winner(&self) -> Option<&CandidateItem> {
        self.resolver.winner()
    }

    fn rotation_deg(&self) -> f32 {
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheel_web::GameRunner;

    const FRAME: f32 = 1.0 / 60.0;

    fn candidates() -> CandidateSet {
        let names = ["Carnitas", "Al Pastor", "Barbacoa", "Chorizo"];
        let items = names
            .iter()
            .enumerate()
            .map(|(i, name)| CandidateItem {
                id: ItemId(i as u32),
                name: name.to_string(),
                url: format!("https://recipes.test/{}", i),
                weight: 1,
                color: DEFAULT_PALETTE.color(i),
            })
            .collect();
        CandidateSet::new(items).unwrap()
    }

    fn spin(runner: &mut GameRunner<TacoWheel>) {
        runner.push_input(InputEvent::Custom { kind: CUSTOM_SPIN, a: 0.0, b: 0.0, c: 0.0 });
    }

    /// Tick `frames` frames and collect every event emitted.
    fn run(runner: &mut GameRunner<TacoWheel>, frames: usize) -> Vec<GameEvent> {
        let mut events = Vec::new();
        for _ in 0..frames {
            runner.tick(FRAME);
            events.extend_from_slice(runner.game_events());
        }
        events
    }

    fn ready_runner() -> GameRunner<TacoWheel> {
        let mut runner = GameRunner::with_seed(TacoWheel::new(), 1234);
        runner.init();
        runner.resize(1280.0, 800.0);
        runner.publish_candidates(candidates());
        let events = run(&mut runner, 1);
        assert_eq!(events[0].kind, EVENT_READY);
        runner
    }

    #[test]
    fn config_points_at_the_taco_feed() {
        let config = TacoWheel::new().config();
        assert_eq!(config.feed_url, Some(FEED_URL));
        assert_eq!(config.palette, DEFAULT_PALETTE);
    }

    #[test]
    fn spin_before_ready_is_rejected() {
        let mut runner = GameRunner::with_seed(TacoWheel::new(), 1);
        runner.init();
        spin(&mut runner);
        let events = run(&mut runner, 1);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EVENT_SPIN_REJECTED);
        assert_eq!(events[0].a, SpinError::NotReady.code() as f32);
        assert_eq!(runner.labels_json(), "[]");
    }

    #[test]
    fn spin_settles_on_one_winner() {
        let mut runner = ready_runner();
        spin(&mut runner);
        let events = run(&mut runner, 90);

        let started: Vec<_> = events.iter().filter(|e| e.kind == EVENT_SPIN_STARTED).collect();
        assert_eq!(started.len(), 1);
        assert!((1080.0..=1800.0).contains(&started[0].a));
        assert_eq!(started[0].c * 360.0 + started[0].b, started[0].a);

        let winners: Vec<_> = events.iter().filter(|e| e.kind == EVENT_WINNER).collect();
        assert_eq!(winners.len(), 1);

        // The wheel rests where the resolver says it does
        let rest = started[0].b as u64;
        assert_eq!(runner.rotation() as u64 % 360, rest);

        // With four quarters and the pointer at 90°, the winner's wedge holds
        // 90° + rest; on a boundary the lower of the two neighbors wins
        let upper = ((90 + rest) % 360) / 90;
        let expected = if (90 + rest) % 90 == 0 { upper.min((upper + 3) % 4) } else { upper };
        assert_eq!(winners[0].a, expected as f32);
        let name = runner.winner_name().unwrap();
        assert_eq!(Some(name.as_str()), ["Carnitas", "Al Pastor", "Barbacoa", "Chorizo"].get(winners[0].a as usize).copied());
    }

    #[test]
    fn second_spin_during_flight_is_rejected() {
        let mut runner = ready_runner();
        spin(&mut runner);
        let first = run(&mut runner, 10);
        spin(&mut runner);
        let second = run(&mut runner, 1);

        assert!(first.iter().any(|e| e.kind == EVENT_SPIN_STARTED));
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].kind, EVENT_SPIN_REJECTED);
        assert_eq!(second[0].a, SpinError::InFlight.code() as f32);
    }

    #[test]
    fn repeated_spins_accumulate_rotation() {
        let mut runner = ready_runner();
        let mut total = 0u64;
        for _ in 0..3 {
            spin(&mut runner);
            let events = run(&mut runner, 90);
            let started = events.iter().find(|e| e.kind == EVENT_SPIN_STARTED).unwrap();
            total += started.a as u64;
            assert_eq!(started.b as u64, total % 360);
            assert_eq!(started.c as u64, total / 360);
            assert!(events.iter().any(|e| e.kind == EVENT_WINNER));
        }
    }

    #[test]
    fn custom_spin_config_drives_the_spin() {
        let tunables = SpinConfig {
            min_delta_deg: 405,
            max_delta_deg: 405,
            duration_secs: 0.25,
            ..SpinConfig::default()
        };
        let mut runner = GameRunner::with_seed(TacoWheel::with_spin(tunables), 77);
        runner.init();
        runner.publish_candidates(candidates());
        run(&mut runner, 1);

        spin(&mut runner);
        let events = run(&mut runner, 20);
        let started = events.iter().find(|e| e.kind == EVENT_SPIN_STARTED).unwrap();
        assert_eq!((started.a, started.b, started.c), (405.0, 45.0, 1.0));
        // A quarter-second spin settles well inside 20 frames; sector 1 holds the pointer at 45°
        let winner = events.iter().find(|e| e.kind == EVENT_WINNER).unwrap();
        assert_eq!(winner.a, 1.0);
    }

    #[test]
    fn ready_wheel_renders_sectors_and_labels() {
        let runner = ready_runner();
        assert!(runner.is_ready());
        assert_eq!(runner.wheel_size(), 600);
        assert_eq!(runner.hit_threshold(), "30px");
        assert!(runner.vector_vertex_count() > 0);
        assert!(runner.labels_json().contains(r#""text":"Al Pastor...""#));
        assert!(runner.labels_json().contains(r#""font_size":12"#));
    }
}
