pub mod fetch;
pub mod runner;

pub use fetch::{run_acquisition, start_acquisition, FetchSource};
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a wheel game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, game_resize, game_spin, header and data accessors)
///
/// `game_init` also starts acquisition when the game's config names a feed URL.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use wheel_engine::*;
///
/// mod game;
/// use game::MyWheel;
///
/// wheel_web::export_game!(MyWheel, "my-wheel", spin = game::CUSTOM_SPIN);
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `wheel_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
/// - `$spin_kind`: Custom input kind pushed by `game_spin()`
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal, spin = $spin_kind:expr) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            let (feed_url, palette) = with_runner(|r| {
                r.init();
                (r.feed_url(), r.palette())
            });
            log::info!("{}: initialized", $game_name);

            if let Some(url) = feed_url {
                $crate::start_acquisition($crate::FetchSource::new(url), palette, |candidates| {
                    with_runner(|r| r.publish_candidates(candidates));
                });
            }
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn game_spin() {
            with_runner(|r| r.push_input(InputEvent::Custom { kind: $spin_kind, a: 0.0, b: 0.0, c: 0.0 }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vector_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertex_count() -> u32 {
            with_runner(|r| r.vector_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_vector_vertices() -> u32 {
            with_runner(|r| r.max_vector_vertices())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }

        // ---- Wheel accessors ----

        #[wasm_bindgen]
        pub fn is_ready() -> bool {
            with_runner(|r| r.is_ready())
        }

        #[wasm_bindgen]
        pub fn get_wheel_size() -> u32 {
            with_runner(|r| r.wheel_size())
        }

        #[wasm_bindgen]
        pub fn get_font_size() -> u32 {
            with_runner(|r| r.font_size())
        }

        #[wasm_bindgen]
        pub fn get_hit_threshold() -> String {
            with_runner(|r| r.hit_threshold())
        }

        #[wasm_bindgen]
        pub fn get_rotation() -> f32 {
            with_runner(|r| r.rotation())
        }

        #[wasm_bindgen]
        pub fn get_labels_json() -> String {
            with_runner(|r| r.labels_json().to_string())
        }

        #[wasm_bindgen]
        pub fn get_winner_name() -> Option<String> {
            with_runner(|r| r.winner_name())
        }

        #[wasm_bindgen]
        pub fn get_winner_url() -> Option<String> {
            with_runner(|r| r.winner_url())
        }
    };
}
