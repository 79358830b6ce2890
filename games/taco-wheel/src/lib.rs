use wasm_bindgen::prelude::*;
use wheel_engine::*;

mod game;
use game::TacoWheel;

wheel_web::export_game!(TacoWheel, "taco-wheel", spin = game::CUSTOM_SPIN);
