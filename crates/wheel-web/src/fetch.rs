//! Browser-side item acquisition over `fetch`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use wheel_engine::wheel::acquire;
use wheel_engine::{AcquireError, CandidateSet, ItemSource, Palette, RandomItem};

/// Fetches one random item per request from a JSON endpoint.
pub struct FetchSource {
    url: String,
}

impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn transport(value: JsValue) -> AcquireError {
    AcquireError::Transport(format!("{:?}", value))
}

impl ItemSource for FetchSource {
    async fn next_item(&mut self) -> Result<RandomItem, AcquireError> {
        let window = web_sys::window().ok_or_else(|| AcquireError::Transport("no window".into()))?;
        let value = JsFuture::from(window.fetch_with_str(&self.url)).await.map_err(transport)?;
        let response: Response = value.dyn_into().map_err(transport)?;
        if !response.ok() {
            return Err(AcquireError::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(transport)?).await.map_err(transport)?;
        let text = body
            .as_string()
            .ok_or_else(|| AcquireError::Transport("response body is not text".into()))?;
        RandomItem::from_json(&text)
    }
}

/// Run acquisition to completion and hand a finished set to `on_ready`.
/// Returns whether the set was delivered.
pub async fn run_acquisition<S, F>(mut source: S, palette: Palette, on_ready: F) -> bool
where
    S: ItemSource,
    F: FnOnce(CandidateSet),
{
    match acquire(&mut source, &palette).await {
        Ok(candidates) => {
            log::info!("acquisition: wheel ready");
            on_ready(candidates);
            true
        }
        Err(err) => {
            log::error!("acquisition failed: {}", err);
            false
        }
    }
}

/// Spawn acquisition on the browser event loop.
pub fn start_acquisition<S, F>(source: S, palette: Palette, on_ready: F)
where
    S: ItemSource + 'static,
    F: FnOnce(CandidateSet) + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        run_acquisition(source, palette, on_ready).await;
    });
}
