use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Reload the whole page after a delay so it reflects server-side state
pub fn reload_after(delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                gloo::console::error!("Failed to reload page:", e);
            }
        }
    });
}
