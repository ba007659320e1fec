pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Resolves the runtime config, then mounts the app.
#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("starting tienda frontend");

    wasm_bindgen_futures::spawn_local(async {
        let config = config::load().await;
        leptos::mount_to_body(move || router::app_root(config));
    });
}
