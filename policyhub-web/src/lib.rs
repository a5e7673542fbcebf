#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod logger;
pub mod pages;
pub mod paths;
pub mod router;
pub mod services;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(logger::default_level());
    log::info!("Using policy API at {}", paths::api_base());
    yew::Renderer::<app::App>::new().render();
}
