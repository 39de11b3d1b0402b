mod services;

use {
	common::{Config, ToBackground},
	services::Services,
	std::rc::Rc,
	wasm_bindgen::prelude::*,
};

/// Endpoints and keys baked in by `build.rs`.
fn build_config() -> Config {
	Config::builder()
		.geocoder_url(env!("GEOCODER_URL"))
		.geocoder_api_key(env!("GEOCODER_API_KEY"))
		.gemini_url(env!("GEMINI_URL"))
		.gemini_api_key(env!("GEMINI_API_KEY"))
		.build()
}

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let browser = match webext_api::init() {
		Ok(b) => b,
		Err(e) => {
			log::error!("[background] Failed to initialize: {e}");
			return;
		},
	};

	log::info!("[background] Starting in {:?}", browser.browser_type());

	let listener = match browser.runtime().and_then(|runtime| runtime.on_message::<ToBackground>()) {
		Ok(l) => l,
		Err(e) => {
			log::error!("[background] Failed to get listener: {e}");
			return;
		},
	};

	let services = Rc::new(Services::new(build_config()));
	match listener.add_listener_with_response(move |request, _| {
		let services = Rc::clone(&services);
		async move { services.handle(request).await }
	}) {
		Ok(handle) => handle.keep_alive(),
		Err(e) => log::error!("[background] Failed to attach listener: {e}"),
	}
}
