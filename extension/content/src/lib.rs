mod dom;

use {
	common::{
		ToContentScript, ToPopup,
		extract::{Extractor, OccurrencePage},
		is_occurrence_page,
		poll::PollPolicy,
	},
	dioxus::logger::tracing::{debug, error, info},
	gloo_timers::future::TimeoutFuture,
	std::time::Duration,
	wasm_bindgen::prelude::*,
	wasm_bindgen_futures::spawn_local,
	webext_api::error::ExtensionError,
};

pub use dom::LiveDocument;

fn sleep(duration: Duration) -> TimeoutFuture {
	TimeoutFuture::new(u32::try_from(duration.as_millis()).unwrap_or(u32::MAX))
}

/// Polls the page once and forwards whatever it finds to the popup.
async fn extract_and_emit() {
	let page = match LiveDocument::current() {
		Ok(page) => page,
		Err(e) => {
			error!("[content_script] {e}");
			return;
		},
	};
	let Some(page_data) = Extractor::new(page, PollPolicy::default()).run(sleep).await else {
		return;
	};

	let runtime = match webext_api::init().and_then(|browser| browser.runtime()) {
		Ok(runtime) => runtime,
		Err(e) => {
			error!("[content_script] runtime unavailable: {e}");
			return;
		},
	};
	match runtime.send_message::<_, ()>(&ToPopup::UpdateGbifData(page_data)).await {
		Ok(()) => info!("[content_script] Sent GBIF data to popup"),
		// Nobody listens unless the popup is open.
		Err(ExtensionError::NoReceiver(_)) => debug!("[content_script] popup closed, record dropped"),
		Err(e) => error!("[content_script] Failed to send GBIF data: {e}"),
	}
}

fn listen_for_requests() -> Result<(), ExtensionError> {
	let handle = webext_api::init()?.runtime()?.on_message::<ToContentScript>()?.add_listener_with_response(|ToContentScript::RequestData, _| {
		info!("[content_script] Received data request");
		spawn_local(extract_and_emit());
		async { true }
	})?;
	handle.keep_alive();
	Ok(())
}

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	dioxus::logger::initialize_default();

	match LiveDocument::current() {
		Ok(page) if is_occurrence_page(&page.location()) => spawn_local(extract_and_emit()),
		Ok(page) => debug!("[content_script] {} is not an occurrence page", page.location()),
		Err(e) => error!("[content_script] {e}"),
	}

	if let Err(e) = listen_for_requests() {
		error!("[content_script] Failed to register message listener: {e}");
	}
}
