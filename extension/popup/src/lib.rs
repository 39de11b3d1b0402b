mod panels;

use {
	common::{
		AppError, BackgroundReply, NOT_AVAILABLE, PageData, PresenterState, RecordView, ServiceReply, ToBackground, ToContentScript, ToPopup, channel::one_shot,
		is_occurrence_page, poll::PollPolicy,
	},
	dioxus::{
		logger::tracing::{debug, error, info},
		prelude::*,
		web::{Config, launch::launch_cfg},
	},
	gloo_timers::future::TimeoutFuture,
	panels::{SearchPanel, SocioeconomicPanel},
	wasm_bindgen::prelude::*,
	webext_api::error::ExtensionError,
};

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("dioxus logger");
	launch_cfg(App, Config::default());
}

/// Asks the active tab for its record and waits for the first answer.
///
/// The listener lives only as long as this future, so anything arriving after
/// the first record, or after the window closes, is never seen.
async fn await_record() -> Result<Option<PageData>, ExtensionError> {
	let browser = webext_api::init()?;
	let (mut outbox, inbox) = one_shot::<PageData>();
	let _listener = browser.runtime()?.on_message::<ToPopup>()?.add_listener(move |ToPopup::UpdateGbifData(page), _| {
		if !outbox.deliver(page) {
			debug!("[popup] ignoring a second record");
		}
	})?;

	let tabs = browser.tabs()?;
	let tab = tabs.get_active().await?;
	let url = tab.url.ok_or(ExtensionError::TabIncomplete("url"))?;
	if !is_occurrence_page(&url) {
		debug!("[popup] {url} is not an occurrence page");
		return Ok(None);
	}
	let tab_id = tab.id.ok_or(ExtensionError::TabIncomplete("id"))?;

	let sent = tabs.send_message::<_, bool>(tab_id, &ToContentScript::RequestData).await;
	match &sent {
		Ok(_) => info!("[popup] Requested GBIF data from tab {tab_id}"),
		Err(e) => error!("[popup] Error requesting GBIF data: {e}"),
	}
	if !record_can_arrive(&sent) {
		return Ok(None);
	}

	let window = PollPolicy::default().response_window();
	Ok(inbox.recv_within(TimeoutFuture::new(u32::try_from(window.as_millis()).unwrap_or(u32::MAX))).await)
}

/// A tab without a content script will never send a record.
fn record_can_arrive(sent: &Result<bool, ExtensionError>) -> bool {
	!matches!(sent, Err(ExtensionError::NoReceiver(_)))
}

/// Sends one request to the background worker and unwraps its reply.
pub(crate) async fn ask_background(request: ToBackground) -> Result<ServiceReply, AppError> {
	let runtime = webext_api::init().and_then(|browser| browser.runtime()).map_err(|e| AppError::ExtensionError(e.to_string()))?;
	runtime.send_message::<_, BackgroundReply>(&request).await.map_err(|e| AppError::ExtensionError(e.to_string()))?
}

#[component]
fn App() -> Element {
	let mut state = use_signal(PresenterState::default);
	let mut waiting = use_signal(|| true);

	use_future(move || async move {
		let page = await_record().await.unwrap_or_else(|e| {
			error!("[popup] {e}");
			None
		});
		state.set(PresenterState::from_message(page.as_ref()));
		waiting.set(false);
	});

	rsx! {
		div { class: "popup",
			h1 { "GBIF Occurrence Data" }
			match state() {
				PresenterState::Populated(view) => rsx! {
					RecordPanel { view }
				},
				PresenterState::Empty if waiting() => rsx! {
					p { class: "muted", "Waiting for the occurrence record..." }
				},
				PresenterState::Empty => rsx! {
					p { id: "no-data", class: "muted", "No GBIF occurrence data found on this page." }
				},
			}
			SearchPanel {}
		}
	}
}

#[component]
fn RecordPanel(view: RecordView) -> Element {
	rsx! {
		div { id: "data-container",
			Slot { label: "Latitude", value: view.latitude.clone() }
			Slot { label: "Longitude", value: view.longitude.clone() }
			Slot { label: "Collection date", value: view.collection_date.clone() }
			Slot { label: "Collector", value: view.collector_name.clone() }
			div { class: "links",
				if let Some(url) = view.worldview_url.clone() {
					a { href: "{url}", target: "_blank", rel: "noopener", "NASA Worldview" }
				}
				if let Some(url) = view.arcgis_url.clone() {
					a { href: "{url}", target: "_blank", rel: "noopener", "ArcGIS map viewer" }
				}
			}
			if let Some(url) = view.roster_url.clone() {
				iframe { id: "bionomia-frame", src: "{url}", title: "Bionomia roster" }
			}
			SocioeconomicPanel { context: view.location_context.clone() }
		}
	}
}

#[component]
fn Slot(label: &'static str, value: String) -> Element {
	let class = if value == NOT_AVAILABLE { "value muted" } else { "value" };
	rsx! {
		div { class: "slot",
			span { class: "label", "{label}: " }
			span { class, "{value}" }
		}
	}
}
