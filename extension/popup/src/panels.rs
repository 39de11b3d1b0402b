use {
	crate::ask_background,
	common::{
		AppError, ToBackground,
		links::arcgis_viewer_url,
		services::{GeocodeQuery, GeocodedLocation, LocationContext},
	},
	dioxus::{logger::tracing::error, prelude::*},
};

#[derive(Clone, PartialEq)]
enum Lookup<T> {
	Idle,
	Loading,
	Done(Result<T, AppError>),
}

async fn geocode(term: String) -> Result<GeocodedLocation, AppError> {
	let query = GeocodeQuery::new(term)?;
	ask_background(ToBackground::Geocode(query)).await?.into_location()
}

async fn describe(context: LocationContext) -> Result<String, AppError> {
	ask_background(ToBackground::DescribeLocation(context)).await?.into_narrative()
}

/// Free-text place search, resolved by the background worker's geocoder.
#[component]
pub fn SearchPanel() -> Element {
	let mut term = use_signal(String::new);
	let mut lookup = use_signal(|| Lookup::<GeocodedLocation>::Idle);

	let on_search = move |_| async move {
		lookup.set(Lookup::Loading);
		let result = geocode(term()).await;
		if let Err(e) = &result {
			error!("[popup] geocoding failed: {e}");
		}
		lookup.set(Lookup::Done(result));
	};

	rsx! {
		div { class: "panel",
			h2 { "Search location" }
			input {
				id: "search-bar",
				placeholder: "Place name",
				value: "{term}",
				oninput: move |event| term.set(event.value()),
			}
			button { disabled: matches!(lookup(), Lookup::Loading), onclick: on_search, "Search" }
			match lookup() {
				Lookup::Idle => rsx! {},
				Lookup::Loading => rsx! {
					p { class: "muted", "Searching..." }
				},
				Lookup::Done(Ok(location)) => {
					let coordinates = format!("{:.6}, {:.6}", location.coordinates.latitude, location.coordinates.longitude);
					let map_url = arcgis_viewer_url(location.coordinates, None).ok().map(String::from);
					rsx! {
						p {
							"{location.label}: {coordinates} "
							if let Some(map_url) = map_url {
								a { href: "{map_url}", target: "_blank", rel: "noopener", "Open map" }
							}
						}
					}
				},
				Lookup::Done(Err(e)) => rsx! {
					p { class: "error", "{e}" }
				},
			}
		}
	}
}

/// Background narrative for the record's place and date. Disabled until all
/// three are known.
#[component]
pub fn SocioeconomicPanel(context: Option<LocationContext>) -> Element {
	let mut lookup = use_signal(|| Lookup::<String>::Idle);
	let available = context.is_some();

	let on_describe = move |_| {
		let context = context.clone();
		async move {
			let Some(context) = context else {
				lookup.set(Lookup::Done(Err(AppError::MissingLocationContext)));
				return;
			};
			lookup.set(Lookup::Loading);
			let result = describe(context).await;
			if let Err(e) = &result {
				error!("[popup] socioeconomic lookup failed: {e}");
			}
			lookup.set(Lookup::Done(result));
		}
	};

	rsx! {
		div { class: "panel",
			h2 { "Socioeconomic background" }
			button { disabled: !available || matches!(lookup(), Lookup::Loading), onclick: on_describe, "Describe this place and time" }
			match lookup() {
				Lookup::Idle if !available => rsx! {
					p { class: "muted", "Needs a date, latitude and longitude." }
				},
				Lookup::Idle => rsx! {},
				Lookup::Loading => rsx! {
					p { class: "muted", "Asking Gemini..." }
				},
				Lookup::Done(Ok(text)) => rsx! {
					p { class: "narrative", "{text}" }
				},
				Lookup::Done(Err(e)) => rsx! {
					p { class: "error", "{e}" }
				},
			}
		}
	}
}
