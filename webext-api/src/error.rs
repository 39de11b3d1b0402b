use thiserror::Error;
use wasm_bindgen::{JsCast, prelude::*};

#[derive(Error, Debug)]
pub enum ExtensionError {
	#[error("The `{0}` API is not available in this context.")]
	ApiNotFound(String),

	#[error("Could not find the active tab.")]
	TabNotFound,

	#[error("The active tab has no {0}.")]
	TabIncomplete(&'static str),

	#[error("This browser is not supported or no extension API was found.")]
	UnsupportedBrowser,

	#[error("No context is listening for this message: {0}")]
	NoReceiver(String),

	#[error("Failed to serialize or deserialize data: {0}")]
	SerializationError(#[from] serde_wasm_bindgen::Error),

	#[error("The browser API returned an error: {0}")]
	ApiError(String),

	#[error("A JavaScript error occurred: {message}")]
	JsError { message: String, js_value: JsValue },

	#[error("An unexpected JavaScript value was thrown: {0:?}")]
	JsValue(JsValue),
}

// Chrome and Firefox word this differently; both mean the other end never attached a listener.
const NO_RECEIVER_MARKERS: [&str; 2] = ["Receiving end does not exist", "Could not establish connection"];

impl From<JsValue> for ExtensionError {
	fn from(js_val: JsValue) -> Self {
		if let Some(obj) = js_val.dyn_ref::<js_sys::Object>()
			&& let Ok(message_val) = js_sys::Reflect::get(obj, &"message".into())
			&& let Some(message) = message_val.as_string()
		{
			if NO_RECEIVER_MARKERS.iter().any(|marker| message.contains(marker)) {
				return Self::NoReceiver(message);
			}
			return Self::ApiError(message);
		}

		if let Some(e) = js_val.dyn_ref::<js_sys::Error>() {
			Self::JsError { message: e.message().into(), js_value: js_val }
		} else {
			Self::JsValue(js_val)
		}
	}
}
