//! Typed access to the parts of the WebExtension API the extension talks through:
//! the runtime message bus and the tabs namespace.
//!
//! The same bindings work in a content script, the popup page and the
//! background service worker, since the API root is looked up on the JS global
//! object rather than on `window`.

pub mod api;
pub mod error;
pub mod types;
mod utils;

pub use api::{OnMessage, Runtime, Tabs};
use error::ExtensionError;
use js_sys::Object;
pub use types::*;
use utils::get_api_namespace;
use wasm_bindgen::JsCast;

#[derive(Clone)]
pub struct Browser {
	api_root: Object,
	browser_type: BrowserType,
}

impl Browser {
	pub fn browser_type(&self) -> BrowserType {
		self.browser_type
	}

	pub fn runtime(&self) -> Result<Runtime, ExtensionError> {
		Ok(Runtime::new(get_api_namespace(&self.api_root, "runtime")?))
	}

	pub fn tabs(&self) -> Result<Tabs, ExtensionError> {
		Ok(Tabs::new(get_api_namespace(&self.api_root, "tabs")?))
	}
}

/// Locates the extension API root, preferring `chrome` and falling back to the
/// Firefox `browser` namespace.
pub fn init() -> Result<Browser, ExtensionError> {
	let global = js_sys::global();

	if let Ok(api_root) = js_sys::Reflect::get(&global, &"chrome".into()).and_then(|v| v.dyn_into::<Object>())
		&& js_sys::Reflect::has(&api_root, &"runtime".into()).unwrap_or(false)
	{
		Ok(Browser { api_root, browser_type: BrowserType::Chrome })
	} else if let Ok(api_root) = js_sys::Reflect::get(&global, &"browser".into()).and_then(|v| v.dyn_into::<Object>()) {
		Ok(Browser { api_root, browser_type: BrowserType::Firefox })
	} else {
		Err(ExtensionError::UnsupportedBrowser)
	}
}
