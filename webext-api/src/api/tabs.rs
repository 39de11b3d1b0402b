use crate::{
	error::ExtensionError,
	types::TabInfo,
	utils::{call_async_fn, call_async_fn_and_de},
};
use js_sys::Object;
use serde::{Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::JsCast;

#[derive(Clone)]
pub struct Tabs {
	api: Object,
}

impl Tabs {
	pub(crate) fn new(api: Object) -> Self {
		Self { api }
	}

	/// The active tab of the window the caller belongs to.
	pub async fn get_active(&self) -> Result<TabInfo, ExtensionError> {
		let query = Object::new();
		js_sys::Reflect::set(&query, &"active".into(), &true.into())?;
		js_sys::Reflect::set(&query, &"currentWindow".into(), &true.into())?;
		let tabs = call_async_fn(&self.api, "query", &[query.into()][..]).await?;
		let tabs_array: js_sys::Array = tabs.dyn_into()?;
		if let Some(tab) = tabs_array.iter().next() { serde_wasm_bindgen::from_value(tab).map_err(Into::into) } else { Err(ExtensionError::TabNotFound) }
	}

	/// Sends `message` to the content scripts of one tab.
	pub async fn send_message<M: Serialize, R: DeserializeOwned>(&self, tab_id: u32, message: &M) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "sendMessage", &[tab_id.into(), to_value(message)?][..]).await
	}
}
