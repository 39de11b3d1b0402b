use crate::error::ExtensionError;
use js_sys::{Function, Object};
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, prelude::*};

/// Owns a closure registered on an `onX` event target. Dropping the handle
/// removes the listener again, so the handle decides how long a context keeps
/// listening.
pub struct ListenerHandle<T: ?Sized> {
	target: Object,
	closure: Option<Closure<T>>,
}

impl<T: ?Sized + wasm_bindgen::closure::WasmClosure> ListenerHandle<T> {
	/// Leaves the listener attached for the remaining lifetime of the JS context.
	pub fn keep_alive(mut self) {
		if let Some(closure) = self.closure.take() {
			closure.forget();
		}
	}
}

impl<T: ?Sized> Drop for ListenerHandle<T> {
	fn drop(&mut self) {
		let Some(closure) = self.closure.take() else {
			return;
		};
		if let Ok(remove_listener_fn) = js_sys::Reflect::get(&self.target, &"removeListener".into()).and_then(|v| v.dyn_into::<Function>()) {
			let _ = remove_listener_fn.call1(&self.target, closure.as_ref());
		}
	}
}

pub(crate) fn attach_listener<T: ?Sized + 'static>(target: &Object, closure: Closure<T>) -> Result<ListenerHandle<T>, ExtensionError> {
	let add_listener_fn: Function =
		js_sys::Reflect::get(target, &"addListener".into())?.dyn_into().map_err(|_| ExtensionError::ApiNotFound("addListener".to_owned()))?;
	add_listener_fn.call1(target, closure.as_ref())?;
	Ok(ListenerHandle { target: target.clone(), closure: Some(closure) })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowserType {
	Chrome,
	Firefox,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
	pub id: Option<u32>,
	pub title: Option<String>,
	pub url: Option<String>,
	#[serde(default)]
	pub active: bool,
	pub window_id: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSender {
	pub id: Option<String>,
	pub url: Option<String>,
	pub tab: Option<TabInfo>,
}
