use crate::{
	error::ExtensionError,
	types::{ListenerHandle, MessageSender, attach_listener},
	utils::{call_async_fn_and_de, get_api_namespace},
};
use js_sys::{Function, Object};
use serde::{Serialize, de::DeserializeOwned};
use serde_wasm_bindgen::{from_value, to_value};
use std::{future::Future, marker::PhantomData};
use wasm_bindgen::{JsCast, JsValue, prelude::*};
use wasm_bindgen_futures::spawn_local;

/// Listener signature shared by every `runtime.onMessage` registration: `(message, sender, sendResponse)`.
pub type MessageListener = dyn FnMut(JsValue, JsValue, JsValue) -> JsValue;

#[derive(Clone)]
pub struct Runtime {
	api: Object,
}

impl Runtime {
	pub(crate) fn new(api: Object) -> Self {
		Self { api }
	}

	/// Broadcasts `message` to the extension's own pages and service worker.
	///
	/// Delivery is not guaranteed: when no context is listening the browser
	/// rejects the call and this returns [`ExtensionError::NoReceiver`].
	pub async fn send_message<M: Serialize, R: DeserializeOwned>(&self, message: &M) -> Result<R, ExtensionError> {
		call_async_fn_and_de(&self.api, "sendMessage", &[to_value(message)?][..]).await
	}

	pub fn on_message<T: DeserializeOwned + 'static>(&self) -> Result<OnMessage<T>, ExtensionError> {
		Ok(OnMessage::new(get_api_namespace(&self.api, "onMessage")?))
	}
}

/// `runtime.onMessage` filtered to messages that deserialize as `T`. Anything
/// else on the bus is left for other listeners.
pub struct OnMessage<T: DeserializeOwned + 'static> {
	api: Object,
	_phantom: PhantomData<T>,
}

impl<T: DeserializeOwned + 'static> OnMessage<T> {
	fn new(api: Object) -> Self {
		Self { api, _phantom: PhantomData }
	}

	pub fn add_listener(&self, mut callback: impl FnMut(T, MessageSender) + 'static) -> Result<ListenerHandle<MessageListener>, ExtensionError> {
		attach_listener(
			&self.api,
			Closure::wrap(Box::new(move |message: JsValue, sender: JsValue, _: JsValue| {
				if let (Ok(msg), Ok(sender)) = (from_value(message), from_value(sender)) {
					callback(msg, sender);
				}
				JsValue::UNDEFINED
			}) as Box<MessageListener>),
		)
	}

	/// Registers a listener whose future resolves to the reply for the sender.
	///
	/// The reply goes through `sendResponse` and the listener returns `true` to
	/// keep the port open, which every browser understands. Messages of another
	/// shape return `false` so the sender is not left waiting on this context.
	pub fn add_listener_with_response<F, R, O>(&self, mut callback: F) -> Result<ListenerHandle<MessageListener>, ExtensionError>
	where
		F: FnMut(T, MessageSender) -> R + 'static,
		R: Future<Output = O> + 'static,
		O: Serialize,
	{
		attach_listener(
			&self.api,
			Closure::wrap(Box::new(move |message: JsValue, sender: JsValue, send_response: JsValue| {
				let (Ok(msg), Ok(sender)) = (from_value(message), from_value(sender)) else {
					return JsValue::from_bool(false);
				};
				let Ok(send_response) = send_response.dyn_into::<Function>() else {
					return JsValue::from_bool(false);
				};
				let reply = callback(msg, sender);
				spawn_local(async move {
					let reply = reply.await;
					if let Ok(value) = to_value(&reply) {
						let _ = send_response.call1(&JsValue::UNDEFINED, &value);
					}
				});
				JsValue::from_bool(true)
			}) as Box<MessageListener>),
		)
	}
}
