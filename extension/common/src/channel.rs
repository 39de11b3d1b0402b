//! Single-producer, single-consumer hand-off for a value that may never come.
//!
//! The producer side lives inside a message listener and may be invoked any
//! number of times; only the first delivery gets through. The consumer always
//! waits against a deadline, so a context that never answers leaves it with
//! `None` instead of a pending future.

use futures::{
	channel::oneshot,
	future::{Either, select},
	pin_mut,
};
use std::future::Future;

pub fn one_shot<T>() -> (Outbox<T>, Inbox<T>) {
	let (sender, receiver) = oneshot::channel();
	(Outbox { sender: Some(sender) }, Inbox { receiver })
}

#[derive(Debug)]
pub struct Outbox<T> {
	sender: Option<oneshot::Sender<T>>,
}

impl<T> Outbox<T> {
	/// Hands `value` over. Returns `false` when something was already delivered
	/// or the inbox is gone, in which case `value` is dropped.
	pub fn deliver(&mut self, value: T) -> bool {
		self.sender.take().is_some_and(|sender| sender.send(value).is_ok())
	}
}

#[derive(Debug)]
pub struct Inbox<T> {
	receiver: oneshot::Receiver<T>,
}

impl<T> Inbox<T> {
	/// Resolves with the delivered value, or `None` once `deadline` fires or the
	/// outbox is dropped without delivering.
	pub async fn recv_within<D>(self, deadline: D) -> Option<T>
	where
		D: Future<Output = ()>,
	{
		let receiver = self.receiver;
		pin_mut!(deadline);
		match select(receiver, deadline).await {
			Either::Left((received, _)) => received.ok(),
			Either::Right(((), _)) => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use {
		super::*,
		futures::future::{pending, ready},
		tokio::test,
	};

	#[test]
	async fn first_delivery_wins() {
		let (mut outbox, inbox) = one_shot();
		assert!(outbox.deliver(1));
		assert!(!outbox.deliver(2));
		assert_eq!(inbox.recv_within(pending()).await, Some(1));
	}

	#[test]
	async fn deadline_ends_the_wait() {
		let (outbox, inbox) = one_shot::<u32>();
		assert_eq!(inbox.recv_within(ready(())).await, None);
		drop(outbox);
	}

	#[test]
	async fn dropped_outbox_ends_the_wait() {
		let (outbox, inbox) = one_shot::<u32>();
		drop(outbox);
		assert_eq!(inbox.recv_within(pending()).await, None);
	}

	#[test]
	async fn delivery_after_inbox_is_gone_is_refused() {
		let (mut outbox, inbox) = one_shot();
		drop(inbox);
		assert!(!outbox.deliver("late"));
	}
}
