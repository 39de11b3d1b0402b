use std::{future::Future, time::Duration};

pub const POLL_INTERVAL: Duration = Duration::from_millis(500);
pub const MAX_POLL_ATTEMPTS: u32 = 20;
/// Slack the popup allows on top of the content script's polling budget.
pub const PRESENTER_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
	pub interval: Duration,
	pub max_attempts: u32,
}

impl Default for PollPolicy {
	fn default() -> Self {
		Self { interval: POLL_INTERVAL, max_attempts: MAX_POLL_ATTEMPTS }
	}
}

impl PollPolicy {
	/// Longest time a run can spend waiting before it gives up.
	pub fn budget(&self) -> Duration {
		self.interval * self.max_attempts
	}

	/// How long a consumer should wait for the outcome of a run started now.
	pub fn response_window(&self) -> Duration {
		self.budget() + PRESENTER_GRACE
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
	Ready { attempts: u32 },
	TimedOut { attempts: u32 },
}

/// Waits one interval, checks `ready`, and repeats up to `max_attempts` times.
///
/// `sleep` must yield to the host's event loop; the loop itself never blocks.
/// There is no way to cancel a run once started.
pub async fn poll_until<P, S, F>(policy: PollPolicy, mut ready: P, mut sleep: S) -> PollOutcome
where
	P: FnMut() -> bool,
	S: FnMut(Duration) -> F,
	F: Future<Output = ()>,
{
	for attempt in 1..=policy.max_attempts {
		sleep(policy.interval).await;
		if ready() {
			return PollOutcome::Ready { attempts: attempt };
		}
	}
	PollOutcome::TimedOut { attempts: policy.max_attempts }
}
