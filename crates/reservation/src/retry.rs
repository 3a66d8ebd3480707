use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

/// Where one message stands in its archive-retry window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    Attempting(u32),
    Succeeded,
    Exhausted,
}

/// Fixed linear backoff: a constant interval between a bounded number of
/// attempts. The transition function is pure so the whole window can be
/// tested without a clock.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    interval: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        assert!(max_attempts >= 1, "retry policy needs at least one attempt");
        Self {
            max_attempts,
            interval,
        }
    }

    pub fn first(&self) -> RetryState {
        RetryState::Attempting(1)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Transition taken after attempt `n` of the current state finishes.
    pub fn next(&self, state: RetryState, succeeded: bool) -> RetryState {
        match state {
            RetryState::Attempting(_) if succeeded => RetryState::Succeeded,
            RetryState::Attempting(n) if n >= self.max_attempts => RetryState::Exhausted,
            RetryState::Attempting(n) => RetryState::Attempting(n + 1),
            terminal => terminal,
        }
    }
}

pub type DynSleeper = Arc<dyn Sleeper + Send + Sync>;

/// Injectable clock seam: production sleeps on the tokio timer, tests
/// record the requested intervals and return immediately.
#[async_trait]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_secs(1))
    }

    #[test]
    fn success_terminates_from_any_attempt() {
        let policy = policy();
        assert_eq!(
            policy.next(RetryState::Attempting(1), true),
            RetryState::Succeeded
        );
        assert_eq!(
            policy.next(RetryState::Attempting(3), true),
            RetryState::Succeeded
        );
    }

    #[test]
    fn failure_advances_to_the_next_attempt() {
        let policy = policy();
        assert_eq!(
            policy.next(RetryState::Attempting(1), false),
            RetryState::Attempting(2)
        );
        assert_eq!(
            policy.next(RetryState::Attempting(2), false),
            RetryState::Attempting(3)
        );
    }

    #[test]
    fn failure_on_the_last_attempt_exhausts() {
        let policy = policy();
        assert_eq!(
            policy.next(RetryState::Attempting(3), false),
            RetryState::Exhausted
        );
    }

    #[test]
    fn terminal_states_are_absorbing() {
        let policy = policy();
        assert_eq!(
            policy.next(RetryState::Succeeded, false),
            RetryState::Succeeded
        );
        assert_eq!(
            policy.next(RetryState::Exhausted, true),
            RetryState::Exhausted
        );
    }

    #[test]
    fn single_attempt_policy_exhausts_on_first_failure() {
        let policy = RetryPolicy::new(1, Duration::from_secs(1));
        assert_eq!(
            policy.next(policy.first(), false),
            RetryState::Exhausted
        );
    }
}
