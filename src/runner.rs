//! Bounded-parallelism task runner.
//!
//! Executes a batch of independent, failure-prone operations with at most a
//! fixed number running concurrently. Every item produces exactly one
//! [`Outcome`], correlated to the input by index; a failing or panicking
//! item never aborts the batch or its siblings.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Semaphore;
use tokio::time::{timeout, Duration};
use tracing::warn;

use crate::{Result, SwordfishError};

/// Classification of a work item failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network or proxy failure, including non-2xx responses.
    Transport,
    /// Per-item deadline exceeded.
    Timeout,
    /// Response body not in the expected shape.
    Parse,
    /// Worker crashed (panic or pool shutdown).
    Worker,
    /// Anything else.
    Other,
}

/// Tagged outcome of one work item. Exactly one is produced per item.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    /// The operation completed and produced a payload.
    Success(T),
    /// The operation failed; the batch continued without it.
    Failure {
        /// Failure classification.
        kind: FailureKind,
        /// Human-readable detail, embedded in exported data.
        reason: String,
    },
}

impl<T> Outcome<T> {
    /// Returns true for a success outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Consumes the outcome, returning the payload if successful.
    pub fn into_success(self) -> Option<T> {
        match self {
            Outcome::Success(payload) => Some(payload),
            Outcome::Failure { .. } => None,
        }
    }

    /// Returns the failure reason, if any.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { reason, .. } => Some(reason),
        }
    }

    fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(payload) => Outcome::Success(payload),
            Err(err) => {
                let kind = match &err {
                    SwordfishError::Transport(_) => FailureKind::Transport,
                    SwordfishError::Timeout => FailureKind::Timeout,
                    SwordfishError::Parse(_) => FailureKind::Parse,
                    _ => FailureKind::Other,
                };
                Outcome::Failure {
                    kind,
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Fixed-size worker pool scoped to a single batch invocation.
///
/// The pool owns no persistent state; each call to [`TaskRunner::run`]
/// creates its semaphore, dispatches the batch, and releases everything at
/// the final join.
#[derive(Debug, Clone)]
pub struct TaskRunner {
    workers: usize,
    task_timeout: Duration,
}

impl TaskRunner {
    /// Default worker count.
    pub const DEFAULT_WORKERS: usize = 5;

    /// Creates a runner with the given worker count and per-item timeout.
    ///
    /// A worker count of zero is invalid configuration and is rejected
    /// before any batch can start.
    pub fn new(workers: usize, task_timeout: Duration) -> Result<Self> {
        if workers == 0 {
            return Err(SwordfishError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            workers,
            task_timeout,
        })
    }

    /// Returns the configured worker count.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the configured per-item timeout.
    pub fn task_timeout(&self) -> Duration {
        self.task_timeout
    }

    /// Runs `op` over every item with at most `workers` operations in
    /// flight, returning one outcome per item in input order.
    ///
    /// The timeout clock for an item starts when a worker slot is granted,
    /// not when the item is queued; exceeding it cancels only that item's
    /// in-flight operation. A panicking operation yields a
    /// [`FailureKind::Worker`] outcome for its own slot.
    pub async fn run<I, T, F, Fut>(&self, items: Vec<I>, op: F) -> Vec<Outcome<T>>
    where
        I: Send + 'static,
        T: Send + 'static,
        F: Fn(I) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        if items.is_empty() {
            return Vec::new();
        }

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let op = Arc::new(op);
        let deadline = self.task_timeout;

        // One handle per item, spawned in intake order. Semaphore permits
        // are granted FIFO, so intake order is the dispatch tie-break.
        let handles: Vec<_> = items
            .into_iter()
            .map(|item| {
                let semaphore = Arc::clone(&semaphore);
                let op = Arc::clone(&op);
                tokio::spawn(async move {
                    let _permit = match semaphore.acquire_owned().await {
                        Ok(permit) => permit,
                        Err(_) => {
                            return Outcome::Failure {
                                kind: FailureKind::Worker,
                                reason: "worker pool closed".to_string(),
                            }
                        }
                    };
                    match timeout(deadline, op(item)).await {
                        Ok(result) => Outcome::from_result(result),
                        Err(_) => Outcome::Failure {
                            kind: FailureKind::Timeout,
                            reason: "timeout".to_string(),
                        },
                    }
                })
            })
            .collect();

        // join_all preserves handle order, so slot i belongs to item i and
        // is written exactly once: the collector ends with exactly N
        // entries regardless of completion interleaving.
        join_all(handles)
            .await
            .into_iter()
            .map(|joined| match joined {
                Ok(outcome) => outcome,
                Err(err) => {
                    warn!("worker crashed: {err}");
                    Outcome::Failure {
                        kind: FailureKind::Worker,
                        reason: "worker error".to_string(),
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn runner(workers: usize) -> TaskRunner {
        TaskRunner::new(workers, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_zero_workers_rejected() {
        let result = TaskRunner::new(0, Duration::from_secs(1));
        assert!(matches!(result, Err(SwordfishError::Config(_))));
    }

    #[test]
    fn test_runner_accessors() {
        let runner = TaskRunner::new(3, Duration::from_secs(7)).unwrap();
        assert_eq!(runner.workers(), 3);
        assert_eq!(runner.task_timeout(), Duration::from_secs(7));
    }

    #[tokio::test]
    async fn test_empty_batch_returns_immediately() {
        let outcomes: Vec<Outcome<u32>> = runner(4).run(vec![], |n: u32| async move { Ok(n) }).await;
        assert!(outcomes.is_empty());
    }

    #[tokio::test]
    async fn test_exactly_n_outcomes_in_input_order() {
        let items: Vec<usize> = (0..20).collect();
        let outcomes = runner(3).run(items, |n| async move { Ok(n * 2) }).await;

        assert_eq!(outcomes.len(), 20);
        for (i, outcome) in outcomes.into_iter().enumerate() {
            assert_eq!(outcome.into_success(), Some(i * 2));
        }
    }

    #[tokio::test]
    async fn test_more_workers_than_items() {
        let outcomes = runner(16).run(vec![1u32, 2, 3], |n| async move { Ok(n) }).await;
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(Outcome::is_success));
    }

    #[tokio::test]
    async fn test_failure_is_isolated_per_item() {
        let items: Vec<usize> = (0..10).collect();
        let outcomes = runner(4)
            .run(items, |n| async move {
                if n % 2 == 0 {
                    Err(SwordfishError::Parse(format!("bad item {n}")))
                } else {
                    Ok(n)
                }
            })
            .await;

        assert_eq!(outcomes.len(), 10);
        for (i, outcome) in outcomes.iter().enumerate() {
            if i % 2 == 0 {
                assert!(matches!(
                    outcome,
                    Outcome::Failure {
                        kind: FailureKind::Parse,
                        ..
                    }
                ));
            } else {
                assert!(outcome.is_success());
            }
        }
    }

    #[tokio::test]
    async fn test_timeout_produces_tagged_failure() {
        let runner = TaskRunner::new(2, Duration::from_millis(50)).unwrap();
        let outcomes = runner
            .run(vec![true, false], |slow| async move {
                if slow {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                }
                Ok(slow)
            })
            .await;

        assert_eq!(outcomes.len(), 2);
        match &outcomes[0] {
            Outcome::Failure { kind, reason } => {
                assert_eq!(*kind, FailureKind::Timeout);
                assert_eq!(reason, "timeout");
            }
            Outcome::Success(_) => panic!("slow item should time out"),
        }
        // The fast sibling is unaffected.
        assert!(outcomes[1].is_success());
    }

    #[tokio::test]
    async fn test_panic_becomes_worker_failure() {
        let items: Vec<usize> = (0..4).collect();
        let outcomes = runner(2)
            .run(items, |n| async move {
                if n == 1 {
                    panic!("boom");
                }
                Ok(n)
            })
            .await;

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].is_success());
        match &outcomes[1] {
            Outcome::Failure { kind, reason } => {
                assert_eq!(*kind, FailureKind::Worker);
                assert_eq!(reason, "worker error");
            }
            Outcome::Success(_) => panic!("panicking item should fail"),
        }
        assert!(outcomes[2].is_success());
        assert!(outcomes[3].is_success());
    }

    #[tokio::test]
    async fn test_concurrency_never_exceeds_worker_count() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));

        let items: Vec<usize> = (0..40).collect();
        let in_flight_op = Arc::clone(&in_flight);
        let peak_op = Arc::clone(&peak);

        let outcomes = runner(5)
            .run(items, move |n| {
                let in_flight = Arc::clone(&in_flight_op);
                let peak = Arc::clone(&peak_op);
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    Ok(n)
                }
            })
            .await;

        assert_eq!(outcomes.len(), 40);
        assert!(peak.load(Ordering::SeqCst) <= 5);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_stress_no_lost_or_duplicated_outcomes() {
        use rand::Rng;

        let items: Vec<usize> = (0..1000).collect();
        let outcomes = runner(5)
            .run(items, |n| async move {
                let jitter = rand::thread_rng().gen_range(0..5u64);
                tokio::time::sleep(Duration::from_micros(jitter)).await;
                Ok(n)
            })
            .await;

        assert_eq!(outcomes.len(), 1000);
        for (i, outcome) in outcomes.into_iter().enumerate() {
            assert_eq!(outcome.into_success(), Some(i));
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let ok: Outcome<u32> = Outcome::Success(7);
        assert!(ok.is_success());
        assert!(ok.failure_reason().is_none());

        let failed: Outcome<u32> = Outcome::Failure {
            kind: FailureKind::Transport,
            reason: "connection refused".to_string(),
        };
        assert!(!failed.is_success());
        assert_eq!(failed.failure_reason(), Some("connection refused"));
        assert_eq!(failed.into_success(), None);
    }

    #[test]
    fn test_outcome_from_transport_error() {
        // reqwest errors are hard to fabricate offline; exercise the other
        // taxonomy arms instead.
        let timeout: Outcome<()> = Outcome::from_result(Err(SwordfishError::Timeout));
        assert!(matches!(
            timeout,
            Outcome::Failure {
                kind: FailureKind::Timeout,
                ..
            }
        ));

        let other: Outcome<()> =
            Outcome::from_result(Err(SwordfishError::InvalidQuery("empty".to_string())));
        assert!(matches!(
            other,
            Outcome::Failure {
                kind: FailureKind::Other,
                ..
            }
        ));
    }
}
