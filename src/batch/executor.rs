//! Batch executor.

use futures::stream::{self, StreamExt};
use std::future::Future;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchStrategy {
    /// One item at a time, in input order.
    #[default]
    Sequential,
    /// Up to `max_concurrency` items in flight; results still in input order.
    Concurrent { max_concurrency: usize },
}

impl BatchStrategy {
    /// Strategy for a worker cap; a cap of 0 or 1 means sequential.
    pub fn with_max_concurrency(n: usize) -> Self {
        if n > 1 {
            BatchStrategy::Concurrent { max_concurrency: n }
        } else {
            BatchStrategy::Sequential
        }
    }

    fn width(&self) -> usize {
        match self {
            BatchStrategy::Sequential => 1,
            BatchStrategy::Concurrent { max_concurrency } => (*max_concurrency).max(1),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BatchExecutor {
    strategy: BatchStrategy,
}

impl BatchExecutor {
    pub fn new(strategy: BatchStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> BatchStrategy {
        self.strategy
    }

    /// Run `executor_fn` over every item; output `i` belongs to input `i`.
    pub async fn execute<T, R, F, Fut>(&self, items: Vec<T>, executor_fn: F) -> Vec<R>
    where
        F: Fn(T) -> Fut,
        Fut: Future<Output = R>,
    {
        let start = Instant::now();
        let total = items.len();
        let results = match self.strategy {
            BatchStrategy::Sequential => {
                let mut out = Vec::with_capacity(total);
                for item in items {
                    out.push(executor_fn(item).await);
                }
                out
            }
            BatchStrategy::Concurrent { .. } => {
                stream::iter(items.into_iter().map(&executor_fn))
                    .buffered(self.strategy.width())
                    .collect::<Vec<_>>()
                    .await
            }
        };
        debug!(
            items = total,
            strategy = ?self.strategy,
            duration_ms = start.elapsed().as_millis(),
            "batch finished"
        );
        results
    }
}
