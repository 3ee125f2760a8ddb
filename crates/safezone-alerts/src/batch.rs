//! Multi-device fan-out with per-batch failure isolation.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use safezone_core::models::{AlertEvent, MulticastOutcome, PushFailure, PushPayload};
use safezone_core::traits::IPushChannel;
use safezone_observability::events;

/// Aggregate of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub batches: usize,
    pub success_count: usize,
    pub failure_count: usize,
    /// Tokens the provider rejected as invalid, in batch order.
    pub invalid_tokens: Vec<String>,
    /// Indices of batches whose call failed as a whole.
    pub failed_batches: Vec<usize>,
    /// The dispatch record for the whole broadcast.
    pub event: Option<AlertEvent>,
}

impl BatchResult {
    pub fn attempted(&self) -> usize {
        self.success_count + self.failure_count
    }

    pub fn is_clean(&self) -> bool {
        self.failure_count == 0
    }
}

/// Outcome of one batch call, kept in batch order.
pub(crate) struct BatchOutcome {
    pub index: usize,
    pub size: usize,
    pub result: Result<MulticastOutcome, PushFailure>,
}

/// Send every chunk of `tokens` on the current rayon pool.
pub(crate) fn send_batches(
    channel: &dyn IPushChannel,
    tokens: &[String],
    batch_size: usize,
    payload: &PushPayload,
) -> Vec<BatchOutcome> {
    tokens
        .par_chunks(batch_size.max(1))
        .enumerate()
        .map(|(index, chunk)| BatchOutcome {
            index,
            size: chunk.len(),
            result: channel.send_to_devices(chunk, payload),
        })
        .collect()
}

/// Fold batch outcomes. A failed batch counts every token in it as failed;
/// per-batch counts are clamped so success + failure equals the batch size.
pub(crate) fn aggregate(outcomes: Vec<BatchOutcome>) -> (BatchResult, Option<PushFailure>) {
    let mut result = BatchResult {
        batches: outcomes.len(),
        ..BatchResult::default()
    };
    let mut last_failure = None;

    for outcome in outcomes {
        match outcome.result {
            Ok(multicast) => {
                let success = multicast.success_count.min(outcome.size);
                result.success_count += success;
                result.failure_count += outcome.size - success;
                result.invalid_tokens.extend(multicast.invalid_tokens);
            }
            Err(failure) => {
                events::push_batch_failed(
                    outcome.index,
                    outcome.size,
                    failure.kind.as_str(),
                    &failure.message,
                );
                result.failure_count += outcome.size;
                result.failed_batches.push(outcome.index);
                last_failure = Some(failure);
            }
        }
    }

    (result, last_failure)
}
