use std::sync::Arc;

use crate::{collaborators::Confirmation, errors::ClaimError, state::ClaimStage};

/// Hooks a host uses to surface claim progress to the user.
///
/// Every method defaults to a no-op, so failures stay log-only unless a host opts in.
pub trait ClaimReporter: Send + Sync {
    fn on_stage(&self, _stage: ClaimStage) {}

    /// The success acknowledgment; called once per confirmed claim.
    fn on_claimed(&self, _confirmation: &Confirmation) {}

    /// `stage` is where the attempt was when it failed.
    fn on_failed(&self, _stage: ClaimStage, _error: &ClaimError) {}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl ClaimReporter for NoopReporter {}

impl<T: ClaimReporter + ?Sized> ClaimReporter for Arc<T> {
    fn on_stage(&self, stage: ClaimStage) {
        (**self).on_stage(stage)
    }

    fn on_claimed(&self, confirmation: &Confirmation) {
        (**self).on_claimed(confirmation)
    }

    fn on_failed(&self, stage: ClaimStage, error: &ClaimError) {
        (**self).on_failed(stage, error)
    }
}
