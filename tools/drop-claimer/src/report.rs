use drop_claim::{ClaimError, ClaimReporter, ClaimStage, Confirmation};
use tracing::debug;

/// Reports to the terminal. Unlike the library default, failures are shown to the user.
pub struct ConsoleReporter;

impl ClaimReporter for ConsoleReporter {
    fn on_stage(&self, stage: ClaimStage) {
        debug!(%stage, "claim stage");
    }

    fn on_claimed(&self, confirmation: &Confirmation) {
        println!("Claimed! Tx hash: {}", confirmation.tx_hash);
    }

    fn on_failed(&self, stage: ClaimStage, error: &ClaimError) {
        eprintln!("Claim failed ({stage}): {error}");
    }
}
