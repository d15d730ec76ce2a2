//! The claim sequence.
//!
//! One attempt is a linear chain of suspend points (chain switch, ABI resolution, signer
//! creation, submission, confirmation). There are no retries; a failed attempt is reported and
//! the caller decides whether to try again.

use drop_claim_types::ClaimArg;
use tracing::{debug, error, info, warn};

use crate::{
    busy::BusyIndicator,
    collaborators::{
        AbiResolver, AccountHandle, CallSubmitter, Confirmation, ContractBinding, PendingClaim,
        SignerAdapter, TxHash, WalletProvider,
    },
    config::{ClaimConfig, SwitchFailurePolicy},
    errors::ClaimError,
    report::ClaimReporter,
    session::{ClientSession, ContractRef},
    state::ClaimStage,
};

/// Everything a claim reads from its environment, passed in explicitly.
pub struct ClaimContext<W, R, S, C> {
    pub session: ClientSession,
    pub wallet: W,
    pub resolver: R,
    pub signer_adapter: S,
    pub submitter: C,
}

/// Result of one attempt. Errors are folded in here rather than returned.
#[derive(Debug)]
pub enum ClaimOutcome {
    Done {
        tx_hash: TxHash,
        block_number: Option<u64>,
    },
    Failed {
        stage: ClaimStage,
        error: ClaimError,
    },
}

impl ClaimOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, ClaimOutcome::Done { .. })
    }

    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            ClaimOutcome::Done { tx_hash, .. } => Some(*tx_hash),
            ClaimOutcome::Failed { .. } => None,
        }
    }
}

pub struct ClaimOrchestrator<W, R, S, C, P> {
    ctx: ClaimContext<W, R, S, C>,
    config: ClaimConfig,
    reporter: P,
    busy: BusyIndicator,
}

impl<W, R, S, C, P> ClaimOrchestrator<W, R, S, C, P>
where
    W: WalletProvider,
    R: AbiResolver,
    S: SignerAdapter<W::Account>,
    C: CallSubmitter<S::Signer>,
    P: ClaimReporter,
{
    pub fn new(ctx: ClaimContext<W, R, S, C>, config: ClaimConfig, reporter: P) -> Self {
        Self {
            ctx,
            config,
            reporter,
            busy: BusyIndicator::new(),
        }
    }

    /// Share an indicator owned by the host (e.g. the widget rendering the claim button).
    pub fn with_busy_indicator(mut self, busy: BusyIndicator) -> Self {
        self.busy = busy;
        self
    }

    pub fn config(&self) -> &ClaimConfig {
        &self.config
    }

    /// Run one claim attempt to completion.
    ///
    /// The busy indicator is held for the whole attempt and released on every exit path.
    /// Concurrent calls are not serialised.
    pub async fn claim(&self) -> ClaimOutcome {
        let _busy = self.busy.enter();
        let mut stage = StageTracker::new(&self.reporter);

        let outcome = match self.run(&mut stage).await {
            Ok(confirmation) => {
                info!(
                    tx_hash = %confirmation.tx_hash,
                    block = ?confirmation.block_number,
                    "claim confirmed"
                );
                stage.advance(ClaimStage::Done);
                self.reporter.on_claimed(&confirmation);
                ClaimOutcome::Done {
                    tx_hash: confirmation.tx_hash,
                    block_number: confirmation.block_number,
                }
            }
            Err(err) => {
                let failed_at = stage.current();
                error!(stage = %failed_at, error = %err, "claim failed");
                stage.advance(ClaimStage::Failed);
                self.reporter.on_failed(failed_at, &err);
                ClaimOutcome::Failed {
                    stage: failed_at,
                    error: err,
                }
            }
        };

        stage.advance(ClaimStage::Idle);
        outcome
    }

    async fn run(&self, stage: &mut StageTracker<'_, P>) -> Result<Confirmation, ClaimError> {
        // Account and chain are read once; later changes in the wallet are not re-checked.
        let account = self
            .ctx
            .wallet
            .active_account()
            .ok_or(ClaimError::NoActiveAccount)?;
        let active_chain_id = self.ctx.wallet.active_chain_id();
        let chain = self.config.chain;

        if !chain.matches(active_chain_id) {
            stage.advance(ClaimStage::SwitchingNetwork);
            debug!(from = ?active_chain_id, to = chain.id, "switching wallet chain");
            if let Err(source) = self.ctx.wallet.switch_chain(&chain).await {
                let err = ClaimError::SwitchChain {
                    chain_id: chain.id,
                    source,
                };
                match self.config.switch_failure {
                    SwitchFailurePolicy::Abort => return Err(err),
                    SwitchFailurePolicy::Continue => {
                        warn!(error = %err, "chain switch failed, continuing claim")
                    }
                }
            }
        }

        let params = self.config.params_for(account.address());
        let call = params.contract_call();
        let contract = ContractRef::new(self.config.contract, chain, &self.ctx.session);

        stage.advance(ClaimStage::ResolvingAbi);
        let abi = self
            .ctx
            .resolver
            .resolve_abi(&contract)
            .await
            .map_err(ClaimError::AbiResolution)?;

        stage.advance(ClaimStage::Signing);
        let signer = self
            .ctx
            .signer_adapter
            .signer(&self.ctx.session, &chain, &account)
            .await
            .map_err(ClaimError::Signer)?;

        stage.advance(ClaimStage::Submitting);
        let binding = self
            .ctx
            .submitter
            .bind(contract.address, &abi, signer)
            .map_err(ClaimError::Binding)?;
        debug!(
            contract = %contract.address,
            receiver = %params.receiver,
            function = call.function,
            args = ?call.args.iter().map(ClaimArg::name).collect::<Vec<_>>(),
            value = %call.value,
            "submitting claim"
        );
        let pending = binding.invoke(call).await.map_err(ClaimError::Submission)?;
        let tx_hash = pending.tx_hash();

        stage.advance(ClaimStage::Confirming);
        debug!(%tx_hash, "waiting for confirmation");
        let waited = match self.config.confirmation_timeout {
            Some(after) => tokio::time::timeout(after, pending.wait())
                .await
                .map_err(|_| ClaimError::ConfirmationTimeout { tx_hash, after })?,
            None => pending.wait().await,
        };
        let confirmation =
            waited.map_err(|source| ClaimError::Confirmation { tx_hash, source })?;

        if confirmation.tx_hash.is_zero() {
            return Err(ClaimError::MissingHash);
        }
        Ok(confirmation)
    }
}

/// Current stage of one attempt; every transition is forwarded to the reporter.
struct StageTracker<'a, P> {
    current: ClaimStage,
    reporter: &'a P,
}

impl<'a, P: ClaimReporter> StageTracker<'a, P> {
    fn new(reporter: &'a P) -> Self {
        Self {
            current: ClaimStage::Idle,
            reporter,
        }
    }

    fn current(&self) -> ClaimStage {
        self.current
    }

    fn advance(&mut self, next: ClaimStage) {
        debug_assert!(
            self.current.can_advance_to(next),
            "invalid claim transition {} -> {}",
            self.current,
            next
        );
        self.current = next;
        self.reporter.on_stage(next);
    }
}
