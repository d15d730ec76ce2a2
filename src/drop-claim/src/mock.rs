//! Scriptable fake collaborators for orchestrator tests.

use std::{
    collections::HashSet,
    io,
    sync::{Arc, Mutex},
};

use alloy_primitives::{address, b256, Address};
use async_trait::async_trait;
use drop_claim_types::{Chain, ContractCall};
use serde_json::json;
use tracing_subscriber::fmt::MakeWriter;

use crate::{
    abi::ContractAbi,
    busy::BusyIndicator,
    collaborators::{
        AbiResolver, AccountHandle, CallSubmitter, CollaboratorError, Confirmation,
        ContractBinding, PendingClaim, SignerAdapter, TxHash, WalletProvider,
    },
    errors::ClaimError,
    orchestrator::{ClaimContext, ClaimOrchestrator},
    report::ClaimReporter,
    session::{ClientSession, ContractRef},
    state::ClaimStage,
    ClaimConfig,
};

pub const ACCOUNT: Address = address!("1111111111111111111111111111111111111111");
pub const TX_HASH: TxHash =
    b256!("abababababababababababababababababababababababababababababababab");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Switch,
    Resolve,
    Signer,
    Bind,
    Invoke,
    Wait,
}

#[derive(Default)]
struct JournalState {
    /// Each step with the number of in-flight attempts observed when it ran.
    steps: Vec<(Step, usize)>,
    failing: HashSet<Step>,
    hanging: HashSet<Step>,
    calls: Vec<ContractCall>,
    contracts: Vec<ContractRef>,
    tx_hash: Option<TxHash>,
}

/// Shared record of collaborator calls, plus the failures scripted for them.
#[derive(Clone)]
pub struct Journal {
    state: Arc<Mutex<JournalState>>,
    busy: BusyIndicator,
}

impl Journal {
    pub fn new(busy: BusyIndicator) -> Self {
        Self {
            state: Arc::default(),
            busy,
        }
    }

    pub fn fail(&self, step: Step) {
        self.state.lock().unwrap().failing.insert(step);
    }

    pub fn hang(&self, step: Step) {
        self.state.lock().unwrap().hanging.insert(step);
    }

    pub fn set_tx_hash(&self, hash: TxHash) {
        self.state.lock().unwrap().tx_hash = Some(hash);
    }

    pub fn steps(&self) -> Vec<Step> {
        self.state.lock().unwrap().steps.iter().map(|(s, _)| *s).collect()
    }

    pub fn count(&self, step: Step) -> usize {
        self.steps().into_iter().filter(|s| *s == step).count()
    }

    pub fn max_in_flight(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.steps.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    pub fn busy_at_every_step(&self) -> bool {
        self.state.lock().unwrap().steps.iter().all(|(_, n)| *n > 0)
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn contracts(&self) -> Vec<ContractRef> {
        self.state.lock().unwrap().contracts.clone()
    }

    fn enter(&self, step: Step) -> Result<(), CollaboratorError> {
        let mut state = self.state.lock().unwrap();
        state.steps.push((step, self.busy.in_flight()));
        if state.failing.contains(&step) {
            return Err(format!("{step:?} rejected").into());
        }
        Ok(())
    }

    fn hangs(&self, step: Step) -> bool {
        self.state.lock().unwrap().hanging.contains(&step)
    }

    fn tx_hash(&self) -> TxHash {
        self.state.lock().unwrap().tx_hash.unwrap_or(TX_HASH)
    }
}

#[derive(Clone, Debug)]
pub struct FakeAccount(pub Address);

impl AccountHandle for FakeAccount {
    fn address(&self) -> Address {
        self.0
    }
}

pub struct FakeWallet {
    journal: Journal,
    account: Option<FakeAccount>,
    chain_id: Mutex<Option<u64>>,
}

#[async_trait]
impl WalletProvider for FakeWallet {
    type Account = FakeAccount;

    fn active_account(&self) -> Option<FakeAccount> {
        self.account.clone()
    }

    fn active_chain_id(&self) -> Option<u64> {
        *self.chain_id.lock().unwrap()
    }

    async fn switch_chain(&self, chain: &Chain) -> Result<(), CollaboratorError> {
        self.journal.enter(Step::Switch)?;
        *self.chain_id.lock().unwrap() = Some(chain.id);
        Ok(())
    }
}

pub struct FakeResolver {
    journal: Journal,
}

#[async_trait]
impl AbiResolver for FakeResolver {
    async fn resolve_abi(&self, contract: &ContractRef) -> Result<ContractAbi, CollaboratorError> {
        self.journal.enter(Step::Resolve)?;
        self.journal.state.lock().unwrap().contracts.push(contract.clone());
        Ok(ContractAbi::from_json(json!([
            { "type": "function", "name": "claim", "inputs": [], "outputs": [] }
        ]))?)
    }
}

pub struct FakeSigner(pub Address);

pub struct FakeSignerAdapter {
    journal: Journal,
}

#[async_trait]
impl SignerAdapter<FakeAccount> for FakeSignerAdapter {
    type Signer = FakeSigner;

    async fn signer(
        &self,
        _session: &ClientSession,
        _chain: &Chain,
        account: &FakeAccount,
    ) -> Result<FakeSigner, CollaboratorError> {
        self.journal.enter(Step::Signer)?;
        Ok(FakeSigner(account.0))
    }
}

pub struct FakeSubmitter {
    journal: Journal,
}

impl CallSubmitter<FakeSigner> for FakeSubmitter {
    type Binding = FakeBinding;

    fn bind(
        &self,
        _address: Address,
        abi: &ContractAbi,
        _signer: FakeSigner,
    ) -> Result<FakeBinding, CollaboratorError> {
        self.journal.enter(Step::Bind)?;
        if abi.function("claim").is_none() {
            return Err("claim not in ABI".into());
        }
        Ok(FakeBinding {
            journal: self.journal.clone(),
        })
    }
}

pub struct FakeBinding {
    journal: Journal,
}

#[async_trait]
impl ContractBinding for FakeBinding {
    type Pending = FakePending;

    async fn invoke(&self, call: ContractCall) -> Result<FakePending, CollaboratorError> {
        self.journal.enter(Step::Invoke)?;
        self.journal.state.lock().unwrap().calls.push(call);
        Ok(FakePending {
            journal: self.journal.clone(),
            tx_hash: self.journal.tx_hash(),
        })
    }
}

pub struct FakePending {
    journal: Journal,
    tx_hash: TxHash,
}

#[async_trait]
impl PendingClaim for FakePending {
    fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    async fn wait(self) -> Result<Confirmation, CollaboratorError> {
        // Let concurrent attempts interleave at the mining boundary.
        tokio::task::yield_now().await;
        if self.journal.hangs(Step::Wait) {
            std::future::pending::<()>().await;
        }
        self.journal.enter(Step::Wait)?;
        Ok(Confirmation {
            tx_hash: self.tx_hash,
            block_number: Some(7),
        })
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub stages: Mutex<Vec<ClaimStage>>,
    pub claimed: Mutex<Vec<TxHash>>,
    pub failures: Mutex<Vec<(ClaimStage, String)>>,
}

impl ClaimReporter for RecordingReporter {
    fn on_stage(&self, stage: ClaimStage) {
        self.stages.lock().unwrap().push(stage);
    }

    fn on_claimed(&self, confirmation: &Confirmation) {
        self.claimed.lock().unwrap().push(confirmation.tx_hash);
    }

    fn on_failed(&self, stage: ClaimStage, error: &ClaimError) {
        self.failures.lock().unwrap().push((stage, error.to_string()));
    }
}

pub type FakeOrchestrator = ClaimOrchestrator<
    FakeWallet,
    FakeResolver,
    FakeSignerAdapter,
    FakeSubmitter,
    Arc<RecordingReporter>,
>;

pub struct Harness {
    pub orchestrator: FakeOrchestrator,
    pub journal: Journal,
    pub reporter: Arc<RecordingReporter>,
    pub busy: BusyIndicator,
}

impl Harness {
    pub fn new(active_chain_id: Option<u64>, config: ClaimConfig) -> Self {
        Self::with_account(Some(FakeAccount(ACCOUNT)), active_chain_id, config)
    }

    pub fn with_account(
        account: Option<FakeAccount>,
        active_chain_id: Option<u64>,
        config: ClaimConfig,
    ) -> Self {
        let busy = BusyIndicator::new();
        let journal = Journal::new(busy.clone());
        let reporter = Arc::new(RecordingReporter::default());
        let ctx = ClaimContext {
            session: ClientSession::new("test-client").unwrap(),
            wallet: FakeWallet {
                journal: journal.clone(),
                account,
                chain_id: Mutex::new(active_chain_id),
            },
            resolver: FakeResolver {
                journal: journal.clone(),
            },
            signer_adapter: FakeSignerAdapter {
                journal: journal.clone(),
            },
            submitter: FakeSubmitter {
                journal: journal.clone(),
            },
        };
        let orchestrator = ClaimOrchestrator::new(ctx, config, Arc::clone(&reporter))
            .with_busy_indicator(busy.clone());
        Self {
            orchestrator,
            journal,
            reporter,
            busy,
        }
    }

    pub fn claimed(&self) -> Vec<TxHash> {
        self.reporter.claimed.lock().unwrap().clone()
    }

    pub fn stages(&self) -> Vec<ClaimStage> {
        self.reporter.stages.lock().unwrap().clone()
    }
}

/// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Route this thread's events here until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
