use core::fmt;

/// Progress of one claim attempt.
///
/// `Idle -> SwitchingNetwork? -> ResolvingAbi -> Signing -> Submitting -> Confirming -> Done | Failed`,
/// then back to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClaimStage {
    Idle,
    SwitchingNetwork,
    ResolvingAbi,
    Signing,
    /// Contract binding and broadcast.
    Submitting,
    Confirming,
    Done,
    Failed,
}

impl ClaimStage {
    pub fn can_advance_to(self, next: ClaimStage) -> bool {
        use ClaimStage::*;
        match (self, next) {
            (Done | Failed, Idle) => true,
            (Done | Failed, _) => false,
            (_, Failed) => true,
            (Idle, SwitchingNetwork | ResolvingAbi) => true,
            (SwitchingNetwork, ResolvingAbi) => true,
            (ResolvingAbi, Signing) => true,
            (Signing, Submitting) => true,
            (Submitting, Confirming) => true,
            (Confirming, Done) => true,
            _ => false,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ClaimStage::Done | ClaimStage::Failed)
    }
}

impl fmt::Display for ClaimStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClaimStage::Idle => "idle",
            ClaimStage::SwitchingNetwork => "switching-network",
            ClaimStage::ResolvingAbi => "resolving-abi",
            ClaimStage::Signing => "signing",
            ClaimStage::Submitting => "submitting",
            ClaimStage::Confirming => "confirming",
            ClaimStage::Done => "done",
            ClaimStage::Failed => "failed",
        };
        f.write_str(name)
    }
}
