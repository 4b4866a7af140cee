use crate::error::Rejection;
use crate::season::GameState;

/// Result of a player action that may be refused.
///
/// A refused action carries the state it was attempted on, possibly with
/// bookkeeping applied (a declined offer is remembered).
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub state: GameState,
    pub rejection: Option<Rejection>,
}

impl ActionOutcome {
    pub fn accepted(state: GameState) -> Self {
        Self { state, rejection: None }
    }

    pub fn rejected(state: GameState, rejection: Rejection) -> Self {
        tracing::debug!(%rejection, "action rejected");
        Self { state, rejection: Some(rejection) }
    }

    pub fn success(&self) -> bool {
        self.rejection.is_none()
    }

    /// User-facing refusal message.
    pub fn reason(&self) -> Option<String> {
        self.rejection.as_ref().map(ToString::to_string)
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}
