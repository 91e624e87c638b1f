//! Match State Machine
//!
//! Tracks where a match is in its lifecycle. Physics only runs while the
//! phase is `Active` or `RoundTransition`.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Waiting for the first key press
    Idle,
    /// Ball in play
    Active,
    /// Ball parked at centre until the serve timer is due
    RoundTransition,
    /// Someone reached the score to win; waiting for the restart delay
    Finished,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    KeyPressed,
    BallExited,
    ServeDue,
    ScoreReached,
    RestartDue,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: MatchPhase,
    pub to: MatchPhase,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchPhase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchPhase::Idle,
        }
    }

    /// Get current phase
    pub fn state(&self) -> MatchPhase {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: MatchAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from = self.state;

        if let Some(next) = self.get_next_state(action) {
            self.state = next;
            log::debug!("Match phase {:?} -> {:?} ({:?})", from, next, action);
            TransitionResult {
                success: true,
                from,
                to: next,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from,
                to: from,
                action,
            }
        }
    }

    /// Get next phase for a given action (if valid)
    fn get_next_state(&self, action: MatchAction) -> Option<MatchPhase> {
        match (self.state, action) {
            (MatchPhase::Idle, MatchAction::KeyPressed) => Some(MatchPhase::Active),

            (MatchPhase::Active, MatchAction::BallExited) => Some(MatchPhase::RoundTransition),
            (MatchPhase::Active, MatchAction::ScoreReached) => Some(MatchPhase::Finished),

            (MatchPhase::RoundTransition, MatchAction::ServeDue) => Some(MatchPhase::Active),
            (MatchPhase::RoundTransition, MatchAction::ScoreReached) => Some(MatchPhase::Finished),

            (MatchPhase::Finished, MatchAction::RestartDue) => Some(MatchPhase::Idle),

            _ => None,
        }
    }

    /// Physics steps in this phase
    pub fn is_playing(&self) -> bool {
        matches!(
            self.state,
            MatchPhase::Active | MatchPhase::RoundTransition
        )
    }

    pub fn is_finished(&self) -> bool {
        self.state == MatchPhase::Finished
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = MatchFsm::new();
        assert_eq!(fsm.state(), MatchPhase::Idle);
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::KeyPressed);
        assert!(result.success);
        assert_eq!(result.from, MatchPhase::Idle);
        assert_eq!(result.to, MatchPhase::Active);
        assert_eq!(fsm.state(), MatchPhase::Active);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = MatchFsm::new();
        let result = fsm.transition(MatchAction::ScoreReached);
        assert!(!result.success);
        assert_eq!(fsm.state(), MatchPhase::Idle);
        assert!(!fsm.can_transition(MatchAction::ServeDue));
    }

    #[test]
    fn test_round_flow() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::KeyPressed);
        fsm.transition(MatchAction::BallExited);
        assert_eq!(fsm.state(), MatchPhase::RoundTransition);
        assert!(fsm.is_playing());
        fsm.transition(MatchAction::ServeDue);
        assert_eq!(fsm.state(), MatchPhase::Active);
    }

    #[test]
    fn test_match_end_and_restart() {
        let mut fsm = MatchFsm::new();
        fsm.transition(MatchAction::KeyPressed);
        fsm.transition(MatchAction::BallExited);
        fsm.transition(MatchAction::ScoreReached);
        assert!(fsm.is_finished());

        // Keys cannot cut the restart delay short
        assert!(!fsm.transition(MatchAction::KeyPressed).success);
        assert!(fsm.is_finished());

        fsm.transition(MatchAction::RestartDue);
        assert_eq!(fsm.state(), MatchPhase::Idle);
    }
}
