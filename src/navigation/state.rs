//! Navigator state machine states.

use crate::core::{Direction, GridCoord};

/// Navigator state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavigatorState {
    /// No target fixed yet
    #[default]
    Seeking,

    /// Heading for a mowable target
    Approaching {
        /// Target cell
        target: GridCoord,
    },

    /// Retry budget for the target ran out; reselect next tick
    Stuck {
        /// Target that was given up
        target: GridCoord,
    },

    /// No reachable unmowed grass remains
    Done,
}

impl NavigatorState {
    /// Is this a terminal state?
    pub fn is_terminal(&self) -> bool {
        matches!(self, NavigatorState::Done)
    }

    /// Current or last abandoned target
    pub fn target(&self) -> Option<GridCoord> {
        match self {
            NavigatorState::Approaching { target } | NavigatorState::Stuck { target } => {
                Some(*target)
            }
            NavigatorState::Seeking | NavigatorState::Done => None,
        }
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            NavigatorState::Seeking => "Seeking",
            NavigatorState::Approaching { .. } => "Approaching",
            NavigatorState::Stuck { .. } => "Stuck",
            NavigatorState::Done => "Done",
        }
    }
}

/// One-cell move chosen by the navigator.
///
/// Carries the direction explicitly so callers never infer it from
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepDecision {
    /// Heading of the step
    pub direction: Direction,

    /// Cell the mower moves onto
    pub to: GridCoord,

    /// Target the step heads for
    pub target: GridCoord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_names() {
        assert_eq!(NavigatorState::Seeking.name(), "Seeking");
        assert_eq!(NavigatorState::Done.name(), "Done");
        assert_eq!(
            NavigatorState::Stuck {
                target: GridCoord::new(1, 1)
            }
            .name(),
            "Stuck"
        );
    }

    #[test]
    fn test_state_target() {
        let t = GridCoord::new(2, 3);
        assert_eq!(NavigatorState::Approaching { target: t }.target(), Some(t));
        assert_eq!(NavigatorState::Stuck { target: t }.target(), Some(t));
        assert_eq!(NavigatorState::Seeking.target(), None);
        assert!(NavigatorState::Done.is_terminal());
        assert!(!NavigatorState::Seeking.is_terminal());
    }
}
