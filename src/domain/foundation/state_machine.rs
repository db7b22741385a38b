//! State machine trait for lifecycle enums.
//!
//! Gives phase enums a validated-transition interface so aggregates can
//! refuse illegal moves with a typed error instead of silently clamping.

/// Trait for enums that behave as small state machines.
///
/// Implementors declare which transitions are legal; `transition_to`
/// performs the move or reports the attempted pair back to the caller.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if a transition from `self` to `target` is legal.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Performs the transition, returning the rejected pair on failure.
    fn transition_to(&self, target: Self) -> Result<Self, InvalidTransition<Self>> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(InvalidTransition {
                from: *self,
                to: target,
            })
        }
    }
}

/// A rejected state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition<S> {
    pub from: S,
    pub to: S,
}

impl<S: std::fmt::Debug> std::fmt::Display for InvalidTransition<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cannot transition from {:?} to {:?}", self.from, self.to)
    }
}

impl<S: std::fmt::Debug> std::error::Error for InvalidTransition<S> {}
