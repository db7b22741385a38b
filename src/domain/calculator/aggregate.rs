//! Calculation - the calculator wizard aggregate.
//!
//! Owns the current step, the accumulating shipment draft, and the
//! presentation phase. Step submissions merge their validated input and
//! advance; the final step runs through a begin/complete ticket pair so
//! the paced "Calculating…" interval cannot double-submit and a
//! completion landing after a reset dissolves into a no-op.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{CalculationId, StateMachine};

use super::shipment::{CargoDetails, RouteLeg, ShipmentDraft, TransportChoice};
use super::step::{CalculatorStep, StepSequence};

/// Presentation phase of one calculator session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationPhase {
    /// Collecting step input.
    Collecting,
    /// The paced emission calculation is in flight; submit is disabled.
    Calculating,
    /// Terminal: the results view is shown until reset.
    Results,
}

impl StateMachine for CalculationPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        matches!(
            (self, target),
            (CalculationPhase::Collecting, CalculationPhase::Calculating)
                | (CalculationPhase::Calculating, CalculationPhase::Results)
        )
    }
}

/// Pairs a `begin_calculation` with its `complete_calculation`.
///
/// The ticket captures the aggregate generation at begin time; a reset
/// in between bumps the generation and strands the ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationTicket {
    generation: u64,
}

/// What happened to a completion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The transport choice was merged and results are now shown.
    Completed,
    /// The ticket no longer matches the session (reset or already
    /// consumed); nothing changed.
    Stale,
}

impl CompletionOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self, CompletionOutcome::Stale)
    }
}

/// Errors raised by wizard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error("Input for step {expected:?} arrived while the calculator is at {actual:?}")]
    WrongStep {
        expected: CalculatorStep,
        actual: CalculatorStep,
    },

    #[error("A calculation is already pending")]
    CalculationPending,

    #[error("The calculator is already showing results")]
    ResultsAlreadyShown,

    #[error("Cannot go back from the first step")]
    AlreadyAtFirstStep,
}

/// One calculator session.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    id: CalculationId,
    step: CalculatorStep,
    phase: CalculationPhase,
    draft: ShipmentDraft,
    generation: u64,
}

impl Calculation {
    /// Starts a fresh session at the Route step with an empty draft.
    pub fn new() -> Self {
        Self {
            id: CalculationId::new(),
            step: StepSequence::first(),
            phase: CalculationPhase::Collecting,
            draft: ShipmentDraft::new(),
            generation: 0,
        }
    }

    pub fn id(&self) -> CalculationId {
        self.id
    }

    pub fn step(&self) -> CalculatorStep {
        self.step
    }

    pub fn phase(&self) -> CalculationPhase {
        self.phase
    }

    pub fn draft(&self) -> &ShipmentDraft {
        &self.draft
    }

    /// True once the results view is shown.
    pub fn shows_results(&self) -> bool {
        self.phase == CalculationPhase::Results
    }

    /// Progress-bar percentage for the current step.
    pub fn progress_percent(&self) -> u8 {
        StepSequence::progress_percent(self.step)
    }

    /// Submits the Route step: merges source/destination, advances to Cargo.
    pub fn submit_route(&mut self, leg: RouteLeg) -> Result<(), CalculationError> {
        self.expect_collecting_at(CalculatorStep::Route)?;
        self.draft.apply_route(leg);
        self.step = CalculatorStep::Cargo;
        Ok(())
    }

    /// Submits the Cargo step: merges the weight, advances to Transport.
    pub fn submit_cargo(&mut self, cargo: CargoDetails) -> Result<(), CalculationError> {
        self.expect_collecting_at(CalculatorStep::Cargo)?;
        self.draft.apply_cargo(cargo);
        self.step = CalculatorStep::Transport;
        Ok(())
    }

    /// Arms the paced final submission.
    ///
    /// Fails with `CalculationPending` while a previous begin is still
    /// outstanding; that guard is what keeps a second rapid submit from
    /// double-firing.
    pub fn begin_calculation(&mut self) -> Result<CalculationTicket, CalculationError> {
        if self.step != CalculatorStep::Transport {
            return Err(CalculationError::WrongStep {
                expected: CalculatorStep::Transport,
                actual: self.step,
            });
        }
        self.phase = self
            .phase
            .transition_to(CalculationPhase::Calculating)
            .map_err(|_| match self.phase {
                CalculationPhase::Calculating => CalculationError::CalculationPending,
                _ => CalculationError::ResultsAlreadyShown,
            })?;
        Ok(CalculationTicket {
            generation: self.generation,
        })
    }

    /// Lands the paced final submission.
    ///
    /// A stale ticket (the session was reset mid-delay, or this ticket
    /// was already consumed) changes nothing and reports `Stale`.
    pub fn complete_calculation(
        &mut self,
        ticket: CalculationTicket,
        choice: TransportChoice,
    ) -> Result<CompletionOutcome, CalculationError> {
        if ticket.generation != self.generation || self.phase != CalculationPhase::Calculating {
            return Ok(CompletionOutcome::Stale);
        }
        self.phase = self
            .phase
            .transition_to(CalculationPhase::Results)
            .map_err(|_| CalculationError::ResultsAlreadyShown)?;
        self.draft.apply_transport(choice);
        // Consume the ticket so a duplicate completion goes stale.
        self.generation += 1;
        Ok(CompletionOutcome::Completed)
    }

    /// Abandons a pending calculation, returning to input collection.
    ///
    /// Used when the estimation behind the paced delay fails; the stale
    /// rules match `complete_calculation`.
    pub fn abort_calculation(&mut self, ticket: CalculationTicket) -> CompletionOutcome {
        if ticket.generation != self.generation || self.phase != CalculationPhase::Calculating {
            return CompletionOutcome::Stale;
        }
        self.phase = CalculationPhase::Collecting;
        self.generation += 1;
        CompletionOutcome::Completed
    }

    /// Steps back one step. Going back from the first step is a
    /// precondition violation and fails loudly.
    pub fn go_back(&mut self) -> Result<(), CalculationError> {
        match self.phase {
            CalculationPhase::Calculating => return Err(CalculationError::CalculationPending),
            CalculationPhase::Results => return Err(CalculationError::ResultsAlreadyShown),
            CalculationPhase::Collecting => {}
        }
        match StepSequence::previous(self.step) {
            Some(previous) => {
                self.step = previous;
                Ok(())
            }
            None => Err(CalculationError::AlreadyAtFirstStep),
        }
    }

    /// Returns to the first step with an empty draft, from any phase.
    /// Any in-flight calculation ticket is stranded.
    pub fn reset(&mut self) {
        self.step = StepSequence::first();
        self.phase = CalculationPhase::Collecting;
        self.draft = ShipmentDraft::new();
        self.generation += 1;
    }

    fn expect_collecting_at(&self, expected: CalculatorStep) -> Result<(), CalculationError> {
        match self.phase {
            CalculationPhase::Calculating => return Err(CalculationError::CalculationPending),
            CalculationPhase::Results => return Err(CalculationError::ResultsAlreadyShown),
            CalculationPhase::Collecting => {}
        }
        if self.step != expected {
            return Err(CalculationError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}

impl Default for Calculation {
    fn default() -> Self {
        Self::new()
    }
}
