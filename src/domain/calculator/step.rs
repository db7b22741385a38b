//! StepSequence - ordering logic for the calculator wizard.
//!
//! The calculator walks a fixed three-step flow before presenting
//! results: Route → Cargo → Transport. Navigation helpers live here so
//! the aggregate never does index arithmetic of its own.

use serde::{Deserialize, Serialize};

/// One step of the calculator wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorStep {
    Route,
    Cargo,
    Transport,
}

impl CalculatorStep {
    /// 1-based position shown in the progress bar.
    pub fn number(&self) -> u8 {
        StepSequence::order_index(*self) as u8 + 1
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CalculatorStep::Route => "Route",
            CalculatorStep::Cargo => "Cargo",
            CalculatorStep::Transport => "Transport",
        }
    }
}

/// Central location for wizard step ordering.
pub struct StepSequence;

impl StepSequence {
    /// The canonical order of calculator steps.
    pub const ORDER: [CalculatorStep; 3] = [
        CalculatorStep::Route,
        CalculatorStep::Cargo,
        CalculatorStep::Transport,
    ];

    /// Returns all steps in order.
    pub fn all() -> &'static [CalculatorStep; 3] {
        &Self::ORDER
    }

    /// Returns the 0-based index of a step.
    #[inline]
    pub fn order_index(step: CalculatorStep) -> usize {
        Self::ORDER
            .iter()
            .position(|&s| s == step)
            .expect("All CalculatorStep variants must be in ORDER")
    }

    /// Returns the next step, or None past Transport (results take over).
    pub fn next(step: CalculatorStep) -> Option<CalculatorStep> {
        let idx = Self::order_index(step);
        Self::ORDER.get(idx + 1).copied()
    }

    /// Returns the previous step, or None at Route.
    pub fn previous(step: CalculatorStep) -> Option<CalculatorStep> {
        let idx = Self::order_index(step);
        if idx > 0 {
            Self::ORDER.get(idx - 1).copied()
        } else {
            None
        }
    }

    /// The first step of the flow.
    pub fn first() -> CalculatorStep {
        Self::ORDER[0]
    }

    /// The final input step, after which results are shown.
    pub fn last() -> CalculatorStep {
        Self::ORDER[Self::ORDER.len() - 1]
    }

    /// True when the step is the first of the flow.
    pub fn is_first(step: CalculatorStep) -> bool {
        step == Self::first()
    }

    /// True when the step is the final input step.
    pub fn is_last(step: CalculatorStep) -> bool {
        step == Self::last()
    }

    /// Progress-bar percentage for a step, capped at 100.
    pub fn progress_percent(step: CalculatorStep) -> u8 {
        let position = Self::order_index(step) as u32 + 1;
        let total = Self::ORDER.len() as u32;
        (position * 100 / total).min(100) as u8
    }
}
