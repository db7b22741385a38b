//! Executive snapshot - the leadership recap card.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The ready-to-share executive recap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSnapshot {
    pub headline: String,
    /// Signed percent change vs last week; negative is good.
    pub weekly_carbon_delta: f64,
    pub runs_optimized: u32,
    /// Average sentiment on a 0–5 scale.
    pub team_sentiment: f64,
    pub wins: Vec<String>,
    pub focus: Vec<String>,
}

/// A partial snapshot as served by the peripheral backend; present
/// fields override the fallback field-wise.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPatch {
    pub headline: Option<String>,
    pub weekly_carbon_delta: Option<f64>,
    pub runs_optimized: Option<u32>,
    pub team_sentiment: Option<f64>,
    pub wins: Option<Vec<String>>,
    pub focus: Option<Vec<String>>,
}

static FALLBACK: Lazy<ExecutiveSnapshot> = Lazy::new(|| ExecutiveSnapshot {
    headline: "12.4% carbon intensity drop this sprint".to_string(),
    weekly_carbon_delta: -12.4,
    runs_optimized: 18,
    team_sentiment: 4.6,
    wins: vec![
        "Swapped 6 lanes to regenerative diesel".to_string(),
        "Activated 142 offset credits via marketplace".to_string(),
        "Launched API integration with ERP for auto-mitigation tasks".to_string(),
    ],
    focus: vec![
        "Expand hydrogen pilot to Midwest corridor".to_string(),
        "Codify sustainability OKRs in driver scorecards".to_string(),
        "Publish RAG-backed mitigation newsletter".to_string(),
    ],
});

impl ExecutiveSnapshot {
    /// The staged fixture shown when the backend is unreachable.
    pub fn fallback() -> Self {
        FALLBACK.clone()
    }

    /// Overlays a live partial snapshot on top of this one.
    pub fn merged_with(mut self, patch: SnapshotPatch) -> Self {
        if let Some(headline) = patch.headline {
            self.headline = headline;
        }
        if let Some(delta) = patch.weekly_carbon_delta {
            self.weekly_carbon_delta = delta;
        }
        if let Some(runs) = patch.runs_optimized {
            self.runs_optimized = runs;
        }
        if let Some(sentiment) = patch.team_sentiment {
            self.team_sentiment = sentiment;
        }
        if let Some(wins) = patch.wins {
            self.wins = wins;
        }
        if let Some(focus) = patch.focus {
            self.focus = focus;
        }
        self
    }

    /// `+x.x% vs last week` label, sign rendered explicitly.
    pub fn weekly_delta_label(&self) -> String {
        let sign = if self.weekly_carbon_delta > 0.0 { "+" } else { "" };
        format!("{}{:.1}% vs last week", sign, self.weekly_carbon_delta)
    }
}
