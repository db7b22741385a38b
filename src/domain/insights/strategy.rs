//! Mitigation strategy library entries.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One deployable mitigation playbook.
///
/// Live entries may arrive sparse; missing fields default to empty so
/// the page always renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub expected_reduction: String,
    #[serde(default)]
    pub playbook: Vec<String>,
}

static FALLBACK: Lazy<Vec<Strategy>> = Lazy::new(|| {
    vec![
        Strategy {
            id: "strategy-modal-shift".to_string(),
            name: "Modal Shift to Rail + Microhubs".to_string(),
            category: "Logistics".to_string(),
            expected_reduction: "-38%".to_string(),
            playbook: vec![
                "Stand up 2 regional micro-fulfillment hubs".to_string(),
                "Integrate rail API for live capacity swaps".to_string(),
                "Gamify carrier engagement with scorecards".to_string(),
            ],
        },
        Strategy {
            id: "strategy-h2".to_string(),
            name: "Hydrogen-ready Fleet Pilot".to_string(),
            category: "Fleet".to_string(),
            expected_reduction: "-21%".to_string(),
            playbook: vec![
                "Lease 10 fuel-cell trucks in California ZEV corridor".to_string(),
                "Install mobile electrolyzer pods at partner depots".to_string(),
                "Instrument telemetry for energy-per-drop KPI".to_string(),
            ],
        },
        Strategy {
            id: "strategy-rag".to_string(),
            name: "AI-powered Mitigation RAG".to_string(),
            category: "AI".to_string(),
            expected_reduction: "-17%".to_string(),
            playbook: vec![
                "Index EPA SmartWay + IPCC AR6 briefs into vector store".to_string(),
                "Launch Gemini action copilot for route planners".to_string(),
                "Trigger auto-mitigation tasks into Asana via webhook".to_string(),
            ],
        },
    ]
});

/// The staged strategy library shown when the backend is unreachable
/// or returns an empty list.
pub fn fallback_strategies() -> Vec<Strategy> {
    FALLBACK.clone()
}
