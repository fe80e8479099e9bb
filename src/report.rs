use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::automaton::{Run, Verdict};

/// Structured record of one evaluation, printed by `eval --json`.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRecord {
    pub input: String,
    pub symbols: Vec<String>,
    pub accepted: bool,
    #[serde(flatten)]
    pub verdict: Verdict,
    pub path: Vec<String>,
    pub final_state: String,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationRecord {
    pub fn new(input: &str, symbols: Vec<String>, run: &Run<'_>) -> Self {
        Self {
            input: input.to_string(),
            symbols,
            accepted: run.accepted(),
            verdict: run.verdict.clone(),
            path: run.path.iter().map(|s| s.to_string()).collect(),
            final_state: run
                .final_state()
                .map(ToString::to_string)
                .unwrap_or_default(),
            evaluated_at: Utc::now(),
        }
    }
}
