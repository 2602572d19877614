//! Review and audit DTOs

use serde::{Deserialize, Serialize};

use domain_assessment::{AuditEntry, History, HumanDecision};

#[derive(Debug, Deserialize)]
pub struct DecisionRequest {
    pub decision: String,
}

impl DecisionRequest {
    /// Parses the decision text the same way the domain does
    pub fn decision(&self) -> Result<HumanDecision, String> {
        self.decision.parse()
    }
}

/// Archive listing, newest first
#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub total: usize,
    /// True when nothing has been finalized yet
    pub empty: bool,
    pub entries: Vec<AuditEntry>,
}

impl From<History> for AuditResponse {
    fn from(history: History) -> Self {
        match history {
            History::Empty => Self {
                total: 0,
                empty: true,
                entries: Vec::new(),
            },
            History::Entries(entries) => Self {
                total: entries.len(),
                empty: false,
                entries,
            },
        }
    }
}
