use crate::change::{ChangeResult, PrMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Everything a publisher needs from one successful pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub schema: String,
    pub tool: ToolInfo,
    pub started_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub results: Vec<ChangeResult>,

    pub pr: PrMetadata,
}

impl RunRecord {
    pub fn new(tool: ToolInfo, started_at: DateTime<Utc>) -> Self {
        Self {
            schema: crate::schema::AUTOBUMP_RUN_V1.to_string(),
            tool,
            started_at,
            ended_at: None,
            results: vec![],
            pr: PrMetadata::default(),
        }
    }

    /// Messages of the recorded results, in sequence order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.message.as_str())
    }
}
