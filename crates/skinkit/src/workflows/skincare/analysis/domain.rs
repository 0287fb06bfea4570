use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::assessment::{Concern, RawSignal, SkinAssessment};

/// Identifier wrapper for stored analyses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

/// A derived assessment kept around so follow-up requests can build kits from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: AnalysisId,
    pub signal: RawSignal,
    pub assessment: SkinAssessment,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn view(&self) -> AnalysisView {
        AnalysisView {
            analysis_id: self.analysis_id.clone(),
            created_at: self.created_at,
            skin_score: self.assessment.skin_score,
            priority_concerns: self.assessment.prioritized_concerns(),
            assessment: self.assessment.clone(),
        }
    }
}

/// Response body for analysis lookups.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    pub analysis_id: AnalysisId,
    pub created_at: DateTime<Utc>,
    pub skin_score: u8,
    pub priority_concerns: Vec<Concern>,
    pub assessment: SkinAssessment,
}
