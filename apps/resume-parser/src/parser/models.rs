use serde::{Deserialize, Serialize};

/// Body of `POST /parse`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseRequest {
    pub resume_text: String,
}

/// Extraction result returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResponse {
    /// Sorted ascending, no duplicates.
    pub skills: Vec<String>,
    pub summary: String,
}

impl ParseResponse {
    /// Builds a response whose summary always reflects `skills.len()`.
    pub fn from_skills(skills: Vec<String>) -> Self {
        let summary = format!("Extracted {} potential skills.", skills.len());
        ParseResponse { skills, summary }
    }
}
