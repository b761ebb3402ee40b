use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Normalized model verdict, relayed to the caller as the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub scores: Scores,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Scores are kept as raw JSON numbers so integers from the model stay
/// integers on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub overall: Number,
    pub experience: Number,
    pub education: Number,
    pub skills: Number,
}

impl Scores {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Number)> {
        [
            ("overall", &self.overall),
            ("experience", &self.experience),
            ("education", &self.education),
            ("skills", &self.skills),
        ]
        .into_iter()
    }
}
