use serde::{Deserialize, Serialize};

/// Outcome label of a SLUG comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    #[serde(rename = "Match")]
    Match,
    #[serde(rename = "No Match")]
    NoMatch,
}

impl From<bool> for MatchLabel {
    fn from(matched: bool) -> Self {
        if matched {
            MatchLabel::Match
        } else {
            MatchLabel::NoMatch
        }
    }
}

/// Response for the slug match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugMatchResponse {
    pub matched: MatchLabel,
    pub patient_slug: String,
    pub donor_slug: String,
}

/// Failure body: a single human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_label_serialization() {
        assert_eq!(serde_json::to_string(&MatchLabel::Match).unwrap(), "\"Match\"");
        assert_eq!(serde_json::to_string(&MatchLabel::NoMatch).unwrap(), "\"No Match\"");
        assert_eq!(MatchLabel::from(false), MatchLabel::NoMatch);
    }
}
