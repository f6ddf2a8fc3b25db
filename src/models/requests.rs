use serde::{Deserialize, Serialize};

/// Request to compare a patient's and a donor's SLUG
///
/// Both fields are optional at the type level; presence is checked by the
/// handler so that a missing key maps to a 400 rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlugMatchRequest {
    #[serde(default)]
    pub patient_slug: Option<String>,
    #[serde(default)]
    pub donor_slug: Option<String>,
}

impl SlugMatchRequest {
    /// Both GL strings, if both were supplied
    pub fn slugs(&self) -> Option<(&str, &str)> {
        match (&self.patient_slug, &self.donor_slug) {
            (Some(patient), Some(donor)) => Some((patient.as_str(), donor.as_str())),
            _ => None,
        }
    }
}
