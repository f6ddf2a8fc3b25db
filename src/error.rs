use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::MessageResponse;

/// Domain validation failures raised while parsing or matching SLUGs
///
/// The `Display` text is the message returned to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidAllele {
    #[error("{0} is not a valid allele")]
    Malformed(String),

    #[error("{0} is not a valid SLUG: ambiguous GL string")]
    Ambiguous(String),

    #[error("{glstring} is not a valid SLUG: expected 2 alleles separated by '+', found {found}")]
    AlleleCount { glstring: String, found: usize },

    #[error("{0} is not a valid SLUG: alleles belong to different loci")]
    MixedLoci(String),

    #[error("Cannot match SLUGs at different loci: {patient} and {donor}")]
    LocusMismatch { patient: String, donor: String },
}

/// Errors returned by the match endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No input provided")]
    NoInput,

    #[error("Invalid data in patient_slug/donor_slug")]
    InvalidData,

    #[error(transparent)]
    InvalidAllele(#[from] InvalidAllele),

    /// Body could not be read, e.g. it exceeds the configured size limit
    #[error("{0}")]
    Payload(actix_web::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            // An absent body is reported as 404, unlike missing keys
            ApiError::NoInput => StatusCode::NOT_FOUND,
            ApiError::InvalidData | ApiError::InvalidAllele(_) => StatusCode::BAD_REQUEST,
            ApiError::Payload(err) => err.as_response_error().status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageResponse {
            message: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NoInput.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidData.status_code(), StatusCode::BAD_REQUEST);

        let domain = ApiError::from(InvalidAllele::Malformed("X".to_string()));
        assert_eq!(domain.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_payload_overflow_keeps_framework_status() {
        let err = ApiError::Payload(actix_web::error::PayloadError::Overflow.into());
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_domain_message_passes_through() {
        let err = ApiError::from(InvalidAllele::MixedLoci("A*01:01+B*07:02".to_string()));
        assert_eq!(
            err.to_string(),
            "A*01:01+B*07:02 is not a valid SLUG: alleles belong to different loci"
        );
    }
}
