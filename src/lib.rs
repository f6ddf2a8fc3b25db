//! Slug Match - HLA genotype matching service
//!
//! This library parses SLUGs (single locus unambiguous genotypes) from GL
//! strings and compares a patient's genotype against a donor's.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{slug_match, Allele, Slug};
pub use error::{ApiError, InvalidAllele};
pub use models::{SlugMatchRequest, SlugMatchResponse, MatchLabel, MessageResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let patient = Slug::from_glstring("A*01:01+A*02:01").unwrap();
        let donor = Slug::from_glstring("A*01:01+A*02:01").unwrap();
        assert_eq!(slug_match(&patient, &donor), Ok(true));
    }
}
