// Model exports
pub mod requests;
pub mod responses;

pub use requests::SlugMatchRequest;
pub use responses::{HealthResponse, MatchLabel, MessageResponse, SlugMatchResponse};
