// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, EducationLevel, JobPosting, JobStatus, MatchResult, ScoringWeights};
pub use requests::{AnalyzeResumeRequest, ParseResumeRequest, RecommendJobsRequest};
pub use responses::{AnalyzeResumeResponse, ErrorResponse, HealthResponse, RecommendJobsResponse, ScoredJob};
