use crate::core::matcher::SkillRecommendation;
use crate::models::domain::{CandidateProfile, MatchResult};
use serde::{Deserialize, Serialize};

/// Job annotated with its match score, as shown in the suggestions list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "salaryMin")]
    pub salary_min: Option<f64>,
    #[serde(rename = "salaryMax")]
    pub salary_max: Option<f64>,
    pub skills: Vec<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

impl From<MatchResult> for ScoredJob {
    fn from(m: MatchResult) -> Self {
        Self {
            id: m.job.id,
            title: m.job.title,
            company: m.job.company,
            location: m.job.location,
            salary_min: m.job.salary_min,
            salary_max: m.job.salary_max,
            skills: m.job.skills,
            match_score: m.score,
            matched_skills: m.matched_skills,
        }
    }
}

/// Response for the analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResumeResponse {
    pub success: bool,
    pub parsed: CandidateProfile,
    pub matches: Vec<ScoredJob>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "fellBack")]
    pub fell_back: bool,
}

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecommendJobsResponse {
    pub success: bool,
    pub data: Vec<SkillRecommendation>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
