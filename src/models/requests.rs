use crate::models::domain::JobPosting;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to score a resume against a set of jobs
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeResumeRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    /// Upper bound comes from `matching.max_limit` and is checked by the handler
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[validate(range(max = 100))]
    #[serde(rename = "minScore", alias = "min_score", default)]
    pub min_score: Option<u8>,
    /// Apply the configured `matching.min_score` when no `minScore` is given
    #[serde(rename = "recommendedOnly", alias = "recommended_only", default)]
    pub recommended_only: bool,
}

/// Request to parse a resume without scoring
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParseResumeRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(default)]
    pub text: String,
}

/// Request for skill-overlap recommendations from a stored skill list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendJobsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub jobs: Vec<JobPosting>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

fn validate_not_blank(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("No resume text provided".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_rejected() {
        let req: AnalyzeResumeRequest = serde_json::from_str(r#"{"text": "   \n", "jobs": []}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_limit_range() {
        let req: AnalyzeResumeRequest =
            serde_json::from_str(r#"{"text": "rust dev", "jobs": [], "limit": 0}"#).unwrap();
        assert!(req.validate().is_err());

        let req: AnalyzeResumeRequest =
            serde_json::from_str(r#"{"text": "rust dev", "limit": 10, "minScore": 40}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.min_score, Some(40));
        assert!(!req.recommended_only);
    }

    #[test]
    fn test_limit_above_default_max_left_to_handler() {
        let req: AnalyzeResumeRequest =
            serde_json::from_str(r#"{"text": "rust dev", "limit": 150, "recommendedOnly": true}"#).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.recommended_only);
    }
}
