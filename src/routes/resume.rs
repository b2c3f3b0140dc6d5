use actix_web::{error, web, HttpRequest, HttpResponse, Responder};
use validator::{Validate, ValidationErrors};
use crate::config::MatchingSettings;
use crate::core::{sanitize_text, Matcher, RankOptions, ResumeParser};
use crate::models::{
    AnalyzeResumeRequest, AnalyzeResumeResponse, ErrorResponse, HealthResponse, JobPosting,
    ParseResumeRequest, RecommendJobsRequest, RecommendJobsResponse, ScoredJob,
};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub parser: Arc<ResumeParser>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all resume and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/resume/parse", web::post().to(parse_resume))
        .route("/resume/analyze", web::post().to(analyze_resume))
        .route("/jobs/recommendations", web::post().to(recommend_jobs));
}

/// Turn JSON body errors into the same error shape the handlers use
pub fn json_error_handler(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Rejected JSON payload on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    });
    error::InternalError::from_response(err, response).into()
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Parse a resume into a structured profile
///
/// POST /api/v1/resume/parse
async fn parse_resume(
    state: web::Data<AppState>,
    req: web::Json<ParseResumeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let text = sanitize_text(&req.text);
    let parsed = state.parser.parse(&text);

    tracing::debug!(
        "Parsed resume: {} skills, {} years, {}",
        parsed.skills.len(),
        parsed.years_of_experience,
        parsed.education_level
    );

    HttpResponse::Ok().json(parsed)
}

/// Analyze a resume and rank the supplied jobs
///
/// POST /api/v1/resume/analyze
///
/// Request body:
/// ```json
/// {
///   "text": "string",
///   "jobs": [{ "id": "string", "skills": ["string"], "experience": "5+ years" }],
///   "limit": 10,
///   "minScore": 40,
///   "recommendedOnly": false
/// }
/// ```
///
/// `recommendedOnly` applies the configured threshold when `minScore` is absent.
/// A `limit` outside `1..=matching.max_limit` is rejected.
async fn analyze_resume(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeResumeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let AnalyzeResumeRequest {
        text,
        jobs,
        limit,
        min_score,
        recommended_only,
    } = req.into_inner();

    let limit = match resolve_limit(limit, &state.matching) {
        Ok(limit) => limit,
        Err(response) => return response,
    };

    let min_score = min_score.or(recommended_only.then_some(state.matching.min_score));
    let options = RankOptions {
        min_score,
        fallback_count: state.matching.fallback_count.min(limit),
        limit: Some(limit),
    };

    let parsed = state.parser.parse(&sanitize_text(&text));
    let active: Vec<JobPosting> = jobs.into_iter().filter(JobPosting::is_active).collect();

    tracing::info!(
        "Analyzing resume ({} skills) against {} active jobs, limit: {}",
        parsed.skills.len(),
        active.len(),
        limit
    );

    let result = state.matcher.rank(&parsed, active, &options);

    if result.fell_back {
        tracing::debug!("No job reached score {:?}, returning best unfiltered matches", min_score);
    }

    let response = AnalyzeResumeResponse {
        success: true,
        parsed,
        matches: result.matches.into_iter().map(ScoredJob::from).collect(),
        total_candidates: result.total_candidates,
        fell_back: result.fell_back,
    };

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        response.matches.len(),
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Skill-overlap recommendations for a stored skill list
///
/// POST /api/v1/jobs/recommendations
async fn recommend_jobs(
    state: web::Data<AppState>,
    req: web::Json<RecommendJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(&errors);
    }

    let RecommendJobsRequest { skills, jobs, limit } = req.into_inner();
    let limit = match resolve_limit(limit, &state.matching) {
        Ok(limit) => limit,
        Err(response) => return response,
    };

    let active: Vec<JobPosting> = jobs.into_iter().filter(JobPosting::is_active).collect();
    let data = state.matcher.recommend(&skills, active, limit);

    tracing::info!("Returning {} recommendations for {} skills", data.len(), skills.len());

    HttpResponse::Ok().json(RecommendJobsResponse { success: true, data })
}

/// Requested limit, or `max_results`, checked against the configured `max_limit`
fn resolve_limit(requested: Option<u16>, matching: &MatchingSettings) -> Result<usize, HttpResponse> {
    let limit = requested.map(usize::from).unwrap_or(matching.max_results);

    if limit == 0 || limit > matching.max_limit {
        tracing::info!("Rejected limit {} (max {})", limit, matching.max_limit);
        return Err(bad_request(format!(
            "limit must be between 1 and {}",
            matching.max_limit
        )));
    }

    Ok(limit)
}

fn validation_failed(errors: &ValidationErrors) -> HttpResponse {
    // Prefer the human message of a custom check over the raw error dump
    let message = errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string());

    tracing::info!("Validation failed: {}", message);

    bad_request(message)
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message,
        status_code: 400,
    })
}
