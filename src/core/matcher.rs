use crate::core::scoring::calculate_match_score;
use crate::models::{CandidateProfile, JobPosting, MatchResult, ScoringWeights};
use serde::Serialize;

/// Knobs for the ranking pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOptions {
    /// Keep only jobs scoring at least this much
    pub min_score: Option<u8>,
    /// How many unfiltered top jobs to return when the threshold keeps nothing
    pub fallback_count: usize,
    /// Cap on returned results
    pub limit: Option<usize>,
}

impl RankOptions {
    /// Plain top-N, no threshold
    pub fn top(limit: usize) -> Self {
        Self {
            min_score: None,
            fallback_count: 0,
            limit: Some(limit),
        }
    }

    /// Jobs scoring 40 or more, or the best 5 when none do
    pub fn recommended() -> Self {
        Self {
            min_score: Some(40),
            fallback_count: 5,
            limit: None,
        }
    }
}

impl Default for RankOptions {
    fn default() -> Self {
        Self::top(10)
    }
}

/// Result of the ranking process
#[derive(Debug)]
pub struct RankedMatches {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
    /// The threshold removed every job and the unfiltered top jobs were used
    pub fell_back: bool,
}

/// Job suggested from a stored skill list
#[derive(Debug, Clone, Serialize)]
pub struct SkillRecommendation {
    #[serde(flatten)]
    pub job: JobPosting,
    /// Percent of the job's skills the user lists; absent when the user has none
    #[serde(rename = "matchScore", skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Score every job against the profile
/// 2. Stable sort, best first
/// 3. Optional threshold with top-N fallback
/// 4. Optional truncation
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank `jobs` for a candidate.
    ///
    /// Jobs are expected to be pre-filtered to the active ones by the caller.
    /// Ties keep their input order.
    pub fn rank(
        &self,
        profile: &CandidateProfile,
        jobs: Vec<JobPosting>,
        options: &RankOptions,
    ) -> RankedMatches {
        let total_candidates = jobs.len();

        let mut scored: Vec<MatchResult> = jobs
            .into_iter()
            .map(|job| {
                let (score, matched_skills) = calculate_match_score(profile, &job, &self.weights);
                MatchResult {
                    job,
                    score,
                    matched_skills,
                }
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        let mut fell_back = false;
        let mut matches = match options.min_score {
            Some(threshold) => {
                let above = scored.iter().take_while(|m| m.score >= threshold).count();
                if above == 0 {
                    fell_back = true;
                    scored.truncate(options.fallback_count);
                } else {
                    scored.truncate(above);
                }
                scored
            }
            None => scored,
        };

        if let Some(limit) = options.limit {
            matches.truncate(limit);
        }

        RankedMatches {
            matches,
            total_candidates,
            fell_back,
        }
    }

    /// Naive recommendations from a user's stored skill list.
    ///
    /// Without skills the first `limit` jobs are returned as given (callers
    /// pass newest first). Otherwise jobs are ordered by
    /// [`skill_overlap_percent`], ties keeping input order.
    pub fn recommend(
        &self,
        user_skills: &[String],
        jobs: Vec<JobPosting>,
        limit: usize,
    ) -> Vec<SkillRecommendation> {
        if user_skills.is_empty() {
            return jobs
                .into_iter()
                .take(limit)
                .map(|job| SkillRecommendation {
                    job,
                    match_score: None,
                })
                .collect();
        }

        let mut scored: Vec<SkillRecommendation> = jobs
            .into_iter()
            .map(|job| {
                let score = skill_overlap_percent(user_skills, &job.skills);
                SkillRecommendation {
                    job,
                    match_score: Some(score),
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);
        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Percent (0-100) of `job_skills` covered by an exact, case-insensitive
/// match in `user_skills`. Zero when either side is empty.
pub fn skill_overlap_percent(user_skills: &[String], job_skills: &[String]) -> f64 {
    if user_skills.is_empty() || job_skills.is_empty() {
        return 0.0;
    }

    let job_lower: Vec<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let matched = user_skills
        .iter()
        .filter(|skill| job_lower.contains(&skill.to_lowercase()))
        .count();

    matched as f64 / job_skills.len() as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationLevel, JobStatus};

    fn create_job(id: &str, skills: &[&str], experience: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Job {}", id),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary_min: None,
            salary_max: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: Some(experience.to_string()),
            education_level: None,
            status: JobStatus::Active,
        }
    }

    fn create_profile() -> CandidateProfile {
        CandidateProfile {
            skills: vec!["react".to_string(), "javascript".to_string(), "nodejs".to_string()],
            years_of_experience: 5,
            education_level: EducationLevel::Bachelor,
        }
    }

    fn ids(matches: &[MatchResult]) -> Vec<&str> {
        matches.iter().map(|m| m.job.id.as_str()).collect()
    }

    #[test]
    fn test_rank_sorted_by_score() {
        let matcher = Matcher::with_default_weights();
        let jobs = vec![
            create_job("design", &["Figma", "Adobe XD"], "3+ years"),
            create_job("fullstack", &["React", "JavaScript", "Node.js"], "4+ years"),
            create_job("frontend", &["React", "Vue.js", "CSS"], "2+ years"),
        ];

        let result = matcher.rank(&create_profile(), jobs, &RankOptions::top(10));

        assert_eq!(result.total_candidates, 3);
        assert_eq!(ids(&result.matches), vec!["fullstack", "frontend", "design"]);
        assert_eq!(result.matches[0].score, 100);
        assert!(!result.fell_back);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let matcher = Matcher::with_default_weights();
        let jobs = vec![
            create_job("a", &["Go"], "1"),
            create_job("b", &["Rust"], "1"),
            create_job("c", &["Elixir"], "1"),
        ];

        let result = matcher.rank(&create_profile(), jobs, &RankOptions::top(10));
        assert_eq!(ids(&result.matches), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rank_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let jobs: Vec<JobPosting> = (0..20)
            .map(|i| create_job(&i.to_string(), &["React"], &format!("{} years", i)))
            .collect();

        let result = matcher.rank(&create_profile(), jobs, &RankOptions::top(5));
        assert_eq!(result.matches.len(), 5);
        assert_eq!(result.total_candidates, 20);
    }

    #[test]
    fn test_rank_threshold_filters() {
        let matcher = Matcher::with_default_weights();
        let jobs = vec![
            create_job("match", &["React", "JavaScript"], "1"),
            create_job("miss", &["Figma", "Sketch", "Photoshop", "Illustrator"], "10"),
        ];

        let result = matcher.rank(&create_profile(), jobs, &RankOptions::recommended());
        assert_eq!(ids(&result.matches), vec!["match"]);
        assert!(!result.fell_back);
    }

    #[test]
    fn test_rank_threshold_falls_back_to_top_n() {
        let matcher = Matcher::with_default_weights();
        let profile = CandidateProfile {
            skills: vec![],
            years_of_experience: 0,
            education_level: EducationLevel::Tenth,
        };
        let jobs: Vec<JobPosting> = (0..8)
            .map(|i| create_job(&i.to_string(), &["Kotlin"], "5"))
            .collect();

        let result = matcher.rank(&profile, jobs, &RankOptions::recommended());
        assert!(result.fell_back);
        assert_eq!(ids(&result.matches), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_rank_empty_jobs() {
        let matcher = Matcher::default();
        let result = matcher.rank(&create_profile(), vec![], &RankOptions::recommended());
        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_skill_overlap_percent() {
        let user = vec!["React".to_string(), "css".to_string()];
        let job = vec!["react".to_string(), "CSS".to_string(), "Webpack".to_string(), "Testing".to_string()];
        assert_eq!(skill_overlap_percent(&user, &job), 50.0);
        assert_eq!(skill_overlap_percent(&user, &[]), 0.0);
        assert_eq!(skill_overlap_percent(&[], &job), 0.0);
    }

    #[test]
    fn test_recommend_without_skills_keeps_order() {
        let matcher = Matcher::default();
        let jobs: Vec<JobPosting> = (0..12)
            .map(|i| create_job(&i.to_string(), &["React"], "1"))
            .collect();

        let recs = matcher.recommend(&[], jobs, 10);
        assert_eq!(recs.len(), 10);
        assert_eq!(recs[0].job.id, "0");
        assert!(recs.iter().all(|r| r.match_score.is_none()));
    }

    #[test]
    fn test_recommend_orders_by_overlap() {
        let matcher = Matcher::default();
        let jobs = vec![
            create_job("none", &["Figma"], "1"),
            create_job("half", &["Python", "SQL"], "1"),
            create_job("all", &["Python"], "1"),
        ];

        let recs = matcher.recommend(&["python".to_string()], jobs, 10);
        let order: Vec<&str> = recs.iter().map(|r| r.job.id.as_str()).collect();
        assert_eq!(order, vec!["all", "half", "none"]);
        assert_eq!(recs[1].match_score, Some(50.0));
    }
}
