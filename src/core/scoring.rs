use crate::core::normalize::normalize;
use crate::models::{CandidateProfile, JobPosting, ScoringWeights};
use std::collections::HashSet;

/// Unrounded component values behind a match score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    /// Rounded sum, 0-100
    pub total: u8,
}

/// Calculate a match score (0-100) for a job against a candidate profile
///
/// Scoring formula:
/// score = round(
///     skill_ratio * weights.skills +          # matched skills / larger skill list
///     experience_ratio * weights.experience + # full when years >= required
///     education_ratio * weights.education     # full when level >= required
/// )
///
/// The second value is the display-only list of matched skills.
pub fn calculate_match_score(
    profile: &CandidateProfile,
    job: &JobPosting,
    weights: &ScoringWeights,
) -> (u8, Vec<String>) {
    let breakdown = score_breakdown(profile, job, weights);
    (breakdown.total, display_matched_skills(profile, job))
}

pub fn score_breakdown(
    profile: &CandidateProfile,
    job: &JobPosting,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let skills = skill_ratio(&profile.skills, &job.skills) * weights.skills;
    let experience =
        experience_ratio(profile.years_of_experience, job.required_years()) * weights.experience;
    let education = education_ratio(
        profile.education_level.index(),
        job.required_education().index(),
    ) * weights.education;

    let raw = (skills + experience + education).round();
    debug_assert!(
        (0.0..=100.0).contains(&raw),
        "match score {} outside 0-100 with weights {:?}",
        raw,
        weights
    );

    ScoreBreakdown {
        skills,
        experience,
        education,
        total: raw.clamp(0.0, 100.0) as u8,
    }
}

/// Fraction (0-1) of profile skills that overlap a job skill.
///
/// Both sides are normalized; a profile skill matches when it equals, contains
/// or is contained in some job skill. Empty normalized forms never match. The
/// denominator is the longer of the two lists so extra skills on either side
/// dilute the ratio.
#[inline]
fn skill_ratio(profile_skills: &[String], job_skills: &[String]) -> f64 {
    let job_norm: Vec<String> = job_skills
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect();

    let matched: HashSet<String> = profile_skills
        .iter()
        .map(|s| normalize(s))
        .filter(|p| !p.is_empty())
        .filter(|p| {
            job_norm
                .iter()
                .any(|j| j == p || j.contains(p.as_str()) || p.contains(j.as_str()))
        })
        .collect();

    let denominator = profile_skills.len().max(job_skills.len()).max(1);
    matched.len() as f64 / denominator as f64
}

/// Full credit once the requirement is met, linear below it
#[inline]
fn experience_ratio(years: u32, required: u32) -> f64 {
    if years >= required {
        return 1.0;
    }
    years as f64 / required.max(1) as f64
}

#[inline]
fn education_ratio(candidate: usize, required: usize) -> f64 {
    if candidate >= required {
        return 1.0;
    }
    candidate as f64 / (required + 1) as f64
}

/// Looser, presentation-only overlap: raw lowercase containment in either
/// direction, or the normalized containment the scorer uses.
pub fn display_matched_skills(profile: &CandidateProfile, job: &JobPosting) -> Vec<String> {
    let job_lower: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
    let job_norm: Vec<String> = job.skills.iter().map(|s| normalize(s)).collect();

    profile
        .skills
        .iter()
        .filter(|skill| {
            let lower = skill.to_lowercase();
            let norm = normalize(skill);

            let raw_overlap = !lower.is_empty()
                && job_lower
                    .iter()
                    .any(|j| !j.is_empty() && (j.contains(&lower) || lower.contains(j.as_str())));
            let norm_overlap = !norm.is_empty()
                && job_norm
                    .iter()
                    .any(|j| !j.is_empty() && (j.contains(&norm) || norm.contains(j.as_str())));

            raw_overlap || norm_overlap
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationLevel, JobStatus};

    fn create_test_profile(skills: &[&str], years: u32, education: EducationLevel) -> CandidateProfile {
        CandidateProfile {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            years_of_experience: years,
            education_level: education,
        }
    }

    fn create_test_job(skills: &[&str], experience: &str, education: Option<EducationLevel>) -> JobPosting {
        JobPosting {
            id: "job_1".to_string(),
            title: "Full Stack Developer".to_string(),
            company: "Tech Corp".to_string(),
            location: "Bangalore".to_string(),
            salary_min: Some(12.0),
            salary_max: Some(20.0),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: Some(experience.to_string()),
            education_level: education,
            status: JobStatus::Active,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let profile = create_test_profile(&["react", "javascript", "nodejs"], 5, EducationLevel::Bachelor);
        let job = create_test_job(
            &["React", "JavaScript", "Node.js", "MongoDB", "Docker"],
            "5+ years",
            Some(EducationLevel::Bachelor),
        );

        let breakdown = score_breakdown(&profile, &job, &ScoringWeights::default());
        assert!((breakdown.skills - 36.0).abs() < 1e-9);
        assert_eq!(breakdown.experience, 25.0);
        assert_eq!(breakdown.education, 15.0);
        assert_eq!(breakdown.total, 76);

        let (score, matched) = calculate_match_score(&profile, &job, &ScoringWeights::default());
        assert_eq!(score, 76);
        assert_eq!(matched, vec!["react", "javascript", "nodejs"]);
    }

    #[test]
    fn test_full_match_ceiling() {
        let profile = create_test_profile(&["python", "django", "sql"], 8, EducationLevel::Masters);
        let job = create_test_job(&["Python", "Django", "PostgreSQL"], "3+ years", None);

        let (score, _) = calculate_match_score(&profile, &job, &ScoringWeights::default());
        assert_eq!(score, 100);
    }

    #[test]
    fn test_low_floor() {
        let profile = create_test_profile(&[], 0, EducationLevel::Tenth);
        let job = create_test_job(
            &["Kubernetes", "Docker", "AWS", "CI/CD", "Terraform"],
            "7+ years",
            Some(EducationLevel::Phd),
        );

        let breakdown = score_breakdown(&profile, &job, &ScoringWeights::default());
        assert_eq!(breakdown.skills, 0.0);
        assert_eq!(breakdown.experience, 0.0);
        assert_eq!(breakdown.education, 0.0);
        assert_eq!(breakdown.total, 0);
    }

    #[test]
    fn test_partial_experience_and_education() {
        let profile = create_test_profile(&["figma"], 2, EducationLevel::Diploma);
        let job = create_test_job(&["Figma"], "4+ years", Some(EducationLevel::Masters));

        let breakdown = score_breakdown(&profile, &job, &ScoringWeights::default());
        assert_eq!(breakdown.skills, 60.0);
        assert_eq!(breakdown.experience, 12.5);
        // diploma (2) vs masters (4): 2 / 5 * 15
        assert!((breakdown.education - 6.0).abs() < 1e-9);
        assert_eq!(breakdown.total, 79);
    }

    #[test]
    fn test_substring_matching_both_directions() {
        // "ui design" normalizes to "uidesign", contained in "uidesignsystems"
        let profile = create_test_profile(&["ui design", "reactnative"], 0, EducationLevel::Bachelor);
        let job = create_test_job(&["UI Design Systems", "React"], "0", None);

        let breakdown = score_breakdown(&profile, &job, &ScoringWeights::default());
        assert_eq!(breakdown.skills, 60.0);
    }

    #[test]
    fn test_symbol_only_skills_never_match() {
        let profile = create_test_profile(&["++"], 0, EducationLevel::Bachelor);
        let job = create_test_job(&["C++", "#"], "", None);

        let breakdown = score_breakdown(&profile, &job, &ScoringWeights::default());
        assert_eq!(breakdown.skills, 0.0);
    }

    #[test]
    fn test_display_matched_skills_is_looser() {
        let profile = create_test_profile(&["adobe xd", "rest api", "vue"], 0, EducationLevel::Bachelor);
        let job = create_test_job(&["Adobe XD", "REST APIs", "Vue.js"], "", None);

        let matched = display_matched_skills(&profile, &job);
        assert_eq!(matched, vec!["adobe xd", "rest api", "vue"]);
    }

    #[test]
    fn test_score_bounds() {
        let weights = ScoringWeights::default();
        for years in [0, 1, 5, 40] {
            for level in EducationLevel::SCALE {
                for job_level in EducationLevel::SCALE {
                    let profile = create_test_profile(&["java", "spring", "sql"], years, level);
                    let job = create_test_job(&["Java", "AWS"], "10 years", Some(job_level));
                    let (score, _) = calculate_match_score(&profile, &job, &weights);
                    assert!(score <= 100, "score {} out of range", score);
                }
            }
        }
    }
}
