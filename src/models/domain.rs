use serde::{Deserialize, Serialize};

/// Education level on the fixed ordinal scale used by the scorer.
///
/// Declaration order is the scale order, so `Ord` compares levels directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "12th")]
    Twelfth,
    #[serde(rename = "diploma")]
    Diploma,
    #[default]
    #[serde(rename = "bachelor")]
    Bachelor,
    #[serde(rename = "masters", alias = "master")]
    Masters,
    #[serde(rename = "phd")]
    Phd,
}

impl EducationLevel {
    /// All levels, lowest first.
    pub const SCALE: [EducationLevel; 6] = [
        EducationLevel::Tenth,
        EducationLevel::Twelfth,
        EducationLevel::Diploma,
        EducationLevel::Bachelor,
        EducationLevel::Masters,
        EducationLevel::Phd,
    ];

    /// Position on the scale, 0 (`10th`) through 5 (`phd`).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EducationLevel::Tenth => "10th",
            EducationLevel::Twelfth => "12th",
            EducationLevel::Diploma => "diploma",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::Masters => "masters",
            EducationLevel::Phd => "phd",
        }
    }
}

impl std::fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured view of a resume, rebuilt for every analysis request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    /// Canonical skill names, unique, in first-match order
    pub skills: Vec<String>,
    #[serde(rename = "yearsOfExperience", default)]
    pub years_of_experience: u32,
    #[serde(rename = "education", alias = "educationLevel", default)]
    pub education_level: EducationLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

/// Job posting as stored by the job-management side; read-only here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "salaryMin", default)]
    pub salary_min: Option<f64>,
    #[serde(rename = "salaryMax", default)]
    pub salary_max: Option<f64>,
    /// Free-text skill labels, not normalized
    #[serde(default)]
    pub skills: Vec<String>,
    /// e.g. "5+ years"; only the leading integer is meaningful
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(rename = "educationLevel", default)]
    pub education_level: Option<EducationLevel>,
    #[serde(default)]
    pub status: JobStatus,
}

impl JobPosting {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }

    /// Minimum required years, read the way a lenient integer parse would:
    /// leading whitespace and sign allowed, digits up to the first non-digit.
    /// Missing, unparseable and negative figures all count as 0.
    pub fn required_years(&self) -> u32 {
        self.experience.as_deref().map(leading_integer).unwrap_or(0)
    }

    /// Required education, `bachelor` when the posting does not say
    pub fn required_education(&self) -> EducationLevel {
        self.education_level.unwrap_or_default()
    }
}

fn leading_integer(s: &str) -> u32 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    // Absurdly long digit runs saturate instead of failing
    digits[..end].parse::<u32>().unwrap_or(u32::MAX)
}

/// Score of one job against one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job: JobPosting,
    pub score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
}

/// Maximum points per scoring component. The three must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.skills + self.experience + self.education
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 60.0,
            experience: 25.0,
            education: 15.0,
        }
    }
}
