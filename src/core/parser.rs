use crate::core::extractor::SkillExtractor;
use crate::models::{CandidateProfile, EducationLevel};
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Experience patterns, most specific first. Each one requires the number to
/// sit right next to a word that marks it as years of experience. Figures are
/// ASCII digits only; `\d` would also accept other Unicode digits.
static EXPERIENCE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)([0-9]+)\s*(?:years?|yrs?|yr)\s*(?:of\s*)?(?:experience|exp|working|work)",
        r"(?i)experience:\s*([0-9]+)\s*(?:years?|yrs?)",
        r"(?i)([0-9]+)\s*years?\s*(?:in|as|of|with)",
        r"(?i)([0-9]+)\s*(?:years?|yrs?)",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

static DEFAULT_PARSER: LazyLock<ResumeParser> =
    LazyLock::new(|| ResumeParser::new(Arc::clone(SkillExtractor::shared_default())));

/// Education keywords, highest level first; the first level with any hit wins
const EDUCATION_KEYWORDS: &[(EducationLevel, &[&str])] = &[
    (EducationLevel::Phd, &["phd", "doctorate", "ph.d"]),
    (EducationLevel::Masters, &["master", "m.tech", "mba", "m.s"]),
    (EducationLevel::Bachelor, &["bachelor", "b.tech", "b.e", "bsc", "b.s"]),
    (EducationLevel::Diploma, &["diploma", "12th", "higher secondary"]),
];

/// Turns raw resume text into a [`CandidateProfile`].
///
/// Never fails: missing pieces fall back to no skills, 0 years and `bachelor`.
#[derive(Debug, Clone)]
pub struct ResumeParser {
    extractor: Arc<SkillExtractor>,
}

impl ResumeParser {
    pub fn new(extractor: Arc<SkillExtractor>) -> Self {
        Self { extractor }
    }

    /// Parser over the built-in lexicon, compiled on first use
    pub fn shared_default() -> &'static ResumeParser {
        &DEFAULT_PARSER
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }

    pub fn parse(&self, text: &str) -> CandidateProfile {
        CandidateProfile {
            skills: self.extractor.extract(text),
            years_of_experience: parse_years_of_experience(text),
            education_level: parse_education_level(text),
        }
    }
}

/// Parse with the built-in lexicon
pub fn parse_resume(text: &str) -> CandidateProfile {
    ResumeParser::shared_default().parse(text)
}

/// First figure matched by the experience patterns in priority order, else 0.
/// A figure that does not fit a `u32` hands over to the next pattern.
pub fn parse_years_of_experience(text: &str) -> u32 {
    EXPERIENCE_PATTERNS
        .iter()
        .find_map(|re| {
            re.captures(text)
                .and_then(|caps| caps.get(1))
                .and_then(|m| m.as_str().parse().ok())
        })
        .unwrap_or(0)
}

/// Plain substring scan, so "scrum master" reads as a masters degree
pub fn parse_education_level(text: &str) -> EducationLevel {
    let text = text.to_lowercase();

    EDUCATION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(level, _)| *level)
        .unwrap_or_default()
}
