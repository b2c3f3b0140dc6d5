// Core engine exports
pub mod extractor;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod parser;
pub mod scoring;

pub use extractor::{extract_skills, SkillExtractor};
pub use lexicon::{LexiconError, SkillEntry, SkillLexicon};
pub use matcher::{skill_overlap_percent, Matcher, RankOptions, RankedMatches, SkillRecommendation};
pub use normalize::{normalize, sanitize_text};
pub use parser::{parse_resume, ResumeParser};
pub use scoring::{calculate_match_score, score_breakdown, ScoreBreakdown};
