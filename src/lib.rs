//! Career Match - resume-to-job matching engine for the CareerConnect job board
//!
//! This library turns free resume text into a structured candidate profile
//! (skills, years of experience, education) and ranks job postings against it
//! with a weighted 0-100 score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{extract_skills, normalize, parse_resume, Matcher, RankOptions, ResumeParser, SkillExtractor, SkillLexicon};
pub use models::{CandidateProfile, EducationLevel, JobPosting, MatchResult, ScoringWeights};
