use crate::core::lexicon::SkillLexicon;
use regex::Regex;
use std::sync::{Arc, LazyLock};

/// Left anchor: start of text or any character that is not an ASCII word character
const LEADING_BOUNDARY: &str = r"(?:^|[^0-9A-Za-z_])";
/// Right anchor: end of text or a non-word character. Only a single match test
/// is made per pattern, so consuming the character is equivalent to a lookahead.
const TRAILING_BOUNDARY: &str = r"(?:[^0-9A-Za-z_]|$)";

static DEFAULT_EXTRACTOR: LazyLock<Arc<SkillExtractor>> =
    LazyLock::new(|| Arc::new(SkillExtractor::new(Arc::new(SkillLexicon::default()))));

struct CompiledSkill {
    name: String,
    patterns: Vec<Regex>,
}

/// Finds canonical skills in free text.
///
/// Every lexicon variant is compiled once into a token-anchored pattern. A
/// variant matches when it is surrounded by non-word characters or the ends of
/// the text, so "java" does not fire inside "javascript" while "c++" and "c#"
/// still match.
pub struct SkillExtractor {
    lexicon: Arc<SkillLexicon>,
    skills: Vec<CompiledSkill>,
}

impl SkillExtractor {
    pub fn new(lexicon: Arc<SkillLexicon>) -> Self {
        let skills = lexicon
            .entries()
            .iter()
            .map(|entry| CompiledSkill {
                name: entry.name.clone(),
                patterns: entry
                    .variants
                    .iter()
                    .filter_map(|variant| compile_variant(&entry.name, variant))
                    .collect(),
            })
            .collect();

        Self { lexicon, skills }
    }

    /// Extractor over the built-in lexicon, compiled on first use
    pub fn shared_default() -> &'static Arc<SkillExtractor> {
        &DEFAULT_EXTRACTOR
    }

    pub fn lexicon(&self) -> &SkillLexicon {
        &self.lexicon
    }

    /// Canonical skills found in `text`, each at most once, in lexicon order
    pub fn extract(&self, text: &str) -> Vec<String> {
        let text = text.to_lowercase();

        self.skills
            .iter()
            .filter(|skill| skill.patterns.iter().any(|re| re.is_match(&text)))
            .map(|skill| skill.name.clone())
            .collect()
    }
}

impl std::fmt::Debug for SkillExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillExtractor")
            .field("skills", &self.skills.len())
            .field(
                "patterns",
                &self.skills.iter().map(|s| s.patterns.len()).sum::<usize>(),
            )
            .finish()
    }
}

fn compile_variant(skill: &str, variant: &str) -> Option<Regex> {
    let pattern = format!(
        "{}{}{}",
        LEADING_BOUNDARY,
        regex::escape(&variant.to_lowercase()),
        TRAILING_BOUNDARY
    );

    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(skill, variant, "Skipping skill variant that failed to compile: {}", e);
            None
        }
    }
}

/// Extract skills with the built-in lexicon
pub fn extract_skills(text: &str) -> Vec<String> {
    SkillExtractor::shared_default().extract(text)
}
