use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors raised while building a skill lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid lexicon file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate canonical skill: {0}")]
    DuplicateSkill(String),

    #[error("Skill has no variants: {0}")]
    EmptyVariants(String),
}

/// One canonical skill and the surface forms that count as evidence of it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub variants: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default, rename = "skill")]
    skills: Vec<SkillEntry>,
}

/// Ordered, immutable table of canonical skills.
///
/// Iteration order is the order entries were given in, which fixes the order
/// of extracted skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLexicon {
    entries: Vec<SkillEntry>,
}

impl SkillLexicon {
    /// Build a lexicon, rejecting duplicate names and empty variant lists.
    /// Variants are stored lowercased.
    pub fn new(entries: Vec<SkillEntry>) -> Result<Self, LexiconError> {
        let mut seen = HashSet::with_capacity(entries.len());
        let mut normalized = Vec::with_capacity(entries.len());

        for entry in entries {
            let name = entry.name.trim().to_lowercase();
            if !seen.insert(name.clone()) {
                return Err(LexiconError::DuplicateSkill(name));
            }

            let variants: Vec<String> = entry
                .variants
                .iter()
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .collect();
            if variants.is_empty() {
                return Err(LexiconError::EmptyVariants(name));
            }

            normalized.push(SkillEntry { name, variants });
        }

        Ok(Self { entries: normalized })
    }

    /// Parse a lexicon from TOML of the form
    ///
    /// ```toml
    /// [[skill]]
    /// name = "react"
    /// variants = ["react", "reactjs", "react.js"]
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, LexiconError> {
        let file: LexiconFile = toml::from_str(source)?;
        Self::new(file.skills)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }
}

impl Default for SkillLexicon {
    fn default() -> Self {
        let entries = DEFAULT_SKILLS
            .iter()
            .map(|(name, variants)| SkillEntry {
                name: name.to_string(),
                variants: variants.iter().map(|v| v.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }
}

/// Built-in lexicon
const DEFAULT_SKILLS: &[(&str, &[&str])] = &[
    ("react", &["react", "reactjs", "react.js"]),
    ("javascript", &["javascript", "js", "es6", "es5"]),
    ("python", &["python", "py"]),
    ("java", &["java", "j2ee", "core java"]),
    ("cpp", &["c++", "cpp"]),
    ("csharp", &["c#", "csharp", "c sharp"]),
    ("nodejs", &["nodejs", "node.js", "node"]),
    ("express", &["express", "expressjs"]),
    ("mongodb", &["mongodb", "mongo"]),
    ("postgresql", &["postgresql", "postgres", "psql"]),
    ("sql", &["sql", "mysql", "sqlserver"]),
    ("aws", &["aws", "amazon web services"]),
    ("azure", &["azure", "microsoft azure"]),
    ("gcp", &["gcp", "google cloud"]),
    ("docker", &["docker", "containers"]),
    ("kubernetes", &["kubernetes", "k8s"]),
    ("terraform", &["terraform"]),
    ("figma", &["figma"]),
    ("adobe xd", &["adobe xd", "xd"]),
    ("ui design", &["ui design", "user interface"]),
    ("ux design", &["ux design", "user experience"]),
    ("devops", &["devops", "dev ops"]),
    ("machine learning", &["machine learning", "ml", "ai", "artificial intelligence"]),
    ("tensorflow", &["tensorflow", "tf"]),
    ("django", &["django"]),
    ("flask", &["flask"]),
    ("spring", &["spring", "spring boot", "springboot"]),
    ("vue", &["vue", "vuejs", "vue.js"]),
    ("angular", &["angular", "angularjs"]),
    ("typescript", &["typescript", "ts"]),
    ("html", &["html", "html5"]),
    ("css", &["css", "css3", "scss", "sass"]),
    ("git", &["git", "github", "gitlab", "bitbucket"]),
    ("linux", &["linux", "ubuntu", "debian"]),
    ("unix", &["unix"]),
    ("agile", &["agile", "scrum", "kanban"]),
    ("rest api", &["rest api", "restful api", "api"]),
    ("graphql", &["graphql"]),
    ("redis", &["redis", "cache"]),
    ("elasticsearch", &["elasticsearch", "elastic"]),
    ("jenkins", &["jenkins", "ci/cd"]),
    ("selenium", &["selenium"]),
    ("jira", &["jira"]),
    ("webpack", &["webpack"]),
    ("npm", &["npm", "node package manager"]),
    ("yarn", &["yarn"]),
    ("testing", &["testing", "jest", "mocha", "unittest"]),
    ("aws lambda", &["lambda", "serverless"]),
    ("microservices", &["microservices", "microservice"]),
];
