//! Skill vocabulary used as the matching dictionary

use crate::error::{Result, SkillfyError};
use std::collections::HashSet;

/// Skills recognized out of the box, in matching order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "machine learning",
    "deep learning",
    "nlp",
    "data analysis",
    "sql",
    "html",
    "css",
    "javascript",
    "react",
    "django",
    "flask",
    "pandas",
    "numpy",
    "excel",
    "communication",
    "leadership",
    "problem-solving",
    "project management",
    "adaptability",
];

/// Ordered, immutable list of lowercase skill keywords.
///
/// Built once at startup and handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    entries: Vec<String>,
}

impl SkillVocabulary {
    /// Build a vocabulary from arbitrary entries.
    ///
    /// Entries are trimmed and lower-cased; blanks are dropped and repeats keep
    /// their first position.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries: Vec<String> = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim().to_lowercase())
            .filter(|entry| !entry.is_empty())
            .filter(|entry| seen.insert(entry.clone()))
            .collect();

        if entries.is_empty() {
            return Err(SkillfyError::Vocabulary(
                "skill vocabulary must contain at least one entry".to_string(),
            ));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Display form of a skill: first character upper-cased, the rest untouched.
pub fn display_form(skill: &str) -> String {
    let mut chars = skill.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
