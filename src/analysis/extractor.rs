//! Skill extraction by substring matching against the vocabulary

use crate::analysis::vocabulary::{display_form, SkillVocabulary};
use crate::analysis::SkillSet;
use crate::error::Result;
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

/// Finds vocabulary skills mentioned anywhere in a text.
///
/// Matching is a plain case-insensitive substring test, not word-boundary
/// aware: short entries also match inside longer words ("excel" in
/// "excellent", "sql" in "nosql").
pub struct SkillExtractor {
    matcher: AhoCorasick,
    display_names: Vec<String>,
}

impl SkillExtractor {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self> {
        // Standard match kind is required for overlapping search, so
        // "javascript" reports both "java" and "javascript".
        let matcher = AhoCorasick::builder()
            .match_kind(aho_corasick::MatchKind::Standard)
            .build(vocabulary.entries())?;

        let display_names = vocabulary.iter().map(display_form).collect();

        Ok(Self {
            matcher,
            display_names,
        })
    }

    /// Extract the set of skills whose keyword occurs in `text`.
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        let text = text.to_lowercase();

        let found: HashSet<usize> = self
            .matcher
            .find_overlapping_iter(&text)
            .map(|mat| mat.pattern().as_usize())
            .collect();

        found
            .into_iter()
            .map(|id| self.display_names[id].clone())
            .collect()
    }

    pub fn skill_count(&self) -> usize {
        self.display_names.len()
    }
}
