//! Skill analysis core
//! Vocabulary matching, fit scoring, and suggestion text

pub mod analyzer;
pub mod extractor;
pub mod scorer;
pub mod suggestions;
pub mod vocabulary;

use std::collections::BTreeSet;

/// Set of display-form skill names, iterated alphabetically.
pub type SkillSet = BTreeSet<String>;
