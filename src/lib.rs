//! Skillfy resume analyzer library
//!
//! Compares the skills found in a resume with the skills a job description
//! asks for, using a fixed keyword vocabulary.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use analysis::analyzer::{AnalysisResult, SkillAnalyzer};
pub use analysis::vocabulary::SkillVocabulary;
pub use config::Config;
pub use error::{Result, SkillfyError};
