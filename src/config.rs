//! Configuration management for the skillfy analyzer

use crate::analysis::vocabulary::{SkillVocabulary, DEFAULT_SKILLS};
use crate::error::{Result, SkillfyError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Base skill list; replaces the built-in vocabulary when edited
    pub skills: Vec<String>,
    /// Appended after `skills`
    #[serde(default)]
    pub extra_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: VocabularyConfig {
                skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
                extra_skills: Vec::new(),
            },
            input: InputConfig {
                enable_caching: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Load the user configuration, writing defaults on first run.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            SkillfyError::Configuration(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillfyError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillfy")
            .join("config.toml")
    }

    /// Build the vocabulary described by this configuration.
    pub fn skill_vocabulary(&self) -> Result<SkillVocabulary> {
        SkillVocabulary::new(
            self.vocabulary
                .skills
                .iter()
                .chain(self.vocabulary.extra_skills.iter()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_vocabulary_matches_builtin() {
        let config = Config::default();
        assert_eq!(config.skill_vocabulary().unwrap(), SkillVocabulary::default());
    }

    #[test]
    fn test_extra_skills_are_appended() {
        let mut config = Config::default();
        config.vocabulary.extra_skills = vec!["Rust".to_string(), "python".to_string()];

        let vocabulary = config.skill_vocabulary().unwrap();
        assert_eq!(vocabulary.len(), DEFAULT_SKILLS.len() + 1);
        assert_eq!(vocabulary.entries().last().map(String::as_str), Some("rust"));
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        let mut config = Config::default();
        config.vocabulary.skills.clear();
        assert!(matches!(config.skill_vocabulary(), Err(SkillfyError::Vocabulary(_))));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.output.format = OutputFormat::Markdown;
        config.vocabulary.extra_skills = vec!["kubernetes".to_string()];
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
        assert_eq!(loaded.vocabulary.extra_skills, vec!["kubernetes".to_string()]);
        assert!(loaded.input.enable_caching);
    }

    #[test]
    fn test_invalid_toml_reports_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "vocabulary = [not toml").unwrap();

        assert!(matches!(Config::load_from(&path), Err(SkillfyError::Configuration(_))));
    }
}
