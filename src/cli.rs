//! CLI interface for the skillfy analyzer

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md"];
pub const JOB_EXTENSIONS: &[&str] = &["txt", "md"];

#[derive(Parser)]
#[command(name = "skillfy")]
#[command(about = "Analyze a resume against a job description")]
#[command(long_about = "Find matching and missing skills between a resume and a job description, with a fit score and improvement suggestions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume against a job description
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description passed inline
        #[arg(long)]
        job_text: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to a file, or into a directory under a generated name
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include extracted skill lists in the output
        #[arg(short, long)]
        detailed: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// List the skills the analyzer recognizes
    Vocabulary,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

/// Reject a blank job description before any analysis runs.
pub fn validate_job_description(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        Err("Please provide a job description before analyzing.".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("md"), Ok(OutputFormat::Markdown));
        assert_eq!(parse_output_format("html"), Ok(OutputFormat::Html));
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(Path::new("resume.PDF"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("resume.docx"), RESUME_EXTENSIONS).is_ok());
        assert!(validate_file_extension(Path::new("resume.doc"), RESUME_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("resume"), RESUME_EXTENSIONS).is_err());
        assert!(validate_file_extension(Path::new("job.docx"), JOB_EXTENSIONS).is_err());
    }

    #[test]
    fn test_validate_job_description() {
        assert!(validate_job_description("Python developer").is_ok());
        assert!(validate_job_description("   \n\t").is_err());
    }

    #[test]
    fn test_analyze_requires_a_job_source() {
        let parsed = Cli::try_parse_from(["skillfy", "analyze", "--resume", "cv.pdf"]);
        assert!(parsed.is_err());

        let parsed = Cli::try_parse_from([
            "skillfy", "analyze", "--resume", "cv.pdf", "--job-text", "Python",
        ]);
        assert!(parsed.is_ok());

        let parsed = Cli::try_parse_from([
            "skillfy", "analyze", "--resume", "cv.pdf", "--job", "job.txt", "--job-text", "Python",
        ]);
        assert!(parsed.is_err());
    }
}
