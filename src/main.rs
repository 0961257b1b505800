//! Skillfy: resume vs. job description skill analyzer

use clap::Parser;
use log::{error, info};
use skillfy::analysis::analyzer::SkillAnalyzer;
use skillfy::analysis::vocabulary::display_form;
use skillfy::cli::{self, Cli, Commands, ConfigAction};
use skillfy::config::Config;
use skillfy::error::{Result, SkillfyError};
use skillfy::input::InputManager;
use skillfy::output::formatter::{resolve_save_path, save_report_to_file, ReportGenerator};
use skillfy::output::report::{AnalysisReport, ReportMetadata};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(explicit_path: Option<&PathBuf>) -> Result<Config> {
    match explicit_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            output,
            save,
            detailed,
            no_color,
        } => {
            info!("Starting resume analysis");

            cli::validate_file_extension(&resume, cli::RESUME_EXTENSIONS)
                .map_err(|e| SkillfyError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, cli::JOB_EXTENSIONS)
                    .map_err(|e| SkillfyError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(SkillfyError::InvalidInput)?,
                None => config.output.format,
            };

            let mut input_manager = InputManager::new().with_cache(config.input.enable_caching);

            let resume_text = input_manager.extract_text(&resume).await?;

            let (job_text, job_source) = match (job, job_text) {
                (Some(path), _) => (input_manager.extract_text(&path).await?, path.display().to_string()),
                (None, Some(text)) => (text, "inline text".to_string()),
                (None, None) => {
                    return Err(SkillfyError::InvalidInput(
                        "Please provide a job description before analyzing.".to_string(),
                    ))
                }
            };

            cli::validate_job_description(&job_text).map_err(SkillfyError::InvalidInput)?;

            let vocabulary = config.skill_vocabulary()?;
            let analyzer = SkillAnalyzer::new(&vocabulary)?;

            let started = Instant::now();
            let result = analyzer.analyze(&resume_text, &job_text);
            let elapsed_ms = started.elapsed().as_millis() as u64;
            info!(
                "Analysis complete: {}% fit, {} matching, {} missing",
                result.score,
                result.matching_skills.len(),
                result.missing_skills.len()
            );

            let metadata = ReportMetadata::new(resume.display().to_string(), job_source, vocabulary.len())
                .with_processing_time(elapsed_ms);
            let report = AnalysisReport::new(result, metadata);

            let generator = ReportGenerator::with_options(
                config.output.color_output && !no_color && save.is_none(),
                detailed || config.output.detailed,
                config.output.pretty_json,
            );
            let content = generator.generate_report(&report, output_format)?;

            match save {
                Some(target) => {
                    let path = resolve_save_path(&target, output_format, &resume.display().to_string());
                    save_report_to_file(&content, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", content),
            }
        }

        Commands::Vocabulary => {
            let vocabulary = config.skill_vocabulary()?;
            println!("📚 Recognized skills ({})\n", vocabulary.len());
            for (i, skill) in vocabulary.iter().enumerate() {
                println!("  {:>2}. {:<20} → {}", i + 1, skill, display_form(skill));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| SkillfyError::Configuration(format!("Failed to serialize config: {}", e)))?;
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
