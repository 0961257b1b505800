//! Output formatters: console, JSON, Markdown, and HTML renderings of a report

use crate::config::OutputFormat;
use crate::error::{Result, SkillfyError};
use crate::output::report::AnalysisReport;
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored skill badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and API integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with score cards and badge lists
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a report to whichever registered formatter supports the requested format
pub struct ReportGenerator {
    formatters: Vec<Box<dyn OutputFormatter>>,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Skillfy Resume Analyzer</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }
        h1.title { text-align: center; color: #4CAF50; }
        .cards {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 20px;
            margin: 20px 0;
        }
        .card { padding: 20px; border-radius: 10px; text-align: center; }
        .card-score { background-color: #E8F5E9; }
        .card-score h3 { color: #2E7D32; }
        .card-score h1 { color: #1B5E20; }
        .card-total { background-color: #E3F2FD; }
        .card-total h3 { color: #1565C0; }
        .card-total h1 { color: #0D47A1; }
        .badges { display: flex; flex-wrap: wrap; gap: 6px; }
        .badge {
            color: white;
            padding: 8px 12px;
            border-radius: 20px;
            margin: 4px;
            display: inline-block;
            font-weight: 500;
            white-space: nowrap;
            box-shadow: 0px 2px 6px rgba(0,0,0,0.15);
        }
        .badge-match { background-color: #4CAF50; }
        .badge-missing { background-color: #FF5252; }
        .suggestion {
            background: #E3F2FD;
            border-left: 4px solid #1565C0;
            padding: 15px;
            border-radius: 6px;
        }
        .metadata { margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <h1 class="title">📄 Skillfy Resume Analyzer</h1>

    <div class="cards">
        <div class="card card-score">
            <h3>Fit Score</h3>
            <h1>{{ score }}%</h1>
            <p>{{ score_label }}</p>
        </div>
        <div class="card card-total">
            <h3>Total Matching Skills</h3>
            <h1>{{ total_matching }}</h1>
        </div>
    </div>

    <h2>✅ Matching Skills</h2>
    {% if matching_skills.is_empty() %}
    <p>None</p>
    {% else %}
    <div class="badges">
        {% for skill in matching_skills %}<span class="badge badge-match">{{ skill }}</span>
        {% endfor %}
    </div>
    {% endif %}

    <h2>❌ Missing Skills</h2>
    {% if missing_skills.is_empty() %}
    <p>None</p>
    {% else %}
    <div class="badges">
        {% for skill in missing_skills %}<span class="badge badge-missing">{{ skill }}</span>
        {% endfor %}
    </div>
    {% endif %}

    <h2>💡 Resume Improvement Suggestions</h2>
    <div class="suggestion">{{ suggestion }}</div>

    <div class="metadata">
        <p>Generated by Skillfy v{{ version }} on {{ generated_at }}</p>
        <p>Resume: {{ resume_source }} | Job: {{ job_source }}</p>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    score: String,
    score_label: String,
    total_matching: usize,
    matching_skills: Vec<String>,
    missing_skills: Vec<String>,
    suggestion: String,
    version: String,
    generated_at: String,
    resume_source: String,
    job_source: String,
}

fn format_timestamp(report: &AnalysisReport) -> String {
    report
        .metadata
        .generated_at
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn file_label(source: &str) -> String {
    Path::new(source)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string())
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".blue().bold(), title.blue().bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_badges<'a>(&self, skills: impl ExactSizeIterator<Item = &'a String>, background: Color) -> String {
        if skills.len() == 0 {
            return "  None\n".to_string();
        }

        let badges: Vec<String> = skills
            .map(|skill| {
                if self.use_colors {
                    format!(" {} ", skill).white().bold().on_color(background).to_string()
                } else {
                    format!("[{}]", skill)
                }
            })
            .collect();

        format!("  {}\n", badges.join(" "))
    }

    fn format_score(&self, score: f64, label: &str) -> String {
        let color = match score {
            s if s >= 70.0 => Color::Green,
            s if s >= 50.0 => Color::Yellow,
            _ => Color::Red,
        };

        if self.use_colors {
            format!("{} {}", format!("{}%", score).color(color).bold(), format!("[{}]", label).color(color))
        } else {
            format!("{}% [{}]", score, label)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 SKILLFY RESUME ANALYSIS"));
        output.push_str(&format!(
            "Fit Score: {}\n",
            self.format_score(report.summary.score, &report.summary.score_label)
        ));
        output.push_str(&format!("Total Matching Skills: {}\n", report.summary.total_matching));

        output.push_str(&self.format_header("✅ Matching Skills"));
        output.push_str(&self.format_badges(report.result.matching_skills.iter(), Color::Green));

        output.push_str(&self.format_header("❌ Missing Skills"));
        output.push_str(&self.format_badges(report.result.missing_skills.iter(), Color::Red));

        output.push_str(&self.format_header("💡 Resume Improvement Suggestions"));
        output.push_str(&format!("  {}\n", self.colorize(&report.suggestion, Color::Cyan)));

        if self.detailed {
            output.push_str(&self.format_header("📊 Details"));
            output.push_str(&format!("Resume: {}\n", report.metadata.resume_source));
            output.push_str(&format!("Job description: {}\n", report.metadata.job_source));
            output.push_str(&format!(
                "Skills requested by job: {} of {} known\n",
                report.summary.job_skill_count, report.metadata.vocabulary_size
            ));
            output.push_str(&format!("Processing time: {}ms\n", report.metadata.processing_time_ms));
        }

        output.push_str(&format!(
            "\n{} Generated by Skillfy v{} | {}\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.version,
            format_timestamp(report)
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_badges<'a>(skills: impl ExactSizeIterator<Item = &'a String>) -> String {
        if skills.len() == 0 {
            return "None\n\n".to_string();
        }
        let badges: Vec<String> = skills.map(|skill| format!("`{}`", skill)).collect();
        format!("{}\n\n", badges.join(" "))
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📄 Skillfy Resume Analysis\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Resume:** `{}` | **Job:** `{}`\n\n",
                format_timestamp(report),
                file_label(&report.metadata.resume_source),
                file_label(&report.metadata.job_source)
            ));
        }

        output.push_str("| Fit Score | Total Matching Skills |\n");
        output.push_str("|-----------|-----------------------|\n");
        output.push_str(&format!(
            "| {}% ({}) | {} |\n\n",
            report.summary.score, report.summary.score_label, report.summary.total_matching
        ));

        output.push_str("## ✅ Matching Skills\n\n");
        output.push_str(&Self::markdown_badges(report.result.matching_skills.iter()));

        output.push_str("## ❌ Missing Skills\n\n");
        output.push_str(&Self::markdown_badges(report.result.missing_skills.iter()));

        output.push_str("## 💡 Resume Improvement Suggestions\n\n");
        output.push_str(&format!("> {}\n", report.suggestion));

        if self.include_metadata {
            output.push_str("\n---\n\n");
            output.push_str(&format!("*Generated by Skillfy v{}*\n", report.metadata.version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        HtmlTemplate {
            include_styles: self.include_styles,
            score: report.summary.score.to_string(),
            score_label: report.summary.score_label.clone(),
            total_matching: report.summary.total_matching,
            matching_skills: report.result.matching_skills.iter().cloned().collect(),
            missing_skills: report.result.missing_skills.iter().cloned().collect(),
            suggestion: report.suggestion.clone(),
            version: report.metadata.version.clone(),
            generated_at: format_timestamp(report),
            resume_source: file_label(&report.metadata.resume_source),
            job_source: file_label(&report.metadata.job_source),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        Ok(self.create_template_data(report).render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            formatters: vec![
                Box::new(ConsoleFormatter::new(use_colors, detailed)),
                Box::new(JsonFormatter::new(pretty_json)),
                Box::new(MarkdownFormatter::new(true)),
                Box::new(HtmlFormatter::new(true)),
            ],
        }
    }

    /// Build a generator from an explicit formatter list.
    pub fn from_formatters(formatters: Vec<Box<dyn OutputFormatter>>) -> Self {
        Self { formatters }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        let formatter = self
            .formatters
            .iter()
            .find(|formatter| formatter.supports_format() == format)
            .ok_or_else(|| {
                SkillfyError::OutputFormatting(format!("No formatter registered for {:?} output", format))
            })?;

        formatter.format_report(report)
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Where `--save` writes: a directory target gets a generated file name, anything else is used as given.
pub fn resolve_save_path(target: &Path, format: OutputFormat, resume_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(suggest_filename(format, resume_name, false))
    } else {
        target.to_path_buf()
    }
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_skills{}.{}", base_name, timestamp_suffix, extension)
}
