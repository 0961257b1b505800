//! Report structures handed to the output formatters

use crate::analysis::analyzer::AnalysisResult;
use crate::analysis::suggestions::generate_suggestions;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Analysis result bundled with everything a renderer needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: ReportSummary,

    pub result: AnalysisResult,

    /// Recommendation text derived from the missing skills
    pub suggestion: String,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub score: f64,
    pub score_label: String,
    pub total_matching: usize,
    pub total_missing: usize,
    /// Number of vocabulary skills the job description mentions
    pub job_skill_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub version: String,
    pub resume_source: String,
    pub job_source: String,
    pub processing_time_ms: u64,
    pub vocabulary_size: usize,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, metadata: ReportMetadata) -> Self {
        let summary = ReportSummary {
            score: result.score,
            score_label: score_label(result.score).to_string(),
            total_matching: result.matching_skills.len(),
            total_missing: result.missing_skills.len(),
            job_skill_count: result.matching_skills.len() + result.missing_skills.len(),
        };
        let suggestion = generate_suggestions(&result.missing_skills);

        Self {
            summary,
            result,
            suggestion,
            metadata,
        }
    }
}

impl ReportMetadata {
    pub fn new(resume_source: impl Into<String>, job_source: impl Into<String>, vocabulary_size: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            resume_source: resume_source.into(),
            job_source: job_source.into(),
            processing_time_ms: 0,
            vocabulary_size,
        }
    }

    pub fn with_processing_time(mut self, millis: u64) -> Self {
        self.processing_time_ms = millis;
        self
    }
}

pub fn score_label(score: f64) -> &'static str {
    match score {
        s if s >= 90.0 => "Excellent",
        s if s >= 80.0 => "Very Good",
        s if s >= 70.0 => "Good",
        s if s >= 60.0 => "Fair",
        s if s >= 50.0 => "Below Average",
        _ => "Poor",
    }
}
