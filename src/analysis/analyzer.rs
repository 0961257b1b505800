//! Analysis orchestrator composing extraction, scoring, and gap detection

use crate::analysis::extractor::SkillExtractor;
use crate::analysis::scorer::{calculate_fit_score, missing_skills};
use crate::analysis::vocabulary::SkillVocabulary;
use crate::analysis::SkillSet;
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of comparing one resume with one job description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Fit score in [0, 100], rounded to two decimals
    pub score: f64,
    pub matching_skills: SkillSet,
    pub missing_skills: SkillSet,
}

/// Stateless analyzer; safe to share between threads once built.
pub struct SkillAnalyzer {
    extractor: SkillExtractor,
}

impl SkillAnalyzer {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self> {
        Ok(Self {
            extractor: SkillExtractor::new(vocabulary)?,
        })
    }

    /// Compare resume text against job description text.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> AnalysisResult {
        let resume_skills = self.extractor.extract_skills(resume_text);
        let job_skills = self.extractor.extract_skills(job_text);
        debug!(
            "Extracted {} resume skills and {} job skills",
            resume_skills.len(),
            job_skills.len()
        );

        let fit = calculate_fit_score(&resume_skills, &job_skills);
        let missing_skills = missing_skills(&resume_skills, &job_skills);

        AnalysisResult {
            score: fit.percentage,
            matching_skills: fit.matches,
            missing_skills,
        }
    }

    pub fn extractor(&self) -> &SkillExtractor {
        &self.extractor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::suggestions::{generate_suggestions, WELL_ALIGNED_MESSAGE};
    use crate::analysis::vocabulary::DEFAULT_SKILLS;

    fn analyzer() -> SkillAnalyzer {
        SkillAnalyzer::new(&SkillVocabulary::default()).unwrap()
    }

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_match_scenario() {
        let analyzer = analyzer();
        let resume = "Experienced in Python and SQL";
        let job = "Looking for Python, Java, and communication skills";

        assert_eq!(analyzer.extractor().extract_skills(resume), set(&["Python", "Sql"]));
        assert_eq!(
            analyzer.extractor().extract_skills(job),
            set(&["Python", "Java", "Communication"])
        );

        let result = analyzer.analyze(resume, job);
        assert_eq!(result.score, 33.33);
        assert_eq!(result.matching_skills, set(&["Python"]));
        assert_eq!(result.missing_skills, set(&["Java", "Communication"]));
    }

    #[test]
    fn test_empty_job_description() {
        let result = analyzer().analyze("Python, Django and Flask", "");
        assert_eq!(result.score, 0.0);
        assert!(result.matching_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(generate_suggestions(&result.missing_skills), WELL_ALIGNED_MESSAGE);
    }

    #[test]
    fn test_every_skill_present() {
        let text = DEFAULT_SKILLS.join(" ");
        let result = analyzer().analyze(&text, &text);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.matching_skills.len(), DEFAULT_SKILLS.len());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_result_invariants() {
        let analyzer = analyzer();
        let resume = "React, HTML and CSS developer; Excel power user";
        let job = "Need React, Django, SQL and leadership";

        let job_skills = analyzer.extractor().extract_skills(job);
        let result = analyzer.analyze(resume, job);

        assert!(result.matching_skills.is_subset(&job_skills));
        assert!(result.missing_skills.is_subset(&job_skills));
        assert!(result.matching_skills.is_disjoint(&result.missing_skills));
        assert_eq!(
            result.matching_skills.len() + result.missing_skills.len(),
            job_skills.len()
        );
        assert_eq!(result.score, 25.0);
    }

    #[test]
    fn test_analyzer_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SkillAnalyzer>();
    }
}
