//! Fit scoring between resume and job skill sets

use crate::analysis::SkillSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitScore {
    /// Share of job skills found in the resume, 0-100 with two decimals
    pub percentage: f64,
    pub matches: SkillSet,
}

/// Score how many of the job's skills the resume covers.
///
/// An empty job skill set scores 0.
pub fn calculate_fit_score(resume_skills: &SkillSet, job_skills: &SkillSet) -> FitScore {
    let matches: SkillSet = resume_skills.intersection(job_skills).cloned().collect();

    let percentage = if job_skills.is_empty() {
        0.0
    } else {
        round_to_hundredths(matches.len() as f64 / job_skills.len() as f64 * 100.0)
    };

    FitScore { percentage, matches }
}

/// Skills the job asks for that the resume does not mention.
pub fn missing_skills(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillSet {
    job_skills.difference(resume_skills).cloned().collect()
}

/// Two-decimal rounding; exact halves go to the even neighbour (3.125 -> 3.12).
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_job_scores_zero() {
        let score = calculate_fit_score(&set(&["Python", "Sql"]), &SkillSet::new());
        assert_eq!(score.percentage, 0.0);
        assert!(score.matches.is_empty());
    }

    #[test]
    fn test_identical_sets_score_full() {
        let skills = set(&["Python", "Java", "Excel"]);
        let score = calculate_fit_score(&skills, &skills);
        assert_eq!(score.percentage, 100.0);
        assert_eq!(score.matches, skills);
    }

    #[test]
    fn test_partial_overlap_is_rounded() {
        let score = calculate_fit_score(
            &set(&["Python", "Sql"]),
            &set(&["Python", "Java", "Communication"]),
        );
        assert_eq!(score.percentage, 33.33);
        assert_eq!(score.matches, set(&["Python"]));

        let score = calculate_fit_score(
            &set(&["Python", "Java"]),
            &set(&["Python", "Java", "Communication"]),
        );
        assert_eq!(score.percentage, 66.67);
    }

    fn numbered(prefix: &str, count: usize) -> SkillSet {
        (0..count).map(|i| format!("{}{}", prefix, i)).collect()
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        let job = numbered("Skill", 32);

        let score = calculate_fit_score(&numbered("Skill", 1), &job);
        assert_eq!(score.percentage, 3.12);

        let score = calculate_fit_score(&numbered("Skill", 3), &job);
        assert_eq!(score.percentage, 9.38);
    }

    #[test]
    fn test_matches_and_missing_partition_job_skills() {
        let resume = set(&["Python", "React", "Leadership"]);
        let job = set(&["Python", "Django", "Leadership", "Sql"]);

        let score = calculate_fit_score(&resume, &job);
        let missing = missing_skills(&resume, &job);

        assert!(score.matches.is_disjoint(&missing));
        let union: SkillSet = score.matches.union(&missing).cloned().collect();
        assert_eq!(union, job);
        assert!(score.matches.is_subset(&resume));
        assert_eq!(score.percentage, 50.0);
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let job = set(&["Flask", "Pandas"]);
        let score = calculate_fit_score(&SkillSet::new(), &job);
        assert_eq!(score.percentage, 0.0);
        assert_eq!(missing_skills(&SkillSet::new(), &job), job);
    }
}
