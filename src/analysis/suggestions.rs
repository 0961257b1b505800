//! Human-readable improvement suggestions

use crate::analysis::SkillSet;

pub const WELL_ALIGNED_MESSAGE: &str =
    "Your resume aligns well with the job description. No major changes needed.";

/// Build the recommendation shown alongside the missing skills.
///
/// Skills are listed alphabetically.
pub fn generate_suggestions(missing_skills: &SkillSet) -> String {
    if missing_skills.is_empty() {
        return WELL_ALIGNED_MESSAGE.to_string();
    }

    let skills: Vec<&str> = missing_skills.iter().map(String::as_str).collect();
    format!(
        "Consider adding these skills to your resume if you have experience in them: {}. \
         You can include them in your project descriptions, skills section, or achievements.",
        skills.join(", ")
    )
}
