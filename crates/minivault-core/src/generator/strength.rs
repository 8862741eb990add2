use serde::{Deserialize, Serialize};

/// Result of a password strength check.
///
/// The score ranges from 0 (weakest) to 6 (strongest): up to two points for
/// length, one each for uppercase, lowercase, digits and symbols. Feedback
/// lists the checks that did not pass.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordStrength {
    #[allow(missing_docs)]
    pub score: u8,
    #[allow(missing_docs)]
    pub feedback: Vec<String>,
}

pub(super) fn check_strength(password: &str) -> PasswordStrength {
    let mut score = 0;
    let mut feedback = Vec::new();

    let length = password.chars().count();
    if length >= 12 {
        score += 2;
    } else if length >= 8 {
        score += 1;
    } else {
        feedback.push("Password is too short".to_string());
    }

    if password.chars().any(|c| c.is_uppercase()) {
        score += 1;
    } else {
        feedback.push("Add uppercase letters".to_string());
    }

    if password.chars().any(|c| c.is_lowercase()) {
        score += 1;
    } else {
        feedback.push("Add lowercase letters".to_string());
    }

    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    } else {
        feedback.push("Add numbers".to_string());
    }

    if password.chars().any(|c| c.is_ascii_punctuation()) {
        score += 1;
    } else {
        feedback.push("Add special characters".to_string());
    }

    PasswordStrength { score, feedback }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_scores_full_marks() {
        let strength = check_strength("Tr0ub4dour&Three");
        assert_eq!(strength.score, 6);
        assert!(strength.feedback.is_empty());
    }

    #[test]
    fn test_short_password() {
        let strength = check_strength("aB3!");
        assert_eq!(strength.score, 4);
        assert_eq!(strength.feedback, vec!["Password is too short"]);
    }

    #[test]
    fn test_medium_length_scores_one_point() {
        let strength = check_strength("abcdefgh");
        assert_eq!(strength.score, 2);
        assert_eq!(
            strength.feedback,
            vec!["Add uppercase letters", "Add numbers", "Add special characters"]
        );
    }

    #[test]
    fn test_all_feedback_for_empty_password() {
        let strength = check_strength("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.feedback.len(), 5);
    }
}
