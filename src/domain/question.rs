//! Constrained-choice questions and the pure answer-normalization rules.

/// A prompt with an ordered set of permitted answers. The first answer is the
/// default taken on empty input. Matching is case-insensitive, no prefix
/// matching.
#[derive(Debug, Clone, Copy)]
pub struct Question<'a> {
    pub text: &'a str,
    pub answers: &'a [&'a str],
}

/// Lowercase the raw answer and expand the single-character yes/no shorthand.
pub fn normalize_answer(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    match lowered.as_str() {
        "y" => "yes".to_string(),
        "n" => "no".to_string(),
        _ => lowered,
    }
}

/// Match a normalized answer against the permitted answers.
pub fn match_choice<'a>(answer: &str, answers: &'a [&'a str]) -> Option<&'a str> {
    answers.iter().copied().find(|candidate| candidate.to_lowercase() == answer)
}
