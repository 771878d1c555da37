//! Quality assessment score arithmetic.
//!
//! The store gathers the inputs (answer weights, question counts); these
//! functions only do the math, so that the absorbing behavior (missing answer
//! counts as zero, degenerate maximum is zero) lives in one place.

/// Advisory answer labels with their weights. Reviews may define any other set.
pub const SUGGESTED_ANSWERS: [(&str, f64); 3] = [("Yes", 1.0), ("Partially", 0.5), ("No", 0.0)];

/// Sum the answer weights of an article's assessments.
///
/// `None` stands for an assessment that has no answer yet and adds nothing.
#[must_use]
pub fn total_score<I>(weights: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    weights.into_iter().flatten().sum()
}

/// Highest score an article can reach in a review:
/// `question_count * highest_weight`.
///
/// Zero questions, no answers, or a non-finite product all yield `0.0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn max_score(question_count: u64, highest_weight: Option<f64>) -> f64 {
    let Some(weight) = highest_weight else {
        return 0.0;
    };
    if question_count == 0 {
        return 0.0;
    }
    let score = question_count as f64 * weight;
    if score.is_finite() { score } else { 0.0 }
}

/// Whether `score` reaches the review's cutoff.
#[must_use]
pub fn meets_cutoff(score: f64, cutoff: f64) -> bool {
    score >= cutoff
}
