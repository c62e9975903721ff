//! Questionnaire scoring. Pure, deterministic, no side effects.
//!
//! Section A (knowledge) is two single-correct-choice questions worth one
//! point each. Sections B (awareness) and C (practice) are two Likert items
//! each, 1..=3, summed without transformation. Out-of-range input is a
//! validation error, never clamped.

use crate::domain::{DomainError, DomainResult, ScoreReport};

/// Offered choices and the designated correct one for
/// "Autoclaving is used to:".
pub const AUTOCLAVING_CHOICES: [&str; 2] = ["Destroy microorganisms", "Clean instruments"];
pub const AUTOCLAVING_CORRECT: &str = "Destroy microorganisms";

/// Offered choices and the designated correct one for
/// "Which is a sterilization method?".
pub const STERILIZATION_CHOICES: [&str; 2] = ["Steam sterilization", "Washing with water"];
pub const STERILIZATION_CORRECT: &str = "Steam sterilization";

pub const LIKERT_MIN: i32 = 1;
pub const LIKERT_MAX: i32 = 3;

/// Raw form input for one submission, one field per questionnaire item.
#[derive(Debug, Clone)]
pub struct RawAnswers {
    /// Section A: "Autoclaving is used to:"
    pub autoclaving_purpose: String,
    /// Section A: "Which is a sterilization method?"
    pub sterilization_method: String,
    /// Section B: "Wearing gloves reduces infection risk"
    pub gloves_reduce_risk: i32,
    /// Section B: "Hand hygiene is essential"
    pub hand_hygiene_essential: i32,
    /// Section C: "I sterilize instruments after each use"
    pub sterilizes_after_use: i32,
    /// Section C: "I wear PPE during procedures"
    pub wears_ppe: i32,
}

fn knowledge_point(answer: &str, choices: &[&str], correct: &str) -> DomainResult<i32> {
    if !choices.contains(&answer) {
        return Err(DomainError::Validation(format!(
            "Answer is not one of the offered choices: {}",
            answer
        )));
    }
    Ok(i32::from(answer == correct))
}

/// Section A score: 1 point per sub-answer matching the fixed correct choice.
pub fn score_knowledge(autoclaving: &str, method: &str) -> DomainResult<i32> {
    let a = knowledge_point(autoclaving, &AUTOCLAVING_CHOICES, AUTOCLAVING_CORRECT)?;
    let b = knowledge_point(method, &STERILIZATION_CHOICES, STERILIZATION_CORRECT)?;
    Ok(a + b)
}

/// Sum of two Likert sub-answers, each constrained to [1,3].
pub fn score_likert(a: i32, b: i32) -> DomainResult<i32> {
    for v in [a, b] {
        if !(LIKERT_MIN..=LIKERT_MAX).contains(&v) {
            return Err(DomainError::Validation(format!(
                "Likert answer must be between {} and {}, got {}",
                LIKERT_MIN, LIKERT_MAX, v
            )));
        }
    }
    Ok(a + b)
}

/// Compute all three section scores for one submission.
pub fn score_answers(answers: &RawAnswers) -> DomainResult<ScoreReport> {
    Ok(ScoreReport {
        knowledge: score_knowledge(&answers.autoclaving_purpose, &answers.sterilization_method)?,
        awareness: score_likert(answers.gloves_reduce_risk, answers.hand_hygiene_essential)?,
        practice: score_likert(answers.sterilizes_after_use, answers.wears_ppe)?,
    })
}
