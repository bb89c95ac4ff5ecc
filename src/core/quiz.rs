//! Short opinion quiz about travel habits. Answers are never stored.

use crate::errors::{AppError, AppResult};

pub const QUESTIONS: [&str; 5] = [
    "I would choose public transport over driving for a trip under 10 km.",
    "Cycling or walking is a realistic option for my daily commute.",
    "I am willing to spend more time travelling to cut my emissions.",
    "Car sharing is something I would consider this month.",
    "Tracking my CO2 footprint changes how I plan my trips.",
];

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub average: f64,
    pub verdict: &'static str,
}

pub struct QuizLogic;

impl QuizLogic {
    /// Parse one answer on the 1..=5 agreement scale.
    pub fn parse_answer(raw: &str) -> AppResult<u8> {
        let v: u8 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidAnswer(raw.trim().to_string()))?;
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&v) {
            return Err(AppError::InvalidAnswer(format!(
                "{v} (use {MIN_ANSWER}-{MAX_ANSWER})"
            )));
        }
        Ok(v)
    }

    /// Parse a comma separated answer list such as `4,5,3,2,5`.
    pub fn parse_answers(raw: &str) -> AppResult<Vec<u8>> {
        raw.split(',').map(Self::parse_answer).collect()
    }

    pub fn score(answers: &[u8]) -> AppResult<QuizResult> {
        if answers.len() != QUESTIONS.len() {
            return Err(AppError::InvalidAnswer(format!(
                "expected {} answers, got {}",
                QUESTIONS.len(),
                answers.len()
            )));
        }
        if let Some(bad) = answers
            .iter()
            .find(|a| !(MIN_ANSWER..=MAX_ANSWER).contains(*a))
        {
            return Err(AppError::InvalidAnswer(bad.to_string()));
        }

        let sum: u32 = answers.iter().map(|a| u32::from(*a)).sum();
        let average = f64::from(sum) / answers.len() as f64;

        let verdict = if average >= 4.0 {
            "Eco enthusiast"
        } else if average >= 3.0 {
            "Open to change"
        } else {
            "Comfort first"
        };

        Ok(QuizResult { average, verdict })
    }
}
