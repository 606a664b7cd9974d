//! Human-verification challenges for review submission
//!
//! Small arithmetic questions that are easy for people and inconvenient for
//! scripted submissions. A challenge may be checked at most once; callers
//! must generate a fresh one after every attempt, pass or fail.

use rand::Rng;

use crate::{Error, Result};

/// Operands stay in this range so answers remain one or two digits
const OPERAND_MIN: i64 = 1;
const OPERAND_MAX: i64 = 9;

/// A simple arithmetic human-verification question
///
/// The expected answer is private; callers only see the prompt and hand the
/// user's reply to [`check_challenge`].
#[derive(Debug, Clone)]
pub struct VerificationChallenge {
    prompt: String,
    answer: i64,
    consumed: bool,
}

impl VerificationChallenge {
    /// Question text shown to the user
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether this challenge has already been checked
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Create a small math problem that is easy for humans but inconvenient
/// for automated submitters
///
/// Operands are drawn from 1..=9 with the operator chosen between `+` and
/// `-`; subtraction puts the larger operand first so the answer is never
/// negative.
pub fn generate_challenge() -> VerificationChallenge {
    let mut rng = rand::thread_rng();
    let a = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);
    let b = rng.gen_range(OPERAND_MIN..=OPERAND_MAX);

    if rng.gen_bool(0.5) {
        VerificationChallenge {
            prompt: format!("What is {} + {}?", a, b),
            answer: a + b,
            consumed: false,
        }
    } else {
        let (bigger, smaller) = (a.max(b), a.min(b));
        VerificationChallenge {
            prompt: format!("What is {} - {}?", bigger, smaller),
            answer: bigger - smaller,
            consumed: false,
        }
    }
}

/// Check whether the user solved the verification challenge
///
/// The challenge is consumed no matter the outcome: a second check always
/// fails, even with the correct answer.
pub fn check_challenge(challenge: &mut VerificationChallenge, answer: &str) -> Result<()> {
    if challenge.consumed {
        return Err(Error::VerificationFailed(
            "Verification question has expired. Please answer the new question.".to_string(),
        ));
    }
    challenge.consumed = true;

    let answer = answer.trim();
    if answer.is_empty() {
        return Err(Error::VerificationFailed(
            "Please answer the verification question.".to_string(),
        ));
    }

    let parsed: i64 = match answer.parse() {
        Ok(value) => value,
        Err(_) => {
            return Err(Error::VerificationFailed(
                "Verification answer must be a number.".to_string(),
            ));
        }
    };

    if parsed != challenge.answer {
        return Err(Error::VerificationFailed(
            "Verification answer is incorrect. Please answer the new question.".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_never_negative() {
        for _ in 0..200 {
            let challenge = generate_challenge();
            assert!(
                challenge.answer >= 0,
                "negative answer for {:?}",
                challenge.prompt
            );
        }
    }

    #[test]
    fn test_answer_matches_prompt() {
        for _ in 0..200 {
            let challenge = generate_challenge();
            let parts: Vec<&str> = challenge
                .prompt
                .trim_start_matches("What is ")
                .trim_end_matches('?')
                .split(' ')
                .collect();
            let a: i64 = parts[0].parse().unwrap();
            let b: i64 = parts[2].parse().unwrap();
            let expected = match parts[1] {
                "+" => a + b,
                "-" => a - b,
                op => panic!("unexpected operator {:?}", op),
            };
            assert_eq!(challenge.answer, expected);
        }
    }

    #[test]
    fn test_correct_answer_passes_once() {
        let mut challenge = VerificationChallenge {
            prompt: "What is 3 + 4?".to_string(),
            answer: 7,
            consumed: false,
        };
        assert!(check_challenge(&mut challenge, "7").is_ok());
        assert!(challenge.is_consumed());

        // Same challenge, same correct answer: consumed challenges always fail
        assert!(matches!(
            check_challenge(&mut challenge, "7"),
            Err(Error::VerificationFailed(_))
        ));
    }

    #[test]
    fn test_failed_attempt_still_consumes() {
        let mut challenge = VerificationChallenge {
            prompt: "What is 9 - 2?".to_string(),
            answer: 7,
            consumed: false,
        };
        assert!(check_challenge(&mut challenge, "8").is_err());
        assert!(challenge.is_consumed());
        assert!(check_challenge(&mut challenge, "7").is_err());
    }

    #[test]
    fn test_rejects_missing_or_non_numeric() {
        for bad in ["", "   ", "seven", "7.0"] {
            let mut challenge = VerificationChallenge {
                prompt: "What is 3 + 4?".to_string(),
                answer: 7,
                consumed: false,
            };
            assert!(
                matches!(
                    check_challenge(&mut challenge, bad),
                    Err(Error::VerificationFailed(_))
                ),
                "expected rejection for {:?}",
                bad
            );
            assert!(challenge.is_consumed());
        }
    }

    #[test]
    fn test_answer_tolerates_whitespace() {
        let mut challenge = VerificationChallenge {
            prompt: "What is 5 - 5?".to_string(),
            answer: 0,
            consumed: false,
        };
        assert!(check_challenge(&mut challenge, " 0 ").is_ok());
    }
}
