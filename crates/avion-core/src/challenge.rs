//! Arithmetic challenge shown before an application can be submitted

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest operand a generated challenge uses
pub const MIN_OPERAND: u32 = 1;
/// Largest operand a generated challenge uses
pub const MAX_OPERAND: u32 = 10;

/// Two-operand addition problem together with the visitor's current answer.
///
/// `is_valid` is only ever written by [`Challenge::set_answer`] and the
/// constructors, so it always reflects the current operands and answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Challenge {
    num1: u32,
    num2: u32,
    answer: String,
    is_valid: bool,
}

/// What the answer field should display next to the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStatus {
    Unanswered,
    Incorrect,
    Correct,
}

impl Challenge {
    /// Fresh challenge drawn from the thread-local generator
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Fresh challenge drawn from `rng`
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let num1 = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
        let num2 = rng.gen_range(MIN_OPERAND..=MAX_OPERAND);
        tracing::debug!(num1, num2, "generated challenge");
        Self::with_operands(num1, num2)
    }

    /// Challenge with fixed operands and an empty answer
    pub fn with_operands(num1: u32, num2: u32) -> Self {
        Self {
            num1,
            num2,
            answer: String::new(),
            is_valid: false,
        }
    }

    /// The (0, 0, "", false) challenge left behind after a submission
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn num1(&self) -> u32 {
        self.num1
    }

    pub fn num2(&self) -> u32 {
        self.num2
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Store the raw answer text and re-check it.
    ///
    /// The answer is read like `parseInt`: the leading integer counts and
    /// anything after it is ignored. Text without one is simply not correct.
    pub fn set_answer(&mut self, text: impl Into<String>) {
        self.answer = text.into();
        let expected = i64::from(self.num1) + i64::from(self.num2);
        self.is_valid = leading_integer(&self.answer) == Some(expected);
    }

    pub fn status(&self) -> ChallengeStatus {
        if self.is_valid {
            ChallengeStatus::Correct
        } else if self.answer.is_empty() {
            ChallengeStatus::Unanswered
        } else {
            ChallengeStatus::Incorrect
        }
    }
}

/// Optional sign followed by the longest run of ASCII digits, after leading
/// whitespace. `None` when there are no digits or the value overflows.
fn leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_operands_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let challenge = Challenge::generate_with(&mut rng);
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&challenge.num1()));
            assert!((MIN_OPERAND..=MAX_OPERAND).contains(&challenge.num2()));
            assert_eq!(challenge.answer(), "");
            assert!(!challenge.is_valid());
        }
    }

    #[test]
    fn test_both_bounds_are_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let operands: Vec<u32> = (0..1000)
            .map(|_| Challenge::generate_with(&mut rng).num1())
            .collect();
        assert!(operands.contains(&MIN_OPERAND));
        assert!(operands.contains(&MAX_OPERAND));
    }

    #[test]
    fn test_answer_scenario() {
        let mut challenge = Challenge::with_operands(3, 4);
        challenge.set_answer("7");
        assert!(challenge.is_valid());
        assert_eq!(challenge.status(), ChallengeStatus::Correct);

        challenge.set_answer("8");
        assert!(!challenge.is_valid());
        assert_eq!(challenge.status(), ChallengeStatus::Incorrect);
    }

    #[test]
    fn test_non_numeric_answer_is_not_valid() {
        let mut challenge = Challenge::with_operands(2, 2);
        for text in ["four", "abc", "", "-", "--4", "+-4", ".4"] {
            challenge.set_answer(text);
            assert!(!challenge.is_valid(), "{text:?} should not be accepted");
        }
    }

    #[test]
    fn test_leading_integer_is_read_like_parse_int() {
        let mut challenge = Challenge::with_operands(2, 2);
        for text in ["4", "4.0", "4e0", "4abc", "4 4", "  4", "+4", "04"] {
            challenge.set_answer(text);
            assert!(challenge.is_valid(), "{text:?} should be accepted");
        }
        challenge.set_answer("40");
        assert!(!challenge.is_valid());
        challenge.set_answer("-4");
        assert!(!challenge.is_valid());
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("-12px"), Some(-12));
        assert_eq!(leading_integer("\t7\n"), Some(7));
        assert_eq!(leading_integer("e4"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let mut challenge = Challenge::with_operands(5, 6);
        challenge.set_answer(" 11 ");
        assert!(challenge.is_valid());
    }

    #[test]
    fn test_empty_answer_is_unanswered() {
        let mut challenge = Challenge::with_operands(1, 1);
        challenge.set_answer("3");
        challenge.set_answer("");
        assert_eq!(challenge.status(), ChallengeStatus::Unanswered);
        assert!(!challenge.is_valid());
    }

    #[test]
    fn test_cleared_challenge() {
        let challenge = Challenge::cleared();
        assert_eq!((challenge.num1(), challenge.num2()), (0, 0));
        assert_eq!(challenge.answer(), "");
        assert!(!challenge.is_valid());
    }
}
