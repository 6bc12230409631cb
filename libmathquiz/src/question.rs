//! Arithmetic questions and their random generation
//!
//! Every [`Mode`] is a [`Distribution`] over [`Question`]s: sampling a mode
//! once with any [`Rng`] draws one question. The generator never touches a
//! global random source, so tests can pass a seeded `StdRng`.
//!
//! # Example
//!
//! ```
//! use libmathquiz::question::{Mode, Operation};
//! use rand::distributions::Distribution;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let question = Mode::Divisions.sample(&mut rng);
//!
//! assert_eq!(question.operation, Operation::Div);
//! assert_eq!(question.left % question.right, 0);
//! ```

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::fmt;

use crate::error::AnswerError;

/// Largest operand drawn for additions and subtractions (inclusive, from 0)
pub const SUM_OPERAND_MAX: i64 = 100;

/// Operand range for multiplications and divisions (inclusive)
pub const PRODUCT_OPERAND_MIN: i64 = 1;
pub const PRODUCT_OPERAND_MAX: i64 = 10;

/// Arithmetic category chosen for a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Additions,
    Multiplications,
    Subtractions,
    Divisions,
    /// Each question picks one of the four other modes uniformly
    Mixed,
}

impl Mode {
    /// All modes, in the order the welcome screen lists them
    pub const ALL: [Mode; 5] = [
        Mode::Additions,
        Mode::Subtractions,
        Mode::Multiplications,
        Mode::Divisions,
        Mode::Mixed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Additions => "Additions",
            Mode::Subtractions => "Subtractions",
            Mode::Multiplications => "Multiplications",
            Mode::Divisions => "Divisions",
            Mode::Mixed => "Mixed",
        }
    }

    /// Map a draw from `1..=4` to the base mode Mixed delegates to
    fn from_mixed_draw(draw: u8) -> Mode {
        match draw {
            1 => Mode::Additions,
            2 => Mode::Subtractions,
            3 => Mode::Multiplications,
            _ => Mode::Divisions,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Arithmetic operator tagging a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "×",
            Operation::Div => "÷",
        }
    }

    /// Apply the operator, returning `None` on overflow, division by zero
    /// or a division that leaves a remainder.
    pub fn apply(&self, left: i64, right: i64) -> Option<i64> {
        match self {
            Operation::Add => left.checked_add(right),
            Operation::Sub => left.checked_sub(right),
            Operation::Mul => left.checked_mul(right),
            Operation::Div => {
                if right == 0 || left % right != 0 {
                    None
                } else {
                    left.checked_div(right)
                }
            }
        }
    }
}

/// One generated problem with its precomputed answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub operation: Operation,
    pub left: i64,
    pub right: i64,
    pub result: i64,
}

impl Default for Question {
    fn default() -> Self {
        Self {
            operation: Operation::Add,
            left: 0,
            right: 0,
            result: 0,
        }
    }
}

impl Question {
    pub fn addition(a: i64, b: i64) -> Self {
        Self {
            operation: Operation::Add,
            left: a,
            right: b,
            result: a + b,
        }
    }

    /// Larger operand always goes first so the result is never negative
    pub fn subtraction(a: i64, b: i64) -> Self {
        let (first, second) = (a.max(b), a.min(b));
        Self {
            operation: Operation::Sub,
            left: first,
            right: second,
            result: first - second,
        }
    }

    pub fn multiplication(a: i64, b: i64) -> Self {
        Self {
            operation: Operation::Mul,
            left: a,
            right: b,
            result: a * b,
        }
    }

    /// Built backwards from a product: `(a * b) ÷ b = a`
    pub fn division(a: i64, b: i64) -> Self {
        Self {
            operation: Operation::Div,
            left: a * b,
            right: b,
            result: a,
        }
    }

    /// Does `result` match applying `operation` to the operands?
    pub fn is_consistent(&self) -> bool {
        self.operation.apply(self.left, self.right) == Some(self.result)
    }

    pub fn is_answered_by(&self, answer: i64) -> bool {
        self.result == answer
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operation.symbol(), self.right)
    }
}

impl Distribution<Question> for Mode {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Question {
        match self {
            Mode::Additions => {
                let operand = Uniform::new_inclusive(0, SUM_OPERAND_MAX);
                Question::addition(operand.sample(rng), operand.sample(rng))
            }
            Mode::Subtractions => {
                let operand = Uniform::new_inclusive(0, SUM_OPERAND_MAX);
                Question::subtraction(operand.sample(rng), operand.sample(rng))
            }
            Mode::Multiplications => {
                let operand = Uniform::new_inclusive(PRODUCT_OPERAND_MIN, PRODUCT_OPERAND_MAX);
                Question::multiplication(operand.sample(rng), operand.sample(rng))
            }
            Mode::Divisions => {
                let operand = Uniform::new_inclusive(PRODUCT_OPERAND_MIN, PRODUCT_OPERAND_MAX);
                Question::division(operand.sample(rng), operand.sample(rng))
            }
            Mode::Mixed => {
                let sub_mode = Mode::from_mixed_draw(rng.gen_range(1..=4));
                sub_mode.sample(rng)
            }
        }
    }
}

/// Draw one question for `mode`
pub fn generate<R: Rng + ?Sized>(mode: Mode, rng: &mut R) -> Question {
    mode.sample(rng)
}

/// Read the answer box as a whole number
///
/// Accepts an optional sign followed by decimal digits. Surrounding
/// whitespace is not trimmed.
pub fn parse_answer(text: &str) -> std::result::Result<i64, AnswerError> {
    if text.is_empty() {
        return Err(AnswerError::Empty);
    }
    text.parse::<i64>()
        .map_err(|_| AnswerError::Malformed(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    const SAMPLES: usize = 2_000;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn test_every_mode_produces_consistent_questions() {
        let mut rng = rng();
        for mode in Mode::ALL {
            for _ in 0..SAMPLES {
                let q = generate(mode, &mut rng);
                assert!(q.is_consistent(), "{:?} produced {:?}", mode, q);
            }
        }
    }

    #[test]
    fn test_additions_stay_in_range() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let q = Mode::Additions.sample(&mut rng);
            assert_eq!(q.operation, Operation::Add);
            assert!((0..=SUM_OPERAND_MAX).contains(&q.left));
            assert!((0..=SUM_OPERAND_MAX).contains(&q.right));
            assert_eq!(q.result, q.left + q.right);
        }
    }

    #[test]
    fn test_subtractions_never_go_negative() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let q = Mode::Subtractions.sample(&mut rng);
            assert_eq!(q.operation, Operation::Sub);
            assert!(q.left >= q.right);
            assert!(q.result >= 0);
            assert!(q.left <= SUM_OPERAND_MAX);
        }
    }

    #[test]
    fn test_multiplications_use_small_factors() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let q = Mode::Multiplications.sample(&mut rng);
            assert_eq!(q.operation, Operation::Mul);
            assert!((PRODUCT_OPERAND_MIN..=PRODUCT_OPERAND_MAX).contains(&q.left));
            assert!((PRODUCT_OPERAND_MIN..=PRODUCT_OPERAND_MAX).contains(&q.right));
        }
    }

    #[test]
    fn test_divisions_never_leave_a_remainder() {
        let mut rng = rng();
        for _ in 0..SAMPLES {
            let q = Mode::Divisions.sample(&mut rng);
            assert_eq!(q.operation, Operation::Div);
            assert_eq!(q.right * q.result, q.left);
            assert!((PRODUCT_OPERAND_MIN..=PRODUCT_OPERAND_MAX).contains(&q.right));
            assert!((PRODUCT_OPERAND_MIN..=PRODUCT_OPERAND_MAX).contains(&q.result));
        }
    }

    #[test]
    fn test_mixed_spreads_evenly_across_operations() {
        let mut rng = rng();
        let total = 20_000;
        let mut counts: HashMap<Operation, usize> = HashMap::new();
        for _ in 0..total {
            *counts.entry(Mode::Mixed.sample(&mut rng).operation).or_default() += 1;
        }

        assert_eq!(counts.len(), 4);
        for (operation, count) in counts {
            // Expected 5000 each; allow a generous band
            assert!(
                (4_400..=5_600).contains(&count),
                "{:?} drawn {} times out of {}",
                operation,
                count,
                total
            );
        }
    }

    #[test]
    fn test_same_seed_same_questions() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for mode in Mode::ALL {
            assert_eq!(generate(mode, &mut a), generate(mode, &mut b));
        }
    }

    #[test]
    fn test_operation_apply() {
        assert_eq!(Operation::Add.apply(2, 3), Some(5));
        assert_eq!(Operation::Sub.apply(2, 3), Some(-1));
        assert_eq!(Operation::Mul.apply(4, 3), Some(12));
        assert_eq!(Operation::Div.apply(12, 3), Some(4));
        assert_eq!(Operation::Div.apply(13, 3), None);
        assert_eq!(Operation::Div.apply(1, 0), None);
        assert_eq!(Operation::Add.apply(i64::MAX, 1), None);
    }

    #[test]
    fn test_subtraction_orders_operands() {
        let q = Question::subtraction(3, 10);
        assert_eq!((q.left, q.right, q.result), (10, 3, 7));
    }

    #[test]
    fn test_default_question() {
        let q = Question::default();
        assert_eq!(q.operation, Operation::Add);
        assert!(q.is_consistent());
        assert!(q.is_answered_by(0));
    }

    #[test]
    fn test_question_display() {
        assert_eq!(Question::addition(12, 7).to_string(), "12 + 7");
        assert_eq!(Question::division(4, 5).to_string(), "20 ÷ 5");
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("42"), Ok(42));
        assert_eq!(parse_answer("-3"), Ok(-3));
        assert_eq!(parse_answer("+7"), Ok(7));
        assert_eq!(parse_answer("007"), Ok(7));
        assert_eq!(parse_answer(""), Err(AnswerError::Empty));
        assert_eq!(parse_answer("-"), Err(AnswerError::Malformed("-".to_string())));
        assert_eq!(parse_answer("4 2"), Err(AnswerError::Malformed("4 2".to_string())));
        assert_eq!(parse_answer(" 5"), Err(AnswerError::Malformed(" 5".to_string())));
        assert_eq!(parse_answer("1.5"), Err(AnswerError::Malformed("1.5".to_string())));
    }
}
