//! Score-dependent message for the game-over screen

use super::state::Score;

/// Pick the message shown under the final score
pub fn verdict(score: Score) -> &'static str {
    match score {
        0 => "No points this time. Have another go!",
        1..=9 => "Good start! Keep practicing.",
        10..=19 => "Great job!",
        _ => "Amazing! You're a math champion!",
    }
}
