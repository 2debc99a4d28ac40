//! Score overlay text

use crate::consts::WIN_SCORE;

pub const VICTORY_MESSAGE: &str = "Congratulations !! You've won the game";

/// Text for the top-left overlay
pub fn score_message(score: i32) -> String {
    if score < WIN_SCORE {
        format!("Score: {score}")
    } else {
        VICTORY_MESSAGE.to_string()
    }
}
