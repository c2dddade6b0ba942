//! Player-facing status text for each phase.

use crate::player::Player;
use crate::state::{Turn, TurnPhase};

pub const ROLL_PROMPT: &str = "Time to roll!";
pub const REROLL_PROMPT: &str = "Select which die to re-roll.";
pub const EXPRESSION_PROMPT: &str = "Type your expression! Ensure there is a space between each character. Valid operators include ( ) * / + -";
pub const WIN_MESSAGE: &str = "You win! How good.";
pub const LOSS_MESSAGE: &str = "You lose! Bummer.";

/// Status line shown while `phase` is on top of the stack.
pub fn status_message(phase: TurnPhase, turn: &Turn, player: &Player) -> String {
    match phase {
        TurnPhase::TurnStart => ROLL_PROMPT.to_string(),
        TurnPhase::RollPhase => REROLL_PROMPT.to_string(),
        TurnPhase::ExpressionPhase => EXPRESSION_PROMPT.to_string(),
        TurnPhase::ResultsPhase => results_message(turn, player),
        TurnPhase::GameOver => {
            if !player.has_lives() {
                LOSS_MESSAGE.to_string()
            } else {
                WIN_MESSAGE.to_string()
            }
        }
    }
}

/// Key hint for `phase`.
pub fn instructions(phase: TurnPhase) -> &'static str {
    match phase {
        TurnPhase::TurnStart => "Press [ r ] to roll the dice",
        TurnPhase::RollPhase => "[ left ] [ right ] to navigate [ space ] to toggle [ enter ] to submit",
        TurnPhase::ExpressionPhase => "[ enter ] to submit",
        TurnPhase::ResultsPhase => "[ space ] to continue",
        TurnPhase::GameOver => "[ enter ] to restart the game",
    }
}

fn results_message(turn: &Turn, player: &Player) -> String {
    let Some(result) = turn.result else {
        return String::new();
    };
    let entered = format!(
        "You entered {} which evaluates to {result}.",
        turn.expression
    );
    if turn.lost_life {
        format!(
            "{entered}\nYou lost a life! {} lives remaining.",
            player.lives
        )
    } else if turn.removed_ailment {
        format!("{entered}\nHit! You removed {result}.")
    } else {
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_message_reports_hit() {
        let mut turn = Turn::new(1, 20).unwrap();
        turn.expression = "4 + 2 + 1".to_string();
        turn.result = Some(7);
        turn.removed_ailment = true;
        let player = Player::new(3, 9);
        assert_eq!(
            status_message(TurnPhase::ResultsPhase, &turn, &player),
            "You entered 4 + 2 + 1 which evaluates to 7.\nHit! You removed 7."
        );
    }

    #[test]
    fn results_message_reports_lost_life() {
        let mut turn = Turn::new(1, 20).unwrap();
        turn.expression = "6 * 6 * 6".to_string();
        turn.result = Some(216);
        turn.lost_life = true;
        let mut player = Player::new(3, 9);
        player.remove_life();
        assert_eq!(
            status_message(TurnPhase::ResultsPhase, &turn, &player),
            "You entered 6 * 6 * 6 which evaluates to 216.\nYou lost a life! 2 lives remaining."
        );
    }

    #[test]
    fn game_over_prefers_loss_when_out_of_lives() {
        let turn = Turn::new(1, 20).unwrap();
        let mut player = Player::new(1, 9);
        assert_eq!(status_message(TurnPhase::GameOver, &turn, &player), WIN_MESSAGE);
        player.remove_life();
        assert_eq!(status_message(TurnPhase::GameOver, &turn, &player), LOSS_MESSAGE);
    }
}
