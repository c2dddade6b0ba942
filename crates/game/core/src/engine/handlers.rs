//! Per-phase transitions invoked from [`GameEngine::dispatch`].

use super::{EngineError, GameEngine, GameEvent, RoundOutcome};
use crate::dice::{DiceSet, DieRoller};
use crate::expression::{ExpressionError, ExpressionValidator, evaluate_infix};
use crate::player::Player;
use crate::state::{Turn, TurnPhase};

impl<R: DieRoller> GameEngine<R> {
    /// TurnStart: roll every die and move on to rerolls.
    pub(super) fn roll_dice(&mut self, events: &mut Vec<GameEvent>) {
        self.turn.pop_phase();
        let num_dice = self.config.num_dice;
        let dice = self
            .turn
            .dice
            .get_or_insert_with(|| DiceSet::unrolled(num_dice));
        dice.roll_all(&mut self.roller);
        let values = dice.values();
        self.selection.reset(self.config.num_dice);
        tracing::debug!(round = self.turn.round, ?values, "dice rolled");
        events.push(GameEvent::DiceRolled { values });
    }

    /// RollPhase: reroll the selected dice (possibly none) and advance.
    pub(super) fn confirm_rerolls(&mut self, events: &mut Vec<GameEvent>) {
        let indices: Vec<usize> = self.selection.selected().collect();
        let dice = self
            .turn
            .dice
            .get_or_insert_with(|| DiceSet::roll(self.config.num_dice, &mut self.roller));
        dice.reroll_selected(indices.iter().copied(), &mut self.roller);
        let values = dice.values();
        self.turn.pop_phase();
        tracing::debug!(?indices, ?values, "rerolls confirmed");
        events.push(GameEvent::DiceRerolled { indices, values });
    }

    /// ExpressionPhase: check and evaluate the text, then apply the result.
    ///
    /// A rejected expression puts ExpressionPhase back on the stack and
    /// records the reason; nothing else changes.
    pub(super) fn submit_expression(
        &mut self,
        expression: String,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), EngineError> {
        self.turn.pop_phase();
        self.turn.expression = expression.clone();

        match self.check_expression(&expression) {
            Err(error) => {
                self.turn.push_phase(TurnPhase::ExpressionPhase)?;
                let reason = error.to_string();
                tracing::debug!(%expression, %reason, "expression rejected");
                self.debug = reason.clone();
                events.push(GameEvent::ExpressionRejected { expression, reason });
            }
            Ok(value) => {
                self.debug.clear();
                self.turn.result = Some(value);
                let outcome = self.apply_result(value);
                tracing::info!(round = self.turn.round, %expression, value, ?outcome, "result applied");
                events.push(GameEvent::ResultApplied {
                    expression,
                    value,
                    outcome,
                });
            }
        }
        Ok(())
    }

    fn check_expression(&self, expression: &str) -> Result<i64, ExpressionError> {
        let values = self.turn.dice_values();
        ExpressionValidator::new(&values).validate(expression)?;
        Ok(evaluate_infix(expression)?)
    }

    /// Clears the matching ailment, or costs a life when there is none.
    fn apply_result(&mut self, value: i64) -> RoundOutcome {
        if self.player.ailments.is_active(value) {
            self.player.ailments.remove(value);
            self.turn.removed_ailment = true;
            RoundOutcome::AilmentRemoved { ailment: value }
        } else {
            self.player.remove_life();
            self.turn.lost_life = true;
            RoundOutcome::LifeLost {
                lives_remaining: self.player.lives,
            }
        }
    }

    /// ResultsPhase: end the game or start the next round.
    pub(super) fn continue_round(&mut self, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        if !self.player.has_ailments() || !self.player.has_lives() {
            self.turn.push_phase(TurnPhase::GameOver)?;
            let won = self.player.has_lives();
            tracing::info!(round = self.turn.round, won, lives = self.player.lives, "game over");
            events.push(GameEvent::GameOver { won });
            return Ok(());
        }

        let round = self.turn.round + 1;
        self.start_turn(round)?;
        tracing::info!(round, "round started");
        events.push(GameEvent::RoundStarted { round });
        Ok(())
    }

    /// GameOver: fresh player, back to round 1.
    pub(super) fn restart(&mut self, events: &mut Vec<GameEvent>) -> Result<(), EngineError> {
        self.player = Player::new(self.config.max_lives, self.config.num_ailments);
        self.start_turn(1)?;
        tracing::info!("game restarted");
        events.push(GameEvent::GameRestarted);
        Ok(())
    }

    fn start_turn(&mut self, round: u32) -> Result<(), EngineError> {
        self.turn = Turn::new(round, self.config.phase_stack_capacity)?;
        self.selection.reset(self.config.num_dice);
        self.debug.clear();
        Ok(())
    }
}
