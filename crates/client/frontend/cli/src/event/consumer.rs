//! Maintains the CLI message log in response to game events.
use client_frontend_core::{
    event::{EventConsumer, EventImpact, history_entry},
    message::MessageLog,
};
use game_core::GameEvent;

pub struct CliEventConsumer {
    log: MessageLog,
    round: u32,
}

impl CliEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log, round: 1 }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &GameEvent) -> EventImpact {
        match event {
            GameEvent::RoundStarted { round } => self.round = *round,
            GameEvent::GameRestarted => self.round = 1,
            _ => {}
        }
        self.log.push(history_entry(event, self.round));
        EventImpact::redraw()
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
