use std::time::Duration;

use log::info;

use crate::clock::FixedStep;
use crate::game::GameState;
use crate::input::Direction;
use crate::settings::Settings;

/// One play session: the game state and the clock that paces it.
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    seed: Option<u64>,
    state: GameState,
    clock: FixedStep,
}

impl Session {
    /// Starts a session. With a seed, every restart replays the same
    /// random sequence.
    #[must_use]
    pub fn new(settings: Settings, seed: Option<u64>) -> Self {
        info!("starting session (seed {seed:?})");

        Self {
            settings,
            seed,
            state: fresh_state(&settings, seed),
            clock: FixedStep::new(settings.tick_interval()),
        }
    }

    /// Feeds one frame's elapsed time and runs every tick that became due.
    ///
    /// Returns the number of ticks applied.
    pub fn frame(&mut self, elapsed: Duration) -> u32 {
        let due = self.clock.accumulate(elapsed);
        let mut applied = 0;

        for _ in 0..due {
            if self.state.is_game_over() {
                break;
            }
            self.state.advance();
            applied += 1;
        }

        applied
    }

    /// Turns the snake. An accepted turn moves it at once, so the pending
    /// partial tick is dropped to avoid stepping twice in a row.
    pub fn steer(&mut self, direction: Direction) -> bool {
        let accepted = self.state.set_direction(direction);
        if accepted {
            self.clock.reset();
        }
        accepted
    }

    /// Throws the current game away and starts over.
    pub fn restart(&mut self) {
        info!("restarting session after score {}", self.state.score());

        self.state = fresh_state(&self.settings, self.seed);
        self.clock.reset();
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn clock(&self) -> &FixedStep {
        &self.clock
    }
}

fn fresh_state(settings: &Settings, seed: Option<u64>) -> GameState {
    match seed {
        Some(seed) => GameState::new_with_seed(settings, seed),
        None => GameState::new(settings),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Session;
    use crate::grid::Position;
    use crate::input::Direction;
    use crate::settings::Settings;

    #[test]
    fn frames_drain_whole_ticks() {
        let mut session = Session::new(Settings::default(), Some(1));

        assert_eq!(session.frame(Duration::from_millis(16)), 0);
        assert_eq!(session.frame(Duration::from_millis(250)), 2);

        assert_eq!(session.state().move_count(), 2);
        assert_eq!(session.state().snake().head(), Position::new(2, 0));
    }

    #[test]
    fn accepted_turn_resets_the_accumulator() {
        let mut session = Session::new(Settings::default(), Some(2));
        assert_eq!(session.frame(Duration::from_millis(90)), 0);

        assert!(session.steer(Direction::Down));
        assert_eq!(session.state().move_count(), 1);
        assert_eq!(session.clock().debt(), Duration::ZERO);

        // Without the reset this frame would have produced a second step.
        assert_eq!(session.frame(Duration::from_millis(20)), 0);
        assert_eq!(session.state().move_count(), 1);
    }

    #[test]
    fn rejected_turn_keeps_the_accumulator() {
        let mut session = Session::new(Settings::default(), Some(3));
        let _ = session.frame(Duration::from_millis(90));

        assert!(!session.steer(Direction::Left));
        assert_eq!(session.clock().debt(), Duration::from_millis(90));
    }

    #[test]
    fn seeded_restart_replays_the_same_game() {
        let mut session = Session::new(Settings::default(), Some(4));
        let _ = session.frame(Duration::from_millis(500));
        let first_run = session.state().snapshot();

        session.restart();
        assert_eq!(session.state().move_count(), 0);
        let _ = session.frame(Duration::from_millis(500));

        assert_eq!(session.state().snapshot(), first_run);
    }
}
