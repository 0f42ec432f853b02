//! One game session: the engine, the active input mode and the message log.
//!
//! [`Session::handle_event`] is the single place the world advances. For a
//! MainGame action the order is fixed: the action is performed, every other
//! actor takes its turn, then the field of view is recomputed. The phases
//! that actually ran are returned as a [`TurnReport`].

use client_frontend_core::MessageLog;
use game_core::{Action, ActionError, ActionOutcome, EnemyTurn, Engine, GameError, Position};

use crate::input::InputEvent;
use crate::state::{InputMode, Transition, TransitionContext};

/// Whether the event loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A step of a resolved turn, in the order it ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    Action(ActionOutcome),
    EnemyTurns(Vec<EnemyTurn>),
    Visibility { origin: Option<Position> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnReport {
    pub phases: Vec<TurnPhase>,
}

/// Outcome of handling a single input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub flow: Flow,
    /// Present when an action was attempted.
    pub turn: Option<TurnReport>,
}

impl Step {
    fn idle() -> Self {
        Self {
            flow: Flow::Continue,
            turn: None,
        }
    }

    fn quit(turn: Option<TurnReport>) -> Self {
        Self {
            flow: Flow::Quit,
            turn,
        }
    }
}

pub struct Session {
    engine: Engine,
    mode: InputMode,
    log: MessageLog,
    /// Screen cell of map tile (0, 0).
    map_origin: (u16, u16),
}

impl Session {
    pub fn new(engine: Engine, log: MessageLog) -> Self {
        let mut session = Self {
            engine,
            mode: InputMode::MainGame,
            log,
            map_origin: (0, 0),
        };
        session.check_game_over();
        session
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    /// Where the renderer placed the map, for pointer-to-tile conversion.
    pub fn set_map_origin(&mut self, column: u16, row: u16) {
        self.map_origin = (column, row);
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Step {
        match event {
            InputEvent::Quit => {
                tracing::info!(mode = ?self.mode, "quit signal received");
                return Step::quit(None);
            }
            InputEvent::MouseMotion { column, row } => {
                self.hover(column, row);
                return Step::idle();
            }
            InputEvent::Resize => return Step::idle(),
            InputEvent::Key(_) => {}
        }

        let ctx = TransitionContext {
            log_length: self.log.len(),
        };
        let previous = self.mode;
        let Transition { mode, action } = previous.transition(&event, &ctx);
        if mode != previous {
            tracing::debug!(from = ?previous, to = ?mode, "input mode changed");
        }
        self.mode = mode;

        match action {
            Some(action) => self.run_action(action, previous.advances_world()),
            None => Step::idle(),
        }
    }

    fn hover(&mut self, column: u16, row: u16) {
        let x = i32::from(column) - i32::from(self.map_origin.0);
        let y = i32::from(row) - i32::from(self.map_origin.1);
        if !self.engine.set_mouse_location(x, y) {
            tracing::trace!(x, y, "pointer outside the map");
        }
    }

    fn run_action(&mut self, action: Action, advances_world: bool) -> Step {
        let mut report = TurnReport::default();

        let outcome = match action.perform(&mut self.engine) {
            Ok(outcome) => outcome,
            Err(err) => {
                self.reject(action, &err);
                return Step {
                    flow: Flow::Continue,
                    turn: Some(report),
                };
            }
        };

        if let ActionOutcome::Attacked { name, .. } = &outcome {
            self.log
                .push_text(format!("You kick the {name}, much to its annoyance!"));
        }
        let quit = outcome == ActionOutcome::Quit;
        report.phases.push(TurnPhase::Action(outcome));

        if quit {
            return Step::quit(Some(report));
        }
        if !advances_world || !action.advances_turn() {
            return Step {
                flow: Flow::Continue,
                turn: Some(report),
            };
        }

        let turns = self.engine.handle_enemy_turns();
        for turn in &turns {
            tracing::debug!(
                actor = %turn.actor,
                "The {} wonders when it will get to take a real turn.",
                turn.name
            );
        }
        report.phases.push(TurnPhase::EnemyTurns(turns));

        self.engine.update_fov();
        report.phases.push(TurnPhase::Visibility {
            origin: self.engine.fov_origin(),
        });

        self.check_game_over();
        Step {
            flow: Flow::Continue,
            turn: Some(report),
        }
    }

    fn reject(&mut self, action: Action, err: &ActionError) {
        let severity = err.severity();
        if severity.is_internal() {
            tracing::error!(
                ?action,
                code = err.error_code(),
                severity = severity.as_str(),
                error = %err,
                "action failed"
            );
            self.log.push_error(err.to_string());
        } else {
            tracing::warn!(
                ?action,
                code = err.error_code(),
                error = %err,
                "action rejected"
            );
            self.log.push_warning(err.to_string());
        }
    }

    fn check_game_over(&mut self) {
        let alive = self.engine.player().is_some_and(|player| player.is_alive());
        if !alive && self.mode != InputMode::GameOver {
            tracing::info!(turn = self.engine.turn(), "player died");
            self.log.push_text("You died!");
            self.mode = InputMode::GameOver;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::MessageLevel;
    use crossterm::event::KeyCode;
    use game_core::{Ai, Entity, Fighter, GameConfig, GameMap, MapId, Rgb};

    fn session() -> Session {
        let mut map =
            GameMap::from_layout(MapId(1), &["#####", "#...#", "#...#", "#####"]).unwrap();
        let player = Entity::actor(
            '@',
            Rgb::WHITE,
            "Player",
            Ai::hostile(),
            Fighter::new(30, 2, 5),
        )
        .place_into(1, 1, &mut map);
        let engine = Engine::new(map, player, GameConfig::default()).unwrap();
        Session::new(engine, MessageLog::new(16))
    }

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(code)
    }

    #[test]
    fn rejected_action_is_logged_and_does_not_advance() {
        let mut session = session();
        let step = session.handle_event(key(KeyCode::Up));

        assert_eq!(step.flow, Flow::Continue);
        assert_eq!(step.turn, Some(TurnReport::default()));
        assert_eq!(session.engine().turn(), 0);
        assert_eq!(session.log().len(), 1);
        assert_eq!(session.log().get(0).unwrap().text, "That way is blocked.");
    }

    #[test]
    fn rejected_move_is_a_warning() {
        let mut session = session();
        session.handle_event(key(KeyCode::Left));
        assert_eq!(session.log().get(0).unwrap().level, MessageLevel::Warning);
    }

    #[test]
    fn missing_player_is_reported_as_an_error() {
        let mut session = session();
        let player = session.engine().player_id();
        session.engine_mut().map_mut().remove(player);

        let step = session.handle_event(key(KeyCode::Right));

        assert_eq!(step.turn, Some(TurnReport::default()));
        let entry = session.log().get(0).unwrap();
        assert_eq!(entry.level, MessageLevel::Error);
        assert_eq!(entry.text, format!("Actor {player} is not on the map."));
        assert_eq!(session.engine().turn(), 0);
    }

    #[test]
    fn quit_signal_ends_without_a_turn() {
        let mut session = session();
        let step = session.handle_event(InputEvent::Quit);
        assert_eq!(step, Step::quit(None));
        assert_eq!(session.engine().turn(), 0);
    }

    #[test]
    fn escape_quits_without_enemy_pass() {
        let mut session = session();
        let step = session.handle_event(key(KeyCode::Esc));
        assert_eq!(step.flow, Flow::Quit);
        assert_eq!(
            step.turn.unwrap().phases,
            vec![TurnPhase::Action(ActionOutcome::Quit)]
        );
    }

    #[test]
    fn pointer_is_converted_relative_to_map_origin() {
        let mut session = session();
        session.set_map_origin(10, 5);

        session.handle_event(InputEvent::MouseMotion { column: 12, row: 6 });
        assert_eq!(session.engine().mouse_location(), Some(Position::new(2, 1)));

        session.handle_event(InputEvent::MouseMotion { column: 2, row: 1 });
        assert_eq!(session.engine().mouse_location(), Some(Position::new(2, 1)));
    }

    #[test]
    fn dead_player_switches_to_game_over_after_the_turn() {
        let mut session = session();
        session
            .engine_mut()
            .player_mut()
            .and_then(Entity::as_actor_mut)
            .unwrap()
            .die();

        session.handle_event(key(KeyCode::Char('.')));
        assert_eq!(session.mode(), InputMode::GameOver);

        let step = session.handle_event(key(KeyCode::Right));
        assert_eq!(step, Step::idle());
        assert_eq!(
            session.engine().player_position(),
            Some(Position::new(1, 1))
        );
    }
}
