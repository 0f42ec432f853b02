//! Session-level ordering of a turn and input mode switching.

use client_frontend_cli::{Flow, InputEvent, InputMode, Session, TurnPhase};
use client_frontend_core::MessageLog;
use crossterm::event::KeyCode;
use game_content::factories;
use game_core::{
    ActionOutcome, EnemyTurn, Engine, Entity, EntityId, GameConfig, GameMap, MapId, Position,
};

struct Fixture {
    session: Session,
    orc: EntityId,
}

fn corridor() -> Fixture {
    let mut map = GameMap::from_layout(MapId(7), &["#######", "#.....#", "#######"]).unwrap();
    let player = factories::player().spawn(&mut map, 1, 1);
    let orc = factories::orc().spawn(&mut map, 4, 1);
    let engine = Engine::new(map, player, GameConfig::default()).unwrap();
    Fixture {
        session: Session::new(engine, MessageLog::new(32)),
        orc,
    }
}

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key(code)
}

#[test]
fn move_then_enemies_then_visibility() {
    let Fixture { mut session, orc } = corridor();
    let step = session.handle_event(key(KeyCode::Right));
    let moved_to = Position::new(2, 1);

    assert_eq!(step.flow, Flow::Continue);
    assert_eq!(
        step.turn.unwrap().phases,
        vec![
            TurnPhase::Action(ActionOutcome::Moved { to: moved_to }),
            TurnPhase::EnemyTurns(vec![EnemyTurn {
                actor: orc,
                name: "Orc".into(),
                player_position: Some(moved_to),
            }]),
            TurnPhase::Visibility {
                origin: Some(moved_to)
            },
        ]
    );
    assert_eq!(session.engine().turn(), 1);
    assert_eq!(session.engine().fov_origin(), Some(moved_to));
}

#[test]
fn bumping_an_enemy_attacks_and_still_passes_the_turn() {
    let Fixture { mut session, orc } = corridor();
    session.handle_event(key(KeyCode::Char('l')));
    session.handle_event(key(KeyCode::Char('l')));

    let step = session.handle_event(key(KeyCode::Char('l')));
    let phases = step.turn.unwrap().phases;

    assert_eq!(
        phases[0],
        TurnPhase::Action(ActionOutcome::Attacked {
            target: orc,
            name: "Orc".into()
        })
    );
    assert_eq!(phases.len(), 3);
    assert_eq!(
        session.engine().player_position(),
        Some(Position::new(3, 1))
    );
    let last = session.log().iter().last().unwrap();
    assert_eq!(last.text, "You kick the Orc, much to its annoyance!");
}

#[test]
fn history_viewer_round_trip() {
    let Fixture { mut session, .. } = corridor();
    for text in ["a", "b", "c", "d", "e"] {
        session.log_mut().push_text(text);
    }

    session.handle_event(key(KeyCode::Char('v')));
    assert_eq!(
        session.mode(),
        InputMode::HistoryViewer {
            cursor: 4,
            log_length: 5
        }
    );

    session.handle_event(key(KeyCode::Up));
    assert_eq!(
        session.mode(),
        InputMode::HistoryViewer {
            cursor: 0,
            log_length: 5
        }
    );

    // Movement keys are not history keys, so this only leaves the viewer.
    let step = session.handle_event(key(KeyCode::Left));
    assert_eq!(session.mode(), InputMode::MainGame);
    assert!(step.turn.is_none());
    assert_eq!(session.engine().turn(), 0);
    assert_eq!(
        session.engine().player_position(),
        Some(Position::new(1, 1))
    );

    session.log_mut().push_text("f");
    session.handle_event(key(KeyCode::Char('v')));
    assert_eq!(
        session.mode(),
        InputMode::HistoryViewer {
            cursor: 5,
            log_length: 6
        }
    );
}

#[test]
fn game_over_only_listens_for_escape() {
    let Fixture { mut session, .. } = corridor();
    session
        .engine_mut()
        .player_mut()
        .and_then(Entity::as_actor_mut)
        .unwrap()
        .die();
    session.handle_event(key(KeyCode::Char('5')));
    assert_eq!(session.mode(), InputMode::GameOver);
    let turn = session.engine().turn();

    for code in [KeyCode::Char('v'), KeyCode::Char('.'), KeyCode::Down] {
        let step = session.handle_event(key(code));
        assert_eq!(step.flow, Flow::Continue);
        assert!(step.turn.is_none());
    }
    assert_eq!(session.mode(), InputMode::GameOver);

    let step = session.handle_event(key(KeyCode::Esc));
    assert_eq!(step.flow, Flow::Quit);
    assert_eq!(
        step.turn.unwrap().phases,
        vec![TurnPhase::Action(ActionOutcome::Quit)]
    );
    assert_eq!(session.engine().turn(), turn);
}

#[test]
fn pointer_outside_the_map_is_ignored() {
    let Fixture { mut session, .. } = corridor();
    session.handle_event(InputEvent::MouseMotion { column: 3, row: 1 });
    assert_eq!(session.engine().mouse_location(), Some(Position::new(3, 1)));

    session.handle_event(InputEvent::MouseMotion { column: 40, row: 1 });
    assert_eq!(session.engine().mouse_location(), Some(Position::new(3, 1)));
}

#[test]
fn quit_signal_works_in_every_mode() {
    let Fixture { mut session, .. } = corridor();
    session.handle_event(key(KeyCode::Char('v')));
    assert!(matches!(session.mode(), InputMode::HistoryViewer { .. }));
    assert_eq!(session.handle_event(InputEvent::Quit).flow, Flow::Quit);
}
