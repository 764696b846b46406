//! Full rounds driven through the public API

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use sweet_runner::Settings;
use sweet_runner::audio::Silent;
use sweet_runner::consts::*;
use sweet_runner::renderer::TextBuffer;
use sweet_runner::sim::{GamePhase, GameStateMachine, InputSource};

#[derive(Clone)]
struct Dial(Rc<Cell<u16>>);

impl InputSource for Dial {
    fn read(&mut self) -> u16 {
        self.0.get()
    }
}

fn step<I: InputSource>(machine: &mut GameStateMachine<I, TextBuffer, Silent>, ms: u64) {
    for _ in 0..ms / 50 {
        machine.advance(Duration::from_millis(50));
    }
}

fn started(seed: u64) -> (Dial, GameStateMachine<Dial, TextBuffer, Silent>) {
    let dial = Dial(Rc::new(Cell::new(0)));
    let settings = Settings {
        seed: Some(seed),
        ..Default::default()
    };
    let mut machine =
        GameStateMachine::new(settings, dial.clone(), TextBuffer::default(), Silent).unwrap();
    step(&mut machine, STARTUP_DELAY_MS);
    assert_eq!(machine.phase(), GamePhase::Attract);

    // Twist to the middle of the dial
    dial.0.set(512);
    step(&mut machine, ATTRACT_POLL_MS);
    assert_eq!(machine.phase(), GamePhase::Playing);
    (dial, machine)
}

#[test]
fn standing_still_eventually_loses() {
    let (_dial, mut machine) = started(31337);

    let mut ticks = 0;
    while machine.phase() == GamePhase::Playing {
        step(&mut machine, TICK_MS);
        ticks += 1;
        assert!(ticks < 4000, "runner survived too long");
    }

    assert_eq!(machine.phase(), GamePhase::GameOver);
    let score = machine.state().last_score.expect("score recorded");
    // A block spawned on tick 5 cannot become lethal before tick 9
    assert!(score >= 9, "score {score}");
    assert_eq!(machine.display().row_text(0), "    YOU DIED    ");
    assert_eq!(machine.display().row_text(1), format!("SCORE: {score:>9}"));

    step(&mut machine, GAME_OVER_DELAY_MS);
    assert_eq!(machine.phase(), GamePhase::Attract);
}

#[test]
fn same_seed_same_round() {
    let play = |seed| {
        let (_dial, mut machine) = started(seed);
        while machine.phase() == GamePhase::Playing {
            step(&mut machine, TICK_MS);
        }
        machine.state().last_score
    };
    assert_eq!(play(77), play(77));
}

#[test]
fn second_round_starts_fresh() {
    let (dial, mut machine) = started(5);
    while machine.phase() == GamePhase::Playing {
        step(&mut machine, TICK_MS);
    }
    step(&mut machine, GAME_OVER_DELAY_MS);
    assert_eq!(machine.phase(), GamePhase::Attract);
    assert!(machine.state().field.is_empty());
    assert_eq!(machine.state().score(), 0);

    dial.0.set(0);
    step(&mut machine, ATTRACT_POLL_MS);
    assert_eq!(machine.phase(), GamePhase::Playing);
    assert_eq!(machine.state().rounds_played, 2);

    step(&mut machine, TICK_MS);
    assert_eq!(machine.state().score(), 1);
}
