//! Phase orchestration
//!
//! [`GameStateMachine`] owns the game state, the clock and the three I/O
//! seams. Every timer callback is an [`Event`] popped from the scheduler and
//! handled through `&mut self`, so handlers never overlap.

use std::time::Duration;

use super::clock::{Scheduler, TimerId};
use super::input::{InputSampler, InputSource, LatestReading};
use super::state::{GamePhase, GameState};
use super::tick::{TickInput, TickOutcome, tick};
use crate::audio::{AudioManager, SoundEffect, SoundSink};
use crate::consts::MAX_CATCHUP_EVENTS;
use crate::renderer::{DisplaySink, draw_attract, draw_game_over, draw_playfield};
use crate::{ConfigError, Settings};

/// Scheduled callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Main simulation step
    Tick,
    /// Refresh the latest knob reading
    Sample,
    /// Check for a start gesture on the attract screen
    AttractPoll,
    /// Power-on delay finished
    StartupElapsed,
    /// Score has been shown long enough
    GameOverElapsed,
}

pub struct GameStateMachine<I, D, S> {
    settings: Settings,
    state: GameState,
    sampler: InputSampler<I>,
    latest: LatestReading,
    display: D,
    audio: AudioManager<S>,
    clock: Scheduler<Event>,
    /// Cancel token for the gesture poll while on the attract screen
    attract_poll: Option<TimerId>,
    /// The single outstanding delayed transition, if any
    transition: Option<TimerId>,
}

impl<I: InputSource, D: DisplaySink, S: SoundSink> GameStateMachine<I, D, S> {
    /// Validate settings, start the tick and sample timers and arm the
    /// startup delay. The machine begins in `Idle`.
    pub fn new(settings: Settings, input: I, display: D, sound: S) -> Result<Self, ConfigError> {
        settings.validate()?;

        let seed = settings.resolved_seed();
        log::info!("Game initialized with seed: {}", seed);

        let mut sampler = InputSampler::new(input, settings.max_raw_value);
        let latest = LatestReading::new(sampler.read());

        let mut clock = Scheduler::new();
        clock.every(settings.tick_period(), Event::Tick);
        clock.every(settings.sample_period(), Event::Sample);

        let audio = AudioManager::new(sound, settings.muted);
        let startup_delay = settings.startup_delay();

        let mut machine = Self {
            settings,
            state: GameState::new(seed),
            sampler,
            latest,
            display,
            audio,
            clock,
            attract_poll: None,
            transition: None,
        };
        machine.schedule_transition(startup_delay, Event::StartupElapsed);
        Ok(machine)
    }

    /// Let `elapsed` time pass, firing every event that falls due
    ///
    /// Returns the number of events handled. If more than
    /// `MAX_CATCHUP_EVENTS` are due at once, missed repeating firings are
    /// dropped instead of replayed.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let target = self.clock.now() + elapsed;
        let mut fired = 0;

        while let Some((_, event)) = self.clock.pop_due(target) {
            self.handle(event);
            fired += 1;

            if fired >= MAX_CATCHUP_EVENTS {
                let skipped = self.clock.skip_missed(target);
                if skipped > 0 {
                    log::warn!("Fell behind: dropped {} timer firings", skipped);
                }
            }
        }

        self.clock.advance_to(target);
        fired
    }

    /// React to one scheduled event
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Tick => self.on_tick(),
            Event::Sample => {
                let raw = self.sampler.read();
                self.latest.store(raw);
            }
            Event::AttractPoll => self.poll_attract(),
            Event::StartupElapsed | Event::GameOverElapsed => {
                self.transition = None;
                self.enter_attract();
            }
        }
    }

    fn schedule_transition(&mut self, delay: Duration, event: Event) {
        debug_assert!(
            self.transition.is_none_or(|id| !self.clock.is_active(id)),
            "delayed transitions must not overlap"
        );
        self.transition = Some(self.clock.once(delay, event));
    }

    fn stop_attract_poll(&mut self) {
        if let Some(id) = self.attract_poll.take() {
            self.clock.cancel(id);
        }
    }

    fn enter_attract(&mut self) {
        self.state.phase = GamePhase::Attract;
        draw_attract(&mut self.display);
        self.state.reset();
        self.state.baseline = self.sampler.sample();

        self.stop_attract_poll();
        self.attract_poll = Some(
            self.clock
                .every(self.settings.attract_poll_period(), Event::AttractPoll),
        );
        log::info!("Attract screen (baseline {:.3})", self.state.baseline);
    }

    fn poll_attract(&mut self) {
        if self.state.phase != GamePhase::Attract {
            self.stop_attract_poll();
            return;
        }

        let position = self.sampler.sample();
        let change = (position - self.state.baseline).abs();
        if change > self.settings.start_threshold {
            self.stop_attract_poll();
            self.start_round();
        }
    }

    fn start_round(&mut self) {
        self.state.phase = GamePhase::Playing;
        self.state.rounds_played += 1;
        self.display.clear();
        self.audio.play(SoundEffect::Start);
        log::info!("Round {} started", self.state.rounds_played);
    }

    fn on_tick(&mut self) {
        let input = TickInput {
            player_lane: self
                .sampler
                .lane(self.latest.load(), self.state.field.columns()),
        };

        match tick(&mut self.state, &input) {
            TickOutcome::Skipped => {}
            TickOutcome::Survived { .. } => {
                draw_playfield(&mut self.display, self.state.player_lane, &self.state.field);
            }
            TickOutcome::Hit { lane, age, score } => {
                log::info!(
                    "Round {} over: hit in lane {} (age {}), score {}",
                    self.state.rounds_played,
                    lane,
                    age,
                    score
                );
                self.game_over(score);
            }
        }
    }

    fn game_over(&mut self, score: u32) {
        draw_game_over(&mut self.display, score);
        self.audio.play(SoundEffect::GameOver);
        self.state.reset();
        self.schedule_transition(self.settings.game_over_delay(), Event::GameOverElapsed);
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn audio(&self) -> &AudioManager<S> {
        &self.audio
    }

    pub fn clock(&self) -> &Scheduler<Event> {
        &self.clock
    }

    /// Most recently sampled raw knob reading
    pub fn latest_reading(&self) -> u16 {
        self.latest.load()
    }

    pub fn is_polling_attract(&self) -> bool {
        self.attract_poll.is_some_and(|id| self.clock.is_active(id))
    }

    /// Time until the next scheduled event
    pub fn until_next_event(&self) -> Option<Duration> {
        self.clock.until_next()
    }
}
