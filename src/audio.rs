//! Sound effects for a single-voice piezo
//!
//! The game never produces samples itself. It hands a [`Tune`] to a
//! [`SoundSink`] and moves on; playback must not hold up the tick.

/// Notes the piezo is asked to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
    E5,
    G5,
}

impl Pitch {
    /// Equal-tempered frequency in Hz
    pub fn frequency_hz(self) -> f32 {
        match self {
            Pitch::C4 => 261.63,
            Pitch::D4 => 293.66,
            Pitch::E4 => 329.63,
            Pitch::F4 => 349.23,
            Pitch::G4 => 392.00,
            Pitch::A4 => 440.00,
            Pitch::B4 => 493.88,
            Pitch::C5 => 523.25,
            Pitch::E5 => 659.25,
            Pitch::G5 => 783.99,
        }
    }
}

/// One step of a tune; `pitch: None` is a rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub pitch: Option<Pitch>,
    /// Length as a fraction of a beat
    pub beats: f32,
}

impl Note {
    pub const fn tone(pitch: Pitch, beats: f32) -> Self {
        Self {
            pitch: Some(pitch),
            beats,
        }
    }

    pub const fn rest(beats: f32) -> Self {
        Self { pitch: None, beats }
    }
}

/// A note sequence with a tempo in beats per minute
#[derive(Debug, Clone, PartialEq)]
pub struct Tune {
    pub notes: Vec<Note>,
    pub tempo: u16,
}

impl Tune {
    /// Total playing time in milliseconds
    pub fn duration_ms(&self) -> u32 {
        let beat_ms = 60_000.0 / self.tempo.max(1) as f32;
        let beats: f32 = self.notes.iter().map(|n| n.beats).sum();
        (beats * beat_ms).round() as u32
    }
}

/// Fire-and-forget tune player
pub trait SoundSink {
    fn play(&mut self, tune: &Tune);
}

/// Sink for builds without a speaker
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _tune: &Tune) {}
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Round started
    Start,
    /// Runner was hit
    GameOver,
}

impl SoundEffect {
    pub fn tune(self) -> Tune {
        match self {
            // Quick rising chirp
            SoundEffect::Start => Tune {
                notes: vec![
                    Note::tone(Pitch::C5, 0.25),
                    Note::tone(Pitch::E5, 0.25),
                    Note::tone(Pitch::G5, 0.5),
                ],
                tempo: 200,
            },
            // Falling line ending on a long low note
            SoundEffect::GameOver => Tune {
                notes: vec![
                    Note::tone(Pitch::G4, 0.5),
                    Note::tone(Pitch::F4, 0.5),
                    Note::tone(Pitch::E4, 0.5),
                    Note::rest(0.25),
                    Note::tone(Pitch::D4, 0.5),
                    Note::tone(Pitch::C4, 1.5),
                ],
                tempo: 120,
            },
        }
    }
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager<S> {
    sink: S,
    muted: bool,
}

impl<S: SoundSink> AudioManager<S> {
    pub fn new(sink: S, muted: bool) -> Self {
        Self { sink, muted }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        log::debug!("Playing {:?}", effect);
        self.sink.play(&effect.tune());
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<Tune>);

    impl SoundSink for Recorder {
        fn play(&mut self, tune: &Tune) {
            self.0.push(tune.clone());
        }
    }

    #[test]
    fn test_play_forwards_tune() {
        let mut audio = AudioManager::new(Recorder::default(), false);
        audio.play(SoundEffect::GameOver);
        assert_eq!(audio.sink().0, vec![SoundEffect::GameOver.tune()]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Recorder::default(), true);
        audio.play(SoundEffect::Start);
        assert!(audio.sink().0.is_empty());

        audio.set_muted(false);
        audio.play(SoundEffect::Start);
        assert_eq!(audio.sink().0.len(), 1);
    }

    #[test]
    fn test_durations() {
        // 3.75 beats at 120 bpm
        assert_eq!(SoundEffect::GameOver.tune().duration_ms(), 1875);
        // 1 beat at 200 bpm
        assert_eq!(SoundEffect::Start.tune().duration_ms(), 300);
    }

    #[test]
    fn test_game_over_tune_descends() {
        let pitches: Vec<f32> = SoundEffect::GameOver
            .tune()
            .notes
            .iter()
            .filter_map(|n| n.pitch)
            .map(Pitch::frequency_hz)
            .collect();
        assert!(pitches.windows(2).all(|w| w[0] > w[1]));
    }
}
