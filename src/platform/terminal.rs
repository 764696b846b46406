//! Terminal front-end (crossterm)

use std::io::{self, Stdout, Write, stdout};
use std::sync::Arc;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Color},
    terminal,
};

use crate::audio::{SoundSink, Tune};
use crate::renderer::TextBuffer;
use crate::sim::InputSource;

/// A virtual potentiometer turned with the arrow keys
///
/// Clones share the same dial, so the event loop can turn it while the
/// state machine owns another handle as its input source.
#[derive(Debug, Clone)]
pub struct Knob {
    raw: Arc<AtomicU16>,
    max_raw: u16,
}

impl Knob {
    /// Knob at the given raw reading
    pub fn new(max_raw: u16, initial: u16) -> Self {
        Self {
            raw: Arc::new(AtomicU16::new(initial.min(max_raw))),
            max_raw,
        }
    }

    pub fn value(&self) -> u16 {
        self.raw.load(Ordering::Relaxed)
    }

    /// Step the dial by one lane's worth of travel, clamped at the stops
    ///
    /// Positive steps move the runner right (lower raw readings).
    pub fn turn(&self, lanes: i32, columns: usize) {
        let lanes_span = columns.max(2) as u32 - 1;
        let per_lane = u32::from(self.max_raw).div_ceil(lanes_span) as i32;
        let next = i32::from(self.value()) - lanes * per_lane;
        let next = next.clamp(0, i32::from(self.max_raw));
        self.raw.store(next as u16, Ordering::Relaxed);
    }
}

impl InputSource for Knob {
    fn read(&mut self) -> u16 {
        self.value()
    }
}

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Turn the knob by this many lanes
    Turn(i32),
    Quit,
}

fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyAction> {
    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(KeyAction::Turn(-1)),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(KeyAction::Turn(1)),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Quit),
        KeyCode::Esc | KeyCode::Char('q') => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Raw-mode terminal showing a framed 16x2 "LCD"
///
/// Restores the terminal on drop.
pub struct TerminalSession {
    out: Stdout,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;
        execute!(out, terminal::Clear(terminal::ClearType::All))?;
        Ok(Self { out })
    }

    /// Wait up to `timeout` for a key press
    pub fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(map_key(key.code, key.modifiers))
            }
            _ => Ok(None),
        }
    }

    /// Draw the buffer inside a border
    pub fn present(&mut self, lcd: &TextBuffer) -> io::Result<()> {
        let width = lcd.columns();
        let edge = "─".repeat(width);

        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            style::ResetColor,
            style::Print(format!("┌{edge}┐"))
        )?;
        for row in 0..lcd.rows() {
            queue!(
                self.out,
                cursor::MoveTo(0, row as u16 + 1),
                style::Print("│"),
                style::SetForegroundColor(Color::Black),
                style::SetBackgroundColor(Color::Green),
                style::Print(lcd.row_text(row)),
                style::ResetColor,
                style::Print("│")
            )?;
        }
        queue!(
            self.out,
            cursor::MoveTo(0, lcd.rows() as u16 + 1),
            style::Print(format!("└{edge}┘")),
            cursor::MoveTo(0, lcd.rows() as u16 + 3),
            style::Print("←/→ turn the knob   q quit")
        )?;
        self.out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Rings the terminal bell in place of a piezo tune
#[derive(Debug, Default)]
pub struct BellSound;

impl SoundSink for BellSound {
    fn play(&mut self, tune: &Tune) {
        log::info!(
            "♪ {} notes at {} bpm ({} ms)",
            tune.notes.len(),
            tune.tempo,
            tune.duration_ms()
        );
        let mut out = stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}
