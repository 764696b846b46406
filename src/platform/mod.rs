//! Platform abstraction layer
//!
//! Stand-ins for the hardware the game was built for:
//! - A keyboard-driven knob as the input source
//! - A terminal window as the character display
//! - The terminal bell as the piezo

pub mod terminal;

pub use terminal::{BellSound, Knob, KeyAction, TerminalSession};
