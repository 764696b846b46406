//! Sweet Runner entry point
//!
//! Runs the game in a terminal: the arrow keys stand in for the knob and a
//! framed 16x2 block stands in for the LCD. Logs go to stderr (`RUST_LOG`),
//! so redirect them when playing, e.g. `sweet-runner 2>runner.log`.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};

use sweet_runner::Settings;
use sweet_runner::consts::*;
use sweet_runner::platform::{BellSound, KeyAction, Knob, TerminalSession};
use sweet_runner::renderer::TextBuffer;
use sweet_runner::sim::GameStateMachine;

/// Longest the loop sleeps waiting for keys when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Default)]
struct Cli {
    config: Option<PathBuf>,
    seed: Option<u64>,
    mute: bool,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut cli = Cli::default();
        let mut args = std::env::args().skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--config requires a file path"))?;
                    cli.config = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("--seed requires a number"))?;
                    cli.seed = Some(
                        value
                            .parse::<u64>()
                            .with_context(|| format!("invalid --seed value: {value}"))?,
                    );
                }
                "--mute" => cli.mute = true,
                "-h" | "--help" => {
                    println!("Usage: sweet-runner [--config <settings.json>] [--seed <n>] [--mute]");
                    std::process::exit(0);
                }
                other => return Err(anyhow!("unknown argument: {other}. Use --help for usage.")),
            }
        }

        Ok(cli)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Sweet Runner starting...");

    let cli = Cli::parse()?;
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    settings.muted |= cli.mute;

    // Start centered so the first twist in either direction counts
    let knob = Knob::new(settings.max_raw_value, settings.max_raw_value / 2);
    let mut machine = GameStateMachine::new(
        settings,
        knob.clone(),
        TextBuffer::new(COLUMN_COUNT, ROW_COUNT),
        BellSound,
    )
    .context("invalid settings")?;

    let mut session = TerminalSession::enter().context("failed to set up terminal")?;
    let mut last = Instant::now();

    loop {
        let wait = machine.until_next_event().unwrap_or(IDLE_POLL).min(IDLE_POLL);
        match session.poll_key(wait)? {
            Some(KeyAction::Quit) => break,
            Some(KeyAction::Turn(lanes)) => knob.turn(lanes, COLUMN_COUNT),
            None => {}
        }

        let now = Instant::now();
        machine.advance(now - last);
        last = now;

        if machine.display_mut().take_dirty() {
            session.present(machine.display())?;
        }
    }

    drop(session);
    log::info!(
        "Sweet Runner exiting after {} rounds",
        machine.state().rounds_played
    );
    Ok(())
}
