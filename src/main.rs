//! Terminal blockfall runner (default binary).
//!
//! Gravity tick sources and a keyboard reader feed one channel; the driver
//! folds it into game states and paints each one with the framebuffer
//! renderer.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event as TermEvent};
use log::{debug, info};
use tokio::sync::mpsc;

use blockfall::config::{load_config, Config};
use blockfall::core::GameState;
use blockfall::engine::{spawn_tick_sources, Driver, Event, TickSchedule};
use blockfall::input::{should_quit, KeyFilter};
use blockfall::term::{GameView, TermSink, TerminalRenderer};

const INPUT_POLL: Duration = Duration::from_millis(100);
const CHANNEL_CAPACITY: usize = 256;

/// Falling-block puzzle in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// RNG seed; overrides the config file
    #[arg(long)]
    seed: Option<u32>,
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opts = Opts::parse();
    let config = load_config(opts.config.as_deref()).context("loading config")?;
    init_logging(&config)?;

    let seed = opts.seed.or(config.seed).unwrap_or_else(clock_seed);
    info!("starting with seed {seed}");

    let mut sink = TermSink::new(TerminalRenderer::new(), GameView::new(config.cell_width));
    sink.renderer_mut().enter()?;

    let result = run(seed, &config, &mut sink).await;

    // Always try to restore terminal state.
    let _ = sink.renderer_mut().exit();
    result
}

async fn run(seed: u32, config: &Config, sink: &mut TermSink) -> Result<()> {
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    let schedule = TickSchedule::from_millis(&config.tick_periods_ms);
    let ticks = spawn_tick_sources(&schedule, &tx);
    let input = tokio::task::spawn_blocking({
        let tx = tx.clone();
        move || read_keys(tx)
    });
    drop(tx);

    let last = Driver::new(GameState::new(seed)).run(rx, sink).await;

    for handle in ticks {
        handle.abort();
    }
    input.await.context("input thread panicked")??;

    let last = last?;
    info!(
        "final score {} (high {}), level {}, {} lines",
        last.score(),
        last.high_score(),
        last.level(),
        last.lines()
    );
    Ok(())
}

/// Blocking keyboard loop; stops on a quit key or once the driver is gone.
fn read_keys(tx: mpsc::Sender<Event>) -> Result<()> {
    let started = Instant::now();
    let mut filter = KeyFilter::new();

    while !tx.is_closed() {
        if !event::poll(INPUT_POLL)? {
            continue;
        }
        let TermEvent::Key(key) = event::read()? else {
            continue;
        };
        if should_quit(key) {
            debug!("quit key pressed");
            let _ = tx.blocking_send(Event::Shutdown);
            break;
        }
        let now_ms = started.elapsed().as_millis() as u64;
        if let Some(action) = filter.accept(key, now_ms) {
            if tx.blocking_send(Event::Action(action)).is_err() {
                break;
            }
        }
    }
    Ok(())
}

/// Logs go to `log_file` only; stderr belongs to the game screen.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
