use std::io::{self, BufRead, Write};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tankdrive_app::args::Args;
use tankdrive_app::config::load_config;
use tankdrive_app::game_loop::{run_headless, spawn_game_loop, LatestSnapshot};
use tankdrive_app::panel::parse_line;
use tankdrive_app::state::GameLoopCommand;
use tankdrive_core::state::SceneSnapshot;
use tankdrive_sim::{SceneConfig, SceneEngine};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    info!(path = ?config.path.kind(), tanks = config.tanks.len(), "config loaded");

    match args.ticks {
        Some(ticks) => run_batch(config, ticks, args.emit_every),
        None => run_interactive(config, args.emit_every),
    }
}

/// Tick as fast as possible and stream snapshots, then exit.
fn run_batch(config: SceneConfig, ticks: u64, emit_every: u64) -> anyhow::Result<()> {
    let mut engine = SceneEngine::new(config);
    let mut out = io::stdout().lock();
    let mut write_error = None;

    run_headless(&mut engine, ticks, emit_every, |snapshot| {
        if write_error.is_none() {
            write_error = write_snapshot(&mut out, snapshot).err();
        }
    });

    match write_error {
        Some(err) => Err(err).context("failed to write snapshot"),
        None => Ok(()),
    }
}

/// Run the real-time loop, reading panel lines from stdin until EOF.
fn run_interactive(config: SceneConfig, emit_every: u64) -> anyhow::Result<()> {
    let emit_every = emit_every.max(1);
    let latest: LatestSnapshot = Arc::new(Mutex::new(None));

    let (cmd_tx, handle) = spawn_game_loop(config, Arc::clone(&latest), move |snapshot| {
        if snapshot.time.tick % emit_every != 0 {
            return;
        }
        if let Err(err) = write_snapshot(&mut io::stdout().lock(), snapshot) {
            warn!(%err, "failed to write snapshot");
        }
    })
    .context("failed to spawn game loop thread")?;

    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read control panel input")?;
        match parse_line(&line) {
            Ok(Some(message)) => {
                if cmd_tx.send(message.into()).is_err() {
                    warn!("game loop stopped, dropping remaining input");
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => warn!(line = number + 1, %err, "ignoring malformed panel line"),
        }
    }

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    if let Ok(lock) = latest.lock() {
        if let Some(snapshot) = lock.as_ref() {
            info!(tick = snapshot.time.tick, "stopped");
        }
    }
    Ok(())
}

fn write_snapshot(out: &mut impl Write, snapshot: &SceneSnapshot) -> io::Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    writeln!(out)?;
    out.flush()
}
