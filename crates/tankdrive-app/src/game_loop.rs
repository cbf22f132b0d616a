//! Game loop thread: runs the scene engine at a fixed rate and emits snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc` channel. Each snapshot is handed to a
//! sink and stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use tankdrive_core::constants::TICK_MILLIS;
use tankdrive_core::state::SceneSnapshot;
use tankdrive_sim::{SceneConfig, SceneEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_millis(TICK_MILLIS);

/// Shared slot holding the most recent snapshot.
pub type LatestSnapshot = Arc<Mutex<Option<SceneSnapshot>>>;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the panel reader and the thread handle.
pub fn spawn_game_loop<F>(
    config: SceneConfig,
    latest_snapshot: LatestSnapshot,
    sink: F,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)>
where
    F: FnMut(&SceneSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("tankdrive-game-loop".into())
        .spawn(move || {
            let engine = SceneEngine::new(config);
            run_game_loop(engine, cmd_rx, &latest_snapshot, sink);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<F>(
    mut engine: SceneEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SceneSnapshot>>,
    mut sink: F,
) where
    F: FnMut(&SceneSnapshot),
{
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Control(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Input(event)) => engine.queue_input(event),
                Ok(GameLoopCommand::Shutdown) => {
                    info!(tick = engine.time().tick, "game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return;
                }
            }
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the sink
        sink(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Run `ticks` ticks as fast as possible, handing every `emit_every`-th
/// snapshot to the sink. Returns the final snapshot.
pub fn run_headless<F>(
    engine: &mut SceneEngine,
    ticks: u64,
    emit_every: u64,
    mut sink: F,
) -> Option<SceneSnapshot>
where
    F: FnMut(&SceneSnapshot),
{
    let emit_every = emit_every.max(1);
    let mut last = None;
    for _ in 0..ticks {
        let snapshot = engine.tick();
        if snapshot.time.tick % emit_every == 0 {
            sink(&snapshot);
        }
        last = Some(snapshot);
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use tankdrive_core::commands::ControlCommand;
    use tankdrive_core::enums::CameraId;
    use tankdrive_core::input::InputEvent;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Control(ControlCommand::SetDriving {
            enabled: true,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Input(InputEvent::KeyPressed { key: 50, mods: 0 }))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Control(ControlCommand::SetDriving { enabled: true })
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Input(InputEvent::KeyPressed { key: 50, .. })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_applies_commands_then_stops_on_shutdown() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let latest = Mutex::new(None);
        let mut emitted = 0u64;

        tx.send(GameLoopCommand::Input(InputEvent::KeyPressed { key: 50, mods: 0 }))
            .unwrap();
        tx.send(GameLoopCommand::Control(ControlCommand::SetDriving {
            enabled: true,
        }))
        .unwrap();

        // Shutdown is only seen on the second drain, after one tick.
        let shutdown = tx.clone();
        run_game_loop(
            SceneEngine::new(SceneConfig::default()),
            rx,
            &latest,
            |_snapshot| {
                emitted += 1;
                let _ = shutdown.send(GameLoopCommand::Shutdown);
            },
        );

        assert_eq!(emitted, 1);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 1);
        assert_eq!(snapshot.camera.active, CameraId::Top);
        assert!(snapshot.controls.driving);
        assert!(snapshot.tanks[0].parameter > 0.0);
    }

    #[test]
    fn test_loop_stops_when_sender_dropped() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        drop(tx);
        let latest = Mutex::new(None);

        run_game_loop(
            SceneEngine::new(SceneConfig::default()),
            rx,
            &latest,
            |_| {},
        );

        assert!(latest.lock().unwrap().is_none());
    }

    #[test]
    fn test_spawned_loop_publishes_snapshots() {
        let latest: LatestSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) =
            spawn_game_loop(SceneConfig::default(), Arc::clone(&latest), |_| {}).unwrap();

        std::thread::sleep(TICK_DURATION * 5);
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert!(snapshot.time.tick >= 1);
    }

    #[test]
    fn test_headless_emits_every_nth_tick() {
        let mut engine = SceneEngine::new(SceneConfig::default());
        let mut ticks = Vec::new();

        let last = run_headless(&mut engine, 10, 3, |s| ticks.push(s.time.tick)).unwrap();

        assert_eq!(ticks, vec![3, 6, 9]);
        assert_eq!(last.time.tick, 10);
    }

    #[test]
    fn test_headless_zero_ticks() {
        let mut engine = SceneEngine::new(SceneConfig::default());
        assert!(run_headless(&mut engine, 0, 1, |_| {}).is_none());
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SceneEngine::new(SceneConfig::default());
        engine.queue_command(ControlCommand::SetDriving { enabled: true });
        for _ in 0..50 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        assert_eq!(TICK_DURATION.as_millis(), 16);
    }
}
