//! Tilt Dodge headless runner
//!
//! Plays a few rounds with an autopilot standing in for the accelerometer,
//! then prints the leaderboard.

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use glam::Vec2;

use tilt_dodge::engine::Ticker;
use tilt_dodge::platform::TiltInput;
use tilt_dodge::renderer::{DrawList, Frame};
use tilt_dodge::sim::{GameEvent, GamePhase};
use tilt_dodge::{Game, GameError, HighScores, Settings};

/// How often the autopilot thread reads the board and tilts
const STEER_INTERVAL: Duration = Duration::from_millis(30);
/// Fastest the autopilot will ask the ball to move
const AUTOPILOT_SPEED: f32 = 4.0;

#[derive(Parser, Debug)]
#[command(name = "tilt-dodge", version, about = "Run tilt-dodge sessions with an autopilot")]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for enemy spawns
    #[arg(long)]
    seed: Option<u64>,

    /// Screen width override
    #[arg(long)]
    width: Option<u32>,

    /// Screen height override
    #[arg(long)]
    height: Option<u32>,

    /// Number of sessions to play
    #[arg(short, long, default_value_t = 3)]
    rounds: u32,

    /// Give up on a session after this many seconds
    #[arg(short, long, default_value_t = 60)]
    seconds: u64,
}

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.seed = args.seed.or(settings.seed);
    settings.screen_width = args.width.unwrap_or(settings.screen_width);
    settings.screen_height = args.height.unwrap_or(settings.screen_height);

    let (events_tx, events_rx) = mpsc::channel();
    let canvas = Arc::new(Mutex::new(DrawList::default()));
    let mut game = Game::from_settings(&settings)?
        .with_listener(events_tx)
        .with_canvas(canvas.clone());
    let input = game.input();
    let watcher = game.watcher();
    let autopilot = Ticker::spawn("autopilot", STEER_INTERVAL, move || {
        let frame = watcher.snapshot();
        if frame.phase == GamePhase::Running {
            steer(&frame, &input);
        }
        ControlFlow::Continue(())
    })
    .map_err(GameError::Spawn)?;
    let mut leaderboard = HighScores::new();

    for round in 1..=args.rounds {
        // Drop anything left over from an interrupted round
        while events_rx.try_recv().is_ok() {}
        game.start()?;
        log::info!("Round {} started", round);
        let deadline = Instant::now() + Duration::from_secs(args.seconds);

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match events_rx.recv_timeout(remaining) {
                Ok(GameEvent::GameOver(score)) => {
                    log::info!("Round {} over with {} points", round, score);
                    break;
                }
                Ok(GameEvent::ScoreUpdated(score)) => log::debug!("Score {}", score),
                Err(RecvTimeoutError::Timeout) => {
                    game.pause();
                    log::info!("Round {} stopped after {}s", round, args.seconds);
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => {
                    log::warn!("Score channel closed");
                    break;
                }
            }
        }

        let frame = game.snapshot();
        if let Some(rank) = leaderboard.add_score(frame.score, frame.wave, unix_ms()) {
            log::info!("New high score #{}: {}", rank, frame.score);
        }
        if let Ok(list) = canvas.lock() {
            log::debug!(
                "{} frames presented, {} circles in the last one",
                list.frames_presented(),
                list.circle_count()
            );
        }
    }

    autopilot.stop();

    println!("Leaderboard:");
    for (i, entry) in leaderboard.entries.iter().enumerate() {
        println!("{:>2}. {:>6} pts  wave {}", i + 1, entry.score, entry.wave);
    }
    Ok(())
}

/// Tilt away from the nearest enemy, with a pull back toward the centre so
/// the ball does not pin itself in a corner
fn steer(frame: &Frame, input: &TiltInput) {
    let player = frame.player.pos;
    let Some(threat) = frame
        .enemies
        .iter()
        .map(|e| e.pos())
        .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)))
    else {
        return;
    };

    let centre = Vec2::new(frame.screen_width as f32, frame.screen_height as f32) * 0.5;
    let away = (player - threat).normalize_or_zero();
    let home = (centre - player).normalize_or_zero() * 0.5;
    let vel = (away + home).normalize_or_zero() * AUTOPILOT_SPEED;

    // The sensor reports x inverted
    let sensitivity = input.sensitivity();
    input.on_accelerometer(-vel.x / sensitivity, vel.y / sensitivity);
}

fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
