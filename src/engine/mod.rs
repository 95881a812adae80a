//! Game engine: owns the session and drives it on a loop thread
//!
//! One mutex guards the session. Every tick, the lifecycle controls and the
//! frame capture take it, so a wave change or game over never interleaves
//! with another tick. Drawing happens after the lock is released, from the
//! captured [`Frame`].

pub mod ticker;

pub use ticker::Ticker;

use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::Color;
use crate::consts::TICK_INTERVAL_MS;
use crate::error::GameError;
use crate::platform::{Clock, SystemClock, TiltInput};
use crate::renderer::{Canvas, Frame};
use crate::settings::Settings;
use crate::sim::{Bille, Bounds, GamePhase, GameState, ScoreListener, TickInput, tick};

/// Render target shared with the loop thread
pub type SharedCanvas = Arc<Mutex<dyn Canvas + Send>>;

struct Session {
    state: GameState,
    listener: Box<dyn ScoreListener + Send>,
}

/// Read-only handle that other threads can poll for frames
#[derive(Clone)]
pub struct Watcher {
    session: Arc<Mutex<Session>>,
    clock: Arc<dyn Clock>,
}

impl Watcher {
    pub fn snapshot(&self) -> Frame {
        Frame::capture(&lock(&self.session).state, self.clock.now_ms())
    }
}

/// A playable game: session state, loop thread and collaborators
pub struct Game {
    session: Arc<Mutex<Session>>,
    canvas: Option<SharedCanvas>,
    clock: Arc<dyn Clock>,
    input: TiltInput,
    interval: Duration,
    ticker: Option<Ticker>,
}

impl Game {
    /// Game with the default player, wall clock and ~60 Hz loop
    pub fn new(bounds: Bounds, seed: u64) -> Result<Self, GameError> {
        let state = GameState::new(bounds, seed)?;
        Ok(Self::assemble(
            state,
            TiltInput::default(),
            Duration::from_millis(TICK_INTERVAL_MS),
        ))
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let bounds = Bounds::new(settings.screen_width, settings.screen_height)?;
        let mut player = Bille::new(settings.player_radius)?;
        player.color = settings.player_skin;
        let state = GameState::with_player(bounds, player, settings.seed_or_random())?;
        Ok(Self::assemble(
            state,
            TiltInput::new(settings.tilt_sensitivity),
            Duration::from_millis(settings.tick_interval_ms),
        ))
    }

    fn assemble(state: GameState, input: TiltInput, interval: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session {
                state,
                listener: Box::new(()),
            })),
            canvas: None,
            clock: Arc::new(SystemClock::new()),
            input,
            interval,
            ticker: None,
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_canvas(mut self, canvas: SharedCanvas) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn with_listener(self, listener: impl ScoreListener + Send + 'static) -> Self {
        lock(&self.session).listener = Box::new(listener);
        self
    }

    /// Handle for the sensor thread to publish tilt readings
    pub fn input(&self) -> TiltInput {
        self.input.clone()
    }

    /// Frame source for another thread. Replace the clock before calling
    /// this; the watcher keeps the one in use at the time.
    pub fn watcher(&self) -> Watcher {
        Watcher {
            session: Arc::clone(&self.session),
            clock: Arc::clone(&self.clock),
        }
    }

    /// Begin a fresh session, discarding any previous one
    pub fn start(&mut self) -> Result<(), GameError> {
        self.stop_loop();
        {
            let mut guard = lock(&self.session);
            let Session { state, listener } = &mut *guard;
            state.start(self.clock.now_ms(), &mut **listener);
        }
        self.spawn_loop()
    }

    /// Freeze the session; no tick fires after this returns
    pub fn pause(&mut self) {
        let paused = lock(&self.session).state.pause(self.clock.now_ms());
        self.stop_loop();
        if paused {
            log::info!("Game paused");
        }
    }

    /// Continue a paused session. Does nothing after game over.
    pub fn resume(&mut self) -> Result<(), GameError> {
        let resumed = lock(&self.session).state.resume(self.clock.now_ms());
        if !resumed {
            return Ok(());
        }
        log::info!("Game resumed");
        self.stop_loop();
        self.spawn_loop()
    }

    pub fn is_running(&self) -> bool {
        lock(&self.session).state.is_running()
    }

    pub fn phase(&self) -> GamePhase {
        lock(&self.session).state.phase()
    }

    pub fn score(&self) -> u64 {
        lock(&self.session).state.score()
    }

    /// Consistent copy of everything a renderer needs
    pub fn snapshot(&self) -> Frame {
        self.watcher().snapshot()
    }

    /// New screen size from the host; the player must still fit
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GameError> {
        let bounds = Bounds::new(width, height)?;
        lock(&self.session).state.resize(bounds)
    }

    pub fn set_player_skin(&mut self, color: Color) {
        lock(&self.session).state.player.color = color;
    }

    /// The render surface came (back) up: restart the loop if a running
    /// session lost it
    pub fn surface_created(&mut self) -> Result<(), GameError> {
        let loop_alive = self.ticker.as_ref().is_some_and(|t| !t.is_finished());
        if self.is_running() && !loop_alive {
            self.stop_loop();
            self.spawn_loop()?;
        }
        Ok(())
    }

    /// The render surface is going away: pause
    pub fn surface_destroyed(&mut self) {
        self.pause();
    }

    fn spawn_loop(&mut self) -> Result<(), GameError> {
        let session = Arc::clone(&self.session);
        let canvas = self.canvas.clone();
        let clock = Arc::clone(&self.clock);
        let input = self.input.clone();

        let ticker = Ticker::spawn("game-loop", self.interval, move || {
            step(&session, canvas.as_ref(), clock.as_ref(), &input)
        })
        .map_err(GameError::Spawn)?;
        self.ticker = Some(ticker);
        Ok(())
    }

    fn stop_loop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.stop();
        }
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.stop_loop();
    }
}

/// One loop iteration: tick and capture under the lock, then draw
fn step(
    session: &Mutex<Session>,
    canvas: Option<&SharedCanvas>,
    clock: &dyn Clock,
    input: &TiltInput,
) -> ControlFlow<()> {
    let now = clock.now_ms();
    let frame = {
        let mut guard = lock(session);
        let Session { state, listener } = &mut *guard;
        if !state.is_running() {
            return ControlFlow::Break(());
        }
        let tick_input = TickInput { tilt: input.take() };
        tick(state, &tick_input, now, &mut **listener);
        Frame::capture(state, now)
    };

    if let Some(canvas) = canvas {
        if !frame.draw(&mut *lock(&**canvas)) {
            log::debug!("Surface unavailable, frame skipped");
        }
    }

    match frame.phase {
        GamePhase::Running => ControlFlow::Continue(()),
        _ => ControlFlow::Break(()),
    }
}

fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("Recovering from a poisoned game lock");
        poisoned.into_inner()
    })
}
