//! Core simulation state for the Skyward arcade game.
//!
//! Everything the game knows lives in [`GameWorld`], a plain state struct
//! mutated by the pure-ish update functions in `logic.rs`. Nothing in this
//! module touches the terminal.

use crate::constants::*;
use rand::Rng;

/// Game variants. Each mode carries its own weather policy; the policies are
/// mutually exclusive and never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Plain obstacle run, no weather.
    Classic,
    /// Periodic random rain/fog with physics effects and a timed reversion.
    Stormfront,
    /// Temporary flap boost every few points; falls are capped at terminal
    /// velocity.
    Surge,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Classic, GameMode::Stormfront, GameMode::Surge];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameMode::Classic)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Stormfront => "Stormfront",
            Self::Surge => "Surge",
        }
    }

    /// One-line description for the mode-select screen.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Classic => "Just you, gravity, and the pipes.",
            Self::Stormfront => "Random rain and fog. Rain makes the air heavy.",
            Self::Surge => "Every 5th point boosts your flap for 3 seconds.",
        }
    }

    /// Maximum downward velocity, if this mode caps falls at all.
    pub fn terminal_velocity(&self) -> Option<f64> {
        match self {
            Self::Surge => Some(TERMINAL_VELOCITY),
            _ => None,
        }
    }
}

/// Run lifecycle. Tick updates only apply while `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Pre-start screen shown, simulation frozen.
    Idle,
    Running,
    /// Terminal state of a run; restart returns to `Running` via a full reset.
    GameOver,
}

/// Kind of active weather event (Stormfront mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    /// Heavier gravity, weaker flap, tighter gaps on newly spawned pairs.
    Rain,
    /// Overlay only. Fog never alters physics.
    Fog,
}

/// Weather state machine: Calm <-> Active, exited by a fixed-duration
/// countdown. Re-entry while active replaces the state and restarts the
/// countdown (no stacking).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Calm,
    Active { kind: WeatherKind, ticks_left: u32 },
}

impl Weather {
    pub fn is_rain(&self) -> bool {
        matches!(self, Weather::Active { kind: WeatherKind::Rain, .. })
    }

    /// Which overlay the UI should show, if any.
    pub fn overlay(&self) -> Option<WeatherKind> {
        match self {
            Weather::Calm => None,
            Weather::Active { kind, .. } => Some(*kind),
        }
    }
}

/// Bird vertical state. Horizontal position is the fixed `BIRD_X` column.
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    /// Top edge, in playfield units. 0 = ceiling.
    pub y: f64,
    /// Units per tick, positive = downward.
    pub velocity: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            velocity: 0.0,
        }
    }
}

/// A top/bottom obstacle pair with a vertical gap between the extents.
#[derive(Debug, Clone)]
pub struct ObstaclePair {
    /// Left edge, in playfield units.
    pub x: f64,
    /// Height of the top extent, hanging from the ceiling.
    pub top_height: f64,
    /// Height of the bottom extent, standing on the floor.
    pub bottom_height: f64,
    /// Set once the pair has been counted for scoring.
    pub scored: bool,
}

impl ObstaclePair {
    /// Right edge; scoring compares this against `SCORE_LINE`.
    pub fn trailing_edge(&self) -> f64 {
        self.x + OBSTACLE_WIDTH
    }
}

/// Complete simulation state. Owned by the frame loop, passed by reference to
/// the update functions and the renderer.
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub mode: GameMode,
    pub phase: GamePhase,

    pub bird: Bird,
    /// Active pairs, ordered left to right. Pairs fully past the left edge
    /// are culled each tick.
    pub obstacles: Vec<ObstaclePair>,
    pub score: u32,

    /// Ticks since the last spawn; a pair spawns when this exceeds
    /// `SPAWN_INTERVAL_TICKS`.
    pub spawn_counter: u32,
    /// Total ticks this run. Also drives the rain overlay animation.
    pub tick_count: u64,

    // Weather policy state (which fields apply depends on `mode`)
    pub weather: Weather,
    pub weather_period_counter: u32,
    /// Ticks remaining on the Surge flap boost; 0 = inactive.
    pub surge_ticks_left: u32,
}

impl GameWorld {
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            phase: GamePhase::Idle,
            bird: Bird::new(),
            obstacles: Vec::new(),
            score: 0,
            spawn_counter: 0,
            tick_count: 0,
            weather: Weather::Calm,
            weather_period_counter: 0,
            surge_ticks_left: 0,
        }
    }

    /// Begin a run. Fully reinitializes bird, obstacles, score, and weather,
    /// so it serves both the Idle start and the GameOver restart.
    pub fn start(&mut self) {
        *self = Self::new(self.mode);
        self.phase = GamePhase::Running;
    }

    /// Gravity per tick, accounting for active rain.
    pub fn effective_gravity(&self) -> f64 {
        if self.weather.is_rain() {
            RAIN_GRAVITY
        } else {
            GRAVITY
        }
    }

    /// Flap impulse (negative = upward), accounting for rain and an armed
    /// Surge boost. Applied as a velocity override, never blended.
    pub fn effective_jump_impulse(&self) -> f64 {
        let base = if self.weather.is_rain() {
            RAIN_JUMP_IMPULSE
        } else {
            JUMP_IMPULSE
        };
        if self.surge_ticks_left > 0 {
            base * SURGE_JUMP_MULTIPLIER
        } else {
            base
        }
    }

    /// Gap size for pairs spawned right now. Rain tightens the gap; pairs
    /// already on screen keep the gap they spawned with.
    pub fn effective_gap(&self) -> f64 {
        if self.weather.is_rain() {
            GAP_RAIN
        } else {
            GAP_NORMAL
        }
    }

    /// Spawn a pair at the right edge with a uniformly random top extent.
    /// The bottom extent is whatever the playfield height leaves after the
    /// top extent and the gap.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let top_height = rng.gen_range(GAP_TOP_MIN..=GAP_TOP_MAX);
        let gap = self.effective_gap();
        self.obstacles.push(ObstaclePair {
            x: PLAYFIELD_WIDTH,
            top_height,
            bottom_height: PLAYFIELD_HEIGHT - top_height - gap,
            scored: false,
        });
    }
}
