// Simulation timing constants
pub const TICK_INTERVAL_MS: u64 = 20;
pub const TICKS_PER_SECOND: u64 = 1000 / TICK_INTERVAL_MS;

// Playfield geometry (abstract units, scaled to the terminal at draw time)
pub const PLAYFIELD_WIDTH: f64 = 800.0;
pub const PLAYFIELD_HEIGHT: f64 = 450.0;

// Bird geometry. Horizontal position is fixed; only the vertical axis moves.
pub const BIRD_X: f64 = 100.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;
pub const BIRD_START_Y: f64 = 200.0;

// Physics constants (units per tick; each tick is unit time)
pub const GRAVITY: f64 = 0.6;
pub const JUMP_IMPULSE: f64 = -10.0;
pub const RAIN_GRAVITY: f64 = 0.9;
pub const RAIN_JUMP_IMPULSE: f64 = -7.0;
/// Fall-speed cap, applied only by modes that declare one.
pub const TERMINAL_VELOCITY: f64 = 12.0;

// Obstacle constants
pub const OBSTACLE_WIDTH: f64 = 60.0;
pub const OBSTACLE_SPEED: f64 = 4.0;
pub const GAP_TOP_MIN: f64 = 50.0;
pub const GAP_TOP_MAX: f64 = 200.0;
pub const GAP_NORMAL: f64 = 150.0;
pub const GAP_RAIN: f64 = 130.0;

/// A pair spawns when the tick counter exceeds this value.
pub const SPAWN_INTERVAL_TICKS: u32 = 100;

/// A pair scores when its trailing edge passes strictly left of this line.
pub const SCORE_LINE: f64 = BIRD_X;

// Stormfront weather timing
pub const WEATHER_PERIOD_TICKS: u32 = (20 * TICKS_PER_SECOND) as u32;
pub const WEATHER_DURATION_TICKS: u32 = (10 * TICKS_PER_SECOND) as u32;

// Surge mode: temporary flap boost every SURGE_SCORE_STEP points
pub const SURGE_SCORE_STEP: u32 = 5;
pub const SURGE_DURATION_TICKS: u32 = (3 * TICKS_PER_SECOND) as u32;
pub const SURGE_JUMP_MULTIPLIER: f64 = 1.35;
