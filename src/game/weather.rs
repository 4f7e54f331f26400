//! Weather policies, one per game mode.
//!
//! Classic has no weather. Stormfront samples a random event on a fixed
//! period and reverts it on a fixed countdown. Surge has no weather proper;
//! it arms a temporary flap boost whenever the score crosses a multiple of
//! `SURGE_SCORE_STEP`. The policies never mix.

use super::types::{GameMode, GameWorld, Weather, WeatherKind};
use crate::constants::*;
use rand::Rng;

/// Chance that a firing weather period triggers any event at all.
const TRIGGER_CHANCE: f64 = 0.5;
/// Given a trigger, chance that the event is rain rather than fog.
const RAIN_CHANCE: f64 = 0.5;

/// Advance the active mode's weather state by one tick.
pub fn tick_weather<R: Rng>(world: &mut GameWorld, rng: &mut R) {
    match world.mode {
        GameMode::Classic => {}
        GameMode::Stormfront => tick_stormfront(world, rng),
        GameMode::Surge => {
            world.surge_ticks_left = world.surge_ticks_left.saturating_sub(1);
        }
    }
}

/// Hook called on the tick the score increments. In Surge mode, crossing a
/// multiple of the score step (re)arms the boost countdown.
pub fn on_score(world: &mut GameWorld) {
    if world.mode == GameMode::Surge
        && world.score > 0
        && world.score % SURGE_SCORE_STEP == 0
    {
        world.surge_ticks_left = SURGE_DURATION_TICKS;
    }
}

fn tick_stormfront<R: Rng>(world: &mut GameWorld, rng: &mut R) {
    // Countdown on the active event; hitting zero reverts to calm, which
    // also restores gravity/jump/gap and hides the overlay.
    if let Weather::Active { ticks_left, .. } = &mut world.weather {
        *ticks_left -= 1;
        if *ticks_left == 0 {
            world.weather = Weather::Calm;
        }
    }

    // The period counter runs independently of any active event. A trigger
    // while weather is active replaces it and restarts the countdown.
    world.weather_period_counter += 1;
    if world.weather_period_counter >= WEATHER_PERIOD_TICKS {
        world.weather_period_counter = 0;
        if rng.gen_bool(TRIGGER_CHANCE) {
            let kind = if rng.gen_bool(RAIN_CHANCE) {
                WeatherKind::Rain
            } else {
                WeatherKind::Fog
            };
            world.weather = Weather::Active {
                kind,
                ticks_left: WEATHER_DURATION_TICKS,
            };
        }
    }
}
