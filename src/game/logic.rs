//! Per-tick simulation update and input handling.
//!
//! `process_tick` runs the fixed 20ms step: physics, then obstacle
//! spawn/advance, then collision and scoring, then the mode's weather policy.
//! All functions are total; inputs that do not apply in the current phase are
//! silently ignored.

use super::types::{Bird, GameMode, GamePhase, GameWorld, ObstaclePair};
use super::weather;
use crate::constants::*;
use rand::Rng;

/// Player input, already decoded from whatever device produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// The primary key: start while Idle, flap while Running, restart after
    /// a game over.
    Flap,
    /// Switch mode on the Idle screen. Ignored mid-run.
    SelectMode(GameMode),
    /// Any other key.
    Other,
}

/// Apply a single input event to the world.
pub fn process_input(world: &mut GameWorld, input: GameInput) {
    match input {
        GameInput::Flap => match world.phase {
            GamePhase::Idle | GamePhase::GameOver => world.start(),
            GamePhase::Running => {
                world.bird.velocity = world.effective_jump_impulse();
            }
        },
        GameInput::SelectMode(mode) => {
            if world.phase == GamePhase::Idle {
                world.mode = mode;
            }
        }
        GameInput::Other => {}
    }
}

/// Advance the simulation by one tick. No-op unless the game is running.
pub fn process_tick<R: Rng>(world: &mut GameWorld, rng: &mut R) {
    if world.phase != GamePhase::Running {
        return;
    }
    world.tick_count += 1;

    // Physics: accumulate gravity, cap if the mode has a terminal velocity,
    // then integrate position.
    world.bird.velocity += world.effective_gravity();
    if let Some(max) = world.mode.terminal_velocity() {
        if world.bird.velocity > max {
            world.bird.velocity = max;
        }
    }
    world.bird.y += world.bird.velocity;

    // Obstacles: tick-counted spawn cadence, then scroll and cull.
    world.spawn_counter += 1;
    if world.spawn_counter > SPAWN_INTERVAL_TICKS {
        world.spawn_obstacle(rng);
        world.spawn_counter = 0;
    }
    for pair in &mut world.obstacles {
        pair.x -= OBSTACLE_SPEED;
    }
    world.obstacles.retain(|p| p.trailing_edge() >= 0.0);

    // Collision and boundary end the run before any scoring this tick.
    if check_boundary(&world.bird) || check_collision(&world.bird, &world.obstacles) {
        world.phase = GamePhase::GameOver;
        return;
    }

    let gained = score_passed_pairs(&mut world.obstacles);
    if gained > 0 {
        world.score += gained;
        weather::on_score(world);
    }

    weather::tick_weather(world, rng);
}

/// True if the bird has left the playfield vertically. Both the ceiling and
/// the floor end the run.
pub fn check_boundary(bird: &Bird) -> bool {
    bird.y < 0.0 || bird.y > PLAYFIELD_HEIGHT - BIRD_HEIGHT
}

/// Axis-aligned overlap between the bird and any pair's top or bottom extent.
pub fn check_collision(bird: &Bird, obstacles: &[ObstaclePair]) -> bool {
    let bird_left = BIRD_X;
    let bird_right = BIRD_X + BIRD_WIDTH;
    let bird_top = bird.y;
    let bird_bottom = bird.y + BIRD_HEIGHT;

    for pair in obstacles {
        if bird_right <= pair.x || bird_left >= pair.trailing_edge() {
            continue;
        }
        // Top extent hangs from the ceiling, bottom extent stands on the floor.
        if bird_top < pair.top_height || bird_bottom > PLAYFIELD_HEIGHT - pair.bottom_height {
            return true;
        }
    }
    false
}

/// Mark every unscored pair whose trailing edge has crossed the score line
/// and return how many points that is worth. Strict less-than: a pair scores
/// on the tick its edge first passes the line, exactly once.
fn score_passed_pairs(obstacles: &mut [ObstaclePair]) -> u32 {
    let mut gained = 0;
    for pair in obstacles.iter_mut() {
        if !pair.scored && pair.trailing_edge() < SCORE_LINE {
            pair.scored = true;
            gained += 1;
        }
    }
    gained
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Weather, WeatherKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn running_world(mode: GameMode) -> GameWorld {
        let mut world = GameWorld::new(mode);
        world.start();
        world
    }

    #[test]
    fn test_flap_starts_from_idle() {
        let mut world = GameWorld::new(GameMode::Classic);
        process_input(&mut world, GameInput::Flap);
        assert_eq!(world.phase, GamePhase::Running);
        // Starting is not a flap; velocity begins at rest.
        assert_eq!(world.bird.velocity, 0.0);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut world = running_world(GameMode::Classic);
        world.bird.velocity = 7.5;
        process_input(&mut world, GameInput::Flap);
        assert!((world.bird.velocity - JUMP_IMPULSE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flap_restarts_after_game_over() {
        let mut world = running_world(GameMode::Classic);
        world.score = 3;
        world.phase = GamePhase::GameOver;
        process_input(&mut world, GameInput::Flap);
        assert_eq!(world.phase, GamePhase::Running);
        assert_eq!(world.score, 0);
    }

    #[test]
    fn test_mode_select_only_while_idle() {
        let mut world = GameWorld::new(GameMode::Classic);
        process_input(&mut world, GameInput::SelectMode(GameMode::Surge));
        assert_eq!(world.mode, GameMode::Surge);

        world.start();
        process_input(&mut world, GameInput::SelectMode(GameMode::Classic));
        assert_eq!(world.mode, GameMode::Surge);
    }

    #[test]
    fn test_tick_applies_gravity_then_integrates() {
        let mut world = running_world(GameMode::Classic);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let y0 = world.bird.y;

        process_tick(&mut world, &mut rng);

        assert!((world.bird.velocity - GRAVITY).abs() < f64::EPSILON);
        assert!((world.bird.y - (y0 + GRAVITY)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tick_ignored_unless_running() {
        let mut world = GameWorld::new(GameMode::Classic);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_tick(&mut world, &mut rng);
        assert!((world.bird.y - BIRD_START_Y).abs() < f64::EPSILON);
        assert_eq!(world.tick_count, 0);
    }

    #[test]
    fn test_terminal_velocity_clamp() {
        let mut world = running_world(GameMode::Surge);
        world.bird.velocity = 100.0;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_tick(&mut world, &mut rng);
        assert!(world.bird.velocity <= TERMINAL_VELOCITY + 1e-9);
    }

    #[test]
    fn test_classic_has_no_clamp() {
        let mut world = running_world(GameMode::Classic);
        world.bird.y = 10.0; // keep it airborne for one tick
        world.bird.velocity = 0.0;
        // Velocity after N ticks of free accumulation is N * gravity
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_tick(&mut world, &mut rng);
        process_tick(&mut world, &mut rng);
        assert!((world.bird.velocity - 2.0 * GRAVITY).abs() < 1e-9);
    }

    #[test]
    fn test_spawn_cadence_exceeds_threshold() {
        let mut world = running_world(GameMode::Classic);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..SPAWN_INTERVAL_TICKS {
            process_tick(&mut world, &mut rng);
            // Hold the bird mid-air so only the spawn cadence is in play.
            world.bird.y = BIRD_START_Y;
            world.bird.velocity = 0.0;
        }
        assert!(world.obstacles.is_empty());

        process_tick(&mut world, &mut rng);
        assert_eq!(world.obstacles.len(), 1);
        assert_eq!(world.spawn_counter, 0);
    }

    #[test]
    fn test_obstacles_scroll_left() {
        let mut world = running_world(GameMode::Classic);
        world.obstacles.push(ObstaclePair {
            x: 400.0,
            top_height: 100.0,
            bottom_height: 200.0,
            scored: false,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_tick(&mut world, &mut rng);
        assert!((world.obstacles[0].x - (400.0 - OBSTACLE_SPEED)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_offscreen_pairs_are_culled() {
        let mut world = running_world(GameMode::Classic);
        world.obstacles.push(ObstaclePair {
            x: -OBSTACLE_WIDTH - 1.0,
            top_height: 100.0,
            bottom_height: 200.0,
            scored: true,
        });
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_tick(&mut world, &mut rng);
        assert!(world.obstacles.is_empty());
    }

    #[test]
    fn test_floor_boundary_ends_game() {
        let mut world = running_world(GameMode::Classic);
        world.bird.y = PLAYFIELD_HEIGHT - BIRD_HEIGHT - 0.1;
        world.bird.velocity = 5.0;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_tick(&mut world, &mut rng);
        assert_eq!(world.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_ceiling_boundary_ends_game() {
        let mut world = running_world(GameMode::Classic);
        world.bird.y = 2.0;
        world.bird.velocity = -5.0;
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_tick(&mut world, &mut rng);
        assert_eq!(world.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_collision_with_top_extent() {
        let bird = Bird {
            y: 40.0,
            velocity: 0.0,
        };
        let pairs = [ObstaclePair {
            x: BIRD_X,
            top_height: 60.0,
            bottom_height: 100.0,
            scored: false,
        }];
        assert!(check_collision(&bird, &pairs));
    }

    #[test]
    fn test_collision_with_bottom_extent() {
        let bird = Bird {
            y: PLAYFIELD_HEIGHT - BIRD_HEIGHT - 10.0,
            velocity: 0.0,
        };
        let pairs = [ObstaclePair {
            x: BIRD_X,
            top_height: 50.0,
            bottom_height: 100.0,
            scored: false,
        }];
        assert!(check_collision(&bird, &pairs));
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let bird = Bird {
            y: 200.0,
            velocity: 0.0,
        };
        // Gap spans rows 150..300; bird (200..230) sits inside it.
        let pairs = [ObstaclePair {
            x: BIRD_X,
            top_height: 150.0,
            bottom_height: PLAYFIELD_HEIGHT - 300.0,
            scored: false,
        }];
        assert!(!check_collision(&bird, &pairs));
    }

    #[test]
    fn test_no_collision_without_horizontal_overlap() {
        let bird = Bird {
            y: 10.0,
            velocity: 0.0,
        };
        let pairs = [ObstaclePair {
            x: BIRD_X + BIRD_WIDTH, // touching edges do not overlap
            top_height: 400.0,
            bottom_height: 0.0,
            scored: false,
        }];
        assert!(!check_collision(&bird, &pairs));
    }

    #[test]
    fn test_scoring_is_strict_and_idempotent() {
        let mut pairs = vec![ObstaclePair {
            x: SCORE_LINE - OBSTACLE_WIDTH, // trailing edge exactly on the line
            top_height: 100.0,
            bottom_height: 200.0,
            scored: false,
        }];
        // Exactly on the line: strictly-less-than has not fired yet.
        assert_eq!(score_passed_pairs(&mut pairs), 0);

        pairs[0].x -= OBSTACLE_SPEED;
        assert_eq!(score_passed_pairs(&mut pairs), 1);
        assert!(pairs[0].scored);

        // Already scored: no double counting.
        pairs[0].x -= OBSTACLE_SPEED;
        assert_eq!(score_passed_pairs(&mut pairs), 0);
    }

    #[test]
    fn test_game_over_tick_is_noop() {
        let mut world = running_world(GameMode::Classic);
        world.phase = GamePhase::GameOver;
        world.bird.y = 2.0 * PLAYFIELD_HEIGHT; // far out of bounds
        let snapshot_y = world.bird.y;
        let snapshot_score = world.score;

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        process_tick(&mut world, &mut rng);
        process_tick(&mut world, &mut rng);

        assert_eq!(world.phase, GamePhase::GameOver);
        assert!((world.bird.y - snapshot_y).abs() < f64::EPSILON);
        assert_eq!(world.score, snapshot_score);
    }

    #[test]
    fn test_flap_while_raining_uses_rain_impulse() {
        let mut world = running_world(GameMode::Stormfront);
        world.weather = Weather::Active {
            kind: WeatherKind::Rain,
            ticks_left: 100,
        };
        process_input(&mut world, GameInput::Flap);
        assert!((world.bird.velocity - RAIN_JUMP_IMPULSE).abs() < f64::EPSILON);
    }
}
