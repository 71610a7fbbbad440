//! One simulation tick per display refresh
//!
//! Input collected between frames is applied first, then the world advances
//! (only while playing). Rendering happens after this, outside the sim.

use super::obstacles::is_spawn_frame;
use super::state::{GamePhase, GameState};

/// Mover drifts this far below the target before the autopilot flaps
const AUTOPILOT_SLACK: f32 = 10.0;
/// Further below than this the autopilot flaps every tick to catch up
const AUTOPILOT_HURRY: f32 = 60.0;

/// Input commands gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start button
    pub start: bool,
    /// Space key or pointer press on the field
    pub flap: bool,
    /// Restart button
    pub restart: bool,
    /// Attract mode - the game plays itself
    pub autopilot: bool,
}

impl TickInput {
    /// Clear one-shot inputs, keeping held toggles
    pub fn clear_one_shots(&mut self) {
        self.start = false;
        self.flap = false;
        self.restart = false;
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = input.clone();
    if input.autopilot {
        match state.phase {
            GamePhase::Ready => input.start = true,
            GamePhase::Playing => input.flap |= autopilot_wants_flap(state),
            GamePhase::Over => {}
        }
    }

    // Restart before start so a single frame can't skip Ready
    if input.restart {
        state.restart();
    }
    if input.start {
        state.start();
    }
    if input.flap {
        state.flap();
    }

    state.frame = state.frame.wrapping_add(1);

    if state.phase != GamePhase::Playing {
        return;
    }

    let ground_y = state.field.ground_y();
    state.mover.apply_gravity(state.profile.gravity);
    if state.mover.has_hit_ground(ground_y) {
        state.mover.settle_on_ground(ground_y);
        state.game_over();
        return;
    }

    state.obstacles.advance();
    if state.obstacles.check_collision(&state.mover) {
        state.game_over();
        return;
    }

    let passed = state.obstacles.prune_and_score();
    state.add_points(passed);

    if is_spawn_frame(state.frame) {
        state.spawn_obstacle();
    }
}

/// Flap when falling below the center of the next gap
pub fn autopilot_wants_flap(state: &GameState) -> bool {
    let target = state
        .obstacles
        .next_ahead_of(&state.mover)
        .map(|o| o.gap_top + state.obstacles.gap_height() / 2.0)
        .unwrap_or(state.field.ground_y() / 2.0);

    let below = state.mover.pos.y - target;
    if below > AUTOPILOT_HURRY {
        return true;
    }
    state.mover.velocity >= 0.0 && below > AUTOPILOT_SLACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use crate::consts::*;
    use crate::sim::mover::Mover;
    use crate::sim::obstacles::Obstacle;
    use crate::sim::state::{Cue, GameEvent};
    use crate::tuning::DifficultyProfile;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(Field::new(400.0, 600.0), DifficultyProfile::STANDARD, 0, 12345)
    }

    fn start_input() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_ready_is_frozen() {
        let mut state = new_state();
        for _ in 0..250 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.frame, 250);
        assert_eq!(state.mover, Mover::default());
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_tick_ready_to_playing() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.frame, 1);
        // gravity already applied this tick
        assert_eq!(state.mover.velocity, state.profile.gravity);
        assert_eq!(state.drain_events(), vec![GameEvent::Cue(Cue::Start)]);
    }

    #[test]
    fn test_flap_in_tick() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        let input = TickInput {
            flap: true,
            ..Default::default()
        };
        let y = state.mover.pos.y;
        tick(&mut state, &input);
        let expected_v = -state.profile.jump_impulse + state.profile.gravity;
        assert_eq!(state.mover.velocity, expected_v);
        assert_eq!(state.mover.pos.y, y + expected_v);
    }

    #[test]
    fn test_spawn_on_cadence() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        assert!(state.obstacles.is_empty());

        state.frame = SPAWN_INTERVAL - 1;
        state.mover.velocity = -state.profile.gravity;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.frame, SPAWN_INTERVAL);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles.obstacles()[0].x, state.field.width);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_ground_collision_ends_run_once() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        state.drain_events();

        let ground_y = state.field.ground_y();
        state.mover.pos.y = ground_y - MOVER_RADIUS - 1.0;
        state.mover.velocity = 5.0;
        tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.mover.pos.y, ground_y - MOVER_RADIUS);
        let events = state.drain_events();
        assert_eq!(
            events.iter().filter(|e| **e == GameEvent::Cue(Cue::Hit)).count(),
            1
        );

        // Frozen afterwards
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.drain_events().is_empty());
        assert_eq!(state.mover.pos.y, ground_y - MOVER_RADIUS);
    }

    #[test]
    fn test_ground_hit_skips_obstacles() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        state.obstacles.push(Obstacle { x: -59.0, gap_top: 100.0 });
        state.mover.pos.y = state.field.ground_y();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);
        // Not advanced nor pruned
        assert_eq!(state.obstacles.obstacles()[0].x, -59.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_obstacle_collision_ends_run() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        state.mover.pos.y = 10.0;
        state.mover.velocity = -state.profile.gravity;
        state.obstacles.push(Obstacle { x: 43.0, gap_top: 50.0 });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Over);
    }

    #[test]
    fn test_prune_scores() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        state.drain_events();
        // trailing edge at 2, crosses zero after one advance of -3
        state.obstacles.push(Obstacle { x: -58.0, gap_top: 100.0 });
        state.obstacles.push(Obstacle { x: 250.0, gap_top: 100.0 });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.drain_events(), vec![GameEvent::Cue(Cue::Score)]);
    }

    #[test]
    fn test_restart_then_start_same_frame() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        state.game_over();
        let input = TickInput {
            restart: true,
            start: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        state.add_points(2);
        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_autopilot_starts_and_flaps() {
        let mut state = new_state();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);

        state.obstacles.push(Obstacle { x: 200.0, gap_top: 100.0 });
        // gap center at 175; well below it and falling
        state.mover.pos.y = 300.0;
        state.mover.velocity = 1.0;
        assert!(autopilot_wants_flap(&state));

        // above the center
        state.mover.pos.y = 120.0;
        assert!(!autopilot_wants_flap(&state));

        // a little below but already rising
        state.mover.pos.y = 200.0;
        state.mover.velocity = -2.0;
        assert!(!autopilot_wants_flap(&state));

        // a little below and falling
        state.mover.velocity = 0.5;
        assert!(autopilot_wants_flap(&state));

        // inside the slack band
        state.mover.pos.y = 180.0;
        assert!(!autopilot_wants_flap(&state));
    }

    #[test]
    fn test_autopilot_hurries_when_far_below() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        state.obstacles.push(Obstacle { x: 200.0, gap_top: 100.0 });

        // 125 below the gap center: flap regardless of velocity
        state.mover.pos.y = 300.0;
        for velocity in [-4.0, -2.0, 0.0, 3.0] {
            state.mover.velocity = velocity;
            assert!(autopilot_wants_flap(&state), "velocity {}", velocity);
        }
    }

    #[test]
    fn test_autopilot_aims_mid_field_without_pipes() {
        let mut state = new_state();
        tick(&mut state, &start_input());
        let mid = state.field.ground_y() / 2.0;

        state.mover.pos.y = mid + AUTOPILOT_SLACK + 1.0;
        state.mover.velocity = 1.0;
        assert!(autopilot_wants_flap(&state));

        state.mover.pos.y = mid;
        assert!(!autopilot_wants_flap(&state));
    }

    #[test]
    fn test_autopilot_survives_a_while() {
        let mut state = new_state();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..400 {
            tick(&mut state, &input);
        }
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = new_state();
        let mut state2 = new_state();
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..1000 {
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }
        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.obstacles.obstacles(), state2.obstacles.obstacles());
        assert_eq!(state1.mover, state2.mover);
    }

    proptest! {
        #[test]
        fn prop_score_counts_removals(seed in any::<u64>(), flaps in proptest::collection::vec(any::<bool>(), 1..1500)) {
            let mut state = GameState::new(Field::new(400.0, 600.0), DifficultyProfile::STANDARD, 0, seed);
            tick(&mut state, &start_input());
            let mut removed = 0u32;
            for flap in flaps {
                if state.phase != GamePhase::Playing {
                    break;
                }
                let before = state.obstacles.len() as u32;
                let spawned_next = is_spawn_frame(state.frame.wrapping_add(1)) as u32;
                tick(&mut state, &TickInput { flap, ..Default::default() });
                if state.phase == GamePhase::Playing {
                    removed += before + spawned_next - state.obstacles.len() as u32;
                }
                prop_assert_eq!(state.score, removed);
            }
        }

        #[test]
        fn prop_best_never_decreases(seed in any::<u64>(), runs in 1usize..5) {
            let mut state = GameState::new(Field::new(400.0, 600.0), DifficultyProfile::STANDARD, 0, seed);
            let auto = TickInput { autopilot: true, ..Default::default() };
            let mut best = state.best_score;
            for run in 0..runs {
                // cut the autopilot off at a different point each run
                for _ in 0..(200 + run * 700) {
                    tick(&mut state, &auto);
                }
                while state.phase == GamePhase::Playing {
                    tick(&mut state, &TickInput::default());
                }
                prop_assert!(state.best_score >= best);
                prop_assert!(state.best_score >= state.score);
                best = state.best_score;
                tick(&mut state, &TickInput { restart: true, ..Default::default() });
                prop_assert_eq!(state.phase, GamePhase::Ready);
            }
        }
    }
}
