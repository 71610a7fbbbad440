//! Game state and phase transitions
//!
//! One `GameState` owns everything that changes during a run: phase, score,
//! best score, the mover and the obstacles. Side effects (sounds, saving the
//! best score) are queued as `GameEvent`s for the host to act on.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::mover::Mover;
use super::obstacles::ObstacleManager;
use crate::Field;
use crate::tuning::DifficultyProfile;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Waiting for the start input, nothing moves
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    Over,
}

/// Short sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Start,
    Flap,
    Score,
    Hit,
    Die,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Start => "start",
            Cue::Flap => "flap",
            Cue::Score => "score",
            Cue::Hit => "hit",
            Cue::Die => "die",
        }
    }
}

/// Side effects produced by the simulation, drained by the host every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Play a sound
    Cue(Cue),
    /// Best score went up and must be persisted
    NewBest(u32),
    /// Run ended with this score
    GameOver { score: u32, best: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    rng: Pcg32,
    pub field: Field,
    pub profile: DifficultyProfile,
    pub phase: GamePhase,
    pub score: u32,
    pub best_score: u32,
    /// Tick counter; drives the spawn cadence and is never reset
    pub frame: u64,
    pub mover: Mover,
    pub obstacles: ObstacleManager,
    events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(field: Field, profile: DifficultyProfile, best_score: u32, seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            field,
            profile,
            phase: GamePhase::Ready,
            score: 0,
            best_score,
            frame: 0,
            mover: Mover::default(),
            obstacles: ObstacleManager::new(&profile),
            events: Vec::new(),
        }
    }

    /// Ready -> Playing
    pub fn start(&mut self) {
        if self.phase != GamePhase::Ready {
            return;
        }
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Cue(Cue::Start));
        log::info!("Run started");
    }

    /// Upward impulse, only while playing
    pub fn flap(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.mover.flap(self.profile.jump_impulse);
        self.events.push(GameEvent::Cue(Cue::Flap));
    }

    /// Over -> Ready
    pub fn restart(&mut self) {
        if self.phase != GamePhase::Over {
            return;
        }
        self.phase = GamePhase::Ready;
        self.score = 0;
        self.mover.reset();
        self.obstacles.clear();
        log::info!("Back to ready (best {})", self.best_score);
    }

    /// Playing -> Over, on any collision
    pub fn game_over(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::Over;
        self.events.push(GameEvent::Cue(Cue::Hit));
        self.events.push(GameEvent::Cue(Cue::Die));

        if self.score > self.best_score {
            self.best_score = self.score;
            self.events.push(GameEvent::NewBest(self.best_score));
        }
        self.events.push(GameEvent::GameOver {
            score: self.score,
            best: self.best_score,
        });
        log::info!("Game over: score {} (best {})", self.score, self.best_score);
    }

    /// Credit passed obstacles
    pub fn add_points(&mut self, passed: u32) {
        for _ in 0..passed {
            self.score += 1;
            self.events.push(GameEvent::Cue(Cue::Score));
        }
    }

    pub fn spawn_obstacle(&mut self) {
        self.obstacles.spawn(&mut self.rng, self.field);
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacles::Obstacle;

    fn new_state() -> GameState {
        GameState::new(Field::new(400.0, 600.0), DifficultyProfile::STANDARD, 0, 42)
    }

    #[test]
    fn test_initial_state() {
        let state = new_state();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.mover, Mover::default());
    }

    #[test]
    fn test_start_only_from_ready() {
        let mut state = new_state();
        state.start();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.drain_events(), vec![GameEvent::Cue(Cue::Start)]);

        // second start is a no-op
        state.start();
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_flap_ignored_outside_playing() {
        let mut state = new_state();
        state.mover.velocity = 3.0;
        state.flap();
        assert_eq!(state.mover.velocity, 3.0);
        assert!(state.drain_events().is_empty());

        state.start();
        state.drain_events();
        state.flap();
        assert_eq!(state.mover.velocity, -state.profile.jump_impulse);
        assert_eq!(state.drain_events(), vec![GameEvent::Cue(Cue::Flap)]);

        state.game_over();
        state.drain_events();
        state.mover.velocity = 2.0;
        state.flap();
        assert_eq!(state.mover.velocity, 2.0);
    }

    #[test]
    fn test_game_over_cues_and_best() {
        let mut state = new_state();
        state.best_score = 2;
        state.start();
        state.add_points(3);
        state.drain_events();

        state.game_over();
        assert_eq!(state.phase, GamePhase::Over);
        assert_eq!(state.best_score, 3);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::Cue(Cue::Hit),
                GameEvent::Cue(Cue::Die),
                GameEvent::NewBest(3),
                GameEvent::GameOver { score: 3, best: 3 },
            ]
        );
        // final score stays readable while over
        assert_eq!(state.score, 3);
    }

    #[test]
    fn test_game_over_without_new_best() {
        let mut state = new_state();
        state.best_score = 10;
        state.start();
        state.add_points(4);
        state.game_over();
        assert_eq!(state.best_score, 10);
        assert!(!state
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::NewBest(_))));
    }

    #[test]
    fn test_game_over_only_once() {
        let mut state = new_state();
        state.start();
        state.game_over();
        state.drain_events();
        state.game_over();
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_restart_resets_run() {
        let mut state = new_state();
        state.start();
        state.add_points(5);
        state.mover.pos.y = 400.0;
        state.mover.velocity = 6.0;
        state.obstacles.push(Obstacle { x: 100.0, gap_top: 80.0 });

        // restart is ignored while playing
        state.restart();
        assert_eq!(state.phase, GamePhase::Playing);

        state.game_over();
        state.restart();
        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 5);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.mover, Mover::default());
    }

    #[test]
    fn test_same_seed_same_gaps() {
        let mut a = new_state();
        let mut b = new_state();
        for _ in 0..10 {
            a.spawn_obstacle();
            b.spawn_obstacle();
        }
        assert_eq!(a.obstacles.obstacles(), b.obstacles.obstacles());
    }
}
