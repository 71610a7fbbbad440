//! Frame loop glue
//!
//! A `GameSession` owns the game state plus the audio and storage adapters.
//! Hosts forward input as it arrives and call `frame` once per display
//! refresh; queued input is applied atomically at the start of that frame.

use crate::Field;
use crate::audio::AudioPlayer;
use crate::highscores::BestScore;
use crate::platform::PersistentStore;
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::DifficultyProfile;

pub struct GameSession<A: AudioPlayer, S: PersistentStore> {
    state: GameState,
    input: TickInput,
    audio: A,
    store: S,
}

impl<A: AudioPlayer, S: PersistentStore> GameSession<A, S> {
    /// Load the best score from `store` and set up a fresh Ready state
    pub fn new(field: Field, profile: DifficultyProfile, audio: A, store: S, seed: u64) -> Self {
        let best = BestScore::load(&store);
        log::info!(
            "Session created: field {}x{}, seed {}",
            field.width,
            field.height,
            seed
        );
        Self {
            state: GameState::new(field, profile, best, seed),
            input: TickInput::default(),
            audio,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Forward a user gesture to the audio player
    pub fn resume_audio(&mut self) {
        self.audio.resume();
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.audio.set_volume(volume);
    }

    /// Hand the store back, e.g. to reload it in a new session
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn start_pressed(&mut self) {
        self.input.start = true;
    }

    pub fn flap_pressed(&mut self) {
        self.input.flap = true;
    }

    pub fn restart_pressed(&mut self) {
        self.input.restart = true;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.input.autopilot
    }

    /// Advance one tick, dispatch its side effects, then draw
    pub fn frame(&mut self, renderer: &mut impl Renderer) -> Vec<GameEvent> {
        tick(&mut self.state, &self.input);
        self.input.clear_one_shots();

        let events = self.state.drain_events();
        for event in &events {
            match *event {
                GameEvent::Cue(cue) => {
                    log::debug!("cue: {}", cue.name());
                    self.audio.play(cue);
                }
                GameEvent::NewBest(best) => BestScore::save(&mut self.store, best),
                GameEvent::GameOver { .. } => {}
            }
        }

        draw_frame(&self.state, renderer);
        events
    }
}
