//! Coin Flap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use coin_flap::audio::WebAudio;
    use coin_flap::platform::{LocalStore, detect_device_class};
    use coin_flap::renderer::CanvasRenderer;
    use coin_flap::sim::GamePhase;
    use coin_flap::{DifficultyProfile, GameSession, Settings};

    /// Game instance holding all state
    struct Game {
        session: GameSession<WebAudio, LocalStore>,
        renderer: CanvasRenderer,
        settings: Settings,
        // Track phase to update the DOM overlay only on change
        last_phase: Option<GamePhase>,
    }

    impl Game {
        /// Run one frame and refresh the overlay
        fn frame(&mut self) {
            self.session.frame(&mut self.renderer);

            let phase = self.session.phase();
            if self.last_phase != Some(phase) {
                self.update_overlay(phase);
                self.last_phase = Some(phase);
            }
        }

        /// Show/hide the start and game-over boxes
        fn update_overlay(&self, phase: GamePhase) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            set_visible(&document, "startBox", phase == GamePhase::Ready);
            set_visible(&document, "gameOverBox", phase == GamePhase::Over);

            if phase == GamePhase::Over {
                let state = self.session.state();
                if let Some(el) = document.get_element_by_id("scoreText") {
                    el.set_text_content(Some(&format!("Score: {}", state.score)));
                }
                if let Some(el) = document.get_element_by_id("bestScoreText") {
                    el.set_text_content(Some(&format!("Best: {}", state.best_score)));
                }
            }
        }

        /// Mute toggle, applied to the player and persisted
        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.session.set_volume(self.settings.effective_volume());
            self.settings.save();
            log::info!("Muted: {}", muted);
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let display = if visible { "display: block" } else { "display: none" };
            let _ = el.set_attribute("style", display);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Coin Flap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let class = settings.device_class(detect_device_class());
        let profile = DifficultyProfile::for_device(class);
        log::info!(
            "Difficulty: {} ({})",
            class.as_str(),
            settings.difficulty.as_str()
        );

        let renderer =
            CanvasRenderer::new(&canvas, profile.gap_height).expect("no 2d canvas context");
        let seed = js_sys::Date::now() as u64;
        let session = GameSession::new(
            renderer.field(),
            profile,
            WebAudio::new(&settings),
            LocalStore,
            seed,
        );

        let game = Rc::new(RefCell::new(Game {
            session,
            renderer,
            settings,
            last_phase: None,
        }));

        setup_buttons(&document, game.clone());
        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Coin Flap running!");
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("startBtn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let mut g = game.borrow_mut();
                // Click is a user gesture, so audio may start now
                g.session.resume_audio();
                g.session.start_pressed();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restartBtn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().session.restart_pressed();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Pointer press on the field (mouse, touch and pen)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                game.borrow_mut().session.flap_pressed();
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => {
                        event.prevent_default();
                        g.session.flap_pressed();
                    }
                    "KeyA" => {
                        let enabled = !g.session.autopilot();
                        g.session.set_autopilot(enabled);
                        log::info!("Autopilot: {}", enabled);
                    }
                    "KeyM" => g.toggle_mute(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use coin_flap::audio::NullAudio;
    use coin_flap::platform::{MemoryStore, detect_device_class};
    use coin_flap::renderer::NullRenderer;
    use coin_flap::sim::{GameEvent, GamePhase};
    use coin_flap::{DifficultyOverride, DifficultyProfile, Field, GameSession, Settings};

    /// Frames to simulate in the headless demo (~5 minutes at 60 Hz)
    const DEMO_FRAMES: u32 = 18_000;

    env_logger::init();
    log::info!("Coin Flap (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the web version");

    // coin-flap [seed] [auto|compact|standard]
    let args: Vec<String> = std::env::args().collect();
    let seed = args
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC01F_1A9);

    let mut settings = Settings::load();
    if let Some(name) = args.get(2) {
        match DifficultyOverride::from_str(name) {
            Some(difficulty) => settings.difficulty = difficulty,
            None => log::warn!(
                "Unknown difficulty '{}', keeping {}",
                name,
                settings.difficulty.as_str()
            ),
        }
    }
    let class = settings.device_class(detect_device_class());
    let profile = DifficultyProfile::for_device(class);
    log::info!("Seed {}, difficulty {}", seed, class.as_str());

    let mut session = GameSession::new(
        Field::new(400.0, 600.0),
        profile,
        NullAudio,
        MemoryStore::new(),
        seed,
    );
    session.set_autopilot(true);

    let mut runs = 0u32;
    for _ in 0..DEMO_FRAMES {
        let events = session.frame(&mut NullRenderer);
        for event in events {
            if let GameEvent::GameOver { score, best } = event {
                runs += 1;
                println!("Run {}: score {} (best {})", runs, score, best);
            }
        }
        if session.phase() == GamePhase::Over {
            session.restart_pressed();
        }
    }

    let state = session.state();
    println!(
        "Demo finished after {} frames: {} completed runs, current score {}, best {}",
        state.frame, runs, state.score, state.best_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
