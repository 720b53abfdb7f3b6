//! Meteor Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, Window};

    use meteor_dodge::persistence::{BestScore, KeyValueStore, LocalStorage, MemoryStore};
    use meteor_dodge::platform::InputState;
    use meteor_dodge::renderer::CanvasRenderer;
    use meteor_dodge::sim::GameState;
    use meteor_dodge::{FrameOutcome, Session, Settings, Tuning};

    type Store = Box<dyn KeyValueStore>;

    /// Game instance holding all state
    struct Game {
        session: Session<Store>,
        renderer: CanvasRenderer,
        input: InputState,
        document: Document,
    }

    impl Game {
        /// Run one animation frame. Returns whether to schedule another.
        fn frame(&mut self, time: f64) -> bool {
            let input = self.input.tick_input();
            let outcome = self.session.frame(time, &input);

            self.renderer.render(&self.session.draw_list());

            match outcome {
                FrameOutcome::Continue {
                    score,
                    score_changed,
                } => {
                    if score_changed {
                        set_text(&self.document, "score", &score.to_string());
                    }
                    if self.session.settings().show_fps {
                        set_text(&self.document, "fps", &self.session.fps().to_string());
                    }
                }
                FrameOutcome::GameOver { score, best, .. } => {
                    set_text(&self.document, "score", &score.to_string());
                    set_text(&self.document, "best", &best.to_string());
                    set_text(&self.document, "final-score", &score.to_string());
                    set_text(&self.document, "final-best", &best.to_string());
                    set_hidden(&self.document, "game-over", false);
                    // Held keys are cleared between rounds
                    self.input.release_all();
                }
                FrameOutcome::Halted => {}
            }

            outcome.reschedule()
        }

        fn restart(&mut self) -> bool {
            if !self.session.restart() {
                return false;
            }
            set_hidden(&self.document, "game-over", true);
            set_text(&self.document, "score", "0");
            true
        }

        fn resize(&mut self, width: f64, height: f64) {
            self.renderer.resize(width as u32, height as u32);
            self.session.resize(width as f32, height as f32);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Meteor Dodge starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or_else(|| JsValue::from_str("no #game canvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#game is not a canvas"))?;

        let (width, height) = window_size(&window)?;
        let renderer = CanvasRenderer::new(canvas)?;
        renderer.resize(width as u32, height as u32);

        let store: Store = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{e}; scores will not persist");
                Box::new(MemoryStore::new())
            }
        };

        let settings = Settings::load(&store);
        if let Err(e) = settings.save(&store) {
            log::warn!("Could not save settings: {e}");
        }
        let tuning = Tuning::load(&store);
        let best = BestScore::load(store);

        set_text(&document, "best", &best.get().to_string());
        set_text(&document, "score", "0");
        set_hidden(&document, "game-over", true);
        set_hidden(&document, "fps-counter", !settings.show_fps);

        let seed = js_sys::Date::now() as u64;
        let state = GameState::with_tuning(seed, width as f32, height as f32, tuning);
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            session: Session::new(state, best, settings),
            renderer,
            input: InputState::new(),
            document: document.clone(),
        }));

        setup_input_handlers(&window, game.clone())?;
        setup_resize_handler(&window, game.clone())?;
        setup_restart_button(&document, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Meteor Dodge running!");
        Ok(())
    }

    fn window_size(window: &Window) -> Result<(f64, f64), JsValue> {
        let w = window.inner_width()?.as_f64().unwrap_or(0.0);
        let h = window.inner_height()?.as_f64().unwrap_or(0.0);
        Ok((w, h))
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn setup_input_handlers(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.set_key(&event.key(), true) {
                    event.prevent_default();
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.set_key(&event.key(), false);
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: keyup never arrives for keys released elsewhere
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.release_all();
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize_handler(window: &Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window_clone = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            match window_size(&window_clone) {
                Ok((w, h)) => game.borrow_mut().resize(w, h),
                Err(e) => log::warn!("Could not read window size: {:?}", e),
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let btn = document
            .get_element_by_id("restart-button")
            .ok_or_else(|| JsValue::from_str("no #restart-button"))?;

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let restarted = game.borrow_mut().restart();
            if restarted {
                request_animation_frame(game.clone());
            }
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window; game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let reschedule = game.borrow_mut().frame(time);
        if reschedule {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use meteor_dodge::persistence::{BestScore, MemoryStore};
    use meteor_dodge::sim::{GameState, TickInput};
    use meteor_dodge::{FrameOutcome, Session, Settings};

    env_logger::init();
    log::info!("Meteor Dodge (native) starting...");
    log::info!("Native mode has no renderer - run with `trunk serve` for the web version");

    // Headless round at a steady 60 fps with the ship parked
    let seed = 42;
    let state = GameState::new(seed, 800.0, 600.0);
    let mut session = Session::new(state, BestScore::load(MemoryStore::new()), Settings::default());
    let frame_ms = 1000.0 / 60.0;

    for frame in 0..60 * 60 * 5 {
        let outcome = session.frame(frame as f64 * frame_ms, &TickInput::default());
        if let FrameOutcome::GameOver { score, best, .. } = outcome {
            println!("Seed {seed}: game over after {frame} frames, score {score} (best {best})");
            return;
        }
    }

    println!(
        "Seed {seed}: survived five minutes, score {}",
        session.state().score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
