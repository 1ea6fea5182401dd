//! Flappy Sky entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use flappy_sky::persistence::LocalStorageStore;
    use flappy_sky::platform::CanvasSurface;
    use flappy_sky::sim::GameEvent;
    use flappy_sky::{BestScore, Game, LoopControl, Settings, Tuning};

    /// Browser host: the game plus its surface, store and frame handle
    struct App {
        game: Game,
        surface: CanvasSurface,
        store: LocalStorageStore,
        /// Pending requestAnimationFrame id
        animation_id: Option<i32>,
    }

    impl App {
        /// Refresh DOM text after a frame
        fn update_hud(&self, events: &[GameEvent]) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            for event in events {
                match event {
                    GameEvent::Started => {
                        set_text(&document, "score", "0");
                        set_hidden(&document, "new-high-score", true);
                        set_hidden(&document, "start-screen", true);
                        set_hidden(&document, "game-over", true);
                    }
                    GameEvent::Scored { score } => {
                        set_text(&document, "score", &score.to_string());
                    }
                    GameEvent::NewBest { best } => {
                        set_text(&document, "high-score", &format!("High: {}", best));
                    }
                    GameEvent::Crashed { .. } => {
                        if let Some(summary) = self.game.summary() {
                            set_text(&document, "final-score", &summary.score.to_string());
                            set_hidden(&document, "new-high-score", !summary.new_best);
                        }
                        set_hidden(&document, "game-over", false);
                    }
                    _ => {}
                }
            }
        }
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

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Flappy Sky starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let store = LocalStorageStore;
        let best = BestScore::load(&store);
        set_text(&document, "high-score", &format!("High: {}", best.value));

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, Tuning::default(), Settings::load(), best);
        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(&canvas)?,
            store,
            animation_id: None,
        }));

        // Paint the idle scene behind the start prompt
        {
            let mut a = app.borrow_mut();
            let App { game, surface, .. } = &mut *a;
            game.render(surface);
        }

        setup_input_handlers(&document, &canvas, app.clone())?;
        setup_theme_buttons(&document, app);

        log::info!("Flappy Sky running!");
        Ok(())
    }

    /// (Re)start the loop, dropping any frame still queued for the old run
    fn restart_loop(app: Rc<RefCell<App>>) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        if let Some(id) = app.borrow_mut().animation_id.take() {
            let _ = window.cancel_animation_frame(id);
        }
        request_animation_frame(app);
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let handle = app.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(handle, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => app.borrow_mut().animation_id = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let control = {
            let mut a = app.borrow_mut();
            a.animation_id = None;
            let App {
                game,
                surface,
                store,
                ..
            } = &mut *a;
            let (control, events) = game.frame(time, store, surface);
            a.update_hud(&events);
            control
        };

        if control == LoopControl::Continue {
            request_animation_frame(app);
        }
    }

    fn setup_input_handlers(
        document: &Document,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        // Start / restart buttons
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    let started = {
                        let mut a = app.borrow_mut();
                        a.game.start() || a.game.restart()
                    };
                    if started {
                        restart_loop(app.clone());
                    }
                });
                btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
        }

        // Click on the field flaps, or restarts from the summary
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                tap(&app);
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Space does the same
        {
            let window = web_sys::window().ok_or("no window")?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    event.prevent_default();
                    tap(&app);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn tap(app: &Rc<RefCell<App>>) {
        let (accepted, running_before) = {
            let mut a = app.borrow_mut();
            let running = a.game.phase() == flappy_sky::sim::GamePhase::Running;
            (a.game.tap(), running)
        };
        // A tap on the summary screen started a new run
        if accepted && !running_before {
            restart_loop(app.clone());
        }
    }

    fn setup_theme_buttons(document: &Document, app: Rc<RefCell<App>>) {
        let Ok(buttons) = document.query_selector_all(".theme-btn") else {
            return;
        };
        for i in 0..buttons.length() {
            let Some(node) = buttons.item(i) else {
                continue;
            };
            let Ok(btn) = node.dyn_into::<web_sys::Element>() else {
                continue;
            };
            let Some(name) = btn.get_attribute("data-theme") else {
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut a = app.borrow_mut();
                if a.game.select_theme(&name) {
                    a.game.settings().save();
                    // Repaint now when no loop is running
                    if a.animation_id.is_none() {
                        let App { game, surface, .. } = &mut *a;
                        game.render(surface);
                    }
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Sky (native) starting...");
    log::info!("Native mode runs a headless autopilot session - serve the wasm build to play");

    native::run_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use flappy_sky::consts::FRAME_HZ;
    use flappy_sky::persistence::JsonFileStore;
    use flappy_sky::renderer::VertexSurface;
    use flappy_sky::sim::{GameEvent, autopilot};
    use flappy_sky::{BestScore, Game, LoopControl, Settings, Tuning};

    /// Give up after five minutes of simulated play
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    /// Headless session flown by the autopilot
    ///
    /// Usage: `flappy-sky [seed]`. `FLAPPY_SKY_STORE` overrides the best score
    /// file, `FLAPPY_SKY_TUNING` points at a JSON tuning override and
    /// `FLAPPY_SKY_FRAME_DUMP` receives the last frame's vertex bytes.
    pub fn run_demo() {
        let seed = std::env::args()
            .nth(1)
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(0x5eed);

        let tuning = match std::env::var("FLAPPY_SKY_TUNING") {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(json) => Tuning::from_json_or_default(&json),
                Err(e) => {
                    log::warn!("Cannot read tuning {}: {}", path, e);
                    Tuning::default()
                }
            },
            Err(_) => Tuning::default(),
        };

        let store_path = std::env::var("FLAPPY_SKY_STORE")
            .unwrap_or_else(|_| "flappy_sky_scores.json".to_string());
        let mut store = JsonFileStore::open(&store_path);
        let best = BestScore::load(&store);

        let mut game = Game::new(seed, tuning, Settings::load(), best);
        let mut surface = VertexSurface::new();
        game.start();

        let frame_ms = 1000.0 / FRAME_HZ as f64;
        let mut now = 0.0;
        for _ in 0..MAX_FRAMES {
            if autopilot::should_flap(game.session()) {
                game.jump();
            }
            surface.clear();
            let (control, events) = game.frame(now, &mut store, &mut surface);
            for event in events {
                match event {
                    GameEvent::Scored { score } => log::info!("Score {}", score),
                    GameEvent::SpeedUp { speed } => log::info!("Speed x{:.2}", speed),
                    _ => {}
                }
            }
            if control == LoopControl::Stop {
                break;
            }
            now += frame_ms;
        }

        match game.summary() {
            Some(summary) => println!(
                "Final score {} (best {}{})",
                summary.score,
                summary.best,
                if summary.new_best { ", new best!" } else { "" }
            ),
            None => println!(
                "Autopilot still flying after {} frames with score {}",
                game.session().frames,
                game.score()
            ),
        }
        if let Ok(path) = std::env::var("FLAPPY_SKY_FRAME_DUMP") {
            let written = std::fs::File::create(&path)
                .and_then(|file| surface.write_to(std::io::BufWriter::new(file)));
            match written {
                Ok(()) => log::info!(
                    "Last frame ({} vertices) written to {}",
                    surface.vertices().len(),
                    path
                ),
                Err(e) => log::warn!("Cannot write frame dump {}: {}", path, e),
            }
        }
    }
}
