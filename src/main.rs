//! Lane Dodger entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlSelectElement, MouseEvent, TouchEvent};

    use lane_dodger::platform::{steer_for_key, steer_for_touch};
    use lane_dodger::renderer::{RenderState, shapes};
    use lane_dodger::sim::{Difficulty, GameEvent, GamePhase, Steer, SurfaceSize};
    use lane_dodger::{HighScores, Session, Settings};

    /// Game instance holding all state
    struct Game {
        session: Session,
        render_state: Option<RenderState>,
        settings: Settings,
        high_scores: HighScores,
        canvas: HtmlCanvasElement,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, canvas: HtmlCanvasElement, surface: SurfaceSize) -> Self {
            let settings = Settings::load();
            let high_scores = HighScores::load();

            let mut session = Session::new(seed, settings.difficulty, surface);
            session.set_best_score(high_scores.top_score().unwrap_or(0));
            session.set_reduced_motion(!settings.animate_markers());

            Self {
                session,
                render_state: None,
                settings,
                high_scores,
                canvas,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        fn toggle_running(&mut self) {
            let running = !self.session.is_running();
            self.session.set_running(running);
        }

        fn set_difficulty(&mut self, difficulty: Difficulty) {
            self.session.set_difficulty(difficulty);
            self.settings.difficulty = difficulty;
            self.settings.save();
        }

        /// Debug toggle; not persisted
        fn toggle_autopilot(&mut self) {
            let enabled = !self.session.autopilot();
            self.session.set_autopilot(enabled);
            log::info!("Autopilot: {}", enabled);
        }

        /// Size the canvas for the current viewport and tell the simulation
        fn fit_to_window(&mut self) {
            let window = web_sys::window().expect("no window");
            let inner_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(360.0);
            let inner_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
            let surface = SurfaceSize::fit_viewport(inner_w as f32, inner_h as f32);

            let dpr = window.device_pixel_ratio();
            let width = (surface.width as f64 * dpr) as u32;
            let height = (surface.height as f64 * dpr) as u32;
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            let _ = self.canvas.set_attribute(
                "style",
                &format!("width:{}px;height:{}px", surface.width, surface.height),
            );

            self.session.resize(surface);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(width, height);
            }
        }

        /// Run one simulation frame
        fn update(&mut self, time: f64) {
            for event in self.session.frame(time) {
                if let GameEvent::Crashed { score } = event {
                    if self.session.run_is_assisted() {
                        log::info!("Autopilot run, score {} not recorded", score);
                        continue;
                    }
                    let difficulty = self.session.state().difficulty;
                    if let Some(rank) =
                        self.high_scores.add_score(score, difficulty, js_sys::Date::now())
                    {
                        log::info!("New high score #{}: {}", rank, score);
                        self.high_scores.save();
                    }
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (59_000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let state = self.session.state();
                let vertices = shapes::scene(state);
                match render_state.render(&vertices, state.layout.surface) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let state = self.session.state();

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&state.reported_score.to_string()));
            }
            if let Some(el) = document.query_selector("#hud-best .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.session.best_score().to_string()));
            }
            if let Some(el) = document.get_element_by_id("hud-fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "hud-item");
                    el.set_text_content(Some(&format!("{} fps", self.fps)));
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }

            if let Some(el) = document.get_element_by_id("start-btn") {
                let label = if self.session.is_running() {
                    "Pause"
                } else if state.phase == GamePhase::Paused {
                    "Resume"
                } else {
                    "Start"
                };
                el.set_text_content(Some(label));
            }

            if let Some(el) = document.get_element_by_id("game-over") {
                if state.phase == GamePhase::Crashed {
                    let _ = el.set_attribute("class", "");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&state.reported_score.to_string()));
                    }
                    if let Some(el) = document.get_element_by_id("final-difficulty") {
                        el.set_text_content(Some(state.difficulty.as_str()));
                    }
                    if let Some(el) = document.get_element_by_id("final-best") {
                        let best = self
                            .high_scores
                            .best_for(state.difficulty)
                            .map_or_else(|| "-".to_string(), |s| s.to_string());
                        el.set_text_content(Some(&best));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Lane Dodger starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            canvas.clone(),
            SurfaceSize::default(),
        )));
        game.borrow_mut().fit_to_window();
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        let (w, h) = (canvas.width(), canvas.height());
                        match RenderState::new(surface, &adapter, w, h).await {
                            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("No suitable adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        if let Some(select) = document
            .get_element_by_id("difficulty")
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        {
            select.set_value(game.borrow().settings.difficulty.as_str());
        }

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_auto_pause(game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        request_animation_frame(game);

        log::info!("Lane Dodger running!");
    }

    /// Queue a lane change from a touch/click at client x
    fn steer_from_client_x(game: &Rc<RefCell<Game>>, canvas: &HtmlCanvasElement, client_x: f32) {
        let rect = canvas.get_bounding_client_rect();
        let x = client_x - rect.left() as f32;
        let cmd = steer_for_touch(x, rect.width() as f32);
        game.borrow_mut().session.steer(cmd);
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Touch: left half steers left, right half steers right
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    steer_from_client_x(&game, &canvas_clone, touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse click behaves like a tap
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                steer_from_client_x(&game, &canvas_clone, event.client_x() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                let mut g = game.borrow_mut();
                if let Some(cmd) = steer_for_key(&key) {
                    event.prevent_default();
                    g.session.steer(cmd);
                    return;
                }
                match key.as_str() {
                    " " | "Enter" => {
                        event.prevent_default();
                        g.toggle_running();
                    }
                    "Escape" => g.session.set_running(false),
                    "r" | "R" => g.session.reset(),
                    "i" | "I" => g.toggle_autopilot(),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Viewport changes
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().fit_to_window();
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Attach a click handler to the element with `id`, if present
    fn on_click(id: &str, handler: impl FnMut(MouseEvent) + 'static) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::debug!("No #{} element", id);
            return;
        };
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        {
            let game = game.clone();
            on_click("start-btn", move |_| game.borrow_mut().toggle_running());
        }
        {
            let game = game.clone();
            on_click("reset-btn", move |_| game.borrow_mut().session.reset());
        }
        {
            let game = game.clone();
            on_click("left-btn", move |_| game.borrow_mut().session.steer(Steer::Left));
        }
        {
            let game = game.clone();
            on_click("right-btn", move |_| game.borrow_mut().session.steer(Steer::Right));
        }
        {
            let game = game.clone();
            on_click("restart-btn", move |_| {
                let mut g = game.borrow_mut();
                g.session.reset();
                g.session.set_running(true);
            });
        }

        let select = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("difficulty"))
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok());
        if let Some(select) = select {
            let select_clone = select.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                match Difficulty::from_str(&select_clone.value()) {
                    Some(difficulty) => game.borrow_mut().set_difficulty(difficulty),
                    None => log::warn!("Unknown difficulty: {}", select_clone.value()),
                }
            });
            let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.session.is_running() {
                        g.session.set_running(false);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.session.is_running() {
                    g.session.set_running(false);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_dodger::Session;
    use lane_dodger::sim::{Difficulty, GameEvent, SurfaceSize};

    /// Longest headless run (simulated seconds)
    const MAX_SECONDS: f64 = 600.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let difficulty = match args.next() {
        Some(arg) => match Difficulty::from_str(&arg) {
            Some(d) => d,
            None => {
                eprintln!("Usage: lane-dodger [easy|normal|hard] [seed]");
                std::process::exit(2);
            }
        },
        None => Difficulty::default(),
    };
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            eprintln!("Invalid seed: {}", e);
            std::process::exit(2);
        }
        None => 1,
    };

    log::info!("Lane Dodger (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let mut session = Session::new(seed, difficulty, SurfaceSize::default());
    session.set_autopilot(true);
    session.set_running(true);

    let max_frames = (MAX_SECONDS * 1000.0 / FRAME_MS) as u64;
    let mut crash = None;
    for frame in 0..max_frames {
        for event in session.frame(frame as f64 * FRAME_MS) {
            if let GameEvent::Crashed { score } = event {
                crash = Some((frame, score));
            }
        }
        if !session.is_running() {
            break;
        }
    }

    let state = session.state();
    match crash {
        Some((frame, score)) => println!(
            "{} / seed {}: crashed after {:.1}s with score {}",
            difficulty.as_str(),
            seed,
            frame as f64 * FRAME_MS / 1000.0,
            score
        ),
        None => println!(
            "{} / seed {}: survived {:.0}s with score {}",
            difficulty.as_str(),
            seed,
            state.elapsed,
            state.reported_score
        ),
    }
}
