//! Brickout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent, TouchEvent,
    };

    use brickout::consts::*;
    use brickout::game_loop::GameLoop;
    use brickout::render::{CanvasRenderer, Renderer};
    use brickout::settings::GameConfig;
    use brickout::sim::GameEvent;

    /// Host-side bundle: the loop plus the renderer drawing its snapshots
    struct Game {
        game_loop: GameLoop,
        renderer: Option<CanvasRenderer>,
    }

    impl Game {
        fn new() -> Self {
            Self {
                game_loop: GameLoop::new(),
                renderer: None,
            }
        }

        /// One animation frame: advance, draw, surface notifications
        fn frame(&mut self) -> Vec<GameEvent> {
            let events = self.game_loop.frame();
            self.render();
            events
        }

        fn render(&mut self) {
            if let Some(ref mut renderer) = self.renderer {
                renderer.draw(self.game_loop.state());
            }
        }

        fn start(&mut self, config: GameConfig) {
            if let Some(ref mut renderer) = self.renderer {
                renderer.set_config(config.clone());
            }
            self.game_loop.start(&config);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brickout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let game = Rc::new(RefCell::new(Game::new()));

        // Stored config seeds the settings inputs; the start button reads
        // them back
        let stored = GameConfig::load();
        fill_settings_inputs(&document, &stored);

        match CanvasRenderer::new(&canvas, stored.clone()) {
            Some(renderer) => game.borrow_mut().renderer = Some(renderer),
            None => log::error!("2D canvas context unavailable"),
        }

        setup_input_handlers(&canvas, game.clone(), stored.enable_mouse);
        setup_run_button(&document, "start-btn", game.clone());
        setup_run_button(&document, "restart-btn", game.clone());
        setup_resume_button(&document, game.clone());
        setup_give_up_button(&document, game.clone());

        // Draw the idle field once; frames begin with the start button
        game.borrow_mut().render();

        log::info!("Brickout ready");
    }

    fn input_field(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document
            .get_element_by_id(id)?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    /// Read the settings inputs over the stored config. Missing or
    /// malformed fields keep their stored values; everything is clamped.
    fn read_config(document: &Document) -> GameConfig {
        let mut config = GameConfig::load();
        if let Some(input) = input_field(document, "paddle-width") {
            let value = input.value_as_number();
            if value.is_finite() {
                config.paddle_width = value as f32;
            }
        }
        if let Some(input) = input_field(document, "ball-color") {
            config.ball_color = input.value();
        }
        if let Some(input) = input_field(document, "paddle-color") {
            config.paddle_color = input.value();
        }
        if let Some(input) = input_field(document, "background-color") {
            config.background_color = input.value();
        }
        if let Some(input) = input_field(document, "lives") {
            let value = input.value_as_number();
            if value.is_finite() && value >= 0.0 {
                config.starting_lives = value as u8;
            }
        }
        config.sanitized()
    }

    fn fill_settings_inputs(document: &Document, config: &GameConfig) {
        if let Some(input) = input_field(document, "paddle-width") {
            input.set_value_as_number(config.paddle_width as f64);
        }
        if let Some(input) = input_field(document, "ball-color") {
            input.set_value(&config.ball_color);
        }
        if let Some(input) = input_field(document, "paddle-color") {
            input.set_value(&config.paddle_color);
        }
        if let Some(input) = input_field(document, "background-color") {
            input.set_value(&config.background_color);
        }
        if let Some(input) = input_field(document, "lives") {
            input.set_value_as_number(config.starting_lives as f64);
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>, enable_mouse: bool) {
        let window = web_sys::window().expect("no window");

        // Keyboard: held-direction flags
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.game_loop.input_mut().key_left(true),
                    "ArrowRight" => g.game_loop.input_mut().key_right(true),
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.game_loop.input_mut().key_left(false),
                    "ArrowRight" => g.game_loop.input_mut().key_right(false),
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse: absolute paddle-center target in field units
        if enable_mouse {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                if rect.width() <= 0.0 {
                    return;
                }
                let scale = FIELD_WIDTH as f64 / rect.width();
                let field_x = event.offset_x() as f64 * scale;
                game.borrow_mut()
                    .game_loop
                    .input_mut()
                    .pointer_move(field_x as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch: relative drag, scaled from rendered pixels to field units
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut()
                        .game_loop
                        .input_mut()
                        .touch_start(touch.client_x() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    if rect.width() <= 0.0 {
                        return;
                    }
                    let scale = (FIELD_WIDTH as f64 / rect.width()) as f32;
                    game.borrow_mut()
                        .game_loop
                        .input_mut()
                        .touch_move(touch.client_x() as f32, scale);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: TouchEvent| {
                game.borrow_mut().game_loop.input_mut().touch_end();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_frame(game: Rc<RefCell<Game>>) {
        let (events, keep_going) = {
            let mut g = game.borrow_mut();
            let events = g.frame();
            (events, g.game_loop.should_schedule())
        };
        dispatch_events(&events);
        // The chain survives the life-lost hold and ends at game over;
        // start/restart arms a new one
        if keep_going {
            request_animation_frame(game);
        }
    }

    /// Start and restart share one handler: read the settings, persist
    /// them, reset the run, and arm the frame chain if it is not running.
    fn setup_run_button(document: &Document, id: &str, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let config = read_config(&document);
                config.save();

                let was_scheduling = game.borrow().game_loop.should_schedule();
                game.borrow_mut().start(config);
                show_overlay(&document, "game-over", false);
                show_overlay(&document, "life-lost", false);
                if !was_scheduling {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resume_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("resume-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if game.borrow_mut().game_loop.resume_after_life_loss() {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        show_overlay(&document, "life-lost", false);
                    }
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// "Give up" from the life-lost hold ends the run through the normal
    /// game-over notification
    fn setup_give_up_button(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("give-up-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let events = game.borrow_mut().game_loop.end_game();
                dispatch_events(&events);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn dispatch_events(events: &[GameEvent]) {
        if events.is_empty() {
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for event in events {
            match event {
                GameEvent::ScoreChanged { score } => {
                    set_hud_value(&document, "hud-score", &score.to_string());
                }
                GameEvent::LevelChanged { level } => {
                    set_hud_value(&document, "hud-level", &level.to_string());
                }
                GameEvent::LivesChanged { lives } => {
                    set_hud_value(&document, "hud-lives", &lives.to_string());
                }
                GameEvent::LifeLost { lives_remaining } => {
                    set_text(&document, "life-lost-lives", &lives_remaining.to_string());
                    show_overlay(&document, "life-lost", true);
                }
                GameEvent::GameOver { score, level, .. } => {
                    set_text(&document, "final-score", &score.to_string());
                    set_text(&document, "final-level", &level.to_string());
                    show_overlay(&document, "life-lost", false);
                    show_overlay(&document, "game-over", true);
                }
            }
        }
    }

    fn set_hud_value(document: &Document, id: &str, value: &str) {
        if let Some(el) = document
            .query_selector(&format!("#{} .hud-value", id))
            .ok()
            .flatten()
        {
            el.set_text_content(Some(value));
        }
    }

    fn set_text(document: &Document, id: &str, value: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(value));
        }
    }

    fn show_overlay(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let class = if visible { "overlay" } else { "overlay hidden" };
            let _ = el.set_attribute("class", class);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brickout::game_loop::GameLoop;
    use brickout::settings::GameConfig;
    use brickout::sim::GameEvent;

    env_logger::init();
    log::info!("Brickout (native) starting...");

    // Headless demo: autopilot paddle tracking the ball. Run with
    // `RUST_LOG=info cargo run`; the browser build is served via trunk.
    let mut game_loop = GameLoop::new();
    game_loop.start(&GameConfig::default());

    let mut frames = 0u32;
    while game_loop.should_schedule() && frames < 20_000 {
        let ball_x = game_loop.state().ball.pos.x;
        game_loop.input_mut().pointer_move(ball_x);
        for event in game_loop.frame() {
            if let GameEvent::LevelChanged { level } = event {
                log::info!("autopilot reached level {}", level);
            }
        }
        frames += 1;
    }

    let state = game_loop.state();
    log::info!(
        "demo finished after {} frames: score {}, level {}, lives {}",
        frames,
        state.score,
        state.level,
        state.lives
    );
    match serde_json::to_string(state) {
        Ok(json) => log::debug!("final snapshot: {}", json),
        Err(err) => log::warn!("snapshot serialization failed: {}", err),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
