use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, LevelFilter};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

use slapper_core::{default_config, MatchConfig, ReplayInput, Session, TickInput, FIRST_FRAME_MS};

mod canvas;
mod console;

pub use canvas::CanvasSurface;

/// Install panic hook and console logger so problems show up in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::init(LevelFilter::Info);
}

/// JSON the replay CLI reads.
pub fn replay_json(config: &MatchConfig, transcript: Vec<TickInput>) -> Result<String, serde_json::Error> {
    serde_json::to_string(&ReplayInput {
        config: config.clone(),
        transcript,
    })
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

#[wasm_bindgen]
pub struct WasmGame {
    session: Session,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WasmGame {
    /// Attach to the canvas with id `canvas_id`, sizing it to the default 800x625 arena.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WasmGame, JsValue> {
        let config = default_config();

        let canvas: HtmlCanvasElement = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
            .dyn_into()?;
        canvas.set_width(config.canvas_width as u32);
        canvas.set_height(config.canvas_height as u32);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let session = Session::new(config, 0.0).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame {
            session,
            surface: CanvasSurface::new(context),
        })
    }

    /// Returns true when the page should not see the key (arrows, Enter).
    pub fn key_down(&mut self, key_code: u32) -> bool {
        self.session.key_down(key_code)
    }

    pub fn key_up(&mut self, key_code: u32) {
        self.session.key_up(key_code);
    }

    pub fn release_all_keys(&mut self) {
        self.session.release_all_keys();
    }

    /// Input, step and draw for one animation frame.
    pub fn frame(&mut self, timestamp: f64) {
        let events = self.session.frame(timestamp, &mut self.surface);
        for (id, fell) in events.fell_out.iter().enumerate() {
            if *fell {
                let scores = self.session.state().scores();
                info!("player {} fell: {} - {}", id + 1, scores[0], scores[1]);
            }
        }
    }

    /// Full game state (players, platforms, tick) as a JS object.
    pub fn export_state(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.state())
    }

    pub fn export_config(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.config())
    }

    pub fn scores(&self) -> Vec<i32> {
        self.session.state().scores().to_vec()
    }

    pub fn tick(&self) -> u32 {
        self.session.state().tick
    }

    pub fn start_recording(&mut self) {
        self.session.start_recording();
    }

    /// Stop recording and return replay JSON, or undefined if nothing was recorded.
    pub fn take_replay(&mut self) -> Result<Option<String>, JsValue> {
        match self.session.take_transcript() {
            Some(transcript) => replay_json(self.session.config(), transcript)
                .map(Some)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(None),
        }
    }
}

fn bind_keys(window: &Window, game: &Rc<RefCell<WasmGame>>) -> Result<(), JsValue> {
    let down_game = game.clone();
    let on_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        if down_game.borrow_mut().key_down(e.key_code()) {
            e.prevent_default();
        }
    });
    window.add_event_listener_with_callback("keydown", on_down.as_ref().unchecked_ref())?;

    let up_game = game.clone();
    let on_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        up_game.borrow_mut().key_up(e.key_code());
    });
    window.add_event_listener_with_callback("keyup", on_up.as_ref().unchecked_ref())?;

    // Keys released while the tab is unfocused never fire keyup.
    let blur_game = game.clone();
    let on_blur = Closure::<dyn FnMut()>::new(move || {
        blur_game.borrow_mut().release_all_keys();
    });
    window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;

    // Listeners live as long as the page.
    on_down.forget();
    on_up.forget();
    on_blur.forget();
    Ok(())
}

fn run_loop(window: &Window, game: Rc<RefCell<WasmGame>>) -> Result<(), JsValue> {
    let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();

    *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        game.borrow_mut().frame(timestamp);

        let scheduled = match (web_sys::window(), next.borrow().as_ref()) {
            (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()),
            _ => Err(JsValue::from_str("animation loop lost its window")),
        };
        if let Err(err) = scheduled {
            error!("could not schedule next frame: {:?}", err);
        }
    }));

    match callback.borrow().as_ref() {
        Some(cb) => window.request_animation_frame(cb.as_ref().unchecked_ref())?,
        None => return Err(JsValue::from_str("animation callback missing")),
    };
    Ok(())
}

/// Bind the keyboard and run the game on `canvas_id` until the page closes.
#[wasm_bindgen]
pub fn run(canvas_id: &str) -> Result<(), JsValue> {
    let window = window()?;
    let game = Rc::new(RefCell::new(WasmGame::new(canvas_id)?));
    bind_keys(&window, &game)?;

    // Fixed first frame, then real rAF timestamps.
    game.borrow_mut().frame(FIRST_FRAME_MS);
    run_loop(&window, game)?;

    info!("slapper running on #{}", canvas_id);
    Ok(())
}
