//! WASM bridge for the space-weather dashboard. The React/Three.js UI
//! calls these free functions: one init, one per-frame tick, a control
//! push, buffer accessors for the shared render state, JSON accessors
//! for the panels, and the async chat send.

pub mod http;
pub mod runner;
pub mod storage;

pub use runner::Runner;

use flarewatch_core::chat::api::{ChatCompletion, CHAT_ENDPOINT, CHAT_TIMEOUT_MS};
use flarewatch_core::{ChatOutcome, ChatPlan, ControlEvent, DashboardConfig, ReplyTone};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<Runner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut Runner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Dashboard not initialized. Call dashboard_init() first.");
        f(runner)
    })
}

fn js_err(e: serde_json::Error) -> JsValue {
    JsValue::from_str(&format!("serialize failed: {}", e))
}

fn init_with_config(config: DashboardConfig) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = Runner::new(config);
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("flarewatch-web: initialized");
}

/// Initialize with a session-unique layout, like a page reload.
#[wasm_bindgen]
pub fn dashboard_init() {
    init_with_config(DashboardConfig {
        seed: js_sys::Date::now() as u64,
        ..DashboardConfig::default()
    });
}

/// Initialize with a fixed seed so a session can be reproduced.
#[wasm_bindgen]
pub fn dashboard_init_with_seed(seed_lo: u32, seed_hi: u32) {
    init_with_config(DashboardConfig {
        seed: ((seed_hi as u64) << 32) | seed_lo as u64,
        ..DashboardConfig::default()
    });
}

/// Run one frame; `dt` is the animation-frame delta in seconds.
#[wasm_bindgen]
pub fn dashboard_frame(dt: f32) {
    with_runner(|r| r.frame(dt));
}

/// Queue a UI control (timeline scrub, play toggle, CME toggle, select).
/// Op codes are defined next to the handler in the core crate.
#[wasm_bindgen]
pub fn dashboard_control(op: u32, a: f32, b: f32, c: f32) {
    with_runner(|r| r.push_control(ControlEvent { op, a, b, c }));
}

// ---- Shared buffer accessors ----

#[wasm_bindgen]
pub fn get_buffer_ptr() -> *const f32 {
    with_runner(|r| r.buffer_ptr())
}

#[wasm_bindgen]
pub fn get_buffer_floats() -> u32 {
    with_runner(|r| r.buffer_floats())
}

#[wasm_bindgen]
pub fn get_entity_record_floats() -> u32 {
    with_runner(|r| r.entity_record_floats())
}

// ---- JSON accessors for the panels ----

#[wasm_bindgen]
pub fn get_status_json() -> Result<String, JsValue> {
    with_runner(|r| r.dashboard().status_json()).map_err(js_err)
}

#[wasm_bindgen]
pub fn get_impacts_json() -> Result<String, JsValue> {
    with_runner(|r| r.dashboard().impacts_json()).map_err(js_err)
}

#[wasm_bindgen]
pub fn get_fleet_json() -> Result<String, JsValue> {
    with_runner(|r| r.dashboard().fleet_json()).map_err(js_err)
}

#[wasm_bindgen]
pub fn get_satellite_json(id: u32) -> Result<String, JsValue> {
    with_runner(|r| r.dashboard().satellite_json(id)).map_err(js_err)
}

#[wasm_bindgen]
pub fn get_transcript_json() -> Result<String, JsValue> {
    with_runner(|r| r.dashboard().transcript_json()).map_err(js_err)
}

#[wasm_bindgen]
pub fn get_quick_questions_json() -> Result<String, JsValue> {
    with_runner(|r| r.dashboard().quick_questions_json()).map_err(js_err)
}

// ---- Credential store ----

#[wasm_bindgen]
pub fn save_api_key(key: &str) -> Result<(), JsValue> {
    storage::save_api_key(key)
}

#[wasm_bindgen]
pub fn stored_api_key() -> Result<Option<String>, JsValue> {
    storage::load_api_key()
}

#[wasm_bindgen]
pub fn clear_api_key() -> Result<(), JsValue> {
    storage::clear_api_key()
}

// ---- Chat ----

fn fallback_outcome(message: &str) -> ChatOutcome {
    let (text, tone) = with_runner(|r| r.dashboard_mut().finish_chat_fallback(message));
    ChatOutcome::Reply {
        text: text.to_string(),
        tone,
        fallback: true,
    }
}

/// Send a chat message. Resolves to a status-tagged JSON outcome:
/// `needsKey` (no stored credential, nothing sent), `busy` (a reply is
/// already in flight), or `reply` with the assistant text. Network,
/// HTTP, timeout, and parse failures all degrade to the local canned
/// reply; this function only errors on internal serialization.
#[wasm_bindgen]
pub async fn chat_send(message: String) -> Result<String, JsValue> {
    if with_runner(|r| r.dashboard().chat().is_pending()) {
        return ChatOutcome::Busy.to_json().map_err(js_err);
    }

    let key = storage::load_api_key()?;
    let plan = with_runner(|r| r.dashboard_mut().begin_chat_send(key.as_deref(), &message));
    let request = match plan {
        ChatPlan::NeedsKey => return ChatOutcome::NeedsKey.to_json().map_err(js_err),
        ChatPlan::Send(request) => request,
    };

    let body = request.to_json().map_err(js_err)?;
    let bearer = key.unwrap_or_default();

    let outcome = match http::post_json(CHAT_ENDPOINT, &bearer, &body, CHAT_TIMEOUT_MS).await {
        Ok(text) => match ChatCompletion::from_json(&text) {
            Ok(completion) => match completion.first_text() {
                Some(reply) => {
                    let reply = reply.to_string();
                    with_runner(|r| r.dashboard_mut().finish_chat_reply(&reply));
                    ChatOutcome::Reply {
                        text: reply,
                        tone: ReplyTone::Info,
                        fallback: false,
                    }
                }
                None => fallback_outcome(&message),
            },
            Err(_) => fallback_outcome(&message),
        },
        Err(err) => {
            log::warn!("flarewatch-web: chat request failed: {:?}", err);
            fallback_outcome(&message)
        }
    };
    outcome.to_json().map_err(js_err)
}
