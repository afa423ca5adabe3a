//! Browser fetch for the chat completion call: POST with a bearer
//! header and a hard timeout via AbortController. Any failure mode
//! (HTTP status, network, abort, non-string body) comes back as a
//! JsValue error; the caller treats them all the same and falls back
//! to the local responder.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

fn js_str(msg: &str) -> JsValue {
    JsValue::from_str(msg)
}

/// POST a JSON body and return the response text.
pub async fn post_json(
    url: &str,
    bearer: &str,
    body: &str,
    timeout_ms: u32,
) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| js_str("no window"))?;

    let headers = Headers::new()?;
    headers.set("Authorization", &format!("Bearer {}", bearer))?;
    headers.set("Content-Type", "application/json")?;

    let controller = AbortController::new()?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    init.set_signal(Some(&controller.signal()));

    let request = Request::new_with_str_and_init(url, &init)?;

    // Arm the timeout; the abort closure must stay alive until the
    // fetch settles one way or the other.
    let abort_target = controller.clone();
    let abort = Closure::<dyn FnMut()>::new(move || abort_target.abort());
    let timeout_id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        abort.as_ref().unchecked_ref(),
        timeout_ms as i32,
    )?;

    let fetched = JsFuture::from(window.fetch_with_request(&request)).await;
    window.clear_timeout_with_handle(timeout_id);
    drop(abort);

    let response: Response = fetched?.dyn_into()?;
    if !response.ok() {
        return Err(js_str(&format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let text = JsFuture::from(response.text()?).await?;
    text.as_string()
        .ok_or_else(|| js_str("response body was not text"))
}
