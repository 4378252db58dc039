use drill_core::Point;
use drill_core::geometry::client_to_canvas;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlCanvasElement, HtmlElement, MouseEvent, Url, Window};

/// Milliseconds on a monotonic clock when available, wall clock otherwise.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Look up an element by id and cast it, or `None` if absent or of another type.
pub fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let found = document.get_element_by_id(id).and_then(|e| e.dyn_into::<T>().ok());
    if found.is_none() {
        log::debug!("element #{id} not found");
    }
    found
}

pub fn set_hidden(document: &Document, id: &str, hidden: bool) {
    if let Some(el) = element::<HtmlElement>(document, id) {
        el.set_hidden(hidden);
    }
}

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn alert(window: &Window, message: &str) {
    if window.alert_with_message(message).is_err() {
        log::warn!("alert failed: {message}");
    }
}

/// Convert pointer client coordinates into canvas backing-store pixels so
/// hit testing works even if CSS scales the canvas.
pub fn event_canvas_coords(e: &MouseEvent, cv: &HtmlCanvasElement) -> Point {
    let rect = cv.get_bounding_client_rect();
    client_to_canvas(
        Point {
            x: e.client_x() as f64,
            y: e.client_y() as f64,
        },
        Point {
            x: rect.left(),
            y: rect.top(),
        },
        (rect.width(), rect.height()),
        (cv.width() as f64, cv.height() as f64),
    )
}

/// Offer `bytes` as a file download through a temporary `<a download>`.
pub fn download_bytes(
    document: &Document,
    bytes: &[u8],
    mime: &str,
    filename: &str,
) -> Result<(), JsValue> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &opts)?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let a = document.create_element("a")?.dyn_into::<HtmlElement>()?;
    a.set_attribute("href", &url)?;
    a.set_attribute("download", filename)?;
    a.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Escape text for interpolation into `inner_html`.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
