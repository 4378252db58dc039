use certificate_core::{ExportError, ExportFormat};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlButtonElement, Window};

use crate::utils::{alert, download_bytes};

fn deliver(
    document: &Document,
    bytes: Result<Vec<u8>, ExportError>,
    format: ExportFormat,
    filename: &str,
) -> Result<(), String> {
    let bytes = bytes.map_err(|e| e.to_string())?;
    download_bytes(document, &bytes, format.mime(), filename).map_err(|e: JsValue| format!("{e:?}"))
}

/// Disable `button`, render, download as `<stem>.<ext>`, then re-enable.
/// Failures are logged and surfaced with an alert.
pub fn run(
    window: &Window,
    document: &Document,
    button: Option<&HtmlButtonElement>,
    stem: &str,
    format: ExportFormat,
    render: impl FnOnce() -> Result<Vec<u8>, ExportError>,
) {
    if let Some(b) = button {
        b.set_disabled(true);
    }
    let filename = format!("{stem}.{}", format.extension());
    match deliver(document, render(), format, &filename) {
        Ok(()) => log::info!("downloaded {filename}"),
        Err(msg) => {
            log::error!("export of {filename} failed: {msg}");
            alert(window, &format!("Sorry, the download failed: {msg}"));
        }
    }
    if let Some(b) = button {
        b.set_disabled(false);
    }
}
