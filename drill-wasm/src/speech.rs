use wasm_bindgen::JsValue;
use web_sys::{SpeechSynthesisUtterance, Window};

pub fn available(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("speechSynthesis")).unwrap_or(false)
}

/// Queue `text` on the speech engine. `onend` fires when the utterance ends.
pub fn speak(
    window: &Window,
    text: &str,
    rate: f32,
    pitch: f32,
    onend: Option<&js_sys::Function>,
) -> Result<(), JsValue> {
    let synth = window.speech_synthesis()?;
    let utterance = SpeechSynthesisUtterance::new_with_text(text)?;
    utterance.set_rate(rate);
    utterance.set_pitch(pitch);
    utterance.set_onend(onend);
    synth.speak(&utterance);
    Ok(())
}
