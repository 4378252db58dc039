//! Font embedded into exports. Empty when the build could not fetch one.

pub static FONT_BYTES: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/SourceHanSansSC-Regular.otf"));

/// `None` when no font was embedded.
pub fn font() -> Option<&'static [u8]> {
    (!FONT_BYTES.is_empty()).then_some(FONT_BYTES)
}
