use std::sync::Arc;

use png::{BitDepth, ColorType, Encoder};

use crate::ExportError;

fn font_database(font: Option<&[u8]>) -> usvg::fontdb::Database {
    let mut fontdb = usvg::fontdb::Database::new();
    let Some(bytes) = font.filter(|b| !b.is_empty()) else {
        log::warn!("no embedded font loaded");
        return fontdb;
    };
    fontdb.load_font_data(bytes.to_vec());
    let family = fontdb
        .faces()
        .next()
        .and_then(|face| face.families.first().map(|(n, _)| n.clone()));
    if let Some(name) = family {
        fontdb.set_sans_serif_family(name);
    }
    fontdb
}

/// Rasterise an SVG document into a `width`×`height` pixmap.
pub fn render_svg(
    svg: &str,
    width: u32,
    height: u32,
    font: Option<&[u8]>,
) -> Result<tiny_skia::Pixmap, ExportError> {
    let mut opt = usvg::Options::default();
    opt.fontdb = Arc::new(font_database(font));
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|e| ExportError::Svg(format!("{e:?}")))?;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(ExportError::PixmapAlloc(width, height))?;
    let sx = width as f32 / tree.size().width();
    let sy = height as f32 / tree.size().height();
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Deterministic PNG: same pixels, same bytes; no ancillary chunks.
///
/// Exports always paint an opaque background, so premultiplied and straight
/// RGBA coincide and the pixmap buffer is written as is.
pub fn encode_png(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        let mut writer = enc.write_header()?;
        writer.write_image_data(pixmap.data())?;
    }
    Ok(buf)
}
