//! Deterministic export pipeline for the certificate and the exit-map drawing.
//!
//! Artwork is built as an SVG string, rasterised with resvg into a
//! `tiny_skia::Pixmap`, then encoded either as PNG or as a single-page PDF
//! that embeds the raster. The same input always yields the same bytes.

use thiserror::Error;

mod pdf;
mod raster;
mod svg;

pub use pdf::{PAGE_HEIGHT_PT, PAGE_WIDTH_PT, encode_pdf};
pub use raster::{encode_png, render_svg};
pub use svg::{
    CERTIFICATE_HEIGHT, CERTIFICATE_WIDTH, DEFAULT_RECIPIENT, certificate_svg, exit_map_svg,
};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("SVG parse error: {0}")]
    Svg(String),
    #[error("cannot allocate a {0}x{1} pixmap")]
    PixmapAlloc(u32, u32),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
    #[error("compression failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("no font available to draw the artwork text")]
    MissingFont,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Rasterise `svg` and encode it in `format`.
///
/// Artwork that carries `<text>` is refused without a font rather than
/// exported with its lettering silently dropped.
pub fn export_svg(
    svg: &str,
    width: u32,
    height: u32,
    font: Option<&[u8]>,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    if svg.contains("<text") && font.is_none_or(<[u8]>::is_empty) {
        return Err(ExportError::MissingFont);
    }
    let pixmap = render_svg(svg, width, height, font)?;
    let bytes = match format {
        ExportFormat::Png => encode_png(&pixmap)?,
        ExportFormat::Pdf => encode_pdf(&pixmap)?,
    };
    log::debug!(
        "exported {}x{} {} ({} bytes)",
        width,
        height,
        format.extension(),
        bytes.len()
    );
    Ok(bytes)
}

/// Certificate for `name`, ready to download.
pub fn export_certificate(
    name: &str,
    font: Option<&[u8]>,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    let svg = certificate_svg(name);
    export_svg(&svg, CERTIFICATE_WIDTH, CERTIFICATE_HEIGHT, font, format)
}
