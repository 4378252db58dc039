use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};

use crate::ExportError;

/// A4 landscape, in points.
pub const PAGE_WIDTH_PT: f32 = 842.0;
pub const PAGE_HEIGHT_PT: f32 = 595.0;

const IMAGE_NAME: Name<'static> = Name(b"Im1");

/// Flatten premultiplied RGBA onto white and drop alpha.
fn rgb_over_white(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(pixmap.data().len() / 4 * 3);
    for px in pixmap.data().chunks_exact(4) {
        let backdrop = 255 - px[3];
        rgb.extend(px[..3].iter().map(|c| c.saturating_add(backdrop)));
    }
    rgb
}

/// Placement `[x, y, w, h]` that fits `w`×`h` in the page, centred.
fn fit_on_page(w: u32, h: u32) -> [f32; 4] {
    let scale = (PAGE_WIDTH_PT / w as f32).min(PAGE_HEIGHT_PT / h as f32);
    let dw = w as f32 * scale;
    let dh = h as f32 * scale;
    [
        (PAGE_WIDTH_PT - dw) / 2.0,
        (PAGE_HEIGHT_PT - dh) / 2.0,
        dw,
        dh,
    ]
}

/// Single-page PDF embedding the raster, aspect preserved.
pub fn encode_pdf(pixmap: &tiny_skia::Pixmap) -> Result<Vec<u8>, ExportError> {
    let mut z = ZlibEncoder::new(Vec::new(), Compression::default());
    z.write_all(&rgb_over_white(pixmap))?;
    let image_data = z.finish()?;

    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let image_id = Ref::new(4);
    let content_id = Ref::new(5);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH_PT, PAGE_HEIGHT_PT));
    page.parent(tree_id);
    page.contents(content_id);
    page.resources().x_objects().pair(IMAGE_NAME, image_id);
    page.finish();

    let mut image = pdf.image_xobject(image_id, &image_data);
    image.filter(Filter::FlateDecode);
    image.width(pixmap.width() as i32);
    image.height(pixmap.height() as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    let [x, y, w, h] = fit_on_page(pixmap.width(), pixmap.height());
    let mut content = Content::new();
    content.save_state();
    content.transform([w, 0.0, 0.0, h, x, y]);
    content.x_object(IMAGE_NAME);
    content.restore_state();
    pdf.stream(content_id, &content.finish());

    Ok(pdf.finish())
}
