use drill_core::payload::Stroke;

pub const CERTIFICATE_WIDTH: u32 = 1200;
pub const CERTIFICATE_HEIGHT: u32 = 850;
/// Printed when no name was entered.
pub const DEFAULT_RECIPIENT: &str = "Junior Firefighter";

const NAVY: &str = "#073b4c";
const RED: &str = "#d9534f";
const CREAM: &str = "#fff8f0";

fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn svg_open(s: &mut String, w: u32, h: u32) {
    s.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    s.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n"
    ));
}

fn centered_text(s: &mut String, y: f64, size: u32, style: &str, fill: &str, text: &str) {
    s.push_str(&format!(
        "<text x=\"600\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"{}\" {} fill=\"{}\">{}</text>\n",
        y,
        size,
        style,
        fill,
        svg_escape(text)
    ));
}

/// Fire truck badge, about 100px wide, sitting on the baseline `(cx, base)`.
fn fire_truck(s: &mut String, cx: f64, base: f64) {
    let (x, y) = (cx - 50.0, base - 60.0);
    s.push_str(&format!("<g id=\"truck\" transform=\"translate({x:.1} {y:.1})\">\n"));
    s.push_str(&format!(
        "<rect x=\"0\" y=\"14\" width=\"70\" height=\"34\" rx=\"4\" fill=\"{RED}\"/>\n"
    ));
    s.push_str(&format!(
        "<path d=\"M 70 22 L 88 22 L 100 36 L 100 48 L 70 48 Z\" fill=\"{RED}\"/>\n"
    ));
    s.push_str("<rect x=\"76\" y=\"26\" width=\"12\" height=\"10\" fill=\"#cfe8ff\"/>\n");
    // ladder
    s.push_str(&format!(
        "<path d=\"M 4 8 L 64 8 M 4 2 L 64 2 M 12 2 L 12 8 M 24 2 L 24 8 M 36 2 L 36 8 M 48 2 L 48 8 M 60 2 L 60 8\" stroke=\"{NAVY}\" stroke-width=\"2\"/>\n"
    ));
    for wx in [18.0, 82.0] {
        s.push_str(&format!(
            "<circle cx=\"{wx}\" cy=\"50\" r=\"10\" fill=\"{NAVY}\"/><circle cx=\"{wx}\" cy=\"50\" r=\"4\" fill=\"#ffffff\"/>\n"
        ));
    }
    s.push_str("</g>\n");
}

/// Two-tone flame, about 60px wide, sitting on the baseline `(cx, base)`.
fn flame(s: &mut String, cx: f64, base: f64) {
    let (x, y) = (cx - 30.0, base - 80.0);
    s.push_str(&format!("<g id=\"flame\" transform=\"translate({x:.1} {y:.1})\">\n"));
    s.push_str(
        "<path d=\"M 30 0 C 42 20 60 34 58 54 C 56 72 44 80 30 80 C 16 80 2 72 2 54 C 2 38 14 30 18 16 C 22 28 26 30 30 0 Z\" fill=\"#f4791f\"/>\n",
    );
    s.push_str(
        "<path d=\"M 30 34 C 38 46 46 54 44 64 C 42 74 36 78 30 78 C 24 78 16 74 16 64 C 16 54 24 48 30 34 Z\" fill=\"#ffd23f\"/>\n",
    );
    s.push_str("</g>\n");
}

/// Fixed 1200×850 certificate template with `name` filled in.
pub fn certificate_svg(name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { DEFAULT_RECIPIENT } else { name };
    let mut s = String::new();
    svg_open(&mut s, CERTIFICATE_WIDTH, CERTIFICATE_HEIGHT);
    s.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"{CREAM}\"/>\n"
    ));
    // double border
    s.push_str(&format!(
        "<rect x=\"30\" y=\"30\" width=\"1140\" height=\"790\" fill=\"none\" stroke=\"{NAVY}\" stroke-width=\"20\"/>\n"
    ));
    s.push_str(&format!(
        "<rect x=\"50\" y=\"50\" width=\"1100\" height=\"750\" fill=\"none\" stroke=\"{RED}\" stroke-width=\"5\"/>\n"
    ));
    centered_text(&mut s, 150.0, 80, "font-weight=\"bold\"", NAVY, "CERTIFICATE");
    centered_text(&mut s, 220.0, 40, "", NAVY, "OF FIRE SAFETY");
    centered_text(&mut s, 350.0, 50, "font-style=\"italic\"", NAVY, "This is awarded to:");
    s.push_str(&format!(
        "<path d=\"M 300 500 L 900 500\" stroke=\"{NAVY}\" stroke-width=\"4\"/>\n"
    ));
    centered_text(&mut s, 480.0, 70, "font-weight=\"bold\"", RED, name);
    centered_text(
        &mut s,
        600.0,
        30,
        "",
        NAVY,
        "For completing the Freddy & Franny Fire Safety Course",
    );
    centered_text(&mut s, 700.0, 30, "", NAVY, "Windhoek Fire Brigade: 061-211111");
    fire_truck(&mut s, 150.0, 700.0);
    flame(&mut s, 1050.0, 700.0);
    s.push_str("</svg>\n");
    s
}

/// Redraw sealed strokes as round-capped polylines on a white sheet.
pub fn exit_map_svg(strokes: &[Stroke], width: u32, height: u32) -> String {
    let mut s = String::new();
    svg_open(&mut s, width, height);
    s.push_str("<rect x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" fill=\"#ffffff\"/>\n");
    s.push_str(&format!(
        "<g fill=\"none\" stroke=\"{NAVY}\" stroke-width=\"4\" stroke-linecap=\"round\" stroke-linejoin=\"round\">\n"
    ));
    for stroke in strokes {
        let Some((first, rest)) = stroke.points.split_first() else {
            continue;
        };
        let mut d = format!("M {:.2} {:.2}", first.x, first.y);
        if rest.is_empty() {
            // a tap still leaves a dot
            d.push_str(&format!(" L {:.2} {:.2}", first.x, first.y));
        }
        for p in rest {
            d.push_str(&format!(" L {:.2} {:.2}", p.x, p.y));
        }
        s.push_str(&format!("<path d=\"{d}\"/>\n"));
    }
    s.push_str("</g>\n</svg>\n");
    s
}
