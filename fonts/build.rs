use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;
use zip::ZipArchive;

const FONT_FILE: &str = "SourceHanSansSC-Regular.otf";
const ZIP_URL: &str =
    "https://github.com/adobe-fonts/source-han-sans/releases/download/2.005R/09_SourceHanSansSC.zip";

fn download(url: &str, dest: &Path) -> bool {
    let dest = dest.to_string_lossy();
    let curl = Command::new("curl")
        .args(["-L", "-f", "-s", "-o", &dest, url])
        .status();
    if matches!(curl, Ok(st) if st.success()) {
        return true;
    }
    let wget = Command::new("wget").args(["-q", "-O", &dest, url]).status();
    matches!(wget, Ok(st) if st.success())
}

fn extract_font(zip_path: &Path) -> Result<Vec<u8>, String> {
    let mut data = Vec::new();
    fs::File::open(zip_path)
        .and_then(|mut f| f.read_to_end(&mut data))
        .map_err(|e| format!("read {}: {e}", zip_path.display()))?;
    let mut zip = ZipArchive::new(std::io::Cursor::new(data)).map_err(|e| e.to_string())?;
    for i in 0..zip.len() {
        let mut file = zip.by_index(i).map_err(|e| e.to_string())?;
        if file.name().ends_with(FONT_FILE) {
            let mut buf = Vec::new();
            std::io::copy(&mut file, &mut buf).map_err(|e| e.to_string())?;
            return Ok(buf);
        }
    }
    Err(format!("{FONT_FILE} not found in archive"))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FONT_TTF");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let target = out_dir.join(FONT_FILE);

    if let Ok(path) = env::var("FONT_TTF") {
        match fs::copy(&path, &target) {
            Ok(_) => return,
            Err(e) => println!("cargo:warning=failed to copy FONT_TTF {path}: {e}"),
        }
    }
    if target.exists() {
        return;
    }

    // Exports still work without a font; text is simply not drawn.
    let zip_path = out_dir.join("SourceHanSansSC.zip");
    let bytes = if download(ZIP_URL, &zip_path) {
        extract_font(&zip_path).unwrap_or_else(|e| {
            println!("cargo:warning=font extraction failed: {e}");
            Vec::new()
        })
    } else {
        println!("cargo:warning=could not download {ZIP_URL}; set FONT_TTF to embed a font");
        Vec::new()
    };
    fs::write(&target, &bytes).expect("write font into OUT_DIR");
}
