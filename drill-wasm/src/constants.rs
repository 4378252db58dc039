// Palette shared by every chapter.
pub const NAVY: &str = "#073b4c";
pub const RED: &str = "#d9534f";
pub const GREEN: &str = "#2a9d8f";
pub const CREAM: &str = "#fff8f0";
pub const GOLD: &str = "#FFD700";

pub const PLAYER_RADIUS: f64 = 10.0;
pub const SKETCH_LINE_WIDTH: f64 = 4.0;

pub const CERTIFICATE_FILE: &str = "fire_safety_certificate";
pub const EXIT_MAP_FILE: &str = "my_safe_exit_map";
