//! Pure game logic for the fire safety drill.
//!
//! Everything in this crate is host-testable: no DOM, no canvas, no clock.
//! Callers pass timestamps (`now_ms`) and randomness in explicitly, and the
//! browser runtime in `drill-wasm` turns DOM events into calls on the session
//! objects defined here.

pub mod content;
pub mod geometry;
pub mod hazard;
pub mod matching;
pub mod maze;
pub mod payload;
pub mod procedure;
pub mod recall;
pub mod sketch;

pub use content::{ContentError, Curriculum};
pub use geometry::{Point, Rect};
pub use maze::{MazeSession, MazeStatus, MoveOutcome};
pub use payload::{ChallengeType, SubmissionData, SubmissionPayload};
pub use sketch::SketchSession;

/// Whole milliseconds between two timestamps, clamped at zero.
pub fn elapsed_ms(start_ms: f64, now_ms: f64) -> u64 {
    let d = (now_ms - start_ms).max(0.0).round();
    if d.is_finite() { d as u64 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_rounds_and_clamps() {
        assert_eq!(elapsed_ms(1_000.0, 1_250.4), 250);
        assert_eq!(elapsed_ms(1_000.0, 1_250.6), 251);
        assert_eq!(elapsed_ms(1_000.0, 900.0), 0);
        assert_eq!(elapsed_ms(0.0, f64::NAN), 0);
    }
}
