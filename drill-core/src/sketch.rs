//! Freehand drawing capture.
//!
//! Every pointer sample inside a stroke is kept verbatim with its offset from
//! the session start; rendering happens elsewhere and never feeds back into
//! the record.

use crate::geometry::Point;
use crate::payload::{DrawingSubmission, Stroke, StrokePoint, SubmissionData, SubmissionPayload};

#[derive(Clone, Debug)]
pub struct SketchSession {
    challenge_id: u32,
    started_at_ms: f64,
    strokes: Vec<Stroke>,
    open: Option<Stroke>,
}

impl SketchSession {
    pub fn new(challenge_id: u32, now_ms: f64) -> Self {
        SketchSession {
            challenge_id,
            started_at_ms: now_ms,
            strokes: Vec::new(),
            open: None,
        }
    }

    fn sample(&self, p: Point, now_ms: f64) -> StrokePoint {
        StrokePoint {
            x: p.x,
            y: p.y,
            time_offset_ms: crate::elapsed_ms(self.started_at_ms, now_ms),
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.open.is_some()
    }

    /// Sealed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn open_stroke(&self) -> Option<&Stroke> {
        self.open.as_ref()
    }

    /// Start a stroke. A stroke left open by a lost pointer-up is sealed first.
    pub fn pointer_down(&mut self, p: Point, now_ms: f64) {
        self.seal();
        let first = self.sample(p, now_ms);
        self.open = Some(Stroke { points: vec![first] });
    }

    /// Record one move sample; returns false when no stroke is open.
    pub fn pointer_move(&mut self, p: Point, now_ms: f64) -> bool {
        let point = self.sample(p, now_ms);
        match self.open.as_mut() {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => false,
        }
    }

    /// Seal the open stroke; returns false when nothing was open.
    pub fn pointer_up(&mut self) -> bool {
        self.seal()
    }

    fn seal(&mut self) -> bool {
        match self.open.take() {
            Some(stroke) => {
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Last two points of the open stroke, for incremental rendering.
    pub fn last_segment(&self) -> Option<(Point, Point)> {
        let pts = &self.open.as_ref()?.points;
        match pts.as_slice() {
            [.., a, b] => Some(((a.x, a.y).into(), (b.x, b.y).into())),
            _ => None,
        }
    }

    /// Drop sealed strokes and restart the clock. An open stroke survives.
    pub fn clear(&mut self, now_ms: f64) {
        self.strokes.clear();
        self.started_at_ms = now_ms;
    }

    /// Drawing time runs from session start (or last clear) to now, idle
    /// gaps between strokes included.
    pub fn total_drawing_time_ms(&self, now_ms: f64) -> u64 {
        crate::elapsed_ms(self.started_at_ms, now_ms)
    }

    /// Sum of per-stroke durations, excluding idle time.
    pub fn active_drawing_time_ms(&self) -> u64 {
        self.strokes.iter().map(Stroke::duration_ms).sum()
    }

    pub fn export(&self, now_ms: f64) -> SubmissionPayload {
        let total = self.total_drawing_time_ms(now_ms);
        SubmissionPayload::mock(
            self.challenge_id,
            total,
            SubmissionData::Drawing(DrawingSubmission {
                stroke_data: self.strokes.clone(),
                total_stroke_count: self.strokes.len(),
                total_drawing_time_ms: total,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn captures_offsets_from_session_start() {
        let mut s = SketchSession::new(5, 1_000.0);
        s.pointer_down(pt(1.0, 1.0), 1_010.0);
        assert!(s.pointer_move(pt(2.0, 2.0), 1_020.0));
        assert!(s.pointer_move(pt(2.0, 2.0), 1_020.0));
        assert!(s.pointer_up());
        let stroke = &s.strokes()[0];
        let offsets: Vec<u64> = stroke.points.iter().map(|p| p.time_offset_ms).collect();
        assert_eq!(offsets, vec![10, 20, 20]);
    }

    #[test]
    fn moves_outside_a_stroke_are_dropped() {
        let mut s = SketchSession::new(5, 0.0);
        assert!(!s.pointer_move(pt(1.0, 1.0), 5.0));
        assert!(!s.pointer_up());
        assert!(s.strokes().is_empty());
    }

    #[test]
    fn last_segment_tracks_open_stroke() {
        let mut s = SketchSession::new(5, 0.0);
        s.pointer_down(pt(0.0, 0.0), 1.0);
        assert_eq!(s.last_segment(), None);
        s.pointer_move(pt(3.0, 4.0), 2.0);
        assert_eq!(s.last_segment(), Some((pt(0.0, 0.0), pt(3.0, 4.0))));
        s.pointer_up();
        assert_eq!(s.last_segment(), None);
    }

    #[test]
    fn second_down_seals_dangling_stroke() {
        let mut s = SketchSession::new(5, 0.0);
        s.pointer_down(pt(0.0, 0.0), 1.0);
        s.pointer_down(pt(5.0, 5.0), 2.0);
        assert_eq!(s.strokes().len(), 1);
        assert!(s.is_drawing());
    }

    #[test]
    fn clear_keeps_open_stroke() {
        let mut s = SketchSession::new(5, 0.0);
        s.pointer_down(pt(0.0, 0.0), 1.0);
        s.pointer_up();
        s.pointer_down(pt(1.0, 1.0), 2.0);
        s.clear(100.0);
        assert!(s.strokes().is_empty());
        assert!(s.is_drawing());
        s.pointer_move(pt(2.0, 2.0), 150.0);
        s.pointer_up();
        assert_eq!(s.strokes().len(), 1);
        assert_eq!(s.strokes()[0].points[1].time_offset_ms, 50);
    }

    #[test]
    fn export_measures_from_start_not_strokes() {
        let mut s = SketchSession::new(5, 0.0);
        s.pointer_down(pt(0.0, 0.0), 100.0);
        s.pointer_move(pt(1.0, 0.0), 200.0);
        s.pointer_up();
        let p = s.export(10_000.0);
        let SubmissionData::Drawing(d) = &p.data else {
            panic!("expected drawing data");
        };
        assert_eq!(d.total_drawing_time_ms, 10_000);
        assert_eq!(p.client_elapsed_time_ms, 10_000);
        assert_eq!(s.active_drawing_time_ms(), 100);
        assert_eq!(p.challenge_id, 5);
    }
}
