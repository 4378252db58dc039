// Integration tests for the chapter sessions, driven through the public API
// with the embedded curriculum. Host-only; nothing here touches the browser.

use drill_core::hazard::{HazardOutcome, HazardPicker};
use drill_core::matching::MatchingBoard;
use drill_core::payload::SubmissionPayload;
use drill_core::recall::{NumberRecall, RecallOutcome};
use drill_core::{
    Curriculum, MazeSession, MazeStatus, MoveOutcome, Point, SketchSession, SubmissionData,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn curriculum() -> Curriculum {
    Curriculum::builtin().expect("embedded curriculum parses")
}

// Points that sit in open corridors of the builtin maze.
const SAFE: [(f64, f64); 5] = [
    (40.0, 300.0),
    (140.0, 40.0),
    (150.0, 340.0),
    (240.0, 20.0),
    (350.0, 100.0),
];

#[test]
fn safe_clicks_keep_playing_and_grow_path() {
    let mut m = MazeSession::new(curriculum().maze, 0.0);
    for (i, &(x, y)) in SAFE.iter().enumerate() {
        assert_eq!(m.click(Point { x, y }, i as f64), MoveOutcome::Moved);
        assert_eq!(m.status(), MazeStatus::Playing);
        assert_eq!(m.path().len(), i + 2);
    }
}

#[test]
fn every_obstacle_interior_loses() {
    let c = curriculum();
    for r in &c.maze.obstacles {
        let mut m = MazeSession::new(c.maze.clone(), 0.0);
        let centre = Point {
            x: r.x + r.w / 2.0,
            y: r.y + r.h / 2.0,
        };
        assert_eq!(m.click(centre, 1.0), MoveOutcome::HitObstacle);
        assert_eq!(m.click(Point { x: 40.0, y: 300.0 }, 2.0), MoveOutcome::Ignored);
        assert_eq!(m.path().len(), 1);
    }
}

#[test]
fn winning_run_produces_consistent_payload() {
    let mut m = MazeSession::new(curriculum().maze, 100.0);
    for &(x, y) in &SAFE {
        m.click(Point { x, y }, 200.0);
    }
    let MoveOutcome::ReachedGoal(payload) = m.click(Point { x: 520.0, y: 330.0 }, 4_100.0) else {
        panic!("goal click should win");
    };
    let json = payload.to_pretty_json().unwrap();
    let back = SubmissionPayload::from_json(&json).unwrap();
    assert_eq!(back, payload);
    let SubmissionData::Maze(data) = back.data else {
        panic!("maze payload expected");
    };
    assert_eq!(data.path_array[0], [40, 40]);
    assert_eq!(data.path_array.len(), SAFE.len() + 2);
    assert_eq!(data.path_length, drill_core::maze::path_length(&data.path_array));
    assert_eq!(back.client_elapsed_time_ms, 4_000);
}

#[test]
fn three_strokes_count_three() {
    let c = curriculum();
    let mut s = SketchSession::new(c.drawing.challenge_id, 0.0);
    for (k, moves) in [0usize, 7, 25].into_iter().enumerate() {
        let t0 = (k * 1_000) as f64;
        s.pointer_down(Point { x: 10.0, y: 10.0 }, t0);
        for i in 0..moves {
            s.pointer_move(Point { x: 10.0 + i as f64, y: 10.0 }, t0 + i as f64);
        }
        s.pointer_up();
    }
    let p = s.export(5_000.0);
    let SubmissionData::Drawing(d) = &p.data else {
        panic!("drawing payload expected");
    };
    assert_eq!(d.total_stroke_count, 3);
    assert_eq!(d.stroke_data.iter().map(|st| st.len()).collect::<Vec<_>>(), [1, 8, 26]);
}

#[test]
fn matching_board_solves_by_swaps() {
    let c = curriculum();
    let mut rng = SmallRng::seed_from_u64(42);
    let mut b = MatchingBoard::new(&c.matching_items, &mut rng);
    assert_eq!(b.tiles().len(), 8);
    // selection-sort partners into place
    for slot in (0..b.tiles().len()).step_by(2) {
        let want = b.tiles()[slot].item.id.clone();
        let partner = (slot + 1..b.tiles().len())
            .find(|&j| b.tiles()[j].item.id == want)
            .unwrap();
        b.swap(slot + 1, partner).unwrap();
    }
    assert!(b.is_complete());
    assert_eq!(b.matched_pairs(), 4);
}

#[test]
fn quizzes_answer_keys() {
    let c = curriculum();
    let recall = NumberRecall::new(c.emergency.clone());
    assert_eq!(recall.check("061 - 211111"), RecallOutcome::Correct);
    assert_eq!(recall.check("911"), RecallOutcome::Incorrect);

    let mut picker = HazardPicker::new(c.hazards.clone());
    for h in &c.hazards {
        picker.toggle(h.id).unwrap();
    }
    assert_eq!(picker.submit(), Ok(HazardOutcome::Success));
}
