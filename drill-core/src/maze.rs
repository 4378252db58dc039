//! Click-to-teleport maze with path capture.
//!
//! The player marker jumps to wherever the child taps. Landing on an obstacle
//! ends the round, landing in the goal wins it and produces a maze payload
//! from the recorded path. Both end states stay put until [`MazeSession::reset`].

use crate::content::MazeLayout;
use crate::geometry::Point;
use crate::payload::{MazeSubmission, SubmissionData, SubmissionPayload, log_submission};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MazeStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Input arrived while the round was already over.
    Ignored,
    Moved,
    HitObstacle,
    ReachedGoal(SubmissionPayload),
}

#[derive(Clone, Debug)]
pub struct MazeSession {
    layout: MazeLayout,
    status: MazeStatus,
    player: Point,
    path: Vec<[i64; 2]>,
    started_at_ms: f64,
}

impl MazeSession {
    pub fn new(layout: MazeLayout, now_ms: f64) -> Self {
        let spawn = layout.spawn;
        MazeSession {
            layout,
            status: MazeStatus::Playing,
            player: spawn,
            path: vec![spawn.rounded()],
            started_at_ms: now_ms,
        }
    }

    pub fn layout(&self) -> &MazeLayout {
        &self.layout
    }

    pub fn status(&self) -> MazeStatus {
        self.status
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn path(&self) -> &[[i64; 2]] {
        &self.path
    }

    pub fn elapsed_ms(&self, now_ms: f64) -> u64 {
        crate::elapsed_ms(self.started_at_ms, now_ms)
    }

    pub fn path_length(&self) -> u64 {
        path_length(&self.path)
    }

    /// Handle one tap at `target` (canvas pixels).
    pub fn click(&mut self, target: Point, now_ms: f64) -> MoveOutcome {
        if self.status != MazeStatus::Playing {
            return MoveOutcome::Ignored;
        }
        // obstacles win over the goal when both contain the point
        if self.layout.hits_obstacle(target) {
            self.status = MazeStatus::Lost;
            log::debug!("maze: hot zone at ({:.1}, {:.1})", target.x, target.y);
            return MoveOutcome::HitObstacle;
        }
        self.player = target;
        self.path.push(target.rounded());
        if self.layout.goal.contains(target) {
            self.status = MazeStatus::Won;
            let payload = self.submission(now_ms);
            log_submission(&payload);
            return MoveOutcome::ReachedGoal(payload);
        }
        MoveOutcome::Moved
    }

    pub fn reset(&mut self, now_ms: f64) {
        let spawn = self.layout.spawn;
        self.status = MazeStatus::Playing;
        self.player = spawn;
        self.path.clear();
        self.path.push(spawn.rounded());
        self.started_at_ms = now_ms;
    }

    /// Maze payload for the path recorded so far.
    pub fn submission(&self, now_ms: f64) -> SubmissionPayload {
        SubmissionPayload::mock(
            self.layout.challenge_id,
            self.elapsed_ms(now_ms),
            SubmissionData::Maze(MazeSubmission {
                path_array: self.path.clone(),
                path_length: self.path_length(),
            }),
        )
    }
}

/// Rounded sum of Euclidean distances between consecutive points.
pub fn path_length(path: &[[i64; 2]]) -> u64 {
    let total: f64 = path
        .windows(2)
        .map(|w| {
            let dx = (w[1][0] - w[0][0]) as f64;
            let dy = (w[1][1] - w[0][1]) as f64;
            (dx * dx + dy * dy).sqrt()
        })
        .sum();
    total.round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Curriculum;

    fn session() -> MazeSession {
        MazeSession::new(Curriculum::builtin().unwrap().maze, 1_000.0)
    }

    #[test]
    fn starts_at_spawn() {
        let m = session();
        assert_eq!(m.status(), MazeStatus::Playing);
        assert_eq!(m.path(), &[[40, 40]]);
        assert_eq!(m.path_length(), 0);
    }

    #[test]
    fn free_moves_append_one_point_each() {
        let mut m = session();
        assert_eq!(m.click(Point { x: 40.0, y: 300.0 }, 1_100.0), MoveOutcome::Moved);
        assert_eq!(m.click(Point { x: 140.5, y: 320.2 }, 1_200.0), MoveOutcome::Moved);
        assert_eq!(m.status(), MazeStatus::Playing);
        assert_eq!(m.path(), &[[40, 40], [40, 300], [141, 320]]);
        assert_eq!(m.player(), Point { x: 140.5, y: 320.2 });
    }

    #[test]
    fn obstacle_edge_counts_as_hit() {
        let mut m = session();
        assert_eq!(m.click(Point { x: 80.0, y: 100.0 }, 1_100.0), MoveOutcome::HitObstacle);
        assert_eq!(m.status(), MazeStatus::Lost);
        assert_eq!(m.path().len(), 1);
        assert_eq!(m.player(), Point { x: 40.0, y: 40.0 });
        assert_eq!(m.click(Point { x: 40.0, y: 300.0 }, 1_200.0), MoveOutcome::Ignored);
        assert_eq!(m.path().len(), 1);
    }

    #[test]
    fn obstacle_checked_before_goal() {
        let mut layout = Curriculum::builtin().unwrap().maze;
        layout.obstacles.push(crate::Rect::new(500.0, 300.0, 10.0, 10.0));
        let mut m = MazeSession::new(layout, 0.0);
        assert_eq!(m.click(Point { x: 505.0, y: 305.0 }, 10.0), MoveOutcome::HitObstacle);
        assert_eq!(m.status(), MazeStatus::Lost);
    }

    #[test]
    fn goal_emits_maze_payload() {
        let mut m = session();
        m.click(Point { x: 43.0, y: 44.0 }, 1_100.0);
        let out = m.click(Point { x: 520.0, y: 320.0 }, 3_500.0);
        let MoveOutcome::ReachedGoal(p) = out else {
            panic!("expected goal, got {out:?}");
        };
        assert_eq!(m.status(), MazeStatus::Won);
        assert_eq!(p.challenge_id, 4);
        assert_eq!(p.client_elapsed_time_ms, 2_500);
        let SubmissionData::Maze(data) = &p.data else {
            panic!("expected maze data");
        };
        assert_eq!(data.path_array, vec![[40, 40], [43, 44], [520, 320]]);
        let expected = (5.0 + (477.0f64 * 477.0 + 276.0 * 276.0).sqrt()).round() as u64;
        assert_eq!(data.path_length, expected);
        assert_eq!(m.click(Point { x: 40.0, y: 300.0 }, 3_600.0), MoveOutcome::Ignored);
    }

    #[test]
    fn reset_restores_spawn_and_clock() {
        let mut m = session();
        m.click(Point { x: 40.0, y: 300.0 }, 1_100.0);
        m.click(Point { x: 95.0, y: 10.0 }, 1_200.0);
        assert_eq!(m.status(), MazeStatus::Lost);
        m.reset(5_000.0);
        assert_eq!(m.status(), MazeStatus::Playing);
        assert_eq!(m.path(), &[[40, 40]]);
        assert_eq!(m.player(), Point { x: 40.0, y: 40.0 });
        assert_eq!(m.elapsed_ms(5_000.0), 0);
    }

    #[test]
    fn path_length_sums_segments() {
        assert_eq!(path_length(&[]), 0);
        assert_eq!(path_length(&[[40, 40]]), 0);
        assert_eq!(path_length(&[[0, 0], [3, 4], [3, 10]]), 11);
        assert_eq!(path_length(&[[0, 0], [1, 1]]), 1);
    }
}
