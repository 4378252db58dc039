// Property tests for the maze and matching rules over the embedded curriculum.

use drill_core::content::MazeLayout;
use drill_core::matching::{MatchingBoard, Tile};
use drill_core::{Curriculum, MazeSession, MazeStatus, MoveOutcome, Point};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn layout() -> MazeLayout {
    Curriculum::builtin().expect("embedded curriculum parses").maze
}

/// Points on open floor: inside the canvas, off every obstacle and off the goal.
fn open_floor() -> impl Strategy<Value = Point> {
    let maze = layout();
    (0.0..maze.width, 0.0..maze.height)
        .prop_map(|(x, y)| Point { x, y })
        .prop_filter("open floor", move |p| {
            !maze.hits_obstacle(*p) && !maze.goal.contains(*p)
        })
}

fn pair_slots_matched(tiles: &[Tile]) -> bool {
    tiles.len() % 2 == 0 && tiles.chunks(2).all(|p| p.len() == 2 && p[0].item.id == p[1].item.id)
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn completion_tracks_pair_slots(
        seed in any::<u64>(),
        swaps in prop::collection::vec((0_usize..8, 0_usize..8), 0..40),
    ) {
        let catalog = Curriculum::builtin().unwrap().matching_items;
        let mut board = MatchingBoard::new(&catalog, &mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(board.tiles().len(), 8);
        for (a, b) in swaps {
            let solved = board.swap(a, b).unwrap();
            let expected = pair_slots_matched(board.tiles());
            prop_assert_eq!(solved, expected);
            prop_assert_eq!(board.is_complete(), expected);
            prop_assert_eq!(board.matched_pairs() == 4, expected);
        }
    }

    #[test]
    fn open_floor_clicks_extend_the_path(points in prop::collection::vec(open_floor(), 1..30)) {
        let mut maze = MazeSession::new(layout(), 0.0);
        for (i, p) in points.into_iter().enumerate() {
            prop_assert_eq!(maze.click(p, i as f64), MoveOutcome::Moved);
            prop_assert_eq!(maze.status(), MazeStatus::Playing);
            prop_assert_eq!(maze.path().len(), i + 2);
            prop_assert_eq!(maze.path().last().copied(), Some(p.rounded()));
        }
    }

    #[test]
    fn obstacle_clicks_lose_without_moving(
        which in 0_usize..64,
        fx in 0.0..=1.0_f64,
        fy in 0.0..=1.0_f64,
    ) {
        let layout = layout();
        let r = layout.obstacles[which % layout.obstacles.len()];
        let hit = Point { x: r.x + fx * r.w, y: r.y + fy * r.h };
        let mut maze = MazeSession::new(layout, 0.0);
        let spawn = maze.player();
        prop_assert_eq!(maze.click(hit, 1.0), MoveOutcome::HitObstacle);
        prop_assert_eq!(maze.status(), MazeStatus::Lost);
        prop_assert_eq!(maze.path().len(), 1);
        prop_assert_eq!(maze.player(), spawn);
        prop_assert_eq!(maze.click(Point { x: 40.0, y: 300.0 }, 2.0), MoveOutcome::Ignored);
        prop_assert_eq!(maze.path().len(), 1);
    }
}
