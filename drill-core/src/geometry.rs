use serde::{Deserialize, Serialize};

/// Planar coordinate in canvas pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

impl Point {
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Integer pair rounded half-up, the form recorded in maze paths.
    pub fn rounded(self) -> [i64; 2] {
        [round_half_up(self.x), round_half_up(self.y)]
    }
}

/// Axis-aligned rectangle used for obstacles and zones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Inclusive on every edge: a point on the border is inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Rounds .5 towards positive infinity.
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Convert client (viewport) coordinates into canvas backing-store pixels.
///
/// `origin` and `displayed` describe the element's bounding client rect and
/// `intrinsic` its backing-store size, so hit testing keeps working when CSS
/// scales the canvas. A collapsed element is treated as 1px wide.
pub fn client_to_canvas(
    client: Point,
    origin: Point,
    displayed: (f64, f64),
    intrinsic: (f64, f64),
) -> Point {
    Point {
        x: (client.x - origin.x) * intrinsic.0 / displayed.0.max(1.0),
        y: (client.y - origin.y) * intrinsic.1 / displayed.1.max(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(80.0, 0.0, 30.0, 280.0);
        assert!(r.contains(Point { x: 80.0, y: 0.0 }));
        assert!(r.contains(Point { x: 110.0, y: 280.0 }));
        assert!(r.contains(Point { x: 95.0, y: 140.0 }));
        assert!(!r.contains(Point { x: 79.99, y: 10.0 }));
        assert!(!r.contains(Point { x: 95.0, y: 280.01 }));
    }

    #[test]
    fn maps_scaled_canvas() {
        // 560px canvas shown at 280 CSS px, element offset by (10, 20)
        let p = client_to_canvas(
            Point { x: 110.0, y: 70.0 },
            Point { x: 10.0, y: 20.0 },
            (280.0, 180.0),
            (560.0, 360.0),
        );
        assert_eq!(p, Point { x: 200.0, y: 100.0 });
    }

    #[test]
    fn collapsed_element_does_not_divide_by_zero() {
        let p = client_to_canvas(
            Point { x: 5.0, y: 5.0 },
            Point::default(),
            (0.0, 0.0),
            (560.0, 360.0),
        );
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn rounding_matches_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(Point { x: 40.4, y: 39.5 }.rounded(), [40, 40]);
    }
}
