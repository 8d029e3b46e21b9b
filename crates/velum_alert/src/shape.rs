//! Cutout frame shape
//!
//! A rounded rectangle with a semicircular notch bitten out of the middle of
//! its top edge, for callout pointers or badge mounts:
//!
//! ```text
//!  ╭─────────╮     ╭─────────╮
//!  │          ╰───╯          │
//!  │                         │
//!  │                         │
//!  ╰─────────────────────────╯
//! ```
//!
//! The outline is recomputed on every call; nothing is cached.

use velum_core::{ArcDirection, Path, Point, Rect};

/// Rounded rectangle with a semicircular cutout centered on the top edge
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutoutShape {
    pub corner_radius: f32,
    pub cutout_radius: f32,
}

impl Default for CutoutShape {
    fn default() -> Self {
        Self {
            corner_radius: 20.0,
            cutout_radius: 50.0,
        }
    }
}

impl CutoutShape {
    pub fn new(corner_radius: f32, cutout_radius: f32) -> Self {
        Self {
            corner_radius,
            cutout_radius,
        }
    }

    /// Whether `rect` is large enough for the radii
    ///
    /// Requires `2 * cutout_radius < width` and
    /// `2 * corner_radius < min(width, height)`. [`CutoutShape::path`] does
    /// not check this; undersized rects give a self-intersecting outline.
    pub fn is_well_formed(&self, rect: Rect) -> bool {
        let ok = 2.0 * self.cutout_radius < rect.width()
            && 2.0 * self.corner_radius < rect.min_dimension();
        if !ok {
            tracing::warn!(
                "CutoutShape: radii (corner {}, cutout {}) do not fit {}x{}",
                self.corner_radius,
                self.cutout_radius,
                rect.width(),
                rect.height()
            );
        }
        ok
    }

    /// Closed outline of the shape inside `rect`
    ///
    /// Clockwise on screen from the end of the top-left corner: top edge,
    /// notch, then each corner and edge in turn.
    pub fn path(&self, rect: Rect) -> Path {
        let r = self.corner_radius;
        let s = self.cutout_radius;
        let (x, y) = (rect.x(), rect.y());
        let (max_x, max_y) = (rect.max_x(), rect.max_y());
        let mid_x = rect.mid_x();

        Path::new()
            .move_to(x + r, y)
            .line_to(mid_x - s, y)
            // Notch: left → bottom → right, dipping into the shape
            .arc(
                Point::new(mid_x, y),
                s,
                180f32.to_radians(),
                0.0,
                ArcDirection::CounterClockwise,
            )
            // Top-right
            .arc(
                Point::new(max_x - r, y + r),
                r,
                (-90f32).to_radians(),
                0.0,
                ArcDirection::Clockwise,
            )
            .line_to(max_x, max_y - r)
            // Bottom-right
            .arc(
                Point::new(max_x - r, max_y - r),
                r,
                0.0,
                90f32.to_radians(),
                ArcDirection::Clockwise,
            )
            .line_to(x + r, max_y)
            // Bottom-left
            .arc(
                Point::new(x + r, max_y - r),
                r,
                90f32.to_radians(),
                180f32.to_radians(),
                ArcDirection::Clockwise,
            )
            .line_to(x, y + r)
            // Top-left
            .arc(
                Point::new(x + r, y + r),
                r,
                180f32.to_radians(),
                270f32.to_radians(),
                ArcDirection::Clockwise,
            )
            .close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_core::PathCommand;

    const EPS: f32 = 1e-3;

    fn reference() -> Path {
        CutoutShape::new(20.0, 40.0).path(Rect::new(0.0, 0.0, 300.0, 200.0))
    }

    #[test]
    fn test_segment_order() {
        let path = reference();
        let kinds: Vec<&str> = path
            .commands()
            .iter()
            .map(|cmd| match cmd {
                PathCommand::MoveTo(_) => "move",
                PathCommand::LineTo(_) => "line",
                PathCommand::Arc { .. } => "arc",
                PathCommand::Close => "close",
            })
            .collect();

        assert_eq!(
            kinds,
            vec![
                "move", "line", "arc", "arc", "line", "arc", "line", "arc", "line", "arc",
                "close"
            ]
        );
        assert_eq!(path.commands().iter().filter(|c| c.is_arc()).count(), 5);
        assert_eq!(path.commands().iter().filter(|c| c.is_line()).count(), 4);
    }

    #[test]
    fn test_closes_at_start() {
        let path = reference();
        assert!(path.is_closed());
        assert_eq!(path.start_point(), Some(Point::new(20.0, 0.0)));
        assert!(path
            .current_point()
            .unwrap()
            .approx_eq(Point::new(20.0, 0.0), EPS));
    }

    #[test]
    fn test_notch_dips_into_shape() {
        let path = reference();
        let PathCommand::Arc {
            center,
            radius,
            direction,
            ..
        } = path.commands()[2]
        else {
            panic!("expected notch arc");
        };

        assert_eq!(center, Point::new(150.0, 0.0));
        assert_eq!(radius, 40.0);
        assert_eq!(direction, ArcDirection::CounterClockwise);
        assert!(path.commands()[2]
            .arc_start()
            .unwrap()
            .approx_eq(Point::new(110.0, 0.0), EPS));
        assert!(path.commands()[2]
            .end_point()
            .unwrap()
            .approx_eq(Point::new(190.0, 0.0), EPS));

        // Bounds stay inside the rect: the notch bows down, not up
        let bounds = path.bounds();
        assert!(bounds.y() > -EPS);
        assert!((bounds.max_y() - 200.0).abs() < EPS);
        assert!((bounds.width() - 300.0).abs() < EPS);
    }

    #[test]
    fn test_corners_meet_edges() {
        let path = reference();
        let cmds = path.commands();

        // Top-right arc starts on the top edge and ends on the right edge
        assert!(cmds[3].arc_start().unwrap().approx_eq(Point::new(280.0, 0.0), EPS));
        assert!(cmds[3].end_point().unwrap().approx_eq(Point::new(300.0, 20.0), EPS));
        // Each edge line ends where the next corner begins
        for (line, arc) in [(4, 5), (6, 7), (8, 9)] {
            let end = cmds[line].end_point().unwrap();
            assert!(cmds[arc].arc_start().unwrap().approx_eq(end, EPS));
        }
        assert!(cmds[5].end_point().unwrap().approx_eq(Point::new(280.0, 200.0), EPS));
        assert!(cmds[7].end_point().unwrap().approx_eq(Point::new(0.0, 180.0), EPS));
    }

    #[test]
    fn test_corner_arcs_are_quarter_turns() {
        let path = reference();
        for cmd in &path.commands()[3..] {
            if cmd.is_arc() {
                assert!((cmd.sweep() - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
            }
        }
        assert!((path.commands()[2].sweep() - std::f32::consts::PI).abs() < 1e-4);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(reference(), reference());
    }

    #[test]
    fn test_follows_rect_origin() {
        let shape = CutoutShape::new(10.0, 20.0);
        let path = shape.path(Rect::new(50.0, 30.0, 200.0, 100.0));
        assert_eq!(path.start_point(), Some(Point::new(60.0, 30.0)));
        assert_eq!(path.commands()[1].end_point(), Some(Point::new(130.0, 30.0)));
    }

    #[test]
    fn test_well_formed_check() {
        let shape = CutoutShape::new(20.0, 40.0);
        assert!(shape.is_well_formed(Rect::new(0.0, 0.0, 300.0, 200.0)));
        assert!(!shape.is_well_formed(Rect::new(0.0, 0.0, 80.0, 200.0)));
        assert!(!shape.is_well_formed(Rect::new(0.0, 0.0, 300.0, 40.0)));

        // Undersized input still yields a closed path
        let path = shape.path(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(path.is_closed());
    }
}
