//! Vector paths
//!
//! A `Path` is an ordered list of drawing commands. Renderers walk
//! [`Path::commands`] and translate each command into their own primitive;
//! [`Path::to_svg_path_data`] provides a portable text form.
//!
//! Arcs are described by center, radius and angles (radians, y-down screen
//! space, so 0 points right and π/2 points down). Like most 2D APIs, an arc
//! whose start point differs from the current point is joined to it with an
//! implicit straight segment.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::geometry::{Point, Rect};

/// Direction an arc sweeps, as seen on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcDirection {
    /// Angle increases along the arc
    Clockwise,
    /// Angle decreases along the arc
    CounterClockwise,
}

/// Path command for building vector paths
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at a point
    MoveTo(Point),
    /// Straight line to a point
    LineTo(Point),
    /// Circular arc
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: ArcDirection,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// Whether this command draws a straight segment
    pub fn is_line(&self) -> bool {
        matches!(self, PathCommand::LineTo(_))
    }

    /// Whether this command draws an arc
    pub fn is_arc(&self) -> bool {
        matches!(self, PathCommand::Arc { .. })
    }

    /// Point where an arc begins (None for other commands)
    pub fn arc_start(&self) -> Option<Point> {
        match *self {
            PathCommand::Arc {
                center,
                radius,
                start_angle,
                ..
            } => Some(point_on_circle(center, radius, start_angle)),
            _ => None,
        }
    }

    /// Absolute angle covered by an arc, in `[0, 2π)` (0.0 for other commands)
    pub fn sweep(&self) -> f32 {
        match *self {
            PathCommand::Arc {
                start_angle,
                end_angle,
                direction,
                ..
            } => match direction {
                ArcDirection::Clockwise => (end_angle - start_angle).rem_euclid(TAU),
                ArcDirection::CounterClockwise => (start_angle - end_angle).rem_euclid(TAU),
            },
            _ => 0.0,
        }
    }

    /// Point where this command leaves the pen (None for `Close`)
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::Arc {
                center,
                radius,
                end_angle,
                ..
            } => Some(point_on_circle(center, radius, end_angle)),
            PathCommand::Close => None,
        }
    }
}

/// Point at `angle` on the circle around `center`
pub fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 12]>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: SmallVec::new(),
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Circular arc around `center`
    ///
    /// - `start_angle`, `end_angle`: radians, 0 = +x, π/2 = +y (down)
    /// - `direction`: sweep direction on screen
    pub fn arc(
        mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        direction: ArcDirection,
    ) -> Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether the last command closes the subpath
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Start of the first subpath
    pub fn start_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Where the pen rests after the last drawing command
    ///
    /// `Close` commands are skipped, so for a closed path this is where
    /// the outline ended before the closing segment.
    pub fn current_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// Calculate the bounding rectangle of this path
    ///
    /// Arcs contribute their endpoints plus every axis extreme they sweep
    /// through, so the result is tight for circular arcs.
    pub fn bounds(&self) -> Rect {
        let mut bounds: Option<Rect> = None;
        let mut include = |p: Point| {
            bounds = Some(match bounds {
                Some(b) => b.expand_to_include(p),
                None => Rect::from_origin_size(p, Default::default()),
            });
        };

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    direction,
                    ..
                } => {
                    let sweep = cmd.sweep();
                    let sign = match direction {
                        ArcDirection::Clockwise => 1.0,
                        ArcDirection::CounterClockwise => -1.0,
                    };
                    include(point_on_circle(center, radius, start_angle));
                    for quadrant in 0..4 {
                        let extreme = quadrant as f32 * FRAC_PI_2;
                        // Distance travelled from start to reach this extreme
                        let travel = (sign * (extreme - start_angle)).rem_euclid(TAU);
                        if travel <= sweep {
                            include(point_on_circle(center, radius, extreme));
                        }
                    }
                    if let Some(end) = cmd.end_point() {
                        include(end);
                    }
                }
                PathCommand::Close => {}
            }
        }

        bounds.unwrap_or(Rect::ZERO)
    }

    /// Serialize as SVG path data (`M`, `L`, `A`, `Z`)
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        let mut pen: Option<Point> = None;

        for cmd in &self.commands {
            if !out.is_empty() {
                out.push(' ');
            }
            match *cmd {
                PathCommand::MoveTo(p) => {
                    let _ = write!(out, "M {} {}", fmt_num(p.x), fmt_num(p.y));
                }
                PathCommand::LineTo(p) => {
                    let _ = write!(out, "L {} {}", fmt_num(p.x), fmt_num(p.y));
                }
                PathCommand::Arc {
                    radius, direction, ..
                } => {
                    let (Some(start), Some(end)) = (cmd.arc_start(), cmd.end_point()) else {
                        continue;
                    };
                    match pen {
                        Some(p) if p.approx_eq(start, 1e-3) => {}
                        Some(_) => {
                            let _ = write!(out, "L {} {} ", fmt_num(start.x), fmt_num(start.y));
                        }
                        None => {
                            let _ = write!(out, "M {} {} ", fmt_num(start.x), fmt_num(start.y));
                        }
                    }
                    let large_arc = u8::from(cmd.sweep() > PI);
                    let sweep_flag = u8::from(direction == ArcDirection::Clockwise);
                    let _ = write!(
                        out,
                        "A {r} {r} 0 {large_arc} {sweep_flag} {} {}",
                        fmt_num(end.x),
                        fmt_num(end.y),
                        r = fmt_num(radius),
                    );
                }
                PathCommand::Close => out.push('Z'),
            }
            if let Some(p) = cmd.end_point() {
                pen = Some(p);
            }
        }

        out
    }
}

/// Trim float noise so exported data stays readable
fn fmt_num(v: f32) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // Avoid "-0"
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}
