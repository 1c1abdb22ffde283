// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! Absolute path commands and the path-data mini-language.
//!
//! Only the commands the editor understands are representable: move,
//! line, cubic curve, and close. Where the original document contains
//! anything else, the importer is responsible for lowering it to these
//! four before a path reaches the session (see `import`).

use kurbo::Point;
use std::fmt::Write as _;

/// One absolute command of a path's geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Begin a new subpath at a point
    MoveTo(Point),
    /// Straight segment to a point
    LineTo(Point),
    /// Cubic Bézier segment with two control points
    CurveTo {
        /// First (outgoing) control point
        c1: Point,
        /// Second (incoming) control point
        c2: Point,
        /// On-curve endpoint
        to: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// The on-curve endpoint of this command, if it has one
    pub fn endpoint(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::CurveTo { to, .. } => Some(*to),
            PathCommand::Close => None,
        }
    }
}

/// Serialize a command list to a path-data string.
///
/// Output uses the exact token shapes the editor emits during drags:
/// `M x y`, `L x y`, `C c1x c1y, c2x c2y, x y`, and a trailing `z`.
/// Integral coordinates print without a decimal point.
pub fn write_path_data(commands: &[PathCommand]) -> String {
    let mut out = String::new();
    for cmd in commands {
        if !out.is_empty() {
            out.push(' ');
        }
        match cmd {
            PathCommand::MoveTo(p) => {
                let _ = write!(out, "M {} {}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(out, "L {} {}", p.x, p.y);
            }
            PathCommand::CurveTo { c1, c2, to } => {
                let _ = write!(
                    out,
                    "C {} {}, {} {}, {} {}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                );
            }
            PathCommand::Close => out.push('z'),
        }
    }
    out
}

/// Minimum x and minimum y over every explicit coordinate in the
/// command list, control points included.
///
/// Returns `(0, 0)` for an empty list. Handle projection subtracts this
/// from scaled coordinates so handles line up with the rendered path no
/// matter where its own bounding box sits.
pub fn smallest_point(commands: &[PathCommand]) -> Point {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;

    for cmd in commands {
        match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                min_x = min_x.min(p.x);
                min_y = min_y.min(p.y);
            }
            PathCommand::CurveTo { c1, c2, to } => {
                min_x = min_x.min(c1.x).min(c2.x).min(to.x);
                min_y = min_y.min(c1.y).min(c2.y).min(to.y);
            }
            PathCommand::Close => {}
        }
    }

    if min_x.is_finite() && min_y.is_finite() {
        Point::new(min_x, min_y)
    } else {
        Point::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn write_move_and_lines() {
        let commands = [
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 10.0)),
        ];
        assert_eq!(write_path_data(&commands), "M 0 0 L 10 0 L 10 10");
    }

    #[test]
    fn write_cubic_with_comma_separated_control_pairs() {
        let commands = [
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::CurveTo {
                c1: pt(15.0, 0.0),
                c2: pt(20.0, 5.0),
                to: pt(20.0, 10.0),
            },
        ];
        assert_eq!(write_path_data(&commands), "M 0 0 C 15 0, 20 5, 20 10");
    }

    #[test]
    fn write_close_as_lowercase_z() {
        let commands = [
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(4.0, 0.0)),
            PathCommand::Close,
        ];
        assert_eq!(write_path_data(&commands), "M 0 0 L 4 0 z");
    }

    #[test]
    fn write_fractional_coordinates() {
        let commands = [PathCommand::MoveTo(pt(1.5, -2.25))];
        assert_eq!(write_path_data(&commands), "M 1.5 -2.25");
    }

    #[test]
    fn smallest_point_covers_control_points() {
        let commands = [
            PathCommand::MoveTo(pt(10.0, 20.0)),
            PathCommand::LineTo(pt(30.0, 5.0)),
            PathCommand::CurveTo {
                c1: pt(-4.0, 40.0),
                c2: pt(12.0, -1.0),
                to: pt(25.0, 25.0),
            },
        ];
        // Minimum x comes from a control point, minimum y from another.
        assert_eq!(smallest_point(&commands), pt(-4.0, -1.0));
    }

    #[test]
    fn smallest_point_of_empty_list_is_origin() {
        assert_eq!(smallest_point(&[]), Point::ZERO);
    }

    #[test]
    fn smallest_point_ignores_close() {
        let commands = [
            PathCommand::MoveTo(pt(3.0, 7.0)),
            PathCommand::LineTo(pt(9.0, 2.0)),
            PathCommand::Close,
        ];
        assert_eq!(smallest_point(&commands), pt(3.0, 2.0));
    }

    #[test]
    fn endpoint_of_each_variant() {
        assert_eq!(PathCommand::MoveTo(pt(1.0, 2.0)).endpoint(), Some(pt(1.0, 2.0)));
        assert_eq!(PathCommand::LineTo(pt(3.0, 4.0)).endpoint(), Some(pt(3.0, 4.0)));
        let curve = PathCommand::CurveTo {
            c1: pt(0.0, 0.0),
            c2: pt(1.0, 1.0),
            to: pt(5.0, 6.0),
        };
        assert_eq!(curve.endpoint(), Some(pt(5.0, 6.0)));
        assert_eq!(PathCommand::Close.endpoint(), None);
    }
}
