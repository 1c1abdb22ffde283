// Copyright 2026 the Pathbender Authors
// SPDX-License-Identifier: Apache-2.0

//! SVG import — turning a document into session-ready paths.
//!
//! Parsing is delegated entirely to `usvg`, which resolves transforms
//! and paints and lowers shapes to path data; this layer adds no
//! validation of its own. Its job is classification: shape paths
//! become [`EditablePath`]s, a full-canvas background rectangle is
//! reported as a background color for the host's swatch control, and
//! image/text nodes are passed through untouched.

use crate::path::command::{self, PathCommand};
use crate::path::EditablePath;
use kurbo::{Point, Rect, Size};
use peniko::Color;
use thiserror::Error;
use usvg::tiny_skia_path::PathSegment;

/// Tolerance (document units) when testing whether a shape covers the
/// whole canvas
const BACKGROUND_COVER_EPSILON: f64 = 0.5;

/// Import failure
#[derive(Debug, Error)]
pub enum ImportError {
    /// The underlying parser rejected the document
    #[error("failed to parse SVG document: {0}")]
    Parse(#[from] usvg::Error),
}

/// A document node the editor does not edit; the host places it on the
/// canvas unmodified, at the recorded bounds.
#[derive(Debug, Clone, PartialEq)]
pub enum Passthrough {
    /// A raster image node
    Image {
        /// The element's id attribute (may be empty)
        id: String,
        /// Rendered bounds in canvas coordinates
        bounds: Rect,
    },
    /// A text node
    Text {
        /// The element's id attribute (may be empty)
        id: String,
        /// Rendered bounds in canvas coordinates
        bounds: Rect,
    },
}

/// Everything an import produced
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Editable shape paths, in document order
    pub paths: Vec<EditablePath>,
    /// Fill of the detected background rectangle, if one was found
    pub background_color: Option<Color>,
    /// Nodes passed through for the host to place unmodified
    pub passthrough: Vec<Passthrough>,
    /// Document canvas size
    pub canvas_size: Size,
}

/// Parse an SVG document and classify its contents.
pub fn import_svg(svg: &str) -> Result<ImportResult, ImportError> {
    let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
    let canvas_size = Size::new(tree.size().width() as f64, tree.size().height() as f64);

    let mut result = ImportResult {
        canvas_size,
        ..ImportResult::default()
    };
    let mut first_drawable = true;
    collect_group(tree.root(), canvas_size, &mut first_drawable, &mut result);

    tracing::info!(
        "[import_svg] {} paths, {} passthrough nodes, background: {}",
        result.paths.len(),
        result.passthrough.len(),
        result.background_color.is_some()
    );
    Ok(result)
}

fn collect_group(
    group: &usvg::Group,
    canvas_size: Size,
    first_drawable: &mut bool,
    result: &mut ImportResult,
) {
    for node in group.children() {
        match node {
            usvg::Node::Group(group) => {
                collect_group(group.as_ref(), canvas_size, first_drawable, result);
            }
            usvg::Node::Path(path) => {
                let was_first = std::mem::replace(first_drawable, false);
                if was_first
                    && covers_canvas(path.as_ref(), canvas_size)
                    && let Some(color) = fill_color(path.as_ref())
                {
                    tracing::debug!("[import_svg] background rectangle detected");
                    result.background_color = Some(color);
                    continue;
                }
                result.paths.push(convert_path(path.as_ref()));
            }
            usvg::Node::Image(image) => {
                *first_drawable = false;
                result.passthrough.push(Passthrough::Image {
                    id: image.id().to_string(),
                    bounds: to_rect(image.abs_bounding_box()),
                });
            }
            usvg::Node::Text(text) => {
                *first_drawable = false;
                result.passthrough.push(Passthrough::Text {
                    id: text.id().to_string(),
                    bounds: to_rect(text.abs_bounding_box()),
                });
            }
        }
    }
}

/// Convert one usvg path node into an editable path.
///
/// Segments lower to the editor's command set: quadratics are
/// degree-elevated to exact cubics so no geometry is dropped. The
/// node's resolved transform decomposes into the display placement.
fn convert_path(path: &usvg::Path) -> EditablePath {
    let commands = convert_segments(path.data().segments());

    let transform = path.abs_transform();
    let scale_x = f64::hypot(transform.sx as f64, transform.ky as f64);
    let scale_y = f64::hypot(transform.kx as f64, transform.sy as f64);
    let rotation = f64::atan2(transform.ky as f64, transform.sx as f64);

    // Rendered position of the path's minimum-bound corner.
    let min = command::smallest_point(&commands);
    let left = min.x * scale_x + transform.tx as f64;
    let top = min.y * scale_y + transform.ty as f64;

    let mut editable = EditablePath::new(commands).with_placement(left, top, scale_x, scale_y);
    editable.rotation = rotation;
    if let Some(color) = fill_color(path) {
        editable = editable.with_fill(color);
    }
    editable
}

fn convert_segments(segments: impl Iterator<Item = PathSegment>) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    let mut current = Point::ZERO;

    for segment in segments {
        match segment {
            PathSegment::MoveTo(p) => {
                current = to_point(p);
                commands.push(PathCommand::MoveTo(current));
            }
            PathSegment::LineTo(p) => {
                current = to_point(p);
                commands.push(PathCommand::LineTo(current));
            }
            PathSegment::QuadTo(q, p) => {
                let (q, to) = (to_point(q), to_point(p));
                // Exact degree elevation: the cubic controls sit a
                // third of the way from each endpoint short of the
                // quadratic control.
                let c1 = Point::new(
                    (current.x + 2.0 * q.x) / 3.0,
                    (current.y + 2.0 * q.y) / 3.0,
                );
                let c2 = Point::new((to.x + 2.0 * q.x) / 3.0, (to.y + 2.0 * q.y) / 3.0);
                commands.push(PathCommand::CurveTo { c1, c2, to });
                current = to;
            }
            PathSegment::CubicTo(c1, c2, p) => {
                current = to_point(p);
                commands.push(PathCommand::CurveTo {
                    c1: to_point(c1),
                    c2: to_point(c2),
                    to: current,
                });
            }
            PathSegment::Close => commands.push(PathCommand::Close),
        }
    }

    commands
}

fn to_point(p: usvg::tiny_skia_path::Point) -> Point {
    Point::new(p.x as f64, p.y as f64)
}

fn to_rect(r: usvg::tiny_skia_path::Rect) -> Rect {
    Rect::new(
        r.left() as f64,
        r.top() as f64,
        r.right() as f64,
        r.bottom() as f64,
    )
}

/// Whether a path's rendered geometry spans the whole canvas
fn covers_canvas(path: &usvg::Path, canvas_size: Size) -> bool {
    let commands = convert_segments(path.data().segments());
    if commands.is_empty() {
        return false;
    }

    let transform = path.abs_transform();
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    // Full affine, so rotated and skewed backgrounds still qualify.
    let mut visit = |p: Point| {
        let x = p.x * transform.sx as f64 + p.y * transform.kx as f64 + transform.tx as f64;
        let y = p.x * transform.ky as f64 + p.y * transform.sy as f64 + transform.ty as f64;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    };

    for cmd in &commands {
        match cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => visit(*p),
            PathCommand::CurveTo { c1, c2, to } => {
                visit(*c1);
                visit(*c2);
                visit(*to);
            }
            PathCommand::Close => {}
        }
    }

    let eps = BACKGROUND_COVER_EPSILON;
    min_x <= eps
        && min_y <= eps
        && max_x >= canvas_size.width - eps
        && max_y >= canvas_size.height - eps
}

/// The path's fill as a solid color, if it has one
fn fill_color(path: &usvg::Path) -> Option<Color> {
    let fill = path.fill()?;
    match fill.paint() {
        usvg::Paint::Color(color) => {
            let alpha = (fill.opacity().get() * 255.0).round() as u8;
            Some(Color::from_rgba8(color.red, color.green, color.blue, alpha))
        }
        // Gradients and patterns are not representable as a swatch.
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE_DOC: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <path d="M 10 10 L 30 10 L 20 30 Z" fill="#ff0000"/>
</svg>"##;

    const BACKGROUND_DOC: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <rect width="100" height="100" fill="#112233"/>
  <path d="M 10 10 L 30 10 L 20 30 Z" fill="#ff0000"/>
</svg>"##;

    #[test]
    fn triangle_imports_as_one_editable_path() {
        let result = import_svg(TRIANGLE_DOC).expect("valid document");

        assert_eq!(result.paths.len(), 1);
        assert!(result.background_color.is_none());
        assert!(result.passthrough.is_empty());
        assert_eq!(result.canvas_size, Size::new(100.0, 100.0));

        let path = &result.paths[0];
        assert!(path.is_closed());
        assert_eq!(path.commands[0], PathCommand::MoveTo(Point::new(10.0, 10.0)));
        assert_eq!(path.fill, Some(Color::from_rgb8(0xff, 0x00, 0x00)));
    }

    #[test]
    fn full_canvas_rect_becomes_background_color() {
        let result = import_svg(BACKGROUND_DOC).expect("valid document");

        // The rect is consumed as the background, not registered for
        // editing.
        assert_eq!(result.paths.len(), 1);
        assert_eq!(
            result.background_color,
            Some(Color::from_rgb8(0x11, 0x22, 0x33))
        );
    }

    #[test]
    fn rotated_covering_rect_still_becomes_background() {
        // rotate(90 50 50) maps the full-canvas square onto itself, so
        // the coverage test must see through the rotation.
        let doc = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <rect width="100" height="100" fill="#112233" transform="rotate(90 50 50)"/>
  <path d="M 10 10 L 30 10 L 20 30 Z" fill="#ff0000"/>
</svg>"##;
        let result = import_svg(doc).expect("valid document");

        assert_eq!(result.paths.len(), 1);
        assert_eq!(
            result.background_color,
            Some(Color::from_rgb8(0x11, 0x22, 0x33))
        );
    }

    #[test]
    fn image_passes_through_with_its_bounds() {
        // 1x1 transparent PNG.
        let doc = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <image id="photo" x="10" y="20" width="30" height="40" href="data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg=="/>
</svg>"##;
        let result = import_svg(doc).expect("valid document");

        assert!(result.paths.is_empty());
        assert_eq!(
            result.passthrough,
            vec![Passthrough::Image {
                id: "photo".to_string(),
                bounds: Rect::new(10.0, 20.0, 40.0, 60.0),
            }]
        );
    }

    #[test]
    fn covering_rect_after_other_shapes_stays_editable() {
        let doc = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <path d="M 10 10 L 30 10 L 20 30 Z" fill="#ff0000"/>
  <rect width="100" height="100" fill="#112233"/>
</svg>"##;
        let result = import_svg(doc).expect("valid document");

        // Only the first drawable qualifies as a background.
        assert_eq!(result.paths.len(), 2);
        assert!(result.background_color.is_none());
    }

    #[test]
    fn quadratic_segments_are_elevated_to_cubics() {
        let doc = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
  <path d="M 0 0 Q 30 60 60 0" fill="none" stroke="#000000"/>
</svg>"##;
        let result = import_svg(doc).expect("valid document");
        assert_eq!(result.paths.len(), 1);

        let commands = &result.paths[0].commands;
        assert_eq!(commands[0], PathCommand::MoveTo(Point::ZERO));
        assert_eq!(
            commands[1],
            PathCommand::CurveTo {
                c1: Point::new(20.0, 40.0),
                c2: Point::new(40.0, 40.0),
                to: Point::new(60.0, 0.0),
            }
        );
    }

    #[test]
    fn malformed_document_surfaces_parser_error() {
        assert!(import_svg("this is not svg").is_err());
    }

    #[test]
    fn empty_document_imports_nothing() {
        let doc = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"/>"#;
        let result = import_svg(doc).expect("valid document");
        assert!(result.paths.is_empty());
        assert!(result.background_color.is_none());
    }
}
