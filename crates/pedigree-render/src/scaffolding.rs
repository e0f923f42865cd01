//! Path data for connector geometry.

use kurbo::{Point, SvgArc, Vec2};
use pedigree_core::{Scaffold, normalize_rad};
use std::f64::consts::PI;
use std::fmt;

/// One drawing command of a path.
#[derive(Debug, Clone)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Elliptical arc; `from` is the current point of the path.
    ArcTo(SvgArc),
    /// Quadratic curve: control point, end point.
    QuadTo(Point, Point),
}

/// A sequence of path commands, serialized as SVG path data (`d`).
#[derive(Debug, Clone, Default)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in drawing order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check whether the path has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Start a new subpath at `p`.
    pub fn move_to(&mut self, p: Point) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    /// Draw a straight line to `p`.
    pub fn line_to(&mut self, p: Point) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Draw an elliptical arc ending at `arc.to`.
    pub fn arc_to(&mut self, arc: SvgArc) {
        self.commands.push(PathCommand::ArcTo(arc));
    }

    /// Draw a quadratic curve through `cp` to `p`.
    pub fn quad_to(&mut self, cp: Point, p: Point) {
        self.commands.push(PathCommand::QuadTo(cp, p));
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M{} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L{} {}", p.x, p.y)?,
                PathCommand::ArcTo(arc) => write!(
                    f,
                    "A{} {} {} {} {} {} {}",
                    arc.radii.x,
                    arc.radii.y,
                    arc.x_rotation.to_degrees(),
                    u8::from(arc.large_arc),
                    u8::from(arc.sweep),
                    arc.to.x,
                    arc.to.y
                )?,
                PathCommand::QuadTo(cp, p) => write!(f, "Q{} {} {} {}", cp.x, cp.y, p.x, p.y)?,
            }
        }
        Ok(())
    }
}

/// Whether a circular arc sweeping from `from_angle` to `to_angle` is the large one.
///
/// The sweep is measured in the positive direction, normalized into `[0, 2π)`.
pub fn is_large_arc(from_angle: f64, to_angle: f64) -> bool {
    normalize_rad(to_angle - from_angle) > PI
}

/// Build the path data for a sequence of scaffold shapes.
///
/// Every shape starts a new subpath with a move. Unknown shapes are skipped.
pub fn build_path(shapes: &[Scaffold]) -> PathData {
    let mut path = PathData::new();
    for shape in shapes {
        match *shape {
            Scaffold::Line { from, to } => {
                path.move_to(from);
                path.line_to(to);
            }
            Scaffold::Arc {
                from,
                to,
                r,
                from_angle,
                to_angle,
            } => {
                path.move_to(from);
                path.arc_to(SvgArc {
                    from,
                    to,
                    radii: Vec2::new(r, r),
                    x_rotation: 0.0,
                    large_arc: is_large_arc(from_angle, to_angle),
                    sweep: true,
                });
            }
            Scaffold::Bezier { from, to, cp } => {
                path.move_to(from);
                path.quad_to(cp, to);
            }
            Scaffold::Unknown => {
                log::trace!("Skipping unknown scaffold shape");
            }
        }
    }
    path
}
