//! Person glyphs: a circle plus name and dates labels.
//!
//! Glyphs rotate with the radial layout, but are flipped by half a turn
//! whenever they would otherwise be upside-down. Flipped glyphs put their
//! labels on the left of the circle, so labels always point away from the
//! center of the tree.

use crate::scene::{Node, NodeFactory, NodeKind};
use kurbo::Point;
use pedigree_core::{Gender, Person, normalize_rad};
use std::f64::consts::PI;

/// Horizontal anchoring of a glyph's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAnchor {
    /// Text starts at the label position (SVG default).
    Start,
    /// Text is centered on the label position.
    Middle,
    /// Text ends at the label position.
    End,
}

impl LabelAnchor {
    /// Value of the `text-anchor` attribute, `None` for the default.
    fn attribute(self) -> Option<&'static str> {
        match self {
            LabelAnchor::Start => None,
            LabelAnchor::Middle => Some("middle"),
            LabelAnchor::End => Some("end"),
        }
    }
}

/// Placement of a single glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphLayout {
    /// Glyph center in layout space.
    pub position: Point,
    /// Rotation actually applied, in radians.
    pub rotation: f64,
    /// Whether the glyph was flipped upright, moving labels to the left.
    pub text_on_left: bool,
    /// Circle radius.
    pub radius: f64,
    /// Local x coordinate of both labels.
    pub label_x: f64,
    pub anchor: LabelAnchor,
    pub is_root: bool,
}

impl GlyphLayout {
    /// Compute the placement of a glyph at `position` with raw `rotation` (radians).
    pub fn compute(position: Point, rotation: f64, radius: f64, padding: f64, is_root: bool) -> Self {
        let mut rotation = normalize_rad(rotation);
        let text_on_left = rotation > PI / 2.0 && rotation < 3.0 * PI / 2.0;
        if text_on_left {
            rotation -= PI;
        }

        let (label_x, anchor) = if is_root {
            (0.0, LabelAnchor::Middle)
        } else if text_on_left {
            (-radius - padding, LabelAnchor::End)
        } else {
            (radius + padding, LabelAnchor::Start)
        };

        Self {
            position,
            rotation,
            text_on_left,
            radius,
            label_x,
            anchor,
            is_root,
        }
    }

    /// Value of the glyph group's `transform` attribute.
    pub fn svg_transform(&self) -> String {
        format!(
            "translate({}, {}) rotate({})",
            self.position.x,
            self.position.y,
            self.rotation.to_degrees()
        )
    }
}

/// Class tag for a gender.
pub fn gender_class(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "sex-male",
        Gender::Female => "sex-female",
        Gender::Other => "sex-other",
    }
}

/// Build the glyph group for `person`, labelled with its name and life span.
pub fn build_glyph<F: NodeFactory + ?Sized>(factory: &mut F, person: &Person, layout: &GlyphLayout) -> Node {
    build_labelled_glyph(factory, person, layout, person.full_name(), person.dates())
}

/// Build the glyph group for `person` with explicit label contents.
pub fn build_labelled_glyph<F: NodeFactory + ?Sized>(
    factory: &mut F,
    person: &Person,
    layout: &GlyphLayout,
    name: String,
    dates: String,
) -> Node {
    let mut group = factory.create_node(NodeKind::Group);
    group.set_attribute("transform", layout.svg_transform());
    group.add_class("person");
    if person.deceased {
        group.add_class("deceased");
    }
    group.add_class(gender_class(person.gender));
    if person.is_child() {
        group.add_class("infant");
    }
    if layout.is_root {
        group.add_class("root");
    }

    let mut circle = factory.create_node(NodeKind::Circle);
    circle.set_attribute("r", layout.radius);
    group.append_child(circle);

    // Name sits above the center line, dates below it.
    group.append_child(build_label(factory, layout, "name", "text-after-edge", name));
    group.append_child(build_label(factory, layout, "dates", "text-before-edge", dates));
    group
}

fn build_label<F: NodeFactory + ?Sized>(
    factory: &mut F,
    layout: &GlyphLayout,
    class: &str,
    baseline: &str,
    content: String,
) -> Node {
    let mut label = factory.create_node(NodeKind::Text);
    label.add_class(class);
    label.set_attribute("dominant-baseline", baseline);
    label.set_attribute("x", layout.label_x);
    label.set_attribute("y", 0);
    if let Some(anchor) = layout.anchor.attribute() {
        label.set_attribute("text-anchor", anchor);
    }
    label.set_text(content);
    label
}
