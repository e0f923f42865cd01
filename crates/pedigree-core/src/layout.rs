//! Computed layout of a family tree, as handed to a renderer.

use crate::geometry::Scaffold;
use crate::person::{Person, PersonId};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Layout errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to parse layout: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Root person {0} is not part of the layout")]
    UnknownRoot(PersonId),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Positions, orientations and connector geometry for a set of people.
///
/// Layouts are produced by a layout algorithm and consumed read-only by renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    /// Everyone who may appear in the layout, keyed by ID.
    pub people: HashMap<PersonId, Person>,
    /// Connector geometry, drawn in order.
    #[serde(default)]
    pub scaffolding: Vec<Scaffold>,
    /// Glyph centers. Renderers visit people in this map's order.
    pub positions: BTreeMap<PersonId, Point>,
    /// Orientation of each glyph around the radial layout, in radians.
    pub rotations: HashMap<PersonId, f64>,
    /// Radius of every person's circle.
    pub person_radius: f64,
    /// The person at the center of the tree.
    pub root: PersonId,
}

impl Layout {
    /// Create an empty layout around `root`.
    pub fn new(root: Person, person_radius: f64) -> Self {
        let root_id = root.id;
        let mut people = HashMap::new();
        people.insert(root_id, root);
        Self {
            people,
            scaffolding: Vec::new(),
            positions: BTreeMap::new(),
            rotations: HashMap::new(),
            person_radius,
            root: root_id,
        }
    }

    /// Parse a layout from JSON.
    pub fn from_json(json: &str) -> LayoutResult<Self> {
        let layout: Layout = serde_json::from_str(json)?;
        if !layout.people.contains_key(&layout.root) {
            return Err(LayoutError::UnknownRoot(layout.root));
        }
        log::debug!(
            "Loaded layout with {} people and {} scaffold shapes",
            layout.positions.len(),
            layout.scaffolding.len()
        );
        Ok(layout)
    }

    /// Place a person, adding them to the layout if needed.
    pub fn place(&mut self, person: Person, position: Point, rotation: f64) {
        let id = person.id;
        self.people.insert(id, person);
        self.positions.insert(id, position);
        self.rotations.insert(id, rotation);
    }

    /// Append a scaffold shape.
    pub fn add_scaffold(&mut self, shape: Scaffold) {
        self.scaffolding.push(shape);
    }

    /// Look up a person by ID.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Check whether `id` is the root of the layout.
    pub fn is_root(&self, id: PersonId) -> bool {
        self.root == id
    }
}
