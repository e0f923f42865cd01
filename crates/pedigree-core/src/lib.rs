//! Pedigree Core Library
//!
//! Platform-agnostic data structures for rendering family trees:
//! people, computed layouts, connector geometry and the view camera.

pub mod camera;
pub mod geometry;
pub mod layout;
pub mod person;

pub use camera::Camera;
pub use geometry::{EPSILON, Scaffold, approx_eq, normalize_rad};
pub use layout::{Layout, LayoutError, LayoutResult};
pub use person::{CHILD_AGE, Gender, Person, PersonId, current_year};
