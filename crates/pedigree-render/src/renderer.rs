//! Renderer trait abstraction.

use crate::scene::Node;
use kurbo::Size;

/// Trait for rendering backends.
///
/// Hosts attach [`Renderer::element`] into their scene and call
/// [`Renderer::render`] when they want pending changes to show up.
pub trait Renderer: Send + Sync {
    /// Root visual node to attach into the host's tree.
    fn element(&self) -> &Node;

    /// Resize the viewport.
    fn set_size(&mut self, width: f64, height: f64);

    /// Current viewport size.
    fn size(&self) -> Size;

    /// Bring the scene up to date.
    ///
    /// Does nothing when nothing changed since the last call.
    fn render(&mut self);
}
