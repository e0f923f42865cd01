//! SVG scene renderer.

use crate::glyph::{GlyphLayout, build_glyph, build_labelled_glyph};
use crate::renderer::Renderer;
use crate::scaffolding::build_path;
use crate::scene::{Node, NodeFactory, NodeKind, SequentialNodeFactory};
use crate::style::RenderStyle;
use kurbo::{Point, Size, Vec2};
use pedigree_core::{Camera, Gender, Layout, Person, Scaffold, current_year};
use std::sync::Arc;

/// Renders a [`Layout`] into an SVG scene graph.
///
/// Transform changes (size, scale, offset) are applied immediately to the
/// scene container. Attaching a new layout only marks the scene dirty; the
/// rebuild happens on the next [`Renderer::render`] call.
pub struct SvgRenderer<F: NodeFactory = SequentialNodeFactory> {
    /// Creates every node of the scene.
    factory: F,
    /// Style knobs.
    style: RenderStyle,
    /// Viewport size, zoom and pan.
    camera: Camera,
    /// The `svg` element; holds at most one child, the scene container.
    root: Node,
    /// Currently attached layout.
    layout: Option<Arc<Layout>>,
    /// Whether the layout changed since the last render.
    dirty: bool,
}

impl SvgRenderer<SequentialNodeFactory> {
    /// Create a renderer for a viewport of the given size.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_factory(SequentialNodeFactory::new(), width, height)
    }
}

impl<F: NodeFactory> SvgRenderer<F> {
    /// Create a renderer that builds its nodes with `factory`.
    pub fn with_factory(mut factory: F, width: f64, height: f64) -> Self {
        let mut root = factory.create_node(NodeKind::Svg);
        set_pixel_size(&mut root, width, height);
        Self {
            factory,
            style: RenderStyle::default(),
            camera: Camera::new(width, height),
            root,
            layout: None,
            dirty: false,
        }
    }

    /// Set the style used by subsequent rebuilds.
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Style the scene is built with.
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Current size, scale and offset.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Set the zoom factor.
    pub fn set_scale(&mut self, scale: f64) {
        self.camera.scale = scale;
        self.apply_transform();
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f64 {
        self.camera.scale
    }

    /// Set the pan offset.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.camera.offset = offset;
        self.apply_transform();
    }

    /// Current pan offset.
    pub fn offset(&self) -> Vec2 {
        self.camera.offset
    }

    /// Attach a layout. The scene is rebuilt on the next render.
    ///
    /// Attaching the layout that is already attached (the same `Arc`) does nothing.
    pub fn set_layout(&mut self, layout: Arc<Layout>) {
        if self
            .layout
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &layout))
        {
            return;
        }
        self.layout = Some(layout);
        self.dirty = true;
    }

    /// The attached layout, if any.
    pub fn layout(&self) -> Option<&Arc<Layout>> {
        self.layout.as_ref()
    }

    /// Whether the next render will rebuild the scene.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The scene container, once something has been rendered.
    pub fn container(&self) -> Option<&Node> {
        self.root.children().last()
    }

    /// Serialize the whole document as SVG markup.
    pub fn to_svg_string(&self) -> String {
        self.root.to_document().to_string()
    }

    /// Build a standalone icon showing a person glyph of diameter `size`.
    ///
    /// The icon uses the same glyph construction as the scene, with empty name
    /// and dates labels, inside an `svg` of `size + 2` on each side.
    pub fn create_person_icon(&mut self, size: f64, gender: Gender, is_child: bool, is_deceased: bool) -> Node {
        let mut svg = self.factory.create_node(NodeKind::Svg);
        svg.set_attribute("width", size + 2.0);
        svg.set_attribute("height", size + 2.0);

        let radius = size / 2.0;
        // Only a birth year is needed to make the glyph count as a child.
        let birth_year = is_child.then(current_year);
        let mut person = Person::new("", "", gender, birth_year, None);
        person.deceased = is_deceased;

        let layout = GlyphLayout::compute(
            Point::new(radius + 1.0, radius + 1.0),
            0.0,
            radius,
            self.style.text_padding,
            false,
        );
        svg.append_child(build_labelled_glyph(
            &mut self.factory,
            &person,
            &layout,
            String::new(),
            String::new(),
        ));
        svg
    }

    fn apply_transform(&mut self) {
        let transform = self.camera.to_svg_transform();
        if let Some(container) = self.root.last_child_mut() {
            container.set_attribute("transform", transform);
        }
    }

    fn build_container(&mut self) -> Node {
        let mut container = self.factory.create_node(NodeKind::Group);
        container.set_attribute("style", "pointer-events: none");
        container.set_attribute("transform", self.camera.to_svg_transform());

        let Some(layout) = self.layout.clone() else {
            return container;
        };

        container.append_child(self.build_scaffolding(&layout.scaffolding));
        for (&id, &position) in &layout.positions {
            let Some(person) = layout.person(id) else {
                log::warn!("No person record for {id}, skipping glyph");
                continue;
            };
            let Some(&rotation) = layout.rotations.get(&id) else {
                log::warn!("No rotation for {id}, skipping glyph");
                continue;
            };
            let glyph = GlyphLayout::compute(
                position,
                rotation,
                layout.person_radius,
                self.style.text_padding,
                layout.is_root(id),
            );
            container.append_child(build_glyph(&mut self.factory, person, &glyph));
        }
        container
    }

    fn build_scaffolding(&mut self, shapes: &[Scaffold]) -> Node {
        let mut path = self.factory.create_node(NodeKind::Path);
        path.set_attribute("d", build_path(shapes));
        path.set_attribute("fill", "none");
        path.set_attribute("stroke", self.style.scaffolding_color.to_css());
        path
    }
}

impl<F: NodeFactory + Send + Sync> Renderer for SvgRenderer<F> {
    fn element(&self) -> &Node {
        &self.root
    }

    fn set_size(&mut self, width: f64, height: f64) {
        if !self.camera.resize(width, height) {
            return;
        }
        set_pixel_size(&mut self.root, width, height);
        self.apply_transform();
    }

    fn size(&self) -> Size {
        self.camera.size
    }

    fn render(&mut self) {
        if !self.dirty && self.container().is_some() {
            return;
        }
        self.dirty = false;
        // Build the replacement completely before swapping it in.
        let container = self.build_container();
        log::debug!("Rebuilt scene with {} nodes", container.children().len());
        self.root.replace_children(container);
    }
}

fn set_pixel_size(root: &mut Node, width: f64, height: f64) {
    root.set_attribute("width", format!("{width}px"));
    root.set_attribute("height", format!("{height}px"));
}
