//! Element handles and the geometry provider seam.
//!
//! The resolver and the scroller never own layout. They read it through
//! [`GeometryProvider`], which a host implements on top of its live element
//! tree. [`LayoutTree`] is a small in-memory implementation used by hosts that
//! lay out elements themselves, and by the tests.

use std::fmt;

use crate::error::{GeometryError, GeometryResult};
use crate::layout::Rect;

/// Opaque handle to an element owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Offset metrics of an element relative to its offset parent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OffsetMetrics {
    /// Distance from the top of the offset parent's content
    pub offset_top: f32,
    /// Height including borders
    pub offset_height: f32,
    /// Height excluding borders and scrollbars
    pub client_height: f32,
}

impl OffsetMetrics {
    /// Metrics for an element without borders (client height == offset height).
    pub fn new(offset_top: f32, height: f32) -> Self {
        Self {
            offset_top,
            offset_height: height,
            client_height: height,
        }
    }
}

/// Scroll metrics of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
    pub offset_height: f32,
}

impl ScrollMetrics {
    /// Largest `scroll_top` the container can actually reach.
    pub fn max_scroll_top(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }
}

/// Read access to live element geometry, plus the one write the scroller needs.
///
/// Every method reads fresh state; implementations must not hand back stale
/// geometry from a previous layout pass.
pub trait GeometryProvider {
    /// Bounding rect in viewport coordinates, or `None` if the element is
    /// unknown or not attached.
    fn bounding_rect(&self, id: ElementId) -> Option<Rect>;

    /// Offset metrics, or `None` if the element is unknown or not attached.
    fn offset_metrics(&self, id: ElementId) -> Option<OffsetMetrics>;

    /// Scroll metrics, or `None` if the element is not a scroll container.
    fn scroll_metrics(&self, id: ElementId) -> Option<ScrollMetrics>;

    /// Parent element, if any.
    fn parent(&self, id: ElementId) -> Option<ElementId>;

    /// Visible area of the whole document.
    fn viewport(&self) -> Rect;

    /// Write the container's scroll offset.
    fn set_scroll_top(&mut self, id: ElementId, scroll_top: f32);

    /// Nearest ancestor that scrolls its content.
    fn scroll_parent(&self, id: ElementId) -> Option<ElementId> {
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.scroll_metrics(ancestor).is_some() {
                return Some(ancestor);
            }
            current = self.parent(ancestor);
        }
        None
    }
}

/// Measure an element, rejecting missing, detached and zero-size elements.
pub fn measure<P: GeometryProvider + ?Sized>(
    provider: &P,
    id: Option<ElementId>,
) -> GeometryResult<Rect> {
    let id = id.ok_or(GeometryError::MissingElement)?;
    let rect = provider
        .bounding_rect(id)
        .ok_or(GeometryError::Detached(id))?;
    if rect.is_empty() {
        return Err(GeometryError::ZeroSize(id));
    }
    Ok(rect)
}

/// Description of an element inserted into a [`LayoutTree`].
#[derive(Debug, Clone)]
pub struct ElementSpec {
    rect: Rect,
    parent: Option<ElementId>,
    offset: Option<OffsetMetrics>,
    scroll_height: Option<f32>,
}

impl ElementSpec {
    /// An element occupying `rect` (viewport coordinates).
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            parent: None,
            offset: None,
            scroll_height: None,
        }
    }

    crate::builder_option!(parent, ElementId);
    crate::builder_option!(offset, OffsetMetrics);

    /// Make the element a scroll container with the given content height.
    pub fn scrollable(mut self, scroll_height: f32) -> Self {
        self.scroll_height = Some(scroll_height);
        self
    }
}

#[derive(Debug, Clone)]
struct Node {
    rect: Rect,
    parent: Option<ElementId>,
    offset: OffsetMetrics,
    scroll: Option<ScrollMetrics>,
    attached: bool,
}

/// In-memory element tree implementing [`GeometryProvider`].
///
/// Scrolling a container shifts the bounding rects of all its descendants,
/// and `scroll_top` is clamped to the reachable range like a browser does.
#[derive(Debug, Clone)]
pub struct LayoutTree {
    viewport: Rect,
    nodes: Vec<Node>,
}

impl LayoutTree {
    /// Create an empty tree with the given viewport.
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            nodes: Vec::new(),
        }
    }

    /// Insert an element and return its handle.
    pub fn insert(&mut self, spec: ElementSpec) -> ElementId {
        let id = ElementId::new(self.nodes.len());
        let offset = spec
            .offset
            .unwrap_or_else(|| OffsetMetrics::new(0.0, spec.rect.height));
        let scroll = spec.scroll_height.map(|scroll_height| ScrollMetrics {
            scroll_top: 0.0,
            scroll_height,
            client_height: offset.client_height,
            offset_height: offset.offset_height,
        });
        self.nodes.push(Node {
            rect: spec.rect,
            parent: spec.parent,
            offset,
            scroll,
            attached: true,
        });
        id
    }

    /// Detach an element and its whole subtree from layout.
    pub fn detach(&mut self, id: ElementId) {
        for index in 0..self.nodes.len() {
            let candidate = ElementId::new(index);
            if self.is_descendant_or_self(candidate, id) {
                self.nodes[index].attached = false;
            }
        }
    }

    /// Replace an element's bounding rect (a new layout pass).
    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.rect = rect;
        }
    }

    /// Current scroll offset of a container.
    pub fn scroll_top(&self, id: ElementId) -> Option<f32> {
        self.scroll_metrics(id).map(|m| m.scroll_top)
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.nodes.get(id.index()).filter(|node| node.attached)
    }

    fn is_descendant_or_self(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.nodes.get(node_id.index()).and_then(|n| n.parent);
        }
        false
    }
}

impl GeometryProvider for LayoutTree {
    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        self.node(id).map(|node| node.rect)
    }

    fn offset_metrics(&self, id: ElementId) -> Option<OffsetMetrics> {
        self.node(id).map(|node| node.offset)
    }

    fn scroll_metrics(&self, id: ElementId) -> Option<ScrollMetrics> {
        self.node(id).and_then(|node| node.scroll)
    }

    fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|node| node.parent)
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn set_scroll_top(&mut self, id: ElementId, scroll_top: f32) {
        let Some(metrics) = self.scroll_metrics(id) else {
            log::trace!("set_scroll_top on non-scrollable element {}", id);
            return;
        };
        let clamped = scroll_top.clamp(0.0, metrics.max_scroll_top());
        let delta = clamped - metrics.scroll_top;

        for index in 0..self.nodes.len() {
            let candidate = ElementId::new(index);
            if candidate != id && self.is_descendant_or_self(candidate, id) {
                self.nodes[index].rect = self.nodes[index].rect.translate(0.0, -delta);
            }
        }
        if let Some(scroll) = self.nodes[id.index()].scroll.as_mut() {
            scroll.scroll_top = clamped;
        }
    }
}
