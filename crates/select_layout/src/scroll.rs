//! Scroll a menu list just enough to show its focused option.
//!
//! An overscroll margin (a fraction of the focused item's height) is added so
//! the neighbouring option stays partially visible.

use crate::constants::OVERSCROLL_RATIO;
use crate::error::{GeometryError, GeometryResult};
use crate::layout::Rect;
use crate::tree::{measure, ElementId, GeometryProvider};

/// Geometry of the scroll container at call time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSnapshot {
    pub rect: Rect,
    pub scroll_top: f32,
    pub offset_height: f32,
    pub scroll_height: f32,
}

/// Geometry of the focused item at call time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSnapshot {
    pub rect: Rect,
    pub offset_top: f32,
    pub offset_height: f32,
    pub client_height: f32,
}

/// Brings a focused item into view inside its scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollIntoView {
    /// Fraction of the item's height used as overscroll margin
    pub overscroll_ratio: f32,
}

impl Default for ScrollIntoView {
    fn default() -> Self {
        Self {
            overscroll_ratio: OVERSCROLL_RATIO,
        }
    }
}

impl ScrollIntoView {
    pub fn new(overscroll_ratio: f32) -> Self {
        Self { overscroll_ratio }
    }

    crate::builder_field!(overscroll_ratio, f32);

    /// Compute the new `scroll_top`, or `None` when no scroll is needed.
    pub fn compute(&self, container: &ContainerSnapshot, item: &ItemSnapshot) -> Option<f32> {
        if container.rect.height <= 0.0 || item.rect.height <= 0.0 {
            return None;
        }

        let overscroll = item.offset_height * self.overscroll_ratio;

        if item.rect.bottom() + overscroll > container.rect.bottom() {
            let target =
                item.offset_top + item.client_height - container.offset_height + overscroll;
            Some(target.min(container.scroll_height))
        } else if item.rect.top() - overscroll < container.rect.top() {
            Some((item.offset_top - overscroll).max(0.0))
        } else {
            None
        }
    }

    /// Measure both elements and write the container's `scroll_top` if the
    /// item is not already visible. Returns the container's `scroll_top` as
    /// read back after the write, which the provider may have clamped.
    ///
    /// Unmeasurable elements make this a no-op.
    pub fn ensure_visible<P: GeometryProvider + ?Sized>(
        &self,
        provider: &mut P,
        container: ElementId,
        focused: ElementId,
    ) -> Option<f32> {
        let snapshots = snapshot_container(&*provider, container)
            .and_then(|c| snapshot_item(&*provider, focused).map(|i| (c, i)));

        let (container_snapshot, item_snapshot) = match snapshots {
            Ok(pair) => pair,
            Err(err) => {
                log::trace!("scroll into view skipped: {}", err);
                return None;
            }
        };

        let scroll_top = self.compute(&container_snapshot, &item_snapshot)?;
        log::trace!(
            "scrolling {} from {} to {} to show {}",
            container,
            container_snapshot.scroll_top,
            scroll_top,
            focused
        );
        provider.set_scroll_top(container, scroll_top);
        provider
            .scroll_metrics(container)
            .map(|metrics| metrics.scroll_top)
    }
}

/// Read a container snapshot through the provider.
pub fn snapshot_container<P: GeometryProvider + ?Sized>(
    provider: &P,
    id: ElementId,
) -> GeometryResult<ContainerSnapshot> {
    let rect = measure(provider, Some(id))?;
    let scroll = provider
        .scroll_metrics(id)
        .ok_or(GeometryError::Detached(id))?;
    Ok(ContainerSnapshot {
        rect,
        scroll_top: scroll.scroll_top,
        offset_height: scroll.offset_height,
        scroll_height: scroll.scroll_height,
    })
}

/// Read an item snapshot through the provider.
pub fn snapshot_item<P: GeometryProvider + ?Sized>(
    provider: &P,
    id: ElementId,
) -> GeometryResult<ItemSnapshot> {
    let rect = measure(provider, Some(id))?;
    let offset = provider
        .offset_metrics(id)
        .ok_or(GeometryError::Detached(id))?;
    Ok(ItemSnapshot {
        rect,
        offset_top: offset.offset_top,
        offset_height: offset.offset_height,
        client_height: offset.client_height,
    })
}
