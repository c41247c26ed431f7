//! Geometry read failures.
//!
//! These never cross the public API of the resolver or the scroller: they are
//! logged and collapsed into "no change".

use thiserror::Error;

use crate::tree::ElementId;

/// Why a geometry snapshot could not be taken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// No element handle was supplied (e.g. the ref is not set yet)
    #[error("no element handle")]
    MissingElement,

    /// The element exists but is not attached to the layout tree
    #[error("element {0} is not attached to the layout tree")]
    Detached(ElementId),

    /// The element is attached but has no measurable area
    #[error("element {0} has zero size")]
    ZeroSize(ElementId),
}

/// Result alias for geometry reads.
pub type GeometryResult<T> = Result<T, GeometryError>;
