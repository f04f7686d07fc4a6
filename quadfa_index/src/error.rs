// Copyright 2025 the Quadfa Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the geometry constructors and the containers.

use crate::types::{Bound, Vec2};

/// Pre-condition violations reported to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An item was offered to a container whose outer bound does not contain it.
    /// Nothing was inserted.
    #[error("item bound {bound} is not contained in the container bound {outer}")]
    OutOfBounds {
        /// Bound of the rejected item.
        bound: Bound,
        /// Fixed outer bound of the container.
        outer: Bound,
    },
    /// A bound was built from corners that are inverted on at least one axis.
    #[error("inverted bound corners: top-left {top_left:?} lies past bottom-right {bottom_right:?}")]
    InvalidBound {
        /// Requested top-left corner.
        top_left: Vec2,
        /// Requested bottom-right corner.
        bottom_right: Vec2,
    },
}

/// Result alias using [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
