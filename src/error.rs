// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors returned by the seam carver.
//!
//! Every failure the carver can report is an invalid argument: bad
//! input images, coordinates outside the current image, malformed
//! seams, or a request to shrink a dimension that can't shrink any
//! further.  Nothing is ever retried, and nothing is mutated before
//! the arguments have been checked.

use thiserror::Error;

/// Result alias for seam carving operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The ways in which a caller can hand the carver a bad argument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The source image has no pixels at all.
    #[error("invalid argument: image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A packed pixel buffer doesn't match the claimed dimensions.
    #[error("invalid argument: expected {expected} pixels, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// A pixel query fell outside the current image.
    #[error("invalid argument: ({x}, {y}) is outside a {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A seam must have exactly one entry per row (or column).
    #[error("invalid argument: seam has {actual} entries, expected {expected}")]
    SeamLength { expected: usize, actual: usize },

    /// A seam entry names a column (or row) that doesn't exist.
    #[error("invalid argument: seam entry {index} is {value}, limit is {limit}")]
    SeamOutOfRange { index: usize, value: u32, limit: u32 },

    /// Adjacent seam entries may differ by at most one.
    #[error("invalid argument: seam jumps from {from} to {to} at entry {index}")]
    SeamDiscontinuous { index: usize, from: u32, to: u32 },

    /// The dimension a seam would be removed from is already 1.
    #[error("invalid argument: cannot remove a seam from a dimension of 1")]
    CannotShrink,

    /// Seam removal can only make an image smaller, and never empty.
    #[error("invalid argument: cannot carve {width}x{height} down to {new_width}x{new_height}")]
    InvalidTarget {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },
}
