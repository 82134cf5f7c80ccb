// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Every seam algorithm in this crate works on *vertical* seams: one
//! cell per row, with the column varying.  Horizontal seams are found
//! and removed by flipping the working image 90°, so that each column
//! of the picture becomes a contiguous row in memory, and running the
//! same vertical-seam code on that.
//!
//! The flip is a real copy of the data, not a proxy that swaps x and y
//! on every access.  The seam search walks the storage row by row, and
//! keeping those rows contiguous in the orientation being carved is
//! the entire point.

use crate::energy::CellMap;
use log::debug;

/// Which way the working storage is currently laid out relative to
/// the picture the caller sees.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub(crate) enum Orientation {
    /// Storage rows are picture rows.
    Upright,
    /// Storage rows are picture columns.
    Transposed,
}

impl Orientation {
    pub fn turn(self) -> Self {
        match self {
            Orientation::Upright => Orientation::Transposed,
            Orientation::Transposed => Orientation::Upright,
        }
    }
}

/// Owns the working cells and the orientation they're stored in.
#[derive(Debug, Clone)]
pub(crate) struct Flipper {
    cells: CellMap,
    orientation: Orientation,
}

impl Flipper {
    pub fn new(cells: CellMap) -> Self {
        Flipper {
            cells,
            orientation: Orientation::Upright,
        }
    }

    /// The cells, in whatever orientation they currently have.
    pub fn cells(&self) -> &CellMap {
        &self.cells
    }

    /// Lay the storage out in `orientation`, transposing if it isn't
    /// already, and hand back the cells.  Asking for the current
    /// orientation costs nothing.
    pub fn orient(&mut self, orientation: Orientation) -> &mut CellMap {
        if self.orientation != orientation {
            debug!(
                "flipping {}x{} storage to {:?}",
                self.cells.width, self.cells.height, orientation
            );
            self.cells = self.cells.transpose();
            self.orientation = orientation;
        }
        &mut self.cells
    }

    /// Picture width, whichever way the storage lies.
    pub fn width(&self) -> u32 {
        match self.orientation {
            Orientation::Upright => self.cells.width,
            Orientation::Transposed => self.cells.height,
        }
    }

    /// Picture height, whichever way the storage lies.
    pub fn height(&self) -> u32 {
        match self.orientation {
            Orientation::Upright => self.cells.height,
            Orientation::Transposed => self.cells.width,
        }
    }

    /// Map a picture coordinate to a storage coordinate.
    pub fn storage_point(&self, x: u32, y: u32) -> (u32, u32) {
        match self.orientation {
            Orientation::Upright => (x, y),
            Orientation::Transposed => (y, x),
        }
    }
}
