// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy grid as a picture, for looking at what the carver
//! thinks is important.

use crate::cq;
use crate::energy::CellMap;
use image::{GrayImage, Luma};

/// Scale every energy against the largest one, so that the brightest
/// pixel in the result is the most energetic one in the grid.  The
/// border sentinel usually wins, leaving a white frame.
pub(crate) fn energy_to_image(cells: &CellMap) -> GrayImage {
    let factor = cells.cells().map(|c| c.energy).fold(0.0, f64::max);
    GrayImage::from_fn(cells.width, cells.height, |x, y| {
        let scaled = cq!(factor > 0.0, cells[(x, y)].energy * 255.0 / factor, 0.0);
        Luma([scaled.round().max(0.0).min(255.0) as u8])
    })
}
