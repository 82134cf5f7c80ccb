// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam
//!
//! A shortest-path search over the energy grid, treating each cell's
//! energy as the cost of stepping onto it.  The search always looks
//! for a vertical seam; the carver flips the storage first when it
//! wants a horizontal one.

use crate::cq;
use crate::energy::CellMap;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use std::ops::Range;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple seam
/// carvers.  Finding a seam may reorganize the finder's storage, so it
/// takes the finder mutably.
pub trait SeamFinder {
    /// Request a horizontal seam: one row index per column, left to
    /// right.
    fn find_horizontal_seam(&mut self) -> Vec<u32>;

    /// Request a vertical seam: one column index per row, top to
    /// bottom.
    fn find_vertical_seam(&mut self) -> Vec<u32>;
}

/// The cheapest total energy to reach each cell from the top row, and
/// the column it was reached from.
pub(crate) type SeamDigraph = TwoDimensionalMap<EnergyAndBackPointer<f64>>;

// Border columns carry the sentinel energy and can never be part of a
// cheapest seam, so they're skipped as sources and as endpoints.  An
// image two or fewer columns wide has no interior; there every column
// is fair game.
fn seam_columns(width: u32) -> Range<u32> {
    cq!(width > 2, 1..width - 1, 0..width)
}

/// Given the working cells, return the list of x-coordinates that,
/// when mapped with the range (0..height), give the XY coordinates for
/// each pixel in the cheapest vertical seam.  `target` is scratch
/// space; it is reshaped to fit and may be reused between calls.
pub(crate) fn energy_to_seam(cells: &CellMap, target: &mut SeamDigraph) -> Vec<u32> {
    let (width, height) = (cells.width, cells.height);
    let unreached = EnergyAndBackPointer {
        energy: f64::INFINITY,
        parent: 0,
    };
    target.reset(width, height, unreached);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)] = EnergyAndBackPointer {
            energy: cells[(x, 0)].energy,
            parent: x,
        };
    }

    let maxwidth = width - 1;
    // For every row, push each source cell's total down onto the three
    // cells below it, keeping whichever total is lowest and the column
    // it came from.
    for y in 0..height - 1 {
        for x in seam_columns(width) {
            let here = target[(x, y)].energy;
            let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
            for below in range {
                let energy = here + cells[(below, y + 1)].energy;
                if energy < target[(below, y + 1)].energy {
                    target[(below, y + 1)] = EnergyAndBackPointer { energy, parent: x };
                }
            }
        }
    }

    // Find the x coordinate of the bottommost seam with the least
    // energy.  Ties go to the leftmost column.
    let bottom = height - 1;
    let mut seam_col = seam_columns(width).start;
    for x in seam_columns(width) {
        if target[(x, bottom)].energy < target[(seam_col, bottom)].energy {
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    (0..height)
        .rev()
        .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect()
}
