// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The dual-gradient energy of an interior pixel is the square root of
//! the squared color difference between its left and right neighbors
//! plus the squared color difference between its upper and lower
//! neighbors.  Pixels on the border don't have all four neighbors, and
//! are given a fixed energy well above anything a gradient can
//! produce, so that a seam never prefers them.
//!
//! Energies are stored already rooted; a seam's cost is the plain sum
//! of the energies along it.

use crate::cq;
use crate::pixelpairs::energy_of_pair;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;

/// The energy of every pixel on the image's border.
pub const BORDER_ENERGY: f64 = 1000.0;

/// One pixel of the working image: its packed color and the energy
/// derived from its neighborhood.  The two always travel together,
/// through transposes and seam removals alike.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct Cell {
    pub color: u32,
    pub energy: f64,
}

impl Cell {
    pub fn new(color: u32) -> Self {
        Cell { color, energy: 0.0 }
    }
}

pub(crate) type CellMap = TwoDimensionalMap<Cell>;

// (Map, x, y) -> Energy
/// Compute the dual-gradient energy of the pixel at (x, y) from its
/// current neighbors.
pub(crate) fn energy_at(map: &CellMap, x: u32, y: u32) -> f64 {
    let on_border = x == 0 || y == 0 || x + 1 >= map.width || y + 1 >= map.height;
    cq!(on_border, BORDER_ENERGY, {
        let color = |x, y| map[(x, y)].color;
        let dx = energy_of_pair(color(x - 1, y), color(x + 1, y));
        let dy = energy_of_pair(color(x, y - 1), color(x, y + 1));
        f64::from(dx + dy).sqrt()
    })
}

/// Compute the energy of every pixel in the map.
pub(crate) fn calculate_energy(map: &mut CellMap) {
    for (y, x) in iproduct!(0..map.height, 0..map.width) {
        let energy = energy_at(map, x, y);
        map[(x, y)].energy = energy;
    }
}

/// Recompute the energy of a single pixel after its neighborhood has
/// changed.  Coordinates past the right edge are ignored.
pub(crate) fn recalculate_energy(map: &mut CellMap, x: u32, y: u32) {
    if x < map.width && y < map.height {
        let energy = energy_at(map, x, y);
        map[(x, y)].energy = energy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 3x4 image with two interior pixels: sqrt(41616 + 10609) at
    // (1, 1) and sqrt(41616 + 10404) at (1, 2).
    const PIXELS: [u32; 12] = [
        0xff_65_33, 0xff_65_99, 0xff_65_ff, //
        0xff_99_33, 0xff_99_99, 0xff_99_ff, //
        0xff_cc_33, 0xff_cc_99, 0xff_cc_ff, //
        0xff_ff_33, 0xff_ff_99, 0xff_ff_ff,
    ];

    fn sample() -> CellMap {
        let cells = PIXELS.iter().map(|&p| Cell::new(p)).collect();
        let mut map = TwoDimensionalMap::from_vec(3, 4, cells);
        calculate_energy(&mut map);
        map
    }

    #[test]
    fn interior_energy_is_dual_gradient() {
        let map = sample();
        assert!((map[(1, 1)].energy - 52225f64.sqrt()).abs() < 1e-9);
        assert!((map[(1, 2)].energy - 52020f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn border_energy_is_sentinel() {
        let map = sample();
        for (x, y) in iproduct!(0..3, 0..4) {
            if x == 1 && (y == 1 || y == 2) {
                continue;
            }
            assert_eq!(map[(x, y)].energy, BORDER_ENERGY, "at ({}, {})", x, y);
        }
    }

    #[test]
    fn flat_image_has_zero_interior_energy() {
        let mut map = TwoDimensionalMap::from_vec(4, 4, vec![Cell::new(0x40_80_c0); 16]);
        calculate_energy(&mut map);
        assert_eq!(map[(1, 1)].energy, 0.0);
        assert_eq!(map[(2, 2)].energy, 0.0);
        assert_eq!(map[(0, 2)].energy, BORDER_ENERGY);
    }

    #[test]
    fn tiny_images_are_all_border() {
        let cells = vec![Cell::new(0), Cell::new(0xff_ff_ff)];
        let mut map = TwoDimensionalMap::from_vec(2, 1, cells);
        calculate_energy(&mut map);
        assert!(map.cells().all(|c| c.energy == BORDER_ENERGY));
    }

    #[test]
    fn recalculate_ignores_dead_columns() {
        let mut map = sample();
        recalculate_energy(&mut map, 3, 1);
        recalculate_energy(&mut map, 1, 1);
        assert!((map[(1, 1)].energy - 52225f64.sqrt()).abs() < 1e-9);
    }
}
