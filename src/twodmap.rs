// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional maps
//!
//! An addressable two-dimensional field containing an object that
//! represents one of several possible objects during processing: the
//! pixel-and-energy cell of the carver's working image, or an energy
//! total + parent address, for the seam digraph.
//!
//! The map keeps a *stride* separate from its logical width.  Removing
//! a seam compacts each row in place and narrows the logical width,
//! but leaves every row where it was; the unused tail of each row is
//! simply never read again.  Transposing produces a fresh, tightly
//! packed map.

use itertools::iproduct;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    stride: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new (abstract) map.  The content type must implement
    /// the Default trait.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            stride: width,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  The caller guarantees that
    /// the buffer holds exactly `width * height` values.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        TwoDimensionalMap {
            width,
            height,
            stride: width,
            data,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs, except that
    // rows are `stride` apart rather than `width` apart.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.stride as usize) + (x as usize)
    }

    /// The live cells of a single row.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Resize the map to `width` x `height` and fill every cell with
    /// `value`, reusing the existing allocation where it's big enough.
    pub fn reset(&mut self, width: u32, height: u32, value: P) {
        self.width = width;
        self.height = height;
        self.stride = width;
        self.data.clear();
        self.data.resize(width as usize * height as usize, value);
    }

    /// A copy of this map with rows and columns exchanged: the cell at
    /// (x, y) lands at (y, x).  The copy is tightly packed, so a map
    /// narrowed by seam removal sheds its dead row tails here.
    pub fn transpose(&self) -> Self {
        // Walking x in the outer loop and y in the inner produces the
        // new map's cells in its own row-major order.
        let data = iproduct!(0..self.width, 0..self.height)
            .map(|(x, y)| self[(x, y)])
            .collect();
        TwoDimensionalMap::from_vec(self.height, self.width, data)
    }

    /// Delete the cell at `seam[y]` from every row `y`, shifting the
    /// remainder of each row one place to the left, and narrow the map
    /// by one column.  The seam must already have been validated
    /// against this map.
    pub fn remove_seam(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.height as usize);
        debug_assert!(self.width > 1);
        for (y, &x) in seam.iter().enumerate() {
            let start = self.get_index(x, y as u32);
            let end = self.get_index(self.width, y as u32);
            self.data.copy_within(start + 1..end, start);
        }
        self.width -= 1;
    }

    /// Every live cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = P> + '_ {
        (0..self.height).flat_map(move |y| self.row(y).iter().copied())
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// A node of the seam digraph: the cheapest total energy of any path
/// from the top row to this cell, and the column it arrived from.
#[derive(Default, Debug, Copy, Clone, PartialEq)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}
