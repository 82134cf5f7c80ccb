// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The carver itself
//!
//! A `SeamCarver` owns a working copy of an image, together with the
//! energy of every pixel, and shrinks it one seam at a time.  Vertical
//! and horizontal operations share one implementation: the carver lays
//! its storage out so that the requested seam runs top to bottom, then
//! finds or removes a vertical seam.
//!
//! Removing a seam only disturbs the pixels on either side of it, so
//! only their energies are recomputed; everything else in the energy
//! grid stays exactly as it was.

use crate::cq;
use crate::dump::energy_to_image;
use crate::energy::{calculate_energy, recalculate_energy, Cell};
use crate::error::{Error, Result};
use crate::flipper::{Flipper, Orientation};
use crate::pixelpairs::{pack_rgb, unpack_rgb};
use crate::seamfinder::{energy_to_seam, SeamDigraph, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, GrayImage, ImageBuffer, Pixel, RgbImage};
use itertools::iproduct;
use log::{debug, trace};

/// Holds the image being carved, and the energy of every pixel in it.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    flipper: Flipper,
    scratch: SeamDigraph,
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    Ok(())
}

// A seam removed from a dimension of `limit` cells must have `length`
// entries, each below `limit`, each within one of its neighbor.
fn check_seam(seam: &[u32], length: u32, limit: u32) -> Result<()> {
    if limit <= 1 {
        return Err(Error::CannotShrink);
    }
    if seam.len() != length as usize {
        return Err(Error::SeamLength {
            expected: length as usize,
            actual: seam.len(),
        });
    }
    if let Some((index, &value)) = seam.iter().enumerate().find(|&(_, &v)| v >= limit) {
        return Err(Error::SeamOutOfRange {
            index,
            value,
            limit,
        });
    }
    if let Some(index) = seam.windows(2).position(|w| w[0].max(w[1]) - w[0].min(w[1]) > 1) {
        return Err(Error::SeamDiscontinuous {
            index: index + 1,
            from: seam[index],
            to: seam[index + 1],
        });
    }
    Ok(())
}

impl SeamCarver {
    /// Creates a new SeamCarver from any image with 8-bit channels.
    /// Each pixel is reduced to RGB; alpha is ignored.
    pub fn new<I, P>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = image.dimensions();
        check_dimensions(width, height)?;
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| Cell::new(pack_rgb(&image.get_pixel(x, y))))
            .collect();
        Ok(Self::from_cells(width, height, cells))
    }

    /// Creates a new SeamCarver from a row-major buffer of `0xRRGGBB`
    /// pixels.  Bits above the low 24 are ignored.
    pub fn from_packed(width: u32, height: u32, pixels: &[u32]) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        let cells = pixels.iter().map(|&p| Cell::new(p & 0x00ff_ffff)).collect();
        Ok(Self::from_cells(width, height, cells))
    }

    fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Self {
        let mut map = TwoDimensionalMap::from_vec(width, height, cells);
        calculate_energy(&mut map);
        debug!("seam carver ready for a {}x{} image", width, height);
        SeamCarver {
            flipper: Flipper::new(map),
            scratch: SeamDigraph::new(0, 0),
        }
    }

    /// Current width of the picture.
    pub fn width(&self) -> u32 {
        self.flipper.width()
    }

    /// Current height of the picture.
    pub fn height(&self) -> u32 {
        self.flipper.height()
    }

    /// The energy of the pixel at column `x`, row `y`.  Border pixels
    /// always report [`BORDER_ENERGY`](crate::BORDER_ENERGY).
    pub fn energy(&self, x: u32, y: u32) -> Result<f64> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        let point = self.flipper.storage_point(x, y);
        Ok(self.flipper.cells()[point].energy)
    }

    /// A snapshot of the picture as it currently stands.
    pub fn to_image(&mut self) -> RgbImage {
        let cells = self.flipper.orient(Orientation::Upright);
        ImageBuffer::from_fn(cells.width, cells.height, |x, y| {
            unpack_rgb(cells[(x, y)].color)
        })
    }

    /// A snapshot of the picture as row-major `0xRRGGBB` values.
    pub fn to_packed(&mut self) -> Vec<u32> {
        let cells = self.flipper.orient(Orientation::Upright);
        cells.cells().map(|c| c.color).collect()
    }

    /// The current energy grid rendered as a greyscale image, brightest
    /// where the energy is highest.
    pub fn energy_image(&mut self) -> GrayImage {
        energy_to_image(self.flipper.orient(Orientation::Upright))
    }

    /// Remove a vertical seam: one column index per row, as returned by
    /// [`SeamFinder::find_vertical_seam`].
    pub fn remove_vertical_seam(&mut self, seam: &[u32]) -> Result<()> {
        check_seam(seam, self.height(), self.width())?;
        self.remove_seam(Orientation::Upright, seam);
        Ok(())
    }

    /// Remove a horizontal seam: one row index per column, as returned
    /// by [`SeamFinder::find_horizontal_seam`].
    pub fn remove_horizontal_seam(&mut self, seam: &[u32]) -> Result<()> {
        check_seam(seam, self.width(), self.height())?;
        self.remove_seam(Orientation::Transposed, seam);
        Ok(())
    }

    // The seam has been checked; from here on nothing can fail.
    fn remove_seam(&mut self, orientation: Orientation, seam: &[u32]) {
        let cells = self.flipper.orient(orientation);
        cells.remove_seam(seam);
        for (y, &x) in seam.iter().enumerate() {
            let y = y as u32;
            if x > 0 {
                recalculate_energy(cells, x - 1, y);
            }
            recalculate_energy(cells, x, y);
        }
        debug!(
            "removed a {} seam, picture is now {}x{}",
            cq!(orientation == Orientation::Upright, "vertical", "horizontal"),
            self.width(),
            self.height()
        );
    }

    fn seam(&mut self, orientation: Orientation) -> Vec<u32> {
        let cells = self.flipper.orient(orientation);
        let seam = energy_to_seam(cells, &mut self.scratch);
        trace!("found seam {:?}", seam);
        seam
    }

    fn carve_once(&mut self, orientation: Orientation) {
        let seam = self.seam(orientation);
        self.remove_seam(orientation, &seam);
    }

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image.  While both dimensions still need to shrink, the
    /// carver alternates between columns and rows.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if new_width == 0 || new_height == 0 || new_width > width || new_height > height {
            return Err(Error::InvalidTarget {
                width,
                height,
                new_width,
                new_height,
            });
        }

        // Upright storage means vertical seams, which narrow the
        // picture; transposed storage means horizontal seams.
        let mut direction = Orientation::Upright;
        while self.width() > new_width && self.height() > new_height {
            self.carve_once(direction);
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.carve_once(Orientation::Upright);
        }
        while self.height() > new_height {
            self.carve_once(Orientation::Transposed);
        }
        Ok(())
    }
}

impl SeamFinder for SeamCarver {
    fn find_horizontal_seam(&mut self) -> Vec<u32> {
        self.seam(Orientation::Transposed)
    }

    fn find_vertical_seam(&mut self) -> Vec<u32> {
        self.seam(Orientation::Upright)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::BORDER_ENERGY;
    use image::{Rgb, Rgba};

    // A 6x5 picture with a recognizable interior.
    const PIXELS: [u32; 30] = [
        0x4e_8a_0c, 0x1f_d3_77, 0xa5_02_3b, 0x90_90_90, 0x11_22_33, 0xcc_44_00, //
        0x33_33_33, 0x00_ff_80, 0x40_40_40, 0xde_ad_be, 0x12_12_12, 0x7f_00_7f, //
        0xff_ff_ff, 0x10_20_30, 0x80_80_80, 0x81_81_81, 0x0f_0f_0f, 0x55_aa_55, //
        0x20_40_60, 0x66_66_66, 0xc0_ff_ee, 0x88_00_88, 0x01_02_03, 0xaa_bb_cc, //
        0x99_00_00, 0x00_99_00, 0x00_00_99, 0x99_99_00, 0x00_99_99, 0x99_00_99,
    ];

    fn carver() -> SeamCarver {
        SeamCarver::from_packed(6, 5, &PIXELS).unwrap()
    }

    fn fresh_energies(carver: &mut SeamCarver) -> Vec<f64> {
        let (width, height) = (carver.width(), carver.height());
        let fresh = SeamCarver::from_packed(width, height, &carver.to_packed()).unwrap();
        iproduct!(0..height, 0..width)
            .map(|(y, x)| fresh.energy(x, y).unwrap())
            .collect()
    }

    fn energies(carver: &SeamCarver) -> Vec<f64> {
        iproduct!(0..carver.height(), 0..carver.width())
            .map(|(y, x)| carver.energy(x, y).unwrap())
            .collect()
    }

    #[test]
    fn builds_from_an_image_buffer() {
        let buf: ImageBuffer<Rgba<u8>, _> =
            ImageBuffer::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let mut carver = SeamCarver::new(&buf).unwrap();
        assert_eq!((carver.width(), carver.height()), (3, 2));
        assert_eq!(carver.to_image().get_pixel(2, 1), &Rgb([2, 1, 7]));
    }

    #[test]
    fn rejects_empty_images() {
        let buf: RgbImage = ImageBuffer::new(0, 4);
        assert_eq!(
            SeamCarver::new(&buf).unwrap_err(),
            Error::EmptyImage { width: 0, height: 4 }
        );
        assert!(SeamCarver::from_packed(3, 0, &[]).is_err());
    }

    #[test]
    fn rejects_short_buffers() {
        assert_eq!(
            SeamCarver::from_packed(2, 2, &[0, 0, 0]).unwrap_err(),
            Error::BufferSize { expected: 4, actual: 3 }
        );
    }

    #[test]
    fn energy_is_orientation_independent() {
        let mut carver = carver();
        let upright = energies(&carver);
        carver.find_horizontal_seam();
        assert_eq!(energies(&carver), upright);
    }

    #[test]
    fn removal_recomputes_only_what_changed_and_stays_exact() {
        let mut carver = carver();
        let seam = carver.find_vertical_seam();
        carver.remove_vertical_seam(&seam).unwrap();
        assert_eq!(energies(&carver), fresh_energies(&mut carver));

        let seam = carver.find_horizontal_seam();
        carver.remove_horizontal_seam(&seam).unwrap();
        assert_eq!(energies(&carver), fresh_energies(&mut carver));
    }

    #[test]
    fn removal_along_the_left_edge() {
        let mut carver = carver();
        carver.remove_vertical_seam(&[0, 0, 1, 0, 0]).unwrap();
        assert_eq!(carver.width(), 5);
        assert_eq!(energies(&carver), fresh_energies(&mut carver));
        assert_eq!(carver.to_packed()[0], PIXELS[1]);
    }

    #[test]
    fn rejected_seams_leave_the_carver_alone() {
        let mut carver = carver();
        let before = carver.to_packed();
        assert_eq!(
            carver.remove_vertical_seam(&[1, 1, 1]),
            Err(Error::SeamLength { expected: 5, actual: 3 })
        );
        assert_eq!(
            carver.remove_vertical_seam(&[1, 1, 6, 1, 1]),
            Err(Error::SeamOutOfRange { index: 2, value: 6, limit: 6 })
        );
        assert_eq!(
            carver.remove_vertical_seam(&[1, 2, 4, 4, 4]),
            Err(Error::SeamDiscontinuous { index: 2, from: 2, to: 4 })
        );
        assert_eq!(
            carver.remove_horizontal_seam(&[0, 1, 2, 3, 4]),
            Err(Error::SeamLength { expected: 6, actual: 5 })
        );
        assert_eq!((carver.width(), carver.height()), (6, 5));
        assert_eq!(carver.to_packed(), before);
    }

    #[test]
    fn out_of_bounds_energy() {
        let carver = carver();
        assert_eq!(
            carver.energy(6, 0),
            Err(Error::OutOfBounds { x: 6, y: 0, width: 6, height: 5 })
        );
        assert!(carver.energy(0, 5).is_err());
        assert_eq!(carver.energy(5, 4), Ok(BORDER_ENERGY));
    }

    #[test]
    fn carve_alternates_down_to_size() {
        let mut carver = carver();
        carver.carve(3, 3).unwrap();
        assert_eq!((carver.width(), carver.height()), (3, 3));
        assert_eq!(carver.to_image().dimensions(), (3, 3));
        assert_eq!(energies(&carver), fresh_energies(&mut carver));
    }

    #[test]
    fn carve_refuses_to_grow() {
        let mut carver = carver();
        assert!(carver.carve(7, 5).is_err());
        assert!(carver.carve(6, 0).is_err());
        assert_eq!((carver.width(), carver.height()), (6, 5));
        carver.carve(6, 5).unwrap();
        assert_eq!(carver.to_packed(), PIXELS.to_vec());
    }

    #[test]
    fn energy_image_matches_dimensions() {
        let mut carver = carver();
        carver.find_horizontal_seam();
        let image = carver.energy_image();
        assert_eq!(image.dimensions(), (6, 5));
        assert_eq!(image.get_pixel(0, 0).0, [255]);
    }
}
