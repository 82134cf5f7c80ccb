// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between the colors that make them up: the classic
//! d(R^2) + d(G^2) + d(B^2).
//!
//! Pixels are carried around packed into a `u32` as `0xRRGGBB`.  Byte
//! 0 is blue, and each 8-bit shift to the right walks one channel
//! toward red; anything above the low 24 bits is ignored.

use image::{Pixel, Rgb};

/// Pack an RGB pixel into `0xRRGGBB`.
#[inline]
pub fn pack_rgb<P: Pixel<Subpixel = u8>>(pixel: &P) -> u32 {
    let Rgb([r, g, b]) = pixel.to_rgb();
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Unpack `0xRRGGBB` into an RGB pixel.
#[inline]
pub fn unpack_rgb(packed: u32) -> Rgb<u8> {
    let [b, g, r] = channels(packed);
    Rgb([r, g, b])
}

/// The three color channels of a packed pixel, blue first.
#[inline]
fn channels(packed: u32) -> [u8; 3] {
    [packed as u8, (packed >> 8) as u8, (packed >> 16) as u8]
}

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
//
/// (Pixel, Pixel) -> Energy
#[inline]
pub fn energy_of_pair(p1: u32, p2: u32) -> u32 {
    channels(p1)
        .iter()
        .zip(channels(p2).iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn packs_red_high_blue_low() {
        assert_eq!(pack_rgb(&Rgb([0x12, 0x34, 0x56])), 0x12_34_56);
        assert_eq!(unpack_rgb(0x12_34_56), Rgb([0x12, 0x34, 0x56]));
    }

    #[test]
    fn alpha_is_ignored() {
        assert_eq!(pack_rgb(&Rgba([1, 2, 3, 200])), 0x01_02_03);
        assert_eq!(unpack_rgb(0xff_01_02_03), Rgb([1, 2, 3]));
        assert_eq!(energy_of_pair(0xff_00_00_00, 0x00_00_00_00), 0);
    }

    #[test]
    fn pair_energy_sums_squared_channel_differences() {
        assert_eq!(energy_of_pair(0x00_00_00, 0x00_00_00), 0);
        assert_eq!(energy_of_pair(0xff_00_00, 0x00_00_00), 255 * 255);
        assert_eq!(energy_of_pair(0x0a_14_1e, 0x0c_10_1f), 4 + 16 + 1);
        assert_eq!(energy_of_pair(0x0c_10_1f, 0x0a_14_1e), 4 + 16 + 1);
    }
}
