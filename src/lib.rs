// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A [`SeamCarver`] takes a decoded image and shrinks it one seam at a
//! time, where a seam is a connected path of pixels running from one
//! edge to the opposite edge through the parts of the picture with the
//! least color gradient.
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use seamcarve::{SeamCarver, SeamFinder};
//!
//! let picture = RgbImage::from_fn(8, 6, |x, y| Rgb([(x * 30) as u8, (y * 40) as u8, 90]));
//! let mut carver = SeamCarver::new(&picture)?;
//! let seam = carver.find_vertical_seam();
//! carver.remove_vertical_seam(&seam)?;
//! assert_eq!(carver.to_image().dimensions(), (7, 6));
//! # Ok::<(), seamcarve::Error>(())
//! ```

// #![deny(missing_docs)]

mod dump;
mod energy;
pub mod error;
mod flipper;
mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
mod ternary;
mod twodmap;

pub use energy::BORDER_ENERGY;
pub use error::{Error, Result};
pub use pixelpairs::{pack_rgb, unpack_rgb};
pub use seamcarver::SeamCarver;
pub use seamfinder::SeamFinder;
