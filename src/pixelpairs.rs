// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the distance between
//! the colors that make them up: the sum of the absolute differences
//! of their red, green, and blue channels.  Whatever the source pixel
//! format, the pair is compared through its RGB projection.

use image::{Pixel, Primitive};
use itertools::zip;
use num_traits::NumCast;

/// (Pixel, Pixel) -> Energy
///
/// Given a pair of pixels, calculate the energy between them: the
/// summed absolute per-channel difference, `|Δr| + |Δg| + |Δb|`.  For
/// 8-bit channels this lands in 0..=765; it is never negative.
#[inline]
pub fn absdiff_of_pair<P, S>(p1: &P, p2: &P) -> f32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (rgb1, rgb2) = (p1.to_rgb(), p2.to_rgb());
    zip(rgb1.channels(), rgb2.channels())
        .map(|(c1, c2)| {
            let c1: i32 = NumCast::from(*c1).unwrap();
            let c2: i32 = NumCast::from(*c2).unwrap();
            (c1 - c2).abs()
        })
        .sum::<i32>() as f32
}
