// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given an image, calculate the energy map and the cheapest vertical
//! seam through it.  The energy formula is the plain channel-difference
//! gradient; height-wise carving is handled by rotating the image and
//! reusing the vertical machinery, so there is no horizontal variant
//! here.

use crate::cq;
use crate::grid::Grid;
use crate::pixelpairs::absdiff_of_pair as energy_of_pixel_pair;
use image::{GenericImageView, Pixel, Primitive};
use log::trace;

/// One cell of the seam finder's working table: the minimum total
/// energy of any top-to-bottom path ending here, plus the column in the
/// row above that path came through.
#[derive(Default, Debug, Copy, Clone)]
struct CostCell {
    cost: f32,
    parent: u32,
}

// Image -> Energy Map

/// Compute the energy of every pixel in an image: the summed absolute
/// channel difference between the horizontal neighbors plus the same
/// for the vertical neighbors.  At a border, the missing neighbor is
/// replaced by the pixel itself, which shrinks the gradient there
/// instead of wrapping around or erroring.  Values stay within
/// 0.0..=1530.0 for 8-bit channels.
///
/// Panics on a zero-width or zero-height image; carve preconditions
/// are checked at the orchestration boundary, and by the time an image
/// reaches this function it must have pixels.
pub fn calculate_energy<I, P, S>(image: &I) -> Grid<f32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert!(
        width > 0 && height > 0,
        "energy of a zero-area image ({}x{}) is undefined",
        width,
        height
    );
    let (mw, mh) = (width - 1, height - 1);

    let mut emap = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let current_pixel = image.get_pixel(x, y);
            let (leftpixel, rightpixel, uppixel, downpixel) = (
                cq!(x == 0, current_pixel, image.get_pixel(x - 1, y)),
                cq!(x >= mw, current_pixel, image.get_pixel(x + 1, y)),
                cq!(y == 0, current_pixel, image.get_pixel(x, y - 1)),
                cq!(y >= mh, current_pixel, image.get_pixel(x, y + 1)),
            );
            emap[(x, y)] = energy_of_pixel_pair(&leftpixel, &rightpixel)
                + energy_of_pixel_pair(&uppixel, &downpixel);
        }
    }
    emap
}

/// Given an energy map, return the list of x-coordinates that, when
/// zipped with the range (0..height), give the XY coordinates for each
/// pixel in the cheapest vertical seam.  Adjacent entries never differ
/// by more than one column.
///
/// Tie handling is part of the contract, not an accident: the cell
/// directly above is the initial candidate and a diagonal neighbor
/// replaces it only on strictly smaller cost, left checked before
/// right; the bottom-row scan keeps the first strict minimum.  Callers
/// get the same seam for the same field, run after run.
///
/// Panics on an empty field.
pub fn energy_to_vertical_seam(energy: &Grid<f32>) -> Vec<u32> {
    let (width, height) = (energy.width(), energy.height());
    assert!(
        width > 0 && height > 0,
        "no seam passes through a zero-area energy field ({}x{})",
        width,
        height
    );

    let mut target: Grid<CostCell> = Grid::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].cost = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // For every subsequent row, populate the target cell with the sum
    // of the lowest adjacent upper cost and the x coordinate of that
    // cost.
    for y in 1..height {
        for x in 0..width {
            let mut parent = x;
            let mut cost = target[(x, y - 1)].cost;
            if x > 0 && target[(x - 1, y - 1)].cost < cost {
                parent = x - 1;
                cost = target[(x - 1, y - 1)].cost;
            }
            if x < maxwidth && target[(x + 1, y - 1)].cost < cost {
                parent = x + 1;
                cost = target[(x + 1, y - 1)].cost;
            }
            target[(x, y)] = CostCell {
                cost: energy[(x, y)] + cost,
                parent,
            };
        }
    }

    // Find the x coordinate of the bottommost row's cheapest seam,
    // keeping the leftmost column on a tie.
    let mut seam_col = 0;
    for x in 1..width {
        if target[(x, height - 1)].cost < target[(seam_col, height - 1)].cost {
            seam_col = x;
        }
    }

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let seam: Vec<u32> = (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            seam_col = target[(seam_col, y)].parent;
            acc
        })
        .into_iter()
        .rev()
        .collect();
    trace!("vertical seam: {:?}", seam);
    seam
}

/// A convenience wrapper: Given an image, get back a vector with the
/// next top-to-bottom seam for that image.
pub fn calculate_vertical_seam<I, P, S>(image: &I) -> Vec<u32>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    energy_to_vertical_seam(&calculate_energy(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb};

    static IMAGE_DATA: [u8; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];
    // Hand-computed |Δ| gradients for IMAGE_DATA; grayscale pixels
    // triple their difference through the RGB projection.
    const IMAGE_ENERGY: [f32; 20] = [
        0.0, 51.0, 27.0, 30.0, 0.0, 24.0, 0.0, 48.0, 0.0, 30.0, 0.0, 24.0, 0.0, 51.0, 27.0, 0.0,
        0.0, 27.0, 27.0, 54.0,
    ];
    const ENERGY_DATA: [f32; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, 9.0, 1.0, 9.0, 8.0, 9.0, 9.0, 9.0, 9.0, 9.0, 0.0, 9.0, 9.0, 9.0,
        0.0, 9.0,
    ];

    #[test]
    fn energy_generator_works() {
        let buf: ImageBuffer<Luma<u8>, _> = ImageBuffer::from_raw(5, 4, &IMAGE_DATA[..]).unwrap();
        let energy = calculate_energy(&buf);
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(energy[(x, y)], IMAGE_ENERGY[(y * 5 + x) as usize]);
            }
        }
    }

    #[test]
    fn energy_mixes_all_three_channels() {
        let data: Vec<u8> = vec![10, 20, 30, 40, 10, 5, 0, 0, 0, 255, 255, 255];
        let buf: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_raw(2, 2, data).unwrap();
        let energy = calculate_energy(&buf);
        assert_eq!((energy.width(), energy.height()), (2, 2));
        assert_eq!(energy[(0, 0)], 125.0);
        assert_eq!(energy[(1, 0)], 775.0);
        assert_eq!(energy[(0, 1)], 825.0);
        assert_eq!(energy[(1, 1)], 1475.0);
    }

    #[test]
    fn solid_color_has_zero_energy_everywhere() {
        let buf: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(3, 3, Rgb { data: [77, 12, 200] });
        let energy = calculate_energy(&buf);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(energy[(x, y)], 0.0);
            }
        }
    }

    #[test]
    fn energy_is_never_negative() {
        let buf: ImageBuffer<Luma<u8>, _> = ImageBuffer::from_raw(5, 4, &IMAGE_DATA[..]).unwrap();
        let energy = calculate_energy(&buf);
        for y in 0..4 {
            for x in 0..5 {
                assert!(energy[(x, y)] >= 0.0);
            }
        }
    }

    #[test]
    #[should_panic(expected = "zero-area")]
    fn energy_rejects_empty_images() {
        let buf: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::new(0, 4);
        calculate_energy(&buf);
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energies = Grid::from_raw(5, 4, ENERGY_DATA.to_vec());
        let expected = [2, 3, 4, 3];
        assert_eq!(energy_to_vertical_seam(&energies), expected);
    }

    #[test]
    fn seam_is_connected_and_in_bounds() {
        let energies = Grid::from_raw(5, 4, ENERGY_DATA.to_vec());
        let seam = energy_to_vertical_seam(&energies);
        assert_eq!(seam.len(), 4);
        for y in 0..seam.len() {
            assert!(seam[y] < 5);
            if y > 0 {
                let step = (seam[y] as i64 - seam[y - 1] as i64).abs();
                assert!(step <= 1, "seam jumps {} columns at row {}", step, y);
            }
        }
    }

    #[test]
    fn all_zero_field_yields_the_leftmost_straight_seam() {
        let energies = Grid::from_raw(3, 3, vec![0.0; 9]);
        assert_eq!(energy_to_vertical_seam(&energies), [0, 0, 0]);
        // Same field, same seam, every time.
        assert_eq!(energy_to_vertical_seam(&energies), [0, 0, 0]);
    }

    #[test]
    fn single_row_seam_is_the_minimum_cell() {
        let energies = Grid::from_raw(5, 1, vec![10.0, 2.0, 8.0, 5.0, 1.0]);
        assert_eq!(energy_to_vertical_seam(&energies), [4]);
    }

    #[test]
    fn ties_prefer_straight_up_then_left() {
        // Row 0 ties its 5s through both diagonals of the cheap cell at
        // (2, 1).  Straight-up loses to the left diagonal only on a
        // strictly smaller cost, and the right diagonal never beats an
        // equal left, so the seam tops out at column 1, not 2 or 3.
        let energies = Grid::from_raw(
            5,
            2,
            vec![7.0, 5.0, 9.0, 5.0, 7.0, 9.0, 9.0, 0.0, 9.0, 9.0],
        );
        assert_eq!(energy_to_vertical_seam(&energies), [1, 2]);

        // A full tie above keeps the path dead straight.
        let energies = Grid::from_raw(3, 2, vec![5.0, 5.0, 5.0, 9.0, 0.0, 9.0]);
        assert_eq!(energy_to_vertical_seam(&energies), [1, 1]);
    }

    #[test]
    fn image_to_seam_wrapper_matches_the_two_steps() {
        let buf: ImageBuffer<Luma<u8>, _> = ImageBuffer::from_raw(5, 4, &IMAGE_DATA[..]).unwrap();
        let direct = calculate_vertical_seam(&buf);
        let staged = energy_to_vertical_seam(&calculate_energy(&buf));
        assert_eq!(direct, staged);
    }

    #[test]
    #[should_panic(expected = "zero-area")]
    fn seam_finder_rejects_empty_fields() {
        let energies: Grid<f32> = Grid::new(0, 3);
        energy_to_vertical_seam(&energies);
    }
}
