// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! Removing a single seam, and the orchestrator that repeats the
//! estimate/find/remove cycle until an image reaches its target size.
//! There is exactly one removal direction, vertical; the height pass
//! rides on the same machinery by giving the image a quarter turn and
//! turning it back afterward.

use crate::cq;
use crate::energy::calculate_vertical_seam;
use failure::Fail;
use image::{imageops, GenericImageView, ImageBuffer, Pixel, Primitive};
use log::debug;

/// What can go wrong at the carving boundary.  Malformed seams and
/// zero targets are caller bugs and panic instead; see
/// `remove_vertical_seam` and `SeamCarver::carve`.
#[derive(Debug, Fail, PartialEq)]
pub enum CarveError {
    /// The collaborator handed over an image with no pixels at all.
    #[fail(display = "cannot carve a zero-area image ({}x{} px)", width, height)]
    EmptyImage { width: u32, height: u32 },
}

/// Given an image and a vertical seam, build a copy one column
/// narrower with the seam's pixel dropped from every row: columns left
/// of the cut are copied straight across, columns right of it shift
/// one position left.  The input image is left untouched.
///
/// The seam must hold one column per row and every column must be
/// inside the image; anything else panics, since a bad seam is a bug
/// in the caller, not a condition to clamp away.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &[u32]) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    assert!(width > 0, "cannot remove a seam from a zero-width image");
    assert_eq!(
        seam.len(),
        height as usize,
        "seam length {} does not match image height {}",
        seam.len(),
        height
    );

    let mut imgbuf = ImageBuffer::new(width - 1, height);
    for y in 0..height {
        let cut = seam[y as usize];
        assert!(
            cut < width,
            "seam column {} at row {} is outside image width {}",
            cut,
            y,
            width
        );
        for x in 0..width - 1 {
            imgbuf.put_pixel(x, y, image.get_pixel(cq!(x < cut, x, x + 1), y));
        }
    }
    imgbuf
}

// Find the cheapest seam and take it out.
fn carve_once<I, P, S>(image: &I) -> ImageBuffer<P, Vec<S>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let seam = calculate_vertical_seam(image);
    remove_vertical_seam(image, &seam)
}

/// A struct for holding the image to be carved.
pub struct SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I, P, S>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    // The energy map and the seam table are rebuilt from scratch on
    // every pass; a removed seam invalidates the energies along its
    // path, and recomputing the rest keeps the chosen seams identical
    // to the reference behavior.

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the image until both targets are met.  Only shrinking
    /// happens here: an axis whose target is at or above the current
    /// size is left alone, so oversized targets degrade to a no-op on
    /// that axis rather than erroring.
    ///
    /// The height pass reuses the vertical-seam machinery by rotating
    /// the image a quarter turn clockwise and back.
    ///
    /// Returns `CarveError::EmptyImage` for a zero-area input.
    /// Panics if either target is zero; callers are expected to ask
    /// for at least one surviving row and column.
    pub fn carve(
        &self,
        new_width: u32,
        new_height: u32,
    ) -> Result<ImageBuffer<P, Vec<S>>, CarveError> {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage { width, height });
        }
        assert!(
            new_width > 0 && new_height > 0,
            "carve target {}x{} must leave at least one pixel on each axis",
            new_width,
            new_height
        );

        // Initialize the scratch space.
        let mut scratch = ImageBuffer::<P, Vec<S>>::new(width, height);
        self.image.pixels().for_each(|p| scratch[(p.0, p.1)] = p.2);

        while scratch.width() > new_width {
            scratch = carve_once(&scratch);
            debug!("carved width: {}x{}", scratch.width(), scratch.height());
        }

        // A quarter turn makes the height the width; shrink it with
        // the same vertical loop, then turn back.
        scratch = imageops::rotate90(&scratch);
        while scratch.width() > new_height {
            scratch = carve_once(&scratch);
            debug!("carved height: {}x{}", scratch.height(), scratch.width());
        }
        scratch = imageops::rotate270(&scratch);

        Ok(scratch)
    }
}

/// A convenience wrapper: carve `image` down to `new_width` by
/// `new_height` in one call.
pub fn seamcarve<I, P, S>(
    image: &I,
    new_width: u32,
    new_height: u32,
) -> Result<ImageBuffer<P, Vec<S>>, CarveError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    SeamCarver::new(image).carve(new_width, new_height)
}
