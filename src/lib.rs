// #![deny(missing_docs)]

extern crate image;

pub mod ternary;

pub mod grid;
pub use grid::Grid;

pub mod pixelpairs;

pub mod energy;
pub use energy::{calculate_energy, calculate_vertical_seam, energy_to_vertical_seam};

pub mod seamcarver;
pub use seamcarver::{remove_vertical_seam, seamcarve, CarveError, SeamCarver};
