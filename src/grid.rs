use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field over a flat, row-major vector.
/// During a carve it wears several hats: the raw energy map, and the
/// cost-plus-back-pointer table the seam finder fills in.
#[derive(Debug)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> Grid<P> {
    /// A new grid with every cell set to the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// A grid wrapping an existing row-major vector, which must hold
    /// exactly `width * height` cells.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "grid data length {} does not match {}x{}",
            cells.len(),
            width,
            height
        );
        Grid {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // The number one rule of this game is to keep the index math in a
    // single location and never, ever mess with it.  Same row-major
    // variant image.rs uses.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_row_major() {
        let grid = Grid::from_raw(3, 2, vec![0u32, 1, 2, 3, 4, 5]);
        assert_eq!(grid[(0, 0)], 0);
        assert_eq!(grid[(2, 0)], 2);
        assert_eq!(grid[(0, 1)], 3);
        assert_eq!(grid[(2, 1)], 5);
    }

    #[test]
    fn writes_land_where_reads_look() {
        let mut grid: Grid<f32> = Grid::new(4, 3);
        grid[(3, 2)] = 7.5;
        grid[(0, 1)] = 1.25;
        assert_eq!(grid[(3, 2)], 7.5);
        assert_eq!(grid[(0, 1)], 1.25);
        assert_eq!(grid[(1, 1)], 0.0);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn rejects_misshapen_data() {
        Grid::from_raw(3, 2, vec![0u32; 5]);
    }
}
