use ndarray::Array2;

/// Two-dimensional coordinates `(x, y)`, `x` is the column and `y` the row.
pub type Coord2 = (usize, usize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0, self.1]
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> Neighbors;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> Neighbors {
        Neighbors::new(center, self.dim())
    }
}

/// Walks the 3x3 window around `center`, clipped to the grid, row by row.
/// The center itself is skipped.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    x_min: usize,
    x_max: usize,
    y_max: usize,
    cursor: Coord2,
}

impl Neighbors {
    pub fn new((x, y): Coord2, (width, height): Coord2) -> Self {
        let x_min = x.saturating_sub(1);
        Self {
            center: (x, y),
            x_min,
            x_max: (x + 1).min(width.saturating_sub(1)),
            y_max: (y + 1).min(height.saturating_sub(1)),
            cursor: (x_min, y.saturating_sub(1)),
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor.1 <= self.y_max {
            let pos = self.cursor;
            if pos.0 < self.x_max {
                self.cursor.0 += 1;
            } else {
                self.cursor = (self.x_min, pos.1 + 1);
            }

            if pos != self.center {
                return Some(pos);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = Neighbors::new((0, 0), (7, 7)).collect();
        assert_eq!(neighbors, vec![(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(Neighbors::new((3, 6), (7, 7)).count(), 5);
        assert_eq!(Neighbors::new((0, 3), (7, 7)).count(), 5);
        assert_eq!(Neighbors::new((6, 3), (7, 7)).count(), 5);
    }

    #[test]
    fn interior_includes_same_row_and_column() {
        let neighbors: Vec<_> = Neighbors::new((2, 2), (5, 5)).collect();
        assert_eq!(
            neighbors,
            vec![(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)]
        );
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(Neighbors::new((0, 0), (1, 1)).next(), None);
    }

    #[test]
    fn array_extension_uses_array_shape() {
        let grid: Array2<bool> = Array2::default((3, 3));
        assert_eq!(grid.iter_neighbors((2, 2)).count(), 3);
        assert_eq!(grid.iter_neighbors((1, 1)).count(), 8);
    }
}
