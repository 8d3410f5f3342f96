//! Index allocation for one rectangular face, reusing seams fixed by earlier faces.

use crate::error::CuboidError;

/// Boundary constraint shape of a face grid.
///
/// Supplied rows must list indices in increasing column order and supplied
/// columns in increasing row order, matching what [`FaceGrid::seams`]
/// returns. Lengths and shared corners are checked; the direction of a
/// `TwoOpposite` row cannot be, so a reversed row is the caller's bug.
#[derive(Clone, Copy, Debug)]
pub enum Boundary<'a> {
    /// Nothing fixed yet; every grid point is new.
    Free,
    /// First and last rows come from earlier faces; interior rows are new.
    TwoOpposite {
        first_row: &'a [u32],
        last_row: &'a [u32],
    },
    /// Whole rim comes from earlier faces; only interior points are new.
    AllFour {
        first_row: &'a [u32],
        last_row: &'a [u32],
        first_col: &'a [u32],
        last_col: &'a [u32],
    },
}

/// The four rim sequences of a face grid.
///
/// Rows run in increasing column order and columns in increasing row order,
/// so a neighbouring face can splice them in without searching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Seams {
    pub first_row: Vec<u32>,
    pub last_col: Vec<u32>,
    pub last_row: Vec<u32>,
    pub first_col: Vec<u32>,
}

/// Row-major vertex indices of one face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceGrid {
    cols: usize,
    rows: usize,
    scan: Vec<u32>,
    fresh: usize,
}

fn check_len(edge: &'static str, seam: &[u32], expected: usize) -> Result<(), CuboidError> {
    if seam.len() != expected {
        return Err(CuboidError::SeamMismatch {
            edge,
            expected,
            found: seam.len(),
        });
    }
    Ok(())
}

impl FaceGrid {
    /// Lays out a `cols x rows` grid whose new indices start at `base`.
    ///
    /// New indices are handed out consecutively in scan order, skipping cells
    /// that `boundary` already fixes.
    pub fn allocate(
        cols: usize,
        rows: usize,
        base: u32,
        boundary: Boundary<'_>,
    ) -> Result<Self, CuboidError> {
        if cols < 2 || rows < 2 {
            return Err(CuboidError::PointCount(cols.min(rows)));
        }
        let mut scan = Vec::with_capacity(cols * rows);
        let mut next = base;
        let mut take = |n: usize, scan: &mut Vec<u32>| {
            scan.extend(next..next + n as u32);
            next += n as u32;
        };
        match boundary {
            Boundary::Free => take(cols * rows, &mut scan),
            Boundary::TwoOpposite {
                first_row,
                last_row,
            } => {
                check_len("first row", first_row, cols)?;
                check_len("last row", last_row, cols)?;
                scan.extend_from_slice(first_row);
                take((rows - 2) * cols, &mut scan);
                scan.extend_from_slice(last_row);
            }
            Boundary::AllFour {
                first_row,
                last_row,
                first_col,
                last_col,
            } => {
                check_len("first row", first_row, cols)?;
                check_len("last row", last_row, cols)?;
                check_len("first column", first_col, rows)?;
                check_len("last column", last_col, rows)?;
                let (lr, lc) = (rows - 1, cols - 1);
                let corners = [
                    (first_row[0], first_col[0], 0, 0),
                    (first_row[lc], last_col[0], 0, lc),
                    (last_row[0], first_col[lr], lr, 0),
                    (last_row[lc], last_col[lr], lr, lc),
                ];
                for (a, b, row, col) in corners {
                    if a != b {
                        return Err(CuboidError::SeamCorner { row, col });
                    }
                }
                scan.extend_from_slice(first_row);
                for row in 1..lr {
                    scan.push(first_col[row]);
                    take(cols - 2, &mut scan);
                    scan.push(last_col[row]);
                }
                scan.extend_from_slice(last_row);
            }
        }
        let fresh = (next - base) as usize;
        Ok(Self {
            cols,
            rows,
            scan,
            fresh,
        })
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of indices this grid allocated rather than reused.
    #[inline]
    pub fn fresh(&self) -> usize {
        self.fresh
    }

    #[inline]
    pub fn scan(&self) -> &[u32] {
        &self.scan
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.scan[row * self.cols + col]
    }

    /// Rim sequences read back from the grid, whatever their origin.
    pub fn seams(&self) -> Seams {
        let (cols, rows) = (self.cols, self.rows);
        Seams {
            first_row: self.scan[..cols].to_vec(),
            last_col: (0..rows).map(|r| self.get(r, cols - 1)).collect(),
            last_row: self.scan[(rows - 1) * cols..].to_vec(),
            first_col: (0..rows).map(|r| self.get(r, 0)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_grid_is_consecutive() {
        let g = FaceGrid::allocate(3, 2, 10, Boundary::Free).unwrap();
        assert_eq!(g.scan(), &[10, 11, 12, 13, 14, 15]);
        assert_eq!(g.fresh(), 6);
        let s = g.seams();
        assert_eq!(s.first_row, vec![10, 11, 12]);
        assert_eq!(s.last_col, vec![12, 15]);
        assert_eq!(s.last_row, vec![13, 14, 15]);
        assert_eq!(s.first_col, vec![10, 13]);
    }

    #[test]
    fn two_seam_grid_fills_interior_rows() {
        let top = [0, 1, 2];
        let bottom = [3, 4, 5];
        let g = FaceGrid::allocate(
            3,
            4,
            6,
            Boundary::TwoOpposite {
                first_row: &top,
                last_row: &bottom,
            },
        )
        .unwrap();
        assert_eq!(g.scan(), &[0, 1, 2, 6, 7, 8, 9, 10, 11, 3, 4, 5]);
        assert_eq!(g.fresh(), 6);
        assert_eq!(g.seams().first_col, vec![0, 6, 9, 3]);
    }

    #[test]
    fn two_seam_grid_with_two_rows_allocates_nothing() {
        let g = FaceGrid::allocate(
            2,
            2,
            99,
            Boundary::TwoOpposite {
                first_row: &[0, 1],
                last_row: &[2, 3],
            },
        )
        .unwrap();
        assert_eq!(g.scan(), &[0, 1, 2, 3]);
        assert_eq!(g.fresh(), 0);
    }

    #[test]
    fn four_seam_grid_fills_only_interior() {
        // 4x3 rim:  0  1  2  3
        //           4  .  .  5
        //           6  7  8  9
        let g = FaceGrid::allocate(
            4,
            3,
            20,
            Boundary::AllFour {
                first_row: &[0, 1, 2, 3],
                last_row: &[6, 7, 8, 9],
                first_col: &[0, 4, 6],
                last_col: &[3, 5, 9],
            },
        )
        .unwrap();
        assert_eq!(g.scan(), &[0, 1, 2, 3, 4, 20, 21, 5, 6, 7, 8, 9]);
        assert_eq!(g.fresh(), 2);
    }

    #[test]
    fn seams_splice_back_in_declared_direction() {
        let cap = FaceGrid::allocate(4, 3, 0, Boundary::Free).unwrap();
        let lid = FaceGrid::allocate(4, 3, 12, Boundary::Free).unwrap();
        let (a, b) = (cap.seams(), lid.seams());
        let band = FaceGrid::allocate(
            4,
            3,
            24,
            Boundary::TwoOpposite {
                first_row: &a.first_row,
                last_row: &b.first_row,
            },
        )
        .unwrap();
        for col in 0..4 {
            assert_eq!(band.get(0, col), cap.get(0, col));
            assert_eq!(band.get(2, col), lid.get(0, col));
        }
        assert_eq!(band.seams().first_col, vec![0, 24, 12]);
    }

    #[test]
    fn short_seam_is_rejected() {
        let err = FaceGrid::allocate(
            3,
            3,
            0,
            Boundary::TwoOpposite {
                first_row: &[0, 1],
                last_row: &[2, 3, 4],
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            CuboidError::SeamMismatch {
                edge: "first row",
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn reversed_column_is_rejected() {
        let err = FaceGrid::allocate(
            2,
            3,
            10,
            Boundary::AllFour {
                first_row: &[0, 1],
                last_row: &[4, 5],
                first_col: &[4, 2, 0],
                last_col: &[1, 3, 5],
            },
        )
        .unwrap_err();
        assert_eq!(err, CuboidError::SeamCorner { row: 0, col: 0 });
    }

    #[test]
    fn degenerate_grid_is_rejected() {
        assert_eq!(
            FaceGrid::allocate(1, 3, 0, Boundary::Free),
            Err(CuboidError::PointCount(1))
        );
    }
}
