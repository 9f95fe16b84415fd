/// Conversion between 1-based (row, column) grid coordinates and dense
/// 0-based linear indices on an n-by-n grid
use crate::error::{Axis, PercolationError, Result};

/// Number of sites on an n-by-n grid
///
/// Fails for `n == 0` and for sizes whose site count overflows `usize`.
pub fn site_count(n: usize) -> Result<usize> {
    if n < 1 {
        return Err(PercolationError::InvalidArgument(format!(
            "grid size must be at least 1, got {n}"
        )));
    }
    n.checked_mul(n)
        .ok_or_else(|| PercolationError::InvalidArgument(format!("grid size {n} is too large")))
}

/// Map `(row, col)` to `(row - 1) * n + (col - 1)`
///
/// Both coordinates must lie in `1..=n`; the error names the offending one,
/// checking the row first.
pub fn to_linear(row: usize, col: usize, n: usize) -> Result<usize> {
    site_count(n)?;
    if row < 1 || row > n {
        return Err(PercolationError::out_of_range(Axis::Row, row, 1, n));
    }
    if col < 1 || col > n {
        return Err(PercolationError::out_of_range(Axis::Column, col, 1, n));
    }
    Ok((row - 1) * n + (col - 1))
}

/// Inverse of [`to_linear`]: map a linear index in `0..n*n` back to `(row, col)`
pub fn from_linear(index: usize, n: usize) -> Result<(usize, usize)> {
    let sites = site_count(n)?;
    if index >= sites {
        return Err(PercolationError::out_of_range(
            Axis::Element,
            index,
            0,
            sites - 1,
        ));
    }
    Ok((index / n + 1, index % n + 1))
}
