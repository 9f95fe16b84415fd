/// Errors raised by the percolation library
use std::fmt;

/// Which coordinate of a request fell outside its valid range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
    /// A raw element index into a disjoint-set universe or the linear grid
    Element,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
            Axis::Element => write!(f, "element"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `min..=max` is the accepted range for `value` on `axis`
    #[error("{axis} index {value} is out of range ({min}..={max})")]
    IndexOutOfRange {
        axis: Axis,
        value: usize,
        min: usize,
        max: usize,
    },
}

impl PercolationError {
    pub(crate) fn out_of_range(axis: Axis, value: usize, min: usize, max: usize) -> Self {
        PercolationError::IndexOutOfRange {
            axis,
            value,
            min,
            max,
        }
    }
}

pub type Result<T> = std::result::Result<T, PercolationError>;
