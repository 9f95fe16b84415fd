// Library exports for percolation
pub mod coordinates;
pub mod error;
pub mod percolation;
pub mod stats;
pub mod union_find;

pub use error::{PercolationError, Result};
pub use percolation::PercolationGrid;
pub use stats::{PercolationStats, StatsConfig};
pub use union_find::DisjointSet;
