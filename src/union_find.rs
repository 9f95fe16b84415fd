use crate::error::{Axis, PercolationError, Result};

/// Union-Find (Disjoint Sets) over a fixed universe `0..len`
///
/// Weighted quick-union: the root of the smaller tree is hung below the root
/// of the larger one, and `find` compresses every path it walks.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Create a new DisjointSet where each of the `n` elements is its own set
    pub fn new(n: usize) -> Result<Self> {
        if n < 1 {
            return Err(PercolationError::InvalidArgument(format!(
                "disjoint set needs at least one element, got {n}"
            )));
        }
        let parent = (0..n).collect();
        let size = vec![1; n];
        Ok(DisjointSet {
            parent,
            size,
            count: n,
        })
    }

    /// Number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false; an empty universe is rejected by `new`
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components
    pub fn count(&self) -> usize {
        self.count
    }

    fn validate(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            return Err(PercolationError::out_of_range(
                Axis::Element,
                x,
                0,
                self.parent.len() - 1,
            ));
        }
        Ok(())
    }

    /// Find the root of element x with path compression
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.validate(x)?;
        Ok(self.find_root(x))
    }

    // Tree height is O(log n) thanks to weighting, so the recursion stays shallow.
    fn find_root(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find_root(self.parent[x]);
        }
        self.parent[x]
    }

    /// Union the sets containing x and y
    ///
    /// Returns `true` if two distinct components were merged, `false` if x and
    /// y were already connected.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        // Union by size; ties keep root_x on top
        let (big, small) = if self.size[root_x] < self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.count -= 1;

        Ok(true)
    }

    /// Root comparison for indices the caller already knows are in range
    pub(crate) fn same_root(&mut self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.parent.len() && y < self.parent.len());
        self.find_root(x) == self.find_root(y)
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }
}
