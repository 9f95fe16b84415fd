/// Percolation on an n-by-n grid of sites
///
/// Sites start blocked and are opened one at a time. The grid tracks whether
/// an open path joins the top row to the bottom row, and which open sites are
/// full (reachable from the top row).
///
/// Two disjoint sets are kept in step. `connectivity` holds a virtual top and
/// a virtual bottom node and answers `percolates`. `fullness` has only the
/// virtual top node and answers `is_full`; without the bottom node a bottom-row
/// site can never look full just because the grid percolates elsewhere
/// (backwash).
use crate::coordinates::{site_count, to_linear};
use crate::error::Result;
use crate::union_find::DisjointSet;

#[derive(Debug, Clone)]
pub struct PercolationGrid {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    connectivity: DisjointSet,
    fullness: DisjointSet,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl PercolationGrid {
    /// Create an n-by-n grid with every site blocked
    pub fn new(n: usize) -> Result<Self> {
        let sites = site_count(n)?;

        // Indices 0..sites are real sites, then top, then bottom
        let virtual_top = sites;
        let virtual_bottom = sites + 1;

        Ok(PercolationGrid {
            n,
            open: vec![false; sites],
            open_count: 0,
            connectivity: DisjointSet::new(sites + 2)?,
            fullness: DisjointSet::new(sites + 1)?,
            virtual_top,
            virtual_bottom,
        })
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of sites opened so far
    pub fn open_sites(&self) -> usize {
        self.open_count
    }

    /// Open the site at (row, col). Opening an open site is a no-op.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = to_linear(row, col, self.n)?;
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_count += 1;
        log::trace!("opened site ({row}, {col})");

        if row == 1 {
            self.join_both(site, self.virtual_top)?;
        } else if self.is_open(row - 1, col)? {
            self.join_both(site, to_linear(row - 1, col, self.n)?)?;
        }

        if col > 1 && self.is_open(row, col - 1)? {
            self.join_both(site, to_linear(row, col - 1, self.n)?)?;
        }

        if col < self.n && self.is_open(row, col + 1)? {
            self.join_both(site, to_linear(row, col + 1, self.n)?)?;
        }

        if row == self.n {
            // Bottom node lives only in the connectivity set
            self.connectivity.union(site, self.virtual_bottom)?;
        } else if self.is_open(row + 1, col)? {
            self.join_both(site, to_linear(row + 1, col, self.n)?)?;
        }

        Ok(())
    }

    fn join_both(&mut self, a: usize, b: usize) -> Result<()> {
        self.connectivity.union(a, b)?;
        self.fullness.union(a, b)?;
        Ok(())
    }

    /// Is the site at (row, col) open?
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[to_linear(row, col, self.n)?])
    }

    /// Is the site at (row, col) open and connected to the top row?
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = to_linear(row, col, self.n)?;
        if !self.open[site] {
            return Ok(false);
        }
        self.fullness.connected(site, self.virtual_top)
    }

    /// Does an open path join the top row to the bottom row?
    pub fn percolates(&mut self) -> bool {
        self.connectivity.same_root(self.virtual_top, self.virtual_bottom)
    }
}
