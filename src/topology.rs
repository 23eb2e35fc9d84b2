//! Grid adjacency bitmask and the triangle faces it admits.
//!
//! Each particle owns the edges that leave it to the right, downward and
//! along both downward diagonals. A bit is set while the matching link is
//! active and cleared when that link breaks or is cut, so face lookups never
//! rescan the link list. Bend links have no bit; they do not bound a face.

use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Edge directions tracked per particle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Edge {
    Right,
    Down,
    DownRight,
    DownLeft,
}

impl Edge {
    fn bit(self) -> u8 {
        match self {
            Edge::Right => 0b0001,
            Edge::Down => 0b0010,
            Edge::DownRight => 0b0100,
            Edge::DownLeft => 0b1000,
        }
    }
}

/// One triangle of a grid cell, as three particle indices.
///
/// Cell `(row, col)` has corners `p1 = (row, col)`, `p2 = (row, col + 1)`,
/// `p3 = (row + 1, col)` and `p4 = (row + 1, col + 1)`. The upper face is
/// `[p1, p2, p4]`, the lower face `[p1, p4, p3]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub row: usize,
    pub col: usize,
    pub vertices: [usize; 3],
}

/// Per-particle bitmask of active face-bounding links.
#[derive(Clone, Debug)]
pub struct Adjacency {
    cols: usize,
    rows: usize,
    bits: AllocVec<u8>,
}

impl Adjacency {
    pub fn new(cols: usize, rows: usize) -> Self {
        Adjacency { cols, rows, bits: vec![0; cols * rows] }
    }

    /// Resolve the link `a`-`b` to its owning particle and direction.
    ///
    /// Returns `None` for pairs that are not direct or diagonal neighbors.
    pub fn classify(&self, a: usize, b: usize) -> Option<(usize, Edge)> {
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        let (r0, c0) = (first / self.cols, first % self.cols);
        let (r1, c1) = (second / self.cols, second % self.cols);

        match (r1 - r0, c1 as isize - c0 as isize) {
            (0, 1) => Some((first, Edge::Right)),
            (1, 0) => Some((first, Edge::Down)),
            (1, 1) => Some((first, Edge::DownRight)),
            (1, -1) => Some((first, Edge::DownLeft)),
            _ => None,
        }
    }

    pub fn connect(&mut self, a: usize, b: usize) {
        if let Some((owner, edge)) = self.classify(a, b) {
            self.bits[owner] |= edge.bit();
        }
    }

    pub fn disconnect(&mut self, a: usize, b: usize) {
        if let Some((owner, edge)) = self.classify(a, b) {
            self.bits[owner] &= !edge.bit();
        }
    }

    pub fn has(&self, index: usize, edge: Edge) -> bool {
        self.bits.get(index).is_some_and(|bits| bits & edge.bit() != 0)
    }

    /// Every face whose three edges are all active, cell by cell in row-major order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        let cells_x = self.cols.saturating_sub(1);
        let cells_y = self.rows.saturating_sub(1);
        (0..cells_y)
            .flat_map(move |row| (0..cells_x).map(move |col| (row, col)))
            .flat_map(move |(row, col)| {
                let p1 = row * self.cols + col;
                let p2 = p1 + 1;
                let p3 = p1 + self.cols;
                let p4 = p3 + 1;

                let diagonal = self.has(p1, Edge::DownRight);
                let upper = diagonal && self.has(p1, Edge::Right) && self.has(p2, Edge::Down);
                let lower = diagonal && self.has(p3, Edge::Right) && self.has(p1, Edge::Down);

                let upper = upper.then_some(Face { row, col, vertices: [p1, p2, p4] });
                let lower = lower.then_some(Face { row, col, vertices: [p1, p4, p3] });
                upper.into_iter().chain(lower)
            })
    }
}
