//! Needleman-Wunsch with a linear gap cost.
//!
//! `align` fills the full `(|a|+1) x (|b|+1)` table and traces back one optimal
//! path. `cost` only keeps two rows.

use std::{
    cmp::min,
    ops::{Index, IndexMut},
};

use log::debug;

use super::{
    alignment::{Alignment, CigarOp},
    Aligner,
};
use crate::{
    cost_model::{encode, CostModel, Symbol},
    error::{Error, Result},
    Cost, Seq,
};

/// Needleman-Wunsch aligner.
#[derive(Clone, Copy, Debug, Default)]
pub struct NW {
    /// The cost model to use.
    pub cm: CostModel,
}

/// Row-major DP table with `rows * cols` cells.
///
/// Cell `(i, j)` holds the cost of aligning `a[..i]` with `b[..j]`.
struct DpTable {
    cols: usize,
    cells: Vec<Cost>,
}

impl DpTable {
    fn new(rows: usize, cols: usize) -> Result<Self> {
        let err = || Error::TableAllocation { rows, cols };
        let len = rows.checked_mul(cols).ok_or_else(err)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| err())?;
        cells.resize(len, 0);
        Ok(DpTable { cols, cells })
    }
}

impl Index<(usize, usize)> for DpTable {
    type Output = Cost;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Cost {
        &self.cells[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for DpTable {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Cost {
        &mut self.cells[i * self.cols + j]
    }
}

impl NW {
    pub fn new(cm: CostModel) -> Self {
        NW { cm }
    }

    /// The value of cell `(i, j)` given its three predecessors.
    #[inline]
    fn relax(&self, ca: Symbol, cb: Symbol, diag: Cost, up: Cost, left: Cost) -> Cost {
        min(
            diag + self.cm.sub(ca, cb),
            min(up + self.cm.gap(), left + self.cm.gap()),
        )
    }

    /// Callers must have checked `CostModel::check_range` for these lengths.
    fn fill(&self, a: &[Symbol], b: &[Symbol]) -> Result<DpTable> {
        let mut dp = DpTable::new(a.len() + 1, b.len() + 1)?;
        for j in 1..=b.len() {
            dp[(0, j)] = dp[(0, j - 1)] + self.cm.gap();
        }
        for (i0, &ca) in a.iter().enumerate() {
            // Change from 0-based to 1-based indexing.
            let i = i0 + 1;
            dp[(i, 0)] = dp[(i - 1, 0)] + self.cm.gap();
            for (j0, &cb) in b.iter().enumerate() {
                let j = j0 + 1;
                dp[(i, j)] = self.relax(ca, cb, dp[(i - 1, j - 1)], dp[(i - 1, j)], dp[(i, j - 1)]);
            }
        }
        Ok(dp)
    }

    /// Walk back from `(|a|, |b|)` to `(0, 0)`.
    ///
    /// A diagonal step is taken whenever it reproduces the cell value, even if
    /// a gap step would too. Otherwise a gap in `b` is preferred over a gap in `a`.
    fn track_path(&self, dp: &DpTable, a: &[Symbol], b: &[Symbol]) -> Vec<CigarOp> {
        let mut ops = Vec::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (a.len(), b.len());
        while i > 0 || j > 0 {
            let cur = dp[(i, j)];
            if i > 0 && j > 0 && cur == dp[(i - 1, j - 1)] + self.cm.sub(a[i - 1], b[j - 1]) {
                ops.push(if a[i - 1] == b[j - 1] {
                    CigarOp::Match
                } else {
                    CigarOp::Mismatch
                });
                i -= 1;
                j -= 1;
            } else if i > 0 && cur == dp[(i - 1, j)] + self.cm.gap() {
                ops.push(CigarOp::Deletion);
                i -= 1;
            } else {
                debug_assert!(j > 0 && cur == dp[(i, j - 1)] + self.cm.gap());
                ops.push(CigarOp::Insertion);
                j -= 1;
            }
        }
        ops.reverse();
        ops
    }
}

impl Aligner for NW {
    fn cost_model(&self) -> &CostModel {
        &self.cm
    }

    /// The cost-only version uses linear memory.
    fn cost(&self, a: Seq, b: Seq) -> Result<Cost> {
        let a = encode(a, "a")?;
        let b = encode(b, "b")?;
        self.cm.check_range(a.len(), b.len())?;

        let gap = self.cm.gap();
        let ref mut prev = Vec::new();
        let ref mut next: Vec<Cost> = (0..=b.len()).map(|j| j as Cost * gap).collect();
        for &ca in &a {
            std::mem::swap(prev, next);
            next.clear();
            next.push(prev[0] + gap);
            for (j0, &cb) in b.iter().enumerate() {
                let j = j0 + 1;
                let f = self.relax(ca, cb, prev[j - 1], prev[j], next[j - 1]);
                next.push(f);
            }
        }
        Ok(next[b.len()])
    }

    fn align(&self, a: Seq, b: Seq) -> Result<(Cost, Alignment)> {
        let a = encode(a, "a")?;
        let b = encode(b, "b")?;
        self.cm.check_range(a.len(), b.len())?;
        debug!("Filling {}x{} DP table", a.len() + 1, b.len() + 1);

        let dp = self.fill(&a, &b)?;
        let cost = dp[(a.len(), b.len())];
        let ops = self.track_path(&dp, &a, &b);
        debug!("Optimal cost {cost} over {} columns", ops.len());
        Ok((cost, Alignment::from_ops(&a, &b, ops)))
    }
}
