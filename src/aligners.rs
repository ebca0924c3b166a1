//! This module contains the aligner interface and the Needleman-Wunsch aligner.

use crate::{cost_model::CostModel, error::Result, Cost, Seq};

use self::alignment::Alignment;

pub mod alignment;
pub mod nw;

#[cfg(test)]
mod tests;

/// An aligner is a type that supports aligning sequences using some algorithm.
///
/// The cost-only variant can sometimes be implemented using less memory.
///
/// Note that insertions are when `b` has more characters than `a`, and
/// deletions are when `b` has less characters than `a`.
pub trait Aligner {
    /// Returns the cost model used by the aligner.
    fn cost_model(&self) -> &CostModel;

    /// Finds the cost of aligning `a` and `b`.
    fn cost(&self, a: Seq, b: Seq) -> Result<Cost>;

    /// Finds the cost and an optimal alignment of `a` and `b`.
    fn align(&self, a: Seq, b: Seq) -> Result<(Cost, Alignment)>;
}
