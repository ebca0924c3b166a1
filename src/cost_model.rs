//! This module contains the `CostModel`: a substitution matrix over the DNA
//! alphabet and a linear gap cost.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    Cost, Seq,
};

/// One of the four nucleotides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Display, Serialize, Deserialize)]
#[repr(u8)]
pub enum Symbol {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Symbol {
    pub const ALL: [Symbol; 4] = [Symbol::A, Symbol::C, Symbol::G, Symbol::T];

    /// Row/column of this symbol in the substitution matrix.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Symbol::A => b'A',
            Symbol::C => b'C',
            Symbol::G => b'G',
            Symbol::T => b'T',
        }
    }
}

impl TryFrom<u8> for Symbol {
    type Error = u8;

    fn try_from(c: u8) -> std::result::Result<Self, u8> {
        match c {
            b'A' => Ok(Symbol::A),
            b'C' => Ok(Symbol::C),
            b'G' => Ok(Symbol::G),
            b'T' => Ok(Symbol::T),
            _ => Err(c),
        }
    }
}

/// Substitution costs for `A`, `C`, `G`, `T`, in that order.
const DEFAULT_SUB: [[Cost; 4]; 4] = [
    [0, 110, 48, 94],
    [110, 0, 118, 48],
    [48, 118, 0, 110],
    [94, 48, 110, 0],
];

/// Cost of aligning one symbol against a gap.
const DEFAULT_GAP: Cost = 30;

/// Largest accepted gap or substitution cost.
pub const MAX_UNIT_COST: Cost = Cost::MAX / 4;

/// A cost model consists of a symmetric substitution matrix with zero diagonal
/// and a linear gap cost.
///
/// The fields are private so that a `CostModel` is always valid: construct it
/// with `CostModel::new` or use the default scheme.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct CostModel {
    sub: [[Cost; 4]; 4],
    gap: Cost,
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel {
            sub: DEFAULT_SUB,
            gap: DEFAULT_GAP,
        }
    }
}

impl CostModel {
    pub fn new(sub: [[Cost; 4]; 4], gap: Cost) -> Result<CostModel> {
        if !(0..=MAX_UNIT_COST).contains(&gap) {
            return Err(Error::InvalidCostModel(format!(
                "gap cost must be in 0..={MAX_UNIT_COST}, got {gap}"
            )));
        }
        for x in Symbol::ALL {
            if sub[x.index()][x.index()] != 0 {
                return Err(Error::InvalidCostModel(format!(
                    "substitution {x}/{x} must cost 0, got {}",
                    sub[x.index()][x.index()]
                )));
            }
            for y in Symbol::ALL {
                let c = sub[x.index()][y.index()];
                if !(0..=MAX_UNIT_COST).contains(&c) {
                    return Err(Error::InvalidCostModel(format!(
                        "substitution {x}/{y} must be in 0..={MAX_UNIT_COST}, got {c}"
                    )));
                }
                if c != sub[y.index()][x.index()] {
                    return Err(Error::InvalidCostModel(format!(
                        "substitution matrix is not symmetric: {x}/{y} costs {c} but {y}/{x} costs {}",
                        sub[y.index()][x.index()]
                    )));
                }
            }
        }
        Ok(CostModel { sub, gap })
    }

    /// Cost of aligning `x` against `y`.
    #[inline]
    pub fn sub(&self, x: Symbol, y: Symbol) -> Cost {
        self.sub[x.index()][y.index()]
    }

    /// Cost of aligning a single symbol against a gap.
    #[inline]
    pub fn gap(&self) -> Cost {
        self.gap
    }

    /// Cost of aligning `len` symbols entirely against gaps, or `None` when it
    /// does not fit in a `Cost`.
    #[inline]
    pub fn gap_cost(&self, len: usize) -> Option<Cost> {
        Cost::try_from(len).ok()?.checked_mul(self.gap)
    }

    /// Check that every cost arising while aligning sequences of lengths `n`
    /// and `m` fits in a `Cost`.
    ///
    /// Cell `(i, j)` of the DP table is at most `(i + j) * gap`, and every
    /// candidate adds at most one substitution to a cell before it.
    pub fn check_range(&self, n: usize, m: usize) -> Result<()> {
        let max_sub = self.sub.iter().flatten().copied().max().unwrap_or(0);
        n.checked_add(m)
            .and_then(|len| self.gap_cost(len))
            .and_then(|c| c.checked_add(max_sub))
            .map(|_| ())
            .ok_or(Error::CostOverflow { n, m })
    }
}

/// Convert a raw sequence into symbols.
///
/// `which` names the sequence in the error message.
pub fn encode(seq: Seq, which: &'static str) -> Result<Vec<Symbol>> {
    seq.iter()
        .enumerate()
        .map(|(pos, &c)| {
            Symbol::try_from(c).map_err(|c| Error::InvalidSymbol {
                seq: which,
                pos,
                symbol: c as char,
            })
        })
        .collect()
}
