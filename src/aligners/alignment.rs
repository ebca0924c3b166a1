use std::fmt::{self, Display, Write};

use itertools::izip;

use crate::{
    cost_model::{CostModel, Symbol},
    Cost, Seq, Sequence, GAP,
};

/// A single column of an alignment.
///
/// Insertions consume a character of `b` only, deletions a character of `a` only.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CigarOp {
    Match,
    Mismatch,
    Insertion,
    Deletion,
}

impl CigarOp {
    fn get_char(&self) -> char {
        match self {
            CigarOp::Match => 'M',
            CigarOp::Mismatch => 'X',
            CigarOp::Insertion => 'I',
            CigarOp::Deletion => 'D',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CigarElement {
    pub op: CigarOp,
    pub cnt: usize,
}

/// Run-length encoded list of `CigarOp`s.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Cigar {
    ops: Vec<CigarElement>,
}

impl Cigar {
    /// Append `op`, merging it into the last element when equal.
    pub fn push(&mut self, op: CigarOp) {
        if let Some(s) = self.ops.last_mut() {
            if s.op == op {
                s.cnt += 1;
                return;
            }
        }
        self.ops.push(CigarElement { op, cnt: 1 });
    }

    pub fn ops(&self) -> &[CigarElement] {
        &self.ops
    }
}

impl FromIterator<CigarOp> for Cigar {
    fn from_iter<T: IntoIterator<Item = CigarOp>>(iter: T) -> Self {
        let mut cigar = Cigar::default();
        for op in iter {
            cigar.push(op);
        }
        cigar
    }
}

impl Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for el in &self.ops {
            write!(f, "{}", el.cnt)?;
            f.write_char(el.op.get_char())?;
        }
        Ok(())
    }
}

/// Two equal-length strings over `ACGT` and the gap marker `_`.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Alignment {
    pub a: String,
    pub b: String,
    ops: Vec<CigarOp>,
}

impl Alignment {
    /// Lay out `a` and `b` along `ops`, given in left-to-right order.
    pub(crate) fn from_ops(a: &[Symbol], b: &[Symbol], ops: Vec<CigarOp>) -> Self {
        let mut aligned_a = String::with_capacity(ops.len());
        let mut aligned_b = String::with_capacity(ops.len());
        let (mut i, mut j) = (0, 0);
        for &op in &ops {
            match op {
                CigarOp::Match | CigarOp::Mismatch => {
                    aligned_a.push(a[i].as_byte() as char);
                    aligned_b.push(b[j].as_byte() as char);
                    i += 1;
                    j += 1;
                }
                CigarOp::Deletion => {
                    aligned_a.push(a[i].as_byte() as char);
                    aligned_b.push(GAP as char);
                    i += 1;
                }
                CigarOp::Insertion => {
                    aligned_a.push(GAP as char);
                    aligned_b.push(b[j].as_byte() as char);
                    j += 1;
                }
            }
        }
        debug_assert_eq!((i, j), (a.len(), b.len()));
        Alignment {
            a: aligned_a,
            b: aligned_b,
            ops,
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[CigarOp] {
        &self.ops
    }

    pub fn cigar(&self) -> Cigar {
        self.ops.iter().copied().collect()
    }

    /// Check that this is an alignment of `a` and `b` and return its cost
    /// under `cm`.
    ///
    /// Panics when the alignment is not consistent with the input.
    pub fn verify(&self, cm: &CostModel, a: Seq, b: Seq) -> Cost {
        assert_eq!(self.a.len(), self.b.len(), "aligned strings differ in length");
        assert_eq!(self.a.len(), self.ops.len());
        assert_eq!(strip_gaps(&self.a), a, "aligned a does not spell a");
        assert_eq!(strip_gaps(&self.b), b, "aligned b does not spell b");

        let sym = |c: u8| Symbol::try_from(c).expect("aligned strings only contain ACGT and gaps");
        let mut cost = 0;
        for (x, y, &op) in izip!(self.a.bytes(), self.b.bytes(), &self.ops) {
            match (x, y) {
                (GAP, GAP) => panic!("column with two gaps"),
                (GAP, _) => {
                    assert_eq!(op, CigarOp::Insertion);
                    cost += cm.gap();
                }
                (_, GAP) => {
                    assert_eq!(op, CigarOp::Deletion);
                    cost += cm.gap();
                }
                (x, y) => {
                    assert_eq!(
                        op,
                        if x == y {
                            CigarOp::Match
                        } else {
                            CigarOp::Mismatch
                        }
                    );
                    cost += cm.sub(sym(x), sym(y));
                }
            }
        }
        cost
    }
}

/// Remove the gap markers from an aligned string.
pub fn strip_gaps(aligned: &str) -> Sequence {
    aligned.bytes().filter(|&c| c != GAP).collect()
}
