//! Exact global pairwise alignment of DNA sequences.
//!
//! Two input sequences are produced by the [`expand`] module from a compact
//! description, aligned by the Needleman-Wunsch aligner in [`aligners::nw`],
//! and reported as an [`result::AlignResult`].
//!
//! ```
//! let (cost, a, b) = basic_aligner::solve(b"AG", b"AC").unwrap();
//! assert_eq!(cost, 60);
//! assert_eq!((a.as_str(), b.as_str()), ("A_G", "AC_"));
//! ```

pub mod aligners;
pub mod cost_model;
pub mod error;
pub mod expand;
pub mod measure;
pub mod result;

#[cfg(feature = "cli")]
pub mod cli;

/// Type for storing costs.
pub type Cost = i32;

/// An owned sequence.
pub type Sequence = Vec<u8>;
/// A sequence slice.
pub type Seq<'a> = &'a [u8];

/// The character marking a gap in an aligned string.
pub const GAP: u8 = b'_';

pub mod prelude {
    pub use crate::aligners::{
        alignment::{Alignment, Cigar, CigarOp},
        nw::NW,
        Aligner,
    };
    pub use crate::cost_model::{CostModel, Symbol};
    pub use crate::error::{Error, Result};
    pub use crate::expand::{ExpandConfig, InputDescription, Template};
    pub use crate::measure::{HostMeasure, Measure, Measurement, NoMeasure};
    pub use crate::result::AlignResult;
    pub use crate::{Cost, Seq, Sequence, GAP};
}

use prelude::*;

/// Align `a` and `b` under the default cost model.
///
/// Returns the optimal cost and the two aligned strings, using `_` for gaps.
pub fn solve(a: Seq, b: Seq) -> Result<(Cost, String, String)> {
    let (cost, alignment) = NW::default().align(a, b)?;
    let Alignment { a, b, .. } = alignment;
    Ok((cost, a, b))
}
