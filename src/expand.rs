//! Expansion of compact input descriptions into the two sequences to align.
//!
//! A description consists of a base string followed by insertion indices, one
//! per line, then the second base string and its indices:
//!
//! ```text
//! ACTG
//! 3
//! 6
//! 1
//! TACG
//! 1
//! 2
//! 9
//! ```
//!
//! Each index `idx` inserts a copy of the current string right after its
//! character at position `idx`, so every step doubles the length.

use std::{fs, path::Path, str::FromStr};

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    Seq, Sequence,
};

/// Default maximum length of an expanded sequence.
///
/// Two sequences of this length need a DP table of 2^28 cells.
pub const DEFAULT_MAX_LEN: usize = 1 << 14;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Expansions producing a longer sequence are rejected.
    pub max_len: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        ExpandConfig {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

/// Apply the insertions in `indices` to `base`, in order.
///
/// Indices refer to the string as it is at that step. An empty list of
/// indices returns `base` unchanged.
pub fn expand(base: Seq, indices: &[usize], config: &ExpandConfig) -> Result<Sequence> {
    if base.len() > config.max_len {
        return Err(Error::LengthCapExceeded {
            len: base.len(),
            max_len: config.max_len,
        });
    }
    let mut s = base.to_vec();
    for (step, &idx) in indices.iter().enumerate() {
        if idx >= s.len() {
            return Err(Error::IndexOutOfBounds {
                step,
                index: idx,
                len: s.len(),
            });
        }
        let len = s.len().saturating_mul(2);
        if len > config.max_len {
            return Err(Error::LengthCapExceeded {
                len,
                max_len: config.max_len,
            });
        }
        let mut next = Vec::with_capacity(len);
        next.extend_from_slice(&s[..=idx]);
        next.extend_from_slice(&s);
        next.extend_from_slice(&s[idx + 1..]);
        trace!("step {step}: insert after {idx}, length {len}");
        s = next;
    }
    Ok(s)
}

/// A base string and the indices to expand it with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Template {
    pub base: Sequence,
    pub indices: Vec<usize>,
}

impl Template {
    pub fn expand(&self, config: &ExpandConfig) -> Result<Sequence> {
        expand(&self.base, &self.indices, config)
    }
}

/// The parsed input description: one template per sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputDescription {
    pub a: Template,
    pub b: Template,
}

/// Whether `line` is an index line rather than a base string.
fn is_index(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|c| c.is_ascii_digit())
}

impl InputDescription {
    /// Parse a description.
    ///
    /// Lines are trimmed. A line of only digits is an index; any other line,
    /// including a blank one, is the next base string, so a blank line stands
    /// for an empty sequence. After the second sequence a blank line ends the
    /// description, and only blank lines may follow it.
    pub fn parse(text: &str) -> Result<Self> {
        let mut templates: Vec<Template> = Vec::with_capacity(2);
        let mut done = false;
        for (line_idx, line) in text.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = line.trim();
            let unexpected = || Error::UnexpectedLine {
                line: line_no,
                text: line.to_string(),
            };
            if done {
                if !line.is_empty() {
                    return Err(unexpected());
                }
                continue;
            }
            if is_index(line) {
                let Some(t) = templates.last_mut() else {
                    return Err(Error::MissingBaseString { which: 1 });
                };
                let idx = line.parse::<usize>().map_err(|_| Error::InvalidIndex {
                    line: line_no,
                    text: line.to_string(),
                })?;
                t.indices.push(idx);
            } else if templates.len() == 2 {
                if !line.is_empty() {
                    return Err(unexpected());
                }
                done = true;
            } else {
                templates.push(Template {
                    base: line.as_bytes().to_vec(),
                    indices: vec![],
                });
            }
        }
        let mut templates = templates.into_iter();
        let a = templates.next().ok_or(Error::MissingBaseString { which: 1 })?;
        let b = templates.next().ok_or(Error::MissingBaseString { which: 2 })?;
        Ok(InputDescription { a, b })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// Expand both templates.
    pub fn expand(&self, config: &ExpandConfig) -> Result<(Sequence, Sequence)> {
        let a = self.a.expand(config)?;
        let b = self.b.expand(config)?;
        debug!("Expanded input to lengths {} and {}", a.len(), b.len());
        Ok((a, b))
    }
}

impl FromStr for InputDescription {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
