use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use log::{debug, trace};

use crate::consts::{DEFAULT_ADJACENT, DEFAULT_CHROM, DEFAULT_END, DEFAULT_START};
use crate::errors::{GenomicIntervalError, Result};
use crate::models::relation::Relation;
use crate::utils::{parse_coordinate, split_interval_notation};

#[inline]
fn between(x: i64, lo: i64, hi: i64) -> bool {
    lo <= x && x <= hi
}

///
/// A genomic interval such as `chr1:123-456`, in 1-based, fully-closed
/// coordinates.
///
/// `adjacent` is the tolerance, in bp, used by [`GenomicInterval::compare`] to
/// tell "near" disjoint intervals from distant ones. It is a comparison-time
/// setting only: equality, hashing and ordering look at the chromosome and
/// coordinates and nothing else.
///
#[derive(Debug, Clone)]
pub struct GenomicInterval {
    chrom: String,
    start: i64,
    end: i64,
    adjacent: u32,
}

impl GenomicInterval {
    ///
    /// Create a new interval, rejecting anything that breaks `1 <= start <= end`.
    ///
    /// # Arguments
    ///
    /// - chrom: chromosome name
    /// - start: 1-based inclusive start
    /// - end: 1-based inclusive end
    ///
    pub fn new(chrom: impl Into<String>, start: i64, end: i64) -> Result<Self> {
        let chrom = chrom.into();
        if start < 1 || end < 1 || start > end {
            return Err(GenomicIntervalError::InvalidRange { chrom, start, end });
        }
        Ok(GenomicInterval {
            chrom,
            start,
            end,
            adjacent: DEFAULT_ADJACENT,
        })
    }

    ///
    /// Parse `chrom:start-end` or `chrom:pos` notation.
    ///
    /// A single position yields a one-base interval and a reversed range is
    /// swapped into order. Unlike [`GenomicInterval::new`], this entry point is
    /// lenient about bound order; the remaining invariants are still enforced.
    ///
    /// # Arguments
    ///
    /// - text: interval notation, e.g. `chr1:400-600`
    ///
    pub fn parse(text: &str) -> Result<Self> {
        let (chrom, start_token, end_token) = split_interval_notation(text)?;

        let mut start = parse_coordinate(start_token, text)?;
        let mut end = match end_token {
            Some(token) => parse_coordinate(token, text)?,
            None => start,
        };

        if start > end {
            debug!("Swapping reversed bounds while parsing {:?}", text);
            std::mem::swap(&mut start, &mut end);
        }

        GenomicInterval::new(chrom, start, end)
    }

    ///
    /// Create an interval from 0-based, half-open coordinates. Only the start
    /// shifts: a half-open end already equals the closed 1-based end.
    ///
    /// # Arguments
    ///
    /// - chrom: chromosome name
    /// - zero_start: 0-based inclusive start
    /// - zero_end: 0-based exclusive end
    ///
    pub fn from_zero_based(
        chrom: impl Into<String>,
        zero_start: i64,
        zero_end: i64,
    ) -> Result<Self> {
        let chrom = chrom.into();
        match zero_start.checked_add(1) {
            Some(start) => GenomicInterval::new(chrom, start, zero_end),
            None => Err(GenomicIntervalError::InvalidRange {
                chrom,
                start: zero_start,
                end: zero_end,
            }),
        }
    }

    pub fn chrom(&self) -> &str {
        &self.chrom
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn adjacent(&self) -> u32 {
        self.adjacent
    }

    pub fn set_adjacent(&mut self, adjacent: u32) {
        self.adjacent = adjacent;
    }

    pub fn with_adjacent(mut self, adjacent: u32) -> Self {
        self.adjacent = adjacent;
        self
    }

    /// 0-based, half-open start.
    pub fn zero_based_start(&self) -> i64 {
        self.start - 1
    }

    /// 0-based, half-open end.
    pub fn zero_based_end(&self) -> i64 {
        self.end
    }

    pub fn size(&self) -> i64 {
        self.end - self.start + 1
    }

    pub fn length(&self) -> i64 {
        self.size()
    }

    ///
    /// Single-base interval at the midpoint, `floor((start + end) / 2)`. Like
    /// any freshly built interval it has the default tolerance.
    ///
    pub fn center(&self) -> GenomicInterval {
        let center = self.start + (self.end - self.start) / 2;
        GenomicInterval {
            chrom: self.chrom.clone(),
            start: center,
            end: center,
            adjacent: DEFAULT_ADJACENT,
        }
    }

    ///
    /// Classify `other` relative to `self`. Rules are checked in priority
    /// order and the first one that matches wins, so adjacency takes
    /// precedence over the plain "off" cases.
    ///
    /// The relation is not symmetric, and the receiver's `adjacent` tolerance
    /// is the one that applies.
    ///
    pub fn compare(&self, other: &GenomicInterval) -> Relation {
        let adjacent = i64::from(self.adjacent);

        let relation = if self.chrom != other.chrom {
            Relation::DifferentChromosome
        } else if between(other.end, self.start - adjacent, self.start - 1) {
            Relation::LeftAdjacent
        } else if self
            .end
            .checked_add(1)
            .is_some_and(|lo| between(other.start, lo, self.end.saturating_add(adjacent)))
        {
            Relation::RightAdjacent
        } else if other.end < self.start {
            Relation::LeftOff
        } else if self.end < other.start {
            Relation::RightOff
        } else if self.start == other.start && self.end == other.end {
            Relation::Equal
        } else if between(other.start, self.start, self.end)
            && between(other.end, self.start, self.end)
        {
            Relation::Contained
        } else if between(self.start, other.start, other.end)
            && between(self.end, other.start, other.end)
        {
            Relation::Containing
        } else if other.start < self.start && between(other.end, self.start, self.end) {
            Relation::LeftOverlapped
        } else if between(other.start, self.start, self.end) && self.end < other.end {
            Relation::RightOverlapped
        } else {
            unreachable!("no relation between {} and {}", self, other)
        };

        trace!("{} vs {}: {}", self, other, relation);
        relation
    }

    /// Overlapping, or disjoint but within the receiver's tolerance window.
    pub fn nearly_overlapped(&self, other: &GenomicInterval) -> bool {
        self.compare(other).is_nearly_overlapped()
    }

    /// Sharing at least one base.
    pub fn overlapped(&self, other: &GenomicInterval) -> bool {
        self.compare(other).is_overlapped()
    }

    ///
    /// Bounding interval spanning both operands, defined even when they are
    /// disjoint. Fails when the chromosomes differ. The result has the default
    /// tolerance, not the receiver's.
    ///
    pub fn expand(&self, other: &GenomicInterval) -> Result<GenomicInterval> {
        if self.chrom != other.chrom {
            return Err(GenomicIntervalError::ChromosomeMismatch(
                self.chrom.clone(),
                other.chrom.clone(),
            ));
        }
        Ok(GenomicInterval {
            chrom: self.chrom.clone(),
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            adjacent: DEFAULT_ADJACENT,
        })
    }

    ///
    /// Signed overlap between the two intervals.
    ///
    /// A positive value is the number of shared bases. Zero or a negative
    /// value is the negated gap between disjoint intervals, so `0` means
    /// book-ended and `-199` a 199 bp gap. Intervals on different chromosomes
    /// always give `0`.
    ///
    pub fn overlap(&self, other: &GenomicInterval) -> i64 {
        match self.compare(other) {
            Relation::DifferentChromosome => 0,
            Relation::LeftOff | Relation::LeftAdjacent | Relation::LeftOverlapped => {
                other.end - self.start + 1
            }
            Relation::Contained | Relation::Equal => other.size(),
            Relation::Containing => self.size(),
            Relation::RightOff | Relation::RightAdjacent | Relation::RightOverlapped => {
                self.end - other.start + 1
            }
        }
    }
}

impl Default for GenomicInterval {
    fn default() -> Self {
        GenomicInterval {
            chrom: DEFAULT_CHROM.to_string(),
            start: DEFAULT_START,
            end: DEFAULT_END,
            adjacent: DEFAULT_ADJACENT,
        }
    }
}

impl Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.start, self.end)
    }
}

impl FromStr for GenomicInterval {
    type Err = GenomicIntervalError;

    fn from_str(s: &str) -> Result<Self> {
        GenomicInterval::parse(s)
    }
}

impl TryFrom<&str> for GenomicInterval {
    type Error = GenomicIntervalError;

    fn try_from(value: &str) -> Result<Self> {
        GenomicInterval::parse(value)
    }
}

impl TryFrom<String> for GenomicInterval {
    type Error = GenomicIntervalError;

    fn try_from(value: String) -> Result<Self> {
        GenomicInterval::parse(&value)
    }
}

impl PartialEq for GenomicInterval {
    #[inline]
    fn eq(&self, other: &GenomicInterval) -> bool {
        self.chrom == other.chrom && self.start == other.start && self.end == other.end
    }
}

impl Eq for GenomicInterval {}

impl Hash for GenomicInterval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chrom.hash(state);
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl Ord for GenomicInterval {
    #[inline]
    fn cmp(&self, other: &GenomicInterval) -> Ordering {
        self.chrom
            .cmp(&other.chrom)
            .then(self.start.cmp(&other.start))
            .then(self.end.cmp(&other.end))
    }
}

impl PartialOrd for GenomicInterval {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Serialised as canonical text so that deserialisation goes through `parse`
// and can never produce an interval that breaks the invariants.
#[cfg(feature = "serde")]
impl serde::Serialize for GenomicInterval {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GenomicInterval {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        GenomicInterval::parse(&text).map_err(serde::de::Error::custom)
    }
}
