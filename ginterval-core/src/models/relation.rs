use std::fmt::{self, Display};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::GenomicIntervalError;

///
/// Position of a subject interval relative to a fixed receiver, as returned by
/// [`GenomicInterval::compare`](crate::models::GenomicInterval::compare).
///
/// Imagine the receiver fixed on a number line: `Left*` variants describe a
/// subject hanging off (or lying beyond) the receiver's start, `Right*` its end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Relation {
    DifferentChromosome,
    /// Subject ends within the tolerance window before the receiver starts.
    LeftAdjacent,
    /// Subject starts within the tolerance window after the receiver ends.
    RightAdjacent,
    LeftOff,
    RightOff,
    Equal,
    /// Subject is nested inside the receiver.
    Contained,
    /// Receiver is nested inside the subject.
    Containing,
    LeftOverlapped,
    RightOverlapped,
}

impl Relation {
    pub const ALL: [Relation; 10] = [
        Relation::DifferentChromosome,
        Relation::LeftAdjacent,
        Relation::RightAdjacent,
        Relation::LeftOff,
        Relation::RightOff,
        Relation::Equal,
        Relation::Contained,
        Relation::Containing,
        Relation::LeftOverlapped,
        Relation::RightOverlapped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::DifferentChromosome => "different_chromosome",
            Relation::LeftAdjacent => "left_adjacent",
            Relation::RightAdjacent => "right_adjacent",
            Relation::LeftOff => "left_off",
            Relation::RightOff => "right_off",
            Relation::Equal => "equal",
            Relation::Contained => "contained",
            Relation::Containing => "containing",
            Relation::LeftOverlapped => "left_overlapped",
            Relation::RightOverlapped => "right_overlapped",
        }
    }

    /// True for genuine overlap and for disjoint intervals within the tolerance window.
    #[inline]
    pub fn is_nearly_overlapped(&self) -> bool {
        self.is_overlapped() || matches!(self, Relation::LeftAdjacent | Relation::RightAdjacent)
    }

    /// True only when the two intervals share at least one base.
    #[inline]
    pub fn is_overlapped(&self) -> bool {
        matches!(
            self,
            Relation::Equal
                | Relation::Contained
                | Relation::Containing
                | Relation::LeftOverlapped
                | Relation::RightOverlapped
        )
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Relation {
    type Err = GenomicIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| GenomicIntervalError::parse_error(s, "unknown relation"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_display_from_str_agree() {
        for relation in Relation::ALL {
            let parsed: Relation = relation.to_string().parse().unwrap();
            assert_eq!(parsed, relation);
        }
    }

    #[rstest]
    fn test_from_str_unknown() {
        assert!("different_chrom".parse::<Relation>().is_err());
    }

    #[rstest]
    #[case(Relation::DifferentChromosome, false, false)]
    #[case(Relation::LeftOff, false, false)]
    #[case(Relation::RightOff, false, false)]
    #[case(Relation::LeftAdjacent, true, false)]
    #[case(Relation::RightAdjacent, true, false)]
    #[case(Relation::Equal, true, true)]
    #[case(Relation::Contained, true, true)]
    #[case(Relation::Containing, true, true)]
    #[case(Relation::LeftOverlapped, true, true)]
    #[case(Relation::RightOverlapped, true, true)]
    fn test_overlap_sets(
        #[case] relation: Relation,
        #[case] nearly: bool,
        #[case] overlapped: bool,
    ) {
        assert_eq!(relation.is_nearly_overlapped(), nearly);
        assert_eq!(relation.is_overlapped(), overlapped);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Relation::LeftOverlapped).unwrap();
        assert_eq!(json, "\"left_overlapped\"");
        let back: Relation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Relation::LeftOverlapped);
    }
}
