// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::Error;
use arrayvec::ArrayVec;
use std::{fmt, str::FromStr};

/// Maximum supported variable count. Keeps every minterm representable as a
/// `u32` and bounds the inline code storage.
pub const MAX_VARS: usize = 32;

/// A fixed-width code over `{0, 1, -}`, most-significant bit first.
///
/// Positions are stored as `Option<bool>`, with `None` as the wildcard
/// (a bit eliminated by combination). Every code compared or combined must
/// have the same width; mixing widths is a programming error and is reported
/// as [`Error::DimensionMismatch`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitCode {
    bits: ArrayVec<Option<bool>, MAX_VARS>,
}

/// Number of 1-bits, by Brian-Kernighan's algorithm: each `x &= x - 1`
/// clears the lowest set bit, so the loop runs once per set bit rather than
/// once per position.
pub fn popcount(mut x: u32) -> u32 {
    let mut ones = 0;
    while x != 0 {
        x &= x - 1;
        ones += 1;
    }
    ones
}

impl BitCode {
    /// Builds a code from explicit symbols. The width must be in
    /// `1..=MAX_VARS`.
    pub fn new(bits: impl IntoIterator<Item = Option<bool>>) -> Result<Self, Error> {
        let bits: Vec<_> = bits.into_iter().collect();
        if bits.is_empty() || bits.len() > MAX_VARS {
            return Err(Error::InvalidVariableCount { n: bits.len() });
        }
        Ok(Self {
            bits: bits.into_iter().collect(),
        })
    }

    /// Encodes a minterm as its width-`n` binary expansion, zero-padded,
    /// most-significant bit first. The minterm must lie in `[0, 2^n)`.
    pub fn encode(minterm: u32, n: usize) -> Result<Self, Error> {
        if n == 0 || n > MAX_VARS {
            return Err(Error::InvalidVariableCount { n });
        }
        if (minterm as u64) >= 1u64 << n {
            return Err(Error::InvalidMinterm { minterm, n });
        }
        let bits = (0..n).rev().map(|ix| Some(minterm >> ix & 1 == 1)).collect();
        Ok(Self { bits })
    }

    /// Reads the code back as an integer. `None` if any position is a
    /// wildcard.
    pub fn decode(&self) -> Option<u32> {
        self.bits.iter().try_fold(0u32, |acc, &bit| match bit {
            Some(true) => Some(acc << 1 | 1),
            Some(false) => Some(acc << 1),
            None => None,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Count of positions fixed to 1.
    pub fn ones(&self) -> u32 {
        self.bits.iter().filter(|&&bit| bit == Some(true)).count() as u32
    }

    pub fn wildcard_count(&self) -> usize {
        self.bits.iter().filter(|bit| bit.is_none()).count()
    }

    /// Wildcard positions as a bit mask, lowest bit for position 0 (the
    /// most significant symbol). Two codes can only be within Hamming
    /// distance 1 if their masks coincide or differ in a single position.
    pub fn wildcard_mask(&self) -> u32 {
        self.bits
            .iter()
            .enumerate()
            .fold(0, |mask, (ix, bit)| match bit {
                None => mask | 1 << ix,
                Some(_) => mask,
            })
    }

    /// Hamming distance over the full width, position by position. A
    /// wildcard in one operand against a concrete bit in the other counts
    /// as a difference.
    pub fn distance(&self, other: &Self) -> Result<usize, Error> {
        self.check_width(other)?;
        Ok(self
            .bits
            .iter()
            .zip(&other.bits)
            .filter(|(a, b)| a != b)
            .count())
    }

    /// Combines two codes at Hamming distance exactly 1: the result is
    /// `self` with the single differing position replaced by the wildcard.
    /// Returns `Ok(None)` when the codes are identical or differ in more
    /// than one position. Symmetric in its arguments.
    pub fn combine(&self, other: &Self) -> Result<Option<Self>, Error> {
        self.check_width(other)?;
        let mut differing = None;
        for (ix, (a, b)) in self.bits.iter().zip(&other.bits).enumerate() {
            if a != b {
                if differing.is_some() {
                    return Ok(None);
                }
                differing = Some(ix);
            }
        }
        Ok(differing.map(|ix| {
            let mut merged = self.clone();
            merged.bits[ix] = None;
            merged
        }))
    }

    /// True iff every non-wildcard position of `self` matches `other`'s
    /// symbol at that position. With `other` a fully specified minterm code,
    /// this is the covering test of the prime implicant chart.
    pub fn covers(&self, other: &Self) -> Result<bool, Error> {
        self.check_width(other)?;
        Ok(self
            .bits
            .iter()
            .zip(&other.bits)
            .all(|(&own, &theirs)| match own {
                Some(bit) => theirs == Some(bit),
                None => true,
            }))
    }

    #[inline]
    pub fn symbols(&self) -> &[Option<bool>] {
        &self.bits
    }

    fn check_width(&self, other: &Self) -> Result<(), Error> {
        if self.width() != other.width() {
            return Err(Error::DimensionMismatch {
                left: self.width(),
                right: other.width(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for BitCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &bit in &self.bits {
            let symbol = match bit {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for BitCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .map(|ch| match ch {
                '0' => Ok(Some(false)),
                '1' => Ok(Some(true)),
                '-' => Ok(None),
                symbol => Err(Error::InvalidCodeSymbol { symbol }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code(s: &str) -> BitCode {
        s.parse().expect("test codes are well formed")
    }

    #[test]
    fn test_encode() {
        assert_eq!(BitCode::encode(0, 3).unwrap(), code("000"));
        assert_eq!(BitCode::encode(5, 3).unwrap(), code("101"));
        assert_eq!(BitCode::encode(5, 4).unwrap(), code("0101"));
        assert_eq!(BitCode::encode(1, 1).unwrap(), code("1"));
        assert_eq!(BitCode::encode(u32::MAX, 32).unwrap().to_string(), "1".repeat(32));
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(
            BitCode::encode(8, 3),
            Err(Error::InvalidMinterm { minterm: 8, n: 3 })
        );
        assert_eq!(
            BitCode::encode(0, 0),
            Err(Error::InvalidVariableCount { n: 0 })
        );
        assert_eq!(
            BitCode::encode(0, 33),
            Err(Error::InvalidVariableCount { n: 33 })
        );
    }

    #[test]
    fn test_popcount_exhaustive() {
        for x in 0..1u32 << 16 {
            let expected = format!("{:b}", x).matches('1').count() as u32;
            assert_eq!(popcount(x), expected, "popcount({})", x);
        }
        assert_eq!(popcount(u32::MAX), 32);
    }

    #[test]
    fn test_distance() {
        assert_eq!(code("000").distance(&code("010")).unwrap(), 1);
        assert_eq!(code("000").distance(&code("000")).unwrap(), 0);
        assert_eq!(code("000").distance(&code("111")).unwrap(), 3);
        // a wildcard against a concrete bit is a difference
        assert_eq!(code("0-0").distance(&code("000")).unwrap(), 1);
        assert_eq!(code("0-0").distance(&code("0-1")).unwrap(), 1);
        assert_eq!(code("-01").distance(&code("1-1")).unwrap(), 2);
    }

    #[test]
    fn test_distance_width_mismatch() {
        assert_eq!(
            code("00").distance(&code("000")),
            Err(Error::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_combine() {
        assert_eq!(code("000").combine(&code("001")).unwrap(), Some(code("00-")));
        assert_eq!(code("00-").combine(&code("01-")).unwrap(), Some(code("0--")));
        assert_eq!(code("000").combine(&code("011")).unwrap(), None);
        assert_eq!(code("000").combine(&code("000")).unwrap(), None);
        // wildcard placement disagreement over two positions does not combine
        assert_eq!(code("-01").combine(&code("1-1")).unwrap(), None);
    }

    #[test]
    fn test_covers() {
        assert!(code("0-0").covers(&code("000")).unwrap());
        assert!(code("0-0").covers(&code("010")).unwrap());
        assert!(!code("0-0").covers(&code("001")).unwrap());
        assert!(code("---").covers(&code("111")).unwrap());
        assert!(code("101").covers(&code("101")).unwrap());
        assert!(!code("101").covers(&code("100")).unwrap());
    }

    #[test]
    fn test_parse_rejects_bad_symbol() {
        assert_eq!(
            "0x1".parse::<BitCode>(),
            Err(Error::InvalidCodeSymbol { symbol: 'x' })
        );
        assert_eq!("".parse::<BitCode>(), Err(Error::InvalidVariableCount { n: 0 }));
    }

    proptest! {
        #[test]
        fn proptest_encode_decode_round_trip(n in 1usize..=16, minterm in 0u32..1 << 16) {
            let minterm = minterm & ((1u32 << n) - 1);
            let encoded = BitCode::encode(minterm, n).unwrap();
            prop_assert_eq!(encoded.width(), n);
            prop_assert_eq!(encoded.decode(), Some(minterm));
            prop_assert_eq!(encoded.ones(), popcount(minterm));
        }

        #[test]
        fn proptest_combine_symmetry(
            (a, b) in (1usize..=8).prop_flat_map(|n| {
                let code = crate::proptest_helpers::bit_code(n);
                (code.clone(), code)
            })
        ) {
            prop_assert_eq!(a.combine(&b).unwrap(), b.combine(&a).unwrap());
        }

        #[test]
        fn proptest_display_parse_round_trip(code in any_with::<BitCode>(Some(6))) {
            let rendered = code.to_string();
            prop_assert_eq!(rendered.parse::<BitCode>().unwrap(), code);
        }
    }
}
