// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::code::BitCode;
use proptest::prelude::*;

impl Arbitrary for BitCode {
    type Parameters = Option<usize>;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(width: Self::Parameters) -> Self::Strategy {
        bit_code(width.unwrap_or(4)).boxed()
    }
}

/// A code of the given width with arbitrary `{0, 1, -}` symbols.
pub fn bit_code(width: usize) -> impl Strategy<Value = BitCode> + Clone {
    prop::collection::vec(any::<Option<bool>>(), width)
        .prop_map(|bits| BitCode::new(bits).expect("width is within range"))
}

/// A non-empty set of distinct minterms for an `n`-variable function,
/// returned in ascending order.
pub fn minterm_set(n: usize) -> impl Strategy<Value = Vec<u32>> {
    let max = 1u32 << n;
    prop::collection::btree_set(0..max, 1..=max as usize)
        .prop_map(|set| set.into_iter().collect())
}
