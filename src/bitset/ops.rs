//
// Copyright 2026 Georgia Institute of Technology
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use super::FixedBitSet;
use crate::word::Word;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not,
};

// Word-wise algebra. Padding bits are zero in both operands, so they stay
// zero under and/or/xor.
macro_rules! impl_bitwise {
    ($op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident, $sym:tt) => {
        impl<W: Word, const N: usize, const WORDS: usize> $op_assign<&Self>
            for FixedBitSet<W, N, WORDS>
        {
            fn $fn_assign(&mut self, rhs: &Self) {
                for (l, r) in self.words.iter_mut().zip(rhs.words.iter()) {
                    *l = *l $sym *r;
                }
            }
        }

        impl<W: Word, const N: usize, const WORDS: usize> $op_assign
            for FixedBitSet<W, N, WORDS>
        {
            fn $fn_assign(&mut self, rhs: Self) {
                self.$fn_assign(&rhs);
            }
        }

        impl<W: Word, const N: usize, const WORDS: usize> $op
            for FixedBitSet<W, N, WORDS>
        {
            type Output = Self;

            fn $fn(mut self, rhs: Self) -> Self {
                self.$fn_assign(&rhs);
                self
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<W: Word, const N: usize, const WORDS: usize> Not
    for FixedBitSet<W, N, WORDS>
{
    type Output = Self;

    fn not(mut self) -> Self {
        self.flip_all();
        self
    }
}

/// Unchecked read; `bit` must be less than `N`.
impl<W: Word, const N: usize, const WORDS: usize> Index<usize>
    for FixedBitSet<W, N, WORDS>
{
    type Output = bool;

    fn index(&self, bit: usize) -> &bool {
        if self.get(bit) { &true } else { &false }
    }
}
