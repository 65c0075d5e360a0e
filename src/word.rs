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

use num::{PrimInt, Unsigned};
use std::{fmt::Debug, hash::Hash};

///
/// Unsigned integer used as the storage granule of a bitset.
///
/// Implemented for all the primitive unsigned integers; `BITS` is the width
/// of the word in bits.
pub trait Word:
    PrimInt + Unsigned + Hash + Debug + Default + Send + Sync + 'static
{
    const BITS: usize;
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {
        $(
            impl Word for $t {
                const BITS: usize = <$t>::BITS as usize;
            }
        )*
    };
}

impl_word!(u8, u16, u32, u64, u128, usize);

///
/// Number of `W` words needed to hold `n` bits.
pub const fn words_for<W: Word>(n: usize) -> usize {
    n.div_ceil(W::BITS)
}

///
/// Word with the lowest `nbits` bits set. Saturates to all ones.
pub(crate) fn low_mask<W: Word>(nbits: usize) -> W {
    if nbits >= W::BITS {
        W::max_value()
    } else {
        (W::one() << nbits) - W::one()
    }
}

#[cfg(test)]
mod tests {
    use super::{Word, low_mask, words_for};

    #[test]
    fn word_widths() {
        assert_eq!(<u8 as Word>::BITS, 8);
        assert_eq!(<u16 as Word>::BITS, 16);
        assert_eq!(<u32 as Word>::BITS, 32);
        assert_eq!(<u64 as Word>::BITS, 64);
        assert_eq!(<u128 as Word>::BITS, 128);
        assert_eq!(<usize as Word>::BITS, usize::BITS as usize);
    }

    #[test]
    fn words_needed() {
        assert_eq!(words_for::<u8>(0), 0);
        assert_eq!(words_for::<u8>(1), 1);
        assert_eq!(words_for::<u8>(8), 1);
        assert_eq!(words_for::<u8>(9), 2);
        assert_eq!(words_for::<u64>(64), 1);
        assert_eq!(words_for::<u64>(65), 2);
        assert_eq!(words_for::<u32>(100), 4);
    }

    #[test]
    fn masks() {
        assert_eq!(low_mask::<u8>(0), 0);
        assert_eq!(low_mask::<u8>(5), 0b1_1111);
        assert_eq!(low_mask::<u8>(8), u8::MAX);
        assert_eq!(low_mask::<u8>(20), u8::MAX);
        assert_eq!(low_mask::<u64>(63), u64::MAX >> 1);
    }
}
