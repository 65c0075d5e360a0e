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
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

impl<W: Word, const N: usize, const WORDS: usize> FixedBitSet<W, N, WORDS> {
    ///
    /// Logical shift towards the most significant bit. Vacated low bits are
    /// zero, bits moved past `N - 1` are dropped.
    pub fn shift_left(&mut self, shift: usize) -> &mut Self {
        if shift == 0 {
            return self;
        }
        if shift >= N {
            return self.reset_all();
        }
        let word_shift = shift / W::BITS;
        let offset = shift % W::BITS;
        let words = &mut self.words;

        if offset == 0 {
            for i in (word_shift..WORDS).rev() {
                words[i] = words[i - word_shift];
            }
        } else {
            let carry = W::BITS - offset;
            for i in (word_shift + 1..WORDS).rev() {
                words[i] = (words[i - word_shift] << offset)
                    | (words[i - word_shift - 1] >> carry);
            }
            words[word_shift] = words[0] << offset;
        }
        words[..word_shift].fill(W::zero());

        self.sanitize();
        self
    }

    ///
    /// Logical shift towards bit 0. Vacated high bits are zero.
    pub fn shift_right(&mut self, shift: usize) -> &mut Self {
        if shift == 0 {
            return self;
        }
        if shift >= N {
            return self.reset_all();
        }
        let word_shift = shift / W::BITS;
        let offset = shift % W::BITS;
        let limit = WORDS - word_shift;
        let words = &mut self.words;

        if offset == 0 {
            for i in 0..limit {
                words[i] = words[i + word_shift];
            }
        } else {
            let carry = W::BITS - offset;
            for i in 0..limit - 1 {
                words[i] = (words[i + word_shift] >> offset)
                    | (words[i + word_shift + 1] << carry);
            }
            words[limit - 1] = words[WORDS - 1] >> offset;
        }
        words[limit..].fill(W::zero());

        self
    }
}

impl<W: Word, const N: usize, const WORDS: usize> ShlAssign<usize>
    for FixedBitSet<W, N, WORDS>
{
    fn shl_assign(&mut self, shift: usize) {
        self.shift_left(shift);
    }
}

impl<W: Word, const N: usize, const WORDS: usize> ShrAssign<usize>
    for FixedBitSet<W, N, WORDS>
{
    fn shr_assign(&mut self, shift: usize) {
        self.shift_right(shift);
    }
}

impl<W: Word, const N: usize, const WORDS: usize> Shl<usize>
    for FixedBitSet<W, N, WORDS>
{
    type Output = Self;

    fn shl(mut self, shift: usize) -> Self {
        self <<= shift;
        self
    }
}

impl<W: Word, const N: usize, const WORDS: usize> Shr<usize>
    for FixedBitSet<W, N, WORDS>
{
    type Output = Self;

    fn shr(mut self, shift: usize) -> Self {
        self >>= shift;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::bitset::tests::{Bits100, Bits13, Bits5, Bits64, padding_is_zero};
    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    // reference shift on a plain index set
    fn naive_shift(set: &[usize], shift: isize, n: usize) -> Vec<usize> {
        let mut out: Vec<usize> = set
            .iter()
            .map(|&i| i as isize + shift)
            .filter(|&i| i >= 0 && (i as usize) < n)
            .map(|i| i as usize)
            .collect();
        out.sort();
        out
    }

    proptest! {
        #[test]
        fn left_matches_naive(
            idx in prop::collection::hash_set(0usize..100, 0..40),
            shift in 0usize..120,
        ) {
            let mut b = Bits100::new();
            for &i in &idx {
                b.set(i).unwrap();
            }
            let set: Vec<usize> = b.ones().collect();
            b <<= shift;
            prop_assert!(padding_is_zero(&b));
            prop_assert_eq!(
                b.ones().collect::<Vec<_>>(),
                naive_shift(&set, shift as isize, 100)
            );
        }

        #[test]
        fn right_matches_naive(
            idx in prop::collection::hash_set(0usize..100, 0..40),
            shift in 0usize..120,
        ) {
            let mut b = Bits100::new();
            for &i in &idx {
                b.set(i).unwrap();
            }
            let set: Vec<usize> = b.ones().collect();
            b >>= shift;
            prop_assert_eq!(
                b.ones().collect::<Vec<_>>(),
                naive_shift(&set, -(shift as isize), 100)
            );
        }

        #[test]
        fn shifts_compose(v in any::<u16>(), a in 0usize..14, c in 0usize..14) {
            let b = Bits13::from_integer(v);
            prop_assert_eq!((b << a) << c, b << (a + c));
            prop_assert_eq!((b >> a) >> c, b >> (a + c));
        }
    }

    #[test]
    fn zero_shift_is_identity() {
        let b = Bits13::from_integer(0x1abcu16);
        assert_eq!(b << 0, b);
        assert_eq!(b >> 0, b);
    }

    #[test]
    fn shift_past_width_clears() {
        let b = Bits13::full();
        assert!((b << 13).none());
        assert!((b >> 13).none());
        assert!((b << usize::MAX).none());
        assert!((Bits64::full() >> 64).none());
    }

    #[test]
    fn left_shift_drops_high_bits() {
        let mut b = Bits5::from_integer(0b10110u8);
        b <<= 2;
        assert_eq!(b.to_string(), "11000");
        assert_eq!(b.as_words(), &[0b11000]);
        assert_eq!(b.count(), 2);
    }

    #[test]
    fn whole_word_shifts() {
        let mut b = Bits100::new();
        b.set(3).unwrap().set(40).unwrap();
        b <<= 32;
        assert_eq!(b.ones().collect::<Vec<_>>(), vec![35, 72]);
        b <<= 64;
        assert_eq!(b.ones().collect::<Vec<_>>(), vec![99]);
        b <<= 1;
        assert!(b.none());

        let mut b = Bits100::new();
        b.set(99).unwrap().set(64).unwrap().set(10).unwrap();
        b >>= 64;
        assert_eq!(b.ones().collect::<Vec<_>>(), vec![0, 35]);
    }

    #[test]
    fn carries_across_words() {
        let mut b = Bits100::new();
        b.set(31).unwrap();
        b <<= 1;
        assert_eq!(b.as_words(), &[0, 1, 0, 0]);
        b <<= 37;
        assert_eq!(b.ones().collect::<Vec<_>>(), vec![69]);
        b >>= 38;
        assert_eq!(b.ones().collect::<Vec<_>>(), vec![31]);
    }

    #[test]
    fn random_round_trip_when_no_bits_lost() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for _ in 0..64 {
            let v: u64 = rng.random::<u64>() >> 13;
            let shift = rng.random_range(0..=13usize);
            let b = Bits64::from_integer(v);
            assert_eq!((b << shift) >> shift, b);
        }
    }
}
