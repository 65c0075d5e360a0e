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

mod convert;
mod ops;
mod reference;
mod shift;

use crate::word::{Word, low_mask, words_for};
use thiserror::Error;

pub use reference::BitRef;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Bit Index Out of Range:: index {0}, size {1}")]
    OutOfRangeError(usize, usize),
    #[error("Invalid Character:: {0:?} at position {1}")]
    InvalidCharError(char, usize),
    #[error("Overflow:: {1}-bit value does not fit in {0} bits")]
    OverflowError(usize, usize),
}

///
/// Spells out the `FixedBitSet` type holding `N` bits in words of type `W`
/// (`u64` when omitted), filling in the word count.
///
/// ```
/// use sope_bitset::fixed_bitset;
///
/// type Flags = fixed_bitset!(u8; 5);
/// let mut flags = Flags::new();
/// flags.set(4).unwrap();
/// assert_eq!(flags.to_string(), "10000");
/// ```
#[macro_export]
macro_rules! fixed_bitset {
    ($w:ty; $n:expr) => {
        $crate::bitset::FixedBitSet<
            $w,
            { $n },
            { $crate::word::words_for::<$w>($n) },
        >
    };
    ($n:expr) => {
        $crate::fixed_bitset!(u64; $n)
    };
}

///
/// Fixed-width set of `N` bits packed into `WORDS` words of type `W`.
///
/// Word 0 holds bits `[0, W::BITS)`, word 1 the next `W::BITS` bits and so
/// on. `WORDS` has to be `words_for::<W>(N)`; the `fixed_bitset!` macro
/// fills it in. Bits of the last word at positions `>= N` are always zero,
/// so whole-word comparison, `count` and `any` need no masking.
///
/// Checked accessors (`test`, `set`, `reset`, `flip`) return
/// `Error::OutOfRangeError` for `i >= N`. Unchecked ones (`get`, `bit_mut`,
/// indexing) require `i < N`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct FixedBitSet<W: Word, const N: usize, const WORDS: usize> {
    words: [W; WORDS],
}

impl<W: Word, const N: usize, const WORDS: usize> FixedBitSet<W, N, WORDS> {
    const LAYOUT: () = assert!(
        WORDS == words_for::<W>(N),
        "WORDS must equal words_for::<W>(N)"
    );

    /// All bits cleared.
    pub fn new() -> Self {
        let () = Self::LAYOUT;
        FixedBitSet {
            words: [W::zero(); WORDS],
        }
    }

    /// All `N` bits set.
    pub fn full() -> Self {
        let mut bits = Self::new();
        bits.set_all();
        bits
    }

    /// Number of logical bits.
    pub const fn size(&self) -> usize {
        N
    }

    pub const fn num_words(&self) -> usize {
        WORDS
    }

    /// Storage words, least significant first.
    pub fn as_words(&self) -> &[W; WORDS] {
        &self.words
    }

    // mask of the valid bits in the last word
    fn last_word_mask() -> W {
        match N % W::BITS {
            0 => W::max_value(),
            tail => low_mask(tail),
        }
    }

    // re-establishes the zero padding above bit N
    fn sanitize(&mut self) {
        if let Some(last) = self.words.last_mut() {
            *last = *last & Self::last_word_mask();
        }
    }

    fn locate(i: usize) -> (usize, W) {
        (i / W::BITS, W::one() << (i % W::BITS))
    }

    fn check(i: usize) -> Result<(), Error> {
        if i < N {
            Ok(())
        } else {
            Err(Error::OutOfRangeError(i, N))
        }
    }

    ///
    /// Unchecked read of bit `i`.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        debug_assert!(i < N, "bit index {} out of range {}", i, N);
        let (w, mask) = Self::locate(i);
        self.words[w] & mask != W::zero()
    }

    ///
    /// Proxy for bit `i` allowing assignment and flipping in place.
    /// Unchecked: `i` must be less than `N`.
    #[inline]
    pub fn bit_mut(&mut self, i: usize) -> BitRef<'_, W> {
        debug_assert!(i < N, "bit index {} out of range {}", i, N);
        let (w, mask) = Self::locate(i);
        BitRef::new(&mut self.words[w], mask)
    }

    /// Checked read of bit `i`.
    pub fn test(&self, i: usize) -> Result<bool, Error> {
        Self::check(i)?;
        Ok(self.get(i))
    }

    /// Sets bit `i`.
    pub fn set(&mut self, i: usize) -> Result<&mut Self, Error> {
        self.set_to(i, true)
    }

    /// Sets bit `i` to `value`.
    pub fn set_to(&mut self, i: usize, value: bool) -> Result<&mut Self, Error> {
        Self::check(i)?;
        self.bit_mut(i).set(value);
        Ok(self)
    }

    /// Clears bit `i`.
    pub fn reset(&mut self, i: usize) -> Result<&mut Self, Error> {
        self.set_to(i, false)
    }

    /// Toggles bit `i`.
    pub fn flip(&mut self, i: usize) -> Result<&mut Self, Error> {
        Self::check(i)?;
        self.bit_mut(i).flip();
        Ok(self)
    }

    ///
    /// True iff every one of the `N` bits is set (vacuously true for `N == 0`).
    pub fn all(&self) -> bool {
        match self.words.split_last() {
            None => true,
            Some((last, interior)) => {
                interior.iter().all(|w| *w == W::max_value())
                    && *last == Self::last_word_mask()
            }
        }
    }

    pub fn any(&self) -> bool {
        self.words.iter().any(|w| !w.is_zero())
    }

    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Number of set bits.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn set_all(&mut self) -> &mut Self {
        self.words.fill(W::max_value());
        self.sanitize();
        self
    }

    pub fn reset_all(&mut self) -> &mut Self {
        self.words.fill(W::zero());
        self
    }

    pub fn flip_all(&mut self) -> &mut Self {
        for w in self.words.iter_mut() {
            *w = !*w;
        }
        self.sanitize();
        self
    }

    ///
    /// Indices of the set bits in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &w)| {
            let mut rest = w;
            std::iter::from_fn(move || {
                if rest.is_zero() {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest = rest & (rest - W::one());
                Some(wi * W::BITS + bit)
            })
        })
    }
}

impl<W: Word, const N: usize, const WORDS: usize> Default
    for FixedBitSet<W, N, WORDS>
{
    fn default() -> Self {
        Self::new()
    }
}
