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

use super::{Error, FixedBitSet};
use crate::word::Word;
use num::traits::AsPrimitive;
use std::{fmt, str::FromStr};

impl<W: Word, const N: usize, const WORDS: usize> FixedBitSet<W, N, WORDS> {
    ///
    /// Bitset holding the low `N` bits of `value`, low word first.
    /// Bits of `value` at positions `>= N` are discarded.
    pub fn from_integer<T>(value: T) -> Self
    where
        T: Word + AsPrimitive<W>,
    {
        let mut bits = Self::new();
        if T::BITS <= W::BITS {
            if let Some(first) = bits.words.first_mut() {
                *first = value.as_();
            }
        } else {
            let mut rest = value;
            for word in bits.words.iter_mut() {
                if rest.is_zero() {
                    break;
                }
                *word = rest.as_();
                rest = rest >> W::BITS;
            }
        }
        bits.sanitize();
        bits
    }

    ///
    /// Value of the bitset as an unsigned integer of type `T`.
    ///
    /// Fails with `Error::OverflowError` unless every set bit lies below
    /// `T::BITS`.
    pub fn to_integer<T>(&self) -> Result<T, Error>
    where
        T: Word,
        W: AsPrimitive<T>,
    {
        let fits = (T::BITS / W::BITS).max(1);
        if self.words.iter().skip(fits).any(|w| !w.is_zero()) {
            return Err(self.overflow::<T>());
        }
        let first = self.words.first().copied().unwrap_or_else(W::zero);
        if T::BITS < W::BITS {
            if !(first >> T::BITS).is_zero() {
                return Err(self.overflow::<T>());
            }
            return Ok(first.as_());
        }
        if T::BITS == W::BITS {
            return Ok(first.as_());
        }
        Ok(self
            .words
            .iter()
            .take(fits)
            .rev()
            .fold(T::zero(), |acc, w| (acc << W::BITS) | w.as_()))
    }

    fn overflow<T: Word>(&self) -> Error {
        log::debug!(
            "{}-bit value {} does not fit in {} bits",
            N,
            self,
            T::BITS
        );
        Error::OverflowError(T::BITS, N)
    }

    ///
    /// `N` characters, bit `N - 1` first, `zero` and `one` standing for the
    /// bit values.
    pub fn to_string_with(&self, zero: char, one: char) -> String {
        (0..N)
            .rev()
            .map(|i| if self.get(i) { one } else { zero })
            .collect()
    }

    ///
    /// Parses the characters of `s` in `[pos, pos + n)`, with
    /// `n = min(N, len, chars(s) - pos)`. The last character of the range is
    /// bit 0. Characters other than `zero` and `one` are rejected with
    /// `Error::InvalidCharError`; `pos` past the end of `s` with
    /// `Error::OutOfRangeError`.
    pub fn from_str_with(
        s: &str,
        pos: usize,
        len: usize,
        zero: char,
        one: char,
    ) -> Result<Self, Error> {
        let chars: Vec<char> = s.chars().collect();
        if pos > chars.len() {
            return Err(Error::OutOfRangeError(pos, chars.len()));
        }
        let n = N.min(len).min(chars.len() - pos);

        let mut bits = Self::new();
        for (i, &ch) in chars[pos..pos + n].iter().rev().enumerate() {
            if ch == one {
                bits.bit_mut(i).set(true);
            } else if ch != zero {
                let at = pos + n - 1 - i;
                log::debug!("rejecting {:?} at {} in {:?}", ch, at, s);
                return Err(Error::InvalidCharError(ch, at));
            }
        }
        Ok(bits)
    }
}

impl<W: Word, const N: usize, const WORDS: usize> FromStr
    for FixedBitSet<W, N, WORDS>
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with(s, 0, usize::MAX, '0', '1')
    }
}

impl<W: Word, const N: usize, const WORDS: usize> fmt::Display
    for FixedBitSet<W, N, WORDS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_with('0', '1'))
    }
}

impl<W: Word, const N: usize, const WORDS: usize> fmt::Debug
    for FixedBitSet<W, N, WORDS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBitSet<{}>({})", N, self)
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl<W, const N: usize, const WORDS: usize> From<$t>
                for FixedBitSet<W, N, WORDS>
            where
                W: Word,
                $t: AsPrimitive<W>,
            {
                fn from(value: $t) -> Self {
                    Self::from_integer(value)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
