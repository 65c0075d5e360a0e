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

use crate::word::Word;
use std::{fmt, ops::Not};

///
/// Handle to a single bit of a live `FixedBitSet`, obtained from
/// `FixedBitSet::bit_mut`. Holds the storage word and the bit's mask; the
/// borrow keeps the bitset alive and exclusively held while the handle is.
pub struct BitRef<'a, W: Word> {
    word: &'a mut W,
    mask: W,
}

impl<'a, W: Word> BitRef<'a, W> {
    pub(crate) fn new(word: &'a mut W, mask: W) -> Self {
        BitRef { word, mask }
    }

    pub fn get(&self) -> bool {
        *self.word & self.mask != W::zero()
    }

    pub fn set(&mut self, value: bool) -> &mut Self {
        *self.word = if value {
            *self.word | self.mask
        } else {
            *self.word & !self.mask
        };
        self
    }

    pub fn flip(&mut self) -> &mut Self {
        *self.word = *self.word ^ self.mask;
        self
    }

    /// Copies the value of another bit into this one.
    pub fn assign(&mut self, other: &BitRef<'_, W>) -> &mut Self {
        self.set(other.get())
    }
}

impl<W: Word> From<BitRef<'_, W>> for bool {
    fn from(bit: BitRef<'_, W>) -> bool {
        bit.get()
    }
}

impl<W: Word> Not for &BitRef<'_, W> {
    type Output = bool;

    fn not(self) -> bool {
        !self.get()
    }
}

impl<W: Word> fmt::Debug for BitRef<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BitRef").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::bitset::tests::{Bits100, Bits13, padding_is_zero};

    #[test]
    fn read_assign_flip() {
        let mut b = Bits13::new();
        {
            let mut bit = b.bit_mut(9);
            assert!(!bit.get());
            bit.set(true);
            assert!(bit.get());
            assert!(!(!&bit));
        }
        assert!(b.test(9).unwrap());
        assert_eq!(b.count(), 1);

        b.bit_mut(9).flip().flip().flip();
        assert!(!b.get(9));

        b.bit_mut(12).set(true).set(false).set(true);
        assert!(b.get(12));
        assert!(padding_is_zero(&b));
        assert!(bool::from(b.bit_mut(12)));
    }

    #[test]
    fn assign_between_bitsets() {
        let mut src = Bits100::new();
        src.set(70).unwrap();
        let mut dst = Bits100::new();

        dst.bit_mut(3).assign(&src.bit_mut(70));
        assert!(dst.get(3));
        dst.bit_mut(3).assign(&src.bit_mut(71));
        assert!(dst.none());
    }

    #[test]
    fn touches_only_its_bit() {
        let mut b = Bits100::full();
        b.bit_mut(64).set(false);
        assert_eq!(b.count(), 99);
        assert_eq!(b.ones().find(|&i| i >= 64), Some(65));
        assert_eq!(format!("{:?}", b.bit_mut(64)), "BitRef(false)");
    }
}
