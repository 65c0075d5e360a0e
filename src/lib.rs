//! Fixed-width bitset for the [sope] MPI toolkit, modelled on the `bitset`
//! of patflick's [mxx] C++ template library.
//!
//! 1. `FixedBitSet<W, N, WORDS>` packs `N` bits into `WORDS` unsigned words
//!    of type `W`, with checked and unchecked bit access, word-crossing
//!    shifts, population count and string/integer conversions.
//! 2. With the `mpi` feature, the bitset implements
//!    `mpi::traits::Equivalence` so it can be sent as a contiguous array of
//!    words.
//!
//! [sope]: https://github.com/srirampc/sope
//! [mxx]: https://github.com/patflick/mxx

pub mod bitset;
#[cfg(feature = "mpi")]
pub mod datatype;
pub mod log;
pub mod word;

pub use bitset::{BitRef, Error, FixedBitSet};
pub use word::{Word, words_for};
