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

use crate::{bitset::FixedBitSet, word::Word};
use mpi::{
    datatype::{DatatypeRef, UncommittedDatatypeRef, UserDatatype},
    traits::Equivalence,
};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use std::{marker::PhantomData, sync::atomic::AtomicPtr};
use typemap::{Key, ShareMap};

struct DTKeyWrapper<B>(PhantomData<B>);

impl<B: 'static> Key for DTKeyWrapper<B> {
    type Value = AtomicPtr<UserDatatype>;
}

///
/// A bitset travels as a contiguous array of `WORDS` elements of `W`.
///
/// The datatype is created and committed on first use for each bitset type
/// and then kept for the lifetime of the process; statics in generic
/// functions are shared by all instantiations, hence the map keyed by type.
/// MPI has to be initialized before the first call.
unsafe impl<W, const N: usize, const WORDS: usize> Equivalence
    for FixedBitSet<W, N, WORDS>
where
    W: Word + Equivalence<Out = DatatypeRef<'static>>,
{
    type Out = DatatypeRef<'static>;

    fn equivalent_datatype() -> Self::Out {
        static DTYPE: Lazy<Mutex<ShareMap>> =
            Lazy::new(|| Mutex::new(ShareMap::custom()));

        let mut rx = MutexGuard::map(DTYPE.lock(), |map| {
            map.entry::<DTKeyWrapper<Self>>().or_insert_with(|| {
                log::debug!(
                    "committing datatype for {}-bit set: {} x {}-bit words",
                    N,
                    WORDS,
                    W::BITS
                );
                AtomicPtr::new(Box::into_raw(Box::new(
                    UserDatatype::contiguous(
                        WORDS as mpi::Count,
                        &UncommittedDatatypeRef::from(W::equivalent_datatype()),
                    ),
                )))
            })
        });
        let dtype: *mut UserDatatype = *rx.get_mut();
        // never freed, so the reference stays valid for 'static
        unsafe { (*dtype).as_ref() }
    }
}
