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

use anyhow::{Ok, Result, anyhow};
use mpi::{
    topology::SimpleCommunicator,
    traits::{Communicator, Root},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sope_bitset::{cond_error, cond_println, ensure_eq, fixed_bitset};

type Bits = fixed_bitset!(u16; 77);

fn seeded_bits(seed: u64) -> Bits {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Bits::from_integer(rng.random::<u128>())
}

fn test_bcast_one(comm: &SimpleCommunicator) -> Result<()> {
    let expected = seeded_bits(0);
    let mut bits = if comm.rank() == 0 {
        expected
    } else {
        Bits::new()
    };
    comm.process_at_rank(0).broadcast_into(&mut bits);
    ensure_eq!(bits, expected);
    ensure_eq!(bits.count(), expected.count());
    Ok(())
}

fn test_bcast_vec(comm: &SimpleCommunicator) -> Result<()> {
    let nsend = 25;
    let root = comm.size() - 1;
    let expected: Vec<Bits> = (0..nsend).map(seeded_bits).collect();
    let mut v_inout = if comm.rank() == root {
        expected.clone()
    } else {
        vec![Bits::new(); expected.len()]
    };
    comm.process_at_rank(root).broadcast_into(&mut v_inout[..]);

    ensure_eq!(v_inout.len(), expected.len());
    for (a, b) in v_inout.iter().zip(expected.iter()) {
        ensure_eq!(*a, *b);
    }
    Ok(())
}

fn log_if_error<T>(ex: Result<T>, comm: &SimpleCommunicator, tm: &str) {
    match ex {
        Result::Ok(_) => {
            cond_println!(comm.rank() == 0; "{} SUCCESSFUL", tm);
        }
        Result::Err(err) => {
            cond_error!(true; "[{}] {} FAILED: {}", comm.rank(), tm, err);
        }
    }
}

fn main() -> Result<()> {
    let _ = env_logger::try_init();
    let universe =
        mpi::initialize().ok_or_else(|| anyhow!("MPI already initialized"))?;
    let world = universe.world();
    log_if_error(test_bcast_one(&world), &world, "BROADCAST ONE");
    log_if_error(test_bcast_vec(&world), &world, "BROADCAST VEC");
    Ok(())
}
