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

use anyhow::{Ok, Result};
use clap::Parser;
use sope_bitset::{cond_info, cond_println, fixed_bitset};

type Bits = fixed_bitset!(u8; 20);

/// Parse a 20-bit pattern and show what the bitset makes of it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct CLIArgs {
    /// Bit pattern, most significant bit first
    pattern: String,
    /// Character standing for a zero bit
    #[arg(long, default_value_t = '0')]
    zero: char,
    /// Character standing for a one bit
    #[arg(long, default_value_t = '1')]
    one: char,
    /// Shift distance for the shift examples
    #[arg(short, long, default_value_t = 3)]
    shift: usize,
    /// Print every result, not only the summary
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: CLIArgs) -> Result<()> {
    let bits = Bits::from_str_with(
        &args.pattern,
        0,
        usize::MAX,
        args.zero,
        args.one,
    )?;
    cond_info!(args.verbose; "parsed {:?} as {:?}", args.pattern, bits);

    println!("bits    : {}", bits.to_string_with(args.zero, args.one));
    println!(
        "count   : {} (all: {}, any: {}, none: {})",
        bits.count(),
        bits.all(),
        bits.any(),
        bits.none()
    );
    cond_println!(args.verbose; "ones    : {:?}", bits.ones().collect::<Vec<_>>());
    cond_println!(args.verbose; "not     : {}", !bits);
    cond_println!(args.verbose; "<< {:<5}: {}", args.shift, bits << args.shift);
    cond_println!(args.verbose; ">> {:<5}: {}", args.shift, bits >> args.shift);

    match bits.to_integer::<u16>() {
        Result::Ok(v) => println!("as u16  : {}", v),
        Result::Err(err) => println!("as u16  : {}", err),
    }
    println!("as u32  : {}", bits.to_integer::<u32>()?);
    Ok(())
}

fn main() {
    let _ = env_logger::try_init();
    match CLIArgs::try_parse() {
        Result::Ok(args) => {
            if let Err(err) = run(args) {
                log::error!("{}", err);
                eprintln!("error: {}", err);
            }
        }
        Result::Err(err) => {
            let _ = err.print();
        }
    };
}
