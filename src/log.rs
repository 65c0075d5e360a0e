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

use std::fmt::{Debug, Display};
use thiserror::Error;

#[doc(hidden)]
pub use ::log as __log;
#[doc(hidden)]
pub use anyhow as __anyhow;

#[derive(Error, Debug)]
pub enum EnsureError<F: Debug + Display, T: Debug + Display, L: Debug, R: Debug>
{
    #[error("ensure failed at {0}:{1}")]
    C(F, T, L, R),
    #[error(
        "ensure `left == right` failed at {0}:{1} :: left:({2:?}), right:({3:?})"
    )]
    LR(F, T, L, R),
}

///
/// Logs at `$level` only when `$cond_expr` holds, e.g. only on the root
/// process. The condition is not evaluated if the level is disabled.
#[macro_export]
macro_rules! cond_log {
    ($cond_expr: expr; $level: expr; $($args:tt)* ) => {
        if $crate::log::__log::log_enabled!($level) && $cond_expr {
            $crate::log::__log::log!($level, $($args)*)
        }
    };
}

#[macro_export]
macro_rules! cond_info {
    ($cond_expr: expr; $($args:tt)* ) => {
        $crate::cond_log!($cond_expr; $crate::log::__log::Level::Info; $($args)*)
    };
}

#[macro_export]
macro_rules! cond_debug {
    ($cond_expr: expr; $($args:tt)* ) => {
        $crate::cond_log!($cond_expr; $crate::log::__log::Level::Debug; $($args)*)
    };
}

#[macro_export]
macro_rules! cond_warn {
    ($cond_expr: expr; $($args:tt)* ) => {
        $crate::cond_log!($cond_expr; $crate::log::__log::Level::Warn; $($args)*)
    };
}

#[macro_export]
macro_rules! cond_error {
    ($cond_expr: expr; $($args:tt)* ) => {
        $crate::cond_log!($cond_expr; $crate::log::__log::Level::Error; $($args)*)
    };
}

#[macro_export]
macro_rules! cond_println {
    ($cond_expr: expr; $($args:tt)* ) => {
        if $cond_expr {
            println!($($args)*)
        }
    };
}

#[macro_export]
macro_rules! cond_eprintln {
    ($cond_expr: expr; $($args:tt)* ) => {
        if $cond_expr {
            eprintln!($($args)*)
        }
    };
}

///
/// `anyhow::ensure!` on equality, reporting both sides and the location.
#[macro_export]
macro_rules! ensure_eq {
    ($left:expr, $right:expr $(,)?) => {{
        let lv = ($left);
        let rv = ($right);
        $crate::log::__anyhow::ensure!(
            lv == rv,
            $crate::log::EnsureError::LR(file!(), line!(), lv, rv)
        );
    }};
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr $(,)?) => {{
        $crate::log::__anyhow::ensure!(
            ($cond),
            $crate::log::EnsureError::C(file!(), line!(), 0, 0)
        );
    }};
}
