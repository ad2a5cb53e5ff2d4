// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scrollpress -- Core types, error definitions, and configuration shared
// across all crates.

pub mod config;
pub mod error;
pub mod types;
pub mod units;

pub use config::{ConvertConfig, NumberingSpec, TitleSpec};
pub use error::ScrollpressError;
pub use types::*;
