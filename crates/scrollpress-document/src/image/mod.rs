// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module -- whitespace trimming and resolution-metadata probing.

pub mod dpi;
pub mod trim;

pub use dpi::detect_dpi;
pub use trim::trim_whitespace;
