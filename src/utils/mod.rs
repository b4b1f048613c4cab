/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Miscellaneous utilities.

pub mod float_vec;
pub use float_vec::{FloatVectorFormat, create_parent_dir, format_scientific};

/// The minimum number of elements per task in parallel loops.
///
/// Parallel iterators fragment the input into tasks of at least this many
/// elements, bounding task-spawning overhead on small inputs.
pub const RAYON_MIN_LEN: usize = 1000;
