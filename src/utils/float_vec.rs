/*
 * SPDX-FileCopyrightText: 2026 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Storing and loading vectors of floats in textual formats.
//!
//! The rank vector is the only artifact this tool persists. It is written
//! in scientific notation, one value per node in node order, so that
//! downstream consumers can read values back by position; the number of
//! fractional digits is a parameter (ten in the reference output).

use anyhow::{Context, Result, anyhow, bail};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Formats `x` in scientific notation with `precision` fractional digits
/// and a signed, zero-padded, at-least-two-digit exponent.
///
/// `x` must be finite.
///
/// # Examples
///
/// ```
/// use edgerank::utils::format_scientific;
///
/// assert_eq!(format_scientific(1.0 / 3.0, 10), "3.3333333333e-01");
/// assert_eq!(format_scientific(1.0, 10), "1.0000000000e+00");
/// assert_eq!(format_scientific(0.0, 3), "0.000e+00");
/// ```
pub fn format_scientific(x: f64, precision: usize) -> String {
    debug_assert!(x.is_finite());
    let s = format!("{:.*e}", precision, x);
    // The standard formatter emits a bare exponent ("3.33e-1"); rewrite it
    // in the fixed-width form ("3.33e-01").
    let (mantissa, exponent) = s.split_once('e').unwrap();
    let exponent: i32 = exponent.parse().unwrap();
    format!(
        "{}e{}{:02}",
        mantissa,
        if exponent < 0 { '-' } else { '+' },
        exponent.unsigned_abs()
    )
}

/// Formats for storing and loading vectors of floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FloatVectorFormat {
    /// ASCII format, one value per line in scientific notation.
    Ascii,
    /// A JSON array of values in scientific notation.
    Json,
}

impl FloatVectorFormat {
    /// Stores float values in the specified `path` using the format defined
    /// by `self`, with `precision` fractional digits.
    pub fn store(&self, path: impl AsRef<Path>, values: &[f64], precision: usize) -> Result<()> {
        create_parent_dir(&path)?;
        let path_display = path.as_ref().display();
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Could not create vector at {}", path_display))?;
        let mut file = BufWriter::new(file);

        match self {
            FloatVectorFormat::Ascii => {
                log::info!("Storing in ASCII format at {}", path_display);
                for value in values.iter() {
                    writeln!(file, "{}", format_scientific(*value, precision))
                        .with_context(|| format!("Could not write vector to {}", path_display))?;
                }
            }
            FloatVectorFormat::Json => {
                log::info!("Storing in JSON format at {}", path_display);
                write!(file, "[")?;
                for value in values.iter().take(values.len().saturating_sub(1)) {
                    write!(file, "{}, ", format_scientific(*value, precision))
                        .with_context(|| format!("Could not write vector to {}", path_display))?;
                }
                if let Some(last) = values.last() {
                    write!(file, "{}", format_scientific(*last, precision))
                        .with_context(|| format!("Could not write vector to {}", path_display))?;
                }
                write!(file, "]")?;
            }
        }

        Ok(())
    }

    /// Loads float values from the specified `path` using the format
    /// defined by `self`.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Vec<f64>> {
        let path = path.as_ref();
        let path_display = path.display();

        match self {
            FloatVectorFormat::Ascii => {
                log::info!("Loading ASCII format from {}", path_display);
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Could not open {}", path_display))?;
                let reader = BufReader::new(file);
                reader
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
                    .map(|(i, line)| {
                        let line = line.with_context(|| {
                            format!("Error reading line {} of {}", i + 1, path_display)
                        })?;
                        line.trim().parse::<f64>().map_err(|e| {
                            anyhow!("Error parsing line {} of {}: {}", i + 1, path_display, e)
                        })
                    })
                    .collect()
            }
            FloatVectorFormat::Json => {
                log::info!("Loading JSON format from {}", path_display);
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Could not open {}", path_display))?;
                let mut reader = BufReader::new(file);
                let mut result = Vec::new();
                let mut byte = [0u8; 1];

                // Skip whitespace and opening bracket
                loop {
                    reader
                        .read_exact(&mut byte)
                        .with_context(|| format!("Unexpected end of file in {}", path_display))?;
                    match byte[0] {
                        b'[' => break,
                        b if b.is_ascii_whitespace() => continue,
                        _ => bail!("Expected '[' at start of JSON array in {}", path_display),
                    }
                }

                // Parse comma-separated values until ']'
                let mut token = String::new();
                let mut index = 0usize;
                loop {
                    reader
                        .read_exact(&mut byte)
                        .with_context(|| format!("Unexpected end of file in {}", path_display))?;
                    match byte[0] {
                        b']' => {
                            let trimmed = token.trim();
                            if !trimmed.is_empty() {
                                result.push(trimmed.parse::<f64>().map_err(|e| {
                                    anyhow!(
                                        "Error parsing element {} of {}: {}",
                                        index + 1,
                                        path_display,
                                        e
                                    )
                                })?);
                            }
                            break;
                        }
                        b',' => {
                            let trimmed = token.trim();
                            result.push(trimmed.parse::<f64>().map_err(|e| {
                                anyhow!(
                                    "Error parsing element {} of {}: {}",
                                    index + 1,
                                    path_display,
                                    e
                                )
                            })?);
                            token.clear();
                            index += 1;
                        }
                        c => {
                            token.push(c as char);
                        }
                    }
                }
                Ok(result)
            }
        }
    }
}

/// Creates all parent directories of the given file path.
pub fn create_parent_dir(file_path: impl AsRef<Path>) -> Result<()> {
    if let Some(parent_dir) = file_path.as_ref().parent() {
        std::fs::create_dir_all(parent_dir).with_context(|| {
            format!(
                "Failed to create the directory {:?}",
                parent_dir.to_string_lossy()
            )
        })?;
    }
    Ok(())
}
