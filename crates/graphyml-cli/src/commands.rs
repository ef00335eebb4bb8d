// Dweve Graphyml - Declarative property graphs to Cypher
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command implementation.

use crate::error::CliError;
use colored::Colorize;
use graphyml_cypher::{convert_document, StatementType};
use graphyml_yaml::{from_yaml, FromYamlConfig};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default maximum input file size to prevent OOM attacks (1 GB).
/// Can be overridden via the `GRAPHYML_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("GRAPHYML_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read an input file from disk with size validation.
///
/// The file size is checked against the configured maximum before any
/// memory is allocated for the contents.
///
/// # Errors
///
/// Returns `Err` if the file metadata cannot be accessed, the file
/// exceeds the maximum allowed size, or the file cannot be read.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// The output path used when `-o/--output` is not given: the input path
/// with its extension replaced by `.cypher`.
pub fn default_output_path(input: &str) -> PathBuf {
    Path::new(input).with_extension("cypher")
}

/// Convert a YAML graph description to a Cypher statement file.
///
/// Reads and parses the input, converts it, writes one `;`-terminated
/// statement per line to the output path, and prints a confirmation
/// line. Every relationship record skipped for missing `from`/`to`/`type`
/// is reported to stderr as a warning; conversion of the rest of the
/// document continues. With `verbose`, statement counts are printed as
/// well.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or parsed, or the output
/// cannot be written. Skipped relationships are diagnostics, not errors.
pub fn convert(input: &str, output: Option<&str>, verbose: bool) -> Result<(), CliError> {
    let content = read_file(input)?;
    let doc = from_yaml(&content, &FromYamlConfig::default())?;
    let conversion = convert_document(&doc);

    for skip in &conversion.skipped {
        eprintln!("{} {}", "warning:".yellow().bold(), skip);
    }

    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(input));
    let file = File::create(&output_path).map_err(|e| CliError::io_error(&output_path, e))?;
    let mut writer = BufWriter::new(file);
    conversion
        .script
        .write_to(&mut writer)
        .map_err(|e| CliError::io_error(&output_path, e))?;
    writer
        .flush()
        .map_err(|e| CliError::io_error(&output_path, e))?;

    if verbose {
        let nodes = conversion
            .script
            .statements_of_type(StatementType::CreateNode)
            .len();
        let relationships = conversion
            .script
            .statements_of_type(StatementType::CreateRelationship)
            .len();
        println!(
            "{} node statement(s), {} relationship statement(s), {} skipped",
            nodes,
            relationships,
            conversion.skipped.len()
        );
    }

    println!(
        "{} Converted {} to {}",
        "✓".green(),
        input,
        output_path.display()
    );
    Ok(())
}
