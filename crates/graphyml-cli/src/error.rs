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

//! Structured error types for the graphyml CLI.
//!
//! All CLI operations return `Result<T, CliError>` for consistent error
//! reporting; `main` prints the message with an `Error: ` prefix and
//! exits non-zero.

use graphyml_yaml::YamlError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for graphyml CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// File size exceeds the maximum allowed limit.
    ///
    /// This prevents denial-of-service via memory exhaustion.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit.
        path: PathBuf,
        /// The actual file size in bytes.
        actual: u64,
        /// The maximum allowed file size in bytes.
        max: u64,
        /// The maximum allowed file size in MB (for display).
        max_mb: u64,
    },

    /// YAML load failure (unparseable input or resource limit exceeded).
    #[error("YAML error: {0}")]
    Yaml(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }
}

impl From<YamlError> for CliError {
    fn from(source: YamlError) -> Self {
        Self::Yaml(source.to_string())
    }
}
