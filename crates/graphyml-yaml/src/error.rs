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

//! Error types for YAML ingestion.

use thiserror::Error;

/// Errors that can occur while loading a YAML graph document.
///
/// All variants are load failures: they propagate to the caller as hard
/// errors and never reach the conversion engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum YamlError {
    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    Parse(String),

    /// Document exceeds the configured size limit.
    #[error("document size {size} bytes exceeds maximum of {max_size} bytes")]
    DocumentTooLarge {
        /// Actual document size in bytes.
        size: usize,
        /// Configured maximum in bytes.
        max_size: usize,
    },

    /// Value nesting exceeds the configured depth limit.
    #[error("value nesting exceeds maximum depth of {max_depth}")]
    MaxDepthExceeded {
        /// Configured maximum nesting depth.
        max_depth: usize,
    },
}

impl From<serde_yaml::Error> for YamlError {
    fn from(err: serde_yaml::Error) -> Self {
        YamlError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = YamlError::Parse("invalid syntax".to_string());
        assert_eq!(err.to_string(), "YAML parse error: invalid syntax");
    }

    #[test]
    fn test_document_too_large_display() {
        let err = YamlError::DocumentTooLarge {
            size: 20_000_000,
            max_size: 10_000_000,
        };
        assert_eq!(
            err.to_string(),
            "document size 20000000 bytes exceeds maximum of 10000000 bytes"
        );
    }

    #[test]
    fn test_max_depth_exceeded_display() {
        let err = YamlError::MaxDepthExceeded { max_depth: 100 };
        assert_eq!(
            err.to_string(),
            "value nesting exceeds maximum depth of 100"
        );
    }

    #[test]
    fn test_from_serde_yaml_error() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{ invalid: [").unwrap_err();
        let err: YamlError = yaml_err.into();
        assert!(matches!(err, YamlError::Parse(_)));
    }
}
