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

//! Graphyml command line interface.

use clap::Parser;
use graphyml_cli::commands::convert;
use std::process::ExitCode;

/// Graphyml - convert YAML property graph descriptions to Cypher
///
/// Reads a declarative YAML description of a property graph (nodes with
/// labels and properties, relationships with endpoints and type) and
/// writes a Cypher script of CREATE statements suitable for bulk
/// loading into a graph store.
#[derive(Parser)]
#[command(name = "graphyml")]
#[command(author, version, about = "Convert YAML graph descriptions to Cypher statements", long_about = None)]
struct Cli {
    /// Input YAML file describing the graph
    #[arg(value_name = "FILE")]
    input: String,

    /// Output Cypher file (default: input path with a .cypher extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Print conversion details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match convert(&cli.input, cli.output.as_deref(), cli.verbose) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
