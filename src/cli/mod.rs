// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the poisk command-line interface.
//!
//! Two subcommands: `index` builds the data files from a corpus, `search`
//! opens an interactive prompt over them. Both default to the conventional
//! `data/` directory so the common case is just `poisk index && poisk search`.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "poisk",
    about = "Boolean full-text search over Russian corpora with TF-IDF ranking",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the index files from a corpus (one document per line)
    Index {
        /// Corpus file; a parallel urls.txt in the data directory supplies labels
        #[arg(default_value = "data/corpus.txt")]
        corpus: String,

        /// Output directory for the index files
        #[arg(long, default_value = "data")]
        data_dir: String,
    },

    /// Interactive search prompt over a built index
    Search {
        /// Directory containing index_data.txt and docs_map.txt
        #[arg(long, default_value = "data")]
        data_dir: String,

        /// Maximum number of results to print per query
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}
