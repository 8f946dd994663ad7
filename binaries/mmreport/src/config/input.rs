use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BLOCKS_INPUT, DEFAULT_THREADS_INPUT};

use super::macros::config_struct;

config_struct! {
    /// Block size report config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct BlocksConfig {
        /// The benchmark results file to read.
        ///
        /// Rows vary the block size for a few
        /// (matrix size, thread count) configurations.
        ///
        /// Type         | Path
        /// Examples     | "compare-blocks.txt", "results/blocks.csv"
        pub input: PathBuf,
    }
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_BLOCKS_INPUT),
        }
    }
}

config_struct! {
    /// Thread count report config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct ThreadsConfig {
        /// The benchmark results file to read.
        ///
        /// Rows vary the thread count for a few matrix sizes.
        ///
        /// Type         | Path
        /// Examples     | "compare-threads.txt", "results/threads.csv"
        pub input: PathBuf,
    }
}

impl Default for ThreadsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_THREADS_INPUT),
        }
    }
}
