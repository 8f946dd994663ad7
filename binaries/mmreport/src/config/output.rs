use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use mmreport_render::DEFAULT_DPI;

use super::macros::config_struct;

config_struct! {
    /// Chart output config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct OutputConfig {
        /// The directory charts are written to.
        ///
        /// It is created if it does not exist.
        /// Relative paths start at the current directory.
        ///
        /// Type         | Path
        /// Examples     | ".", "charts", "/tmp/mmreport"
        pub directory: PathBuf,

        /// The resolution of written charts, in dots per inch.
        ///
        /// Chart sizes are fixed in inches, so this
        /// scales the pixel size of every image.
        ///
        /// Type         | Number
        /// Valid values | 1..=2400
        /// Examples     | 100, 300
        pub dpi: u32,
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            dpi: DEFAULT_DPI,
        }
    }
}
