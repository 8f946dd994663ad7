//! General constants used throughout `mmreport`.
use const_format::formatcp;

/// `mmreport`'s semantic version (`MAJOR.MINOR.PATCH`) as string.
pub const VERSION: &str = clap::crate_version!();

/// Major version number of `mmreport`.
pub const MAJOR_VERSION: &str = env!("CARGO_PKG_VERSION_MAJOR");

/// Minor version number of `mmreport`.
pub const MINOR_VERSION: &str = env!("CARGO_PKG_VERSION_MINOR");

/// Patch version number of `mmreport`.
pub const PATCH_VERSION: &str = env!("CARGO_PKG_VERSION_PATCH");

/// `debug` or `release`.
pub const BUILD: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "release"
};

/// [`VERSION`] + the build type.
///
/// If a debug build, the suffix is `-debug`, else it is `-release`.
pub const VERSION_BUILD: &str = formatcp!("{VERSION}-{BUILD}");

/// The config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "mmreport.toml";

/// Input file of the block size report.
pub const DEFAULT_BLOCKS_INPUT: &str = "compare-blocks.txt";

/// Input file of the thread count report.
pub const DEFAULT_THREADS_INPUT: &str = "compare-threads.txt";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version() {
        let semantic_version = format!("{MAJOR_VERSION}.{MINOR_VERSION}.{PATCH_VERSION}");
        assert_eq!(VERSION, semantic_version);
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn version_build() {
        if cfg!(debug_assertions) {
            assert_eq!(VERSION_BUILD, "0.1.0-debug");
        } else {
            assert_eq!(VERSION_BUILD, "0.1.0-release");
        }
    }
}
