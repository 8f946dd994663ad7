use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use super::macros::config_struct;

config_struct! {
    /// [`tracing`] config.
    #[derive(Debug, Default, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct TracingConfig {
        #[child = true]
        /// Configuration for mmreport's stdout logging system.
        pub stdout: StdoutTracingConfig,
    }
}

config_struct! {
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct StdoutTracingConfig {
        /// The minimum log level for stdout.
        ///
        /// Levels below this one will not be shown.
        /// "error" is the highest level only showing errors,
        /// "warn" adds skipped input rows,
        /// "debug" adds every chart as it is drawn.
        ///
        /// Type         | Level
        /// Valid values | "error", "warn", "info", "debug", "trace"
        ##[serde(with = "level_filter_serde")]
        pub level: LevelFilter,
    }
}

impl Default for StdoutTracingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
        }
    }
}

mod level_filter_serde {
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::level_filters::LevelFilter;

    #[expect(clippy::trivially_copy_pass_by_ref, reason = "serde")]
    pub fn serialize<S>(level_filter: &LevelFilter, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&level_filter.to_string())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        LevelFilter::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn level_is_a_lowercase_string() {
        let config: TracingConfig = toml::from_str("[stdout]\nlevel = \"debug\"").unwrap();
        assert_eq!(config.stdout.level, LevelFilter::DEBUG);

        let text = toml::to_string(&TracingConfig::default()).unwrap();
        assert!(text.contains("level = \"info\""), "{text}");

        assert!(toml::from_str::<TracingConfig>("[stdout]\nlevel = \"loud\"").is_err());
    }
}
