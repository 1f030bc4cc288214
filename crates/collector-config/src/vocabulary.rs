// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Naming tables for the two collector distributions this crate targets.
//!
//! Older collector builds name the gRPC transport `rpc` and ship a `logging`
//! exporter where newer ones ship `debug`. Everything else is shared, so the
//! difference is carried as data rather than as a second builder.

use crate::component::{
    DebugSettings, ExporterSettings, LoggingSettings, OtlpProtocol, Verbosity, DEBUG, LOGGING,
};
use crate::error::{ConfigError, Result};
use std::str::FromStr;

const CURRENT_PROTOCOLS: &[(&str, OtlpProtocol)] =
    &[("http", OtlpProtocol::Http), ("grpc", OtlpProtocol::Grpc)];
const LEGACY_PROTOCOLS: &[(&str, OtlpProtocol)] =
    &[("http", OtlpProtocol::Http), ("rpc", OtlpProtocol::Grpc)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vocabulary {
    #[default]
    Current,
    Legacy,
}

impl Vocabulary {
    /// OTLP protocol names accepted by this vocabulary.
    pub fn protocols(self) -> &'static [(&'static str, OtlpProtocol)] {
        match self {
            Self::Current => CURRENT_PROTOCOLS,
            Self::Legacy => LEGACY_PROTOCOLS,
        }
    }

    /// Resolves a caller-supplied protocol name. Matching is exact.
    pub fn parse_protocol(self, name: &str) -> Result<OtlpProtocol> {
        self.protocols()
            .iter()
            .find(|(supported, _)| *supported == name)
            .map(|(_, protocol)| *protocol)
            .ok_or_else(|| ConfigError::UnsupportedProtocol {
                protocol: name.to_string(),
                supported: self
                    .protocols()
                    .iter()
                    .map(|(supported, _)| *supported)
                    .collect::<Vec<&str>>()
                    .join(", "),
            })
    }

    /// Key the console exporter is registered under.
    pub fn debug_exporter_key(self) -> &'static str {
        match self {
            Self::Current => DEBUG,
            Self::Legacy => LOGGING,
        }
    }

    pub fn debug_exporter(self) -> ExporterSettings {
        match self {
            Self::Current => ExporterSettings::Debug(DebugSettings {
                verbosity: Verbosity::Detailed,
            }),
            Self::Legacy => ExporterSettings::Logging(LoggingSettings {
                loglevel: "debug".to_string(),
            }),
        }
    }
}

impl FromStr for Vocabulary {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "legacy" => Ok(Self::Legacy),
            other => Err(ConfigError::InvalidOptions(format!(
                "Invalid vocabulary '{other}'. Must be one of: current, legacy"
            ))),
        }
    }
}
