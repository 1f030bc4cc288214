// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The collector's own `service.telemetry` block.

use crate::error::ConfigError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::InvalidOptions(format!(
                "Invalid telemetry log level '{other}'. Must be one of: debug, info, warn, error"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricsLevel {
    None,
    Basic,
    Normal,
    Detailed,
}

impl FromStr for MetricsLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "basic" => Ok(Self::Basic),
            "normal" => Ok(Self::Normal),
            "detailed" => Ok(Self::Detailed),
            other => Err(ConfigError::InvalidOptions(format!(
                "Invalid telemetry metrics level '{other}'. Must be one of: none, basic, normal, detailed"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogsTelemetry {
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsTelemetry {
    pub level: MetricsLevel,
}

/// Verbosity of the collector's self-observability. Has no references into
/// the component registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TelemetrySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<LogsTelemetry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsTelemetry>,
}

impl TelemetrySettings {
    pub fn new(logs: Option<LogLevel>, metrics: Option<MetricsLevel>) -> Self {
        Self {
            logs: logs.map(|level| LogsTelemetry { level }),
            metrics: metrics.map(|level| MetricsTelemetry { level }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_none() && self.metrics.is_none()
    }
}
