// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;
use std::fmt;

/// Telemetry signal a pipeline carries.
///
/// The declaration order is the order pipelines are validated and serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineKind {
    Metrics,
    Traces,
    Logs,
}

impl PipelineKind {
    pub const ALL: [PipelineKind; 3] = [Self::Metrics, Self::Traces, Self::Logs];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metrics => "metrics",
            Self::Traces => "traces",
            Self::Logs => "logs",
        }
    }
}

impl fmt::Display for PipelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Component references wired into one pipeline.
///
/// Only `processors` is order-significant. Names are resolved against the
/// registries when the config is built, not when the pipeline is declared.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Pipeline {
    pub receivers: Vec<String>,
    pub processors: Vec<String>,
    pub exporters: Vec<String>,
}

impl Pipeline {
    pub fn new(receivers: &[&str], processors: &[&str], exporters: &[&str]) -> Self {
        Self {
            receivers: to_owned(receivers),
            processors: to_owned(processors),
            exporters: to_owned(exporters),
        }
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
