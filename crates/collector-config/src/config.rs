// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::component::{ExporterSettings, ExtensionSettings, ProcessorSettings, ReceiverSettings};
use crate::pipeline::{Pipeline, PipelineKind};
use crate::telemetry::TelemetrySettings;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// A validated collector configuration.
///
/// Produced by [`crate::ConfigBuilder::build`]. It is a snapshot: later
/// changes to the builder do not affect a config that was already returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectorConfig {
    pub(crate) receivers: IndexMap<String, ReceiverSettings>,
    pub(crate) processors: IndexMap<String, ProcessorSettings>,
    pub(crate) exporters: IndexMap<String, ExporterSettings>,
    pub(crate) extensions: IndexMap<String, ExtensionSettings>,
    pub(crate) service: Service,
}

/// The `service` section of a collector config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Service {
    pub(crate) pipelines: BTreeMap<PipelineKind, Pipeline>,
    /// Derived from the extension registry, never supplied by the caller.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) extensions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) telemetry: Option<TelemetrySettings>,
}

impl CollectorConfig {
    pub fn receivers(&self) -> &IndexMap<String, ReceiverSettings> {
        &self.receivers
    }

    pub fn processors(&self) -> &IndexMap<String, ProcessorSettings> {
        &self.processors
    }

    pub fn exporters(&self) -> &IndexMap<String, ExporterSettings> {
        &self.exporters
    }

    pub fn extensions(&self) -> &IndexMap<String, ExtensionSettings> {
        &self.extensions
    }

    pub fn pipelines(&self) -> &BTreeMap<PipelineKind, Pipeline> {
        &self.service.pipelines
    }

    pub fn pipeline(&self, kind: PipelineKind) -> Option<&Pipeline> {
        self.service.pipelines.get(&kind)
    }

    /// Extension keys enabled in the `service` section.
    pub fn service_extensions(&self) -> &[String] {
        &self.service.extensions
    }

    pub fn telemetry(&self) -> Option<&TelemetrySettings> {
        self.service.telemetry.as_ref()
    }
}
