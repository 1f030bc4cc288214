// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Cross-reference checks run when a config is built.
//!
//! Pipelines are checked in `metrics`, `traces`, `logs` order, and within a
//! pipeline receivers, processors, exporters and then processor order. The
//! first violation is returned. Components that no pipeline references are
//! not an error.

use crate::component::{ComponentKind, MEMORY_LIMITER};
use crate::error::{ConfigError, Result};
use crate::pipeline::{Pipeline, PipelineKind};
use crate::registry::ComponentRegistry;
use std::collections::BTreeMap;
use tracing::debug;

/// Validates every declared pipeline against the registry.
pub fn validate(
    registry: &ComponentRegistry,
    pipelines: &BTreeMap<PipelineKind, Pipeline>,
) -> Result<()> {
    for (kind, pipeline) in pipelines {
        validate_pipeline(registry, *kind, pipeline).inspect_err(|e| {
            debug!("Collector config rejected: {}", e);
        })?;
    }
    Ok(())
}

pub fn validate_pipeline(
    registry: &ComponentRegistry,
    kind: PipelineKind,
    pipeline: &Pipeline,
) -> Result<()> {
    check_references(registry, ComponentKind::Receiver, &pipeline.receivers, kind)?;
    check_references(registry, ComponentKind::Processor, &pipeline.processors, kind)?;
    check_references(registry, ComponentKind::Exporter, &pipeline.exporters, kind)?;
    check_processor_order(kind, &pipeline.processors)
}

fn check_references(
    registry: &ComponentRegistry,
    component: ComponentKind,
    names: &[String],
    pipeline: PipelineKind,
) -> Result<()> {
    match names.iter().find(|name| !registry.contains(component, name)) {
        Some(name) => Err(ConfigError::UndefinedComponent {
            kind: component,
            name: name.clone(),
            pipeline,
        }),
        None => Ok(()),
    }
}

/// `memory_limiter` may only appear at the head of a processor list.
pub fn check_processor_order(pipeline: PipelineKind, processors: &[String]) -> Result<()> {
    match processors
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, name)| name.as_str() == MEMORY_LIMITER)
    {
        Some((index, _)) => Err(ConfigError::ProcessorOrdering { pipeline, index }),
        None => Ok(()),
    }
}
