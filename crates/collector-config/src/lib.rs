// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Assembly and validation of OpenTelemetry Collector configuration.
//!
//! Callers describe receivers, processors, exporters, extensions and the
//! `metrics`, `traces` and `logs` pipelines through [`ConfigBuilder`], then
//! call [`ConfigBuilder::build`]. Building checks that every component a
//! pipeline names has been registered and that `memory_limiter` heads any
//! processor list it appears in, so a broken config is rejected here rather
//! than by a running collector. The resulting [`CollectorConfig`] renders to
//! the YAML document the collector reads at startup.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod builder;
pub mod component;
pub mod config;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod registry;
pub mod serializer;
pub mod telemetry;
pub mod validator;
pub mod vocabulary;

pub use builder::ConfigBuilder;
pub use component::{ComponentKind, OtlpProtocol};
pub use config::CollectorConfig;
pub use error::{ConfigError, Result};
pub use options::DefaultOptions;
pub use pipeline::{Pipeline, PipelineKind};
pub use telemetry::{LogLevel, MetricsLevel, TelemetrySettings};
pub use vocabulary::Vocabulary;
