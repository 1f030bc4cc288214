// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Inputs to the default collector preset, and the preset itself.

use crate::builder::ConfigBuilder;
use crate::component::{
    BatchSettings, AWS_CLOUDWATCH_LOGS, AWS_XRAY, MEMORY_LIMITER, OTLP, PROMETHEUS_REMOTE_WRITE,
};
use crate::config::CollectorConfig;
use crate::error::{ConfigError, Result};
use crate::pipeline::PipelineKind;
use crate::telemetry::{LogLevel, MetricsLevel, TelemetrySettings};
use crate::vocabulary::Vocabulary;
use std::env;
use std::time::Duration;

const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_PROMETHEUS_ENDPOINT: &str = "http://localhost:9090/api/v1/write";
const DEFAULT_LOG_GROUP_NAME: &str = "/otel/collector";
const DEFAULT_LOG_STREAM_NAME: &str = "collector";
// SigV4 service name for Amazon Managed Service for Prometheus
const PROMETHEUS_SIGNING_SERVICE: &str = "aps";
const METRICS_BATCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Options for [`ConfigBuilder::from_default`].
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultOptions {
    /// AWS region used by the exporters and request signing
    pub region: String,
    /// Prometheus remote-write URL metrics are shipped to
    pub prometheus_endpoint: String,
    /// CloudWatch Logs group for the logs pipeline
    pub log_group_name: String,
    /// CloudWatch Logs stream for the logs pipeline
    pub log_stream_name: String,
    /// Collector naming generation to target
    pub vocabulary: Vocabulary,
    /// Whether every pipeline also exports to the console exporter
    pub debug_exporter: bool,
    /// Whether to register the `pprof` extension
    pub profiling: bool,
    pub telemetry: Option<TelemetrySettings>,
}

impl Default for DefaultOptions {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            prometheus_endpoint: DEFAULT_PROMETHEUS_ENDPOINT.to_string(),
            log_group_name: DEFAULT_LOG_GROUP_NAME.to_string(),
            log_stream_name: DEFAULT_LOG_STREAM_NAME.to_string(),
            vocabulary: Vocabulary::Current,
            debug_exporter: false,
            profiling: false,
            telemetry: None,
        }
    }
}

impl DefaultOptions {
    /// Create options from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let region = env::var("COLLECTOR_REGION")
            .or_else(|_| env::var("AWS_REGION"))
            .unwrap_or(defaults.region);
        let prometheus_endpoint = env::var("COLLECTOR_PROMETHEUS_ENDPOINT")
            .unwrap_or(defaults.prometheus_endpoint);
        let log_group_name =
            env::var("COLLECTOR_LOG_GROUP_NAME").unwrap_or(defaults.log_group_name);
        let log_stream_name =
            env::var("COLLECTOR_LOG_STREAM_NAME").unwrap_or(defaults.log_stream_name);
        let vocabulary = match env::var("COLLECTOR_VOCABULARY") {
            Ok(val) => val.parse()?,
            Err(_) => defaults.vocabulary,
        };
        let debug_exporter = env::var("COLLECTOR_DEBUG_EXPORTER")
            .map(|val| val.to_lowercase() == "true")
            .unwrap_or(defaults.debug_exporter);
        let profiling = env::var("COLLECTOR_PROFILING")
            .map(|val| val.to_lowercase() == "true")
            .unwrap_or(defaults.profiling);

        let logs_level = env::var("COLLECTOR_TELEMETRY_LOG_LEVEL")
            .ok()
            .map(|val| val.parse::<LogLevel>())
            .transpose()?;
        let metrics_level = env::var("COLLECTOR_TELEMETRY_METRICS_LEVEL")
            .ok()
            .map(|val| val.parse::<MetricsLevel>())
            .transpose()?;
        let telemetry =
            Some(TelemetrySettings::new(logs_level, metrics_level)).filter(|t| !t.is_empty());

        let options = Self {
            region,
            prometheus_endpoint,
            log_group_name,
            log_stream_name,
            vocabulary,
            debug_exporter,
            profiling,
            telemetry,
        };

        options.validate()?;
        Ok(options)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::InvalidOptions(
                "Region cannot be empty".to_string(),
            ));
        }

        let endpoint = self.prometheus_endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::InvalidOptions(
                "Prometheus endpoint cannot be empty".to_string(),
            ));
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidOptions(format!(
                "Invalid Prometheus endpoint '{endpoint}'. Must start with http:// or https://"
            )));
        }

        if self.log_group_name.trim().is_empty() {
            return Err(ConfigError::InvalidOptions(
                "Log group name cannot be empty".to_string(),
            ));
        }
        if self.log_stream_name.trim().is_empty() {
            return Err(ConfigError::InvalidOptions(
                "Log stream name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl ConfigBuilder {
    /// Returns a builder pre-populated with the default collector layout:
    /// an OTLP/HTTP receiver feeding a metrics, a traces and a logs pipeline,
    /// each guarded by `memory_limiter` and batched separately, exporting to
    /// Prometheus remote write, X-Ray and CloudWatch Logs respectively.
    ///
    /// The builder can be customised further before [`ConfigBuilder::build`].
    ///
    /// # Errors
    ///
    /// Fails if `options` do not pass [`DefaultOptions::validate`].
    pub fn from_default(options: &DefaultOptions) -> Result<Self> {
        options.validate()?;

        let debug_key = options.vocabulary.debug_exporter_key();
        let mut builder = ConfigBuilder::for_vocabulary(options.vocabulary)
            .with_otlp_receiver(&["http"])?
            .with_memory_limiter_processor()
            .with_batch_processor_settings(
                batch_key(PipelineKind::Metrics),
                BatchSettings {
                    timeout: METRICS_BATCH_TIMEOUT,
                    ..Default::default()
                },
            )
            .with_batch_processor(batch_key(PipelineKind::Traces))
            .with_batch_processor(batch_key(PipelineKind::Logs))
            .with_prometheus_remote_write_exporter(options.prometheus_endpoint.trim())
            .with_xray_exporter(&options.region)
            .with_cloudwatch_logs_exporter(
                &options.region,
                &options.log_group_name,
                &options.log_stream_name,
            )
            .with_debug_exporter()
            .with_sigv4_auth_extension(&options.region, PROMETHEUS_SIGNING_SERVICE)
            .with_health_check_extension();

        if options.profiling {
            builder = builder.with_pprof_extension();
        }

        for kind in PipelineKind::ALL {
            let batch = batch_key(kind);
            let backend = backend_exporter(kind);
            let exporters: Vec<&str> = if options.debug_exporter {
                vec![backend, debug_key]
            } else {
                vec![backend]
            };
            builder =
                builder.with_pipeline(kind, &[OTLP], &[MEMORY_LIMITER, batch.as_str()], &exporters);
        }

        if let Some(telemetry) = options.telemetry {
            builder = builder.with_telemetry(telemetry);
        }

        Ok(builder)
    }

    /// Builds the default collector layout in one step.
    ///
    /// Equivalent to [`ConfigBuilder::from_default`] followed by
    /// [`ConfigBuilder::build`].
    pub fn with_default(options: &DefaultOptions) -> Result<CollectorConfig> {
        Self::from_default(options)?.build()
    }
}

fn batch_key(kind: PipelineKind) -> String {
    format!("batch/{kind}")
}

fn backend_exporter(kind: PipelineKind) -> &'static str {
    match kind {
        PipelineKind::Metrics => PROMETHEUS_REMOTE_WRITE,
        PipelineKind::Traces => AWS_XRAY,
        PipelineKind::Logs => AWS_CLOUDWATCH_LOGS,
    }
}
