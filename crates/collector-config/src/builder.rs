// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Fluent assembly of a collector configuration.
//!
//! The builder has two phases. The `with_*` and `register_*` calls only
//! record state, so pipelines may name components that are registered later.
//! [`ConfigBuilder::build`] then validates the whole state at once and
//! returns a [`CollectorConfig`] snapshot, or the first violation found.
//!
//! The only check made eagerly is on the OTLP protocol list, which can be
//! judged from the call's own argument.
//!
//! ```
//! use collector_config::{ConfigBuilder, ConfigError};
//!
//! # fn main() -> Result<(), ConfigError> {
//! let config = ConfigBuilder::new()
//!     .with_otlp_receiver(&["http"])?
//!     .with_memory_limiter_processor()
//!     .with_batch_processor("batch/metrics")
//!     .with_debug_exporter()
//!     .with_metrics_pipeline(&["otlp"], &["memory_limiter", "batch/metrics"], &["debug"])
//!     .build()?;
//!
//! println!("{}", config.to_yaml()?);
//! # Ok(())
//! # }
//! ```

use crate::component::{
    AuthSettings, AwsCloudWatchLogsSettings, AwsXraySettings, BatchSettings, EndpointSettings,
    ExporterSettings, ExtensionSettings, MemoryLimiterSettings, OtlpReceiverSettings,
    PrometheusRemoteWriteSettings, ProcessorSettings, ReceiverSettings, SigV4AuthSettings,
    AWS_CLOUDWATCH_LOGS, AWS_XRAY, HEALTH_CHECK, MEMORY_LIMITER, OTLP, PPROF,
    PROMETHEUS_REMOTE_WRITE, SIGV4_AUTH,
};
use crate::config::{CollectorConfig, Service};
use crate::error::{ConfigError, Result};
use crate::pipeline::{Pipeline, PipelineKind};
use crate::registry::ComponentRegistry;
use crate::telemetry::TelemetrySettings;
use crate::validator;
use crate::vocabulary::Vocabulary;
use std::collections::BTreeMap;
use tracing::debug;

/// Builder for a [`CollectorConfig`].
#[derive(Debug, Clone, Default)]
#[must_use = "builders do nothing unless .build() is called"]
pub struct ConfigBuilder {
    vocabulary: Vocabulary,
    registry: ComponentRegistry,
    pipelines: BTreeMap<PipelineKind, Pipeline>,
    telemetry: Option<TelemetrySettings>,
}

impl ConfigBuilder {
    /// Creates an empty builder using the current collector vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder for the given collector vocabulary.
    pub fn for_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            ..Default::default()
        }
    }

    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
    }

    pub fn register_receiver(mut self, key: impl Into<String>, settings: ReceiverSettings) -> Self {
        self.registry.register_receiver(key, settings);
        self
    }

    pub fn register_processor(
        mut self,
        key: impl Into<String>,
        settings: ProcessorSettings,
    ) -> Self {
        self.registry.register_processor(key, settings);
        self
    }

    pub fn register_exporter(mut self, key: impl Into<String>, settings: ExporterSettings) -> Self {
        self.registry.register_exporter(key, settings);
        self
    }

    pub fn register_extension(
        mut self,
        key: impl Into<String>,
        settings: ExtensionSettings,
    ) -> Self {
        self.registry.register_extension(key, settings);
        self
    }

    /// Registers the `otlp` receiver listening on the named protocols.
    ///
    /// # Errors
    ///
    /// Fails immediately if `protocols` is empty or names a protocol the
    /// builder's vocabulary does not support.
    pub fn with_otlp_receiver(self, protocols: &[&str]) -> Result<Self> {
        if protocols.is_empty() {
            return Err(ConfigError::EmptyProtocolList);
        }
        let protocols = protocols
            .iter()
            .map(|name| self.vocabulary.parse_protocol(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(self.register_receiver(
            OTLP,
            ReceiverSettings::Otlp(OtlpReceiverSettings::new(&protocols)),
        ))
    }

    pub fn with_memory_limiter_processor(self) -> Self {
        self.register_processor(
            MEMORY_LIMITER,
            ProcessorSettings::MemoryLimiter(MemoryLimiterSettings::default()),
        )
    }

    /// Registers a batch processor under `key` with default tuning.
    ///
    /// The same shape may be registered under several keys (`batch/metrics`,
    /// `batch/traces`) to tune each pipeline separately.
    pub fn with_batch_processor(self, key: impl Into<String>) -> Self {
        self.with_batch_processor_settings(key, BatchSettings::default())
    }

    pub fn with_batch_processor_settings(
        self,
        key: impl Into<String>,
        settings: BatchSettings,
    ) -> Self {
        self.register_processor(key, ProcessorSettings::Batch(settings))
    }

    /// Registers a Prometheus remote-write exporter signed by the `sigv4auth`
    /// extension. The extension itself must be registered separately.
    pub fn with_prometheus_remote_write_exporter(self, endpoint: impl Into<String>) -> Self {
        self.register_exporter(
            PROMETHEUS_REMOTE_WRITE,
            ExporterSettings::PrometheusRemoteWrite(PrometheusRemoteWriteSettings {
                endpoint: endpoint.into(),
                auth: AuthSettings {
                    authenticator: SIGV4_AUTH.to_string(),
                },
            }),
        )
    }

    pub fn with_xray_exporter(self, region: impl Into<String>) -> Self {
        self.register_exporter(
            AWS_XRAY,
            ExporterSettings::AwsXray(AwsXraySettings {
                region: region.into(),
            }),
        )
    }

    pub fn with_cloudwatch_logs_exporter(
        self,
        region: impl Into<String>,
        log_group_name: impl Into<String>,
        log_stream_name: impl Into<String>,
    ) -> Self {
        self.register_exporter(
            AWS_CLOUDWATCH_LOGS,
            ExporterSettings::AwsCloudWatchLogs(AwsCloudWatchLogsSettings {
                region: region.into(),
                log_group_name: log_group_name.into(),
                log_stream_name: log_stream_name.into(),
            }),
        )
    }

    /// Registers the console exporter under the vocabulary's key
    /// (`debug`, or `logging` for legacy collectors).
    pub fn with_debug_exporter(self) -> Self {
        let key = self.vocabulary.debug_exporter_key();
        let settings = self.vocabulary.debug_exporter();
        self.register_exporter(key, settings)
    }

    pub fn with_sigv4_auth_extension(
        self,
        region: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        self.register_extension(
            SIGV4_AUTH,
            ExtensionSettings::SigV4Auth(SigV4AuthSettings {
                region: region.into(),
                service: service.into(),
            }),
        )
    }

    pub fn with_health_check_extension(self) -> Self {
        self.register_extension(
            HEALTH_CHECK,
            ExtensionSettings::HealthCheck(EndpointSettings::health_check()),
        )
    }

    pub fn with_pprof_extension(self) -> Self {
        self.register_extension(PPROF, ExtensionSettings::Pprof(EndpointSettings::pprof()))
    }

    /// Declares the pipeline for `kind`, replacing any earlier declaration.
    ///
    /// Names are not checked until [`ConfigBuilder::build`].
    pub fn with_pipeline(
        mut self,
        kind: PipelineKind,
        receivers: &[&str],
        processors: &[&str],
        exporters: &[&str],
    ) -> Self {
        self.pipelines
            .insert(kind, Pipeline::new(receivers, processors, exporters));
        self
    }

    pub fn with_metrics_pipeline(
        self,
        receivers: &[&str],
        processors: &[&str],
        exporters: &[&str],
    ) -> Self {
        self.with_pipeline(PipelineKind::Metrics, receivers, processors, exporters)
    }

    pub fn with_traces_pipeline(
        self,
        receivers: &[&str],
        processors: &[&str],
        exporters: &[&str],
    ) -> Self {
        self.with_pipeline(PipelineKind::Traces, receivers, processors, exporters)
    }

    pub fn with_logs_pipeline(
        self,
        receivers: &[&str],
        processors: &[&str],
        exporters: &[&str],
    ) -> Self {
        self.with_pipeline(PipelineKind::Logs, receivers, processors, exporters)
    }

    pub fn with_telemetry(mut self, telemetry: TelemetrySettings) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Validates the current state and returns a snapshot of it.
    ///
    /// The builder is left untouched, so it may be changed and built again;
    /// every call validates afresh.
    ///
    /// # Errors
    ///
    /// Returns the first dangling pipeline reference or misplaced
    /// `memory_limiter` found. No config is returned on error.
    pub fn build(&self) -> Result<CollectorConfig> {
        validator::validate(&self.registry, &self.pipelines)?;

        let config = CollectorConfig {
            receivers: self.registry.receivers.clone(),
            processors: self.registry.processors.clone(),
            exporters: self.registry.exporters.clone(),
            extensions: self.registry.extensions.clone(),
            service: Service {
                pipelines: self.pipelines.clone(),
                extensions: self.registry.extension_keys(),
                telemetry: self.telemetry,
            },
        };
        debug!(
            receivers = config.receivers.len(),
            processors = config.processors.len(),
            exporters = config.exporters.len(),
            extensions = config.extensions.len(),
            pipelines = config.service.pipelines.len(),
            "Built collector config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentKind, DebugSettings, Verbosity};
    use std::time::Duration;
    use tracing_test::traced_test;

    fn end_to_end_builder() -> ConfigBuilder {
        ConfigBuilder::new()
            .with_otlp_receiver(&["http"])
            .unwrap()
            .with_memory_limiter_processor()
            .with_batch_processor("batch/metrics")
            .with_debug_exporter()
            .with_metrics_pipeline(&["otlp"], &["memory_limiter", "batch/metrics"], &["debug"])
    }

    #[test]
    fn test_end_to_end_metrics_config() {
        let config = end_to_end_builder().build().unwrap();

        assert_eq!(config.receivers().len(), 1);
        assert_eq!(config.processors().len(), 2);
        assert_eq!(config.exporters().len(), 1);
        assert!(config.extensions().is_empty());
        assert!(config.service_extensions().is_empty());
        assert_eq!(config.pipelines().len(), 1);

        let metrics = config.pipeline(PipelineKind::Metrics).unwrap();
        assert_eq!(metrics.receivers, vec!["otlp"]);
        assert_eq!(metrics.processors, vec!["memory_limiter", "batch/metrics"]);
        assert_eq!(metrics.exporters, vec!["debug"]);
        assert!(config.pipeline(PipelineKind::Traces).is_none());
        assert!(config.telemetry().is_none());
    }

    #[test]
    fn test_empty_protocol_list() {
        let err = ConfigBuilder::new().with_otlp_receiver(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyProtocolList));
    }

    #[test]
    fn test_unsupported_protocol() {
        let err = ConfigBuilder::new()
            .with_otlp_receiver(&["http", "bogus"])
            .unwrap_err();
        match err {
            ConfigError::UnsupportedProtocol { protocol, supported } => {
                assert_eq!(protocol, "bogus");
                assert_eq!(supported, "http, grpc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_legacy_vocabulary_protocols() {
        let config = ConfigBuilder::for_vocabulary(Vocabulary::Legacy)
            .with_otlp_receiver(&["http", "rpc"])
            .unwrap()
            .build()
            .unwrap();

        match &config.receivers()["otlp"] {
            ReceiverSettings::Otlp(otlp) => assert_eq!(otlp.protocols.len(), 2),
            other => panic!("unexpected receiver: {other:?}"),
        }
        assert!(ConfigBuilder::for_vocabulary(Vocabulary::Legacy)
            .with_otlp_receiver(&["grpc"])
            .is_err());
    }

    #[test]
    fn test_legacy_debug_exporter_key() {
        let config = ConfigBuilder::for_vocabulary(Vocabulary::Legacy)
            .with_debug_exporter()
            .build()
            .unwrap();
        assert!(config.exporters().contains_key("logging"));
        assert!(!config.exporters().contains_key("debug"));
    }

    #[test]
    fn test_undefined_exporter() {
        let err = ConfigBuilder::new()
            .with_otlp_receiver(&["grpc"])
            .unwrap()
            .with_metrics_pipeline(&["otlp"], &[], &["undefined_exporter"])
            .build()
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("undefined_exporter"));
        assert!(message.contains("metrics"));
        assert!(matches!(
            err,
            ConfigError::UndefinedComponent {
                kind: ComponentKind::Exporter,
                pipeline: PipelineKind::Metrics,
                ..
            }
        ));
    }

    #[test]
    fn test_undefined_receiver_and_processor() {
        let err = ConfigBuilder::new()
            .with_traces_pipeline(&["zipkin"], &[], &[])
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Receiver 'zipkin' is not defined but is referenced by the traces pipeline"
        );

        let err = ConfigBuilder::new()
            .with_logs_pipeline(&[], &["batch/logs"], &[])
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Processor 'batch/logs' is not defined but is referenced by the logs pipeline"
        );
    }

    #[test]
    fn test_memory_limiter_out_of_order() {
        let err = ConfigBuilder::new()
            .with_memory_limiter_processor()
            .with_batch_processor("batch")
            .with_traces_pipeline(&[], &["batch", "memory_limiter"], &[])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::ProcessorOrdering {
                pipeline: PipelineKind::Traces,
                index: 1
            }
        ));
    }

    #[test]
    fn test_pipeline_may_precede_registration() {
        let config = ConfigBuilder::new()
            .with_logs_pipeline(&["otlp"], &["batch"], &["debug"])
            .with_batch_processor("batch")
            .with_debug_exporter()
            .with_otlp_receiver(&["grpc"])
            .unwrap()
            .build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_pipeline_declaration_replaces_previous() {
        let config = ConfigBuilder::new()
            .with_debug_exporter()
            .with_metrics_pipeline(&["missing"], &[], &["debug"])
            .with_metrics_pipeline(&[], &[], &["debug"])
            .build()
            .unwrap();
        let metrics = config.pipeline(PipelineKind::Metrics).unwrap();
        assert!(metrics.receivers.is_empty());
        assert_eq!(metrics.exporters, vec!["debug"]);
    }

    #[test]
    fn test_processor_overwrite() {
        let first = BatchSettings {
            timeout: Duration::from_secs(1),
            ..Default::default()
        };
        let second = BatchSettings {
            timeout: Duration::from_secs(30),
            send_batch_size: 100,
            send_batch_max_size: Some(200),
        };
        let config = ConfigBuilder::new()
            .register_processor("batch", ProcessorSettings::Batch(first))
            .register_processor("batch", ProcessorSettings::Batch(second.clone()))
            .build()
            .unwrap();

        assert_eq!(config.processors().len(), 1);
        assert_eq!(config.processors()["batch"], ProcessorSettings::Batch(second));
    }

    #[test]
    fn test_service_extensions_are_derived() {
        let config = ConfigBuilder::new()
            .with_health_check_extension()
            .with_sigv4_auth_extension("us-east-1", "aps")
            .build()
            .unwrap();

        let mut extensions = config.service_extensions().to_vec();
        extensions.sort();
        assert_eq!(extensions, vec!["health_check", "sigv4auth"]);
    }

    #[test]
    fn test_build_is_a_snapshot() {
        let builder = end_to_end_builder();
        let first = builder.build().unwrap();

        let builder = builder
            .with_pprof_extension()
            .register_exporter(
                "debug",
                ExporterSettings::Debug(DebugSettings {
                    verbosity: Verbosity::Basic,
                }),
            );
        let second = builder.build().unwrap();

        assert!(first.extensions().is_empty());
        assert_eq!(second.service_extensions(), &["pprof".to_string()]);
        assert_ne!(first.exporters()["debug"], second.exporters()["debug"]);
    }

    #[test]
    fn test_build_revalidates_after_mutation() {
        let builder = end_to_end_builder();
        assert!(builder.build().is_ok());

        let builder = builder.with_traces_pipeline(&["otlp"], &[], &["awsxray"]);
        assert!(builder.build().is_err());

        let builder = builder.with_xray_exporter("eu-west-1");
        assert!(builder.build().is_ok());
    }

    #[test]
    #[traced_test]
    fn test_build_logs_summary() {
        end_to_end_builder().build().unwrap();
        assert!(logs_contain("Built collector config"));
    }
}
