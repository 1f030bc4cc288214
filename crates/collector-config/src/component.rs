// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Settings records for the four collector component kinds.
//!
//! A component is registered under a caller-chosen key. Well-known shapes
//! (the OTLP receiver, the memory limiter, batch processors, the AWS
//! exporters and extensions) have typed records; anything else can be
//! registered verbatim through the `Custom` variants. The validator never
//! looks inside a settings record, only at the key it was registered under.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

// Component keys
pub const OTLP: &str = "otlp";
pub const MEMORY_LIMITER: &str = "memory_limiter";
pub const PROMETHEUS_REMOTE_WRITE: &str = "prometheusremotewrite";
pub const AWS_XRAY: &str = "awsxray";
pub const AWS_CLOUDWATCH_LOGS: &str = "awscloudwatchlogs";
pub const DEBUG: &str = "debug";
pub const LOGGING: &str = "logging";
pub const SIGV4_AUTH: &str = "sigv4auth";
pub const HEALTH_CHECK: &str = "health_check";
pub const PPROF: &str = "pprof";

// Listener defaults
const OTLP_HTTP_ENDPOINT: &str = "0.0.0.0:4318";
const OTLP_GRPC_ENDPOINT: &str = "0.0.0.0:4317";
const HEALTH_CHECK_ENDPOINT: &str = "0.0.0.0:13133";
const PPROF_ENDPOINT: &str = "localhost:1777";

/// The four component registries a collector config is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Receiver,
    Processor,
    Exporter,
    Extension,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Receiver => write!(f, "Receiver"),
            Self::Processor => write!(f, "Processor"),
            Self::Exporter => write!(f, "Exporter"),
            Self::Extension => write!(f, "Extension"),
        }
    }
}

/// Transport an OTLP receiver listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtlpProtocol {
    Http,
    Grpc,
}

impl OtlpProtocol {
    /// Default listen address for this transport.
    pub fn default_endpoint(self) -> &'static str {
        match self {
            Self::Http => OTLP_HTTP_ENDPOINT,
            Self::Grpc => OTLP_GRPC_ENDPOINT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolSettings {
    pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OtlpReceiverSettings {
    pub protocols: IndexMap<OtlpProtocol, ProtocolSettings>,
}

impl OtlpReceiverSettings {
    /// Builds a receiver listening on each protocol's default endpoint.
    /// Repeated protocols collapse into a single entry.
    pub fn new(protocols: &[OtlpProtocol]) -> Self {
        let protocols = protocols
            .iter()
            .map(|protocol| {
                (
                    *protocol,
                    ProtocolSettings {
                        endpoint: protocol.default_endpoint().to_string(),
                    },
                )
            })
            .collect();
        Self { protocols }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReceiverSettings {
    Otlp(OtlpReceiverSettings),
    Custom(serde_yaml::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryLimiterSettings {
    #[serde(with = "duration_str")]
    pub check_interval: Duration,
    pub limit_percentage: u32,
    pub spike_limit_percentage: u32,
}

impl Default for MemoryLimiterSettings {
    fn default() -> Self {
        Self {
            check_interval: Duration::from_secs(1),
            limit_percentage: 80,
            spike_limit_percentage: 25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSettings {
    #[serde(with = "duration_str")]
    pub timeout: Duration,
    pub send_batch_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_batch_max_size: Option<u32>,
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            send_batch_size: 8192,
            send_batch_max_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProcessorSettings {
    MemoryLimiter(MemoryLimiterSettings),
    Batch(BatchSettings),
    Custom(serde_yaml::Value),
}

/// Reference from an exporter to the extension that authenticates it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthSettings {
    pub authenticator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrometheusRemoteWriteSettings {
    pub endpoint: String,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwsXraySettings {
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AwsCloudWatchLogsSettings {
    pub region: String,
    pub log_group_name: String,
    pub log_stream_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Basic,
    Normal,
    Detailed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugSettings {
    pub verbosity: Verbosity,
}

/// Settings for the `logging` exporter, the predecessor of `debug`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggingSettings {
    pub loglevel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExporterSettings {
    PrometheusRemoteWrite(PrometheusRemoteWriteSettings),
    AwsXray(AwsXraySettings),
    AwsCloudWatchLogs(AwsCloudWatchLogsSettings),
    Debug(DebugSettings),
    Logging(LoggingSettings),
    Custom(serde_yaml::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SigV4AuthSettings {
    pub region: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointSettings {
    pub endpoint: String,
}

impl EndpointSettings {
    pub fn health_check() -> Self {
        Self {
            endpoint: HEALTH_CHECK_ENDPOINT.to_string(),
        }
    }

    pub fn pprof() -> Self {
        Self {
            endpoint: PPROF_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtensionSettings {
    SigV4Auth(SigV4AuthSettings),
    HealthCheck(EndpointSettings),
    Pprof(EndpointSettings),
    Custom(serde_yaml::Value),
}

/// Renders a `Duration` the way the collector parses it, e.g. `5s` or `200ms`.
mod duration_str {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(duration))
    }

    pub(crate) fn format(duration: &Duration) -> String {
        if duration.subsec_millis() == 0 && duration.as_secs() > 0 {
            format!("{}s", duration.as_secs())
        } else {
            format!("{}ms", duration.as_millis())
        }
    }
}
