// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::component::ComponentKind;
use crate::pipeline::PipelineKind;

/// A specialised Result type for collector config assembly.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while assembling or rendering a collector configuration.
///
/// Every variant describes a defect in the calling code. Nothing here is
/// meant to be retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("OTLP receiver requires at least one protocol")]
    EmptyProtocolList,

    #[error("Unsupported OTLP protocol '{protocol}'. Must be one of: {supported}")]
    UnsupportedProtocol { protocol: String, supported: String },

    #[error("{kind} '{name}' is not defined but is referenced by the {pipeline} pipeline")]
    UndefinedComponent {
        kind: ComponentKind,
        name: String,
        pipeline: PipelineKind,
    },

    #[error(
        "memory_limiter must be the first processor in the {pipeline} pipeline, found at position {index}"
    )]
    ProcessorOrdering { pipeline: PipelineKind, index: usize },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("Failed to serialize collector config: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ConfigError::UndefinedComponent {
            kind: ComponentKind::Exporter,
            name: "undefined_exporter".to_string(),
            pipeline: PipelineKind::Metrics,
        };
        assert_eq!(
            error.to_string(),
            "Exporter 'undefined_exporter' is not defined but is referenced by the metrics pipeline"
        );
    }

    #[test]
    fn test_ordering_error_display() {
        let error = ConfigError::ProcessorOrdering {
            pipeline: PipelineKind::Traces,
            index: 2,
        };
        assert_eq!(
            error.to_string(),
            "memory_limiter must be the first processor in the traces pipeline, found at position 2"
        );
    }

    #[test]
    fn test_protocol_error_display() {
        let error = ConfigError::UnsupportedProtocol {
            protocol: "bogus".to_string(),
            supported: "http, grpc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unsupported OTLP protocol 'bogus'. Must be one of: http, grpc"
        );
        assert_eq!(
            ConfigError::EmptyProtocolList.to_string(),
            "OTLP receiver requires at least one protocol"
        );
    }
}
