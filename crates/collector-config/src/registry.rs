// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Keyed storage for the receivers, processors, exporters and extensions of a
//! collector config.
//!
//! Registration is an upsert: a second registration under the same key
//! replaces the earlier settings in place, so the key keeps its original
//! position in the serialized document.

use crate::component::{
    ComponentKind, ExporterSettings, ExtensionSettings, ProcessorSettings, ReceiverSettings,
};
use indexmap::IndexMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentRegistry {
    pub(crate) receivers: IndexMap<String, ReceiverSettings>,
    pub(crate) processors: IndexMap<String, ProcessorSettings>,
    pub(crate) exporters: IndexMap<String, ExporterSettings>,
    pub(crate) extensions: IndexMap<String, ExtensionSettings>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_receiver(&mut self, key: impl Into<String>, settings: ReceiverSettings) {
        upsert(&mut self.receivers, ComponentKind::Receiver, key.into(), settings);
    }

    pub fn register_processor(&mut self, key: impl Into<String>, settings: ProcessorSettings) {
        upsert(&mut self.processors, ComponentKind::Processor, key.into(), settings);
    }

    pub fn register_exporter(&mut self, key: impl Into<String>, settings: ExporterSettings) {
        upsert(&mut self.exporters, ComponentKind::Exporter, key.into(), settings);
    }

    pub fn register_extension(&mut self, key: impl Into<String>, settings: ExtensionSettings) {
        upsert(&mut self.extensions, ComponentKind::Extension, key.into(), settings);
    }

    /// Whether `name` is registered in the registry for `kind`.
    pub fn contains(&self, kind: ComponentKind, name: &str) -> bool {
        match kind {
            ComponentKind::Receiver => self.receivers.contains_key(name),
            ComponentKind::Processor => self.processors.contains_key(name),
            ComponentKind::Exporter => self.exporters.contains_key(name),
            ComponentKind::Extension => self.extensions.contains_key(name),
        }
    }

    /// Keys of every registered extension, in registration order.
    pub fn extension_keys(&self) -> Vec<String> {
        self.extensions.keys().cloned().collect()
    }
}

fn upsert<T>(map: &mut IndexMap<String, T>, kind: ComponentKind, key: String, settings: T) {
    if map.insert(key.clone(), settings).is_some() {
        debug!("Replacing settings for {} '{}'", kind, key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{BatchSettings, EndpointSettings};
    use std::time::Duration;
    use tracing_test::traced_test;

    fn batch(timeout_secs: u64) -> ProcessorSettings {
        ProcessorSettings::Batch(BatchSettings {
            timeout: Duration::from_secs(timeout_secs),
            ..Default::default()
        })
    }

    #[test]
    #[traced_test]
    fn test_last_registration_wins() {
        let mut registry = ComponentRegistry::new();
        registry.register_processor("batch", batch(1));
        registry.register_processor("batch", batch(2));

        assert_eq!(registry.processors.len(), 1);
        assert_eq!(registry.processors["batch"], batch(2));
        assert!(logs_contain("Replacing settings for Processor 'batch'"));
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut registry = ComponentRegistry::new();
        registry.register_processor("batch/metrics", batch(1));
        registry.register_processor("batch/traces", batch(1));
        registry.register_processor("batch/metrics", batch(9));

        let keys: Vec<&str> = registry.processors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["batch/metrics", "batch/traces"]);
    }

    #[test]
    fn test_contains_is_per_kind() {
        let mut registry = ComponentRegistry::new();
        registry.register_extension(
            "health_check",
            ExtensionSettings::HealthCheck(EndpointSettings::health_check()),
        );

        assert!(registry.contains(ComponentKind::Extension, "health_check"));
        assert!(!registry.contains(ComponentKind::Receiver, "health_check"));
        assert!(!registry.contains(ComponentKind::Processor, "health_check"));
        assert!(!registry.contains(ComponentKind::Exporter, "health_check"));
    }

    #[test]
    fn test_extension_keys_follow_registration_order() {
        let mut registry = ComponentRegistry::new();
        assert!(registry.extension_keys().is_empty());

        registry.register_extension("pprof", ExtensionSettings::Pprof(EndpointSettings::pprof()));
        registry.register_extension(
            "health_check",
            ExtensionSettings::HealthCheck(EndpointSettings::health_check()),
        );
        assert_eq!(registry.extension_keys(), vec!["pprof", "health_check"]);
    }
}
