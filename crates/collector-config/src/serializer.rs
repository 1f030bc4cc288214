// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! YAML rendering of a built [`CollectorConfig`].
//!
//! This is a structural transform only. Anything reaching this point has
//! already passed validation.

use crate::config::CollectorConfig;
use crate::error::Result;

impl CollectorConfig {
    /// Renders the config as the YAML document the collector reads at startup.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
