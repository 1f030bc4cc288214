// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::env;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use collector_config::{ConfigBuilder, DefaultOptions};

pub fn main() -> ExitCode {
    let log_level = env::var("COLLECTOR_LOG_LEVEL")
        .map(|val| val.to_lowercase())
        .unwrap_or("info".to_string());

    let env_filter = match EnvFilter::try_new(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Could not parse COLLECTOR_LOG_LEVEL '{log_level}': {e}");
            return ExitCode::FAILURE;
        }
    };

    // stdout carries the rendered document, logs go to stderr
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .without_time()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Setting default subscriber failed: {e}");
        return ExitCode::FAILURE;
    }

    debug!("Logging subsystem enabled");

    let options = match DefaultOptions::from_env() {
        Ok(options) => options,
        Err(e) => {
            error!("Error reading collector options: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!("Rendering default collector config with {:?}", options);

    let rendered = ConfigBuilder::with_default(&options).and_then(|config| config.to_yaml());
    match rendered {
        Ok(yaml) => {
            print!("{yaml}");
            info!("Rendered collector config for region {}", options.region);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error rendering collector config: {e}");
            ExitCode::FAILURE
        }
    }
}
