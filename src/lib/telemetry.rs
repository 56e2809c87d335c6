//! Tracing initialization and CLI command span helpers.

use std::time::Instant;

use anyhow::{anyhow, Result};
use tracing::{info, info_span, Span};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Control over the installed filter once configuration has been resolved.
pub struct TracingHandle {
    reload: Option<reload::Handle<EnvFilter, Registry>>,
}

impl TracingHandle {
    /// Switch the active filter to `level`.
    ///
    /// No-op when `RUST_LOG` chose the filter or another subscriber was
    /// already installed.
    pub fn set_level(&self, level: &str) -> Result<()> {
        let Some(reload) = &self.reload else {
            return Ok(());
        };
        reload
            .reload(EnvFilter::new(level))
            .map_err(|err| anyhow!("failed to update tracing filter: {err}"))
    }
}

/// Initialize `tracing` and format developer logs.
///
/// `RUST_LOG` wins over `default_level` and over later
/// [`TracingHandle::set_level`] calls.
pub fn init_tracing(default_level: &str) -> Result<TracingHandle> {
    if tracing::dispatcher::has_been_set() {
        return Ok(TracingHandle { reload: None });
    }

    let (env_filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(default_level), false),
    };
    let (filter, reload) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|err| anyhow!("failed to initialize tracing: {err}"))?;

    Ok(TracingHandle {
        reload: (!from_env).then_some(reload),
    })
}

/// Span helper to record start and finish of a CLI command.
pub struct CommandSpan {
    span: Span,
    started_at: Instant,
    command: &'static str,
}

impl CommandSpan {
    pub fn start(command: &'static str) -> Self {
        let span = info_span!(target: "emptykit::cli", "command", command);
        Self {
            span,
            started_at: Instant::now(),
            command,
        }
    }

    /// Close the span while recording status and elapsed time.
    pub fn finish(self, status: &'static str) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "emptykit::cli",
            command = self.command,
            status = status,
            elapsed_ms = elapsed_ms,
            "Completed command"
        );
    }
}
