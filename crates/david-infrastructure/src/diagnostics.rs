//! Process-wide diagnostic tracer
//!
//! Exactly one [`Tracer`] exists per process. It is installed once at startup
//! by naming a trace sink implementation; later installs return the tracer
//! already in place.

use david_application::Tracer;
use david_application::ports::registry::{TraceProviderConfig, resolve_trace_provider};
use david_domain::error::{Error, Result};
use std::sync::OnceLock;

static TRACER: OnceLock<Tracer> = OnceLock::new();

/// Install the process tracer using the sink named in `config`
///
/// A second call is a no-op returning the installed tracer.
pub fn install_trace_provider(config: &TraceProviderConfig) -> Result<Tracer> {
    if let Some(tracer) = TRACER.get() {
        tracing::debug!(
            installed = tracer.sink_name(),
            requested = %config.provider,
            "Trace provider already installed"
        );
        return Ok(tracer.clone());
    }

    let sink = resolve_trace_provider(config).map_err(Error::configuration)?;
    let tracer = TRACER.get_or_init(|| Tracer::new(sink));
    tracing::info!(
        provider = tracer.sink_name(),
        directory = %config.directory.display(),
        "Trace provider installed"
    );
    Ok(tracer.clone())
}

/// The process tracer
///
/// Fails with [`Error::Uninitialized`] before [`install_trace_provider`].
pub fn tracer() -> Result<Tracer> {
    TRACER
        .get()
        .cloned()
        .ok_or_else(|| Error::uninitialized("Tracer"))
}

/// The process tracer, or a disabled one before installation
pub fn tracer_or_disabled() -> Tracer {
    TRACER.get().cloned().unwrap_or_else(Tracer::disabled)
}
