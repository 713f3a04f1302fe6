//! fwdproxy telemetry modules.

#[doc(inline)]
pub use ::fwdproxy_core::telemetry::{EventLog, RecordingEventLog, TraceEvent, TracingEventLog};

pub mod tracing {
    //! Tracing core re-export and utilities, for your convenience.

    pub use ::fwdproxy_core::telemetry::tracing::*;

    pub use ::tracing_subscriber as subscriber;

    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    /// Install a global `fmt` subscriber, filtered by the `RUST_LOG`
    /// environment variable and falling back to the given directive.
    ///
    /// Does nothing if a global subscriber is already installed.
    pub fn init_default_subscriber(default_directive: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        if tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init()
            .is_err()
        {
            debug!("global tracing subscriber already installed");
        }
    }
}
