//! Core types shared by the fwdproxy crates.
//!
//! - [`Layer`]: wrap a connector (or any other value) into another;
//! - [`telemetry`]: `tracing` re-export and the injectable [`telemetry::EventLog`];
//! - [`error`]: re-export of `fwdproxy-error`.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[doc(inline)]
pub use fwdproxy_error as error;

#[doc(hidden)]
#[macro_use]
pub mod macros;

mod layer;
#[doc(inline)]
pub use layer::Layer;

pub mod telemetry;
