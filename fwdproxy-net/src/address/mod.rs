//! Host and proxy addresses.

mod host;
#[doc(inline)]
pub use host::{Domain, Host};

mod host_with_port;
#[doc(inline)]
pub use host_with_port::HostWithPort;

mod proxy;
#[doc(inline)]
pub use proxy::ProxyAddress;

mod parse_utils;
#[doc(inline)]
pub use parse_utils::split_host_and_opt_port;
