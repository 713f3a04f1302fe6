//! User credentials used to authenticate against a proxy.

mod basic;
#[doc(inline)]
pub use basic::Basic;
