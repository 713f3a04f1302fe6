//! Network types and utilities for fwdproxy.
//!
//! Contains the vocabulary shared by the connectors:
//! [`Protocol`], addresses such as [`address::ProxyAddress`],
//! proxy credentials ([`user::Basic`]) and the connector traits
//! found in [`client`].

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod address;
pub mod client;
pub mod stream;
pub mod transport;
pub mod user;

mod proto;
#[doc(inline)]
pub use proto::{InvalidProtocolStr, Protocol};
