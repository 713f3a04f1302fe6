//! Tls transport for fwdproxy, using [`rustls`].
//!
//! [`client::TlsConnector`] wraps a plain transport connector (e.g. tcp)
//! and performs the tls handshake for requests asking for a secure
//! transport, handing back an [`client::AutoTlsStream`] either way.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod client;
pub mod verify;

pub mod dep {
    //! Dependencies for fwdproxy rustls modules.
    //!
    //! Exported for your convenience.

    pub mod pki_types {
        //! Re-export of the [`rustls-pki-types`] crate.
        //!
        //! [`rustls-pki-types`]: https://docs.rs/rustls-pki-types

        #[doc(inline)]
        pub use rustls_pki_types::*;
    }

    pub mod rustls {
        //! Re-export of the [`rustls`] crate.
        //!
        //! [`rustls`]: https://docs.rs/rustls

        #[doc(inline)]
        pub use rustls::*;
    }

    pub mod tokio_rustls {
        //! Re-export of the [`tokio-rustls`] crate.
        //!
        //! [`tokio-rustls`]: https://docs.rs/tokio-rustls

        #[doc(inline)]
        pub use tokio_rustls::*;
    }
}
