//! # rustls-client-policy
//!
//! The client-side negotiation policy of a TLS handshake: what a client
//! proposes in its ClientHello, and how it judges the server's choices.
//!
//! A handshake engine owns the connection, the record layer and the
//! handshake state machine.  At fixed points in the message sequence it
//! asks a [`client::ClientNegotiationPolicy`] what to offer (version,
//! compression methods, extensions) and tells it what the server chose
//! (version, session id, cipher suite, compression method, secure
//! renegotiation status, extensions).  The policy accepts or rejects
//! those choices, records them, and finally resolves the record-layer
//! [`compress::CompressionTransform`].
//!
//! ## Defaults
//!
//! [`client::PolicyConfig::default()`] is deliberately conservative:
//!
//! * Offers TLS 1.1 and accepts nothing earlier than TLS 1.0.
//! * Sends the offered version in the record-layer header too.
//! * Offers only null compression and no extensions.
//! * Tolerates servers without secure renegotiation.
//!
//! Each of these is a named field of [`client::PolicyConfig`], and the
//! capability choices go through the [`client::NegotiationStrategy`]
//! trait.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use rustls_client_policy::client::{ClientNegotiationPolicy, PolicyConfig};
//! use rustls_client_policy::{Compression, HandshakeContext, ProtocolVersion};
//!
//! #[derive(Debug)]
//! struct Connection;
//!
//! impl HandshakeContext for Connection {
//!     fn client_version(&self) -> Option<ProtocolVersion> {
//!         Some(ProtocolVersion::TLSv1_1)
//!     }
//!
//!     fn server_version(&self) -> Option<ProtocolVersion> {
//!         None
//!     }
//! }
//!
//! let mut policy = ClientNegotiationPolicy::new(Arc::new(PolicyConfig::default())).unwrap();
//! policy.initialize(Arc::new(Connection)).unwrap();
//!
//! assert_eq!(policy.proposed_handshake_version(), ProtocolVersion::TLSv1_1);
//! assert!(policy.on_server_version_selected(ProtocolVersion::SSLv3).is_err());
//!
//! policy.on_server_version_selected(ProtocolVersion::TLSv1_1).unwrap();
//! policy.on_compression_method_selected(Compression::Null).unwrap();
//! let transform = policy.resolve_compression_transform().unwrap();
//! assert_eq!(transform.compress(b"hello".to_vec()).unwrap(), b"hello");
//! ```
//!
//! ## Crate features
//!
//! - `logging` (enabled by default): emit log records via the `log` crate.

// Require docs for public APIs, deny unsafe code, etc.
#![forbid(unsafe_code, unused_must_use)]
#![deny(
    clippy::clone_on_ref_ptr,
    clippy::use_self,
    trivial_casts,
    trivial_numeric_casts,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_extern_crates
)]
// Relax these clippy lints:
// - single_component_path_imports: our top-level `use log` import causes
//   a false positive, https://github.com/rust-lang/rust-clippy/issues/5210
// - new_without_default: for internal constructors, the indirection is not
//   helpful
#![allow(clippy::single_component_path_imports, clippy::new_without_default)]

// log for logging (optional).
#[cfg(feature = "logging")]
use log;

#[cfg(not(feature = "logging"))]
mod log {
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! warn     ( ($($tt:tt)*) => {{}} );
    pub(crate) use {debug, trace, warn};
}

#[macro_use]
mod msgs;
pub mod compress;
mod context;
mod enums;
mod error;

/// Items for use in a client.
pub mod client;

/// Internal classes which may be useful outside the library.
/// The contents of this section DO NOT form part of the stable interface.
pub mod internal {
    /// Low-level TLS message parsing and encoding functions.
    pub mod msgs {
        pub use crate::msgs::*;
    }
}

// The public interface is:
pub use crate::context::HandshakeContext;
pub use crate::enums::{CipherSuite, ProtocolVersion};
pub use crate::error::{
    AlertDescription, Error, InconsistentHandshake, InvalidMessage, PeerIncompatible,
};
pub use crate::msgs::codec::Codec;
pub use crate::msgs::enums::{Compression, ExtensionType};
pub use crate::msgs::handshake::{Extensions, SessionId};
