use std::fmt;
use std::sync::Arc;

use crate::compress::{CompressionTransform, NullCompression};
use crate::enums::ProtocolVersion;
use crate::msgs::enums::Compression;
use crate::msgs::handshake::{Extensions, SessionId};

use super::handy::DefaultNegotiationStrategy;

/// Capability decisions a client offers during negotiation.
///
/// Every method has a default, and [`DefaultNegotiationStrategy`] uses
/// them all.  To offer extensions or another compression method,
/// implement this trait overriding only what differs and place it in
/// [`PolicyConfig::strategy`].
pub trait NegotiationStrategy: fmt::Debug + Send + Sync {
    /// Compression methods to offer, in preference order.
    ///
    /// This must not be empty, and is queried once, when the policy is
    /// constructed.
    fn compression_methods(&self) -> Vec<Compression> {
        vec![Compression::Null]
    }

    /// Extensions to include in the ClientHello, or `None` to send no
    /// extensions block at all.
    fn client_extensions(&self) -> Option<Extensions> {
        None
    }

    /// Build the transform for a negotiated compression method.
    ///
    /// Only called with methods returned by `compression_methods`.
    fn compression_transform(&self, method: Compression) -> Option<Box<dyn CompressionTransform>> {
        match method {
            Compression::Null => Some(Box::new(NullCompression)),
            _ => None,
        }
    }
}

/// Which version goes in the record-layer header of the ClientHello.
///
/// RFC 5246 E.1 lets a client send any `{03,XX}` value here to
/// accommodate older servers.  No single value guarantees
/// interoperability with all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordLayerVersion {
    /// Always `{03,00}`.
    Legacy,
    /// The lowest version this client will accept.
    MinimumVersion,
    /// The same version as `ClientHello.client_version`.
    #[default]
    ClientVersion,
}

/// What to do when the server does not support secure renegotiation
/// (RFC 5746).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsecureRenegotiation {
    /// Continue the handshake with a legacy peer.
    #[default]
    Tolerate,
    /// Fail the handshake with a `handshake_failure` alert.
    Abort,
}

/// Called with the session id from the ServerHello.
pub type SessionIdHook = Arc<dyn Fn(&SessionId) + Send + Sync>;

/// Called with whether the server supports secure renegotiation.
pub type SecureRenegotiationHook = Arc<dyn Fn(bool) + Send + Sync>;

/// Called with the extensions the server returned.
pub type ServerExtensionsHook = Arc<dyn Fn(&Extensions) + Send + Sync>;

/// Configuration for a [`ClientNegotiationPolicy`].
///
/// Shared between connections through an `Arc`; it is never mutated
/// once a policy has been built from it.  `PolicyConfig::default()`
/// gives the conservative defaults: offer TLS 1.1, accept TLS 1.0 or
/// later, offer only null compression, no extensions, and tolerate
/// servers lacking secure renegotiation.
///
/// [`ClientNegotiationPolicy`]: super::ClientNegotiationPolicy
#[derive(Clone)]
pub struct PolicyConfig {
    /// The highest version we offer.
    ///
    /// Deliberately not the newest version this crate knows about:
    /// some legacy servers fail on versions they don't recognise.
    pub client_version: ProtocolVersion,

    /// The lowest version we accept from the server.
    pub minimum_version: ProtocolVersion,

    /// Which version we put in the record-layer header of the ClientHello.
    pub record_layer_version: RecordLayerVersion,

    /// Whether a server without secure renegotiation is acceptable.
    pub insecure_renegotiation: InsecureRenegotiation,

    /// Compression and extension decisions.
    pub strategy: Arc<dyn NegotiationStrategy>,

    /// Observes the server's session id.  `None` does nothing.
    pub on_session_id: Option<SessionIdHook>,

    /// Observes the server's secure renegotiation status.  `None` does
    /// nothing beyond what `insecure_renegotiation` requires.
    pub on_secure_renegotiation: Option<SecureRenegotiationHook>,

    /// Observes the server's extensions.  `None` does nothing.
    pub on_server_extensions: Option<ServerExtensionsHook>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            client_version: ProtocolVersion::TLSv1_1,
            minimum_version: ProtocolVersion::TLSv1_0,
            record_layer_version: RecordLayerVersion::default(),
            insecure_renegotiation: InsecureRenegotiation::default(),
            strategy: Arc::new(DefaultNegotiationStrategy),
            on_session_id: None,
            on_secure_renegotiation: None,
            on_server_extensions: None,
        }
    }
}

impl fmt::Debug for PolicyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyConfig")
            .field("client_version", &self.client_version)
            .field("minimum_version", &self.minimum_version)
            .field("record_layer_version", &self.record_layer_version)
            .field("insecure_renegotiation", &self.insecure_renegotiation)
            .field("strategy", &self.strategy)
            .field("on_session_id", &self.on_session_id.is_some())
            .field(
                "on_secure_renegotiation",
                &self.on_secure_renegotiation.is_some(),
            )
            .field("on_server_extensions", &self.on_server_extensions.is_some())
            .finish()
    }
}
