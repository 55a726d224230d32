use std::fmt::Debug;

use crate::enums::ProtocolVersion;

/// Connection-wide state shared by the handshake engine.
///
/// The engine hands one of these to the policy through
/// [`ClientNegotiationPolicy::initialize`] before driving the handshake.
/// The policy keeps a reference but never owns or mutates the state
/// behind it; in particular, the negotiated protocol version is recorded
/// here by the engine, not by the policy.
///
/// [`ClientNegotiationPolicy::initialize`]: crate::client::ClientNegotiationPolicy::initialize
pub trait HandshakeContext: Debug + Send + Sync {
    /// The version this client offered in its ClientHello, once sent.
    fn client_version(&self) -> Option<ProtocolVersion>;

    /// The version the server selected, once the engine has accepted it.
    fn server_version(&self) -> Option<ProtocolVersion>;
}
