//! Error types used throughout the negotiation policy.

use std::error::Error as StdError;
use std::fmt;

use crate::enums::{CipherSuite, ProtocolVersion};
use crate::msgs::enums::Compression;

/// The negotiation policy reports failures using this type.
///
/// Every error is fatal to the handshake it occurred in, and none is
/// worth retrying: the engine should send the alert given by
/// `AlertDescription::from(&error)` and close the connection.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// The peer doesn't support a protocol version/feature we require.
    /// The parameter gives a hint as to what version/feature it is.
    PeerIncompatible(PeerIncompatible),

    /// The handshake engine drove the policy in a way its contract
    /// forbids.  This is a bug in the engine, never the peer's fault.
    InconsistentHandshake(InconsistentHandshake),

    /// An identifier could not be decoded.
    InvalidMessage(InvalidMessage),

    /// A catch-all error for unlikely errors, including configurations
    /// rejected at construction time.
    General(String),
}

impl Error {
    /// Returns true if this error indicates a local defect rather than
    /// something the peer did.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InconsistentHandshake(_) | Self::General(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeerIncompatible(why) => write!(f, "peer is incompatible: {why:?}"),
            Self::InconsistentHandshake(why) => {
                write!(f, "handshake driven inconsistently: {why:?}")
            }
            Self::InvalidMessage(typ) => {
                write!(f, "received corrupt message of type {typ:?}")
            }
            Self::General(err) => write!(f, "unexpected error: {err}"),
        }
    }
}

impl StdError for Error {}

impl From<PeerIncompatible> for Error {
    #[inline]
    fn from(e: PeerIncompatible) -> Self {
        Self::PeerIncompatible(e)
    }
}

impl From<InconsistentHandshake> for Error {
    #[inline]
    fn from(e: InconsistentHandshake) -> Self {
        Self::InconsistentHandshake(e)
    }
}

impl From<InvalidMessage> for Error {
    #[inline]
    fn from(e: InvalidMessage) -> Self {
        Self::InvalidMessage(e)
    }
}

impl From<&Error> for AlertDescription {
    fn from(error: &Error) -> Self {
        match error {
            Error::PeerIncompatible(why) => Self::from(*why),
            Error::InvalidMessage(_) => Self::DecodeError,
            Error::InconsistentHandshake(_) | Error::General(_) => Self::InternalError,
        }
    }
}

/// The set of cases where we failed to make a connection because we thought
/// the peer wasn't behaving acceptably for our configuration.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PeerIncompatible {
    /// The server chose a version earlier than our configured minimum.
    ServerVersionBelowMinimum {
        /// What the server selected.
        server: ProtocolVersion,
        /// Our configured floor.
        minimum: ProtocolVersion,
    },
    /// The server does not support secure renegotiation and we are
    /// configured to insist on it.
    SecureRenegotiationRequired,
}

impl From<PeerIncompatible> for AlertDescription {
    fn from(e: PeerIncompatible) -> Self {
        match e {
            PeerIncompatible::ServerVersionBelowMinimum { .. } => Self::ProtocolVersion,
            PeerIncompatible::SecureRenegotiationRequired => Self::HandshakeFailure,
        }
    }
}

/// Ways the handshake engine can break its contract with the policy.
#[non_exhaustive]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InconsistentHandshake {
    /// A notification arrived before `initialize`.
    NotInitialized,
    /// `initialize` was called twice for one connection.
    AlreadyInitialized,
    /// A cipher suite was already recorded for this handshake.
    CipherSuiteAlreadySelected(CipherSuite),
    /// A compression method was already recorded for this handshake.
    CompressionAlreadySelected(Compression),
    /// A compression transform was requested before any method was selected.
    NoCompressionSelected,
    /// The selected compression method was never offered.
    UnofferedCompression(Compression),
    /// The selected compression method was offered, but no transform
    /// could be built for it.
    NoCompressionTransform(Compression),
    /// A notification arrived after the compression transform was
    /// resolved; the negotiation is read-only from then on.
    AlreadyFinalized,
}

/// A corrupt TLS message payload that resulted in an error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InvalidMessage {
    /// Missing data for the named handshake payload value
    MissingData(&'static str),
    /// Trailing data found for the named handshake payload value
    TrailingData(&'static str),
}

enum_builder! {
    /// The TLS alerts this policy's errors map to.  Any other alert
    /// value decodes as `Unknown`.
    #[repr(u8)]
    pub enum AlertDescription {
        HandshakeFailure => 0x28,
        DecodeError => 0x32,
        ProtocolVersion => 0x46,
        InternalError => 0x50,
    }
}

impl fmt::Display for AlertDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // phrased to follow "the peer"
        match self {
            Self::HandshakeFailure => write!(f, "could not agree on security parameters"),
            Self::DecodeError => write!(f, "sent a message that could not be decoded"),
            Self::ProtocolVersion => write!(f, "offered no acceptable protocol version"),
            Self::InternalError => write!(f, "hit an internal error"),
            Self::Unknown(n) => write!(f, "sent alert 0x{n:02x}"),
        }
    }
}
