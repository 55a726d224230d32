use std::sync::Arc;

use crate::compress::CompressionTransform;
use crate::context::HandshakeContext;
use crate::enums::{CipherSuite, ProtocolVersion};
use crate::error::{Error, InconsistentHandshake, PeerIncompatible};
use crate::log::{debug, trace, warn};
use crate::msgs::enums::Compression;
use crate::msgs::handshake::{Extensions, SessionId};

use super::config::{InsecureRenegotiation, PolicyConfig, RecordLayerVersion};

/// What the server chose during one handshake.
///
/// Each field is written at most once per handshake, and all are
/// cleared by [`ClientNegotiationPolicy::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NegotiationState {
    /// The cipher suite from the ServerHello.
    pub cipher_suite: Option<CipherSuite>,
    /// The compression method from the ServerHello.
    pub compression: Option<Compression>,
    /// Whether the server showed support for secure renegotiation.
    pub secure_renegotiation: bool,
    /// The session id from the ServerHello.  May be empty.
    pub session_id: Option<SessionId>,
}

/// How far the handshake engine has driven a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NegotiationPhase {
    /// No context bound yet.
    Uninitialized,
    /// A context is bound; proposals may be sent.
    Initialized,
    /// The server's version has been accepted.
    VersionConfirmed,
    /// Both a cipher suite and a compression method are recorded, after
    /// the version was confirmed.
    SuiteAndCompressionSelected,
    /// The compression transform has been resolved; the state is now
    /// read-only for the life of the connection.
    Finalized,
}

/// The client side of TLS parameter negotiation.
///
/// A handshake engine queries this for what to offer while building the
/// ClientHello, and notifies it of the server's choices while processing
/// the ServerHello.  Calls must arrive in handshake-message order from
/// the single thread driving the connection.
///
/// The engine must only report cipher suites and compression methods
/// that this policy offered.  That is trusted, not checked, except that
/// an unoffered compression method surfaces as
/// [`InconsistentHandshake::UnofferedCompression`] from
/// [`resolve_compression_transform`](Self::resolve_compression_transform).
#[derive(Debug)]
pub struct ClientNegotiationPolicy {
    config: Arc<PolicyConfig>,
    compression_methods: Vec<Compression>,
    context: Option<Arc<dyn HandshakeContext>>,
    state: NegotiationState,
    version_confirmed: bool,
    finalized: bool,
}

impl ClientNegotiationPolicy {
    /// Make a new policy from `config`.
    ///
    /// Fails if `config` could never complete a handshake: when the
    /// minimum version is later than the offered version, or the
    /// strategy offers no compression methods.
    pub fn new(config: Arc<PolicyConfig>) -> Result<Self, Error> {
        if !config
            .minimum_version
            .is_equal_or_earlier_than(config.client_version)
        {
            return Err(Error::General(format!(
                "minimum_version {:?} is not at or before client_version {:?}",
                config.minimum_version, config.client_version
            )));
        }

        let compression_methods = config.strategy.compression_methods();
        if compression_methods.is_empty() {
            return Err(Error::General(
                "strategy offered no compression methods".into(),
            ));
        }

        Ok(Self {
            config,
            compression_methods,
            context: None,
            state: NegotiationState::default(),
            version_confirmed: false,
            finalized: false,
        })
    }

    /// Bind the connection's handshake context.  Exactly once per
    /// connection, before any notification.
    pub fn initialize(&mut self, context: Arc<dyn HandshakeContext>) -> Result<(), Error> {
        if self.context.is_some() {
            return Err(InconsistentHandshake::AlreadyInitialized.into());
        }

        trace!("Negotiation policy bound to {:?}", context);
        self.context = Some(context);
        Ok(())
    }

    /// Forget everything about the previous connection attempt, ready
    /// for a reconnect.  The configuration is kept.
    pub fn reset(&mut self) {
        self.context = None;
        self.state = NegotiationState::default();
        self.version_confirmed = false;
        self.finalized = false;
    }

    /// The version to put in the record-layer header of the ClientHello.
    pub fn proposed_record_layer_version(&self) -> ProtocolVersion {
        match self.config.record_layer_version {
            RecordLayerVersion::Legacy => ProtocolVersion::SSLv3,
            RecordLayerVersion::MinimumVersion => self.minimum_acceptable_version(),
            RecordLayerVersion::ClientVersion => self.proposed_handshake_version(),
        }
    }

    /// The highest version we offer, for `ClientHello.client_version`.
    pub fn proposed_handshake_version(&self) -> ProtocolVersion {
        self.config.client_version
    }

    /// The lowest version we accept from the server.
    pub fn minimum_acceptable_version(&self) -> ProtocolVersion {
        self.config.minimum_version
    }

    /// Compression methods to offer, in preference order.  Never empty.
    pub fn proposed_compression_methods(&self) -> &[Compression] {
        &self.compression_methods
    }

    /// Extensions to offer, or `None` for no extensions block.
    pub fn proposed_extensions(&self) -> Option<Extensions> {
        self.config.strategy.client_extensions()
    }

    /// Check the version the server selected against our minimum.
    ///
    /// The version itself is recorded by the engine, not here.
    pub fn on_server_version_selected(&mut self, version: ProtocolVersion) -> Result<(), Error> {
        self.require_open()?;

        let minimum = self.minimum_acceptable_version();
        if !minimum.is_equal_or_earlier_than(version) {
            warn!(
                "Server selected {:?}, below our minimum of {:?}",
                version, minimum
            );
            return Err(PeerIncompatible::ServerVersionBelowMinimum {
                server: version,
                minimum,
            }
            .into());
        }

        debug!("Server selected version {:?}", version);
        self.version_confirmed = true;
        Ok(())
    }

    /// Note the session id the server sent.  Never fails.
    ///
    /// Resumption is not offered, so the id is only kept for the engine
    /// to read back.  Only the first id of a handshake is kept.
    pub fn on_session_id_received(&mut self, id: &SessionId) {
        if self.context.is_none() {
            debug!("Ignoring session id before initialization");
            return;
        }
        if self.finalized {
            debug!("Ignoring session id after negotiation was finalized");
            return;
        }

        match self.state.session_id {
            Some(_) => debug!("Ignoring repeated session id {:?}", id),
            None => {
                trace!("Server session id {:?}", id);
                self.state.session_id = Some(*id);
            }
        }

        if let Some(hook) = &self.config.on_session_id {
            hook(id);
        }
    }

    /// Record the cipher suite the server selected.
    ///
    /// No check is made that we offered it.
    pub fn on_cipher_suite_selected(&mut self, suite: CipherSuite) -> Result<(), Error> {
        self.require_open()?;

        if let Some(existing) = self.state.cipher_suite {
            return Err(InconsistentHandshake::CipherSuiteAlreadySelected(existing).into());
        }

        debug!("Using ciphersuite {:?}", suite);
        self.state.cipher_suite = Some(suite);
        Ok(())
    }

    /// Record the compression method the server selected.
    ///
    /// No check is made that we offered it; see
    /// [`resolve_compression_transform`](Self::resolve_compression_transform).
    pub fn on_compression_method_selected(&mut self, method: Compression) -> Result<(), Error> {
        self.require_open()?;

        if let Some(existing) = self.state.compression {
            return Err(InconsistentHandshake::CompressionAlreadySelected(existing).into());
        }

        debug!("Using compression {:?}", method);
        self.state.compression = Some(method);
        Ok(())
    }

    /// Learn whether the server supports secure renegotiation.
    ///
    /// Whether a server without it is acceptable is decided by
    /// [`PolicyConfig::insecure_renegotiation`]; by default it is.
    pub fn on_secure_renegotiation_status(&mut self, is_secure: bool) -> Result<(), Error> {
        self.require_open()?;

        if let Some(hook) = &self.config.on_secure_renegotiation {
            hook(is_secure);
        }

        if is_secure {
            self.state.secure_renegotiation = true;
            return Ok(());
        }

        match self.config.insecure_renegotiation {
            InsecureRenegotiation::Tolerate => {
                warn!("Server does not support secure renegotiation; continuing");
                Ok(())
            }
            InsecureRenegotiation::Abort => {
                Err(PeerIncompatible::SecureRenegotiationRequired.into())
            }
        }
    }

    /// Receive the extensions the server returned.  Never fails.
    ///
    /// The engine must only pass extensions we offered.
    pub fn on_server_extensions_received(&mut self, extensions: &Extensions) {
        if self.finalized {
            debug!("Ignoring server extensions after negotiation was finalized");
            return;
        }

        trace!("Server extensions {:?}", extensions);

        if let Some(hook) = &self.config.on_server_extensions {
            hook(extensions);
        }
    }

    /// Build the record-layer compression transform for the selected
    /// compression method.
    ///
    /// After this the negotiation is finalized, and the notifications
    /// above no longer change anything.  Resolving again is allowed and
    /// yields a fresh transform.  Every failure here is
    /// an [`InconsistentHandshake`]: the engine accepted a method we
    /// could not have offered, or asked too early.
    pub fn resolve_compression_transform(&mut self) -> Result<Box<dyn CompressionTransform>, Error> {
        let method = self
            .state
            .compression
            .ok_or(InconsistentHandshake::NoCompressionSelected)?;

        if !self
            .compression_methods
            .contains(&method)
        {
            return Err(InconsistentHandshake::UnofferedCompression(method).into());
        }

        let transform = self
            .config
            .strategy
            .compression_transform(method)
            .ok_or(InconsistentHandshake::NoCompressionTransform(method))?;

        self.finalized = true;
        Ok(transform)
    }

    /// Everything recorded so far in this handshake.
    pub fn state(&self) -> &NegotiationState {
        &self.state
    }

    /// The cipher suite the server selected, if any yet.
    pub fn selected_cipher_suite(&self) -> Option<CipherSuite> {
        self.state.cipher_suite
    }

    /// The compression method the server selected, if any yet.
    pub fn selected_compression_method(&self) -> Option<Compression> {
        self.state.compression
    }

    /// The session id the server sent, if any yet.
    pub fn session_id(&self) -> Option<&SessionId> {
        self.state.session_id.as_ref()
    }

    /// Whether the server showed support for secure renegotiation.
    pub fn secure_renegotiation(&self) -> bool {
        self.state.secure_renegotiation
    }

    /// The context bound by `initialize`, if any.
    pub fn context(&self) -> Option<&Arc<dyn HandshakeContext>> {
        self.context.as_ref()
    }

    /// The configuration this policy was built from.
    pub fn config(&self) -> &Arc<PolicyConfig> {
        &self.config
    }

    /// How far the handshake has progressed.
    ///
    /// Phases are only entered in order: a recorded cipher suite and
    /// compression method count for nothing until the server's version
    /// has been confirmed.  `Finalized` is reported whenever the transform
    /// has been resolved, since that is what makes the state read-only.
    pub fn phase(&self) -> NegotiationPhase {
        if self.context.is_none() {
            NegotiationPhase::Uninitialized
        } else if self.finalized {
            NegotiationPhase::Finalized
        } else if !self.version_confirmed {
            NegotiationPhase::Initialized
        } else if self.state.cipher_suite.is_some() && self.state.compression.is_some() {
            NegotiationPhase::SuiteAndCompressionSelected
        } else {
            NegotiationPhase::VersionConfirmed
        }
    }

    fn require_open(&self) -> Result<(), Error> {
        self.require_initialized()?;
        if self.finalized {
            return Err(InconsistentHandshake::AlreadyFinalized.into());
        }
        Ok(())
    }

    fn require_initialized(&self) -> Result<(), Error> {
        match self.context {
            Some(_) => Ok(()),
            None => Err(InconsistentHandshake::NotInitialized.into()),
        }
    }
}
