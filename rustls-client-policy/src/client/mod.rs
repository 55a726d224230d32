mod config;
mod handy;
mod policy;


pub use config::{
    InsecureRenegotiation, NegotiationStrategy, PolicyConfig, RecordLayerVersion,
    SecureRenegotiationHook, ServerExtensionsHook, SessionIdHook,
};
pub use handy::DefaultNegotiationStrategy;
pub use policy::{ClientNegotiationPolicy, NegotiationPhase, NegotiationState};
