#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rustls_client_policy::client::{ClientNegotiationPolicy, PolicyConfig};
use rustls_client_policy::{HandshakeContext, ProtocolVersion};

/// Connection state as a handshake engine would keep it: the policy
/// never writes here, the engine does.
#[derive(Debug, Default)]
pub struct EngineContext {
    client_version: Mutex<Option<ProtocolVersion>>,
    server_version: Mutex<Option<ProtocolVersion>>,
}

impl EngineContext {
    pub fn set_client_version(&self, version: ProtocolVersion) {
        *self.client_version.lock().unwrap() = Some(version);
    }

    pub fn set_server_version(&self, version: ProtocolVersion) {
        *self.server_version.lock().unwrap() = Some(version);
    }
}

impl HandshakeContext for EngineContext {
    fn client_version(&self) -> Option<ProtocolVersion> {
        *self.client_version.lock().unwrap()
    }

    fn server_version(&self) -> Option<ProtocolVersion> {
        *self.server_version.lock().unwrap()
    }
}

pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .try_init();
}

pub fn make_policy(config: PolicyConfig) -> (ClientNegotiationPolicy, Arc<EngineContext>) {
    init_logging();
    let context = Arc::new(EngineContext::default());
    let mut policy = ClientNegotiationPolicy::new(Arc::new(config)).unwrap();
    policy
        .initialize(Arc::clone(&context) as Arc<dyn HandshakeContext>)
        .unwrap();
    (policy, context)
}

pub fn all_tls_versions() -> Vec<ProtocolVersion> {
    (0x0300u16..=0x0304)
        .map(ProtocolVersion::from)
        .collect()
}
