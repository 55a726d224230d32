use super::config::NegotiationStrategy;

/// A `NegotiationStrategy` that makes the default choices: offer only
/// null compression and no extensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultNegotiationStrategy;

impl NegotiationStrategy for DefaultNegotiationStrategy {}
