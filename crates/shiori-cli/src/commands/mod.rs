pub mod ask;
pub mod chat;
pub mod domains;
pub mod render;
pub mod rules;

use std::sync::Arc;

use shiori_core::config::RootConfig;
use shiori_core::domain::{DomainId, DomainRegistry};
use shiori_interaction::{NoDelay, Pacer, StagedDispatcher, TokioPacer};

/// Creates a session with the configured stage delays, or none at all.
pub fn build_dispatcher(
    registry: Arc<DomainRegistry>,
    config: &RootConfig,
    domain: DomainId,
    no_delay: bool,
) -> StagedDispatcher {
    let pacer: Arc<dyn Pacer> = if no_delay {
        Arc::new(NoDelay)
    } else {
        Arc::new(TokioPacer)
    };
    StagedDispatcher::new(registry, domain, pacer, config.dispatcher)
}
