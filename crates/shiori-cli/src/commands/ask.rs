use std::sync::Arc;

use anyhow::{Result, bail};
use serde_json::json;
use shiori_core::config::RootConfig;
use shiori_core::domain::{DomainId, DomainRegistry};
use shiori_core::markup::render_spans;
use shiori_interaction::SubmitOutcome;

use super::build_dispatcher;
use crate::view;

pub async fn run(
    registry: Arc<DomainRegistry>,
    config: &RootConfig,
    domain: DomainId,
    question: &str,
    json: bool,
    no_delay: bool,
) -> Result<()> {
    let dispatcher = build_dispatcher(registry, config, domain, no_delay);
    let outcome = dispatcher.submit(question).await;
    let state = dispatcher.current_state().await;
    let answer = state.last_answer();

    if json {
        let output = json!({
            "domain": state.domain,
            "outcome": outcome,
            "answer": answer,
            "blocks": answer.map(|m| render_spans(&m.body)),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match (&outcome, answer) {
        (SubmitOutcome::Completed { .. }, Some(answer)) => view::print_message(answer),
        (SubmitOutcome::Rejected { reason }, _) => bail!("Question rejected: {:?}", reason),
        _ => bail!("No answer was produced"),
    }

    Ok(())
}
