//! Interactive chat REPL.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use shiori_core::config::RootConfig;
use shiori_core::domain::{DomainId, DomainKind, DomainRegistry};
use shiori_core::session::SessionEvent;
use shiori_interaction::{RejectReason, StagedDispatcher, SubmitOutcome};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use super::build_dispatcher;
use crate::view;

const COMMANDS: &[&str] = &["/domain", "/domains", "/suggest", "/reset", "/state"];

/// rustyline helper: completes and hints slash commands and domain ids.
#[derive(Clone)]
struct ChatHelper {
    commands: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        let mut commands: Vec<String> = COMMANDS.iter().map(|c| c.to_string()).collect();
        commands.extend(DomainId::all().map(|d| format!("/domain {}", d)));
        Self { commands }
    }

    fn candidates<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.commands.iter().filter(move |cmd| cmd.starts_with(line))
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, vec![]));
        }
        let candidates = self
            .candidates(line)
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !line.starts_with('/') {
            return Borrowed(line);
        }
        match domain_argument(line) {
            Some((argument, known)) => {
                let argument = if known { argument.green() } else { argument.red() };
                Owned(format!("{} {}", "/domain".bright_cyan(), argument))
            }
            None => Owned(line.bright_cyan().to_string()),
        }
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

/// The argument of a `/domain <id>` line and whether it names a domain.
fn domain_argument(line: &str) -> Option<(&str, bool)> {
    let argument = line.strip_prefix("/domain ")?;
    Some((argument, DomainId::parse(argument).is_ok()))
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return None;
        }
        self.candidates(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ChatHelper {}

pub async fn run(
    registry: Arc<DomainRegistry>,
    config: &RootConfig,
    domain: DomainId,
    no_delay: bool,
) -> Result<()> {
    let (events_tx, mut events) = mpsc::unbounded_channel();
    let dispatcher = build_dispatcher(registry, config, domain, no_delay).with_events(events_tx);

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ChatHelper::new()));

    println!("{}", "=== Shiori ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a question, '/domains' to list domains, or 'quit' to exit.".bright_black()
    );
    print_welcome(&dispatcher).await;

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                if trimmed.starts_with('/') {
                    handle_command(&dispatcher, &mut events, trimmed).await;
                } else {
                    ask(&dispatcher, &mut events, trimmed).await;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

/// Submits a question and prints events while it is being answered.
async fn ask(
    dispatcher: &StagedDispatcher,
    events: &mut UnboundedReceiver<SessionEvent>,
    question: &str,
) {
    let submit = dispatcher.submit(question);
    tokio::pin!(submit);

    let outcome = loop {
        tokio::select! {
            biased;
            Some(event) = events.recv() => print_event(&event),
            outcome = &mut submit => break outcome,
        }
    };
    drain_events(events);

    if let SubmitOutcome::Rejected {
        reason: RejectReason::Busy { stage },
    } = outcome
    {
        println!(
            "{}",
            format!("Still answering the previous question ({}).", stage).yellow()
        );
    }
}

async fn handle_command(
    dispatcher: &StagedDispatcher,
    events: &mut UnboundedReceiver<SessionEvent>,
    input: &str,
) {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let argument = parts.next();

    match (command, argument) {
        ("/domain", Some(value)) => match DomainId::parse(value) {
            Ok(domain) => {
                dispatcher.switch_domain(domain).await;
                drain_events(events);
                print_welcome(dispatcher).await;
            }
            Err(e) => println!("{}", e.to_string().red()),
        },
        ("/domain", None) => {
            let state = dispatcher.current_state().await;
            println!("Current domain: {}", state.domain.to_string().bold());
        }
        ("/domains", _) => super::domains::print_summary(dispatcher.registry()),
        ("/suggest", _) => print_suggestions(dispatcher).await,
        ("/reset", _) => {
            dispatcher.reset().await;
            drain_events(events);
            println!("{}", "Session cleared.".bright_green());
        }
        ("/state", _) => {
            let state = dispatcher.current_state().await;
            match serde_json::to_string_pretty(&state) {
                Ok(text) => println!("{}", text),
                Err(e) => println!("{}", format!("Failed to serialize state: {}", e).red()),
            }
        }
        _ => println!("{}", format!("Unknown command: {}", command).bright_black()),
    }
}

fn print_event(event: &SessionEvent) {
    match event {
        SessionEvent::MessageAppended { message } if message.is_user() => {}
        SessionEvent::MessageAppended { message } => view::print_message(message),
        SessionEvent::StageChanged { stage } => view::print_stage(*stage),
        SessionEvent::SessionReset { domain } => {
            println!("{}", format!("[session reset: {}]", domain).bright_black())
        }
    }
}

fn drain_events(events: &mut UnboundedReceiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        if !matches!(event, SessionEvent::SessionReset { .. }) {
            print_event(&event);
        }
    }
}

async fn print_welcome(dispatcher: &StagedDispatcher) {
    let profile = dispatcher.active_profile().await;
    println!();
    println!("{}", profile.title.bold());
    match &profile.kind {
        DomainKind::KnowledgeBase => println!(
            "{}",
            format!(
                "{} documents, {} pages indexed",
                profile.documents.len(),
                profile.total_pages()
            )
            .bright_black()
        ),
        DomainKind::Dataset { file_name } => {
            println!("{}", format!("Data file: {}", file_name).bright_black())
        }
    }
    print_suggestions(dispatcher).await;
}

async fn print_suggestions(dispatcher: &StagedDispatcher) {
    let profile = dispatcher.active_profile().await;
    println!("{}", "Try asking:".yellow());
    for suggestion in &profile.suggestions {
        println!("  - {}", suggestion);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_argument_is_checked() {
        assert_eq!(domain_argument("/domain sales"), Some(("sales", true)));
        assert_eq!(domain_argument("/domain weather"), Some(("weather", false)));
        assert_eq!(domain_argument("/domains"), None);
        assert_eq!(domain_argument("/reset"), None);
    }

    #[test]
    fn test_hints_complete_domain_ids() {
        let helper = ChatHelper::new();
        let hint = helper
            .candidates("/domain kn")
            .next()
            .map(|cmd| cmd["/domain kn".len()..].to_string());
        assert_eq!(hint.as_deref(), Some("owledge-base"));
    }
}
