use colored::Colorize;
use shiori_core::domain::{DomainKind, DomainRegistry};

/// Prints every domain with its kind, suggestions and, for the knowledge
/// base, the document catalog.
pub fn run(registry: &DomainRegistry) {
    for profile in registry.profiles() {
        println!("{} {}", profile.id.to_string().bold(), profile.title);
        match &profile.kind {
            DomainKind::KnowledgeBase => {
                println!(
                    "  kind: knowledge base ({} documents, {} pages)",
                    profile.documents.len(),
                    profile.total_pages()
                );
                for doc in &profile.documents {
                    println!(
                        "    {} {}p {}",
                        doc.name,
                        doc.pages,
                        doc.uploaded_at.bright_black()
                    );
                }
            }
            DomainKind::Dataset { file_name } => println!("  kind: dataset ({})", file_name),
        }
        println!("  suggestions:");
        for suggestion in &profile.suggestions {
            println!("    - {}", suggestion);
        }
        println!();
    }
}

/// One line per domain, for the chat `/domains` command.
pub fn print_summary(registry: &DomainRegistry) {
    for profile in registry.profiles() {
        println!("  {:<16} {}", profile.id.to_string().cyan(), profile.title);
    }
}
