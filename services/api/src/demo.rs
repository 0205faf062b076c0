use crate::infra::{load_catalog, parse_locale, InMemorySessionStore};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use yojna_mitra::error::AppError;
use yojna_mitra::localization::Locale;
use yojna_mitra::matching::{MatchConfig, MatchEngine, ProgramMatch, ScoringStrategyKind};
use yojna_mitra::sessions::{Message, SessionId, SessionService, TurnReply};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Conversation language (en or hi)
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Catalog file to demo against instead of the bundled set
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Scoring strategy (catalog or rules)
    #[arg(long, value_parser = parse_scoring)]
    pub(crate) scoring: Option<ScoringStrategyKind>,
    /// Drop results scoring below this threshold
    #[arg(long)]
    pub(crate) min_score: Option<u8>,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogValidateArgs {
    /// Catalog file to check; validates the bundled set when omitted
    pub(crate) path: Option<PathBuf>,
    /// Also run a keyword search over the validated catalog
    #[arg(long)]
    pub(crate) search: Option<String>,
}

fn parse_scoring(raw: &str) -> Result<ScoringStrategyKind, String> {
    ScoringStrategyKind::from_name(raw)
        .ok_or_else(|| format!("unknown scoring strategy '{raw}' (use catalog or rules)"))
}

pub(crate) fn run_catalog_validate(args: CatalogValidateArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.path.as_deref())?;
    println!("Catalog is valid: {} programs", catalog.len());
    for program in catalog.programs() {
        println!(
            "- {} | {} | {} | base score {}",
            program.id.0,
            program.kind.label(),
            program.name.en,
            program.base_score
        );
    }

    if let Some(keyword) = args.search {
        let hits = catalog.search(&keyword);
        if hits.is_empty() {
            println!("\nNo programs match '{keyword}'");
        } else {
            println!("\nPrograms matching '{keyword}':");
            for program in hits {
                println!("- {} | {}", program.id.0, program.name.en);
            }
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let locale = args.locale.unwrap_or_default();
    let catalog = load_catalog(args.catalog.as_deref())?;
    let config = MatchConfig {
        minimum_score: args.min_score,
        strategy: args.scoring.unwrap_or_default(),
    };

    let service = SessionService::new(
        Arc::new(InMemorySessionStore::default()),
        Arc::new(catalog),
        Arc::new(MatchEngine::new(config)),
        locale,
        Duration::ZERO,
    );

    println!("Yojna Mitra demo conversation\n");
    let snapshot = service.start_session(None)?;
    let session_id = SessionId(snapshot.session_id);
    for message in &snapshot.transcript {
        print_message(message);
    }

    print_reply(&service.submit_answer(&session_id, "34")?);
    print_reply(&service.submit_answer(&session_id, "Maharashtra")?);
    print_reply(&service.submit_choice(&session_id, "1to3")?);
    print_reply(&service.submit_choice(&session_id, "general")?);
    let reply = service.submit_choice(&session_id, "farmer")?;
    print_reply(&reply);

    let matches = service.get_results(&session_id)?;
    println!("\nMatched programs ({}):", matches.len());
    for entry in &matches {
        print_match(entry);
    }

    if let Some(top) = matches.first() {
        println!("\nHow to apply for {}:", top.program.name);
        for (index, step) in top.program.steps.iter().enumerate() {
            println!("  {}. {}", index + 1, step);
        }
        println!("  Link: {}", top.program.application_link);
    }

    Ok(())
}

fn print_reply(reply: &TurnReply) {
    for message in &reply.new_messages {
        print_message(message);
    }
    if let Some(choices) = &reply.choices {
        let labels: Vec<&str> = choices.iter().map(|option| option.label.as_str()).collect();
        println!("       options: {}", labels.join(" | "));
    }
}

fn print_message(message: &Message) {
    println!("[{:>6}] {}", message.origin.label(), message.text);
}

fn print_match(entry: &ProgramMatch) {
    println!(
        "- {} ({}) | score {}",
        entry.program.name, entry.program.kind_label, entry.score
    );
    for component in &entry.components {
        println!("    {:?}: {:+} ({})", component.criterion, component.delta, component.notes);
    }
}
