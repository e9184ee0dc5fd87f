use anyhow::Context;
use clap::Parser;
use smell_corpus::config::args::{Cli, Command, PromptArgs};
use smell_corpus::core::CorpusTree;
use smell_corpus::refactor::extract::extract_categories;
use smell_corpus::refactor::{fence_language, ExtractOutcome, RefactorRequest};
use smell_corpus::utils::{logger, validation::Validate};
use smell_corpus::{
    corpus, CorpusSettings, Discovery, Harness, HarnessError, LocalTree, PlanEntry,
    ReportSettings, ReportWriter, TracingReporter,
};

const EXIT_SUITE_FAILED: i32 = 1;
const EXIT_CONFIG: i32 = 2;

fn main() {
    let cli = Cli::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting smell-corpus CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let (corpus_settings, report_settings) = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(EXIT_CONFIG);
        }
    };

    let result = match &cli.command {
        Command::Run(_) => run(&corpus_settings, &report_settings),
        Command::Discover(_) => discover(&corpus_settings),
        Command::Prompt(args) => prompt(&corpus_settings, args),
        Command::Extract(_) => extract(&corpus_settings),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            match e.downcast_ref::<HarnessError>() {
                Some(harness_error) => {
                    tracing::error!(
                        "❌ {:#} (Category: {:?}, Severity: {:?})",
                        e,
                        harness_error.category(),
                        harness_error.severity()
                    );
                    tracing::error!("💡 Recovery suggestion: {}", harness_error.recovery_suggestion());
                    eprintln!("❌ {}", harness_error.user_friendly_message());
                }
                None => {
                    tracing::error!("❌ {:#}", e);
                    eprintln!("❌ {:#}", e);
                }
            }
            std::process::exit(EXIT_SUITE_FAILED);
        }
    }
}

fn resolve_settings(cli: &Cli) -> Result<(CorpusSettings, ReportSettings), HarnessError> {
    let (corpus_settings, report_settings) = cli.resolve()?;
    corpus_settings.validate()?;
    report_settings.validate()?;
    Ok((corpus_settings, report_settings))
}

fn run(settings: &CorpusSettings, report: &ReportSettings) -> anyhow::Result<i32> {
    let registry = corpus::registry().context("Failed to build the implementation registry")?;
    let discovery = Discovery::new(LocalTree, settings);
    let mut harness = Harness::new(&registry, TracingReporter);

    let summary = harness
        .discover_and_run(&discovery)
        .with_context(|| format!("Failed to scan corpus at {}", settings.root.display()))?;

    if let Some(output_path) = &report.output_path {
        let writer = ReportWriter::new(LocalTree, output_path, report.output_formats.clone());
        for path in writer.write(&summary)? {
            tracing::info!("📁 Report saved to: {}", path.display());
        }
    }

    let failed = summary.failed_suites();
    if failed.is_empty() {
        println!("✅ {} suite(s) passed", summary.suites.len());
        Ok(0)
    } else {
        println!("❌ {} of {} suite(s) failed", failed.len(), summary.suites.len());
        for suite in failed {
            println!("   - {} [{}]", suite.description, suite.kind);
        }
        Ok(EXIT_SUITE_FAILED)
    }
}

fn discover(settings: &CorpusSettings) -> anyhow::Result<i32> {
    let plan = Discovery::new(LocalTree, settings).discover()?;

    for entry in &plan {
        match entry {
            PlanEntry::Suite(suite) => {
                println!("{}\t{}", suite.id.description(), suite.path.display());
            }
            PlanEntry::Placeholder { label, reason } => {
                println!("{}\tplaceholder: {}", label, reason);
            }
        }
    }
    println!("📋 {} entries", plan.len());
    Ok(0)
}

fn prompt(settings: &CorpusSettings, args: &PromptArgs) -> anyhow::Result<i32> {
    let category_dir = settings.root.join(&args.category);
    let request =
        match RefactorRequest::load(&LocalTree, &category_dir, &args.sample, &settings.extension) {
            Ok(request) => request,
            Err(HarnessError::EmptyTestSpec { category, sample }) => {
                tracing::warn!(
                    "Skipping refactoring for {} - {} as test file is empty.",
                    category,
                    sample
                );
                return Ok(0);
            }
            Err(e) => return Err(e.into()),
        };

    let completion =
        request.completion_path(&LocalTree, &category_dir.join(&settings.refactored_dir))?;

    println!("=== System prompt ===\n{}\n", request.system_prompt());
    println!("=== User prompt ===\n{}\n", request.user_prompt());
    println!("💾 Save the completion to: {}", completion.display());
    Ok(0)
}

fn extract(settings: &CorpusSettings) -> anyhow::Result<i32> {
    let categories = if settings.categories.is_empty() {
        let mut dirs: Vec<String> = LocalTree
            .list_dir(&settings.root)?
            .into_iter()
            .filter(|entry| entry.is_dir)
            .map(|entry| entry.name)
            .collect();
        dirs.sort();
        dirs
    } else {
        settings.categories.clone()
    };

    let lang = fence_language(&settings.extension);
    let outcomes = extract_categories(
        &LocalTree,
        &settings.root,
        &categories,
        &settings.refactored_dir,
        &settings.extension,
        lang,
    )?;

    let written = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, ExtractOutcome::Written { .. }))
        .count();
    println!(
        "✅ {} source file(s) written, {} completion(s) without code",
        written,
        outcomes.len() - written
    );
    Ok(0)
}
