//! Scrutineer CLI
//!
//! Usage:
//!   scrutineer --file essay.txt                      # Analyze a document
//!   scrutineer --text "pasted text" --json           # JSON report
//!   scrutineer --file essay.txt --offline            # Local heuristics only
//!   scrutineer --serve                               # HTTP API server

use std::sync::Arc;

use clap::Parser;
use colored::Colorize;

use scrutineer::core::assessor::{DEFAULT_MODEL, API_KEY_ENV};
use scrutineer::core::{
    load_text_file, run_server, Analyzer, AnthropicAssessor, OfflineAssessor, RemoteAssessor,
    UnconfiguredAssessor,
};
use scrutineer::types::{AbilityBand, AnalyzeError, EducationLevel, Report, Severity, StudentContext};
use scrutineer::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "scrutineer",
    version = VERSION,
    about = "Screen student writing for likely AI assistance",
    long_about = "Scrutineer screens submitted student text for signs of AI assistance.\n\n\
                  It always computes local heuristic signals (indicator phrases, sentence\n\
                  statistics, structural uniformity) and, when an API key is configured,\n\
                  asks a hosted model for a full semantic assessment. If the remote call\n\
                  fails for any reason the local signals alone produce a limited report -\n\
                  you always get a verdict.\n\n\
                  Set ANTHROPIC_API_KEY to enable the full assessment."
)]
struct Args {
    /// Plain-text file to analyze (.txt)
    #[arg(short, long)]
    file: Option<String>,

    /// Text to analyze directly
    #[arg(short, long)]
    text: Option<String>,

    /// Educational level of the student
    #[arg(long, value_enum, default_value = "gcse")]
    level: EducationLevel,

    /// Expected ability band
    #[arg(long, value_enum, default_value = "mid")]
    ability: AbilityBand,

    /// Subject of the assignment
    #[arg(long)]
    subject: Option<String>,

    /// Additional context about the student or assignment
    #[arg(long)]
    notes: Option<String>,

    /// Skip the remote assessment, use local heuristics only
    #[arg(long)]
    offline: bool,

    /// Model for the remote assessment
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:3000)
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show the local signal breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    let analyzer = Analyzer::new(build_assessor(&args));

    if args.serve {
        if let Err(e) = run_server(&args.addr, analyzer).await {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let text = match load_input(&args) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let context = StudentContext {
        level: args.level,
        ability: args.ability,
        subject: args.subject.clone(),
        additional_notes: args.notes.clone(),
    };

    match analyzer.analyze(&text, &context).await {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            } else {
                print_report(&report, args.verbose);
            }
        }
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    }
}

/// Pick the assessor for this invocation. A missing credential is not fatal -
/// it degrades to the fallback path with an explanatory summary.
fn build_assessor(args: &Args) -> Arc<dyn RemoteAssessor> {
    if args.offline {
        return Arc::new(OfflineAssessor);
    }
    match AnthropicAssessor::from_env(&args.model) {
        Ok(assessor) => Arc::new(assessor),
        Err(err) => {
            tracing::warn!(error = %err, "no remote assessor configured");
            Arc::new(UnconfiguredAssessor {
                detail: format!("{} is not set", API_KEY_ENV),
            })
        }
    }
}

/// Resolve the input text from --text or --file
fn load_input(args: &Args) -> Result<String, AnalyzeError> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref file) = args.file {
        return load_text_file(file);
    }
    Err(AnalyzeError::EmptyInput)
}

/// Render the report for the terminal
fn print_report(report: &Report, verbose: bool) {
    println!();
    println!("{}", "=".repeat(60));
    println!("  Scrutineer v{} - Originality Report", VERSION);
    println!("{}", "=".repeat(60));
    println!();

    println!("{}", "OVERALL ASSESSMENT".dimmed());
    println!("  {}", colorize_verdict(&report.overall_verdict));
    println!("  Confidence: {}%", report.confidence_score);
    if report.likely_ai_tool != "None detected" && report.likely_ai_tool != "Unknown" {
        println!("  Suspected tool: {}", report.likely_ai_tool.yellow());
    }
    if report.limited_analysis {
        println!(
            "  {}",
            "Pattern detection only - full AI analysis was unavailable.".yellow()
        );
    }
    println!();
    println!("{}", "Summary".dimmed());
    println!("  {}", report.summary);
    println!();

    let signals = &report.local_signals;
    println!("{}", "Document statistics".dimmed());
    println!(
        "  Words: {} | Sentences: {} | Avg sentence length: {} | Paragraphs: {}",
        signals.word_count,
        signals.sentence_count,
        signals
            .avg_sentence_length
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "n/a".to_string()),
        signals.paragraph_count,
    );
    println!(
        "  Complex words: {:.1}% | Structural uniformity: {:.0}% | Indicator weight: {}",
        signals.complex_word_ratio * 100.0,
        signals.structural_uniformity * 100.0,
        signals.total_indicator_weight,
    );
    println!();

    if verbose && !signals.found_phrases.is_empty() {
        println!("{}", "Indicator phrases".dimmed());
        for m in &signals.found_phrases {
            println!(
                "  \"{}\" ×{} (weight {}, {})",
                m.text, m.count, m.weight, m.tool
            );
        }
        println!();
    }

    if !report.red_flags.is_empty() {
        println!("{}", "Red flags".dimmed());
        for flag in &report.red_flags {
            println!("  [{}] {}", colorize_severity(flag.severity), flag.issue);
            println!("        {}", flag.explanation);
            for example in &flag.examples {
                println!("        \"{}\"", example.italic());
            }
        }
        println!();
    }

    if !report.section_analysis.is_empty() {
        println!("{}", "Section analysis".dimmed());
        for section in &report.section_analysis {
            println!("  {} - {}", section.section.bold(), section.verdict);
            println!("        {}", section.reasoning);
        }
        println!();
    }

    if !report.authentic_elements.is_empty() {
        println!("{}", "Authentic elements".dimmed());
        for elem in &report.authentic_elements {
            println!("  {} {}", "+".green(), elem);
        }
        println!();
    }

    if !report.recommendations.is_empty() {
        println!("{}", "Recommendations".dimmed());
        for (i, rec) in report.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, rec);
        }
        println!();
    }

    if !report.questions_for_student.is_empty() {
        println!("{}", "Questions for the student".dimmed());
        for (i, q) in report.questions_for_student.iter().enumerate() {
            println!("  {}. {}", i + 1, q);
        }
        println!();
    }

    println!("{}", format!("Report generated: {}", report.timestamp).dimmed());
    println!(
        "{}",
        "Indicators only - use professional judgment and follow your institution's policies."
            .dimmed()
    );
}

fn colorize_verdict(verdict: &str) -> colored::ColoredString {
    let lower = verdict.to_lowercase();
    if lower.contains("high") {
        verdict.red().bold()
    } else if lower.contains("medium") {
        verdict.yellow().bold()
    } else {
        verdict.green().bold()
    }
}

fn colorize_severity(severity: Severity) -> colored::ColoredString {
    let label = severity.to_string();
    match severity {
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.green(),
    }
}
