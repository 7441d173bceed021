#![deny(warnings)]

use anyhow::Context;
use clap::{ArgGroup, Parser, ValueEnum};
use speechcoach_core::config::AnalysisConfig;
use speechcoach_core::metrics::MetricsExtractor;
use speechcoach_core::pipeline::AnalysisPipeline;
use speechcoach_core::report::{AnalysisReport, MemoryReportStore};
use speechcoach_core::score::ConfidenceScorer;
use speechcoach_core::sentiment::LexiconSentimentAnalyzer;
use speechcoach_core::transcript::{PlainTextSource, TextFileSource, TranscriptInput, TranscriptSource};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "speechcoach")]
#[command(about = "Speech delivery analysis (pace, fillers, grammar, vocabulary, confidence)")]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(false)
        .args(["transcript", "text"])
))]
struct Args {
    /// Path to a UTF-8 transcript file
    #[arg(long)]
    transcript: Option<String>,

    /// Transcript text passed inline
    #[arg(long)]
    text: Option<String>,

    /// Duration of the source audio in seconds
    #[arg(long)]
    duration_secs: f64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,

    #[arg(long, env = "SPEECHCOACH_LOG", default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Pretty,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let config = AnalysisConfig::default();
    tracing::info!(
        duration_secs = args.duration_secs,
        fillers = config.fillers.terms.len(),
        grammar_rules = config.grammar.rules.len(),
        "config loaded"
    );

    let report = match (&args.transcript, &args.text) {
        (Some(path), None) => {
            let source = TextFileSource::new(path.clone(), args.duration_secs);
            analyze(config, source).await?
        }
        (None, Some(text)) => {
            let input = TranscriptInput::new(text.clone(), args.duration_secs)
                .context("invalid --duration-secs")?;
            analyze(config, PlainTextSource::new(input)).await?
        }
        _ => anyhow::bail!("exactly one of --transcript or --text must be provided"),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Pretty => print!("{}", render_pretty(&report)),
    }

    Ok(())
}

async fn analyze<S: TranscriptSource>(
    config: AnalysisConfig,
    source: S,
) -> anyhow::Result<AnalysisReport> {
    let scorer = ConfidenceScorer::new(config.scoring);
    let extractor = MetricsExtractor::new(config, LexiconSentimentAnalyzer::new())
        .context("analysis configuration failed to compile")?;

    let pipeline = AnalysisPipeline {
        source,
        extractor,
        scorer,
        store: MemoryReportStore::new(),
    };

    let report = pipeline.run().await.context("analysis failed")?;
    Ok(report)
}

fn render_pretty(report: &AnalysisReport) -> String {
    let m = &report.metrics;
    let mut out = String::new();

    out.push_str(&format!(
        "Confidence: {}/100 ({:?})\n\n",
        report.confidence, report.skill_level
    ));
    out.push_str(&format!(
        "Words: {}   Pace: {} WPM   Fillers: {} ({:.1}%)\n",
        m.word_count, m.wpm as i64, m.filler_total, m.filler_percentage
    ));
    out.push_str(&format!(
        "Grammar: {:.0}/100   Vocabulary diversity: {:.2}   Tone: {:?}\n\n",
        m.grammar_score, m.vocabulary_diversity, m.sentiment_label
    ));

    for line in [
        &m.pace_assessment,
        &m.filler_assessment,
        &m.grammar_assessment,
        &m.vocabulary_assessment,
        &m.tone_assessment,
    ] {
        out.push_str(&format!("  - {line}\n"));
    }
    out.push_str(&format!("\n{}\n", m.general_impression));

    if !m.grammar_findings.is_empty() {
        out.push_str("\nFlagged phrases:\n");
        for finding in &m.grammar_findings {
            out.push_str(&format!(
                "  \"{}\" ({}, at byte {})\n",
                finding.matched, finding.rule, finding.position
            ));
        }
    }
    if !m.strengths.is_empty() {
        out.push_str("\nStrengths:\n");
        for s in &m.strengths {
            out.push_str(&format!("  + {s}\n"));
        }
    }
    if !m.improvements.is_empty() {
        out.push_str("\nWork on:\n");
        for s in &m.improvements {
            out.push_str(&format!("  - {s}\n"));
        }
    }
    if !m.actionable_tips.is_empty() {
        out.push_str("\nTips:\n");
        for s in &m.actionable_tips {
            out.push_str(&format!("  * {s}\n"));
        }
    }

    out
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
