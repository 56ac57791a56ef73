mod config;
mod error;
mod telemetry;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use config::AppConfig;
use error::AppError;
use interview_ai::interview::{
    aggregate, AggregateReport, AggregationPolicy, AnswerEvaluationInput, InterviewTurn,
    ScoreResolver, ScoreResult, ScoringPolicy,
};

#[derive(Parser, Debug)]
#[command(
    name = "interview-ai",
    about = "Score interview answers and assemble candidate reports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a single answer evaluation payload into a score
    Score(ScoreArgs),
    /// Aggregate an interview history into a performance report
    Report(ReportArgs),
    /// List the built-in scoring policies and their constants
    Policies,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// JSON file holding an answer evaluation payload, or `-` for stdin
    #[arg(long, default_value = "-")]
    input: PathBuf,
    /// Scoring policy identifier (defaults to APP_SCORING_POLICY)
    #[arg(long)]
    policy: Option<String>,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// JSON file holding an array of interview turns, or `-` for stdin
    #[arg(long, default_value = "-")]
    input: PathBuf,
    /// Scoring policy whose range picks the tier thresholds
    #[arg(long)]
    policy: Option<String>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let app_config = AppConfig::load()?;
    telemetry::init(&app_config.telemetry)?;

    match cli.command {
        Command::Score(args) => run_score(args, &app_config),
        Command::Report(args) => run_report(args, &app_config),
        Command::Policies => run_policies(),
    }
}

fn read_payload(path: &Path) -> Result<String, AppError> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn select_policy(
    flag: Option<String>,
    app_config: &AppConfig,
) -> Result<ScoringPolicy, AppError> {
    let name = flag.unwrap_or_else(|| app_config.default_policy.clone());
    Ok(ScoringPolicy::by_name(&name)?)
}

fn run_score(args: ScoreArgs, app_config: &AppConfig) -> Result<(), AppError> {
    let policy = select_policy(args.policy, app_config)?;
    let payload = read_payload(&args.input)?;

    let result = score_payload(&payload, policy)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn score_payload(payload: &str, policy: ScoringPolicy) -> Result<ScoreResult, AppError> {
    let input: AnswerEvaluationInput = serde_json::from_str(payload)?;
    let resolver = ScoreResolver::new(policy);
    let result = resolver.resolve(&input);

    info!(
        policy = %resolver.policy().name,
        role = input.question_role.label(),
        score = result.score,
        "answer scored"
    );

    Ok(result)
}

fn run_report(args: ReportArgs, app_config: &AppConfig) -> Result<(), AppError> {
    let policy = select_policy(args.policy, app_config)?;
    let payload = read_payload(&args.input)?;

    let (report, history_len) = report_payload(&payload, &policy)?;
    render_report(&report, history_len, &policy);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report_payload(
    payload: &str,
    policy: &ScoringPolicy,
) -> Result<(AggregateReport, usize), AppError> {
    let history: Vec<InterviewTurn> = serde_json::from_str(payload)?;
    let aggregation = AggregationPolicy::for_scoring(policy);
    let report = aggregate(&history, &aggregation);

    info!(
        turns = history.len(),
        scored = report.scored_turns(),
        tier = report.tier.label(),
        "interview aggregated"
    );

    Ok((report, history.len()))
}

fn run_policies() -> Result<(), AppError> {
    println!("Built-in scoring policies");
    for policy in ScoringPolicy::builtin() {
        println!(
            "- {} | range {}..={} | behavioral {}/{}/{}/{}/{}/{} | background weak {} floor {}",
            policy.name,
            policy.score_floor,
            policy.score_ceiling,
            policy.behavioral.complete_with_metrics,
            policy.behavioral.partial_with_metrics,
            policy.behavioral.complete_structure,
            policy.behavioral.partial_structure,
            policy.behavioral.fragmentary,
            policy.behavioral.fallback,
            policy.background.weak_score,
            policy.background.metrics_floor,
        );
    }
    Ok(())
}

fn render_report(report: &AggregateReport, history_len: usize, policy: &ScoringPolicy) {
    println!("Interview performance report");
    println!(
        "Generated {} under policy {}",
        Local::now().format("%Y-%m-%d %H:%M"),
        policy.name
    );
    println!(
        "Turns: {} recorded, {} scored",
        history_len,
        report.scored_turns()
    );

    if report.per_question_scores.is_empty() {
        println!("No scored answers; nothing to report yet.");
        return;
    }

    println!("\nPer-question scores");
    for (index, score) in report.per_question_scores.iter().enumerate() {
        println!("- Question {}: {}", index + 1, score);
    }

    println!(
        "\nAverage {:.2} -> {}",
        report.average_score,
        report.tier.label()
    );
}
