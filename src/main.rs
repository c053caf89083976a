use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use match_journal::calculate::{
    biggest_strength, biggest_weakness, evaluate_achievements, execution_series,
    generate_insights, generate_match_summary, mental_series, performance_grades,
    recommend_focus, win_rate_series, PlayerReport,
};
use match_journal::config::{AppConfig, OutputConfig, OutputFormat};
use match_journal::models::{ChartPoint, Grade, Match};
use match_journal::storage::{load_matches, refresh_results, save_matches, JsonlReader};

#[derive(Parser)]
#[command(name = "match-journal")]
#[command(about = "Tennis match journal analytics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full player report
    Report,

    /// Narrative summary of one match
    Summary {
        /// Match ID
        id: String,
    },

    /// Strength and weakness insights
    Insights,

    /// Focus recommendation for the next match
    Recommend,

    /// Dashboard letter grades
    Grades,

    /// Achievement progress
    Achievements {
        /// Only show unlocked achievements
        #[arg(long)]
        unlocked: bool,
    },

    /// Chart series
    Series {
        #[arg(value_enum, default_value = "win-rate")]
        kind: SeriesKind,
    },

    /// Check stored results against scores
    Verify {
        /// Rewrite the file with recomputed results
        #[arg(long)]
        fix: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SeriesKind {
    WinRate,
    Mental,
    Execution,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    // Initialize tracing
    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting match-journal v{}", env!("CARGO_PKG_VERSION"));

    let path = config.matches_path();
    let loaded = load_matches(&path)
        .with_context(|| format!("Failed to read matches from {:?}", path))?;
    let matches = loaded.matches;
    let out = &config.output;

    match cli.command {
        Commands::Report => {
            let report = PlayerReport::build(&matches);
            emit(out, &report, || print_report(&report))?;
        }

        Commands::Summary { id } => {
            let Some(m) = matches.iter().find(|m| m.id.as_str() == id) else {
                anyhow::bail!("No match with id {}", id);
            };
            let paragraphs = generate_match_summary(m);
            emit(out, &paragraphs, || {
                println!("\n=== {} ({}) ===", m.opponent_names(), m.created_at.date_naive());
                for p in &paragraphs {
                    println!("\n{}", p);
                }
            })?;
        }

        Commands::Insights => {
            let insights = generate_insights(&matches);
            emit(out, &insights, || {
                println!("\n=== Insights ===");
                if insights.is_empty() {
                    println!("Log at least 3 matches to unlock insights.");
                }
                for insight in &insights {
                    println!("[{}] {}", insight.kind, insight.text);
                }
                if let Some(s) = biggest_strength(&matches) {
                    println!("\nBiggest strength: {}", s.text);
                }
                if let Some(w) = biggest_weakness(&matches) {
                    println!("Biggest weakness: {}", w.text);
                }
            })?;
        }

        Commands::Recommend => {
            let rec = recommend_focus(&matches);
            emit(out, &rec, || {
                println!("\n=== {} ===", rec.title);
                println!("{}", rec.message);
            })?;
        }

        Commands::Grades => {
            let grades = performance_grades(&matches);
            emit(out, &grades, || {
                println!("\n=== Grades ===");
                println!("Consistency: {}", show_grade(grades.consistency));
                println!("Clutch:      {}", show_grade(grades.clutch));
                println!("Momentum:    {}", show_grade(grades.momentum));
                println!("Mental:      {}", show_grade(grades.mental));
                println!("Execution:   {}", show_grade(grades.execution));
            })?;
        }

        Commands::Achievements { unlocked } => {
            let achievements: Vec<_> = evaluate_achievements(&matches)
                .into_iter()
                .filter(|a| !unlocked || a.unlocked)
                .collect();
            emit(out, &achievements, || {
                println!("\n=== Achievements ===");
                for a in &achievements {
                    let mark = if a.unlocked { "x" } else { " " };
                    println!(
                        "[{}] {:<18} {:>3}%  {}  ({})",
                        mark, a.title, a.progress, a.progress_label, a.category
                    );
                }
            })?;
        }

        Commands::Series { kind } => {
            let points = match kind {
                SeriesKind::WinRate => win_rate_series(&matches),
                SeriesKind::Mental => mental_series(&matches),
                SeriesKind::Execution => execution_series(&matches),
            };
            emit(out, &points, || print_series(&points))?;
        }

        Commands::Verify { fix } => verify(
            &path,
            matches.len(),
            loaded.stale_results.len(),
            loaded.rejected.len(),
            fix,
        )?,
    }

    Ok(())
}

fn verify(path: &Path, valid: usize, stale: usize, rejected: usize, fix: bool) -> Result<()> {
    println!("\n=== Verify ===");
    println!("Valid matches:  {}", valid);
    println!("Rejected:       {}", rejected);
    println!("Stale results:  {}", stale);

    if fix && stale > 0 {
        // Rewrite every stored record, not only the valid ones, so nothing is dropped.
        let mut all: Vec<Match> = JsonlReader::new(path.to_path_buf())
            .read_all_strict()
            .with_context(|| format!("Refusing to rewrite {:?}", path))?;
        let changed = refresh_results(&mut all);
        save_matches(path, &all).with_context(|| format!("Failed to rewrite {:?}", path))?;
        println!("Recomputed:     {}", changed);
    } else if stale > 0 {
        println!("\nRun with --fix to rewrite the cached results.");
    }
    Ok(())
}

/// Print as JSON or run the text printer, depending on the output config.
fn emit<T: Serialize>(out: &OutputConfig, value: &T, text: impl FnOnce()) -> Result<()> {
    match out.format {
        OutputFormat::Json => {
            let json = if out.pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };
            println!("{}", json);
        }
        OutputFormat::Text => text(),
    }
    Ok(())
}

fn show_grade(grade: Option<Grade>) -> String {
    grade.map_or_else(|| "-".to_string(), |g| g.to_string())
}

fn print_series(points: &[ChartPoint]) {
    for p in points {
        println!("{:>7}  {:>5.1}", p.label, p.value);
    }
}

fn print_report(report: &PlayerReport) {
    println!("\n=== Match Journal ===");
    println!("Matches:        {}", report.matches);
    println!("Record:         {}", report.record);
    println!("Win rate:       {}%", report.win_rate);
    println!("Streak:         {}", report.current_streak);
    if let Some(avg) = report.mental_average {
        println!("Mental avg:     {:.1}", avg);
    }
    if let Some(avg) = report.execution_average {
        println!("Execution avg:  {:.1}", avg);
    }
    if let Some(pct) = report.plan_adherence {
        println!("Stuck to plan:  {}%", pct);
    }

    if !report.surfaces.is_empty() {
        println!("\n--- Surfaces ---");
        for s in &report.surfaces {
            println!("{:<6} {:>3}%  ({}/{})", s.surface.to_string(), s.win_rate, s.wins, s.total);
        }
    }

    if !report.styles.is_empty() {
        println!("\n--- Opponent styles ---");
        for s in &report.styles {
            println!("{:<15} {:>3}%  ({}/{})", s.style.to_string(), s.win_rate, s.wins, s.total);
        }
    }

    if !report.head_to_head.is_empty() {
        println!("\n--- Head to head ---");
        for h in report.head_to_head.iter().take(10) {
            println!("{:<20} {}  (last {})", h.opponent, h.record, h.last_played);
        }
    }

    println!("\n--- Grades ---");
    println!(
        "Consistency {}  Clutch {}  Momentum {}  Mental {}  Execution {}",
        show_grade(report.grades.consistency),
        show_grade(report.grades.clutch),
        show_grade(report.grades.momentum),
        show_grade(report.grades.mental),
        show_grade(report.grades.execution)
    );

    if !report.insights.is_empty() {
        println!("\n--- Insights ---");
        for i in &report.insights {
            println!("[{}] {}", i.kind, i.text);
        }
    }

    println!("\n--- Focus: {} ---", report.recommendation.title);
    println!("{}", report.recommendation.message);

    println!("\n--- Achievements ---");
    println!(
        "{} of {} unlocked",
        report.unlocked_achievements().count(),
        report.achievements.len()
    );
}
