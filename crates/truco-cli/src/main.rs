use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use truco_bot::PolicyKind;
use truco_cli::advise::{Decision, advise};
use truco_cli::config::AdvisorConfig;
use truco_cli::logging::init_logging;
use truco_core::GameSnapshot;

/// Ask a Truco bot policy what it would do for a game snapshot.
#[derive(Debug, Parser)]
#[command(
    name = "truco-advisor",
    author,
    version,
    about = "Deterministic Truco decision advisor"
)]
struct Cli {
    /// Path to the JSON snapshot, or `-` to read it from stdin.
    #[arg(short, long, value_name = "FILE")]
    snapshot: PathBuf,

    /// Optional YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the policy (heuristic or cautious).
    #[arg(long, value_name = "POLICY")]
    policy: Option<PolicyKind>,

    /// Decision to compute.
    #[arg(long, value_enum, default_value_t = Decision::All)]
    decision: Decision,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,

    /// Pretty-print the JSON answer.
    #[arg(long)]
    pretty: bool,
}

fn read_snapshot(path: &Path) -> anyhow::Result<GameSnapshot> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading snapshot from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading snapshot {}", path.display()))?
    };
    GameSnapshot::from_json(&raw).with_context(|| format!("parsing snapshot {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => AdvisorConfig::from_path(path)?,
        None => AdvisorConfig {
            policy: PolicyKind::from_env(),
            ..AdvisorConfig::default()
        },
    };

    if let Some(policy) = cli.policy {
        config.policy = policy;
    }

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    if cli.log_json {
        config.logging.json = true;
    }

    config.validate()?;

    let _logging_guard = init_logging(&config.logging)?;
    let snapshot = read_snapshot(&cli.snapshot)?;
    let policy = config.policy.build(config.params);
    info!(
        policy = policy.name(),
        decision = ?cli.decision,
        trick = snapshot.trick_number(),
        "advising"
    );

    let advice = advise(policy.as_ref(), &config.params, &snapshot, cli.decision)
        .with_context(|| format!("{} policy rejected the snapshot", policy.name()))?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&advice)?
    } else {
        serde_json::to_string(&advice)?
    };
    println!("{json}");
    Ok(())
}
