use anyhow::Result;
use clap::Parser;
use scoresight::application::ml::{ModelArtifacts, PredictionEngine};
use scoresight::config::ArtifactEnvConfig;
use scoresight::domain::match_stats::{MatchPayload, MatchStat};
use scoresight::infrastructure::artifact_store::ArtifactLocator;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Report which trained artifacts load and how", long_about = None)]
struct Args {
    /// Artifact directory; skips discovery under the project root
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,

    /// Root searched for artifacts/ then backend/artifacts/
    #[arg(long)]
    project_root: Option<PathBuf>,

    /// Run one prediction on a built-in sample fixture
    #[arg(long)]
    sample: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();

    // Flags win over the environment
    let env_config = ArtifactEnvConfig::from_lookup(|key| std::env::var(key).ok());
    let locator = ArtifactLocator::new(args.project_root.unwrap_or(env_config.project_root))
        .with_override(args.artifacts_dir.or(env_config.artifacts_dir));

    let artifacts = ModelArtifacts::discover(&locator);
    let report = artifacts.report();

    println!("Artifacts:    {}", report.base.display());
    println!("Metadata:     {}", report.metadata);
    println!("Features:     {}", artifacts.features().len());
    println!("Teams:        {}", artifacts.teams().len());
    println!("Class labels: {}", artifacts.class_labels().join(", "));
    println!("Classifier:   {}", report.classifier);
    println!("Regressor:    {}", report.regressor);
    println!("Scaler:       {}", report.scaler);

    if artifacts.uses_fallback() {
        println!("Mode:         heuristic fallback (no trained model loaded)");
    }

    if args.sample {
        let (home, away) = match artifacts.teams() {
            [home, away, ..] => (home.clone(), away.clone()),
            _ => ("Arsenal".to_string(), "Chelsea".to_string()),
        };
        let payload = MatchPayload::new(home, away)
            .with_stat(MatchStat::HalfTimeHomeGoals, 1)
            .with_stat(MatchStat::HomeShots, 9)
            .with_stat(MatchStat::AwayShots, 6);

        let engine = PredictionEngine::new(Arc::new(artifacts));
        let trace = engine.predict_traced(&payload);

        println!();
        println!(
            "Sample: {} vs {} (branch: {})",
            payload.home_team, payload.away_team, trace.branch
        );
        println!("{}", serde_json::to_string_pretty(&trace.result)?);
        for degradation in &trace.degradations {
            println!("  degraded: {}", degradation.as_str());
        }
    }

    Ok(())
}
