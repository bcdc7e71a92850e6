use anyhow::Result;
use defect_maker::{config::DefectConfig, defects};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure dirs ───────────────────────────────────────────
    let config = DefectConfig::from_current_dir()?;
    info!(
        data = %config.data_dir.display(),
        out = %config.defective_dir.display(),
        seed = config.seed,
        "configured"
    );

    // ─── 3) break both datasets ──────────────────────────────────────
    let report = defects::run_all(&config)?;
    info!(challenges = ?report.challenges, challengers = ?report.challengers, "all done");
    Ok(())
}
