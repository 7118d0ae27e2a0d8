use anyhow::Result;
use citycountries::{extract_unique_countries, DEFAULT_INPUT, DEFAULT_OUTPUT};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    // ─── 2) extract ──────────────────────────────────────────────────
    // failures are reported by the extractor itself; the process still exits cleanly
    extract_unique_countries(DEFAULT_INPUT, DEFAULT_OUTPUT);

    info!("all done");
    Ok(())
}
