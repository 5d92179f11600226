// src/main.rs
use anyhow::Result;
use clap::Parser;
use covidtrend::{get_records, render, Location};
use std::{io, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Print daily case counts and new-case histograms for one county from a
/// clone of https://github.com/CSSEGISandData/COVID-19.
#[derive(Parser, Debug)]
#[command(name = "covidtrend", about)]
struct Args {
    #[arg(long, default_value = "Whatcom")]
    county: String,

    #[arg(long, default_value = "Washington")]
    state: String,

    #[arg(long, default_value = "US")]
    country: String,

    /// Root of the cloned CSSE COVID-19 data repo
    #[arg(long, default_value = "COVID-19")]
    data_repo_dir: PathBuf,
}

fn main() -> Result<()> {
    // logs go to stderr so stdout is only the report
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let location = Location::new(args.county, args.state, args.country);
    info!(location = %location, dir = %args.data_repo_dir.display(), "startup");

    let records = get_records(&location, &args.data_repo_dir)?;

    let stdout = io::stdout();
    render::write_report(&mut stdout.lock(), &location, &records)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["covidtrend"]);
        assert_eq!(args.county, "Whatcom");
        assert_eq!(args.state, "Washington");
        assert_eq!(args.country, "US");
        assert_eq!(args.data_repo_dir, PathBuf::from("COVID-19"));
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "covidtrend",
            "--county",
            "King",
            "--state",
            "WA",
            "--data-repo-dir",
            "/data/COVID-19",
        ]);
        assert_eq!(args.county, "King");
        assert_eq!(args.state, "WA");
        assert_eq!(args.country, "US");
        assert_eq!(args.data_repo_dir, PathBuf::from("/data/COVID-19"));
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Args::try_parse_from(["covidtrend", "--verbose"]).is_err());
        assert!(Args::try_parse_from(["covidtrend", "--version"]).is_err());
        assert!(Args::try_parse_from(["covidtrend", "-V"]).is_err());
    }
}
