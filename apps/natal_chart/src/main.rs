use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use urania::ephemeris::{self, EphemerisConfig, SiderealMode};
use urania::{
    dedup_highlighted, validate_chart, BirthQuery, ChartEngine, SwissEphemerisAdapter, TimeResolver,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a natal chart and print it as JSON")]
struct Args {
    name: String,

    #[arg(help = "Birth date, e.g. 1990-04-12 or \"12 April 1990 09:15\"")]
    date: String,

    #[arg(default_value = "", help = "Local birth time, e.g. 09:15")]
    time: String,

    #[arg(long, default_value = "")]
    place: String,

    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,

    #[arg(long, help = "IANA timezone id; looked up from the location when absent")]
    tz: Option<String>,

    #[arg(long, help = "Exact UTC instant (RFC 3339), overrides every timezone rule")]
    utc: Option<DateTime<Utc>>,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, help = "Override the configured house system")]
    house_system: Option<String>,

    #[arg(long, help = "Print the strong-point sentences instead of the chart")]
    sentences: bool,
}

fn build_query(args: &Args) -> anyhow::Result<BirthQuery> {
    let mut query = BirthQuery::new(&args.name, &args.date, &args.time, &args.place)?;
    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        query = query.with_coordinates(lat, lon)?;
    }
    if let Some(tz) = &args.tz {
        query = query.with_timezone(tz)?;
    }
    if let Some(utc) = args.utc {
        query = query.with_utc(utc);
    }
    Ok(query)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = urania_config::load_settings(args.config.as_deref())?;
    let house_system_name = args
        .house_system
        .as_deref()
        .unwrap_or(&settings.ephemeris.house_system);
    let house_system = ephemeris::parse_house_system(house_system_name)?;

    ephemeris::install(EphemerisConfig {
        path: settings.ephemeris.path.clone(),
        house_system,
        sidereal_mode: SiderealMode::Lahiri,
    })
    .context("Failed to configure the Swiss Ephemeris")?;

    let engine = ChartEngine::new(
        SwissEphemerisAdapter::new()?,
        TimeResolver::from_settings(&settings)?,
        house_system,
    )
    .with_thresholds(settings.patterns);

    let query = build_query(&args)?;
    let chart = engine
        .compute_chart(&query)
        .with_context(|| format!("Failed to compute chart for '{}'", query.name))?;

    for problem in validate_chart(&chart) {
        log::warn!("{}", problem);
    }

    if args.sentences {
        for sentence in dedup_highlighted(&chart.strong_points) {
            println!("- {}", sentence);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    }
    Ok(())
}
