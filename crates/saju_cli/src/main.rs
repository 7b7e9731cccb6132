use std::fmt::Display;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use saju_base::{
    ChartConfig, DateKind, Gender, Ganji, Pillar, SajuChart, Stem, hour_ganji, time_slot,
};
use saju_reading::{
    Reading, ReadingError, ReadingRequest, TableCalendar, compute_reading, load_chart_config,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-Pillars chart and fortune CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars, element tally and remedial element
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Decade fortune timeline
    Decade {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Annual fortune timeline
    Years {
        #[command(flatten)]
        birth: BirthArgs,
        /// First year (default: birth year)
        #[arg(long)]
        from: Option<i32>,
        /// Last year (default: 99 years after --from)
        #[arg(long)]
        to: Option<i32>,
    },
    /// Chart with both timelines
    Reading {
        #[command(flatten)]
        birth: BirthArgs,
        #[arg(long)]
        from: Option<i32>,
        #[arg(long)]
        to: Option<i32>,
    },
    /// Time slot for a clock time, with the hour pillar for a day stem
    Slot {
        /// Clock time (HH:MM)
        time: String,
        /// Day stem (갑..계)
        #[arg(long)]
        day_stem: Option<String>,
    },
    /// Sexagenary ganji of a calendar year
    Ganji {
        year: i32,
    },
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM); omit when unknown
    #[arg(long)]
    time: Option<String>,
    /// Interpret --date as a lunar date
    #[arg(long)]
    lunar: bool,
    /// Lunar date is in a leap month
    #[arg(long, requires = "lunar")]
    leap: bool,
    /// male or female
    #[arg(long, value_parser = parse_gender)]
    gender: Gender,
    /// Calendar table (TOML)
    #[arg(long)]
    calendar: PathBuf,
    /// Chart configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::from_name(s).ok_or_else(|| format!("unknown gender: {s} (male|female)"))
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("invalid date (expected YYYY-MM-DD): {s}"));
    }
    let bad = |_| format!("invalid date (expected YYYY-MM-DD): {s}");
    Ok((
        parts[0].parse().map_err(bad)?,
        parts[1].parse().map_err(bad)?,
        parts[2].parse().map_err(bad)?,
    ))
}

fn parse_time(s: &str) -> Result<(u32, u32), String> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| format!("invalid time (expected HH:MM): {s}"))?;
    let bad = |_| format!("invalid time (expected HH:MM): {s}");
    Ok((h.parse().map_err(bad)?, m.parse().map_err(bad)?))
}

fn exit_with(msg: impl Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn build_request(birth: &BirthArgs) -> ReadingRequest {
    let (year, month, day) = parse_date(&birth.date).unwrap_or_else(|e| exit_with(e));
    let (hour, minute, time_unknown) = match &birth.time {
        Some(t) => {
            let (h, m) = parse_time(t).unwrap_or_else(|e| exit_with(e));
            (h, m, false)
        }
        None => (0, 0, true),
    };
    let mut request = ReadingRequest::solar(year, month, day, hour, minute, birth.gender);
    request.time_unknown = time_unknown;
    if birth.lunar {
        request.date_kind = DateKind::Lunar;
        request.leap_month = birth.leap;
    }
    request
}

fn load_config(path: Option<&Path>) -> Result<ChartConfig, ReadingError> {
    match path {
        Some(p) => Ok(load_chart_config(p)?),
        None => Ok(ChartConfig::default()),
    }
}

fn run_reading(
    birth: &BirthArgs,
    from: Option<i32>,
    to: Option<i32>,
) -> Result<Reading, ReadingError> {
    let mut request = build_request(birth);
    request.from_year = from;
    request.to_year = to;
    let config = load_config(birth.config.as_deref())?;
    let calendar = TableCalendar::load(&birth.calendar)?;
    tracing::info!(calendar = %birth.calendar.display(), days = calendar.len(), "calendar loaded");
    Ok(compute_reading(&calendar, &request, &config)?)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => exit_with(e),
    }
}

fn or_dash<T: Display>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_pillar(label: &str, p: &Pillar) {
    let code = if p.is_known() { p.code() } else { "--".to_string() };
    println!(
        "{label}  {code}  {}/{}  {}/{}",
        or_dash(p.stem_element),
        or_dash(p.branch_element),
        or_dash(p.stem_relation),
        or_dash(p.branch_relation),
    );
}

fn print_chart(chart: &SajuChart) {
    for (pos, p) in chart.pillars() {
        print_pillar(pos.name(), p);
    }
    let e = &chart.elements;
    println!(
        "오행  목 {}  화 {}  토 {}  금 {}  수 {}",
        e.wood, e.fire, e.earth, e.metal, e.water
    );
    println!("용신  {}", chart.remedial);
    let b = &chart.birth;
    println!("양력  {} ({})", b.solar, chart.meta.weekday);
    println!(
        "음력  {}-{:02}-{:02}{}",
        b.lunar_year,
        b.lunar_month,
        b.lunar_day,
        if b.leap_month { " (윤)" } else { "" }
    );
    println!(
        "띠    {} / 음력 {}",
        chart.meta.animal,
        chart.meta.lunar_animal
    );
    if let Some(term) = chart.meta.solar_term {
        println!("절기  {term}");
    }
}

fn print_decade(reading: &Reading) {
    let d = &reading.decade;
    println!(
        "{:?}, onset {} days → age {}",
        d.direction, d.onset_days, d.onset_age
    );
    for p in &d.periods {
        println!(
            "{:>2}  {}  {:>3}-{:<3}  {}",
            p.order, p.ganji, p.start_age, p.end_age, p.element
        );
    }
}

fn print_years(reading: &Reading) {
    for y in &reading.years {
        println!("{}  {}  {}  {}", y.year, y.ganji, y.element, y.status());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Chart { birth } => {
            let reading = run_reading(&birth, None, None).unwrap_or_else(|e| exit_with(e));
            if cli.json {
                print_json(&reading.chart);
            } else {
                print_chart(&reading.chart);
            }
        }

        Commands::Decade { birth } => {
            let reading = run_reading(&birth, None, None).unwrap_or_else(|e| exit_with(e));
            if cli.json {
                print_json(&reading.decade);
            } else {
                print_decade(&reading);
            }
        }

        Commands::Years { birth, from, to } => {
            let reading = run_reading(&birth, from, to).unwrap_or_else(|e| exit_with(e));
            if cli.json {
                print_json(&reading.years);
            } else {
                print_years(&reading);
            }
        }

        Commands::Reading { birth, from, to } => {
            let reading = run_reading(&birth, from, to).unwrap_or_else(|e| exit_with(e));
            if cli.json {
                print_json(&reading);
            } else {
                print_chart(&reading.chart);
                println!();
                print_decade(&reading);
                println!();
                print_years(&reading);
            }
        }

        Commands::Slot { time, day_stem } => {
            let (h, m) = parse_time(&time).unwrap_or_else(|e| exit_with(e));
            let slot = time_slot(h, m).unwrap_or_else(|e| exit_with(e));
            let stem = day_stem.map(|s| {
                s.chars()
                    .next()
                    .and_then(Stem::from_char)
                    .unwrap_or_else(|| exit_with(format!("unknown day stem: {s}")))
            });
            let hour = stem.map(|d| hour_ganji(d, slot));
            if cli.json {
                #[derive(Serialize)]
                struct SlotOut {
                    slot: u8,
                    branch: saju_base::Branch,
                    hour_ganji: Option<Ganji>,
                }
                print_json(&SlotOut {
                    slot: slot.index(),
                    branch: slot.branch(),
                    hour_ganji: hour,
                });
            } else {
                print!("slot {} ({}시)", slot.index(), slot.branch());
                match hour {
                    Some(g) => println!("  {g}"),
                    None => println!(),
                }
            }
        }

        Commands::Ganji { year } => {
            let g = Ganji::from_year(year);
            if cli.json {
                print_json(&g);
            } else {
                println!("{} {} ({}, index {})", g, g.hanja(), g.branch().animal(), g.index());
            }
        }
    }
}
