use clap::{Parser, Subcommand};

use astra_chart::{
    AnalyticEphemeris, BirthMoment, GeoLocation, MoonPhase, ZodiacPosition, compute_natal_chart,
    illuminated_fraction, moon_phase_angle, zodiac_position,
};
use astra_ephemeris::{Body, Ephemeris};
use astra_time::UtcMoment;

#[derive(Parser)]
#[command(name = "astra", about = "Natal chart and moon phase CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart (Sun, Moon, Ascendant) for a birth moment
    Chart {
        /// Birth date, UTC (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time, UTC (hh:mm or hh:mm:ss)
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long)]
        lon: f64,
    },
    /// Moon phase angle and bucket at a UTC moment
    MoonPhase {
        /// Date, UTC (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time, UTC (hh:mm or hh:mm:ss)
        #[arg(long)]
        time: String,
    },
    /// Zodiac sign decomposition of an ecliptic longitude
    Zodiac {
        /// Ecliptic longitude in degrees (any float, normalized to [0, 360))
        lon: f64,
    },
    /// Julian Date diagnostics for a UTC moment
    Jd {
        /// Date, UTC (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time, UTC (hh:mm or hh:mm:ss)
        #[arg(long)]
        time: String,
    },
}

fn parse_moment(date: &str, time: &str) -> Result<UtcMoment, String> {
    let date_parts: Vec<&str> = date.split('-').collect();
    if date_parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {date}"));
    }
    let time_parts: Vec<&str> = time.split(':').collect();
    if time_parts.len() != 2 && time_parts.len() != 3 {
        return Err(format!("expected hh:mm or hh:mm:ss, got {time}"));
    }

    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = if time_parts.len() == 3 {
        time_parts[2].parse().map_err(|e| format!("{e}"))?
    } else {
        0.0
    };
    Ok(UtcMoment::new(year, month, day, hour, minute, second))
}

fn moment_or_exit(date: &str, time: &str) -> UtcMoment {
    parse_moment(date, time).unwrap_or_else(|e| {
        eprintln!("Invalid date/time: {e}");
        std::process::exit(1);
    })
}

fn print_position(label: &str, pos: &ZodiacPosition, longitude_deg: f64) {
    println!(
        "{label:<10} {} - {} deg {} min {:.1} sec ({longitude_deg:.4} deg ecliptic)",
        pos.sign.name(),
        pos.dms.degrees,
        pos.dms.minutes,
        pos.dms.seconds,
    );
}

fn main() {
    let cli = Cli::parse();
    let eph = AnalyticEphemeris::new();

    match cli.command {
        Commands::Chart {
            date,
            time,
            lat,
            lon,
        } => {
            let utc = moment_or_exit(&date, &time);
            let birth = BirthMoment::new(utc, GeoLocation::new(lat, lon));
            let chart = compute_natal_chart(&eph, &birth).unwrap_or_else(|e| {
                eprintln!("Chart computation failed: {e}");
                std::process::exit(1);
            });
            println!("Birth: {utc} at ({lat}, {lon})");
            print_position("Sun", &chart.sun, chart.sun_longitude_deg);
            print_position("Moon", &chart.moon, chart.moon_longitude_deg);
            print_position("Ascendant", &chart.ascendant, chart.ascendant_longitude_deg);
        }
        Commands::MoonPhase { date, time } => {
            let utc = moment_or_exit(&date, &time);
            let angle = moon_phase_angle(&eph, &utc).unwrap_or_else(|e| {
                eprintln!("Moon phase computation failed: {e}");
                std::process::exit(1);
            });
            let phase = MoonPhase::from_angle(angle);
            println!(
                "{} {} - {angle:.2} deg, {:.0}% illuminated",
                phase.emoji(),
                phase.name(),
                illuminated_fraction(angle) * 100.0
            );
        }
        Commands::Zodiac { lon } => {
            let pos = zodiac_position(lon);
            println!(
                "{} - {} deg {} min {:.1} sec ({:.4} deg in sign)",
                pos.sign.name(),
                pos.dms.degrees,
                pos.dms.minutes,
                pos.dms.seconds,
                pos.degrees_in_sign
            );
        }
        Commands::Jd { date, time } => {
            let utc = moment_or_exit(&date, &time);
            let jd_utc = utc.to_jd();
            let jd_tt = utc.to_jd_tt();
            println!("UTC:    {utc}");
            println!("JD UTC: {jd_utc:.6}");
            println!("JD TT:  {jd_tt:.6}");
            // Quick sanity readout: both chart bodies at this instant.
            for body in [Body::Sun, Body::Moon] {
                match eph.ecliptic_longitude_deg(body, jd_tt) {
                    Ok(l) => println!("{:<5} ecliptic longitude: {l:.4} deg", body.name()),
                    Err(e) => println!("{:<5} ephemeris error: {e}", body.name()),
                }
            }
        }
    }
}
