use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use kundali_rs::{
    BhuktiOrder, DashaVariation, HoroscopeRequest, Kundali, KundaliError, Language,
    PanchangRequest, Settings, TracingConfig,
};
use kundali_vedic_base::{
    deg_to_dms, format_dms, nakshatra_from_longitude, navamsa_index, navamsa_rashi,
    rashi_from_longitude,
};
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic horoscope and panchangam CLI")]
struct Cli {
    /// Settings file (JSON); environment variables override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log JSON lines to stderr
    #[arg(long, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Birth chart, placements, and Vimshottari timeline
    Horoscope {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Local clock time (H:M[:S])
        #[arg(long)]
        time: String,
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// IANA timezone
        #[arg(long)]
        tz: String,
        /// Place name shown in the summary
        #[arg(long)]
        place: Option<String>,
        /// en, ta or hi
        #[arg(long, default_value = "en")]
        lang: String,
        /// Start each mahadasha's bhuktis at its own lord
        #[arg(long)]
        classical_bhukti: bool,
    },
    /// Daily panchangam windows
    Panchang {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
        /// Timezone identifier or informal name (IST, PST, ...)
        #[arg(long)]
        tz: String,
        /// en, ta or hi (weekday name only)
        #[arg(long)]
        locale: Option<String>,
        /// Label carried into the result metadata
        #[arg(long)]
        location_name: Option<String>,
    },
    /// Resolve a place name or a coordinate pair
    Locate {
        /// Place name to geocode
        #[arg(long, conflicts_with_all = ["lat", "lon"], required_unless_present = "lat")]
        place: Option<String>,
        /// Latitude in degrees
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        /// Longitude in degrees
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Navamsa (D9) sign from sidereal longitude
    Navamsa {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Vimshottari timeline from the Moon's sidereal longitude
    Dasha {
        /// Sidereal Moon longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        moon: f64,
        /// Birth instant (RFC 3339, e.g. 2024-01-15T01:00:00Z)
        #[arg(long)]
        birth: String,
        /// en, ta or hi
        #[arg(long, default_value = "en")]
        lang: String,
        /// Start each mahadasha's bhuktis at its own lord
        #[arg(long)]
        classical_bhukti: bool,
    },
}

fn die(err: impl Display) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}

fn invalid(err: impl Display) -> ! {
    eprintln!("{err}");
    std::process::exit(2);
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => die(e),
    }
}

fn load_settings(cli: &Cli) -> Settings {
    let loaded = match &cli.config {
        Some(path) => Settings::from_json_file(path),
        None => Settings::from_env(),
    };
    let mut settings = loaded.unwrap_or_else(|e| die(e));
    if cli.log_json {
        settings.log_json = true;
    }
    settings
}

fn variation(classical_bhukti: bool) -> DashaVariation {
    DashaVariation {
        bhukti_order: if classical_bhukti {
            BhuktiOrder::MahaLord
        } else {
            BhuktiOrder::CycleStart
        },
    }
}

fn context(settings: &Settings) -> Kundali {
    Kundali::from_settings(settings).unwrap_or_else(|e| die(e))
}

fn exit_for(err: KundaliError) -> ! {
    if err.is_client_error() {
        invalid(err)
    }
    die(err)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let settings = load_settings(&cli);
    if let Err(e) = TracingConfig::from_settings(&settings).init() {
        eprintln!("logging disabled: {e}");
    }
    debug!(?settings, "settings loaded");

    match cli.command {
        Commands::Horoscope {
            date,
            time,
            lat,
            lon,
            tz,
            place,
            lang,
            classical_bhukti,
        } => {
            let kundali = context(&settings).with_variation(variation(classical_bhukti));
            let request = HoroscopeRequest {
                date,
                time,
                lat,
                lon,
                tz,
                place_name: place,
                language: lang,
            };
            match kundali.horoscope(request).await {
                Ok(result) => print_json(&result),
                Err(e) => exit_for(e),
            }
        }

        Commands::Panchang {
            date,
            lat,
            lon,
            tz,
            locale,
            location_name,
        } => {
            let request = PanchangRequest {
                date,
                lat,
                lon,
                tz,
                locale,
                location_name,
            };
            match context(&settings).panchangam(request).await {
                Ok(result) => print_json(&result),
                Err(e) => exit_for(e),
            }
        }

        Commands::Locate { place, lat, lon } => {
            let kundali = context(&settings);
            let found = match (place, lat, lon) {
                (Some(place), _, _) => kundali.locate_place(&place).await,
                (None, Some(lat), Some(lon)) => kundali.locate_coords(lat, lon).await,
                _ => invalid("Give --place or both --lat and --lon."),
            };
            match found {
                Ok(Some(place)) => print_json(&place),
                Ok(None) => die("Location not found."),
                Err(e) => exit_for(e),
            }
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            println!(
                "{} ({}) - {} ({:.4} deg in rashi), lord {}",
                info.rashi.name(),
                info.rashi.western_name(),
                info.dms(),
                info.degrees_in_rashi,
                info.rashi.lord().english_name()
            );
        }

        Commands::Nakshatra { lon } => {
            let info = nakshatra_from_longitude(lon);
            println!(
                "{} (index {}) - Pada {} ({:.4} deg in nakshatra), lord {}",
                info.nakshatra.name(),
                info.nakshatra.index(),
                info.pada,
                info.degrees_in_nakshatra,
                info.nakshatra.lord().english_name()
            );
        }

        Commands::Navamsa { lon } => {
            let rashi = navamsa_rashi(lon);
            println!(
                "{} (navamsa index {}) from {}",
                rashi.name(),
                navamsa_index(lon),
                format_dms(lon.rem_euclid(360.0))
            );
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(deg);
            println!("{} deg {} min {} sec", d.degrees, d.minutes, d.seconds);
        }

        Commands::Dasha {
            moon,
            birth,
            lang,
            classical_bhukti,
        } => {
            let birth: DateTime<Utc> = DateTime::parse_from_rfc3339(birth.trim())
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_else(|e| invalid(format!("Invalid birth instant {birth:?}: {e}")));
            let lang: Language = lang.parse().unwrap_or_else(|e| invalid(e));
            let entries = Kundali::builder()
                .variation(variation(classical_bhukti))
                .build()
                .dasha(moon, birth, lang);
            print_json(&entries);
        }
    }
}
