use clap::{Parser, Subcommand};
use jataka_dasha::{DashaLevel, DashaPeriod, vimshottari_hierarchy};
use jataka_time::{UtcDateTime, deg_to_dms, jd_to_centuries};
use jataka_vedic::{Ayanamsa, ayanamsa_deg, nakshatra_info, sign_of};

#[derive(Parser)]
#[command(name = "jataka", about = "Birth-chart and dasha calculation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zodiac sign from an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra, pada, and lords from an ecliptic longitude
    Nakshatra {
        /// Ecliptic longitude in degrees
        lon: f64,
    },
    /// Convert decimal degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
    /// Ayanamsa value for a sidereal reference system
    Ayanamsa {
        /// System name (e.g. "Lahiri", "Fagan/Bradley")
        #[arg(long, default_value = "Lahiri")]
        system: String,
        /// Julian Date (ephemeris time)
        #[arg(long)]
        jd: f64,
    },
    /// Vimsottari dasha timeline from birth data
    Dasha {
        /// Birth instant, UTC (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Moon's sidereal longitude at birth, degrees [0, 360)
        #[arg(long)]
        moon_longitude: f64,
        /// Depth to print: 1 = Mahadasha .. 5 = Prana
        #[arg(long, default_value = "2")]
        levels: u8,
    },
}

fn print_periods(periods: &[DashaPeriod], indent: usize) {
    for p in periods {
        println!(
            "{:indent$}{}  {} .. {}  ({})",
            "",
            p.label,
            p.start,
            p.end,
            p.duration,
            indent = indent
        );
        print_periods(&p.children, indent + 2);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Sign { lon } => {
            let info = sign_of(lon);
            println!(
                "{} {} ({:.4}\u{b0} in sign)",
                info.sign.name(),
                info.dms,
                info.degrees_in_sign
            );
        }
        Commands::Nakshatra { lon } => {
            let info = nakshatra_info(lon);
            println!("Nakshatra: {}", info.nakshatra.name());
            println!("Pada:      {}", info.pada);
            println!("Star lord: {}", info.star_lord.name());
            println!("Sub lord:  {}", info.sub_lord.name());
        }
        Commands::Dms { deg } => {
            println!("{}", deg_to_dms(deg));
        }
        Commands::Ayanamsa { system, jd } => {
            let system: Ayanamsa = system.parse()?;
            let value = ayanamsa_deg(system, jd_to_centuries(jd));
            println!("{}: {:.6}\u{b0} ({})", system.name(), value, deg_to_dms(value));
        }
        Commands::Dasha {
            birth,
            moon_longitude,
            levels,
        } => {
            let birth: UtcDateTime = birth.parse()?;
            let max_level = DashaLevel::from_u8(levels.saturating_sub(1).min(4))
                .unwrap_or(DashaLevel::Antardasha);
            let dashas = vimshottari_hierarchy(birth, moon_longitude, max_level)?;
            print_periods(&dashas, 0);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
