use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tdee_core::*;

#[derive(Parser)]
#[command(name = "tdee")]
#[command(about = "TDEE calculator and weight projection", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use a specific config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate energy expenditure and weight projections
    Calc {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Calculate from a JSON profile file
    File {
        /// Path to a JSON profile
        path: PathBuf,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List activity levels and their multipliers
    Activities,

    /// Show the effective configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

#[derive(Args)]
struct ProfileArgs {
    /// male or female
    #[arg(long)]
    gender: Gender,

    /// Age in years (15-100)
    #[arg(long)]
    age: u32,

    /// Current body weight
    #[arg(long)]
    weight: f64,

    /// kg or lb
    #[arg(long, default_value = "kg")]
    weight_unit: WeightUnit,

    /// cm, in or ft
    #[arg(long, default_value = "cm")]
    height_unit: HeightUnit,

    /// Height in centimeters (with --height-unit cm)
    #[arg(long)]
    height_cm: Option<f64>,

    /// Height in inches (with --height-unit in)
    #[arg(long)]
    height_in: Option<f64>,

    /// Height feet part (with --height-unit ft)
    #[arg(long)]
    height_ft: Option<f64>,

    /// Height inches part (with --height-unit ft)
    #[arg(long)]
    height_ft_in: Option<f64>,

    /// sedentary, light, moderate, active or very-active
    #[arg(long, default_value = "moderate")]
    activity: ActivityLevel,

    /// Target weight in the same unit as --weight (default: healthy estimate)
    #[arg(long)]
    target_weight: Option<f64>,
}

impl From<ProfileArgs> for RawProfile {
    fn from(args: ProfileArgs) -> Self {
        RawProfile {
            gender: Some(args.gender),
            age: Some(args.age),
            weight: Some(args.weight),
            weight_unit: args.weight_unit,
            height_unit: args.height_unit,
            height_cm: args.height_cm,
            height_in: args.height_in,
            height_ft: args.height_ft,
            height_ft_in: args.height_ft_in,
            activity_level: args.activity,
            target_weight: args.target_weight,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tdee_core::logging::init_with_level(if cli.verbose { "debug" } else { "warn" });

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) if path.exists() => Config::load_from(path)?,
        Some(ref path) => {
            tracing::warn!("Config file {:?} not found, using defaults", path);
            Config::default()
        }
        None => Config::load()?,
    };

    match cli.command {
        Commands::Calc { profile, json } => {
            let engine = Engine::new(config)?;
            cmd_calc(&engine, profile.into(), json)
        }
        Commands::File { path, json } => {
            let engine = Engine::new(config)?;
            let contents = std::fs::read_to_string(&path)?;
            let raw: RawProfile = serde_json::from_str(&contents)?;
            cmd_calc(&engine, raw, json)
        }
        Commands::Activities => cmd_activities(&config),
        Commands::Config { init, force } => {
            if init {
                let path = cli.config.unwrap_or_else(Config::default_config_path);
                cmd_config_init(&path, force)
            } else {
                config.validate()?;
                print!("{}", config.to_toml()?);
                Ok(())
            }
        }
    }
}

fn cmd_calc(engine: &Engine, raw: RawProfile, json: bool) -> Result<()> {
    let calculation = engine.calculate_raw(raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&calculation)?);
    } else {
        display_calculation(&calculation, engine.config());
    }

    Ok(())
}

fn cmd_activities(config: &Config) -> Result<()> {
    println!("Activity levels:");
    for level in ActivityLevel::ALL {
        println!(
            "  {:<12} x{:<6} {}",
            level.as_str(),
            config.activity.multiplier(level),
            level.description()
        );
    }
    Ok(())
}

fn cmd_config_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}

fn percent_change(factor: f64) -> String {
    format!("{:+.0}%", (factor - 1.0) * 100.0)
}

fn display_calculation(calc: &Calculation, config: &Config) {
    let unit = calc.weight_unit;
    let window = config.projection.default_weeks;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  TDEE RESULTS");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  BMR:  {} calories/day", calc.energy.bmr);
    println!("  TDEE: {} calories/day", calc.energy.tdee);
    println!();
    println!(
        "  Cutting ({}):  {} calories/day",
        percent_change(config.regimes.cutting_factor),
        calc.energy.cutting
    );
    println!("  Maintenance:    {} calories/day", calc.energy.maintenance);
    println!(
        "  Bulking ({}):  {} calories/day",
        percent_change(config.regimes.bulking_factor),
        calc.energy.bulking
    );
    println!();

    let label = if calc.target.is_healthy_estimate {
        "Estimated Healthy Weight"
    } else {
        "Your Target Weight"
    };
    println!("  {}: {} {}", label, calc.target.weight, unit);

    let weeks = &calc.weeks_to_target;
    if let Some(n) = weeks.cutting {
        println!("  → Reach in about {} weeks cutting", n);
    } else if let Some(n) = weeks.bulking {
        println!("  → Reach in about {} weeks bulking", n);
    }
    if weeks.extends_beyond(window) {
        println!("    (Extends beyond {}-week projection)", window);
    }
    if calc.target.is_healthy_estimate {
        println!("  ℹ Estimate based on a BMI of {}", config.target.reference_bmi);
    }
    println!();

    println!("  Change from start ({})", unit);
    println!("  {:<10} {:>9} {:>12} {:>9}", "", "Cutting", "Maintenance", "Bulking");
    for summary in &calc.summaries {
        println!(
            "  {:<10} {:>+9.1} {:>+12.1} {:>+9.1}",
            format!("{} weeks", summary.week),
            summary.cutting,
            summary.maintenance,
            summary.bulking
        );
    }
    println!();

    if !calc.composition.is_empty() {
        println!("  Estimated 12-week composition change ({})", unit);
        println!("  {:<12} {:>9} {:>9}", "", "Fat", "Lean");
        for part in &calc.composition {
            println!(
                "  {:<12} {:>+9.1} {:>+9.1}",
                part.plan.as_str(),
                part.fat,
                part.lean
            );
        }
        println!();
    }

    println!("  {}-week trajectory ({})", window, unit);
    println!("  {:<6} {:>9} {:>12} {:>9}", "Week", "Cutting", "Maintenance", "Bulking");
    let shown = calc.trajectory.window(window);
    for ((cut, keep), bulk) in shown
        .cutting
        .iter()
        .zip(&shown.maintenance)
        .zip(&shown.bulking)
    {
        println!(
            "  {:<6} {:>9.1} {:>12.1} {:>9.1}",
            cut.week, cut.weight, keep.weight, bulk.weight
        );
    }
    println!();
}
