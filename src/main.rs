use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use irrigation_control::config::Config;
use irrigation_control::form::Form;
use irrigation_control::inference;
use irrigation_control::model::ModelCache;
use irrigation_control::reading::{self, SensorReading};

#[derive(Parser, Debug)]
#[command(name = "irrigation_control")]
#[command(about = "Actuator status prediction for smart irrigation", long_about = None)]
struct Args {
    /// Path to the trained model artifact (IRRIGATION_MODEL_PATH or the
    /// shipped model when omitted)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Run one prediction from the sensor flags instead of the interactive form
    #[arg(long)]
    once: bool,

    /// Temperature (°C)
    #[arg(long, default_value_t = reading::TEMPERATURE.default)]
    temperature: f64,

    /// Humidity (%)
    #[arg(long, default_value_t = reading::HUMIDITY.default)]
    humidity: f64,

    /// Water level
    #[arg(long, default_value_t = reading::WATER_LEVEL.default)]
    water_level: f64,

    /// Nitrogen (mg/kg)
    #[arg(long, default_value_t = reading::NITROGEN.default)]
    nitrogen: f64,

    /// Phosphorus (mg/kg)
    #[arg(long, default_value_t = reading::PHOSPHORUS.default)]
    phosphorus: f64,

    /// Potassium (mg/kg)
    #[arg(long, default_value_t = reading::POTASSIUM.default)]
    potassium: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("irrigation_control=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let model_path = args.model.clone().unwrap_or(config.model_path);
    let cache = ModelCache::new(model_path);

    if args.once {
        run_once(&args, &cache)
    } else {
        run_form(&cache)
    }
}

fn run_once(args: &Args, cache: &ModelCache) -> Result<()> {
    let reading = SensorReading {
        temperature: args.temperature,
        humidity: args.humidity,
        water_level: args.water_level,
        nitrogen: args.nitrogen,
        phosphorus: args.phosphorus,
        potassium: args.potassium,
    };
    reading.validate()?;

    let model = cache.get()?;
    let prediction = inference::predict(&reading, model.as_ref())?;
    for (actuator, state) in prediction.statuses()? {
        println!("{}: {}", actuator.display_name(), state);
    }
    Ok(())
}

fn run_form(cache: &ModelCache) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut form = Form::new(stdin.lock(), stdout.lock());
    form.banner()?;

    loop {
        let Some(reading) = form.collect_reading()? else {
            break;
        };
        if !form.confirm()? {
            continue;
        }

        let model = cache.get()?;
        let prediction = inference::predict(&reading, model.as_ref())?;
        let statuses = prediction.statuses()?;
        form.render_statuses(&statuses)?;
        info!(classes = ?prediction.classes(), "Prediction rendered");
    }

    form.footer()?;
    Ok(())
}
