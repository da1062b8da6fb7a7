use clap::Parser;
use cook_sim_core::{
    Celsius, ConductorState, ContactEvent, Doneness, Kitchen, KitchenPreset, SignalChange,
    SmokeSignal, Station, TickReport,
};
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Stovetop cooking simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "cook-sim-demo")]
#[command(about = "Burner → pan → steak cooking simulation demo", long_about = None)]
struct Args {
    /// Simulation duration in seconds
    #[arg(short, long, default_value_t = 120.0)]
    duration: f32,

    /// Time step in seconds
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Burner intensity (0-1)
    #[arg(short, long, default_value_t = 1.0)]
    intensity: f32,

    /// JSON kitchen preset (missing fields use defaults)
    #[arg(short = 'p', long)]
    preset: Option<PathBuf>,

    /// Override the burner's maximum output in °C
    #[arg(long)]
    max_output: Option<f32>,

    /// Override the pan's ready temperature in °C
    #[arg(long)]
    ready_temp: Option<f32>,

    /// Override the pan's heating speed in °C/s
    #[arg(long)]
    heating_speed: Option<f32>,

    /// Second at which the steak goes into the pan
    #[arg(long, default_value_t = 10.0)]
    steak_at: f32,

    /// Take the steak off once it reaches this doneness (rare, medium, well-done, burnt)
    #[arg(long)]
    serve: Option<String>,

    /// Report interval in seconds
    #[arg(short, long, default_value_t = 5.0)]
    report_interval: f32,

    /// Print every signal transition as it happens
    #[arg(short, long)]
    events: bool,

    /// Print final statistics as JSON
    #[arg(long)]
    json: bool,

    /// Print the effective preset as JSON and exit
    #[arg(long)]
    dump_preset: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let preset = build_preset(&args)?;

    if args.dump_preset {
        println!("{}", serde_json::to_string_pretty(&preset)?);
        return Ok(());
    }

    for issue in preset.issues() {
        warn!("Preset issue: {}", issue);
    }

    let serve_at = args.serve.as_deref().map(parse_doneness).transpose()?;

    println!("=== Cooking Simulation Demo ===\n");
    println!(
        "Burner: max {}, intensity {:.2}",
        preset.burner.max_output_temp, args.intensity
    );
    println!(
        "Pan: ready at {}, too hot at {}, heating {:.1}°C/s",
        preset.pan.ready_temp, preset.pan.too_hot_temp, preset.pan.heating_speed
    );
    println!(
        "Steak: cooks on pans above {} after {} of contact\n",
        preset.steak.min_conductor_temp, preset.steak.min_contact_time
    );

    let mut kitchen = Kitchen::new();
    let station = kitchen.add_station(&preset);

    kitchen.set_intensity(station.burner, args.intensity);
    kitchen.turn_on(station.burner);
    kitchen.submit_contact(ContactEvent::enter(station.pan, station.burner));

    println!("Running simulation...\n");
    println!("Time(s) | Pan(°C) | Pan state | Smoke | Steak(°C) | Doneness  | Cooking");
    println!("--------|---------|-----------|-------|-----------|-----------|--------");

    let dt = if args.dt.is_finite() && args.dt > 0.0 { args.dt } else { 0.1 };
    let mut time = 0.0;
    let mut next_report = 0.0;
    let mut steak_placed = false;
    let mut served = false;

    while time < args.duration {
        if !steak_placed && time >= args.steak_at {
            kitchen.submit_contact(ContactEvent::enter(station.steak, station.pan));
            steak_placed = true;
            info!("Steak placed at {:.1}s", time);
        } else if steak_placed && !served {
            // The collision system keeps reporting the resting contact
            kitchen.submit_contact(ContactEvent::stay(station.steak, station.pan));
        }

        let report = kitchen.update(dt);
        time += dt;

        if args.events {
            print_transitions(&report, &station);
        }

        if let (Some(target), false) = (serve_at, served) {
            if kitchen.steak(station.steak).is_some_and(|s| s.doneness() >= target) {
                kitchen.submit_contact(ContactEvent::exit(station.steak, station.pan));
                served = true;
                println!("  -> steak served {} at {:.1}s", doneness_label(target), time);
            }
        }

        if time >= next_report {
            print_row(&kitchen, &station, time);
            next_report += args.report_interval;
        }
    }

    println!("\n=== Simulation Complete ===");
    let stats = kitchen.stats();
    println!("Final time: {}", stats.simulation_time);
    println!("Ticks: {}", stats.ticks);
    if let Some(steak) = kitchen.steak(station.steak) {
        println!(
            "Steak: {} ({})",
            steak.core_temp(),
            doneness_label(steak.doneness())
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}

fn build_preset(args: &Args) -> Result<KitchenPreset, Box<dyn Error>> {
    let mut preset = match &args.preset {
        Some(path) => load_preset(path)?,
        None => KitchenPreset::default(),
    };

    if let Some(max) = args.max_output {
        preset.burner.max_output_temp = Celsius::new(max);
    }
    if let Some(ready) = args.ready_temp {
        preset.pan.ready_temp = Celsius::new(ready);
    }
    if let Some(speed) = args.heating_speed {
        preset.pan.heating_speed = speed;
    }

    Ok(preset.sanitized())
}

fn load_preset(path: &Path) -> Result<KitchenPreset, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read preset {}: {e}", path.display()))?;
    let preset = serde_json::from_str(&text)
        .map_err(|e| format!("Failed to parse preset {}: {e}", path.display()))?;
    info!("Loaded preset from {}", path.display());
    Ok(preset)
}

fn parse_doneness(name: &str) -> Result<Doneness, String> {
    match name.to_lowercase().as_str() {
        "raw" => Ok(Doneness::Raw),
        "rare" => Ok(Doneness::Rare),
        "medium" => Ok(Doneness::Medium),
        "well-done" | "welldone" | "well" => Ok(Doneness::WellDone),
        "burnt" => Ok(Doneness::Burnt),
        _ => Err(format!("Unknown doneness '{name}'")),
    }
}

fn print_row(kitchen: &Kitchen, station: &Station, time: f32) {
    let (Some(pan), Some(steak)) = (kitchen.pan(station.pan), kitchen.steak(station.steak)) else {
        return;
    };
    println!(
        "{:7.1} | {:7.1} | {:9} | {:5} | {:9.1} | {:9} | {}",
        time,
        *pan.temperature(),
        pan_state_label(pan.state()),
        smoke_label(pan.smoke()),
        *steak.core_temp(),
        doneness_label(steak.doneness()),
        if steak.is_cooking() { "yes" } else { "no" }
    );
}

fn print_transitions(report: &TickReport, station: &Station) {
    for transition in &report.transitions {
        let who = if transition.object == station.burner {
            "burner"
        } else if transition.object == station.pan {
            "pan"
        } else {
            "steak"
        };
        let what = match transition.change {
            SignalChange::Flame { active } => {
                format!("flame {}", if active { "on" } else { "off" })
            }
            SignalChange::Smoke { from, to } => {
                format!("smoke {} -> {}", smoke_label(from), smoke_label(to))
            }
            SignalChange::PanState { from, to } => {
                format!("{} -> {}", pan_state_label(from), pan_state_label(to))
            }
            SignalChange::Doneness { from, to } => {
                format!("{} -> {}", doneness_label(from), doneness_label(to))
            }
            SignalChange::Cooking { active } => {
                format!("cooking {}", if active { "started" } else { "stopped" })
            }
        };
        println!("  [{}] {} {}", report.time, who, what);
    }
}

fn pan_state_label(state: ConductorState) -> &'static str {
    match state {
        ConductorState::Cold => "Cold",
        ConductorState::Heating => "Heating",
        ConductorState::Ready => "Ready",
        ConductorState::TooHot => "Too Hot",
    }
}

fn smoke_label(smoke: SmokeSignal) -> &'static str {
    match smoke {
        SmokeSignal::None => "-",
        SmokeSignal::Light => "light",
        SmokeSignal::Heavy => "heavy",
    }
}

fn doneness_label(doneness: Doneness) -> &'static str {
    match doneness {
        Doneness::Raw => "Raw",
        Doneness::Rare => "Rare",
        Doneness::Medium => "Medium",
        Doneness::WellDone => "Well Done",
        Doneness::Burnt => "Burnt",
    }
}
