use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use carbonsecure_assessment::present::{
    build_map_layer, metrics_for, render_table, NO_FORMATIONS_MSG, NO_SCORES_MSG,
};
use carbonsecure_assessment::{
    csv_io, score_store, FormationStore, LogisticSurrogate, SessionInputs, Toggle,
};

#[derive(Parser)]
#[command(
    name = "carbonsecure",
    version,
    about = "Long-term CO2 storage security assessment over formation records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build two sample formations, score them, and print the full views.
    Demo,
    /// Override the working set from a CSV table and run an assessment.
    Score(ScoreArgs),
}

#[derive(Parser)]
struct ScoreArgs {
    /// Formation table matching the fixed record schema.
    #[arg(long, value_name = "PATH")]
    csv: PathBuf,
    /// Formation name to show summary metrics for (first match wins).
    #[arg(long)]
    select: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.command {
        Commands::Demo => demo(),
        Commands::Score(args) => score(args),
    }
}

fn demo() -> anyhow::Result<()> {
    let mut store = FormationStore::new();

    // North Sea saline aquifer, capacity derived from reservoir parameters.
    let mut session = SessionInputs {
        reservoir_name: "Utsira".to_string(),
        location: "North Sea".to_string(),
        longitude: 2.82,
        latitude: 58.36,
        area_m2: 1.0e6,
        thickness_m: 50.0,
        porosity_pct: 20.0,
        co2_density_kg_m3: 700.0,
        eff_factor_pct: 60.0,
        pressure_mpa: 10.3,
        temperature_c: 37.0,
        depth_m: 1012.0,
        seal_thickness_m: 250.0,
        faulted: Some(Toggle::No),
        stacked: Some(Toggle::No),
        ..SessionInputs::default()
    };
    session.calculate_capacity();
    store.append(session.snapshot_record());

    // Faulted dome with directly entered capacity and injectivity overrides.
    session.reservoir_name = "St. Johns Dome".to_string();
    session.location = "Arizona".to_string();
    session.longitude = -109.4;
    session.latitude = 34.5;
    session.storage_capacity_mt = 120.0;
    session.depth_m = 600.0;
    session.pressure_mpa = 5.2;
    session.temperature_c = 25.0;
    session.co2_density_override = Some(450.0);
    session.reservoir_thickness_override = Some(30.0);
    session.seal_thickness_m = 80.0;
    session.faulted = Some(Toggle::Yes);
    session.stacked = Some(Toggle::Yes);
    store.append(session.snapshot_record());

    assess_and_print(&mut store, Some("Utsira"))
}

fn score(args: ScoreArgs) -> anyhow::Result<()> {
    let records = csv_io::read_formations_path(&args.csv)
        .with_context(|| format!("loading {}", args.csv.display()))?;
    let mut store = FormationStore::new();
    store.replace_all(records);
    assess_and_print(&mut store, args.select.as_deref())
}

fn assess_and_print(store: &mut FormationStore, select: Option<&str>) -> anyhow::Result<()> {
    if store.is_empty() {
        println!("{NO_FORMATIONS_MSG}");
        return Ok(());
    }

    let model = LogisticSurrogate::default_calibration();
    if let Err(e) = score_store(store, &model) {
        tracing::error!(error = %e, "security assessment failed");
        println!("Prediction failed: {e}");
    }

    if let Some(name) = select {
        match metrics_for(store, name) {
            Some(m) => {
                let security = m
                    .security
                    .map(|s| format!("{s:.2}"))
                    .unwrap_or_else(|| "-".to_string());
                println!("Security: {security}");
                println!("Storage Capacity (Mt): {:.2}", m.storage_capacity_mt);
                println!("Seal Thickness (m): {:.2}", m.seal_thickness_m);
            }
            None => println!("No formation named {name:?} in the working set"),
        }
        println!();
    }

    print!("{}", render_table(store));

    match build_map_layer(store) {
        Some(layer) => {
            let json = serde_json::to_string_pretty(&layer)?;
            println!("{json}");
        }
        None => println!("{NO_SCORES_MSG}"),
    }
    Ok(())
}
