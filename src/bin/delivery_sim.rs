//! Headless delivery run
//!
//! Drops a few couriers on a district, walks each greedily toward its drop-off
//! every round, and reports encounters and deliveries.

use clap::{Parser, ValueEnum};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::path::PathBuf;

use delivery_grid::core::error::Result;
use delivery_grid::movement::move_cost;
use delivery_grid::partner::mastery;
use delivery_grid::{
    CellType, CharacterTrait, DeliveryEngine, DistrictGrid, EngineConfig, Grid, GridCell, GridPos,
    MoveResponse, Package, PackageKind, PartnerId, PartnerTraitProfile, UnitId,
};

#[derive(Parser, Debug)]
#[command(name = "delivery_sim")]
#[command(about = "Run a headless delivery round loop on a district grid")]
struct Args {
    /// Grid width (ignored with --template)
    #[arg(long, default_value_t = 12)]
    width: u32,

    /// Grid height (ignored with --template)
    #[arg(long, default_value_t = 12)]
    height: u32,

    /// Maximum rounds to play
    #[arg(long, default_value_t = 20)]
    rounds: u32,

    /// Random seed for the district layout and encounter rolls
    #[arg(long)]
    seed: Option<u64>,

    /// District template (TOML)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Engine config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct MoveRecord {
    round: u32,
    partner: String,
    to: GridPos,
    response: MoveResponse,
}

#[derive(Serialize)]
struct RunSummary {
    district: String,
    seed: u64,
    rounds_played: u32,
    delivered: Vec<String>,
    undelivered: Vec<String>,
    encounters: usize,
    moves: Vec<MoveRecord>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("delivery_grid=info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let template = match &args.template {
        Some(path) => {
            let template = DistrictGrid::from_toml_str(&std::fs::read_to_string(path)?)?;
            template.validate()?;
            template
        }
        None => generate_district(args.width, args.height, seed),
    };

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    config.seed.get_or_insert(seed);

    let grid = Grid::from_template(&template);
    let mut engine = DeliveryEngine::new(grid, config);
    let roster = spawn_couriers(&mut engine, seed)?;

    let mut summary = RunSummary {
        district: template.name.clone(),
        seed,
        rounds_played: 0,
        delivered: Vec::new(),
        undelivered: Vec::new(),
        encounters: 0,
        moves: Vec::new(),
    };

    for round in 0..args.rounds {
        if engine.get_all_units().is_empty() {
            break;
        }

        let ids: Vec<UnitId> = engine.get_all_units().iter().map(|u| u.id).collect();
        for id in ids {
            let Some(target) = next_step(&engine, id) else {
                continue;
            };
            let partner = engine
                .get_unit(id)
                .map(|u| u.partner_id.0.clone())
                .unwrap_or_default();

            let response = MoveResponse::from(engine.move_unit(id, target));
            if response.encounter.is_some() {
                summary.encounters += 1;
            }
            summary.moves.push(MoveRecord {
                round,
                partner: partner.clone(),
                to: target,
                response,
            });

            if engine.complete_delivery(id).is_some() {
                summary.delivered.push(partner);
            }
        }

        engine.reset_turn();
        summary.rounds_played = round + 1;
    }

    summary.undelivered = engine
        .get_all_units()
        .iter()
        .map(|u| u.partner_id.0.clone())
        .collect();

    tracing::info!(
        "Run finished: {} delivered, {} still out, {} couriers rostered",
        summary.delivered.len(),
        summary.undelivered.len(),
        roster
    );

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_text(&summary);
    }

    Ok(())
}

/// Closest affordable valid move toward the unit's destination
fn next_step(engine: &DeliveryEngine, id: UnitId) -> Option<GridPos> {
    let unit = engine.get_unit(id)?;
    let destination = unit.package.destination;

    engine
        .get_valid_moves(id)
        .into_iter()
        .filter(|pos| {
            engine
                .get_cell_at(*pos)
                .is_some_and(|cell| move_cost(unit.position, cell) <= unit.action_points)
        })
        .min_by_key(|pos| (pos.manhattan(&destination), unit.position.manhattan(pos)))
        .filter(|pos| pos.manhattan(&destination) < unit.position.manhattan(&destination))
}

fn generate_district(width: u32, height: u32, seed: u64) -> DistrictGrid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut template = DistrictGrid::new("generated", "Generated District", width, height)
        .with_base_encounter_chance(0.05);
    template.special_features.push("neon overpass".to_string());

    let terrain = [
        (CellType::Building, 0.10),
        (CellType::Traffic, 0.08),
        (CellType::Construction, 0.05),
        (CellType::Security, 0.04),
        (CellType::Protest, 0.03),
        (CellType::Shortcut, 0.04),
        (CellType::Surveillance, 0.04),
        (CellType::Underground, 0.03),
    ];

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let roll: f32 = rng.gen();
            let mut cumulative = 0.0;
            for (cell_type, weight) in terrain {
                cumulative += weight;
                if roll < cumulative {
                    template = template.with_cell(terrain_cell(GridPos::new(x, y), cell_type));
                    break;
                }
            }
        }
    }

    template
}

fn terrain_cell(pos: GridPos, cell_type: CellType) -> GridCell {
    let cell = GridCell::new(pos, cell_type);
    match cell_type {
        CellType::Building => cell.blocking(),
        CellType::Traffic => cell.with_movement_cost(2).with_encounter_chance(0.15),
        CellType::Construction => cell.with_movement_cost(2).with_encounter_chance(0.2),
        CellType::Security => cell.with_encounter_chance(0.4),
        CellType::Protest => cell.with_movement_cost(3).with_encounter_chance(0.5),
        CellType::Shortcut => cell.with_encounter_chance(0.1),
        CellType::Surveillance => cell.with_encounter_chance(0.3),
        CellType::Underground => cell.with_encounter_chance(0.35),
        CellType::Street | CellType::Pickup => cell.with_encounter_chance(0.05),
    }
}

fn spawn_couriers(engine: &mut DeliveryEngine, seed: u64) -> Result<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
    let mut open: Vec<GridPos> = engine
        .grid()
        .cells()
        .filter(|c| !c.blocks_movement)
        .map(|c| c.position)
        .collect();
    open.sort();

    let partners = [
        ("rook", Some((CharacterTrait::PatternRecognition, mastery::SILVER))),
        ("mika", Some((CharacterTrait::Hyperfocus, mastery::GOLD))),
        ("sable", None),
    ];

    let mut count = 0;
    for (index, (name, primary)) in partners.into_iter().enumerate() {
        let (Some(start), Some(drop_off)) = (open.choose(&mut rng), open.choose(&mut rng)) else {
            break;
        };
        let package = Package::new(
            format!("order-{}", index + 1),
            *drop_off,
            PackageKind::Food,
            30,
        );
        let id = engine.add_unit(PartnerId::new(name), *start, package)?;

        if let Some((trait_id, level)) = primary {
            engine.set_partner_for_unit(
                id,
                PartnerTraitProfile::new(PartnerId::new(name)).with_primary(trait_id, level),
            )?;
        }
        count += 1;
    }

    Ok(count)
}

fn print_text(summary: &RunSummary) {
    println!("=== {} (seed {}) ===", summary.district, summary.seed);
    for record in &summary.moves {
        let status = match (&record.response.encounter, &record.response.message) {
            (Some(encounter), _) => format!("ENCOUNTER {}", encounter),
            (None, Some(message)) => format!("failed: {}", message),
            (None, None) => "ok".to_string(),
        };
        println!(
            "  round {:>2}  {:<6} -> {:<9} {}",
            record.round,
            record.partner,
            record.to.to_string(),
            status
        );
    }
    println!();
    println!("Rounds played: {}", summary.rounds_played);
    println!("Encounters:    {}", summary.encounters);
    println!("Delivered:     {:?}", summary.delivered);
    println!("Still out:     {:?}", summary.undelivered);
}
