//! Delivery engine integration tests

use delivery_grid::encounter::effective_chance;
use delivery_grid::partner::mastery;
use delivery_grid::{
    CellType, CharacterTrait, DeliveryEngine, DistrictGrid, EncounterId, EngineConfig, Grid,
    GridCell, GridPos, MoveError, MoveResponse, Package, PackageKind, PartnerId,
    PartnerTraitProfile, Situation,
};

fn two_by_two() -> Grid {
    Grid::from_template(&DistrictGrid::new("plaza", "Plaza", 2, 2).with_base_encounter_chance(0.0))
}

fn package(destination: GridPos) -> Package {
    Package::new("order-1", destination, PackageKind::Package, 45)
}

#[test]
fn test_open_plaza_move_spends_distance() {
    let mut engine = DeliveryEngine::with_seed(two_by_two(), 1);
    let id = engine
        .add_unit(PartnerId::new("rook"), GridPos::new(0, 0), package(GridPos::new(1, 1)))
        .unwrap();
    assert_eq!(engine.get_unit(id).unwrap().action_points, 3);

    let mut moves = engine.get_valid_moves(id);
    moves.sort();
    let mut expected = vec![GridPos::new(1, 0), GridPos::new(0, 1), GridPos::new(1, 1)];
    expected.sort();
    assert_eq!(moves, expected);

    let outcome = engine.move_unit(id, GridPos::new(1, 1)).unwrap();
    assert_eq!(outcome.cost, 2);
    assert!(outcome.encounter.is_none());

    let unit = engine.get_unit(id).unwrap();
    assert_eq!(unit.position, GridPos::new(1, 1));
    assert_eq!(unit.action_points, 1);
    assert!(unit.has_acted);
    assert!(engine.check_delivery_complete(id));
}

#[test]
fn test_short_budget_cannot_reach_corner() {
    let config = EngineConfig {
        base_action_points: 1,
        seed: Some(1),
        ..EngineConfig::default()
    };
    let mut engine = DeliveryEngine::new(two_by_two(), config);
    let id = engine
        .add_unit(PartnerId::new("rook"), GridPos::new(0, 0), package(GridPos::new(1, 1)))
        .unwrap();

    assert_eq!(
        engine.move_unit(id, GridPos::new(1, 1)),
        Err(MoveError::NotEnoughActionPoints)
    );
    let unit = engine.get_unit(id).unwrap();
    assert_eq!(unit.position, GridPos::new(0, 0));
    assert_eq!(unit.action_points, 1);
    assert!(!unit.has_acted);
}

#[test]
fn test_blocked_cell_rejected_regardless_of_budget() {
    let template = DistrictGrid::new("plaza", "Plaza", 2, 2)
        .with_cell(GridCell::new(GridPos::new(1, 0), CellType::Building).blocking());
    let mut engine = DeliveryEngine::with_seed(Grid::from_template(&template), 1);
    let id = engine
        .add_unit(PartnerId::new("rook"), GridPos::new(0, 0), package(GridPos::new(1, 1)))
        .unwrap();
    engine
        .set_partner_for_unit(
            id,
            PartnerTraitProfile::new(PartnerId::new("rook"))
                .with_primary(CharacterTrait::Hyperfocus, mastery::GOLD)
                .with_secondary(CharacterTrait::RoutineMastery, mastery::SILVER),
        )
        .unwrap();
    assert_eq!(engine.get_unit(id).unwrap().action_points, 6);

    assert_eq!(
        engine.move_unit(id, GridPos::new(1, 0)),
        Err(MoveError::PositionBlocked)
    );
    assert!(!engine.get_valid_moves(id).contains(&GridPos::new(1, 0)));
    assert_eq!(engine.get_unit(id).unwrap().position, GridPos::new(0, 0));
}

#[test]
fn test_pattern_recognition_shrinks_encounter_chance() {
    let mut engine = DeliveryEngine::with_seed(two_by_two(), 1);
    let id = engine
        .add_unit(PartnerId::new("rook"), GridPos::new(0, 0), package(GridPos::new(1, 1)))
        .unwrap();
    engine
        .set_partner_for_unit(
            id,
            PartnerTraitProfile::new(PartnerId::new("rook"))
                .with_primary(CharacterTrait::PatternRecognition, mastery::SILVER),
        )
        .unwrap();

    let bonus = engine.get_trait_bonus(id, Situation::Movement);
    assert!((bonus - 1.25).abs() < 1e-6);
    assert!((effective_chance(0.4, bonus) - 0.32).abs() < 1e-6);
}

#[test]
fn test_out_of_bounds_move_rejected() {
    let mut engine = DeliveryEngine::with_seed(two_by_two(), 1);
    let id = engine
        .add_unit(PartnerId::new("rook"), GridPos::new(0, 0), package(GridPos::new(1, 1)))
        .unwrap();

    for target in [GridPos::new(2, 0), GridPos::new(-1, 0), GridPos::new(0, 5)] {
        let response = MoveResponse::from(engine.move_unit(id, target));
        assert!(!response.success);
        assert_eq!(response.message.as_deref(), Some("Invalid position"));
    }
    assert!(!engine.get_unit(id).unwrap().has_acted);
}

#[test]
fn test_one_move_per_round_across_rounds() {
    let grid = Grid::from_template(&DistrictGrid::new("strip", "Strip", 10, 1));
    let mut engine = DeliveryEngine::with_seed(grid, 3);
    let id = engine
        .add_unit(PartnerId::new("rook"), GridPos::new(0, 0), package(GridPos::new(9, 0)))
        .unwrap();

    let mut rounds = 0;
    while !engine.check_delivery_complete(id) {
        let x = engine.get_unit(id).unwrap().position.x;
        let target = GridPos::new((x + 3).min(9), 0);
        engine.move_unit(id, target).unwrap();
        // Leftover AP does not buy a second move
        assert!(engine.move_unit(id, target).is_err());
        engine.reset_turn();
        rounds += 1;
    }

    assert_eq!(rounds, 3);
    assert_eq!(engine.round(), 3);
    let unit = engine.complete_delivery(id).unwrap();
    assert_eq!(unit.package.time_remaining, 42);
    assert!(engine.get_all_units().is_empty());
}

#[test]
fn test_reset_turn_covers_every_unit() {
    let grid = Grid::from_template(&DistrictGrid::new("block", "Block", 6, 6));
    let mut engine = DeliveryEngine::with_seed(grid, 5);
    let focused = PartnerTraitProfile::new(PartnerId::new("mika"))
        .with_primary(CharacterTrait::Hyperfocus, mastery::SILVER);

    let a = engine
        .add_unit(PartnerId::new("rook"), GridPos::new(0, 0), package(GridPos::new(5, 5)))
        .unwrap();
    let b = engine
        .add_unit(PartnerId::new("mika"), GridPos::new(5, 0), package(GridPos::new(0, 5)))
        .unwrap();
    engine.set_partner_for_unit(b, focused).unwrap();

    engine.move_unit(a, GridPos::new(1, 2)).unwrap();
    engine.move_unit(b, GridPos::new(4, 3)).unwrap();
    engine.reset_turn();

    for unit in engine.get_all_units() {
        assert!(!unit.has_acted);
        assert_eq!(unit.package.time_remaining, 44);
    }
    assert_eq!(engine.get_unit(a).unwrap().action_points, 3);
    assert_eq!(engine.get_unit(b).unwrap().action_points, 4);
}

#[test]
fn test_template_round_trip_through_toml() {
    let toml = r#"
id = "docks"
name = "Docks"

[size]
width = 3
height = 3

[difficulty_modifiers]
base_encounter_chance = 0.0

[[default_cells]]
position = { x = 2, y = 2 }
type = "security"
encounter_chance = 1.0
encounter_id = "harbor_patrol"
"#;
    let template = DistrictGrid::from_toml_str(toml).unwrap();
    template.validate().unwrap();
    let mut engine = DeliveryEngine::with_seed(Grid::from_template(&template), 11);
    let id = engine
        .add_unit(PartnerId::new("rook"), GridPos::new(1, 1), package(GridPos::new(0, 0)))
        .unwrap();

    let outcome = engine.move_unit(id, GridPos::new(2, 2)).unwrap();
    assert_eq!(outcome.encounter, Some(EncounterId::new("harbor_patrol")));
}
