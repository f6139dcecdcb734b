use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use van_configurator::configurator::{Action, Configurator};
use van_configurator::layers::LayerSlot;
use van_configurator::loader::{builtin_assets, builtin_catalog, parse_assets, parse_catalog};
use van_configurator::model::{CategoryId, Flag, SlotKind};
use van_configurator::pricing::PriceBreakdown;

const SMALL_CATALOG: &str = r#"{
    "chassis": [
        { "id": "sprinter144", "name": "Sprinter 144", "price": 70000 }
    ],
    "models": [
        { "id": "pedernales", "name": "Pedernales", "price": 85000,
          "compatible_chassis": ["sprinter144"] }
    ],
    "options": [
        { "id": "power-lithium-100ah", "name": "100Ah Lithium", "price": 900, "category": "power" },
        { "id": "wall-white", "name": "White Walls", "price": 0, "category": "wall-color", "visual": "white" },
        { "id": "cabinet-white", "name": "White Cabinets", "price": 0, "category": "cabinet", "visual": "white" },
        { "id": "countertop-maple", "name": "Maple", "price": 900, "category": "counter", "visual": "maple" }
    ]
}"#;

const SMALL_ASSETS: &str = r#"{
    "entries": [
        {
            "chassis": "sprinter144",
            "model": "pedernales",
            "floor": "floor.png",
            "wall": { "white": "wall-white.png" },
            "cabinet": { "white": "cabinet-white.png" },
            "counter": { "maple": "counter-maple.png" },
            "bed": "bed.png",
            "seats": "seats.png"
        }
    ]
}"#;

fn small() -> Configurator {
    Configurator::new(
        parse_catalog(SMALL_CATALOG).unwrap(),
        parse_assets(SMALL_ASSETS).unwrap(),
    )
}

#[test]
fn chassis_model_and_power_option() {
    let mut van = small();

    assert!(van.apply(Action::SelectChassis("sprinter144".to_string())));
    assert!(van.apply(Action::SelectModel("pedernales".to_string())));
    assert!(van.apply(Action::Toggle("power-lithium-100ah".to_string())));

    assert_eq!(
        van.price(),
        PriceBreakdown {
            chassis: 70000,
            model: 85000,
            upgrades: 900,
            total: 155_900,
        }
    );
    assert_eq!(
        van.completed(),
        BTreeSet::from([CategoryId::Chassis, CategoryId::Model, CategoryId::Power])
    );
    assert_eq!(van.progress_percent(), 27);
}

#[test]
fn bed_and_seats_stack_then_bed_removed() {
    let mut van = small();
    for id in [
        "sprinter144",
        "pedernales",
        "wall-white",
        "cabinet-white",
        "countertop-maple",
    ] {
        assert!(van.select(id), "{id}");
    }
    van.apply(Action::SetFlag(Flag::Bed, true));
    van.apply(Action::SetFlag(Flag::Seats, true));

    let slots: Vec<LayerSlot> = van.layers().iter().map(|l| l.slot).collect();
    assert_eq!(
        slots,
        vec![
            LayerSlot::Floor,
            LayerSlot::Wall,
            LayerSlot::Cabinet,
            LayerSlot::Counter,
            LayerSlot::Bed,
            LayerSlot::Seats,
        ]
    );

    van.apply(Action::SetFlag(Flag::Bed, false));
    let slots: Vec<LayerSlot> = van.layers().iter().map(|l| l.slot).collect();
    assert_eq!(
        slots,
        vec![
            LayerSlot::Floor,
            LayerSlot::Wall,
            LayerSlot::Cabinet,
            LayerSlot::Counter,
            LayerSlot::Seats,
        ]
    );
}

#[test]
fn owned_van_keeps_chassis_but_not_its_price() {
    let mut van = small();
    van.select("sprinter144");
    van.apply(Action::SetOwnsVan(true));

    assert_eq!(van.state().chassis_id.as_deref(), Some("sprinter144"));
    assert_eq!(van.price().chassis, 0);
    assert_eq!(van.price().total, 0);
}

#[test]
fn options_stay_locked_until_model() {
    let mut van = small();
    van.select("sprinter144");

    assert!(!van.apply(Action::Toggle("power-lithium-100ah".to_string())));
    assert!(van.state().toggles.is_empty());

    van.select("pedernales");
    assert!(van.apply(Action::Toggle("power-lithium-100ah".to_string())));
}

#[test]
fn builtin_rio_grande_without_bed_shows_table() {
    let mut van = Configurator::new(builtin_catalog().unwrap(), builtin_assets().unwrap());
    van.select("sprinter170");
    van.select("rio-grande");

    let slots: Vec<LayerSlot> = van.layers().iter().map(|l| l.slot).collect();
    assert_eq!(
        slots,
        vec![
            LayerSlot::Floor,
            LayerSlot::Wall,
            LayerSlot::BackCabinet,
            LayerSlot::Cabinet,
            LayerSlot::BackCounter,
            LayerSlot::BenchCushion,
            LayerSlot::Table,
            LayerSlot::Counter,
            LayerSlot::Seats,
        ]
    );
}

#[test]
fn builtin_170_pedernales_splits_counter_only() {
    let mut van = Configurator::new(builtin_catalog().unwrap(), builtin_assets().unwrap());
    van.select("sprinter170");
    van.select("pedernales");

    let slots: Vec<LayerSlot> = van.layers().iter().map(|l| l.slot).collect();
    assert!(slots.contains(&LayerSlot::BackCounter));
    assert!(!slots.contains(&LayerSlot::BackCabinet));
    assert!(slots.contains(&LayerSlot::Cabinet));
}

#[test]
fn summary_text_lists_picks() {
    let mut van = small();
    van.select("sprinter144");
    van.select("pedernales");
    van.select("power-lithium-100ah");

    let text = van.summary().to_string();
    assert!(text.contains("100Ah Lithium"));
    assert!(text.contains("$155,900"));
}

#[test]
fn builtin_stove_sits_beside_the_countertop() {
    let mut van = Configurator::new(builtin_catalog().unwrap(), builtin_assets().unwrap());
    van.select("sprinter144");
    van.select("pedernales");
    let before = van.price().upgrades;
    let counter = van.state().slot(SlotKind::Counter).map(str::to_string);
    assert!(counter.is_some());

    assert!(van.select("kitchen-stove-mounted"));
    assert!(van.select("kitchen-stove-unmounted"));

    assert_eq!(van.state().slot(SlotKind::Counter).map(str::to_string), counter);
    assert!(van.state().is_selected("kitchen-stove-mounted"));
    assert_eq!(van.price().upgrades, before + 950 + 850);
}
