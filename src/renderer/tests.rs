use super::*;
use crate::simulation::EnergySimulator;
use crate::storage::MemoryStore;

fn line_with<'a>(text: &'a str, prefix: &str) -> &'a str {
    text.lines()
        .find(|l| l.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {:?} in\n{}", prefix, text))
}

#[test]
fn panel_shows_units_for_every_quantity() {
    let sim = EnergySimulator::new(MemoryStore::new());
    let text = render(&sim);
    assert_eq!(line_with(&text, "Mass"), "Mass (kg): 1");
    assert_eq!(line_with(&text, "Height"), "Height (m): 1");
    assert_eq!(line_with(&text, "Velocity"), "Velocity (m/s): 0");
    assert_eq!(line_with(&text, "Gravity"), "Gravity (m/s²): 9.81");
    assert_eq!(line_with(&text, "Potential Energy"), "Potential Energy: 9.81 J");
    assert_eq!(line_with(&text, "Kinetic Energy"), "Kinetic Energy: 0.00 J");
    assert_eq!(line_with(&text, "Total Energy"), "Total Energy: 9.81 J");
}

#[test]
fn chart_is_always_rendered_with_its_id() {
    let sim = EnergySimulator::new(MemoryStore::new());
    let model = DisplayModel::from_simulator(&sim);
    assert!(model.chart.starts_with("[energy-chart]"));
    assert!(model.render().contains("[energy-chart]"));
}

#[test]
fn invalid_field_shows_inline_message() {
    let mut sim = EnergySimulator::new(MemoryStore::new());
    let _ = sim.set_field(Field::Mass, "-5");
    let text = render(&sim);
    assert_eq!(line_with(&text, "Mass"), "Mass (kg): -5  <- Invalid input");
    assert_eq!(line_with(&text, "Potential Energy"), "Potential Energy: 9.81 J");
}

#[test]
fn paused_state_and_notice_are_visible() {
    let mut sim = EnergySimulator::new(MemoryStore::new());
    sim.pause();
    assert!(render(&sim).contains("[PAUSED]"));

    let _ = sim.load();
    let model = DisplayModel::with_chart_size(&sim, 10, 3);
    assert_eq!(model.run_state, RunState::Paused);
    assert_eq!(
        model.notice.as_deref(),
        Some("No saved simulation named 'default'")
    );
    assert!(model.render().contains("! No saved simulation named 'default'"));
}
