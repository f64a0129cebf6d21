// renderer/mod.rs
// Builds the results panel and chart shown after every action

use crate::config::{CHART_HEIGHT, CHART_WIDTH};
use crate::plotting::chart::render_chart;
use crate::simulation::{EnergySimulator, Field, RunState};
use crate::storage::SettingsStore;
use crate::units::{self, format_quantity};

#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    pub field: Field,
    /// `Mass (kg)`
    pub label: String,
    pub text: String,
    pub error: Option<String>,
}

impl InputRow {
    pub fn line(&self) -> String {
        match &self.error {
            Some(error) => format!("{}: {}  <- {}", self.label, self.text, error),
            None => format!("{}: {}", self.label, self.text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyRow {
    pub label: &'static str,
    /// Rounded value with unit, `490.50 J`
    pub value: String,
}

impl EnergyRow {
    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub inputs: Vec<InputRow>,
    pub energies: Vec<EnergyRow>,
    pub run_state: RunState,
    pub notice: Option<String>,
    pub chart: String,
}

impl DisplayModel {
    pub fn from_simulator<S: SettingsStore>(sim: &EnergySimulator<S>) -> Self {
        Self::with_chart_size(sim, CHART_WIDTH, CHART_HEIGHT)
    }

    pub fn with_chart_size<S: SettingsStore>(
        sim: &EnergySimulator<S>,
        chart_width: usize,
        chart_height: usize,
    ) -> Self {
        let inputs = Field::ALL
            .iter()
            .map(|&field| InputRow {
                field,
                label: format!("{} ({})", field.label(), field.unit()),
                text: sim.field_text(field).to_string(),
                error: sim.validation().error(field).map(str::to_string),
            })
            .collect();

        let e = sim.displayed_energies();
        let energies = vec![
            EnergyRow {
                label: "Potential Energy",
                value: format_quantity(e.potential, units::JOULE),
            },
            EnergyRow {
                label: "Kinetic Energy",
                value: format_quantity(e.kinetic, units::JOULE),
            },
            EnergyRow {
                label: "Total Energy",
                value: format_quantity(e.total, units::JOULE),
            },
        ];

        Self {
            inputs,
            energies,
            run_state: sim.run_state(),
            notice: sim.notice().map(|n| n.to_string()),
            chart: render_chart(sim.series(), chart_width, chart_height),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Energy Simulator ===\n");
        for row in &self.inputs {
            out.push_str(&row.line());
            out.push('\n');
        }
        out.push_str(&format!("--- Energy Calculations [{}] ---\n", self.run_state.label()));
        for row in &self.energies {
            out.push_str(&row.line());
            out.push('\n');
        }
        if let Some(notice) = &self.notice {
            out.push_str(&format!("! {}\n", notice));
        }
        out.push_str(&self.chart);
        out
    }
}

pub fn render<S: SettingsStore>(sim: &EnergySimulator<S>) -> String {
    DisplayModel::from_simulator(sim).render()
}

#[cfg(test)]
mod tests;
