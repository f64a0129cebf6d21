// plotting/mod.rs
// Bounded time series of energy samples backing the live chart

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::str::FromStr;

use crate::simulation::energy::DerivedEnergies;

pub mod chart;
pub mod export;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    /// Seconds since the simulator started
    pub timestamp: f64,
    pub potential: f64,
    pub kinetic: f64,
    pub total: f64,
}

impl EnergySample {
    pub fn new(timestamp: f64, energies: &DerivedEnergies) -> Self {
        Self {
            timestamp,
            potential: energies.potential,
            kinetic: energies.kinetic,
            total: energies.total,
        }
    }
}

/// Append-only ring buffer: once `capacity` is reached the oldest sample is dropped.
#[derive(Debug, Clone)]
pub struct EnergySeries {
    samples: VecDeque<EnergySample>,
    capacity: usize,
}

impl EnergySeries {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: EnergySample) {
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&EnergySample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnergySample> + '_ {
        self.samples.iter()
    }

    pub fn samples(&self) -> Vec<EnergySample> {
        self.samples.iter().copied().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    CSV,
    TSV,
    JSON,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::CSV),
            "tsv" => Ok(ExportFormat::TSV),
            "json" => Ok(ExportFormat::JSON),
            _ => Err(format!("Unknown export format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests;
