use serde::Serialize;
use std::fmt;

/// Cumulative meter values for one billing period
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeterReadings {
    pub initial_water: f64,       // m³
    pub current_water: f64,       // m³
    pub initial_electricity: f64, // kWh
    pub current_electricity: f64, // kWh
}

/// Tariffs in currency per unit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TariffRates {
    pub water_rate: f64,
    pub sewage_rate: f64,
    pub electricity_rate: f64,
}

/// Usage and cost figures for one successful calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    water_usage: f64,
    water_cost: f64,
    electricity_usage: f64,
    electricity_cost: f64,
    total_cost: f64,
}

impl MeterReadings {
    pub fn water_usage(&self) -> f64 {
        self.current_water - self.initial_water
    }

    pub fn electricity_usage(&self) -> f64 {
        self.current_electricity - self.initial_electricity
    }
}

impl TariffRates {
    /// Sewage is billed per cubic meter of water consumed
    pub fn combined_water_rate(&self) -> f64 {
        self.water_rate + self.sewage_rate
    }
}

impl CalculationResult {
    pub(crate) fn new(
        water_usage: f64,
        water_cost: f64,
        electricity_usage: f64,
        electricity_cost: f64,
    ) -> Self {
        Self {
            water_usage,
            water_cost,
            electricity_usage,
            electricity_cost,
            total_cost: water_cost + electricity_cost,
        }
    }

    pub fn water_usage(&self) -> f64 {
        self.water_usage
    }

    pub fn water_cost(&self) -> f64 {
        self.water_cost
    }

    pub fn electricity_usage(&self) -> f64 {
        self.electricity_usage
    }

    pub fn electricity_cost(&self) -> f64 {
        self.electricity_cost
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn is_finite(&self) -> bool {
        [
            self.water_usage,
            self.water_cost,
            self.electricity_usage,
            self.electricity_cost,
            self.total_cost,
        ]
        .iter()
        .all(|value| value.is_finite())
    }
}

/// Five-line report; rounding only happens here
impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Water usage: {:.3} m³", self.water_usage)?;
        writeln!(f, "Water cost: {:.2}", self.water_cost)?;
        writeln!(f, "Electricity usage: {:.2} kWh", self.electricity_usage)?;
        writeln!(f, "Electricity cost: {:.2}", self.electricity_cost)?;
        write!(f, "Total due: {:.2}", self.total_cost)
    }
}
