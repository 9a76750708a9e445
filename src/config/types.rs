use crate::billing::{MeterReadings, TariffRates};
use serde::Serialize;
use serde_json::Value;

pub const KEY_INITIAL_WATER: &str = "initialWater";
pub const KEY_INITIAL_ELECTRICITY: &str = "initialElectricity";
pub const KEY_WATER_RATE: &str = "waterRate";
pub const KEY_SEWAGE_RATE: &str = "sewageRate";
pub const KEY_ELECTRICITY_RATE: &str = "electricityRate";

/// Last-used readings and tariffs, used to prefill the next session.
///
/// Every field is optional: an absent or unusable key leaves the matching
/// form field without a default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_water: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_electricity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sewage_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electricity_rate: Option<f64>,
}

impl SettingsSnapshot {
    /// Snapshot to persist after a successful calculation.
    ///
    /// This session's current readings become next session's initial ones.
    pub fn carry_forward(readings: &MeterReadings, rates: &TariffRates) -> Self {
        Self {
            initial_water: Some(readings.current_water),
            initial_electricity: Some(readings.current_electricity),
            water_rate: Some(rates.water_rate),
            sewage_rate: Some(rates.sewage_rate),
            electricity_rate: Some(rates.electricity_rate),
        }
    }

    /// Pick the known keys out of a JSON object, skipping any that are
    /// missing, non-numeric or non-finite.
    pub fn from_json(value: &Value) -> Self {
        let number = |key: &str| {
            let parsed = value.get(key).and_then(Value::as_f64).filter(|v| v.is_finite());
            if parsed.is_none() {
                crate::debug_println!("settings: key '{}' missing or not a number", key);
            }
            parsed
        };

        Self {
            initial_water: number(KEY_INITIAL_WATER),
            initial_electricity: number(KEY_INITIAL_ELECTRICITY),
            water_rate: number(KEY_WATER_RATE),
            sewage_rate: number(KEY_SEWAGE_RATE),
            electricity_rate: number(KEY_ELECTRICITY_RATE),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
