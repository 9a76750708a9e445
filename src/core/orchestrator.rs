use crate::billing::{compute, validate, CalculationResult, MeterReadings, TariffRates};
use crate::config::{SettingsSnapshot, SettingsStore};
use crate::debug_println;
use crate::error::{CalculationError, ParseError, PersistenceError};

/// One form submission: the seven fields exactly as entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationRequest {
    pub initial_water: String,
    pub current_water: String,
    pub initial_electricity: String,
    pub current_electricity: String,
    pub water_rate: String,
    pub sewage_rate: String,
    pub electricity_rate: String,
}

impl CalculationRequest {
    /// Parse every field; any failure yields the same generic error
    pub fn parse(&self) -> Result<(MeterReadings, TariffRates), ParseError> {
        let readings = MeterReadings {
            initial_water: parse_field(&self.initial_water)?,
            current_water: parse_field(&self.current_water)?,
            initial_electricity: parse_field(&self.initial_electricity)?,
            current_electricity: parse_field(&self.current_electricity)?,
        };
        let rates = TariffRates {
            water_rate: parse_field(&self.water_rate)?,
            sewage_rate: parse_field(&self.sewage_rate)?,
            electricity_rate: parse_field(&self.electricity_rate)?,
        };
        Ok((readings, rates))
    }
}

fn parse_field(text: &str) -> Result<f64, ParseError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ParseError)
}

/// Outcome of a full submission.
///
/// The result stands even when saving the settings failed.
#[derive(Debug)]
pub struct Submission {
    pub result: CalculationResult,
    pub persistence: Result<(), PersistenceError>,
}

/// Parse, validate, compute, then save the carried-forward settings.
///
/// The store is only written after a successful calculation.
pub fn submit(
    store: &SettingsStore,
    request: &CalculationRequest,
) -> Result<Submission, CalculationError> {
    let (readings, rates) = request.parse()?;
    if let Err(e) = validate(&readings, &rates) {
        debug_println!("request rejected: {}", e.reason());
        return Err(e.into());
    }

    let result = compute(&readings, &rates);
    debug_println!("calculated total {}", result.total_cost());

    let persistence = store.save(&SettingsSnapshot::carry_forward(&readings, &rates));
    Ok(Submission {
        result,
        persistence,
    })
}
