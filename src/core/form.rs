use super::orchestrator::CalculationRequest;
use crate::config::SettingsSnapshot;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

/// Input fields in the order they are asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    InitialWater,
    CurrentWater,
    InitialElectricity,
    CurrentElectricity,
    WaterRate,
    SewageRate,
    ElectricityRate,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::InitialWater,
        Field::CurrentWater,
        Field::InitialElectricity,
        Field::CurrentElectricity,
        Field::WaterRate,
        Field::SewageRate,
        Field::ElectricityRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::InitialWater => "Initial water reading (m³)",
            Field::CurrentWater => "Current water reading (m³)",
            Field::InitialElectricity => "Initial electricity reading (kWh)",
            Field::CurrentElectricity => "Current electricity reading (kWh)",
            Field::WaterRate => "Water tariff (per m³)",
            Field::SewageRate => "Sewage tariff (per m³)",
            Field::ElectricityRate => "Electricity tariff (per kWh)",
        }
    }

    /// Stored default for this field; current readings never have one
    pub fn prefill(&self, snapshot: &SettingsSnapshot) -> Option<f64> {
        match self {
            Field::InitialWater => snapshot.initial_water,
            Field::InitialElectricity => snapshot.initial_electricity,
            Field::WaterRate => snapshot.water_rate,
            Field::SewageRate => snapshot.sewage_rate,
            Field::ElectricityRate => snapshot.electricity_rate,
            Field::CurrentWater | Field::CurrentElectricity => None,
        }
    }
}

impl CalculationRequest {
    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::InitialWater => &mut self.initial_water,
            Field::CurrentWater => &mut self.current_water,
            Field::InitialElectricity => &mut self.initial_electricity,
            Field::CurrentElectricity => &mut self.current_electricity,
            Field::WaterRate => &mut self.water_rate,
            Field::SewageRate => &mut self.sewage_rate,
            Field::ElectricityRate => &mut self.electricity_rate,
        }
    }
}

/// Fills a [`CalculationRequest`] from given values, stored prefills and,
/// when interactive, line prompts.
pub struct Form {
    snapshot: SettingsSnapshot,
    interactive: bool,
}

impl Form {
    pub fn new(snapshot: SettingsSnapshot, interactive: bool) -> Self {
        Self {
            snapshot,
            interactive,
        }
    }

    /// Build a request. Values in `provided` win; other fields are prompted
    /// for (interactive) or taken from the prefill. An empty answer or end
    /// of input keeps the prefill, and a field with neither stays empty.
    pub fn fill<R: BufRead, W: Write>(
        &self,
        provided: &BTreeMap<Field, String>,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<CalculationRequest> {
        let mut request = CalculationRequest::default();

        for field in Field::ALL {
            let value = match provided.get(&field) {
                Some(value) => value.clone(),
                None => {
                    let prefill = field.prefill(&self.snapshot).map(|v| v.to_string());
                    if self.interactive {
                        self.prompt(field, prefill, input, output)?
                    } else {
                        prefill.unwrap_or_default()
                    }
                }
            };
            *request.field_mut(field) = value;
        }

        Ok(request)
    }

    fn prompt<R: BufRead, W: Write>(
        &self,
        field: Field,
        prefill: Option<String>,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<String> {
        match &prefill {
            Some(default) => write!(output, "{} [{}]: ", field.label(), default)?,
            None => write!(output, "{}: ", field.label())?,
        }
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;
        let answer = line.trim();

        if answer.is_empty() {
            Ok(prefill.unwrap_or_default())
        } else {
            Ok(answer.to_string())
        }
    }
}
