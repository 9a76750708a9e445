use crate::core::Field;
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "utilcalc")]
#[command(version, about = "Water and electricity bill calculator")]
pub struct Cli {
    /// Water meter reading at the start of the period (m³)
    #[arg(long, value_name = "M3", allow_hyphen_values = true)]
    pub initial_water: Option<String>,

    /// Water meter reading now (m³)
    #[arg(long, value_name = "M3", allow_hyphen_values = true)]
    pub current_water: Option<String>,

    /// Electricity meter reading at the start of the period (kWh)
    #[arg(long, value_name = "KWH", allow_hyphen_values = true)]
    pub initial_electricity: Option<String>,

    /// Electricity meter reading now (kWh)
    #[arg(long, value_name = "KWH", allow_hyphen_values = true)]
    pub current_electricity: Option<String>,

    /// Water tariff per m³
    #[arg(long, value_name = "RATE", allow_hyphen_values = true)]
    pub water_rate: Option<String>,

    /// Sewage tariff per m³ of water consumed
    #[arg(long, value_name = "RATE", allow_hyphen_values = true)]
    pub sewage_rate: Option<String>,

    /// Electricity tariff per kWh
    #[arg(long, value_name = "RATE", allow_hyphen_values = true)]
    pub electricity_rate: Option<String>,

    /// Settings file (default: $UTILCALC_SETTINGS or ./utility_settings.json)
    #[arg(short = 's', long = "settings", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Never prompt; missing values come from the saved settings
    #[arg(short = 'n', long = "no-input")]
    pub no_input: bool,

    /// Print the result as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Print the saved settings
    #[arg(long = "print")]
    pub print: bool,

    /// Check the settings file
    #[arg(long = "check")]
    pub check: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Field values given on the command line
    pub fn provided_fields(&self) -> BTreeMap<Field, String> {
        let values = [
            (Field::InitialWater, &self.initial_water),
            (Field::CurrentWater, &self.current_water),
            (Field::InitialElectricity, &self.initial_electricity),
            (Field::CurrentElectricity, &self.current_electricity),
            (Field::WaterRate, &self.water_rate),
            (Field::SewageRate, &self.sewage_rate),
            (Field::ElectricityRate, &self.electricity_rate),
        ];

        values
            .into_iter()
            .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
            .collect()
    }
}
