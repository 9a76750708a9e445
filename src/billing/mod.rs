pub mod calculator;
pub mod types;
pub mod validator;

pub use calculator::compute;
pub use types::{CalculationResult, MeterReadings, TariffRates};
pub use validator::validate;
