use crate::billing::{compute, MeterReadings, TariffRates};
use crate::error::ValidationError;

/// Check readings and tariffs before any cost is computed.
///
/// Negativity is checked first, so an input that is both negative and
/// regressing always reports [`ValidationError::Negative`]. Inputs whose
/// costs would not fit in an `f64` are rejected last.
pub fn validate(readings: &MeterReadings, rates: &TariffRates) -> Result<(), ValidationError> {
    let fields = [
        readings.initial_water,
        readings.current_water,
        readings.initial_electricity,
        readings.current_electricity,
        rates.water_rate,
        rates.sewage_rate,
        rates.electricity_rate,
    ];

    if fields.iter().any(|value| *value < 0.0) {
        return Err(ValidationError::Negative);
    }

    if readings.current_water < readings.initial_water
        || readings.current_electricity < readings.initial_electricity
    {
        return Err(ValidationError::Regression);
    }

    if !rates.combined_water_rate().is_finite() || !compute(readings, rates).is_finite() {
        return Err(ValidationError::Overflow);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> (MeterReadings, TariffRates) {
        (
            MeterReadings {
                initial_water: 100.0,
                current_water: 105.0,
                initial_electricity: 200.0,
                current_electricity: 250.0,
            },
            TariffRates {
                water_rate: 30.0,
                sewage_rate: 20.0,
                electricity_rate: 5.5,
            },
        )
    }

    #[test]
    fn test_valid_input_passes() {
        let (readings, rates) = valid_input();
        assert_eq!(validate(&readings, &rates), Ok(()));
    }

    #[test]
    fn test_equal_readings_pass() {
        let (mut readings, rates) = valid_input();
        readings.current_water = readings.initial_water;
        readings.current_electricity = readings.initial_electricity;
        assert_eq!(validate(&readings, &rates), Ok(()));
    }

    #[test]
    fn test_each_negative_field_fails() {
        for index in 0..7 {
            let (mut readings, mut rates) = valid_input();
            let field = match index {
                0 => &mut readings.initial_water,
                1 => &mut readings.current_water,
                2 => &mut readings.initial_electricity,
                3 => &mut readings.current_electricity,
                4 => &mut rates.water_rate,
                5 => &mut rates.sewage_rate,
                _ => &mut rates.electricity_rate,
            };
            *field = -1.0;
            assert_eq!(
                validate(&readings, &rates),
                Err(ValidationError::Negative),
                "field {} should be rejected",
                index
            );
        }
    }

    #[test]
    fn test_negative_reported_before_regression() {
        let (mut readings, rates) = valid_input();
        readings.initial_water = 10.0;
        readings.current_water = -5.0;
        assert_eq!(validate(&readings, &rates), Err(ValidationError::Negative));
    }

    #[test]
    fn test_water_regression() {
        let (mut readings, rates) = valid_input();
        readings.initial_water = 10.0;
        readings.current_water = 5.0;
        assert_eq!(validate(&readings, &rates), Err(ValidationError::Regression));
    }

    #[test]
    fn test_electricity_regression() {
        let (mut readings, rates) = valid_input();
        readings.current_electricity = 199.9;
        assert_eq!(validate(&readings, &rates), Err(ValidationError::Regression));
    }

    #[test]
    fn test_huge_rates_with_zero_usage_overflow() {
        let (mut readings, mut rates) = valid_input();
        readings.current_water = readings.initial_water;
        rates.water_rate = 1e308;
        rates.sewage_rate = 1e308;
        assert_eq!(validate(&readings, &rates), Err(ValidationError::Overflow));
    }

    #[test]
    fn test_huge_cost_overflow() {
        let (mut readings, mut rates) = valid_input();
        readings.current_electricity = 1e308;
        rates.electricity_rate = 10.0;
        assert_eq!(validate(&readings, &rates), Err(ValidationError::Overflow));

        // Each cost fits, but their sum does not
        let (mut readings, mut rates) = valid_input();
        readings.initial_water = 0.0;
        readings.current_water = 1.0;
        rates.water_rate = 1e308;
        rates.sewage_rate = 0.0;
        readings.initial_electricity = 0.0;
        readings.current_electricity = 1.0;
        rates.electricity_rate = 1e308;
        assert_eq!(validate(&readings, &rates), Err(ValidationError::Overflow));
    }

    #[test]
    fn test_negative_reported_before_overflow() {
        let (mut readings, mut rates) = valid_input();
        rates.water_rate = 1e308;
        rates.sewage_rate = 1e308;
        readings.initial_electricity = -1.0;
        assert_eq!(validate(&readings, &rates), Err(ValidationError::Negative));
    }

    #[test]
    fn test_large_but_finite_values_pass() {
        let (mut readings, mut rates) = valid_input();
        readings.current_water = 1e150;
        rates.water_rate = 1e150;
        assert_eq!(validate(&readings, &rates), Ok(()));
    }

    #[test]
    fn test_zero_values_pass() {
        let readings = MeterReadings::default();
        let rates = TariffRates::default();
        assert_eq!(validate(&readings, &rates), Ok(()));
    }
}
