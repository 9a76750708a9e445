use crate::billing::{CalculationResult, MeterReadings, TariffRates};

/// Cost of the consumption between two readings at a flat rate
pub fn calculate_cost(initial_reading: f64, current_reading: f64, rate: f64) -> f64 {
    (current_reading - initial_reading) * rate
}

/// Compute usage and cost figures for already validated input
pub fn compute(readings: &MeterReadings, rates: &TariffRates) -> CalculationResult {
    let water_cost = calculate_cost(
        readings.initial_water,
        readings.current_water,
        rates.combined_water_rate(),
    );
    let electricity_cost = calculate_cost(
        readings.initial_electricity,
        readings.current_electricity,
        rates.electricity_rate,
    );

    CalculationResult::new(
        readings.water_usage(),
        water_cost,
        readings.electricity_usage(),
        electricity_cost,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (MeterReadings, TariffRates) {
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
    fn test_water_cost_includes_sewage() {
        let (readings, rates) = sample();
        let result = compute(&readings, &rates);
        assert_eq!(result.water_usage(), 5.0);
        assert_eq!(result.water_cost(), 250.0);
    }

    #[test]
    fn test_electricity_cost() {
        let (readings, rates) = sample();
        let result = compute(&readings, &rates);
        assert_eq!(result.electricity_usage(), 50.0);
        assert_eq!(result.electricity_cost(), 275.0);
    }

    #[test]
    fn test_total_cost() {
        let (readings, rates) = sample();
        let result = compute(&readings, &rates);
        assert_eq!(result.total_cost(), 525.0);
    }

    #[test]
    fn test_total_is_exact_sum() {
        let readings = MeterReadings {
            initial_water: 12.345,
            current_water: 19.871,
            initial_electricity: 1024.7,
            current_electricity: 1180.13,
        };
        let rates = TariffRates {
            water_rate: 41.3,
            sewage_rate: 33.07,
            electricity_rate: 6.43,
        };
        let result = compute(&readings, &rates);

        assert_eq!(
            result.total_cost(),
            result.water_cost() + result.electricity_cost()
        );
        assert!(result.water_cost() >= 0.0);
        assert!(result.electricity_cost() >= 0.0);
        // (19.871 - 12.345) * 74.37 = 559.70862
        assert!((result.water_cost() - 559.70862).abs() < 1e-6);
    }

    #[test]
    fn test_zero_usage() {
        let (mut readings, rates) = sample();
        readings.current_water = readings.initial_water;
        readings.current_electricity = readings.initial_electricity;
        let result = compute(&readings, &rates);
        assert_eq!(result.total_cost(), 0.0);
    }

    #[test]
    fn test_calculate_cost() {
        assert_eq!(calculate_cost(10.0, 14.0, 2.5), 10.0);
        assert_eq!(calculate_cost(3.0, 3.0, 100.0), 0.0);
    }
}
