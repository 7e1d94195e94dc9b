use crate::estimation::types::{
    Assumptions, RangeEstimate, RangeEstimateRequest, TelemetryReading, VehicleSpec,
};
use crate::numeric::{clamp, round3};

const NOMINAL_EFFICIENCY_KM_PER_KWH: f64 = 6.0;
const MIN_EFFICIENCY: f64 = 2.0;
const MAX_EFFICIENCY: f64 = 9.0;

/// Energy available above the reserve buffer, in kWh.
pub fn usable_energy_kwh(vehicle: &VehicleSpec, soc_percent: f64) -> f64 {
    let usable =
        vehicle.battery_kwh * (soc_percent * 0.01) * (1.0 - vehicle.reserve_percent * 0.01);
    usable.max(0.0)
}

/// Adjust the nominal efficiency for speed, ambient temperature and wind.
///
/// - above 90 km/h: -0.02 per km/h over; below 50 km/h: +0.01 per km/h under
/// - -0.02 per degree away from 20 C
/// - headwind -0.01 per km/h, tailwind +0.005 per km/h
pub fn efficiency_km_per_kwh(speed_kmh: f64, temperature_c: f64, wind_kmh: f64) -> f64 {
    let mut eff = NOMINAL_EFFICIENCY_KM_PER_KWH;

    if speed_kmh > 90.0 {
        eff -= 0.02 * (speed_kmh - 90.0);
    } else if speed_kmh < 50.0 {
        eff += 0.01 * (50.0 - speed_kmh);
    }

    eff -= 0.02 * (temperature_c - 20.0).abs();

    if wind_kmh >= 0.0 {
        eff -= 0.01 * wind_kmh;
    } else {
        eff += 0.005 * wind_kmh.abs();
    }

    clamp(eff, MIN_EFFICIENCY, MAX_EFFICIENCY)
}

pub fn estimate_range(req: &RangeEstimateRequest) -> RangeEstimate {
    let TelemetryReading {
        speed_kmh,
        temperature_c,
        wind_kmh,
        soc_percent,
    } = req.telemetry;

    let usable_kwh = usable_energy_kwh(&req.vehicle, soc_percent);
    let efficiency = efficiency_km_per_kwh(speed_kmh, temperature_c, wind_kmh);

    RangeEstimate {
        estimated_km: round3(usable_kwh * efficiency),
        assumptions: Assumptions {
            usable_kwh: round3(usable_kwh),
            efficiency_km_per_kwh: round3(efficiency),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> VehicleSpec {
        VehicleSpec {
            make: "Make".into(),
            model: "Model".into(),
            year: 2022,
            battery_kwh: 75.0,
            reserve_percent: 10.0,
        }
    }

    fn request(speed: f64, temp: f64, wind: f64, soc: f64) -> RangeEstimateRequest {
        RangeEstimateRequest {
            vehicle: vehicle(),
            telemetry: TelemetryReading {
                speed_kmh: speed,
                temperature_c: temp,
                wind_kmh: wind,
                soc_percent: soc,
            },
        }
    }

    #[test]
    fn test_nominal_conditions() {
        let est = estimate_range(&request(80.0, 20.0, 0.0, 50.0));
        assert_eq!(est.assumptions.usable_kwh, 33.75);
        assert_eq!(est.assumptions.efficiency_km_per_kwh, 6.0);
        assert_eq!(est.estimated_km, 202.5);
    }

    #[test]
    fn test_zero_soc_gives_zero_range() {
        let est = estimate_range(&request(80.0, 20.0, 0.0, 0.0));
        assert_eq!(est.estimated_km, 0.0);
    }

    #[test]
    fn test_efficiency_adjustments() {
        assert!((efficiency_km_per_kwh(100.0, 20.0, 0.0) - 5.8).abs() < 1e-9);
        assert!((efficiency_km_per_kwh(30.0, 20.0, 0.0) - 6.2).abs() < 1e-9);
        assert!((efficiency_km_per_kwh(70.0, 10.0, 0.0) - 5.8).abs() < 1e-9);
        assert!((efficiency_km_per_kwh(70.0, 20.0, 10.0) - 5.9).abs() < 1e-9);
        assert!((efficiency_km_per_kwh(70.0, 20.0, -10.0) - 6.05).abs() < 1e-9);
    }

    #[test]
    fn test_efficiency_is_clamped() {
        assert_eq!(efficiency_km_per_kwh(300.0, -60.0, 150.0), 2.0);
        assert!((efficiency_km_per_kwh(0.0, 20.0, -150.0) - 7.25).abs() < 1e-9);
    }

    #[test]
    fn test_validation() {
        assert!(request(80.0, 20.0, 0.0, 50.0).validate().is_ok());
        assert_eq!(
            request(301.0, 20.0, 0.0, 50.0).validate().unwrap_err().field,
            "telemetry.speed_kmh"
        );
        let mut req = request(80.0, 20.0, 0.0, 50.0);
        req.vehicle.battery_kwh = 0.0;
        assert_eq!(req.validate().unwrap_err().field, "vehicle.battery_kwh");
        req.vehicle.battery_kwh = 60.0;
        req.vehicle.reserve_percent = 60.0;
        assert_eq!(req.validate().unwrap_err().field, "vehicle.reserve_percent");
    }
}
