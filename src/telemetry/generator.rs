use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::numeric::round3;
use crate::telemetry::types::{GenerationParams, Scenario, TelemetrySample};

/// Build the per-call random stream.
///
/// A given seed yields the same ChaCha8 sequence on every platform.
/// The signed seed is reinterpreted bit-for-bit.
pub fn seeded_rng(seed: i64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed as u64)
}

/// Centered uniform draw in [-0.5, 0.5).
fn jitter<R: Rng>(rng: &mut R) -> f64 {
    rng.gen::<f64>() - 0.5
}

fn base_speed<R: Rng>(scenario: Scenario, t: u32, rng: &mut R) -> f64 {
    match scenario {
        Scenario::Urban => {
            let speed = 30.0 + 20.0 * jitter(rng);
            // stop-and-go, alternating every 5 minutes
            if (t / 5) % 2 == 0 {
                speed * 0.3
            } else {
                speed
            }
        }
        Scenario::Highway => 100.0 + 10.0 * jitter(rng),
        Scenario::Mixed => 60.0 + 30.0 * jitter(rng),
    }
}

/// Synthesize one minute. Draws exactly four values, in field order.
fn sample_minute<R: Rng>(scenario: Scenario, t: u32, rng: &mut R) -> TelemetrySample {
    let speed = base_speed(scenario, t, rng).max(0.0);
    let temperature = 20.0 + 5.0 * jitter(rng);
    let wind = 5.0 * jitter(rng);
    let elapsed = t as f64;
    let soc = (100.0 - 0.05 * elapsed + 0.01 * jitter(rng) * elapsed / 10.0).max(0.0);

    TelemetrySample {
        t,
        speed_kmh: round3(speed),
        temperature_c: round3(temperature),
        wind_kmh: round3(wind),
        soc_percent: round3(soc),
    }
}

/// Generate `minutes` samples for `t = 0..minutes`.
///
/// Identical parameters always produce an identical series.
pub fn generate(params: &GenerationParams) -> Vec<TelemetrySample> {
    let mut rng = seeded_rng(params.seed);
    (0..params.minutes)
        .map(|t| sample_minute(params.scenario, t, &mut rng))
        .collect()
}
