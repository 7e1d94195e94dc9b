/// Round to a fixed number of decimal places.
///
/// Negative zero is normalised to `0.0` so serialized output never shows `-0.0`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn round3(value: f64) -> f64 {
    round_to(value, 3)
}

pub fn round6(value: f64) -> f64 {
    round_to(value, 6)
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round3(-2.0004), -2.0);
        assert_eq!(round3(100.0), 100.0);
    }

    #[test]
    fn test_round_normalises_negative_zero() {
        let r = round3(-0.0004);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn test_round6() {
        assert_eq!(round6(0.1234564), 0.123456);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(10.0, 2.0, 9.0), 9.0);
        assert_eq!(clamp(1.0, 2.0, 9.0), 2.0);
        assert_eq!(clamp(5.5, 2.0, 9.0), 5.5);
    }
}
