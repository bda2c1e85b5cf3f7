use serde::{Deserialize, Serialize};

use super::constants::{FT, KNOTS, M, SEC};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityUnit {
    MeterPerSecond,
    FootPerSecond,
    KilometerPerHour,
    Knot,
}

fn to_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value * M / SEC,
        VelocityUnit::FootPerSecond => value * FT / SEC,
        VelocityUnit::KilometerPerHour => value / 3.6,
        VelocityUnit::Knot => value * KNOTS,
    }
}

fn from_mps(value: f64, unit: VelocityUnit) -> f64 {
    match unit {
        VelocityUnit::MeterPerSecond => value * SEC / M,
        VelocityUnit::FootPerSecond => value * SEC / FT,
        VelocityUnit::KilometerPerHour => value * 3.6,
        VelocityUnit::Knot => value / KNOTS,
    }
}

/// 속도를 변환한다.
pub fn convert_velocity(value: f64, from: VelocityUnit, to: VelocityUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}
