use serde::{Deserialize, Serialize};

use super::constants::{FT, M};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Centimeter,
    Inch,
    Foot,
}

fn to_meter(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value * M,
        LengthUnit::Millimeter => value * M / 1000.0,
        LengthUnit::Centimeter => value * M / 100.0,
        LengthUnit::Inch => value * FT / 12.0,
        LengthUnit::Foot => value * FT,
    }
}

fn from_meter(value_m: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Meter => value_m / M,
        LengthUnit::Millimeter => value_m * 1000.0 / M,
        LengthUnit::Centimeter => value_m * 100.0 / M,
        LengthUnit::Inch => value_m * 12.0 / FT,
        LengthUnit::Foot => value_m / FT,
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    let m = to_meter(value, from);
    from_meter(m, to)
}
