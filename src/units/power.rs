use serde::{Deserialize, Serialize};

use super::constants::HP;

/// 동력 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Horsepower,
}

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::Horsepower => value * HP,
    }
}

fn from_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value / 1000.0,
        PowerUnit::Horsepower => value / HP,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}
