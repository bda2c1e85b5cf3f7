use serde::{Deserialize, Serialize};

use super::constants::{FT3, GAL, LBM, M3};

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KgPerCubicMeter,
    PoundPerCubicFoot,
    PoundPerGallon,
}

fn factor(unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KgPerCubicMeter => 1.0 / M3,
        DensityUnit::PoundPerCubicFoot => LBM / FT3,
        DensityUnit::PoundPerGallon => LBM / GAL,
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    value * factor(from) / factor(to)
}
