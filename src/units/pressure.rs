use serde::{Deserialize, Serialize};

use super::constants::{FT2, G, LBF, M2, N};

/// 압력 단위. 동압과 익면하중(중량/면적)에 함께 쓴다. 내부 기준은 Pa(N/m²)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    /// lbf/ft²
    PoundPerSquareFoot,
    /// kgf/m² (g = 9.81)
    KilogramForcePerSquareMeter,
}

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value * N / M2,
        PressureUnit::KiloPascal => value * 1000.0 * N / M2,
        PressureUnit::PoundPerSquareFoot => value * (LBF / FT2),
        PressureUnit::KilogramForcePerSquareMeter => value * G / M2,
    }
}

fn from_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value * M2 / N,
        PressureUnit::KiloPascal => value * M2 / (1000.0 * N),
        PressureUnit::PoundPerSquareFoot => value / (LBF / FT2),
        PressureUnit::KilogramForcePerSquareMeter => value * M2 / G,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
