use serde::{Deserialize, Serialize};

use super::constants::{G, LBF, N};

/// 힘(중량) 단위. 내부 기준은 뉴턴이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    KiloNewton,
    PoundForce,
    /// 표준 중력 대신 계산에 쓰는 g(9.81)를 곱한 kgf
    KilogramForce,
}

fn to_newton(value: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => value * N,
        ForceUnit::KiloNewton => value * 1000.0 * N,
        ForceUnit::PoundForce => value * LBF,
        ForceUnit::KilogramForce => value * G,
    }
}

fn from_newton(value: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => value / N,
        ForceUnit::KiloNewton => value / (1000.0 * N),
        ForceUnit::PoundForce => value / LBF,
        ForceUnit::KilogramForce => value / G,
    }
}

/// 힘을 변환한다.
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    let base = to_newton(value, from);
    from_newton(base, to)
}
