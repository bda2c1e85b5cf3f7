use serde::{Deserialize, Serialize};

use super::constants::{FT3, GAL, M3};

/// 체적 단위. 내부 기준은 입방미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    CubicFoot,
    /// 미국 갤런
    Gallon,
}

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value * M3,
        VolumeUnit::Liter => value * M3 / 1000.0,
        VolumeUnit::CubicFoot => value * FT3,
        VolumeUnit::Gallon => value * GAL,
    }
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value / M3,
        VolumeUnit::Liter => value * 1000.0 / M3,
        VolumeUnit::CubicFoot => value / FT3,
        VolumeUnit::Gallon => value / GAL,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}
