//! 초경량 비행장치 규정/설계 요구조건 표.
//!
//! 모든 값은 기준 단위(N, m/s, m³, kg/m³)로 저장한다. 계산기는 이 값을 상한/하한으로
//! 강제하지 않으며, 보고서에 나란히 표시해 검토자가 판단하도록 한다.

use crate::units::constants::{FUEL_DENSITY, GAL, KNOTS, LBF};

/// 규정 및 설계 요구조건.
#[derive(Debug, Clone, PartialEq)]
pub struct Requirements {
    /// 동력 형상 최대 자체중량 [N]
    pub weight_empty_max_powered: f64,
    /// 활공 형상 최대 자체중량 [N]
    pub weight_empty_max_glider: f64,
    /// 수평비행 최대 속도 [m/s]
    pub airspeed_max: f64,
    /// 착륙 형상 최대 실속속도 [m/s]
    pub stall_speed_max: f64,
    /// 안전계수(극한하중/제한하중)
    pub fos: f64,
    /// 최대 하중배수 [g]
    pub max_load_g: f64,
    /// 조종사 최소 체중 [N]
    pub pilot_weight_min: f64,
    /// 조종사 최대 체중 [N]
    pub pilot_weight_max: f64,
    /// 연료 탑재량 [m³]
    pub fuel_capacity: f64,
    /// 연료 밀도 [kg/m³]
    pub fuel_density: f64,
}

impl Requirements {
    /// 미국 FAR Part 103 초경량 기준값.
    pub fn ultralight() -> Self {
        Self {
            weight_empty_max_powered: 254.0 * LBF,
            weight_empty_max_glider: 155.0 * LBF,
            airspeed_max: 55.0 * KNOTS,
            stall_speed_max: 24.0 * KNOTS,
            fos: 1.5,
            max_load_g: 4.0,
            pilot_weight_min: 150.0 * LBF,
            pilot_weight_max: 250.0 * LBF,
            fuel_capacity: 5.0 * GAL,
            fuel_density: FUEL_DENSITY,
        }
    }

    /// 연료 질량 [kg] = 탑재량 × 밀도
    pub fn fuel_mass(&self) -> f64 {
        self.fuel_capacity * self.fuel_density
    }
}

impl Default for Requirements {
    fn default() -> Self {
        Self::ultralight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fuel_mass_is_five_gallons_of_gasoline() {
        let req = Requirements::ultralight();
        assert_relative_eq!(req.fuel_mass(), 14.763155040134095, max_relative = 1e-12);
    }

    #[test]
    fn stored_in_base_units() {
        let req = Requirements::default();
        assert_relative_eq!(req.weight_empty_max_powered / LBF, 254.0, max_relative = 1e-12);
        assert_relative_eq!(req.airspeed_max, 28.29442, max_relative = 1e-12);
        assert!(req.pilot_weight_min < req.pilot_weight_max);
        assert!(req.weight_empty_max_glider < req.weight_empty_max_powered);
    }
}
