//! 기준 기체의 익면하중과 최대 양력계수로부터 설계 실속속도를 다시 잡는다.
//!
//! 규정 상한(24 kt)을 그대로 쓰지 않고, 활공/사면활공 성능이 검증된 기체의
//! 실속속도에 여유율을 곱해 이후 익면하중 계산에 사용한다.

use tracing::debug;

use super::SizingError;
use crate::units::constants::{FT2, LBF};

/// 실속속도 재설정에 쓰는 기준 기체 제원.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceAirframe {
    pub name: String,
    /// 기체 자체중량 [N]
    pub empty_weight: f64,
    /// 조종사 체중 [N]
    pub pilot_weight: f64,
    /// 주익 면적 [m²]
    pub wing_area: f64,
    /// 최대 양력계수 (AC 103-7 Appendix 2)
    pub cl_max: f64,
    /// 계산된 실속속도에 곱하는 여유율
    pub margin: f64,
}

impl ReferenceAirframe {
    /// Goat 1 설계도면 기준값.
    pub fn goat() -> Self {
        Self {
            name: "Goat 1".to_string(),
            empty_weight: 140.0 * LBF,
            pilot_weight: 170.0 * LBF,
            wing_area: 174.0 * FT2,
            cl_max: 1.6,
            margin: 1.12,
        }
    }
}

impl Default for ReferenceAirframe {
    fn default() -> Self {
        Self::goat()
    }
}

/// 실속속도 재설정 결과. 모든 값은 기준 단위.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StallRefinement {
    /// 기준 기체 총중량 [N]
    pub weight: f64,
    /// 기준 기체 익면하중 [N/m²]
    pub wing_loading: f64,
    /// 실속 시 동압 [Pa]
    pub q: f64,
    /// 기준 기체 실속속도 [m/s]
    pub v_stall: f64,
    /// 여유율을 곱한 설계 실속속도 [m/s]
    pub stall_speed_max: f64,
}

/// 동압 관계식 q = ½ρv²를 역산해 기준 기체의 실속속도를 구하고 여유율을 곱한다.
pub fn refine_stall_speed(
    reference: &ReferenceAirframe,
    rho: f64,
) -> Result<StallRefinement, SizingError> {
    SizingError::require_positive("reference_wing_area", reference.wing_area)?;
    SizingError::require_positive("reference_cl_max", reference.cl_max)?;
    SizingError::require_positive("reference_margin", reference.margin)?;
    SizingError::require_positive("rho", rho)?;

    let weight = reference.empty_weight + reference.pilot_weight;
    let wing_loading = weight / reference.wing_area;
    let q = wing_loading / reference.cl_max;
    let radicand = q / 0.5 / rho;
    if radicand < 0.0 || radicand.is_nan() {
        return Err(SizingError::NegativeRadicand {
            quantity: "reference_v_stall",
            value: radicand,
        });
    }
    let v_stall = radicand.sqrt();
    let stall_speed_max = v_stall * reference.margin;
    debug!(
        reference = %reference.name,
        wing_loading,
        q,
        v_stall,
        stall_speed_max,
        "refined stall speed from reference airframe"
    );

    Ok(StallRefinement {
        weight,
        wing_loading,
        q,
        v_stall,
        stall_speed_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::constants::{KNOTS, RHO};
    use approx::assert_relative_eq;

    #[test]
    fn goat_reference_gives_about_twenty_knots() {
        let s = refine_stall_speed(&ReferenceAirframe::goat(), RHO).expect("stall refinement");
        assert_relative_eq!(s.weight / LBF, 310.0, max_relative = 1e-12);
        assert_relative_eq!(s.v_stall, 9.329778892628367, max_relative = 1e-9);
        assert_relative_eq!(s.stall_speed_max / KNOTS, 20.311933582165935, max_relative = 1e-9);
    }

    #[test]
    fn stall_speed_satisfies_dynamic_pressure_identity() {
        let s = refine_stall_speed(&ReferenceAirframe::goat(), RHO).expect("stall refinement");
        assert_relative_eq!(0.5 * RHO * s.v_stall * s.v_stall, s.q, max_relative = 1e-12);
        assert_relative_eq!(s.q, s.wing_loading / 1.6, max_relative = 1e-12);
        assert_eq!(s.stall_speed_max, 1.12 * s.v_stall);
    }

    #[test]
    fn zero_lift_coefficient_is_rejected() {
        let reference = ReferenceAirframe {
            cl_max: 0.0,
            ..ReferenceAirframe::goat()
        };
        let err = refine_stall_speed(&reference, RHO).expect_err("stall refinement should fail");
        assert_eq!(
            err,
            SizingError::NonPositive {
                quantity: "reference_cl_max",
                value: 0.0
            }
        );
    }

    #[test]
    fn negative_wing_area_is_rejected() {
        let reference = ReferenceAirframe {
            wing_area: -1.0,
            ..ReferenceAirframe::goat()
        };
        assert!(matches!(
            refine_stall_speed(&reference, RHO),
            Err(SizingError::NonPositive {
                quantity: "reference_wing_area",
                ..
            })
        ));
    }

    #[test]
    fn non_positive_margin_is_rejected() {
        for margin in [0.0, -1.12] {
            let reference = ReferenceAirframe {
                margin,
                ..ReferenceAirframe::goat()
            };
            let err = refine_stall_speed(&reference, RHO).expect_err("margin must be positive");
            assert_eq!(
                err,
                SizingError::NonPositive {
                    quantity: "reference_margin",
                    value: margin
                }
            );
        }
    }

    #[test]
    fn negative_weight_hits_the_square_root() {
        let reference = ReferenceAirframe {
            empty_weight: -400.0 * LBF,
            ..ReferenceAirframe::goat()
        };
        assert!(matches!(
            refine_stall_speed(&reference, RHO),
            Err(SizingError::NegativeRadicand { .. })
        ));
    }
}
