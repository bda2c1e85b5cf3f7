//! 초경량 비행장치 1차 개념 사이징.
//!
//! 실속속도 재설정 → 총중량/필요동력 고정점 → 익면하중/주익 면적 순으로 계산한다.
//! 입력이 같으면 결과도 비트 단위로 같다.

pub mod power;
pub mod stall;
pub mod wing;

use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::quantity::DimensionMismatch;
use crate::requirements::Requirements;
use crate::units::constants::{G, KNOTS, LBF, RHO};

pub use power::{FixedPoint, Iteration, PowerLoadingModel, PropulsionCandidate};
pub use stall::{ReferenceAirframe, StallRefinement};
pub use wing::WingSizing;

/// 사이징 계산 중 발생 가능한 오류. 모두 입력 전제조건 위반이며 계산을 중단한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("{quantity} 값은 0보다 커야 합니다 (입력값 {value})")]
    NonPositive { quantity: &'static str, value: f64 },
    #[error("{quantity}: 음수의 제곱근은 계산할 수 없습니다 (피개방수 {value})")]
    NegativeRadicand { quantity: &'static str, value: f64 },
    #[error("{quantity} 값이 0이라 나눌 수 없습니다")]
    DivisionByZero { quantity: &'static str },
    #[error("추진계 후보 목록이 비어 있습니다")]
    NoCandidates,
}

impl SizingError {
    pub(crate) fn require_positive(quantity: &'static str, value: f64) -> Result<(), SizingError> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(SizingError::NonPositive { quantity, value })
        }
    }
}

/// 계산은 계속하되 검토자에게 알려야 하는 사항.
#[derive(Debug, Clone, PartialEq)]
pub enum SizingWarning {
    /// 합산식에 차원이 다른 항이 섞여 있음. 값은 원래 식대로 더했다.
    DimensionMismatch {
        formula: &'static str,
        term: String,
        mismatch: DimensionMismatch,
    },
    /// 후보를 모두 대입했지만 필요동력 변화가 허용오차보다 큼
    NotConverged { last_delta_hp: f64, tolerance_hp: f64 },
    /// 재설정한 실속속도가 규정 상한을 넘음
    StallSpeedAboveLimit { refined: f64, limit: f64 },
}

impl SizingWarning {
    /// 차원 불일치 경고라면 문제가 된 항 이름.
    pub fn term(&self) -> Option<&str> {
        match self {
            SizingWarning::DimensionMismatch { term, .. } => Some(term),
            _ => None,
        }
    }
}

impl fmt::Display for SizingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingWarning::DimensionMismatch {
                formula,
                term,
                mismatch,
            } => write!(f, "{formula}: `{term}` 항 ({mismatch})"),
            SizingWarning::NotConverged {
                last_delta_hp,
                tolerance_hp,
            } => write!(
                f,
                "필요동력이 수렴하지 않았습니다 (마지막 변화 {last_delta_hp:.3} hp, 허용 {tolerance_hp} hp)"
            ),
            SizingWarning::StallSpeedAboveLimit { refined, limit } => write!(
                f,
                "설계 실속속도 {:.2} kt가 규정 상한 {:.2} kt를 넘습니다",
                refined / KNOTS,
                limit / KNOTS
            ),
        }
    }
}

/// 환경 상수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// 중력가속도 [m/s²]
    pub g: f64,
    /// 공기 밀도 [kg/m³]
    pub rho: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self { g: G, rho: RHO }
    }
}

/// 사이징 입력 전체.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingInput {
    pub requirements: Requirements,
    pub environment: Environment,
    pub reference: ReferenceAirframe,
    pub power_loading: PowerLoadingModel,
    /// 주익 양력계수
    pub wing_cl: f64,
    pub candidates: Vec<PropulsionCandidate>,
    /// 연속된 필요동력 추정치의 허용 차이 [hp]
    pub power_tolerance_hp: f64,
}

impl Default for SizingInput {
    fn default() -> Self {
        Self {
            requirements: Requirements::ultralight(),
            environment: Environment::default(),
            reference: ReferenceAirframe::goat(),
            power_loading: PowerLoadingModel::default(),
            wing_cl: 1.4,
            candidates: PropulsionCandidate::default_menu(),
            power_tolerance_hp: 2.0,
        }
    }
}

/// 구조 하중 [N].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralLoads {
    /// 최대 하중배수 × 총중량
    pub limit_load: f64,
    /// 안전계수 × 제한하중
    pub ultimate_load: f64,
}

/// 사이징 결과 보고서.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingReport {
    pub requirements: Requirements,
    pub reference_name: String,
    pub stall: StallRefinement,
    pub fixed_point: FixedPoint,
    pub wing: WingSizing,
    pub loads: StructuralLoads,
    pub warnings: Vec<SizingWarning>,
}

impl SizingReport {
    /// 수렴한 총중량 [N]
    pub fn gross_takeoff_weight(&self) -> f64 {
        self.fixed_point.gross_takeoff_weight()
    }

    /// 수렴한 필요동력 [hp]
    pub fn power_hp(&self) -> f64 {
        self.fixed_point.power_hp()
    }
}

/// 전체 사이징을 수행한다.
pub fn run_sizing(input: &SizingInput) -> Result<SizingReport, SizingError> {
    let req = &input.requirements;
    let env = &input.environment;

    let stall = stall::refine_stall_speed(&input.reference, env.rho)?;
    let mut warnings = Vec::new();
    if stall.stall_speed_max > req.stall_speed_max {
        warnings.push(SizingWarning::StallSpeedAboveLimit {
            refined: stall.stall_speed_max,
            limit: req.stall_speed_max,
        });
    }

    let fixed_point = power::converge(
        req,
        env,
        &input.power_loading,
        &input.candidates,
        input.power_tolerance_hp,
    )?;
    warnings.extend(fixed_point.warnings.iter().cloned());

    let gtow = fixed_point.gross_takeoff_weight();
    let wing = wing::size_wing(gtow, stall.stall_speed_max, env.rho, input.wing_cl)?;

    let limit_load = req.max_load_g * gtow;
    let loads = StructuralLoads {
        limit_load,
        ultimate_load: req.fos * limit_load,
    };

    for w in warnings.iter() {
        warn!("{w}");
    }
    info!(
        gross_takeoff_weight_lbf = gtow / LBF,
        power_hp = fixed_point.power_hp(),
        wing_area_m2 = wing.wing_area,
        converged = fixed_point.converged,
        "sizing complete"
    );

    Ok(SizingReport {
        requirements: req.clone(),
        reference_name: input.reference.name.clone(),
        stall,
        fixed_point,
        wing,
        loads,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_bit_identical() {
        let input = SizingInput::default();
        let a = run_sizing(&input).expect("sizing run");
        let b = run_sizing(&input).expect("sizing run");
        assert_eq!(a, b);
        assert_eq!(a.power_hp().to_bits(), b.power_hp().to_bits());
    }

    #[test]
    fn structural_loads_follow_gross_weight() {
        let r = run_sizing(&SizingInput::default()).expect("sizing run");
        assert_eq!(r.loads.limit_load, 4.0 * r.gross_takeoff_weight());
        assert_eq!(r.loads.ultimate_load, 1.5 * r.loads.limit_load);
    }

    #[test]
    fn stall_limit_warning_when_reference_is_heavy() {
        let input = SizingInput {
            reference: ReferenceAirframe {
                empty_weight: 600.0 * LBF,
                ..ReferenceAirframe::goat()
            },
            ..SizingInput::default()
        };
        let r = run_sizing(&input).expect("sizing run");
        assert!(r
            .warnings
            .iter()
            .any(|w| matches!(w, SizingWarning::StallSpeedAboveLimit { .. })));
    }

    #[test]
    fn not_converged_is_reported_once() {
        let input = SizingInput {
            power_tolerance_hp: 0.5,
            ..SizingInput::default()
        };
        let r = run_sizing(&input).expect("sizing run");
        let count = r
            .warnings
            .iter()
            .filter(|w| matches!(w, SizingWarning::NotConverged { .. }))
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn error_names_the_quantity() {
        let input = SizingInput {
            environment: Environment { g: G, rho: 0.0 },
            ..SizingInput::default()
        };
        let err = run_sizing(&input).expect_err("sizing run should fail");
        assert_eq!(err.to_string(), "rho 값은 0보다 커야 합니다 (입력값 0)");
    }
}
