//! 동력하중 경험식과 총중량-필요동력 고정점 반복.
//!
//! 초기 추정은 동력 형상 최대 자체중량으로 하고, 이후에는 활공 형상 자체중량에
//! 후보 추진계 질량을 더해 필요동력이 수렴할 때까지 후보를 차례로 대입한다.
//! 두 총중량 식은 원래 해석 그대로 계산하되, 차원이 맞지 않는 항은 경고로 남긴다.

use tracing::debug;

use super::{Environment, SizingError, SizingWarning};
use crate::quantity::{Dimension, Quantity};
use crate::requirements::Requirements;
use crate::units::constants::{KNOTS, LBF};

/// 동력하중 [lbf/hp] = coefficient × (V_max / kt)^exponent
///
/// 출처가 확인되지 않은 경험식이라 계수와 지수를 모두 설정값으로 둔다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLoadingModel {
    pub coefficient: f64,
    pub exponent: f64,
}

impl Default for PowerLoadingModel {
    fn default() -> Self {
        Self {
            coefficient: 325.0,
            exponent: -0.75,
        }
    }
}

impl PowerLoadingModel {
    /// 최대 속도 [m/s]에서의 동력하중 [lbf/hp].
    pub fn power_loading(&self, airspeed_max: f64) -> Result<f64, SizingError> {
        SizingError::require_positive("airspeed_max", airspeed_max)?;
        Ok(self.coefficient * (airspeed_max / KNOTS).powf(self.exponent))
    }
}

/// 필요동력 [hp] = 총중량 [lbf] / 동력하중 [lbf/hp]
pub fn required_power(gross_takeoff_weight: f64, power_loading: f64) -> Result<f64, SizingError> {
    if power_loading == 0.0 || !power_loading.is_finite() {
        return Err(SizingError::DivisionByZero {
            quantity: "power_loading",
        });
    }
    Ok(gross_takeoff_weight / LBF / power_loading)
}

/// 추진계 후보. 카탈로그에 따라 중량(lbf) 또는 질량(kg)으로 적혀 있다.
#[derive(Debug, Clone, PartialEq)]
pub struct PropulsionCandidate {
    pub name: String,
    pub mass: Quantity,
}

impl PropulsionCandidate {
    pub fn new(name: &str, mass: Quantity) -> Self {
        Self {
            name: name.to_string(),
            mass,
        }
    }

    /// 기본 후보 목록: Vittorazi Moster 185 (33 lbf), Miniplane Top 80 (2 × 10 kg).
    pub fn default_menu() -> Vec<PropulsionCandidate> {
        vec![
            PropulsionCandidate::new("Vittorazi Moster 185", Quantity::force(33.0 * LBF)),
            PropulsionCandidate::new("Miniplane Top 80", Quantity::mass(2.0 * 10.0)),
        ]
    }
}

/// 총중량 합산 결과. 값은 첫 항의 차원을 따르며, 불일치 항은 경고로 모은다.
#[derive(Debug, Clone, PartialEq)]
pub struct GrossWeight {
    pub value: f64,
    pub warnings: Vec<SizingWarning>,
}

fn literal_sum(formula: &'static str, terms: &[(&str, Quantity)]) -> GrossWeight {
    let mut warnings = Vec::new();
    let mut iter = terms.iter();
    let Some((_, first)) = iter.next() else {
        return GrossWeight {
            value: 0.0,
            warnings,
        };
    };
    let mut total = *first;
    for (name, term) in iter {
        let (sum, mismatch) = total.literal_add(*term);
        if let Some(mismatch) = mismatch {
            warnings.push(SizingWarning::DimensionMismatch {
                formula,
                term: name.to_string(),
                mismatch,
            });
        }
        total = sum;
    }
    GrossWeight {
        value: total.value,
        warnings,
    }
}

/// 초기 총중량 = 동력 형상 최대 자체중량 + 조종사 최대 체중 + 연료 질량 × g
pub fn initial_gross_weight(req: &Requirements, env: &Environment) -> GrossWeight {
    let g = Quantity::new(env.g, Dimension::ACCELERATION);
    let fuel_weight = Quantity::mass(req.fuel_mass()) * g;
    literal_sum(
        "initial_gross_weight",
        &[
            ("weight_empty_max_powered", Quantity::force(req.weight_empty_max_powered)),
            ("pilot_weight_max", Quantity::force(req.pilot_weight_max)),
            ("fuel_mass * g", fuel_weight),
        ],
    )
}

/// 후보 추진계를 단 총중량 = 활공 형상 최대 자체중량 + 조종사 최대 체중 + 연료 질량 + 추진계 질량
///
/// 연료 질량에는 g를 곱하지 않는다.
pub fn gross_weight_with_propulsion(
    req: &Requirements,
    candidate: &PropulsionCandidate,
) -> GrossWeight {
    literal_sum(
        "gross_weight_with_propulsion",
        &[
            ("weight_empty_max_glider", Quantity::force(req.weight_empty_max_glider)),
            ("pilot_weight_max", Quantity::force(req.pilot_weight_max)),
            ("fuel_mass", Quantity::mass(req.fuel_mass())),
            ("propulsion_system_mass", candidate.mass),
        ],
    )
}

/// 초기 추정치.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialEstimate {
    pub gross_takeoff_weight: f64,
    pub power_hp: f64,
}

/// 후보 하나를 대입한 반복 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Iteration {
    pub candidate: String,
    /// 카탈로그 값 그대로의 크기(N 또는 kg)
    pub propulsion_mass: Quantity,
    pub gross_takeoff_weight: f64,
    pub power_hp: f64,
    /// 직전 추정치 대비 필요동력 변화량 [hp]
    pub delta_power_hp: f64,
}

/// 고정점 반복 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPoint {
    pub power_loading: f64,
    pub initial: InitialEstimate,
    pub iterations: Vec<Iteration>,
    pub converged: bool,
    pub tolerance_hp: f64,
    pub warnings: Vec<SizingWarning>,
}

impl FixedPoint {
    /// 마지막 반복(없으면 초기 추정)의 총중량.
    pub fn gross_takeoff_weight(&self) -> f64 {
        self.iterations
            .last()
            .map_or(self.initial.gross_takeoff_weight, |it| it.gross_takeoff_weight)
    }

    pub fn power_hp(&self) -> f64 {
        self.iterations
            .last()
            .map_or(self.initial.power_hp, |it| it.power_hp)
    }
}

/// 후보 추진계를 순서대로 대입하며 연속된 필요동력 추정치의 차이가
/// `tolerance_hp`보다 작아지면 멈춘다. 후보를 다 써도 수렴하지 않으면
/// 마지막 후보 값을 쓰고 미수렴 경고를 남긴다.
pub fn converge(
    req: &Requirements,
    env: &Environment,
    model: &PowerLoadingModel,
    candidates: &[PropulsionCandidate],
    tolerance_hp: f64,
) -> Result<FixedPoint, SizingError> {
    if candidates.is_empty() {
        return Err(SizingError::NoCandidates);
    }
    SizingError::require_positive("power_tolerance", tolerance_hp)?;

    let power_loading = model.power_loading(req.airspeed_max)?;
    let initial_gtow = initial_gross_weight(req, env);
    let initial = InitialEstimate {
        gross_takeoff_weight: initial_gtow.value,
        power_hp: required_power(initial_gtow.value, power_loading)?,
    };
    debug!(
        power_loading,
        gross_takeoff_weight_lbf = initial.gross_takeoff_weight / LBF,
        power_hp = initial.power_hp,
        "initial estimate"
    );

    let mut warnings = initial_gtow.warnings;
    let mut iterations = Vec::with_capacity(candidates.len());
    let mut previous = initial.power_hp;
    let mut converged = false;
    for candidate in candidates {
        let gtow = gross_weight_with_propulsion(req, candidate);
        let power_hp = required_power(gtow.value, power_loading)?;
        let delta_power_hp = (power_hp - previous).abs();
        debug!(
            candidate = %candidate.name,
            gross_takeoff_weight_lbf = gtow.value / LBF,
            power_hp,
            delta_power_hp,
            "propulsion candidate"
        );
        warnings.extend(gtow.warnings);
        iterations.push(Iteration {
            candidate: candidate.name.clone(),
            propulsion_mass: candidate.mass,
            gross_takeoff_weight: gtow.value,
            power_hp,
            delta_power_hp,
        });
        previous = power_hp;
        if delta_power_hp < tolerance_hp {
            converged = true;
            break;
        }
    }

    if !converged {
        let last_delta_hp = iterations.last().map_or(f64::NAN, |it| it.delta_power_hp);
        warnings.push(SizingWarning::NotConverged {
            last_delta_hp,
            tolerance_hp,
        });
    }

    Ok(FixedPoint {
        power_loading,
        initial,
        iterations,
        converged,
        tolerance_hp,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn default_fixed_point(tolerance_hp: f64) -> FixedPoint {
        converge(
            &Requirements::ultralight(),
            &Environment::default(),
            &PowerLoadingModel::default(),
            &PropulsionCandidate::default_menu(),
            tolerance_hp,
        )
        .expect("default menu")
    }

    #[test]
    fn power_loading_at_55_knots() {
        let pl = PowerLoadingModel::default()
            .power_loading(55.0 * KNOTS)
            .expect("power loading");
        assert_relative_eq!(pl, 16.092048908777045, max_relative = 1e-9);
    }

    #[test]
    fn power_loading_decreases_with_airspeed() {
        let model = PowerLoadingModel::default();
        let mut previous = f64::INFINITY;
        for kt in [5.0, 10.0, 24.0, 40.0, 55.0, 80.0, 120.0] {
            let pl = model.power_loading(kt * KNOTS).expect("power loading");
            assert!(pl < previous, "power loading must drop at {kt} kt");
            previous = pl;
        }
    }

    #[test]
    fn zero_airspeed_is_rejected() {
        let err = PowerLoadingModel::default()
            .power_loading(0.0)
            .expect_err("zero airspeed");
        assert!(matches!(
            err,
            SizingError::NonPositive {
                quantity: "airspeed_max",
                ..
            }
        ));
    }

    #[test]
    fn zero_power_loading_is_division_by_zero() {
        assert_eq!(
            required_power(1000.0, 0.0).expect_err("required power should fail"),
            SizingError::DivisionByZero {
                quantity: "power_loading"
            }
        );
    }

    #[test]
    fn initial_estimate_is_dimensionally_consistent() {
        let gw = initial_gross_weight(&Requirements::ultralight(), &Environment::default());
        assert_relative_eq!(gw.value / LBF, 536.5583156731717, max_relative = 1e-9);
        assert!(gw.warnings.is_empty());
    }

    #[test]
    fn propulsion_sum_flags_mass_terms() {
        let req = Requirements::ultralight();
        let menu = PropulsionCandidate::default_menu();

        let by_weight = gross_weight_with_propulsion(&req, &menu[0]);
        let terms: Vec<_> = by_weight.warnings.iter().map(|w| w.term()).collect();
        assert_eq!(terms, vec![Some("fuel_mass")]);

        let by_mass = gross_weight_with_propulsion(&req, &menu[1]);
        let terms: Vec<_> = by_mass.warnings.iter().map(|w| w.term()).collect();
        assert_eq!(terms, vec![Some("fuel_mass"), Some("propulsion_system_mass")]);
    }

    #[test]
    fn converges_on_the_second_candidate() {
        let fp = default_fixed_point(2.0);
        assert!(fp.converged);
        assert_eq!(fp.iterations.len(), 2);
        assert_relative_eq!(fp.initial.power_hp, 33.34307015314365, max_relative = 1e-9);
        assert_relative_eq!(fp.iterations[0].power_hp, 27.42465505718507, max_relative = 1e-9);
        assert_relative_eq!(fp.gross_takeoff_weight(), 1836.2922550401343, max_relative = 1e-9);
        assert_relative_eq!(fp.power_hp(), 25.653356718054155, max_relative = 1e-9);
        assert!(fp.iterations[1].delta_power_hp < 2.0);
    }

    #[test]
    fn loose_tolerance_stops_early() {
        let fp = default_fixed_point(10.0);
        assert!(fp.converged);
        assert_eq!(fp.iterations.len(), 1);
        assert_eq!(fp.iterations[0].candidate, "Vittorazi Moster 185");
    }

    #[test]
    fn tight_tolerance_exhausts_menu_and_warns() {
        let fp = default_fixed_point(0.01);
        assert!(!fp.converged);
        assert_eq!(fp.iterations.len(), 2);
        assert_relative_eq!(fp.power_hp(), 25.653356718054155, max_relative = 1e-9);
        assert!(fp
            .warnings
            .iter()
            .any(|w| matches!(w, SizingWarning::NotConverged { .. })));
    }

    #[test]
    fn empty_menu_is_an_error() {
        let err = converge(
            &Requirements::ultralight(),
            &Environment::default(),
            &PowerLoadingModel::default(),
            &[],
            2.0,
        )
        .expect_err("empty menu");
        assert_eq!(err, SizingError::NoCandidates);
    }
}
