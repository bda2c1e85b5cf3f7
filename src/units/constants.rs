//! 단위 환산 계수와 환경 상수 표.
//!
//! 기본 단위(초, 킬로그램, 뉴턴, 미터)는 1이고, 파생 단위는 기본 단위의 배수로 표현한다.
//! 값에 단위를 곱하면 기본 단위 값이 되고, 기본 단위 값을 같은 단위로 나누면 원래 숫자가 된다.

pub const SEC: f64 = 1.0;
pub const KG: f64 = 1.0;
pub const N: f64 = 1.0;
pub const M: f64 = 1.0;
pub const M2: f64 = M * M;
pub const M3: f64 = M * M * M;

pub const LBM: f64 = 0.453592 * KG;
pub const LBF: f64 = 4.44822 * N;
pub const KNOTS: f64 = 0.514444 * M / SEC;
pub const FT: f64 = 0.3048 * M;
pub const FT2: f64 = FT * FT;
pub const FT3: f64 = FT * FT * FT;
/// 미국 갤런
pub const GAL: f64 = 0.133681 * FT3;
/// 기계식 마력(550 ft·lbf/s)
pub const HP: f64 = 745.699872 * N * M / SEC;

/// 중력가속도 [m/s²]
pub const G: f64 = 9.81 * M / (SEC * SEC);
/// 연료(가솔린) 밀도 [kg/m³]. engineeringtoolbox.com 연료 밀도표 기준.
pub const FUEL_DENSITY: f64 = 780.0 * KG / M3;
/// 해면 고도 공기 밀도 [kg/m³]
pub const RHO: f64 = 1.225 * KG / M3;

/// 이름으로 조회 가능한 단위/상수 표.
pub const UNIT_TABLE: &[(&str, f64)] = &[
    ("sec", SEC),
    ("kg", KG),
    ("n", N),
    ("m", M),
    ("m2", M2),
    ("m3", M3),
    ("lbm", LBM),
    ("lbf", LBF),
    ("knots", KNOTS),
    ("ft", FT),
    ("ft2", FT2),
    ("ft3", FT3),
    ("gal", GAL),
    ("hp", HP),
    ("g", G),
    ("fuel_density", FUEL_DENSITY),
    ("rho", RHO),
];

/// 단위 이름에 해당하는 기본 단위 환산 계수를 돌려준다. 대소문자는 구분하지 않는다.
pub fn unit_factor(name: &str) -> Option<f64> {
    let key = name.trim().to_lowercase();
    UNIT_TABLE
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, factor)| *factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn literal_conversions() {
        assert_eq!(1.0 * FT, 0.3048);
        assert_eq!(1.0 * KNOTS, 0.514444);
        assert_eq!(1.0 * LBF, 4.44822);
        assert_eq!(1.0 * GAL, 0.133681 * FT3);
        assert_relative_eq!(GAL, 0.133681 * FT.powi(3), max_relative = 1e-12);
    }

    #[test]
    fn every_factor_is_positive_and_round_trips() {
        for &(name, factor) in UNIT_TABLE {
            assert!(factor > 0.0, "{name} must be positive");
            for x in [1e-3, 0.75, 1.0, 42.0, 3.3e5] {
                assert_relative_eq!((x * factor) / factor, x, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(unit_factor("lbf"), Some(LBF));
        assert_eq!(unit_factor(" Knots "), Some(KNOTS));
        assert_eq!(unit_factor("furlong"), None);
    }
}
