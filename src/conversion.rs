use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::quantity::{QuantityKind, QuantityValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 요청한 물리량과 맞지 않는 단위
    #[error("단위 `{unit}`는 {expected} 단위가 아닙니다")]
    KindMismatch {
        unit: String,
        expected: &'static str,
    },
}

/// 설정 파일 등에서 `{ value = 254.0, unit = "lbf" }` 형태로 적는 단위 붙은 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitValue {
    pub value: f64,
    pub unit: String,
}

impl UnitValue {
    pub fn new(value: f64, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }

    /// 단위 문자열로 종류를 추정해 기준 단위 값으로 환산한다.
    pub fn resolve(&self) -> Result<QuantityValue, ConversionError> {
        to_base_any(self.value, &self.unit)
    }

    /// 지정한 종류의 기준 단위 값으로 환산한다. 다른 종류의 단위면 오류.
    pub fn resolve_as(&self, kind: QuantityKind) -> Result<f64, ConversionError> {
        let q = self.resolve()?;
        if q.kind != kind {
            return Err(ConversionError::KindMismatch {
                unit: self.unit.clone(),
                expected: kind.name(),
            });
        }
        Ok(q.value_base)
    }
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `kg`, `lbf`, `ft2`, `gal`, `knots`, `hp` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let base = to_base(kind, value, from_unit_str)?;
    from_base(kind, base, to_unit_str)
}

/// 지정한 종류의 단위로 적힌 값을 기준 단위로 환산한다.
pub fn to_base(kind: QuantityKind, value: f64, unit_str: &str) -> Result<f64, ConversionError> {
    let to_si = |s: &str| -> Result<f64, ConversionError> {
        Ok(match kind {
            QuantityKind::Mass => convert_mass(value, parse_mass_unit(s)?, MassUnit::Kilogram),
            QuantityKind::Force => convert_force(value, parse_force_unit(s)?, ForceUnit::Newton),
            QuantityKind::Length => convert_length(value, parse_length_unit(s)?, LengthUnit::Meter),
            QuantityKind::Area => convert_area(value, parse_area_unit(s)?, AreaUnit::SquareMeter),
            QuantityKind::Volume => {
                convert_volume(value, parse_volume_unit(s)?, VolumeUnit::CubicMeter)
            }
            QuantityKind::Velocity => {
                convert_velocity(value, parse_velocity_unit(s)?, VelocityUnit::MeterPerSecond)
            }
            QuantityKind::Density => {
                convert_density(value, parse_density_unit(s)?, DensityUnit::KgPerCubicMeter)
            }
            QuantityKind::Power => convert_power(value, parse_power_unit(s)?, PowerUnit::Watt),
            QuantityKind::Pressure => {
                convert_pressure(value, parse_pressure_unit(s)?, PressureUnit::Pascal)
            }
        })
    };
    to_si(unit_str).map_err(|e| mismatch_if_known(e, unit_str, kind))
}

/// 기준 단위 값을 지정한 단위로 환산한다.
pub fn from_base(kind: QuantityKind, value: f64, unit_str: &str) -> Result<f64, ConversionError> {
    let from_si = |s: &str| -> Result<f64, ConversionError> {
        Ok(match kind {
            QuantityKind::Mass => convert_mass(value, MassUnit::Kilogram, parse_mass_unit(s)?),
            QuantityKind::Force => convert_force(value, ForceUnit::Newton, parse_force_unit(s)?),
            QuantityKind::Length => convert_length(value, LengthUnit::Meter, parse_length_unit(s)?),
            QuantityKind::Area => convert_area(value, AreaUnit::SquareMeter, parse_area_unit(s)?),
            QuantityKind::Volume => {
                convert_volume(value, VolumeUnit::CubicMeter, parse_volume_unit(s)?)
            }
            QuantityKind::Velocity => {
                convert_velocity(value, VelocityUnit::MeterPerSecond, parse_velocity_unit(s)?)
            }
            QuantityKind::Density => {
                convert_density(value, DensityUnit::KgPerCubicMeter, parse_density_unit(s)?)
            }
            QuantityKind::Power => convert_power(value, PowerUnit::Watt, parse_power_unit(s)?),
            QuantityKind::Pressure => {
                convert_pressure(value, PressureUnit::Pascal, parse_pressure_unit(s)?)
            }
        })
    };
    from_si(unit_str).map_err(|e| mismatch_if_known(e, unit_str, kind))
}

/// 단위 문자열만으로 물리량 종류를 추정해 기준 단위 값으로 환산한다.
pub fn to_base_any(value: f64, unit_str: &str) -> Result<QuantityValue, ConversionError> {
    let kind = detect_kind(unit_str)
        .ok_or_else(|| ConversionError::UnknownUnit(unit_str.to_string()))?;
    let value_base = to_base(kind, value, unit_str)?;
    Ok(QuantityValue { kind, value_base })
}

/// 단위 문자열이 속한 물리량 종류를 찾는다. 단위명은 종류 간에 겹치지 않는다.
pub fn detect_kind(unit_str: &str) -> Option<QuantityKind> {
    QuantityKind::ALL
        .into_iter()
        .find(|&kind| accepts(kind, unit_str))
}

fn accepts(kind: QuantityKind, s: &str) -> bool {
    match kind {
        QuantityKind::Mass => parse_mass_unit(s).is_ok(),
        QuantityKind::Force => parse_force_unit(s).is_ok(),
        QuantityKind::Length => parse_length_unit(s).is_ok(),
        QuantityKind::Area => parse_area_unit(s).is_ok(),
        QuantityKind::Volume => parse_volume_unit(s).is_ok(),
        QuantityKind::Velocity => parse_velocity_unit(s).is_ok(),
        QuantityKind::Density => parse_density_unit(s).is_ok(),
        QuantityKind::Power => parse_power_unit(s).is_ok(),
        QuantityKind::Pressure => parse_pressure_unit(s).is_ok(),
    }
}

// 다른 물리량의 단위였다면 UnknownUnit 대신 KindMismatch로 알려준다.
fn mismatch_if_known(err: ConversionError, unit_str: &str, kind: QuantityKind) -> ConversionError {
    match err {
        ConversionError::UnknownUnit(_) if detect_kind(unit_str).is_some() => {
            ConversionError::KindMismatch {
                unit: unit_str.to_string(),
                expected: kind.name(),
            }
        }
        other => other,
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" | "gram" => Ok(MassUnit::Gram),
        "lb" | "lbs" | "lbm" => Ok(MassUnit::Pound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_force_unit(s: &str) -> Result<ForceUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "n" | "newton" => Ok(ForceUnit::Newton),
        "kn" => Ok(ForceUnit::KiloNewton),
        "lbf" => Ok(ForceUnit::PoundForce),
        "kgf" => Ok(ForceUnit::KilogramForce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "cm" => Ok(LengthUnit::Centimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m2" | "m^2" | "sqm" => Ok(AreaUnit::SquareMeter),
        "ft2" | "ft^2" | "sqft" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" | "litre" => Ok(VolumeUnit::Liter),
        "ft3" | "ft^3" | "cuft" => Ok(VolumeUnit::CubicFoot),
        "gal" | "gallon" => Ok(VolumeUnit::Gallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_velocity_unit(s: &str) -> Result<VelocityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m/s" | "mps" => Ok(VelocityUnit::MeterPerSecond),
        "ft/s" | "fps" => Ok(VelocityUnit::FootPerSecond),
        "km/h" | "kph" => Ok(VelocityUnit::KilometerPerHour),
        "kt" | "kts" | "knot" | "knots" => Ok(VelocityUnit::Knot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KgPerCubicMeter),
        "lb/ft3" | "lbm/ft3" | "lb/ft^3" => Ok(DensityUnit::PoundPerCubicFoot),
        "lb/gal" | "lbm/gal" => Ok(DensityUnit::PoundPerGallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "w" | "watt" => Ok(PowerUnit::Watt),
        "kw" => Ok(PowerUnit::Kilowatt),
        "hp" => Ok(PowerUnit::Horsepower),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "n/m2" | "n/m^2" => Ok(PressureUnit::Pascal),
        "kpa" => Ok(PressureUnit::KiloPascal),
        "psf" | "lbf/ft2" | "lbf/ft^2" => Ok(PressureUnit::PoundPerSquareFoot),
        "kgf/m2" | "kgf/m^2" => Ok(PressureUnit::KilogramForcePerSquareMeter),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::constants::{FT2, GAL, KNOTS, LBF};
    use approx::assert_relative_eq;

    #[test]
    fn knots_to_meters_per_second() {
        let v = convert(QuantityKind::Velocity, 55.0, "knots", "m/s").expect("conversion");
        assert_relative_eq!(v, 55.0 * KNOTS, max_relative = 1e-12);
    }

    #[test]
    fn unit_value_detects_kind() {
        let q = UnitValue::new(33.0, "lbf").resolve().expect("resolve unit");
        assert_eq!(q.kind, QuantityKind::Force);
        assert_relative_eq!(q.value_base, 33.0 * LBF, max_relative = 1e-12);

        let q = UnitValue::new(5.0, "gal").resolve().expect("resolve unit");
        assert_eq!(q.kind, QuantityKind::Volume);
        assert_relative_eq!(q.value_base, 5.0 * GAL, max_relative = 1e-12);
    }

    #[test]
    fn wing_loading_in_psf() {
        let pa = to_base(QuantityKind::Pressure, 2.0, "lbf/ft2").expect("to base unit");
        assert_relative_eq!(pa, 2.0 * LBF / FT2, max_relative = 1e-12);
    }

    #[test]
    fn wrong_kind_is_reported_as_mismatch() {
        let err = UnitValue::new(20.0, "kg")
            .resolve_as(QuantityKind::Force)
            .expect_err("resolve as should fail");
        assert_eq!(
            err,
            ConversionError::KindMismatch {
                unit: "kg".into(),
                expected: "force"
            }
        );
        let err = to_base(QuantityKind::Force, 1.0, "ft").expect_err("to base unit should fail");
        assert!(matches!(err, ConversionError::KindMismatch { .. }));
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = convert(QuantityKind::Length, 1.0, "furlong", "m").expect_err("unknown unit");
        assert_eq!(err, ConversionError::UnknownUnit("furlong".into()));
        assert!(UnitValue::new(1.0, "stone").resolve().is_err());
    }
}
