use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::conversion::{ConversionError, UnitValue};
use crate::quantity::QuantityKind;
use crate::requirements::Requirements;
use crate::sizing::{
    Environment, PowerLoadingModel, PropulsionCandidate, ReferenceAirframe, SizingInput,
};
use crate::units::constants::G;
use crate::units::*;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI (N, kW, m², m/s)
    SI,
    /// 영국식 (lbf, hp, ft², kt)
    Imperial,
}

/// 보고서 출력에 쓰는 물리량별 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub weight: ForceUnit,
    pub power: PowerUnit,
    pub speed: VelocityUnit,
    pub area: AreaUnit,
    pub wing_loading: PressureUnit,
}

impl DisplayUnits {
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::SI => Self {
                weight: ForceUnit::Newton,
                power: PowerUnit::Kilowatt,
                speed: VelocityUnit::MeterPerSecond,
                area: AreaUnit::SquareMeter,
                wing_loading: PressureUnit::Pascal,
            },
            UnitSystem::Imperial => Self {
                weight: ForceUnit::PoundForce,
                power: PowerUnit::Horsepower,
                speed: VelocityUnit::Knot,
                area: AreaUnit::SquareFoot,
                wing_loading: PressureUnit::PoundPerSquareFoot,
            },
        }
    }
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Imperial)
    }
}

/// 요구조건 설정. 각 값은 단위와 함께 적는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementsConfig {
    pub fos: f64,
    pub max_load_g: f64,
    pub weight_empty_max_powered: UnitValue,
    pub weight_empty_max_glider: UnitValue,
    pub airspeed_max: UnitValue,
    pub stall_speed_max: UnitValue,
    pub pilot_weight_min: UnitValue,
    pub pilot_weight_max: UnitValue,
    pub fuel_capacity: UnitValue,
    pub fuel_density: UnitValue,
}

impl Default for RequirementsConfig {
    fn default() -> Self {
        Self {
            fos: 1.5,
            max_load_g: 4.0,
            weight_empty_max_powered: UnitValue::new(254.0, "lbf"),
            weight_empty_max_glider: UnitValue::new(155.0, "lbf"),
            airspeed_max: UnitValue::new(55.0, "knots"),
            stall_speed_max: UnitValue::new(24.0, "knots"),
            pilot_weight_min: UnitValue::new(150.0, "lbf"),
            pilot_weight_max: UnitValue::new(250.0, "lbf"),
            fuel_capacity: UnitValue::new(5.0, "gal"),
            fuel_density: UnitValue::new(780.0, "kg/m3"),
        }
    }
}

impl RequirementsConfig {
    pub fn to_requirements(&self) -> Result<Requirements, ConversionError> {
        Ok(Requirements {
            weight_empty_max_powered: self.weight_empty_max_powered.resolve_as(QuantityKind::Force)?,
            weight_empty_max_glider: self.weight_empty_max_glider.resolve_as(QuantityKind::Force)?,
            airspeed_max: self.airspeed_max.resolve_as(QuantityKind::Velocity)?,
            stall_speed_max: self.stall_speed_max.resolve_as(QuantityKind::Velocity)?,
            fos: self.fos,
            max_load_g: self.max_load_g,
            pilot_weight_min: self.pilot_weight_min.resolve_as(QuantityKind::Force)?,
            pilot_weight_max: self.pilot_weight_max.resolve_as(QuantityKind::Force)?,
            fuel_capacity: self.fuel_capacity.resolve_as(QuantityKind::Volume)?,
            fuel_density: self.fuel_density.resolve_as(QuantityKind::Density)?,
        })
    }
}

/// 실속속도 재설정에 쓰는 기준 기체 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceConfig {
    pub name: String,
    pub cl_max: f64,
    pub margin: f64,
    pub empty_weight: UnitValue,
    pub pilot_weight: UnitValue,
    pub wing_area: UnitValue,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            name: "Goat 1".to_string(),
            cl_max: 1.6,
            margin: 1.12,
            empty_weight: UnitValue::new(140.0, "lbf"),
            pilot_weight: UnitValue::new(170.0, "lbf"),
            wing_area: UnitValue::new(174.0, "ft2"),
        }
    }
}

impl ReferenceConfig {
    pub fn to_reference(&self) -> Result<ReferenceAirframe, ConversionError> {
        Ok(ReferenceAirframe {
            name: self.name.clone(),
            empty_weight: self.empty_weight.resolve_as(QuantityKind::Force)?,
            pilot_weight: self.pilot_weight.resolve_as(QuantityKind::Force)?,
            wing_area: self.wing_area.resolve_as(QuantityKind::Area)?,
            cl_max: self.cl_max,
            margin: self.margin,
        })
    }
}

/// 공력/환경 파라미터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroConfig {
    /// 중력가속도 [m/s²]
    pub g: f64,
    /// 주익 양력계수 (복곡면 캠버 1.4)
    pub wing_cl: f64,
    /// 동력하중 경험식 계수 [lbf/hp]
    pub power_loading_coefficient: f64,
    /// 동력하중 경험식 지수
    pub power_loading_exponent: f64,
    pub rho: UnitValue,
}

impl Default for AeroConfig {
    fn default() -> Self {
        let model = PowerLoadingModel::default();
        Self {
            g: G,
            wing_cl: 1.4,
            power_loading_coefficient: model.coefficient,
            power_loading_exponent: model.exponent,
            rho: UnitValue::new(1.225, "kg/m3"),
        }
    }
}

/// 추진계 후보. 단위로 중량(lbf, N)이나 질량(kg, lbm)을 모두 쓸 수 있다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateConfig {
    pub name: String,
    pub value: f64,
    pub unit: String,
}

impl CandidateConfig {
    pub fn to_candidate(&self) -> Result<PropulsionCandidate, ConversionError> {
        let q = UnitValue::new(self.value, &self.unit).resolve()?;
        match q.kind {
            QuantityKind::Mass | QuantityKind::Force => {
                Ok(PropulsionCandidate::new(&self.name, q.to_quantity()))
            }
            _ => Err(ConversionError::KindMismatch {
                unit: self.unit.clone(),
                expected: "mass/force",
            }),
        }
    }
}

fn default_candidates() -> Vec<CandidateConfig> {
    vec![
        CandidateConfig {
            name: "Vittorazi Moster 185".to_string(),
            value: 33.0,
            unit: "lbf".to_string(),
        },
        CandidateConfig {
            name: "Miniplane Top 80".to_string(),
            value: 20.0,
            unit: "kg".to_string(),
        },
    ]
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 보고서 언어 (auto/ko/en)
    pub language: String,
    /// 언어팩(`<lang>.toml`) 디렉터리. 없으면 내장 문자열만 쓴다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_pack_dir: Option<PathBuf>,
    pub unit_system: UnitSystem,
    /// 연속된 필요동력 추정치의 허용 차이 [hp]
    pub power_tolerance_hp: f64,
    /// 물리량별 출력 단위. 없으면 `unit_system` 프리셋을 쓴다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_units: Option<DisplayUnits>,
    pub requirements: RequirementsConfig,
    pub reference: ReferenceConfig,
    pub aero: AeroConfig,
    pub candidates: Vec<CandidateConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            unit_system: UnitSystem::Imperial,
            power_tolerance_hp: 2.0,
            display_units: None,
            requirements: RequirementsConfig::default(),
            reference: ReferenceConfig::default(),
            aero: AeroConfig::default(),
            candidates: default_candidates(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 설정 값의 단위 오류
    #[error("설정 단위 오류: {0}")]
    Unit(#[from] ConversionError),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "wrote default config");
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }

    /// 단위 시스템 프리셋을 바꾸고 개별 출력 단위 지정은 지운다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.display_units = None;
    }

    /// 보고서에 쓸 출력 단위. 개별 지정이 프리셋보다 우선한다.
    pub fn display_units(&self) -> DisplayUnits {
        self.display_units
            .unwrap_or_else(|| DisplayUnits::for_system(self.unit_system))
    }

    /// 설정 값을 기준 단위로 환산해 사이징 입력을 만든다.
    pub fn to_sizing_input(&self) -> Result<SizingInput, ConfigError> {
        let candidates = self
            .candidates
            .iter()
            .map(CandidateConfig::to_candidate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SizingInput {
            requirements: self.requirements.to_requirements()?,
            environment: Environment {
                g: self.aero.g,
                rho: self.aero.rho.resolve_as(QuantityKind::Density)?,
            },
            reference: self.reference.to_reference()?,
            power_loading: PowerLoadingModel {
                coefficient: self.aero.power_loading_coefficient,
                exponent: self.aero.power_loading_exponent,
            },
            wing_cl: self.aero.wing_cl,
            candidates,
            power_tolerance_hp: self.power_tolerance_hp,
        })
    }
}
