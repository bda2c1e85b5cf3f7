use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::{self, Config, ConfigError, DisplayUnits, UnitSystem};
use crate::conversion::{self, ConversionError};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::sizing::{self, SizingError, SizingReport};
use crate::ui_cli;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 사이징 계산 오류
    #[error("사이징 계산 오류: {0}")]
    Sizing(#[from] SizingError),
}

/// `size` 명령의 실행 시점 옵션. 설정 파일 값을 덮어쓴다.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeOptions {
    pub unit_system: Option<UnitSystem>,
    pub tolerance_hp: Option<f64>,
}

/// 설정과 옵션으로 사이징을 계산한다. 출력 단위도 함께 돌려준다.
pub fn size(config: &Config, opts: SizeOptions) -> Result<(SizingReport, DisplayUnits), AppError> {
    let mut cfg = config.clone();
    if let Some(system) = opts.unit_system {
        cfg.set_unit_system(system);
    }
    if let Some(tolerance) = opts.tolerance_hp {
        cfg.power_tolerance_hp = tolerance;
    }
    let input = cfg.to_sizing_input()?;
    let report = sizing::run_sizing(&input)?;
    Ok((report, cfg.display_units()))
}

/// 사이징을 수행하고 보고서를 출력한다.
pub fn run_size(config: &Config, opts: SizeOptions, tr: &Translator) -> Result<SizingReport, AppError> {
    let (report, units) = size(config, opts)?;
    ui_cli::print_report(&report, &units, tr);
    Ok(report)
}

/// 단위 변환을 수행하고 결과를 출력한다. 종류를 주지 않으면 입력 단위로 추정한다.
pub fn run_convert(
    kind: Option<QuantityKind>,
    value: f64,
    from: &str,
    to: &str,
    tr: &Translator,
) -> Result<f64, AppError> {
    let kind = match kind {
        Some(kind) => kind,
        None => conversion::detect_kind(from)
            .ok_or_else(|| ConversionError::UnknownUnit(from.to_string()))?,
    };
    let result = conversion::convert(kind, value, from, to)?;
    ui_cli::print_conversion(tr, value, from, result, to);
    Ok(result)
}

/// 기본 설정 파일을 쓴다. 이미 있으면 `force`일 때만 덮어쓴다.
pub fn init_config(path: &Path, force: bool, tr: &Translator) -> Result<Config, AppError> {
    if path.exists() && !force {
        info!(path = %path.display(), "config already exists, keeping it");
        return Ok(config::load_or_default(path)?);
    }
    let cfg = Config::default();
    cfg.save(path)?;
    println!("{} {}", tr.t(keys::CONFIG_WRITTEN), path.display());
    Ok(cfg)
}
