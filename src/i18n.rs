use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const CONFIG_WRITTEN: &str = "general.config_written";

    pub const REPORT_TITLE: &str = "report.title";
    pub const SECTION_REQUIREMENTS: &str = "report.section_requirements";
    pub const SECTION_STALL: &str = "report.section_stall";
    pub const SECTION_POWER: &str = "report.section_power";
    pub const SECTION_WING: &str = "report.section_wing";
    pub const SECTION_LOADS: &str = "report.section_loads";
    pub const SECTION_WARNINGS: &str = "report.section_warnings";

    pub const WEIGHT_EMPTY_POWERED: &str = "requirements.weight_empty_powered";
    pub const WEIGHT_EMPTY_GLIDER: &str = "requirements.weight_empty_glider";
    pub const AIRSPEED_MAX: &str = "requirements.airspeed_max";
    pub const STALL_SPEED_LIMIT: &str = "requirements.stall_speed_limit";
    pub const PILOT_WEIGHT: &str = "requirements.pilot_weight";
    pub const FUEL_MASS: &str = "requirements.fuel_mass";

    pub const REFERENCE_AIRFRAME: &str = "stall.reference_airframe";
    pub const REFERENCE_WING_LOADING: &str = "stall.reference_wing_loading";
    pub const REFERENCE_V_STALL: &str = "stall.reference_v_stall";
    pub const DESIGN_STALL_SPEED: &str = "stall.design_stall_speed";

    pub const POWER_LOADING: &str = "power.power_loading";
    pub const INITIAL_ESTIMATE: &str = "power.initial_estimate";
    pub const CANDIDATE: &str = "power.candidate";
    pub const CONVERGED: &str = "power.converged";
    pub const NOT_CONVERGED: &str = "power.not_converged";

    pub const DYNAMIC_PRESSURE: &str = "wing.dynamic_pressure";
    pub const WING_LOADING: &str = "wing.wing_loading";
    pub const WING_AREA: &str = "wing.wing_area";

    pub const LIMIT_LOAD: &str = "loads.limit_load";
    pub const ULTIMATE_LOAD: &str = "loads.ultimate_load";

    pub const CONVERSION_RESULT: &str = "conversion.result";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: pack_dir.and_then(|dir| load_overrides(dir, lang_code)),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩이 우선이고, 영어 번역이 없으면 한국어 문자열을 쓴다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).or_else(|| ko(key)).unwrap_or(key),
            Language::Ko => ko(key).unwrap_or(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: 섹션 테이블 안에 key = "value".
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let path = dir.join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.to_string()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }
    Some(map)
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        CONFIG_WRITTEN => "기본 설정을 저장했습니다:",
        REPORT_TITLE => "=== 초경량 비행장치 개념 사이징 ===",
        SECTION_REQUIREMENTS => "-- 요구조건 --",
        SECTION_STALL => "-- 실속속도 재설정 --",
        SECTION_POWER => "-- 총중량/필요동력 반복 --",
        SECTION_WING => "-- 익면하중/주익 면적 --",
        SECTION_LOADS => "-- 구조 하중 --",
        SECTION_WARNINGS => "-- 경고 --",
        WEIGHT_EMPTY_POWERED => "최대 자체중량(동력)",
        WEIGHT_EMPTY_GLIDER => "최대 자체중량(활공)",
        AIRSPEED_MAX => "최대 속도",
        STALL_SPEED_LIMIT => "규정 실속속도 상한",
        PILOT_WEIGHT => "조종사 체중",
        FUEL_MASS => "연료 질량",
        REFERENCE_AIRFRAME => "기준 기체",
        REFERENCE_WING_LOADING => "기준 익면하중",
        REFERENCE_V_STALL => "기준 실속속도",
        DESIGN_STALL_SPEED => "설계 실속속도",
        POWER_LOADING => "동력하중",
        INITIAL_ESTIMATE => "초기 추정",
        CANDIDATE => "후보",
        CONVERGED => "수렴함",
        NOT_CONVERGED => "수렴하지 않음",
        DYNAMIC_PRESSURE => "동압",
        WING_LOADING => "익면하중",
        WING_AREA => "주익 면적",
        LIMIT_LOAD => "제한하중",
        ULTIMATE_LOAD => "극한하중",
        CONVERSION_RESULT => "변환 결과:",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        CONFIG_WRITTEN => "Wrote default config to",
        REPORT_TITLE => "=== Ultralight Conceptual Sizing ===",
        SECTION_REQUIREMENTS => "-- Requirements --",
        SECTION_STALL => "-- Stall Speed Refinement --",
        SECTION_POWER => "-- Gross Weight / Power Iteration --",
        SECTION_WING => "-- Wing Loading / Area --",
        SECTION_LOADS => "-- Structural Loads --",
        SECTION_WARNINGS => "-- Warnings --",
        WEIGHT_EMPTY_POWERED => "Max empty weight (powered)",
        WEIGHT_EMPTY_GLIDER => "Max empty weight (glider)",
        AIRSPEED_MAX => "Max airspeed",
        STALL_SPEED_LIMIT => "Regulatory stall speed limit",
        PILOT_WEIGHT => "Pilot weight",
        FUEL_MASS => "Fuel mass",
        REFERENCE_AIRFRAME => "Reference airframe",
        REFERENCE_WING_LOADING => "Reference wing loading",
        REFERENCE_V_STALL => "Reference stall speed",
        DESIGN_STALL_SPEED => "Design stall speed",
        POWER_LOADING => "Power loading",
        INITIAL_ESTIMATE => "Initial estimate",
        CANDIDATE => "Candidate",
        CONVERGED => "converged",
        NOT_CONVERGED => "not converged",
        DYNAMIC_PRESSURE => "Dynamic pressure",
        WING_LOADING => "Wing loading",
        WING_AREA => "Wing area",
        LIMIT_LOAD => "Limit load",
        ULTIMATE_LOAD => "Ultimate load",
        CONVERSION_RESULT => "Result:",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_korean_labels() {
        assert_eq!(Translator::new("en").t(keys::WING_AREA), "Wing area");
        assert_eq!(Translator::new("ko").t(keys::WING_AREA), "주익 면적");
        assert_eq!(Translator::new("xx").language(), Language::Ko);
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(Translator::new("en").t("no.such.key"), "no.such.key");
    }

    #[test]
    fn explicit_flag_wins_over_config() {
        assert_eq!(resolve_language("en-US", Some("ko")), "en");
        assert_eq!(resolve_language("auto", Some("ko-KR")), "ko");
    }

    #[test]
    fn language_pack_overrides_built_in() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            dir.path().join("en.toml"),
            "[wing]\nwing_area = \"Planform area\"\n",
        )
        .expect("write language pack");
        let tr = Translator::new_with_pack("en", Some(dir.path()));
        assert_eq!(tr.t(keys::WING_AREA), "Planform area");
        assert_eq!(tr.t(keys::WING_LOADING), "Wing loading");
    }
}
