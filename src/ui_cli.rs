use std::fmt::Write as _;

use crate::config::DisplayUnits;
use crate::i18n::{keys, Translator};
use crate::quantity::{Dimension, Quantity};
use crate::sizing::SizingReport;
use crate::units::constants::LBF;
use crate::units::*;

/// 사이징 보고서를 표시 단위와 언어에 맞춰 문자열로 만든다.
///
/// 마지막 줄은 언어/단위와 무관하게 `gross_takeoff_weight_max = … lbf, power = … hp` 요약이다.
pub fn render_report(report: &SizingReport, units: &DisplayUnits, tr: &Translator) -> String {
    let mut out = String::new();
    let req = &report.requirements;
    let w = |v: f64| fmt_force(v, units.weight);
    let v = |x: f64| fmt_velocity(x, units.speed);

    let _ = writeln!(out, "{}", tr.t(keys::REPORT_TITLE));

    let _ = writeln!(out, "{}", tr.t(keys::SECTION_REQUIREMENTS));
    let _ = writeln!(out, "{}: {}", tr.t(keys::WEIGHT_EMPTY_POWERED), w(req.weight_empty_max_powered));
    let _ = writeln!(out, "{}: {}", tr.t(keys::WEIGHT_EMPTY_GLIDER), w(req.weight_empty_max_glider));
    let _ = writeln!(out, "{}: {}", tr.t(keys::AIRSPEED_MAX), v(req.airspeed_max));
    let _ = writeln!(out, "{}: {}", tr.t(keys::STALL_SPEED_LIMIT), v(req.stall_speed_max));
    let _ = writeln!(
        out,
        "{}: {} ~ {}",
        tr.t(keys::PILOT_WEIGHT),
        w(req.pilot_weight_min),
        w(req.pilot_weight_max)
    );
    let _ = writeln!(out, "{}: {:.2} kg", tr.t(keys::FUEL_MASS), req.fuel_mass());

    let stall = &report.stall;
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_STALL));
    let _ = writeln!(out, "{}: {}", tr.t(keys::REFERENCE_AIRFRAME), report.reference_name);
    let _ = writeln!(
        out,
        "{}: {}",
        tr.t(keys::REFERENCE_WING_LOADING),
        fmt_pressure(stall.wing_loading, units.wing_loading)
    );
    let _ = writeln!(out, "{}: {}", tr.t(keys::REFERENCE_V_STALL), v(stall.v_stall));
    let _ = writeln!(out, "{}: {}", tr.t(keys::DESIGN_STALL_SPEED), v(stall.stall_speed_max));

    let fp = &report.fixed_point;
    let p = |hp: f64| fmt_power_hp(hp, units.power);
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_POWER));
    let _ = writeln!(out, "{}: {:.3} lbf/hp", tr.t(keys::POWER_LOADING), fp.power_loading);
    let _ = writeln!(
        out,
        "{}: {}, {}",
        tr.t(keys::INITIAL_ESTIMATE),
        w(fp.initial.gross_takeoff_weight),
        p(fp.initial.power_hp)
    );
    for (i, it) in fp.iterations.iter().enumerate() {
        let _ = writeln!(
            out,
            "{} {} {} ({}): {}, {} (Δ {:.2} hp)",
            tr.t(keys::CANDIDATE),
            i + 1,
            it.candidate,
            fmt_propulsion_mass(it.propulsion_mass, units.weight),
            w(it.gross_takeoff_weight),
            p(it.power_hp),
            it.delta_power_hp
        );
    }
    let status = if fp.converged {
        tr.t(keys::CONVERGED)
    } else {
        tr.t(keys::NOT_CONVERGED)
    };
    let _ = writeln!(out, "=> {status} (ε = {} hp)", fp.tolerance_hp);

    let wing = &report.wing;
    let _ = writeln!(out, "{}", tr.t(keys::SECTION_WING));
    let _ = writeln!(
        out,
        "{}: {}",
        tr.t(keys::DYNAMIC_PRESSURE),
        fmt_pressure(wing.q, units.wing_loading)
    );
    let _ = writeln!(
        out,
        "{} (Cl {}): {}",
        tr.t(keys::WING_LOADING),
        wing.cl,
        fmt_pressure(wing.wing_loading, units.wing_loading)
    );
    let _ = writeln!(out, "{}: {}", tr.t(keys::WING_AREA), fmt_area(wing.wing_area, units.area));

    let _ = writeln!(out, "{}", tr.t(keys::SECTION_LOADS));
    let _ = writeln!(
        out,
        "{} ({} g): {}",
        tr.t(keys::LIMIT_LOAD),
        req.max_load_g,
        w(report.loads.limit_load)
    );
    let _ = writeln!(
        out,
        "{} (FoS {}): {}",
        tr.t(keys::ULTIMATE_LOAD),
        req.fos,
        w(report.loads.ultimate_load)
    );

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "{}", tr.t(keys::SECTION_WARNINGS));
        for warning in &report.warnings {
            let _ = writeln!(out, "- {warning}");
        }
    }

    let _ = write!(out, "{}", summary_line(report));
    out
}

/// 최종 총중량과 필요동력 요약 한 줄.
pub fn summary_line(report: &SizingReport) -> String {
    format!(
        "gross_takeoff_weight_max = {} lbf, power = {} hp",
        report.gross_takeoff_weight() / LBF,
        report.power_hp()
    )
}

/// 보고서를 표준 출력에 표시한다.
pub fn print_report(report: &SizingReport, units: &DisplayUnits, tr: &Translator) {
    println!("{}", render_report(report, units, tr));
}

/// 단위 변환 결과를 표시한다.
pub fn print_conversion(tr: &Translator, value: f64, from: &str, result: f64, to: &str) {
    println!("{} {value} {from} = {result} {to}", tr.t(keys::CONVERSION_RESULT));
}

fn fmt_force(newton: f64, unit: ForceUnit) -> String {
    let symbol = match unit {
        ForceUnit::Newton => "N",
        ForceUnit::KiloNewton => "kN",
        ForceUnit::PoundForce => "lbf",
        ForceUnit::KilogramForce => "kgf",
    };
    format!("{:.2} {symbol}", convert_force(newton, ForceUnit::Newton, unit))
}

fn fmt_velocity(mps: f64, unit: VelocityUnit) -> String {
    let symbol = match unit {
        VelocityUnit::MeterPerSecond => "m/s",
        VelocityUnit::FootPerSecond => "ft/s",
        VelocityUnit::KilometerPerHour => "km/h",
        VelocityUnit::Knot => "kt",
    };
    format!(
        "{:.2} {symbol}",
        convert_velocity(mps, VelocityUnit::MeterPerSecond, unit)
    )
}

fn fmt_pressure(pa: f64, unit: PressureUnit) -> String {
    let symbol = match unit {
        PressureUnit::Pascal => "Pa",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::PoundPerSquareFoot => "lbf/ft²",
        PressureUnit::KilogramForcePerSquareMeter => "kgf/m²",
    };
    format!(
        "{:.3} {symbol}",
        convert_pressure(pa, PressureUnit::Pascal, unit)
    )
}

fn fmt_area(m2: f64, unit: AreaUnit) -> String {
    let symbol = match unit {
        AreaUnit::SquareMeter => "m²",
        AreaUnit::SquareFoot => "ft²",
    };
    format!("{:.2} {symbol}", convert_area(m2, AreaUnit::SquareMeter, unit))
}

fn fmt_power_hp(hp: f64, unit: PowerUnit) -> String {
    let symbol = match unit {
        PowerUnit::Watt => "W",
        PowerUnit::Kilowatt => "kW",
        PowerUnit::Horsepower => "hp",
    };
    format!("{:.2} {symbol}", convert_power(hp, PowerUnit::Horsepower, unit))
}

// 카탈로그에 중량으로 적힌 후보는 중량 단위로, 질량으로 적힌 후보는 kg로 보여준다.
fn fmt_propulsion_mass(mass: Quantity, weight_unit: ForceUnit) -> String {
    if mass.dim == Dimension::FORCE {
        fmt_force(mass.value, weight_unit)
    } else {
        format!("{:.2} kg", mass.value)
    }
}
