use approx::assert_relative_eq;
use ultralight_sizing::{
    config::{Config, DisplayUnits, UnitSystem},
    i18n::Translator,
    sizing::{self, SizingError, SizingInput, SizingWarning},
    ui_cli,
    units::constants::{FT2, KNOTS, LBF},
};

#[test]
fn default_run_reproduces_reference_numbers() {
    let report = sizing::run_sizing(&SizingInput::default()).expect("sizing");

    assert_relative_eq!(report.stall.stall_speed_max / KNOTS, 20.311933582165935, max_relative = 1e-9);

    let fp = &report.fixed_point;
    assert_relative_eq!(fp.power_loading, 16.092048908777045, max_relative = 1e-9);
    assert_relative_eq!(fp.initial.gross_takeoff_weight / LBF, 536.5583156731717, max_relative = 1e-9);
    assert_relative_eq!(fp.initial.power_hp, 33.34307015314365, max_relative = 1e-9);
    assert_eq!(fp.iterations.len(), 2);
    assert_relative_eq!(fp.iterations[0].power_hp, 27.42465505718507, max_relative = 1e-9);
    assert!(fp.converged);

    assert_relative_eq!(report.gross_takeoff_weight() / LBF, 412.81507098123166, max_relative = 1e-9);
    assert_relative_eq!(report.power_hp(), 25.653356718054155, max_relative = 1e-9);
    assert_relative_eq!(report.wing.wing_area / FT2, 211.10523356159567, max_relative = 1e-9);
}

#[test]
fn both_gross_weight_inconsistencies_surface_as_warnings() {
    let report = sizing::run_sizing(&SizingInput::default()).expect("sizing");
    let terms: Vec<_> = report.warnings.iter().filter_map(SizingWarning::term).collect();
    assert_eq!(terms, ["fuel_mass", "fuel_mass", "propulsion_system_mass"]);
    assert!(!report
        .warnings
        .iter()
        .any(|w| matches!(w, SizingWarning::StallSpeedAboveLimit { .. })));
}

#[test]
fn tighter_tolerance_exhausts_menu_and_keeps_last_candidate() {
    let mut cfg = Config::default();
    cfg.power_tolerance_hp = 0.5;
    let report = sizing::run_sizing(&cfg.to_sizing_input().expect("sizing input")).expect("sizing");
    assert!(!report.fixed_point.converged);
    assert_eq!(report.fixed_point.iterations.len(), 2);
    assert_relative_eq!(report.power_hp(), 25.653356718054155, max_relative = 1e-9);
    assert!(report
        .warnings
        .iter()
        .any(|w| matches!(w, SizingWarning::NotConverged { .. })));
}

#[test]
fn alternative_config_units_give_same_sizing() {
    let input = Config::default().to_sizing_input().expect("sizing input");
    let base = sizing::run_sizing(&input).expect("sizing");

    let mut cfg = Config::default();
    cfg.requirements.weight_empty_max_powered.value = 254.0 * LBF / 1000.0;
    cfg.requirements.weight_empty_max_powered.unit = "kN".into();
    cfg.requirements.airspeed_max.value = 55.0 * KNOTS;
    cfg.requirements.airspeed_max.unit = "m/s".into();
    cfg.candidates[1].value = 20.0 / 0.453592;
    cfg.candidates[1].unit = "lbm".into();
    let alt = sizing::run_sizing(&cfg.to_sizing_input().expect("sizing input")).expect("sizing");

    assert_relative_eq!(alt.gross_takeoff_weight(), base.gross_takeoff_weight(), max_relative = 1e-10);
    assert_relative_eq!(alt.power_hp(), base.power_hp(), max_relative = 1e-10);
    assert_relative_eq!(alt.wing.wing_area, base.wing.wing_area, max_relative = 1e-10);
}

#[test]
fn report_ends_with_summary_in_every_language() {
    let report = sizing::run_sizing(&SizingInput::default()).expect("sizing");
    let summary = ui_cli::summary_line(&report);
    assert!(summary.starts_with("gross_takeoff_weight_max = 412.815"));
    assert!(summary.ends_with(" hp"));

    let ko = ui_cli::render_report(&report, &DisplayUnits::default(), &Translator::new("ko"));
    assert!(ko.contains("주익 면적: 211.11 ft²"));
    assert!(ko.ends_with(&summary));

    let si = DisplayUnits::for_system(UnitSystem::SI);
    let en = ui_cli::render_report(&report, &si, &Translator::new("en"));
    assert!(en.contains("Wing area: 19.61 m²"));
    assert!(en.contains("Candidate 2 Miniplane Top 80 (20.00 kg)"));
    assert!(en.ends_with(&summary));
}

#[test]
fn configured_lift_coefficient_and_margin_must_be_positive() {
    let mut cfg = Config::default();
    cfg.aero.wing_cl = -1.4;
    let input = cfg.to_sizing_input().expect("sizing input");
    assert!(matches!(
        sizing::run_sizing(&input),
        Err(SizingError::NonPositive { quantity: "wing_cl", .. })
    ));

    let mut cfg = Config::default();
    cfg.reference.margin = 0.0;
    let input = cfg.to_sizing_input().expect("sizing input");
    assert!(matches!(
        sizing::run_sizing(&input),
        Err(SizingError::NonPositive { quantity: "reference_margin", .. })
    ));
}
