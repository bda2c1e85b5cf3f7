use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ultralight_sizing::app::{self, AppError, SizeOptions};
use ultralight_sizing::config::{self, UnitSystem, DEFAULT_CONFIG_PATH};
use ultralight_sizing::i18n::{self, keys, Translator};
use ultralight_sizing::quantity::QuantityKind;

#[derive(Parser, Debug)]
#[command(author, version, about = "Ultralight aircraft conceptual sizing")]
struct Cli {
    /// Configuration file (created with defaults when missing).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Report language: auto, ko, en.
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the sizing and print the report (default).
    Size {
        /// Display unit system for the report.
        #[arg(long, value_enum)]
        units: Option<UnitsArg>,
        /// Power convergence tolerance in hp.
        #[arg(long)]
        tolerance: Option<f64>,
    },
    /// Convert a value between units, e.g. `convert 55 knots m/s`.
    Convert {
        value: f64,
        from: String,
        to: String,
        /// Quantity kind; inferred from the source unit when omitted.
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },
    /// Write the default configuration file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum UnitsArg {
    Si,
    Imperial,
}

impl From<UnitsArg> for UnitSystem {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Si => UnitSystem::SI,
            UnitsArg::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    Mass,
    Force,
    Length,
    Area,
    Volume,
    Velocity,
    Density,
    Power,
    Pressure,
}

impl From<KindArg> for QuantityKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Mass => QuantityKind::Mass,
            KindArg::Force => QuantityKind::Force,
            KindArg::Length => QuantityKind::Length,
            KindArg::Area => QuantityKind::Area,
            KindArg::Volume => QuantityKind::Volume,
            KindArg::Velocity => QuantityKind::Velocity,
            KindArg::Density => QuantityKind::Density,
            KindArg::Power => QuantityKind::Power,
            KindArg::Pressure => QuantityKind::Pressure,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청한 명령을 실행한다.
fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    // 설정을 읽기 전이라 언어는 CLI 플래그와 시스템 로케일로만 정한다.
    let fallback = Translator::new(&i18n::resolve_language(&cli.lang, None));
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", fallback.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    if let Some(Command::InitConfig { force }) = cli.command {
        let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
        app::init_config(&cli.config, force, &tr)?;
        return Ok(());
    }

    let cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        None => {
            app::run_size(&cfg, SizeOptions::default(), &tr)?;
        }
        Some(Command::Size { units, tolerance }) => {
            let opts = SizeOptions {
                unit_system: units.map(UnitSystem::from),
                tolerance_hp: tolerance,
            };
            app::run_size(&cfg, opts, &tr)?;
        }
        Some(Command::Convert {
            value,
            from,
            to,
            kind,
        }) => {
            app::run_convert(kind.map(QuantityKind::from), value, &from, &to, &tr)?;
        }
        Some(Command::InitConfig { .. }) => {}
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
