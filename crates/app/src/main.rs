use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use api::ApiConfig;
use services::{AppServices, Clock};
use ui::{App, UiApp, build_app_context};

const APP_NAME: &str = "Cricket Corner";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn app_name(&self) -> String {
        APP_NAME.to_string()
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    api: ApiConfig,
    offline: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--token <token>] [--offline]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", ApiConfig::DEFAULT_BASE_URL);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --offline   browse seeded sample content without a backend");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CRICKET_API_URL, CRICKET_API_TOKEN, RUST_LOG");
}

impl Args {
    /// Flags override whatever `CRICKET_API_URL` / `CRICKET_API_TOKEN` set.
    fn parse(base: ApiConfig, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api = base;
        let mut offline = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api.base_url = value.trim().to_string();
                }
                "--token" => {
                    let value = require_value(args, "--token")?;
                    api = api.with_token(Some(value));
                }
                "--offline" => offline = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { api, offline })
    }
}

fn build_services(args: &Args, clock: Clock) -> Result<AppServices, Box<dyn std::error::Error>> {
    if args.offline {
        let services = AppServices::offline(clock);
        if let Some(token) = args.api.token.as_deref() {
            services.sign_in(token);
        }
        return Ok(services);
    }
    Ok(AppServices::http(&args.api, clock)?)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(ApiConfig::from_env(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let services = build_services(&parsed, Clock::default_clock())?;
    log::info!(
        "starting {APP_NAME} ({}, signed in: {})",
        if services.is_offline() { "offline" } else { "online" },
        services.is_signed_in()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(APP_NAME)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
