use crate::cli::globals::Environment;
use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn validator_environment() -> ValueParser {
    ValueParser::from(
        move |environment: &str| -> std::result::Result<Environment, String> {
            match environment.to_lowercase().as_str() {
                "development" | "dev" => Ok(Environment::Development),
                "production" | "prod" => Ok(Environment::Production),
                _ => Err("invalid environment, expected development or production".to_string()),
            }
        },
    )
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("toegang")
        .about("Password gate for the praktijk brochure site")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("3000")
                .env("TOEGANG_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("password")
                .long("password")
                .help("Shared password gating the site, the gate is disabled when unset")
                .env("TOEGANG_PASSWORD"),
        )
        .arg(
            Arg::new("environment")
                .short('e')
                .long("environment")
                .help("Runtime environment: development or production")
                .default_value("development")
                .env("TOEGANG_ENVIRONMENT")
                .value_parser(validator_environment()),
        )
        .arg(
            Arg::new("force-auth")
                .long("force-auth")
                .help("Enforce the gate even outside production")
                .env("TOEGANG_FORCE_AUTH")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("site-root")
                .long("site-root")
                .help("Directory holding the exported site pages")
                .default_value("public")
                .env("TOEGANG_SITE_ROOT")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("site-url")
                .long("site-url")
                .help("Public base URL of the site, used for logout redirects")
                .default_value("http://localhost:3000")
                .env("TOEGANG_SITE_URL"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("TOEGANG_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
