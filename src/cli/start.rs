use crate::cli::{
    actions::Action,
    commands, dispatch,
    globals::{Environment, GlobalArgs},
    telemetry,
};
use anyhow::Result;
use secrecy::SecretString;

/// Map verbosity count to tracing level
const fn get_verbosity_level(verbosity: u8) -> Option<tracing::Level> {
    match verbosity {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Start the CLI: parse arguments, initialize telemetry, build the action
/// and the immutable global configuration.
///
/// # Errors
///
/// Returns an error if argument parsing, telemetry initialization, or action
/// dispatch fails
pub fn start() -> Result<(Action, GlobalArgs)> {
    let matches = commands::new().get_matches();

    let verbosity_level = get_verbosity_level(
        matches
            .get_one::<u8>("verbosity")
            .copied()
            .unwrap_or(0),
    );

    telemetry::init(verbosity_level)?;

    let mut globals = GlobalArgs::new(
        matches
            .get_one::<Environment>("environment")
            .copied()
            .unwrap_or(Environment::Development),
    );

    globals.force_auth = matches.get_flag("force-auth");

    // The shared secret is read once here and never re-read per request.
    if let Some(password) = matches.get_one::<String>("password") {
        globals.set_password(SecretString::from(password.clone()));
    }

    let action = dispatch::handler(&matches)?;

    Ok((action, globals))
}
