use crate::cli::actions::Action;
use anyhow::Result;
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(3000),
        site_root: matches
            .get_one::<PathBuf>("site-root")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --site-root"))?,
        site_url: matches
            .get_one("site-url")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --site-url"))?,
    })
}
