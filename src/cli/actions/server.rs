use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::toegang::{gate::GateState, new};
use anyhow::{Context, Result};
use std::sync::Arc;
use url::Url;

/// Handle the server action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Server {
            port,
            site_root,
            site_url,
        } => {
            let site_url = Url::parse(&site_url)
                .with_context(|| format!("Invalid site URL: {site_url}"))?;

            let gate = Arc::new(GateState::new(
                globals.password.clone(),
                globals.environment,
                globals.force_auth,
                site_url,
            ));

            new(port, &site_root, gate).await?;
        }
    }

    Ok(())
}
