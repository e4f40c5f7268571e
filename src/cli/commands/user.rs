//! Staff account command handlers

use anyhow::Context;

use crate::config::Config;
use crate::constants::auth::MIN_PASSWORD_LENGTH;
use crate::db::{NewUser, Store};
use crate::domain::AccountKey;
use crate::state::SharedState;

pub async fn cmd_user_add(config: &Config, new_user: NewUser) -> anyhow::Result<()> {
    let account_key = AccountKey::from_district(&new_user.district)
        .with_context(|| format!("Invalid district '{}'", new_user.district))?;

    if new_user.username.trim().is_empty() {
        anyhow::bail!("Username cannot be empty");
    }
    if new_user.password.len() < MIN_PASSWORD_LENGTH {
        anyhow::bail!("Password must be at least {MIN_PASSWORD_LENGTH} characters");
    }

    let store = Store::new(&config.general.database_path).await?;

    if store.get_user_by_username(&new_user.username).await?.is_some() {
        anyhow::bail!("User '{}' already exists", new_user.username);
    }

    let user = store.create_user(new_user, &config.security).await?;

    println!("✓ Created user '{}' (id {})", user.username, user.id);
    println!("  District account: {account_key}");
    println!("  API token: {}", user.api_key);

    Ok(())
}

pub async fn cmd_user_token(config: &Config, username: &str) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;
    let token = state.auth_service.get_token(username).await?;

    println!("{token}");
    Ok(())
}

pub async fn cmd_user_rotate_token(config: &Config, username: &str) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;
    let token = state.auth_service.rotate_token(username).await?;

    println!("✓ New API token for '{username}':");
    println!("{token}");
    Ok(())
}
