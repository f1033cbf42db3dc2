//! Session user and studio background commands.
//!
//! # Usage
//!
//! ```bash
//! lumaprint user login -i u1 -n "Ada" -e ada@example.com
//! lumaprint user show
//! lumaprint user logout
//! lumaprint studio set -b bg-neon-alley
//! lumaprint studio clear
//! ```

use lumaprint_core::{User, UserId};

use super::{CommandError, open_state};

/// Record the signed-in user.
pub fn login(id: &str, name: &str, email: &str) -> Result<(), CommandError> {
    let mut state = open_state()?;
    state.set_user(User {
        id: UserId::new(id),
        name: name.to_owned(),
        email: email.to_owned(),
    });
    tracing::info!("Signed in as {name} ({id})");
    Ok(())
}

/// Clear the session user.
pub fn logout() -> Result<(), CommandError> {
    let mut state = open_state()?;
    state.log_out();
    tracing::info!("Signed out");
    Ok(())
}

/// Show the current session user.
pub fn show() -> Result<(), CommandError> {
    let state = open_state()?;
    match state.user() {
        Some(user) => tracing::info!("{} | {} | {}", user.id, user.name, user.email),
        None => tracing::info!("No user signed in"),
    }
    Ok(())
}

/// Set the studio background identifier.
pub fn set_background(background: &str) -> Result<(), CommandError> {
    let mut state = open_state()?;
    state.set_studio_background(Some(background.to_owned()));
    tracing::info!("Studio background set to {background}");
    Ok(())
}

/// Clear the studio background.
pub fn clear_background() -> Result<(), CommandError> {
    let mut state = open_state()?;
    state.set_studio_background(None);
    tracing::info!("Studio background cleared");
    Ok(())
}
