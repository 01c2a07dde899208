//! Session handlers.

use secrecy::SecretBox;
use service::{
    command::{self, Command as _},
    infra::session::Persisted,
};
use tracing as log;

use crate::{context::Access, Context};

/// Logs into the back-office, persisting the issued session unit.
pub(super) async fn login(
    context: &Context,
    username: String,
    password: String,
) -> Result<(), ()> {
    let username = username
        .parse()
        .map_err(|e| log::error!("invalid username: {e}"))?;
    let password = service::domain::user::Password::new(password)
        .ok_or_else(|| log::error!("invalid password"))?;

    let output = context
        .service()
        .execute(command::CreateUserSession {
            username,
            password: SecretBox::new(Box::new(password)),
        })
        .await
        .map_err(|e| match e.as_ref() {
            command::create_user_session::ExecutionError::Gateway(g) => {
                log::error!("{}", g.user_message());
            }
            command::create_user_session::ExecutionError::JsonWebTokenDecodeError(_) => {
                log::error!("the platform issued an unusable token");
            }
        })?;

    context
        .save_session(&Persisted {
            access: output.tokens.access,
            refresh: output.tokens.refresh,
            user: output.user.clone(),
        })
        .map_err(|e| log::error!("failed to store the session: {e}"))?;

    println!("Logged in as {}", output.user.username);
    Ok(())
}

/// Logs out, purging the stored session unit.
pub(super) fn logout(context: &Context) -> Result<(), ()> {
    context
        .clear_session()
        .map_err(|e| log::error!("failed to purge the session: {e}"))?;
    println!("Logged out.");
    Ok(())
}

/// Shows who is currently logged in.
pub(super) async fn whoami(context: &Context) -> Result<(), ()> {
    match context.authenticate().await {
        Access::Authenticated { session, user } => {
            println!(
                "Logged in as {} (session expires at {})",
                user.username,
                session.expires_at.coerce::<()>().to_rfc3339(),
            );
        }
        Access::Unauthenticated => println!("Not logged in."),
    }
    Ok(())
}
