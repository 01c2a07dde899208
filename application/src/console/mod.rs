//! Console command handlers.
//!
//! Headless counterparts of the website's screens: each handler wires one
//! user-facing flow through the [`Service`], reporting outcomes on stdout
//! and failures through the log.
//!
//! [`Service`]: crate::Service

mod admin;
mod catalog;
mod enquiry;
mod session;
mod visas;

use crate::{args::Command, Context};

/// Runs the provided console [`Command`] against the [`Context`].
///
/// # Errors
///
/// Errors (after logging the reason) if the command failed; the caller
/// only translates this into the exit code.
pub async fn run(context: &Context, command: Command) -> Result<(), ()> {
    match command {
        Command::Packages {
            category,
            destination,
            nights,
            starting_city,
            budget_max,
            flight,
        } => {
            catalog::packages(
                context,
                category,
                destination,
                nights,
                starting_city,
                budget_max,
                flight,
            )
            .await
        }
        Command::Package { id } => catalog::package(context, id).await,
        Command::Share {
            id,
            whatsapp,
            email,
        } => catalog::share(context, id, whatsapp, email).await,
        Command::Export { id, out } => catalog::export(context, id, out).await,
        Command::Enquire {
            draft,
            umrah,
            package,
        } => enquiry::enquire(context, &draft, umrah, package).await,
        Command::Quick {
            name,
            phone,
            email,
            purpose,
            kind,
        } => enquiry::quick(context, name, phone, email, purpose, kind).await,
        Command::Visas { country, departure } => {
            visas::search(context, country, departure).await
        }
        Command::Login { username, password } => {
            session::login(context, username, password).await
        }
        Command::Logout => session::logout(context),
        Command::Whoami => session::whoami(context).await,
        Command::Admin(command) => admin::run(context, command).await,
    }
}
