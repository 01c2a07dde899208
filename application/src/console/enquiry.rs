//! Enquiry submission handlers.

use std::path::Path;

use service::{
    command::{self, Command as _},
    domain::enquiry::{
        self, wizard, Enquiry, FieldErrors, Variant, Wizard,
    },
};
use tracing as log;

use crate::{args::EnquiryKindArg, draft, Context};

/// Submits a trip enquiry from a draft file, walking the wizard through
/// both validation gates exactly like the website's form.
pub(super) async fn enquire(
    context: &Context,
    path: &Path,
    umrah: bool,
    package: Option<String>,
) -> Result<(), ()> {
    let draft: draft::Trip =
        draft::load(path).map_err(|e| log::error!("{e}"))?;

    let variant = if umrah {
        Variant::Umrah
    } else {
        Variant::Holiday
    };
    let mut wizard = Wizard::new(variant);
    if let Some(package) = package {
        wizard = wizard.with_package(package);
    }

    if let Some(trip) = wizard.trip_mut() {
        draft.apply_trip(trip);
    }
    if let Err(errors) = wizard.advance() {
        report(&errors);
        return Err(());
    }
    if let Some(contact) = wizard.contact_mut() {
        draft.apply_contact(contact);
    }

    let enquiry = match wizard.begin_submit() {
        Ok(enquiry) => enquiry,
        Err(wizard::BeginSubmitError::Invalid(errors)) => {
            report(&errors);
            return Err(());
        }
        Err(e @ wizard::BeginSubmitError::NotAtContactStep) => {
            log::error!("{e}");
            return Err(());
        }
    };

    let outcome = context
        .service()
        .execute(command::SubmitTripEnquiry(enquiry))
        .await
        .map_err(|e| match e.as_ref() {
            command::submit_trip_enquiry::ExecutionError::InvalidDraft(
                errors,
            ) => {
                report(errors);
                "enquiry draft is invalid".to_owned()
            }
            command::submit_trip_enquiry::ExecutionError::Gateway(g) => {
                g.user_message()
            }
        });
    wizard.complete_submit(outcome);

    match wizard.state().clone() {
        wizard::State::Success => {
            println!(
                "Your {} enquiry has been submitted successfully! \
                 Our team will contact you shortly.",
                match variant {
                    Variant::Holiday => "holiday",
                    Variant::Umrah => "Umrah",
                },
            );
            // The success notice stays up briefly before the form resets,
            // like the website's auto-closing modal.
            tokio::time::sleep(context.config().console.success_display)
                .await;
            wizard.acknowledge();
            Ok(())
        }
        wizard::State::Failure { message } => {
            log::error!("{message}");
            Err(())
        }
        wizard::State::Step1
        | wizard::State::Step2
        | wizard::State::Submitting => {
            log::error!("submission did not complete");
            Err(())
        }
    }
}

/// Submits a quick general enquiry.
pub(super) async fn quick(
    context: &Context,
    name: String,
    phone: String,
    email: String,
    purpose: String,
    kind: EnquiryKindArg,
) -> Result<(), ()> {
    let enquiry = Enquiry {
        name,
        email,
        phone,
        purpose,
        kind: match kind {
            EnquiryKindArg::General => enquiry::Kind::General,
            EnquiryKindArg::Cab => enquiry::Kind::Cab,
            EnquiryKindArg::Cruise => enquiry::Kind::Cruise,
        },
    };

    context
        .service()
        .execute(command::SubmitGeneralEnquiry(enquiry))
        .await
        .map_err(|e| match e.as_ref() {
            command::submit_general_enquiry::ExecutionError::InvalidDraft(
                errors,
            ) => report(errors),
            command::submit_general_enquiry::ExecutionError::Gateway(g) => {
                log::error!("{}", g.user_message());
            }
        })?;

    println!("Your enquiry has been submitted successfully!");
    Ok(())
}

/// Reports per-field validation messages.
fn report(errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        log::error!("{field:?}: {message}");
    }
}
