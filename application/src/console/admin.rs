//! Back-office handlers, gated by the session guard.

use std::path::Path;

use common::operations::{By, Delete, Insert, Update};
use service::{
    command::{self, Command as _, GatewayCommand},
    domain::{
        enquiry::Variant, listing, refdata, user, visa, Listing, User, Visa,
    },
    query, share, Query as _,
};
use tracing as log;

use crate::{
    args::{AdminCommand, Collection},
    context::Access,
    draft, Context,
};

/// Runs a back-office [`AdminCommand`], refusing without a live session.
pub(super) async fn run(
    context: &Context,
    command: AdminCommand,
) -> Result<(), ()> {
    // The guard evaluates once per invocation; absent/expired/malformed
    // sessions were already purged by it.
    match context.authenticate().await {
        Access::Authenticated { user, .. } => {
            log::debug!("back-office access as `{}`", user.username);
        }
        Access::Unauthenticated => {
            log::error!("not logged in; run `login <username>` first");
            return Err(());
        }
    }

    match command {
        AdminCommand::List { collection } => list(context, collection).await,
        AdminCommand::Add { collection, draft } => {
            add(context, collection, &draft).await
        }
        AdminCommand::Update {
            collection,
            id,
            draft,
        } => update(context, collection, id, &draft).await,
        AdminCommand::Delete { collection, id } => {
            delete(context, collection, id).await
        }
        AdminCommand::SendVisa {
            visa,
            recipient,
            country,
            departure,
        } => send_visa(context, visa, recipient, country, departure).await,
    }
}

/// Lists a back-office collection.
async fn list(context: &Context, collection: Collection) -> Result<(), ()> {
    let service = context.service();
    match collection {
        Collection::Packages => {
            for l in run_query(service, query::catalog::Packages::by(())).await? {
                println!(
                    "#{} {} | {}",
                    l.id,
                    l.title,
                    share::summary::rupees(l.offer_price),
                );
            }
        }
        Collection::Destinations => {
            for d in
                run_query(service, query::refdata::Destinations::by(())).await?
            {
                println!(
                    "#{} {} ({})",
                    d.id,
                    d.name,
                    d.country.as_deref().unwrap_or("-"),
                );
            }
        }
        Collection::StartingCities => {
            for c in
                run_query(service, query::refdata::StartingCities::by(()))
                    .await?
            {
                println!(
                    "#{} {} ({})",
                    c.id,
                    c.name,
                    c.region.as_deref().unwrap_or("-"),
                );
            }
        }
        Collection::Nationalities => {
            for n in
                run_query(service, query::refdata::Nationalities::by(()))
                    .await?
            {
                println!("#{} {} ({})", n.id, n.nationality, n.country);
            }
        }
        Collection::Visas => {
            for v in run_query(service, query::visas::List::by(None)).await? {
                println!(
                    "#{} {} ({}) | {}",
                    v.id,
                    v.title,
                    v.country.as_deref().unwrap_or("-"),
                    share::summary::rupees(v.price),
                );
            }
        }
        Collection::UmrahDestinations => {
            for d in
                run_query(service, query::refdata::UmrahDestinations::by(()))
                    .await?
            {
                println!(
                    "#{} {} ({})",
                    d.id,
                    d.name,
                    d.country.as_deref().unwrap_or("-"),
                );
            }
        }
        Collection::Users => {
            for u in run_query(service, query::catalog::Users::by(())).await? {
                println!("#{} {}", u.id, u.username);
            }
        }
        Collection::HolidayEnquiries => {
            trip_inbox(context, Variant::Holiday).await?;
        }
        Collection::UmrahEnquiries => {
            trip_inbox(context, Variant::Umrah).await?;
        }
        Collection::Enquiries => {
            for e in
                run_query(service, query::enquiries::General::by(())).await?
            {
                println!(
                    "#{} [{}] {} | {} | {}",
                    e.id,
                    e.enquiry_type,
                    e.name,
                    e.phone,
                    e.purpose.as_deref().unwrap_or("-"),
                );
            }
        }
    }
    Ok(())
}

/// Lists a trip enquiry inbox.
async fn trip_inbox(context: &Context, variant: Variant) -> Result<(), ()> {
    let rows = run_query(
        context.service(),
        query::enquiries::Trips::by(variant),
    )
    .await?;
    for row in rows {
        println!(
            "#{} {} | {} | {} | from {} | {} room(s), {} adult(s), \
             {} child(ren)",
            row.id,
            row.full_name,
            row.email,
            row.phone,
            row.start_city,
            row.rooms,
            row.adults,
            row.children,
        );
    }
    Ok(())
}

/// Creates an entity from a draft file.
async fn add(
    context: &Context,
    collection: Collection,
    path: &Path,
) -> Result<(), ()> {
    let service = context.service();
    match collection {
        Collection::Packages => {
            let draft: listing::Draft = load_package(path)?;
            run_command(service, GatewayCommand(Insert(draft))).await?;
        }
        Collection::Destinations => {
            let draft: draft::Destination = load(path)?;
            run_command(
                service,
                GatewayCommand(Insert(refdata::DestinationDraft::from(draft))),
            )
            .await?;
        }
        Collection::StartingCities => {
            let draft: draft::StartingCity = load(path)?;
            run_command(
                service,
                GatewayCommand(Insert(refdata::StartingCityDraft::from(
                    draft,
                ))),
            )
            .await?;
        }
        Collection::Nationalities => {
            let draft: draft::Nationality = load(path)?;
            run_command(
                service,
                GatewayCommand(Insert(refdata::NationalityDraft::from(draft))),
            )
            .await?;
        }
        Collection::Visas => {
            let draft: draft::Visa = load(path)?;
            run_command(
                service,
                GatewayCommand(Insert(visa::Draft::from(draft))),
            )
            .await?;
        }
        Collection::Users => {
            let draft: user::Draft = load_user(path)?;
            run_command(service, GatewayCommand(Insert(draft))).await?;
        }
        Collection::UmrahDestinations => {
            log::error!("umrah destinations are list-only from the console");
            return Err(());
        }
        Collection::HolidayEnquiries
        | Collection::UmrahEnquiries
        | Collection::Enquiries => return read_only(),
    }
    println!("Created.");
    Ok(())
}

/// Replaces an entity from a draft file.
async fn update(
    context: &Context,
    collection: Collection,
    id: u64,
    path: &Path,
) -> Result<(), ()> {
    let service = context.service();
    match collection {
        Collection::Packages => {
            let draft: listing::Draft = load_package(path)?;
            run_command(
                service,
                GatewayCommand(Update(By::<Listing, _>::new((
                    id.into(),
                    draft,
                )))),
            )
            .await?;
        }
        Collection::Destinations => {
            let draft: draft::Destination = load(path)?;
            run_command(
                service,
                GatewayCommand(Update(By::<refdata::Destination, _>::new((
                    id.into(),
                    refdata::DestinationDraft::from(draft),
                )))),
            )
            .await?;
        }
        Collection::StartingCities => {
            let draft: draft::StartingCity = load(path)?;
            run_command(
                service,
                GatewayCommand(Update(By::<refdata::StartingCity, _>::new((
                    id.into(),
                    refdata::StartingCityDraft::from(draft),
                )))),
            )
            .await?;
        }
        Collection::Nationalities => {
            let draft: draft::Nationality = load(path)?;
            run_command(
                service,
                GatewayCommand(Update(By::<refdata::Nationality, _>::new((
                    id.into(),
                    refdata::NationalityDraft::from(draft),
                )))),
            )
            .await?;
        }
        Collection::Visas => {
            let draft: draft::Visa = load(path)?;
            run_command(
                service,
                GatewayCommand(Update(By::<Visa, _>::new((
                    id.into(),
                    visa::Draft::from(draft),
                )))),
            )
            .await?;
        }
        Collection::Users => {
            let draft: user::Draft = load_user(path)?;
            run_command(
                service,
                GatewayCommand(Update(By::<User, _>::new((
                    id.into(),
                    draft,
                )))),
            )
            .await?;
        }
        Collection::UmrahDestinations => {
            log::error!("umrah destinations are list-only from the console");
            return Err(());
        }
        Collection::HolidayEnquiries
        | Collection::UmrahEnquiries
        | Collection::Enquiries => return read_only(),
    }
    println!("Updated.");
    Ok(())
}

/// Deletes an entity.
async fn delete(
    context: &Context,
    collection: Collection,
    id: u64,
) -> Result<(), ()> {
    let service = context.service();
    match collection {
        Collection::Packages => {
            run_command(
                service,
                GatewayCommand(Delete(By::<Listing, listing::Id>::new(
                    id.into(),
                ))),
            )
            .await?;
        }
        Collection::Destinations => {
            run_command(
                service,
                GatewayCommand(Delete(By::<
                    refdata::Destination,
                    refdata::Id,
                >::new(id.into()))),
            )
            .await?;
        }
        Collection::StartingCities => {
            run_command(
                service,
                GatewayCommand(Delete(By::<
                    refdata::StartingCity,
                    refdata::Id,
                >::new(id.into()))),
            )
            .await?;
        }
        Collection::Nationalities => {
            run_command(
                service,
                GatewayCommand(Delete(By::<
                    refdata::Nationality,
                    refdata::Id,
                >::new(id.into()))),
            )
            .await?;
        }
        Collection::Visas => {
            run_command(
                service,
                GatewayCommand(Delete(By::<Visa, visa::Id>::new(id.into()))),
            )
            .await?;
        }
        Collection::Users => {
            run_command(
                service,
                GatewayCommand(Delete(By::<User, user::Id>::new(id.into()))),
            )
            .await?;
        }
        Collection::UmrahDestinations => {
            log::error!("umrah destinations are list-only from the console");
            return Err(());
        }
        Collection::HolidayEnquiries
        | Collection::UmrahEnquiries
        | Collection::Enquiries => return read_only(),
    }
    println!("Deleted.");
    Ok(())
}

/// Emails visa details to a customer.
async fn send_visa(
    context: &Context,
    visa_id: u64,
    recipient: String,
    country: Option<String>,
    departure: Option<String>,
) -> Result<(), ()> {
    let departure = match departure.as_deref() {
        Some(raw) => Some(common::Date::from_iso8601(raw).map_err(|e| {
            log::error!("`{raw}` is not a valid date (YYYY-MM-DD): {e}");
        })?),
        None => None,
    };

    let visas =
        run_query(context.service(), query::visas::List::by(country)).await?;
    let visa = visas
        .into_iter()
        .find(|v| v.id == visa_id.into())
        .ok_or_else(|| log::error!("visa {visa_id} does not exist"))?;

    context
        .service()
        .execute(command::SendVisaDetails {
            recipient: recipient.clone(),
            visa,
            departure,
        })
        .await
        .map_err(|e| match e.as_ref() {
            command::send_visa_details::ExecutionError::InvalidRecipient => {
                log::error!("`{recipient}` is not a valid email address");
            }
            command::send_visa_details::ExecutionError::Gateway(g) => {
                log::error!("{}", g.user_message());
            }
        })?;

    println!("Visa details sent to {recipient}");
    Ok(())
}

/// Runs a [`GatewayCommand`], logging its failure.
async fn run_command<Op>(
    service: &crate::Service,
    command: GatewayCommand<Op>,
) -> Result<(), ()>
where
    crate::Service: service::Command<
        GatewayCommand<Op>,
        Ok = (),
        Err = tracerr::Traced<service::infra::gateway::Error>,
    >,
{
    service
        .execute(command)
        .await
        .map_err(|e| log::error!("{}", e.as_ref().user_message()))
}

/// Runs a [`GatewayQuery`], logging its failure.
///
/// [`GatewayQuery`]: query::GatewayQuery
async fn run_query<Q, T>(service: &crate::Service, query: Q) -> Result<T, ()>
where
    crate::Service: service::Query<
        Q,
        Ok = T,
        Err = tracerr::Traced<service::infra::gateway::Error>,
    >,
{
    service
        .execute(query)
        .await
        .map_err(|e| log::error!("{}", e.as_ref().user_message()))
}

/// Refuses a write on a read-only inbox collection.
fn read_only() -> Result<(), ()> {
    log::error!("enquiry inboxes are read-only");
    Err(())
}

/// Loads and converts a package draft.
fn load_package(path: &Path) -> Result<listing::Draft, ()> {
    let draft: draft::Package = load(path)?;
    draft.try_into().map_err(|e| log::error!("{e}"))
}

/// Loads and converts a user draft.
fn load_user(path: &Path) -> Result<user::Draft, ()> {
    let draft: draft::User = load(path)?;
    draft.try_into().map_err(|e| log::error!("{e}"))
}

/// Loads a draft file, logging its failure.
fn load<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ()> {
    draft::load(path).map_err(|e| log::error!("{e}"))
}
