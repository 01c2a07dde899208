//! Catalog browsing and sharing handlers.

use std::path::PathBuf;

use service::{
    domain::{
        catalog::{self, Budget, Criteria, FlightChoice},
        listing::{Category, Listing},
    },
    query, share, Query as _,
};
use tracing as log;

use crate::{args::FlightArg, Context};

/// Lists the catalog under the provided filter criteria, preserving the
/// backend's ordering.
#[expect(clippy::too_many_arguments, reason = "one per filter control")]
pub(super) async fn packages(
    context: &Context,
    category: Option<String>,
    destination: Option<String>,
    nights: Option<u16>,
    starting_city: Option<String>,
    budget_max: Option<u32>,
    flight: FlightArg,
) -> Result<(), ()> {
    let category = match category {
        Some(raw) => Some(Category::parse(&raw).ok_or_else(|| {
            log::error!(
                "`{raw}` is not a known category \
                 (expected Domestic, International or Umrah)",
            );
        })?),
        None => None,
    };

    let criteria = Criteria {
        category,
        destination,
        nights,
        starting_city,
        budget: budget_max.map_or_else(Budget::default, Budget::new),
        flight: match flight {
            FlightArg::All => FlightChoice::All,
            FlightArg::WithFlight => FlightChoice::WithFlight,
            FlightArg::WithoutFlight => FlightChoice::WithoutFlight,
        },
    };

    let listings = context
        .service()
        .execute(query::catalog::Packages::by(()))
        .await
        .map_err(|e| log::error!("{}", e.as_ref().user_message()))?;

    let visible = catalog::visible(&listings, &criteria);
    if visible.is_empty() {
        println!("No packages match the selected filters.");
        return Ok(());
    }

    for listing in visible {
        println!("{}", line(listing));
    }
    Ok(())
}

/// Shows one package in full.
pub(super) async fn package(context: &Context, id: u64) -> Result<(), ()> {
    let listing = fetch(context, id).await?;
    println!(
        "{}",
        share::summary::package(&listing, &context.service().config().contact),
    );
    Ok(())
}

/// Prints the shareable summary of a package, or a link carrying it.
pub(super) async fn share(
    context: &Context,
    id: u64,
    whatsapp: Option<String>,
    email: Option<String>,
) -> Result<(), ()> {
    let listing = fetch(context, id).await?;
    let summary =
        share::summary::package(&listing, &context.service().config().contact);

    if let Some(phone) = whatsapp {
        println!("{}", share::summary::whatsapp_link(&phone, &summary));
    } else if let Some(to) = email {
        println!(
            "{}",
            share::summary::mailto_link(&to, listing.title.as_ref(), &summary),
        );
    } else {
        println!("{summary}");
    }
    Ok(())
}

/// Exports the paginated share document of a package.
pub(super) async fn export(
    context: &Context,
    id: u64,
    out: Option<PathBuf>,
) -> Result<(), ()> {
    let listing = fetch(context, id).await?;

    // A failed cover fetch degrades the document, never aborts it.
    let cover = match &listing.card_image {
        Some(url) => match context.service().gateway().fetch_image(url).await {
            Ok(_) => share::document::Cover::Loaded { url: url.clone() },
            Err(e) => {
                log::warn!("cover image unavailable, exporting without: {e}");
                share::document::Cover::Unavailable
            }
        },
        None => share::document::Cover::Unavailable,
    };

    let document = share::document::paginate(
        &listing,
        &cover,
        &context.service().config().contact,
    );
    let rendered = document.render_text();

    match out {
        Some(path) => {
            std::fs::write(&path, rendered).map_err(|e| {
                log::error!("cannot write `{}`: {e}", path.display());
            })?;
            println!(
                "Exported {} page(s) to {}",
                document.page_count(),
                path.display(),
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Fetches one [`Listing`] by its ID.
async fn fetch(context: &Context, id: u64) -> Result<Listing, ()> {
    context
        .service()
        .execute(query::catalog::Package::by(id.into()))
        .await
        .map_err(|e| log::error!("{}", e.as_ref().user_message()))?
        .ok_or_else(|| log::error!("package {id} does not exist"))
}

/// Formats one catalog line.
fn line(listing: &Listing) -> String {
    let duration = listing
        .duration()
        .unwrap_or_else(|| "flexible duration".to_owned());
    let city = listing.starting_city.as_deref().unwrap_or("any city");
    let flight = if listing.with_flight {
        "with flight"
    } else {
        "without flight"
    };

    format!(
        "#{id} {title} | {duration} | from {city} | {price} | {flight}",
        id = listing.id,
        title = listing.title,
        price = share::summary::rupees(listing.offer_price),
    )
}
