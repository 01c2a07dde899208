//! Visa search handler.

use service::{domain::visa, query, share, Query as _};
use tracing as log;

use crate::Context;

/// Searches visas for a destination country, estimating arrival for the
/// provided departure date.
pub(super) async fn search(
    context: &Context,
    country: String,
    departure: Option<String>,
) -> Result<(), ()> {
    let departure = match departure.as_deref() {
        Some(raw) => Some(common::Date::from_iso8601(raw).map_err(|e| {
            log::error!("`{raw}` is not a valid date (YYYY-MM-DD): {e}");
        })?),
        None => None,
    };

    let visas = context
        .service()
        .execute(query::visas::List::by(Some(country.clone())))
        .await
        .map_err(|e| log::error!("{}", e.as_ref().user_message()))?;

    if visas.is_empty() {
        println!("No visas found for {country}");
        return Ok(());
    }

    for visa in &visas {
        println!("#{id} {title}", id = visa.id, title = visa.title);
        let mut details = Vec::new();
        if let Some(entry) = &visa.entry_type {
            details.push(format!("Entry: {entry}"));
        }
        if let Some(validity) = &visa.validity {
            details.push(format!("Validity: {validity}"));
        }
        if let Some(duration) = &visa.duration {
            details.push(format!("Duration: {duration}"));
        }
        if let Some(time) = &visa.processing_time {
            details.push(format!("Processing: {time}"));
        }
        details.push(format!(
            "Price: {}",
            share::summary::rupees(visa.price),
        ));
        println!("  {}", details.join(" | "));

        if let Some(departure) = departure {
            println!(
                "  Estimated visa arrival by {}",
                visa::arrival_label(visa.estimated_arrival(departure)),
            );
        }
    }
    Ok(())
}
