//! Plaintext summaries and share links.

use std::fmt::Write as _;

use common::{Date, Money};

use crate::domain::{visa, Listing, Visa};

/// Agency contact block appended to every summary.
#[derive(Clone, Debug)]
pub struct Contact {
    /// Agency name.
    pub name: String,

    /// Agency phone number.
    pub phone: String,

    /// Agency email address.
    pub email: String,
}

/// Renders the plaintext summary of a [`Listing`].
///
/// Deterministic: the same listing always yields a byte-identical string,
/// so the clipboard, WhatsApp and email consumers all share one generator.
#[must_use]
pub fn package(listing: &Listing, contact: &Contact) -> String {
    let mut out = String::new();

    _ = writeln!(out, "*{}*", listing.title);
    match (listing.duration(), price_line(listing)) {
        (Some(duration), Some(price)) => {
            _ = writeln!(out, "{duration} | {price}");
        }
        (Some(duration), None) => _ = writeln!(out, "{duration}"),
        (None, Some(price)) => _ = writeln!(out, "{price}"),
        (None, None) => {}
    }
    if let Some(city) = &listing.starting_city {
        _ = writeln!(out, "Starting from: {city}");
    }

    if !listing.destinations.is_empty() {
        let route = listing
            .destinations
            .iter()
            .map(|d| format!("{} ({}N)", d.name, d.nights))
            .collect::<Vec<_>>()
            .join(" - ");
        _ = writeln!(out, "Route: {route}");
    }

    section(&mut out, "Highlights", &listing.description);

    if !listing.itinerary.is_empty() {
        _ = writeln!(out);
        _ = writeln!(out, "Itinerary:");
        for day in &listing.itinerary {
            _ = writeln!(out, "Day {} - {}", day.day_number, day.title);
        }
    }

    section(&mut out, "Inclusions", &listing.inclusions);
    section(&mut out, "Exclusions", &listing.exclusions);

    footer(&mut out, contact);
    out
}

/// Renders the plaintext summary of a [`Visa`].
///
/// With a departure [`Date`] provided, includes the estimated arrival line
/// shown on the results page.
#[must_use]
pub fn visa(visa: &Visa, departure: Option<Date>, contact: &Contact) -> String {
    let mut out = String::new();

    _ = writeln!(out, "*{}*", visa.title);
    if let Some(country) = &visa.country {
        _ = writeln!(out, "Country: {country}");
    }

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
    if !details.is_empty() {
        _ = writeln!(out, "{}", details.join(" | "));
    }
    if let Some(time) = &visa.processing_time {
        _ = writeln!(out, "Processing time: {time}");
    }
    _ = writeln!(out, "Price: {}", rupees(visa.price));
    if let Some(departure) = departure {
        _ = writeln!(
            out,
            "Estimated visa arrival by {}",
            visa::arrival_label(visa.estimated_arrival(departure)),
        );
    }

    footer(&mut out, contact);
    out
}

/// Composes a WhatsApp chat link carrying the provided text.
///
/// Everything but digits is stripped from the phone number, matching what
/// the `wa.me` endpoint accepts.
#[must_use]
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    let digits = phone
        .chars()
        .filter(char::is_ascii_digit)
        .collect::<String>();
    format!("https://wa.me/{digits}?text={}", encode_component(text))
}

/// Composes a `mailto:` link with the provided subject and body.
#[must_use]
pub fn mailto_link(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        encode_component(subject),
        encode_component(body),
    )
}

/// Formats a [`Money`] amount as a rupee label with Indian digit grouping
/// (e.g. `₹ 2,00,000`).
#[must_use]
pub fn rupees(money: Money) -> String {
    let amount = money.amount.trunc().to_string();
    let (sign, digits) = match amount.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", amount.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + 4);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        let remaining = len - i;
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("\u{20b9} {sign}{grouped}")
}

/// Writes a bulleted section, skipped entirely when there are no items.
fn section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    _ = writeln!(out);
    _ = writeln!(out, "{heading}:");
    for item in items {
        _ = writeln!(out, "- {item}");
    }
}

/// Writes the fixed contact footer.
fn footer(out: &mut String, contact: &Contact) {
    _ = writeln!(out);
    _ = writeln!(out, "For bookings & queries:");
    _ = writeln!(out, "{}", contact.name);
    _ = writeln!(out, "Call/WhatsApp: {}", contact.phone);
    _ = write!(out, "Email: {}", contact.email);
}

/// Returns the price line of a [`Listing`], if it has a non-zero price.
fn price_line(listing: &Listing) -> Option<String> {
    if listing.offer_price.is_zero() {
        return None;
    }
    Some(match listing.price {
        Some(strike) if !strike.is_zero() => format!(
            "{} per person (was {})",
            rupees(listing.offer_price),
            rupees(strike),
        ),
        Some(_) | None => {
            format!("{} per person", rupees(listing.offer_price))
        }
    })
}

/// Percent-encodes a query component, keeping RFC 3986 unreserved
/// characters as-is.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.'
            | b'~' => out.push(char::from(byte)),
            _ => _ = write!(out, "%{byte:02X}"),
        }
    }
    out
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::listing::{DestinationStay, ItineraryDay, Listing};

    use super::{
        mailto_link, package, rupees, whatsapp_link, Contact,
    };

    fn contact() -> Contact {
        Contact {
            name: "Sunrise Holidays".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            email: "hello@sunrise.example".to_owned(),
        }
    }

    fn listing() -> Listing {
        Listing {
            id: 7.into(),
            title: "Bali Getaway".parse().unwrap(),
            category: None,
            starting_city: Some("Mumbai".to_owned()),
            destinations: vec![
                DestinationStay {
                    name: "Ubud".to_owned(),
                    nights: 2,
                },
                DestinationStay {
                    name: "Kuta".to_owned(),
                    nights: 2,
                },
            ],
            nights: Some(4),
            days: Some(5),
            price: Some(Money::rupees(60_000)),
            offer_price: Money::rupees(49_999),
            with_flight: true,
            group_size: None,
            start_date: None,
            description: vec!["Private pool villa stay".to_owned()],
            inclusions: vec!["Daily breakfast".to_owned()],
            exclusions: vec!["Visa fees".to_owned()],
            itinerary: vec![ItineraryDay {
                day_number: 1,
                title: "Arrival in Bali".to_owned(),
                description: "Transfer to Ubud.".to_owned(),
                image: None,
            }],
            card_image: None,
            header_image: None,
        }
    }

    #[test]
    fn summary_is_idempotent() {
        let listing = listing();
        let contact = contact();
        assert_eq!(package(&listing, &contact), package(&listing, &contact));
    }

    #[test]
    fn summary_interpolates_every_section() {
        let text = package(&listing(), &contact());

        assert!(text.starts_with("*Bali Getaway*\n"));
        assert!(text.contains("4N / 5D | \u{20b9} 49,999 per person"));
        assert!(text.contains("(was \u{20b9} 60,000)"));
        assert!(text.contains("Route: Ubud (2N) - Kuta (2N)"));
        assert!(text.contains("Highlights:\n- Private pool villa stay"));
        assert!(text.contains("Day 1 - Arrival in Bali"));
        assert!(text.contains("Inclusions:\n- Daily breakfast"));
        assert!(text.contains("Exclusions:\n- Visa fees"));
        assert!(text.ends_with("Email: hello@sunrise.example"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut listing = listing();
        listing.inclusions.clear();
        listing.itinerary.clear();

        let text = package(&listing, &contact());
        assert!(!text.contains("Inclusions:"));
        assert!(!text.contains("Itinerary:"));
    }

    #[test]
    fn rupees_use_indian_grouping() {
        assert_eq!(rupees(Money::rupees(0)), "\u{20b9} 0");
        assert_eq!(rupees(Money::rupees(999)), "\u{20b9} 999");
        assert_eq!(rupees(Money::rupees(1_000)), "\u{20b9} 1,000");
        assert_eq!(rupees(Money::rupees(49_999)), "\u{20b9} 49,999");
        assert_eq!(rupees(Money::rupees(200_000)), "\u{20b9} 2,00,000");
        assert_eq!(rupees(Money::rupees(1_234_567)), "\u{20b9} 12,34,567");
    }

    #[test]
    fn whatsapp_link_keeps_only_digits_and_escapes_text() {
        let link = whatsapp_link("+91 98765-43210", "Bali & back");
        assert_eq!(
            link,
            "https://wa.me/919876543210?text=Bali%20%26%20back",
        );
    }

    #[test]
    fn mailto_link_escapes_subject_and_body() {
        let link = mailto_link("a@b.example", "Your trip", "Hi there!");
        assert_eq!(
            link,
            "mailto:a@b.example?subject=Your%20trip&body=Hi%20there%21",
        );
    }
}
