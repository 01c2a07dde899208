//! Paginated share [`Document`] generation.

use crate::domain::Listing;

use super::{summary, Contact};

/// Height budget of one page's content, in layout points.
const PAGE_BUDGET: u32 = 720;

/// Height of the agency header block.
const HEADER_HEIGHT: u32 = 64;

/// Height of the title block.
const TITLE_HEIGHT: u32 = 48;

/// Height of the cover image block.
const COVER_HEIGHT: u32 = 192;

/// Height of a section heading.
const HEADING_HEIGHT: u32 = 24;

/// Height of one text line.
const LINE_HEIGHT: u32 = 14;

/// Cover image of a [`Document`].
///
/// The caller resolves the image; a failed load degrades the document to
/// its text-only form instead of aborting generation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Cover {
    /// The image was fetched successfully.
    Loaded {
        /// URL the image came from.
        url: String,
    },

    /// The image could not be fetched (or the listing has none).
    Unavailable,
}

/// One laid-out block of a [`Page`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Block {
    /// Agency header.
    Header {
        /// Agency name.
        agency: String,
    },

    /// Title block of the shared listing.
    Title {
        /// Listing title.
        title: String,

        /// `{nights}N / {days}D` label, when known.
        duration: Option<String>,

        /// Price label, when priced.
        price: Option<String>,
    },

    /// Cover image.
    Cover {
        /// URL of the image.
        url: String,
    },

    /// Section heading (e.g. `Itinerary`).
    Heading(String),

    /// One line of section content.
    Line(String),
}

/// One page of a [`Document`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    /// 1-based number of this [`Page`].
    pub number: u32,

    /// Laid-out [`Block`]s of this [`Page`], top to bottom.
    pub blocks: Vec<Block>,
}

/// Paginated share document of a [`Listing`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    /// [`Page`]s of this [`Document`], in order.
    pub pages: Vec<Page>,
}

impl Document {
    /// Returns the number of [`Page`]s of this [`Document`].
    #[must_use]
    pub fn page_count(&self) -> u32 {
        u32::try_from(self.pages.len()).unwrap_or(u32::MAX)
    }

    /// Renders this [`Document`] as plain text, one footer per page.
    #[must_use]
    pub fn render_text(&self) -> String {
        let total = self.page_count();
        let mut out = String::new();

        for page in &self.pages {
            for block in &page.blocks {
                match block {
                    Block::Header { agency } => {
                        out.push_str(&format!("===== {agency} =====\n"));
                    }
                    Block::Title {
                        title,
                        duration,
                        price,
                    } => {
                        out.push_str(&format!("{title}\n"));
                        if let Some(duration) = duration {
                            out.push_str(&format!("{duration}\n"));
                        }
                        if let Some(price) = price {
                            out.push_str(&format!("{price}\n"));
                        }
                    }
                    Block::Cover { url } => {
                        out.push_str(&format!("[cover image: {url}]\n"));
                    }
                    Block::Heading(heading) => {
                        out.push_str(&format!("\n{heading}\n"));
                    }
                    Block::Line(line) => {
                        out.push_str(&format!("  {line}\n"));
                    }
                }
            }
            out.push_str(&format!("\n-- Page {} of {total} --\n", page.number));
        }

        out
    }
}

/// Lays out the provided [`Listing`] into a paginated [`Document`].
///
/// Walks the listing's fields top to bottom, breaking to a new page
/// whenever the vertical budget is exhausted. Section headings are never
/// left orphaned at the bottom of a page.
#[must_use]
pub fn paginate(listing: &Listing, cover: &Cover, contact: &Contact) -> Document {
    let mut layout = Layout::default();

    layout.push(
        Block::Header {
            agency: contact.name.clone(),
        },
        HEADER_HEIGHT,
    );
    layout.push(
        Block::Title {
            title: listing.title.to_string(),
            duration: listing.duration(),
            price: (!listing.offer_price.is_zero())
                .then(|| summary::rupees(listing.offer_price)),
        },
        TITLE_HEIGHT,
    );
    if let Cover::Loaded { url } = cover {
        layout.push(Block::Cover { url: url.clone() }, COVER_HEIGHT);
    }

    layout.section(
        "Destinations",
        listing
            .destinations
            .iter()
            .map(|d| format!("{} - {} nights", d.name, d.nights)),
    );
    layout.section("Highlights", listing.description.iter().cloned());
    layout.section(
        "Itinerary",
        listing
            .itinerary
            .iter()
            .map(|day| format!("Day {} - {}", day.day_number, day.title)),
    );
    layout.section("Inclusions", listing.inclusions.iter().cloned());
    layout.section("Exclusions", listing.exclusions.iter().cloned());
    layout.section(
        "Contact",
        [
            contact.name.clone(),
            format!("Call/WhatsApp: {}", contact.phone),
            format!("Email: {}", contact.email),
        ]
        .into_iter(),
    );

    layout.into_document()
}

/// Incremental page layout state.
#[derive(Debug, Default)]
struct Layout {
    /// Completed pages.
    pages: Vec<Page>,

    /// Blocks of the page being laid out.
    current: Vec<Block>,

    /// Vertical space used on the current page.
    used: u32,
}

impl Layout {
    /// Appends a block of the provided height, breaking the page first if
    /// it would not fit.
    fn push(&mut self, block: Block, height: u32) {
        if self.used + height > PAGE_BUDGET && !self.current.is_empty() {
            self.break_page();
        }
        self.current.push(block);
        self.used += height;
    }

    /// Appends a whole section, keeping the heading together with at least
    /// its first line.
    fn section(&mut self, heading: &str, lines: impl Iterator<Item = String>) {
        let mut lines = lines.peekable();
        if lines.peek().is_none() {
            return;
        }

        if self.used + HEADING_HEIGHT + LINE_HEIGHT > PAGE_BUDGET
            && !self.current.is_empty()
        {
            self.break_page();
        }
        self.push(Block::Heading(heading.to_owned()), HEADING_HEIGHT);
        for line in lines {
            self.push(Block::Line(line), LINE_HEIGHT);
        }
    }

    /// Finishes the current page and starts a fresh one.
    fn break_page(&mut self) {
        let number = u32::try_from(self.pages.len()).unwrap_or(u32::MAX) + 1;
        self.pages.push(Page {
            number,
            blocks: std::mem::take(&mut self.current),
        });
        self.used = 0;
    }

    /// Finishes the layout into a [`Document`].
    fn into_document(mut self) -> Document {
        if !self.current.is_empty() || self.pages.is_empty() {
            self.break_page();
        }
        Document { pages: self.pages }
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::listing::{ItineraryDay, Listing};

    use super::{paginate, Block, Contact, Cover};

    fn contact() -> Contact {
        Contact {
            name: "Sunrise Holidays".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            email: "hello@sunrise.example".to_owned(),
        }
    }

    fn listing(itinerary_days: u16) -> Listing {
        Listing {
            id: 7.into(),
            title: "Bali Getaway".parse().unwrap(),
            category: None,
            starting_city: Some("Mumbai".to_owned()),
            destinations: Vec::new(),
            nights: Some(4),
            days: Some(5),
            price: None,
            offer_price: Money::rupees(49_999),
            with_flight: true,
            group_size: None,
            start_date: None,
            description: Vec::new(),
            inclusions: Vec::new(),
            exclusions: Vec::new(),
            itinerary: (1..=itinerary_days)
                .map(|n| ItineraryDay {
                    day_number: n,
                    title: format!("Day trip {n}"),
                    description: String::new(),
                    image: None,
                })
                .collect(),
            card_image: Some("https://img.example/bali.png".to_owned()),
            header_image: None,
        }
    }

    #[test]
    fn short_listing_fits_one_page() {
        let doc = paginate(
            &listing(3),
            &Cover::Loaded {
                url: "https://img.example/bali.png".to_owned(),
            },
            &contact(),
        );

        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0]
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Cover { .. })));
    }

    #[test]
    fn long_itinerary_spills_onto_numbered_pages() {
        let doc = paginate(&listing(80), &Cover::Unavailable, &contact());

        assert!(doc.page_count() > 1);
        let numbers = doc.pages.iter().map(|p| p.number).collect::<Vec<_>>();
        assert_eq!(
            numbers,
            (1..=doc.page_count()).collect::<Vec<_>>(),
        );

        let text = doc.render_text();
        assert!(text.contains(&format!("-- Page 1 of {} --", doc.page_count())));
    }

    #[test]
    fn unavailable_cover_degrades_to_text_only() {
        let doc = paginate(&listing(3), &Cover::Unavailable, &contact());

        assert_eq!(doc.page_count(), 1);
        assert!(!doc.pages[0]
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Cover { .. })));
        // The header and title still lead the document.
        assert!(matches!(doc.pages[0].blocks[0], Block::Header { .. }));
        assert!(matches!(doc.pages[0].blocks[1], Block::Title { .. }));
    }

    #[test]
    fn rendering_is_idempotent() {
        let doc = paginate(&listing(10), &Cover::Unavailable, &contact());
        assert_eq!(doc.render_text(), doc.render_text());
    }

    #[test]
    fn headings_are_not_orphaned() {
        let doc = paginate(&listing(80), &Cover::Unavailable, &contact());

        for page in &doc.pages {
            if let Some(Block::Heading(_)) = page.blocks.last() {
                panic!("page {} ends with an orphaned heading", page.number);
            }
        }
    }
}
