//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Operator console of the holidays travel platform.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Console command.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browses the holiday package catalog with the same filters as the
    /// website's browse page.
    Packages {
        /// Only packages of this category.
        #[arg(long)]
        category: Option<String>,

        /// Only packages visiting this destination.
        #[arg(long)]
        destination: Option<String>,

        /// Only packages with exactly this many nights.
        #[arg(long)]
        nights: Option<u16>,

        /// Only packages starting from this city.
        #[arg(long)]
        starting_city: Option<String>,

        /// Only packages up to this per-person price, in rupees.
        #[arg(long)]
        budget_max: Option<u32>,

        /// Flight-inclusion filter.
        #[arg(long, value_enum, default_value_t = FlightArg::All)]
        flight: FlightArg,
    },

    /// Shows one package in full.
    Package {
        /// ID of the package.
        id: u64,
    },

    /// Prints the shareable plaintext summary of a package, optionally as
    /// a WhatsApp or mailto link.
    Share {
        /// ID of the package.
        id: u64,

        /// Compose a WhatsApp link to this phone number instead.
        #[arg(long)]
        whatsapp: Option<String>,

        /// Compose a mailto link to this address instead.
        #[arg(long)]
        email: Option<String>,
    },

    /// Exports the paginated share document of a package.
    Export {
        /// ID of the package.
        id: u64,

        /// File to write the rendered document to (stdout otherwise).
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Submits a trip enquiry from a draft file, walking the same
    /// two-step validation as the website's enquiry wizard.
    Enquire {
        /// Path of the JSON enquiry draft.
        #[arg(long)]
        draft: PathBuf,

        /// Submit through the Umrah flow instead of the holiday one.
        #[arg(long)]
        umrah: bool,

        /// Package title the enquiry was opened from, if any.
        #[arg(long)]
        package: Option<String>,
    },

    /// Submits a quick general enquiry.
    Quick {
        /// Name of the enquirer.
        #[arg(long)]
        name: String,

        /// Phone number of the enquirer.
        #[arg(long)]
        phone: String,

        /// Email address of the enquirer.
        #[arg(long, default_value = "")]
        email: String,

        /// What the enquirer is looking for.
        #[arg(long, default_value = "")]
        purpose: String,

        /// Kind of the enquiry.
        #[arg(long, value_enum, default_value_t = EnquiryKindArg::General)]
        kind: EnquiryKindArg,
    },

    /// Searches visas for a destination country.
    Visas {
        /// Destination country.
        country: String,

        /// Departure date (`YYYY-MM-DD`) to estimate visa arrival for.
        #[arg(long)]
        departure: Option<String>,
    },

    /// Logs into the back-office, storing the session.
    Login {
        /// Username to log in as.
        username: String,

        /// Password to log in with.
        #[arg(long)]
        password: String,
    },

    /// Logs out, purging the stored session.
    Logout,

    /// Shows who is currently logged in.
    Whoami,

    /// Back-office management (requires a live session).
    #[command(subcommand)]
    Admin(AdminCommand),
}

/// Back-office command.
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Lists a back-office collection.
    List {
        /// Collection to list.
        collection: Collection,
    },

    /// Creates an entity from a JSON draft file.
    Add {
        /// Collection to create in.
        collection: Collection,

        /// Path of the JSON draft.
        draft: PathBuf,
    },

    /// Replaces an entity from a JSON draft file.
    Update {
        /// Collection to update in.
        collection: Collection,

        /// ID of the entity to replace.
        id: u64,

        /// Path of the JSON draft.
        draft: PathBuf,
    },

    /// Deletes an entity.
    Delete {
        /// Collection to delete from.
        collection: Collection,

        /// ID of the entity to delete.
        id: u64,
    },

    /// Emails visa details to a customer.
    SendVisa {
        /// ID of the visa to send.
        visa: u64,

        /// Recipient email address.
        #[arg(long)]
        recipient: String,

        /// Destination country to look the visa up under.
        #[arg(long)]
        country: Option<String>,

        /// Departure date (`YYYY-MM-DD`) to estimate visa arrival for.
        #[arg(long)]
        departure: Option<String>,
    },
}

/// Back-office collection.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Collection {
    /// Holiday packages.
    Packages,

    /// Destinations.
    Destinations,

    /// Starting cities.
    StartingCities,

    /// Nationalities.
    Nationalities,

    /// Visas.
    Visas,

    /// Umrah destinations (list-only from the console).
    UmrahDestinations,

    /// Back-office users.
    Users,

    /// Holiday enquiry inbox (read-only).
    HolidayEnquiries,

    /// Umrah enquiry inbox (read-only).
    UmrahEnquiries,

    /// General enquiry inbox (read-only).
    Enquiries,
}

/// Flight-inclusion filter argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FlightArg {
    /// No constraint.
    All,

    /// Only packages with flights included.
    WithFlight,

    /// Only packages without flights.
    WithoutFlight,
}

/// General enquiry kind argument.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum EnquiryKindArg {
    /// A general enquiry.
    General,

    /// A cab booking enquiry.
    Cab,

    /// A cruise enquiry.
    Cruise,
}
