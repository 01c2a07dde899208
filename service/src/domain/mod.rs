//! Domain model of the holidays platform client.

pub mod catalog;
pub mod enquiry;
pub mod listing;
pub mod refdata;
pub mod user;
pub mod visa;

pub use self::{
    catalog::Criteria, enquiry::Wizard, listing::Listing, user::User,
    visa::Visa,
};
