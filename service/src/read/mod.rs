//! Read-side projections.

pub mod enquiry;
