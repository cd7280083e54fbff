//! Outbound network calls.
//!
//! The site makes exactly one kind of request: posting the contact form to
//! the configured email relay.

pub mod contact;
