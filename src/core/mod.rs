//! Core domain logic for the waitlist capture flow

mod email;
mod waitlist;
#[cfg(test)]
mod tests;

pub use email::*;
pub use waitlist::*;
