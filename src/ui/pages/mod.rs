//! Application pages module
//!
//! This module contains all the page components for the site:
//! - Home page (marketing landing)
//! - Waitlist page (email capture)
//! - Not found page

mod home;
mod not_found;
mod waitlist;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use waitlist::WaitlistPage;
