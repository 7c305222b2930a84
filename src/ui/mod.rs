//! UI components for the marketing site

pub mod common;
pub mod icon;
pub mod navbar;
pub mod pages;

pub use icon::{Icon, icons};
pub use navbar::Navbar;
