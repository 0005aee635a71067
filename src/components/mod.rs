//! Shared building blocks for the pages.

mod cards;
mod footer;
mod header;
mod layout;
mod stars;

pub use cards::*;
pub use footer::Footer;
pub use header::Header;
pub use layout::Layout;
pub use stars::StarRating;
