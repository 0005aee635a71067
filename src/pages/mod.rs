//! One module per route, plus the fallback.

mod apps;
mod contact;
mod home;
mod not_found;
mod privacy;

pub use apps::AppsPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use privacy::{last_updated, PrivacyPage};
