pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod listings;
pub mod map;
pub mod profile;
pub mod services;
pub mod why_choose_us;

pub use contact::contact;
pub use footer::footer;
pub use gallery::gallery;
pub use hero::hero;
pub use listings::listings;
pub use map::map;
pub use profile::profile;
pub use services::{emblems, services};
pub use why_choose_us::why_choose_us;
