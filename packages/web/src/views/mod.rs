mod home;
pub use home::Home;

mod pages;
pub use pages::{Admin, Announcements, Contact, Gallery, Livestream, Prayers, Testimonies};

mod not_found;
pub use not_found::NotFound;
