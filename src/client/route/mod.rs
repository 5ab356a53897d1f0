pub mod home;
pub mod not_found;
pub mod problems;

pub use home::Home;
pub use not_found::NotFound;
pub use problems::Problems;
