mod about;
mod contact;
mod home;
mod intro;
mod navbar;
mod projects;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use intro::Intro;
pub use navbar::Navbar;
pub use projects::Projects;
