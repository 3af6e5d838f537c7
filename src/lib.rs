mod views;
mod utils;
pub mod controller;
pub mod server;
pub mod content;
mod routes;
mod configs;
mod tests;
mod error;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::views::Intro;
pub use crate::configs::{ get_emailjs_config, EmailJsConfig };
pub use crate::error::{ ContactError, StorageError };
