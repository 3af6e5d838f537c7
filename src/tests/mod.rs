// Make common test utilities available
#[cfg(test)]
pub mod common;
#[cfg(test)]
mod controller;
