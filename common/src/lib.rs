pub mod config;
pub mod constants;
pub mod maze;
pub mod world;

#[cfg(test)]
mod test_helpers;
