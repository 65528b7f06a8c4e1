pub mod physics;
pub mod run;
pub mod state;

#[cfg(test)]
mod test_helpers;
