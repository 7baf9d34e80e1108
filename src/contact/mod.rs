pub mod api;
pub mod controller;
pub mod form;
pub mod health;
pub mod phone;
pub mod simulated;

#[cfg(test)]
pub(crate) mod testing;
