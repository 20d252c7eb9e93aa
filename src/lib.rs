pub mod domain;
pub mod ports;
pub mod application;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod testutil;
