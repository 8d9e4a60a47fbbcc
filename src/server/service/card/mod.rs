//! Card customize services and the profile document codec.

pub mod codec;
pub mod message;
pub mod profile;
pub mod team;

#[cfg(test)]
mod tests;
