pub mod access;
pub mod input;
