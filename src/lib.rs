pub mod cli;
pub mod count;
pub mod error;
pub mod exit;
pub mod input;
pub mod message;
pub mod tokens;
