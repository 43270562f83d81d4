//! Email address inference from company address patterns

mod generator;
mod pattern;

pub use generator::{first_word, generate_email, reduce_name};
pub use pattern::EmailPattern;
