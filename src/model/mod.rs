pub mod asset;
pub mod prompt;
