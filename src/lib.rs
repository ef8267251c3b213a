pub mod booklet;
pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod pipeline;
pub mod prompt;
pub mod reporter;
pub mod scanner;
pub mod staging;
pub mod tools;
