pub mod handler;

pub use handler::{ListCommand, MainCommand};
