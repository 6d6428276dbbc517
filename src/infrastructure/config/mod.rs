//! Configuration storage adapters

mod xdg;

pub use xdg::{XdgConfigStore, CONFIG_PATH_ENV};
