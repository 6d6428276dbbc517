//! smoldb-site - the smolDB landing page in a terminal
//!
//! Renders the project's hero text, feature cards and the container run
//! command, and copies that command to the clipboard with a transient
//! confirmation.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Copy widget state, page content, theme and config values
//! - **Application**: The copy use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard, notify-rust, config file)
//! - **CLI**: Argument parsing, rendering and the mode runners

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
