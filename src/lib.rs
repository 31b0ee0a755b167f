//! n8n-setup - bootstrap and operate a dockerized n8n deployment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── setup         # Directories + .env + SQL
//! │   ├── env           # .env + SQL only
//! │   ├── start         # Refresh SQL, compose up
//! │   ├── lifecycle     # stop / status / logs
//! │   ├── backup        # pg_dump into backups/
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal formatting
//! └── core/             # Core library components
//!     ├── secret        # Password and encryption key generation
//!     ├── env           # .env parsing
//!     ├── template      # Placeholder substitution, .env and SQL rendering
//!     ├── compose       # Docker Compose detection and lifecycle calls
//!     ├── layout        # Project paths, atomic writes
//!     ├── config        # Optional n8n-setup.toml
//!     ├── prompt        # Yes/no confirmation
//!     └── constants     # File names, markers, defaults
//! ```

pub mod cli;
pub mod core;
pub mod error;
