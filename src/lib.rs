pub mod commands;
pub mod config;
pub mod constants;
pub mod dates;
pub mod display;
pub mod error;
pub mod events;
pub mod host;
pub mod logging;
pub mod menu;
pub mod types;

pub use error::{EventError, Result};
pub use events::{create_event, get_defaults, get_info, get_info_with};
pub use host::{get_host_serial_number, HostInventory, SystemInventory};
