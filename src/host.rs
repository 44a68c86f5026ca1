//! Host hardware inventory lookups.
//!
//! The serial number comes from whatever firmware/management interface the
//! platform exposes. Every failure is reported as [`EventError::HostQuery`];
//! there is a single attempt and no fallback value.

use crate::error::{EventError, Result};
use tracing::{debug, warn};

/// Read-only access to the host's hardware inventory
pub trait HostInventory {
    /// Short name of the interface being queried, used in error messages
    fn source(&self) -> &'static str;

    fn serial_number(&self) -> Result<String>;
}

/// Query `inventory` once for the host serial number.
pub fn get_host_serial_number(inventory: &dyn HostInventory) -> Result<String> {
    debug!("Querying host serial number via {}", inventory.source());

    let serial = inventory.serial_number().map_err(|e| match e {
        EventError::HostQuery(msg) => EventError::HostQuery(msg),
        other => EventError::HostQuery(format!("{}: {}", inventory.source(), other)),
    });

    match serial {
        Ok(serial) => {
            let serial = serial.trim().to_string();
            if serial.is_empty() {
                warn!("{} returned an empty serial number", inventory.source());
                return Err(EventError::HostQuery(format!(
                    "{} returned an empty serial number",
                    inventory.source()
                )));
            }
            Ok(serial)
        }
        Err(e) => {
            warn!("Host serial number query failed: {}", e);
            Err(e)
        }
    }
}

/// The platform's own inventory interface
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInventory;

impl SystemInventory {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "linux")]
impl HostInventory for SystemInventory {
    fn source(&self) -> &'static str {
        "DMI (/sys/class/dmi/id/product_serial)"
    }

    fn serial_number(&self) -> Result<String> {
        std::fs::read_to_string("/sys/class/dmi/id/product_serial").map_err(|e| {
            EventError::HostQuery(format!("unable to read DMI product serial: {e}"))
        })
    }
}

#[cfg(target_os = "windows")]
impl HostInventory for SystemInventory {
    fn source(&self) -> &'static str {
        "CIM Win32_BIOS"
    }

    fn serial_number(&self) -> Result<String> {
        run_command(
            "powershell",
            &[
                "-NoProfile",
                "-NonInteractive",
                "-Command",
                "(Get-CimInstance -ClassName Win32_BIOS).SerialNumber",
            ],
        )
    }
}

#[cfg(target_os = "macos")]
impl HostInventory for SystemInventory {
    fn source(&self) -> &'static str {
        "IOKit (ioreg IOPlatformExpertDevice)"
    }

    fn serial_number(&self) -> Result<String> {
        let output = run_command("ioreg", &["-c", "IOPlatformExpertDevice", "-d", "2"])?;
        parse_ioreg_serial(&output).ok_or_else(|| {
            EventError::HostQuery("IOPlatformSerialNumber not present in ioreg output".into())
        })
    }
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
impl HostInventory for SystemInventory {
    fn source(&self) -> &'static str {
        "unsupported platform"
    }

    fn serial_number(&self) -> Result<String> {
        Err(EventError::HostQuery(format!(
            "no hardware inventory interface on {}",
            std::env::consts::OS
        )))
    }
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = std::process::Command::new(program)
        .args(args)
        .output()
        .map_err(|e| EventError::HostQuery(format!("failed to run {program}: {e}")))?;

    if !output.status.success() {
        return Err(EventError::HostQuery(format!(
            "{program} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Pull the value out of a line like `"IOPlatformSerialNumber" = "C02XK0AAJGH6"`
#[cfg(any(target_os = "macos", test))]
fn parse_ioreg_serial(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains("\"IOPlatformSerialNumber\""))
        .and_then(|line| line.split('=').nth(1))
        .map(|value| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}
