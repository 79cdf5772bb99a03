use legalscan_core::error::LegalScanError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), LegalScanError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
