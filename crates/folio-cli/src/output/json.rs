use folio_core::error::FolioError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), FolioError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
