use std::path::Path;

use serde::Serialize;
use tokio::fs;

use crate::error::Result;

/// Writes `records` as a 2-space indented JSON array, replacing the file.
pub async fn write_products_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).await?;
    Ok(())
}
