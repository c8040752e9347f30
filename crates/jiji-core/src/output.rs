use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::dictionary::SerializedDictionary;
use crate::error::OutputError;

/// Render the dictionary as a YAML mapping, metadata block first
pub fn to_yaml(dictionary: &SerializedDictionary) -> Result<String, OutputError> {
    Ok(serde_yaml::to_string(dictionary)?)
}

pub fn write_yaml<W: Write>(dictionary: &SerializedDictionary, writer: W) -> Result<(), OutputError> {
    serde_yaml::to_writer(writer, dictionary)?;
    Ok(())
}

pub fn save_yaml(dictionary: &SerializedDictionary, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_yaml(dictionary, &mut writer)?;
    writer.flush()?;

    tracing::info!(
        "Wrote {} entries to {}",
        dictionary.entries.len(),
        path.display()
    );
    Ok(())
}
