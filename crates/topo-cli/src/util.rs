use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CliError, Result};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read a whole file, or standard input for `-`.
pub fn read_source(path: &Path) -> Result<String> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(io_error)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(io_error)
    }
}

/// Read and deserialize a JSON document from a file or standard input.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = read_source(path)?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        origin: if path == Path::new(STDIN_PATH) {
            "stdin".to_string()
        } else {
            path.display().to_string()
        },
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::read_json;
    use crate::error::CliError;
    use std::path::Path;

    #[test]
    fn missing_file_is_an_io_error() {
        let error = read_json::<serde_json::Value>(Path::new("/nonexistent/topology.json"))
            .expect_err("missing file");
        assert!(matches!(error, CliError::Io { .. }));
        assert_eq!(error.exit_code(), 74);
    }
}
