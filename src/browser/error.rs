use std::fmt;

#[derive(Debug)]
pub enum DriverError {
    /// Node.js helper process failed to spawn
    SubprocessSpawn { script: String, source: std::io::Error },

    /// I/O on the helper's stdin/stdout failed
    SessionIO(String),

    /// JSON parsing failed (helper output or serde)
    JsonParse { context: String, source: serde_json::Error },

    /// JSON serialization failed (request to the helper)
    JsonSerialize { context: String, source: serde_json::Error },

    /// Helper reported a command failure (ok=false)
    SessionProtocol { command: String, error: String },

    /// A bounded wait expired before its condition was met
    WaitTimeout { what: String, timeout_ms: u64 },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::SubprocessSpawn { script, source } => {
                write!(f, "Failed to spawn {} (is Node.js installed?): {}", script, source)
            }
            DriverError::SessionIO(msg) => {
                write!(f, "Driver session I/O failed: {}", msg)
            }
            DriverError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            DriverError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            DriverError::SessionProtocol { command, error } => {
                write!(f, "Driver command '{}' failed: {}", command, error)
            }
            DriverError::WaitTimeout { what, timeout_ms } => {
                write!(f, "Timed out after {}ms waiting for {}", timeout_ms, what)
            }
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::SubprocessSpawn { source, .. } => Some(source),
            DriverError::JsonParse { source, .. } => Some(source),
            DriverError::JsonSerialize { source, .. } => Some(source),
            _ => None,
        }
    }
}
