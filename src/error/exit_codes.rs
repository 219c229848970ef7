use crate::error::ForwardError;

pub fn get_exit_code(error: &ForwardError) -> i32 {
    match error {
        ForwardError::Usage(_) | ForwardError::ConfigError(_) => 2,

        ForwardError::JavaNotFound { .. } => 127, // Standard "command not found" exit code

        ForwardError::Spawn { source, .. } if source.kind() == std::io::ErrorKind::NotFound => 127,

        ForwardError::Spawn { source, .. }
            if source.kind() == std::io::ErrorKind::PermissionDenied =>
        {
            126
        }

        _ => 1,
    }
}
