use crate::error::*;
use std::io;

#[test]
fn test_usage_error_exit_code() {
    let error = ForwardError::Usage("missing <LEVEL>".to_string());
    assert_eq!(get_exit_code(&error), 2);
}

#[test]
fn test_config_error_exit_code() {
    let error = ForwardError::ConfigError("bad level_argument".to_string());
    assert_eq!(get_exit_code(&error), 2);
}

#[test]
fn test_java_not_found_exit_code() {
    let error = ForwardError::JavaNotFound {
        program: "java".to_string(),
        reason: "cannot find binary path".to_string(),
    };
    assert_eq!(get_exit_code(&error), 127);
}

#[test]
fn test_spawn_error_exit_codes() {
    let not_found = ForwardError::Spawn {
        program: "java".to_string(),
        source: io::Error::from(io::ErrorKind::NotFound),
    };
    assert_eq!(get_exit_code(&not_found), 127);

    let denied = ForwardError::Spawn {
        program: "java".to_string(),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
    };
    assert_eq!(get_exit_code(&denied), 126);

    let other = ForwardError::Spawn {
        program: "java".to_string(),
        source: io::Error::other("boom"),
    };
    assert_eq!(get_exit_code(&other), 1);
}

#[test]
fn test_io_error_exit_code() {
    let error = ForwardError::from(io::Error::other("disk on fire"));
    assert_eq!(get_exit_code(&error), 1);
}

#[test]
fn test_error_context_usage() {
    let error = ForwardError::Usage("missing <LEVEL>".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("-pr <datFile> <levelNumber>"));
    assert!(context.details.is_none());
}

#[test]
fn test_error_context_java_not_found() {
    let error = ForwardError::JavaNotFound {
        program: "java".to_string(),
        reason: "cannot find binary path".to_string(),
    };
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.unwrap().contains("SUCC_FORWARD_JAVA"));
    assert!(context.details.unwrap().contains("cannot find binary path"));
}

#[test]
fn test_format_config_error() {
    let error = ForwardError::ConfigError("unknown level argument style 'both'".to_string());
    let formatted = format_error_with_color(&error, false);

    assert!(formatted.starts_with("Error: Configuration error: unknown level argument style"));
    assert!(formatted.contains("Suggestion:"));
}

#[test]
fn test_format_error_without_context() {
    let error = ForwardError::from(io::Error::other("disk on fire"));
    assert_eq!(format_error_with_color(&error, false), "Error: disk on fire\n");
}

#[test]
fn test_format_error_with_color() {
    let error = ForwardError::JavaNotFound {
        program: "java".to_string(),
        reason: "cannot find binary path".to_string(),
    };

    let plain = format_error_with_color(&error, false);
    assert!(plain.starts_with("Error: Java executable 'java' not found"));
    assert!(!plain.contains("\x1b["));

    let colored = format_error_with_color(&error, true);
    assert!(colored.contains("\x1b[31m"));
    assert!(colored.contains("\x1b[33m"));
}
