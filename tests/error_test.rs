//! Error cases
//!
//! Display text of fatal errors is what the operator sees before exit 1.

use resume_booklet::error::BookletError;
use resume_booklet::scanner;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(BookletError::FolderNotFound(_))));
}

#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_error_display() {
    let errors = vec![
        BookletError::Config("bad".to_string()),
        BookletError::FileNotFound("members.csv".to_string()),
        BookletError::FolderNotFound("/resumes".to_string()),
        BookletError::ToolNotFound("pdfunite".to_string()),
        BookletError::NoConverter(vec!["lowriter".to_string()]),
        BookletError::NoPages,
        BookletError::Merge("exit 1".to_string()),
        BookletError::Prompt("not a terminal".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_tool_messages() {
    let err = BookletError::ToolNotFound("pdfunite".to_string());
    assert_eq!(
        format!("{}", err),
        "pdfunite not found, please install it to use this tool"
    );

    let err = BookletError::NoConverter(vec!["lowriter".into(), "soffice".into()]);
    assert_eq!(
        format!("{}", err),
        "No command found to convert doc to pdf, tried lowriter, soffice"
    );
}

#[test]
fn test_staging_errors_name_the_path() {
    let err = BookletError::StagingDir {
        path: PathBuf::from("/r/.working-pdfs"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    let display = format!("{}", err);
    assert!(display.contains("Error creating /r/.working-pdfs"));
    assert!(display.contains("denied"));

    let err = BookletError::StagingRead {
        path: PathBuf::from("/r/.working-pdfs"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert!(format!("{}", err).starts_with("Error reading /r/.working-pdfs"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BookletError = io_err.into();
    assert!(matches!(err, BookletError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: BookletError = json_err.into();
    assert!(matches!(err, BookletError::JsonParse(_)));
}

#[test]
fn test_common_error_is_transparent() {
    let common_err = booklet_common::Error::InvalidColumn("column 2 twice".to_string());
    let err: BookletError = common_err.into();

    assert!(matches!(err, BookletError::Common(_)));
    assert_eq!(format!("{}", err), "Invalid column layout: column 2 twice");
}
