use std::fmt::Display;

use fdx_core::FdxError;

fn map_error(code: &'static str, error: impl Display) -> FdxError {
    FdxError::new(code, error.to_string())
}

pub(crate) fn emit_error(error: FdxError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code);
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.message).expect("string json")
    );
    1
}

pub(crate) fn map_source_path(error: std::io::Error) -> FdxError {
    map_error("CLI_SOURCE_PATH", error)
}

pub(crate) fn map_source_read(error: std::io::Error) -> FdxError {
    map_error("CLI_SOURCE_READ", error)
}

pub(crate) fn map_export_json(error: serde_json::Error) -> FdxError {
    map_error("CLI_EXPORT_JSON", error)
}

pub(crate) fn map_tui_io(error: std::io::Error) -> FdxError {
    map_error("TUI_IO", error)
}

#[cfg(test)]
mod error_map_tests {
    use super::*;

    #[test]
    fn emit_error_returns_non_zero_exit_code() {
        let code = emit_error(FdxError::new("ERR", "failed"));
        assert_eq!(code, 1);
    }

    #[test]
    fn mapping_helpers_keep_error_codes() {
        assert_eq!(
            map_source_path(std::io::Error::other("path")).code,
            "CLI_SOURCE_PATH"
        );
        assert_eq!(
            map_source_read(std::io::Error::other("read")).code,
            "CLI_SOURCE_READ"
        );
        assert_eq!(map_tui_io(std::io::Error::other("io")).code, "TUI_IO");

        let invalid = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
        assert_eq!(map_export_json(invalid).code, "CLI_EXPORT_JSON");
    }
}
