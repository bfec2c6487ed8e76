//! Custom assertion macros for contract and scenario tests.

/// Assert that a command succeeded, printing both streams on failure.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "command failed with exit code {}:\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}

/// Assert that stdout or stderr contains the given text.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $text:expr) => {
        assert!(
            $result.combined_output().contains($text),
            "expected output to contain {:?}, got:\n{}",
            $text,
            $result.combined_output()
        );
    };
}
