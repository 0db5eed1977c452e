//! Standard exit codes for the faviconx binary
//!
//! Every fatal `FaviconError` maps to one of these through
//! `FaviconError::exit_code`.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Source image does not exist
pub const EXIT_SOURCE_NOT_FOUND: i32 = 102;

/// Source image is malformed or in a format the decoder does not know
pub const EXIT_DECODE_ERROR: i32 = 103;

/// Icon encoding failed outside the per-item recovery path
pub const EXIT_ENCODE_ERROR: i32 = 104;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;

/// Dependency error (SVG rasterizer not compiled in)
pub const EXIT_DEPENDENCY_ERROR: i32 = 110;
