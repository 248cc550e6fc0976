//! Result reporting
//!
//! - **text**: human-readable configuration and result blocks on stdout
//! - **json**: machine-readable report file

pub mod json;
pub mod text;
