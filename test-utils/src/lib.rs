//! mmreport testing utilities.
//!
//! See the `README.md` for more info.

pub mod data;
pub mod fs;
pub mod record;
