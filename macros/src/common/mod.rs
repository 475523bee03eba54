// Common utilities shared by the macros
//
// This module contains:
// - parse_utils: attribute helpers (repr lookup, derive filtering)

mod parse_utils;

pub use parse_utils::*;
