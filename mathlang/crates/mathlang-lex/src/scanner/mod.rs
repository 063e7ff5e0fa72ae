//! Scanner module.
//!
//! The scanner implementation is split into small, focused components:
//! - `core` - Scanner struct, dispatch and iteration
//! - `string` - Quoted string literals
//! - `number` - Digit runs
//! - `bare` - Whitespace-delimited names and symbols

mod bare;
mod core;
mod number;
mod string;

pub use self::core::{tokenize, Scanner};
