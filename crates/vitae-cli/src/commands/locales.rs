//! Locales command implementation.

use crate::output::Formatter;

/// Execute the locales command.
pub fn execute_locales(formatter: &Formatter) {
    println!("{}", formatter.locales_table());
}
