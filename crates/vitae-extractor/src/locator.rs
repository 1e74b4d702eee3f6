//! Section location and date token isolation

use crate::patterns::PatternTable;
use crate::types::DateMatch;
use vitae_domain::EventKind;

/// Find the first marker-adjacent date of `kind` in the article text
///
/// Returns `None` when the marker never precedes a date.
pub fn locate_section<'t>(
    table: &PatternTable,
    kind: EventKind,
    text: &'t str,
) -> Option<DateMatch<'t>> {
    table.section(kind).find(text)
}

/// Strip a located section down to the date token
///
/// Returns `None` if the section contains no date at all. Sections produced
/// by [`locate_section`] always contain one, but callers must not rely on it.
pub fn extract_token<'t>(table: &PatternTable, section: &'t str) -> Option<DateMatch<'t>> {
    table.token().find(section)
}
