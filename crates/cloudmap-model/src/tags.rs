//! Resource tag handling.

use std::collections::BTreeMap;

/// Tag mapping attached to every resource record.
///
/// Keys are unique; `BTreeMap` keeps iteration deterministic so repeated
/// renders of the same inventory stay byte-identical.
pub type Tags = BTreeMap<String, String>;

/// The tag key AWS uses for display names.
const NAME_TAG: &str = "Name";

/// Resolve a display name from the `Name` tag, if present.
///
/// This is the single tag-to-name rule the record constructors apply once
/// at construction time.
pub fn name_from_tags(tags: &Tags) -> Option<String> {
    tags.get(NAME_TAG).cloned()
}
