use std::collections::HashSet;

/// Hands out sibling keys for a keyed list.
///
/// Documents are rendered even when they repeat an id, so a repeated id gets
/// its list position appended to stay unique among its siblings.
#[derive(Debug, Default)]
pub struct SiblingKeys {
    seen: HashSet<String>,
}

impl SiblingKeys {
    pub fn key_for(&mut self, id: &str, index: usize) -> String {
        let mut key = id.to_string();
        if self.seen.contains(&key) {
            key = format!("{id}#{index}");
        }
        self.seen.insert(key.clone());
        key
    }
}
