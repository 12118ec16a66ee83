//! Tag normalization for tags and meta keywords.
//!
//! Both the comma-separated text inputs and the chip-style input end up in
//! the same canonical form: trimmed, lower-cased, non-empty, first occurrence
//! wins.

/// Canonical form of a single tag, or `None` when it is blank.
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let tag = raw.trim().to_lowercase();
    (!tag.is_empty()).then_some(tag)
}

/// Split a comma-separated input into canonical, de-duplicated tags.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut set = TagSet::default();
    for raw in input.split(',') {
        set.add(raw);
    }
    set.into_vec()
}

/// Render tags back into the comma-separated form used by text inputs.
#[must_use]
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

/// Ordered tag collection backing a chip input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    #[must_use]
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        for tag in tags {
            set.add(tag.as_ref());
        }
        set
    }

    /// Add one chip. Returns `false` if the input was blank or already present.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(tag) = normalize_tag(raw) else {
            return false;
        };
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a chip by its canonical value. Returns `true` if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.tags
    }
}

#[cfg(test)]
#[path = "tags_test.rs"]
mod tests;
