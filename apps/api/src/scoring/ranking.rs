//! Frequency ranking over an insertion-ordered count table.

use std::collections::HashMap;

/// Maximum number of JD keywords considered for matching.
pub const MAX_RANKED_KEYWORDS: usize = 30;

/// Keyword occurrence counts, iterated in order of first appearance.
#[derive(Debug, Default)]
pub struct FrequencyTable<'a> {
    entries: Vec<(&'a str, u32)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> FrequencyTable<'a> {
    pub fn from_keywords<S: AsRef<str>>(keywords: &'a [S]) -> Self {
        let mut table = Self::default();
        for keyword in keywords {
            table.record(keyword.as_ref());
        }
        table
    }

    pub fn record(&mut self, keyword: &'a str) {
        match self.index.get(keyword) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.index.insert(keyword, self.entries.len());
                self.entries.push((keyword, 1));
            }
        }
    }

    /// Distinct keywords sorted by descending count.
    /// `sort_by` is stable, so equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<&'a str> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.into_iter().map(|(keyword, _)| keyword).collect()
    }
}

/// Ranks keywords by descending frequency and keeps the top `MAX_RANKED_KEYWORDS`.
pub fn rank<S: AsRef<str>>(keywords: &[S]) -> Vec<String> {
    FrequencyTable::from_keywords(keywords)
        .ranked()
        .into_iter()
        .take(MAX_RANKED_KEYWORDS)
        .map(str::to_string)
        .collect()
}
