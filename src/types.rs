// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records a site publishes and the matches a query produces.
//!
//! `SearchRecord` mirrors one entry of the generated `index.json`. Site
//! generators are sloppy about optional fields, so every field tolerates being
//! absent or `null` and comes out as an empty string.

use serde::{Deserialize, Deserializer, Serialize};

/// One searchable page, exactly as the site generator emitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub permalink: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl SearchRecord {
    /// Value of one searchable field.
    pub fn field(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Title => &self.title,
            FieldKey::Permalink => &self.permalink,
            FieldKey::Summary => &self.summary,
            FieldKey::Content => &self.content,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Record fields the fuzzy matcher can look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Title,
    Permalink,
    Summary,
    Content,
}

impl FieldKey {
    pub const ALL: [FieldKey; 4] = [
        FieldKey::Title,
        FieldKey::Permalink,
        FieldKey::Summary,
        FieldKey::Content,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Permalink => "permalink",
            FieldKey::Summary => "summary",
            FieldKey::Content => "content",
        }
    }
}

/// A ranked hit for one query.
///
/// `rank` is a fuzzy score where lower is better and `0.0` means every
/// matching field contained the query verbatim. `position` is the record's
/// ordinal in the loaded index and breaks ties between equal ranks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub record: SearchRecord,
    pub rank: f64,
    pub position: usize,
}
