//! Job-targeted edits to a résumé document.
//!
//! Tailoring is a fixed, deterministic rewrite: the `basics.summary` field gets a prefix naming
//! the target job, and a `meta` block records the job title and the keywords to emphasize.
//! Nothing else in the document is touched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::{Document, json_kind};

pub const BASICS_KEY: &str = "basics";
pub const SUMMARY_KEY: &str = "summary";
pub const META_KEY: &str = "meta";
pub const KEYWORDS_KEY: &str = "keywords";
pub const TARGET_JOB_KEY: &str = "targetJob";

/// A target job to tailor a résumé for.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailorRequest {
    pub job_title: String,
    /// Free-form posting text. Carried for callers; it does not affect the tailored output.
    #[serde(default)]
    pub job_description: String,
    /// Keywords in display order. Duplicates are kept.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl TailorRequest {
    pub fn new(job_title: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            job_title: job_title.into(),
            job_description: String::new(),
            keywords,
        }
    }

    pub fn with_description(mut self, job_description: impl Into<String>) -> Self {
        self.job_description = job_description.into();
        self
    }

    pub fn apply(&self, base: &Document) -> Document {
        tailor(base, &self.job_title, &self.keywords)
    }
}

/// Produce a copy of `base` tailored for `job_title`.
///
/// - If `basics` is an object, `basics.summary` becomes
///   `"Professional seeking {job_title} position. {original}"`, where a missing or null summary
///   counts as the empty string.
/// - `meta` is created if absent, then `meta.keywords` and `meta.targetJob` are overwritten.
///
/// `base` is never modified.
#[tracing::instrument(level = "debug", skip(base, keywords), fields(keywords = keywords.len()))]
pub fn tailor(base: &Document, job_title: &str, keywords: &[String]) -> Document {
    let mut tailored = base.clone();

    match tailored.get_mut(BASICS_KEY) {
        Some(Value::Object(basics)) => {
            let original = summary_text(basics.get(SUMMARY_KEY));
            basics.insert(
                SUMMARY_KEY.to_string(),
                Value::String(format!("{}{original}", summary_prefix(job_title))),
            );
        }
        Some(other) => {
            tracing::warn!(
                found = json_kind(other),
                "`basics` is not an object; leaving summary untouched"
            );
        }
        None => {}
    }

    let meta = tailored
        .get(META_KEY)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_else(|| {
            if let Some(other) = tailored.get(META_KEY) {
                tracing::warn!(found = json_kind(other), "`meta` is not an object; replacing it");
            }
            Map::new()
        });
    tailored.insert(META_KEY, Value::Object(with_job_meta(meta, job_title, keywords)));

    tailored
}

pub fn summary_prefix(job_title: &str) -> String {
    format!("Professional seeking {job_title} position. ")
}

fn summary_text(summary: Option<&Value>) -> String {
    match summary {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn with_job_meta(
    mut meta: Map<String, Value>,
    job_title: &str,
    keywords: &[String],
) -> Map<String, Value> {
    meta.insert(
        KEYWORDS_KEY.to_string(),
        Value::Array(keywords.iter().cloned().map(Value::String).collect()),
    );
    meta.insert(
        TARGET_JOB_KEY.to_string(),
        Value::String(job_title.to_string()),
    );
    meta
}
