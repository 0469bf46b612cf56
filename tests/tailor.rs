mod support;

use serde_json::json;
use vitae::{Document, tailor};

fn kw(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn tailors_summary_and_adds_meta() {
    let base = Document::from_value(json!({"basics": {"summary": "Engineer."}})).unwrap();
    let out = tailor(&base, "Senior Software Engineer", &kw(&["Python", "Docker"]));

    assert_eq!(
        out.into_value(),
        json!({
            "basics": {"summary": "Professional seeking Senior Software Engineer position. Engineer."},
            "meta": {"keywords": ["Python", "Docker"], "targetJob": "Senior Software Engineer"}
        })
    );
}

#[test]
fn base_document_is_not_mutated() {
    let base = support::sample_resume();
    let snapshot = base.clone();
    let out = tailor(&base, "Staff Engineer", &kw(&["Rust"]));

    assert_eq!(base, snapshot);
    assert_ne!(out, base);
}

#[test]
fn without_basics_only_meta_is_added() {
    let base = Document::from_value(json!({
        "work": [{"name": "Acme"}],
        "skills": [{"name": "Go"}]
    }))
    .unwrap();
    let out = tailor(&base, "SRE", &kw(&["Kubernetes"]));

    let mut expected = base.clone();
    expected.insert(
        "meta",
        json!({"keywords": ["Kubernetes"], "targetJob": "SRE"}),
    );
    assert_eq!(out, expected);
    assert!(!out.contains_key("basics"));
}

#[test]
fn summary_keeps_original_as_suffix() {
    let base = support::sample_resume();
    let original = base.get("basics").unwrap()["summary"]
        .as_str()
        .unwrap()
        .to_string();
    let out = tailor(&base, "Data Scientist", &[]);

    let summary = out.get("basics").unwrap()["summary"].as_str().unwrap();
    assert!(summary.ends_with(&original));
    let prefix = &summary[..summary.len() - original.len()];
    assert!(prefix.contains("Data Scientist"));
}

#[test]
fn missing_summary_becomes_prefix_only() {
    let base = Document::from_value(json!({"basics": {"name": "Ada"}})).unwrap();
    let out = tailor(&base, "Analyst", &[]);
    assert_eq!(
        out.get("basics"),
        Some(&json!({"name": "Ada", "summary": "Professional seeking Analyst position. "}))
    );
}

#[test]
fn existing_meta_fields_survive_and_keywords_are_overwritten() {
    let base = Document::from_value(json!({
        "meta": {"theme": "caffine", "keywords": ["old"], "targetJob": "old"}
    }))
    .unwrap();
    let out = tailor(&base, "Designer", &kw(&["Figma", "Figma", "CSS"]));
    assert_eq!(
        out.get("meta"),
        Some(&json!({
            "theme": "caffine",
            "keywords": ["Figma", "Figma", "CSS"],
            "targetJob": "Designer"
        }))
    );
}

#[test]
fn tailoring_is_deterministic() {
    let base = support::sample_resume();
    let words = kw(&["API", "Microservices"]);
    assert_eq!(
        tailor(&base, "Backend Engineer", &words),
        tailor(&base, "Backend Engineer", &words)
    );
}
