use crate::model::ProjectRecord;
use thiserror::Error;
use tracing::warn;

/// How many technology names a project card shows before eliding the
/// rest behind a "+N more" indicator.
pub const MAX_VISIBLE_TECH: usize = 3;

#[derive(Debug, Error)]
#[error("tech stack is not a JSON array of strings: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Decode a stored tech stack. An absent or blank value is an empty
/// stack; a present but malformed value is an error, never a panic.
pub fn decode_tech_stack(raw: Option<&str>) -> Result<Vec<String>, DecodeError> {
    match raw {
        None => Ok(Vec::new()),
        Some(s) if s.trim().is_empty() => Ok(Vec::new()),
        Some(s) => Ok(serde_json::from_str(s)?),
    }
}

/// Same as `decode_tech_stack`, but a malformed value logs a diagnostic
/// and yields an empty stack so one bad row cannot abort a listing.
pub fn decode_tech_stack_lossy(title: &str, raw: Option<&str>) -> Vec<String> {
    decode_tech_stack(raw).unwrap_or_else(|err| {
        warn!(project = %title, error = %err, "ignoring undecodable tech stack");
        Vec::new()
    })
}

/// The display-ready shape of a project record. It is rebuilt on every
/// render and carries no identity of its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectView {
    pub title: String,
    pub description: String,
    pub displayed_tech: Vec<String>,
    pub overflow_count: usize,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
}

impl ProjectView {
    /// Strict builder: a malformed tech stack propagates as `DecodeError`
    /// and the caller decides what to do with the record.
    pub fn build(record: &ProjectRecord) -> Result<ProjectView, DecodeError> {
        let tech = decode_tech_stack(record.tech_stack.as_deref())?;
        Ok(Self::from_tech(record, tech))
    }

    /// Rendering-policy builder: a malformed tech stack is logged and
    /// replaced by an empty one.
    pub fn build_lossy(record: &ProjectRecord) -> ProjectView {
        let tech = decode_tech_stack_lossy(&record.title, record.tech_stack.as_deref());
        Self::from_tech(record, tech)
    }

    fn from_tech(record: &ProjectRecord, mut tech: Vec<String>) -> ProjectView {
        let overflow_count = tech.len().saturating_sub(MAX_VISIBLE_TECH);
        tech.truncate(MAX_VISIBLE_TECH);
        ProjectView {
            title: record.title.clone(),
            description: record.description.clone(),
            displayed_tech: tech,
            overflow_count,
            image_url: record.image_url.clone(),
            live_url: record.live_url.clone(),
            github_url: record.github_url.clone(),
        }
    }

    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow_count > 0).then(|| format!("+{} more", self.overflow_count))
    }
}

#[cfg(test)]
fn record(tech_stack: Option<&str>) -> ProjectRecord {
    use crate::model::ProjectId;
    ProjectRecord {
        id: ProjectId(1),
        title: "dummy".into(),
        description: "a project".into(),
        tech_stack: tech_stack.map(String::from),
        image_url: None,
        live_url: None,
        github_url: None,
        featured: false,
    }
}

#[test]
fn test_truncation_bounds() {
    for n in 0..8 {
        let names = (0..n).map(|i| format!("\"t{i}\"")).collect::<Vec<_>>();
        let stack = format!("[{}]", names.join(","));
        let view = ProjectView::build(&record(Some(&stack))).unwrap();
        assert_eq!(view.displayed_tech.len(), n.min(MAX_VISIBLE_TECH));
        assert_eq!(view.overflow_count, n.saturating_sub(MAX_VISIBLE_TECH));
    }
}

#[test]
fn test_empty_stack_variants() {
    for raw in [None, Some(""), Some("  "), Some("[]")] {
        let view = ProjectView::build(&record(raw)).unwrap();
        assert!(view.displayed_tech.is_empty());
        assert_eq!(view.overflow_count, 0);
        assert_eq!(view.overflow_label(), None);
    }
}

#[test]
fn test_order_preserved() {
    let view = ProjectView::build(&record(Some(r#"["Go","Rust","C++","Python"]"#))).unwrap();
    assert_eq!(view.displayed_tech, ["Go", "Rust", "C++"]);
    assert_eq!(view.overflow_count, 1);
    assert_eq!(view.overflow_label().as_deref(), Some("+1 more"));
}

#[test]
fn test_malformed_stack_is_an_error() {
    let record = record(Some("{not valid json"));
    assert!(ProjectView::build(&record).is_err());
    assert!(decode_tech_stack(record.tech_stack.as_deref()).is_err());
}

#[test]
fn test_malformed_stack_lossy_policy() {
    let view = ProjectView::build_lossy(&record(Some("{not valid json")));
    assert!(view.displayed_tech.is_empty());
    assert_eq!(view.overflow_count, 0);
}

#[test]
fn test_non_string_elements_rejected() {
    assert!(decode_tech_stack(Some("[1,2,3]")).is_err());
    assert!(decode_tech_stack(Some(r#"{"a":"b"}"#)).is_err());
}

#[test]
fn test_absent_links_pass_through() {
    let view = ProjectView::build(&record(None)).unwrap();
    assert_eq!(view.image_url, None);
    assert_eq!(view.live_url, None);
    assert_eq!(view.github_url, None);
}

#[test]
fn test_idempotence() {
    let record = record(Some(r#"["Rust","SQL","TOML","CSS"]"#));
    assert_eq!(
        ProjectView::build(&record).unwrap(),
        ProjectView::build(&record).unwrap()
    );
}
