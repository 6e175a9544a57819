use serde::Deserialize;

/// A career timeline entry, supplied through the configuration file
/// rather than the database.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub company: Option<String>,
    pub institution: Option<String>,
    pub description: String,
}

impl TimelineEntry {
    // A company takes precedence over an institution when both are given.
    pub fn affiliation(&self) -> Option<&str> {
        self.company.as_deref().or(self.institution.as_deref())
    }
}

#[test]
fn test_affiliation_precedence() {
    let mut entry = TimelineEntry {
        year: "2023".into(),
        title: "Senior developer".into(),
        company: Some("Acme".into()),
        institution: Some("MIT".into()),
        description: "dummy".into(),
    };
    assert_eq!(entry.affiliation(), Some("Acme"));
    entry.company = None;
    assert_eq!(entry.affiliation(), Some("MIT"));
    entry.institution = None;
    assert_eq!(entry.affiliation(), None);
}
