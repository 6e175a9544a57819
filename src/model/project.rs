#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct ProjectId(pub i64);

/// A project row as stored by the site. `tech_stack` keeps its stored
/// encoding (a JSON array of strings, or NULL); decoding happens in the
/// view layer so a malformed value is surfaced there, not at load time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub tech_stack: Option<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
}
