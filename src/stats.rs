use crate::model::ProjectRecord;
use crate::view::decode_tech_stack_lossy;
use std::collections::HashMap;

/// Count how many projects mention each technology, over the full
/// decoded stacks rather than the truncated card view.
pub fn tech_frequencies(projects: &[ProjectRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for p in projects {
        for tech in decode_tech_stack_lossy(&p.title, p.tech_stack.as_deref()) {
            *counts.entry(tech).or_default() += 1;
        }
    }
    let mut frequencies = counts.into_iter().collect::<Vec<_>>();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies
}

#[cfg(test)]
fn record(id: i64, tech_stack: &str) -> ProjectRecord {
    use crate::model::ProjectId;
    ProjectRecord {
        id: ProjectId(id),
        title: format!("project {id}"),
        description: String::new(),
        tech_stack: Some(tech_stack.into()),
        image_url: None,
        live_url: None,
        github_url: None,
        featured: false,
    }
}

#[test]
fn test_tech_frequencies() {
    let projects = vec![
        record(1, r#"["Rust","SQL","Docker","Redis"]"#),
        record(2, r#"["Rust","SQL"]"#),
        record(3, "{broken"),
    ];
    assert_eq!(
        tech_frequencies(&projects),
        vec![
            ("Rust".to_owned(), 2),
            ("SQL".to_owned(), 2),
            ("Docker".to_owned(), 1),
            ("Redis".to_owned(), 1),
        ]
    );
}
