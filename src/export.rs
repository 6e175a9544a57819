use crate::model::ProjectRecord;
use crate::view::ProjectView;
use eyre::{Result, WrapErr};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Serialize)]
struct ProjectRow<'a> {
    title: &'a str,
    description: &'a str,
    tech: String,
    overflow: usize,
    image_url: Option<&'a str>,
    live_url: Option<&'a str>,
    github_url: Option<&'a str>,
}

pub fn export_csv(path: &Path, projects: &[ProjectRecord]) -> Result<()> {
    let file = std::fs::File::create(path).context("cannot create CSV file")?;
    write_csv(file, projects)
}

fn write_csv<W: Write>(writer: W, projects: &[ProjectRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for p in projects {
        let view = ProjectView::build_lossy(p);
        writer
            .serialize(ProjectRow {
                title: &view.title,
                description: &view.description,
                tech: view.displayed_tech.join(";"),
                overflow: view.overflow_count,
                image_url: view.image_url.as_deref(),
                live_url: view.live_url.as_deref(),
                github_url: view.github_url.as_deref(),
            })
            .context("cannot write CSV record")?;
    }
    writer.flush().context("cannot flush CSV file")?;
    Ok(())
}

#[test]
fn test_write_csv() {
    use crate::model::ProjectId;
    let projects = vec![ProjectRecord {
        id: ProjectId(1),
        title: "site".into(),
        description: "a web site".into(),
        tech_stack: Some(r#"["Rust","SQL","TOML","CSS"]"#.into()),
        image_url: None,
        live_url: Some("https://example.com".into()),
        github_url: None,
        featured: true,
    }];
    let mut out = Vec::new();
    write_csv(&mut out, &projects).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "title,description,tech,overflow,image_url,live_url,github_url\n\
         site,a web site,Rust;SQL;TOML,1,,https://example.com,\n"
    );
}
