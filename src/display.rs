use crate::model::{ProjectRecord, SkillRecord, TimelineEntry};
use crate::stats;
use crate::view::ProjectView;
use std::collections::BTreeMap;

pub fn display_projects(projects: &[ProjectRecord]) {
    for p in projects {
        let view = ProjectView::build_lossy(p);
        if p.featured {
            println!("{} (featured):", view.title);
        } else {
            println!("{}:", view.title);
        }
        if !view.description.is_empty() {
            println!("  {}", view.description);
        }
        if !view.displayed_tech.is_empty() {
            let badges = view
                .displayed_tech
                .iter()
                .map(|t| format!("[{t}]"))
                .collect::<Vec<_>>();
            print!("  {}", badges.join(" "));
            if let Some(label) = view.overflow_label() {
                print!(" {label}");
            }
            println!();
        }
        if let Some(url) = &view.image_url {
            println!("  image: {url}");
        }
        if let Some(url) = &view.live_url {
            println!("  live: {url}");
        }
        if let Some(url) = &view.github_url {
            println!("  code: {url}");
        }
        println!();
    }
}

pub fn display_skills(skills: &[SkillRecord]) {
    let mut by_category: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for skill in skills {
        by_category
            .entry(&skill.category)
            .or_default()
            .push(&skill.name);
    }
    if !by_category.is_empty() {
        println!("Skills:");
        for (category, mut names) in by_category {
            names.sort_unstable();
            println!("  - {}: {}", category, names.join(", "));
        }
        println!();
    }
}

pub fn display_timeline(entries: &[TimelineEntry]) {
    if !entries.is_empty() {
        println!("Timeline:");
        for entry in entries {
            println!("  {} - {}", entry.year, entry.title);
            if let Some(affiliation) = entry.affiliation() {
                println!("        {affiliation}");
            }
            println!("        {}", entry.description);
        }
        println!();
    }
}

pub fn display_stats(projects: &[ProjectRecord], skills: &[SkillRecord]) {
    let featured = projects.iter().filter(|p| p.featured).count();
    println!(
        "Projects featured/total: {}/{}",
        featured,
        projects.len()
    );
    let categories = skills
        .iter()
        .map(|s| &s.category)
        .collect::<std::collections::HashSet<_>>()
        .len();
    println!("Skills: {} in {} categories", skills.len(), categories);
    let frequencies = stats::tech_frequencies(projects);
    if !frequencies.is_empty() {
        println!("Technologies in use:");
        for (tech, count) in frequencies {
            println!("  - {tech}: {count}");
        }
    }
}
