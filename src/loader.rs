use crate::model::{ProjectId, ProjectRecord, SkillRecord};
use eyre::{Report, Result, WrapErr};
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{AnyConnection, Connection, Row};
use std::str::FromStr;
use tracing::trace;

pub struct Loader {
    conn: AnyConnection,
}

impl Loader {
    pub async fn new(url: &str) -> Result<Self> {
        sqlx::any::install_default_drivers();
        Ok(Self {
            conn: AnyConnection::connect_with(&AnyConnectOptions::from_str(url)?).await?,
        })
    }

    pub async fn load(&mut self) -> Result<(Vec<ProjectRecord>, Vec<SkillRecord>)> {
        let projects = self.load_projects().await.context("cannot load projects")?;
        let skills = self.load_skills().await.context("cannot load skills")?;
        trace!(
            projects = projects.len(),
            skills = skills.len(),
            "loaded portfolio content",
        );
        Ok((projects, skills))
    }

    async fn load_projects(&mut self) -> Result<Vec<ProjectRecord>> {
        sqlx::query(
            "SELECT id, title, description, tech_stack, image_url, live_url, github_url, \
             featured FROM projects ORDER BY id",
        )
        .map(|row: AnyRow| {
            Ok::<_, Report>(ProjectRecord {
                id: ProjectId(row.get::<i64, _>("id")),
                title: row.get("title"),
                description: row.get("description"),
                tech_stack: row.get::<Option<String>, _>("tech_stack"),
                image_url: row.get::<Option<String>, _>("image_url"),
                live_url: row.get::<Option<String>, _>("live_url"),
                github_url: row.get::<Option<String>, _>("github_url"),
                featured: row.get::<i32, _>("featured") != 0,
            })
        })
        .fetch_all(&mut self.conn)
        .await?
        .into_iter()
        .collect()
    }

    async fn load_skills(&mut self) -> Result<Vec<SkillRecord>> {
        sqlx::query("SELECT name, category FROM skills ORDER BY category, name")
            .map(|row: AnyRow| {
                Ok::<_, Report>(SkillRecord {
                    name: row.get("name"),
                    category: row.get("category"),
                })
            })
            .fetch_all(&mut self.conn)
            .await?
            .into_iter()
            .collect()
    }
}
