use crate::config::DatasetConfig;
use crate::model::{Project, ProjectId, Projects};
use eyre::{Result, WrapErr, eyre};
use sqlx::any::{AnyConnectOptions, AnyRow};
use sqlx::{AnyConnection, Connection, Row};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

const PROJECTS_QUERY: &str = "SELECT id, name, description, location, beneficiaries, status, impact, category, icon, color FROM projects ORDER BY id";

/// Build the project repository from the configured source.
#[instrument(skip_all)]
pub async fn load_projects(config: &DatasetConfig) -> Result<Projects> {
    let projects = if let Some(url) = &config.database_url {
        let mut loader = Loader::new(url).await.wrap_err("cannot connect to database")?;
        loader.load().await?
    } else if let Some(path) = &config.csv {
        load_csv_file(path)?
    } else {
        info!("using built-in project dataset");
        return Ok(Projects::reference());
    };
    info!(projects = projects.len(), "projects loaded");
    Ok(Projects::new(projects)?)
}

pub fn load_csv_file(path: &Path) -> Result<Vec<Project>> {
    let file = std::fs::File::open(path)
        .wrap_err_with(|| format!("cannot open project file {}", path.display()))?;
    load_csv(file).wrap_err_with(|| format!("cannot load projects from {}", path.display()))
}

/// Read projects from CSV with a header row naming the project fields.
pub fn load_csv<R: Read>(reader: R) -> Result<Vec<Project>> {
    let mut reader = csv::Reader::from_reader(reader);
    reader
        .deserialize()
        .enumerate()
        .map(|(n, record)| record.wrap_err_with(|| format!("invalid project on line {}", n + 2)))
        .collect()
}

pub struct Loader {
    conn: AnyConnection,
}

impl Loader {
    pub async fn new(s: &str) -> Result<Self> {
        sqlx::any::install_default_drivers();
        Ok(Self {
            conn: AnyConnection::connect_with(&AnyConnectOptions::from_str(s)?).await?,
        })
    }

    pub async fn load(&mut self) -> Result<Vec<Project>> {
        let rows = sqlx::query(PROJECTS_QUERY)
            .fetch_all(&mut self.conn)
            .await
            .wrap_err("cannot load projects")?;
        debug!(rows = rows.len(), "fetched project rows");
        rows.iter().map(project_from_row).collect()
    }
}

fn project_from_row(row: &AnyRow) -> Result<Project> {
    let id = row.try_get::<i64, _>("id")?;
    let beneficiaries = row.try_get::<i64, _>("beneficiaries")?;
    let status = row.try_get::<String, _>("status")?;
    let impact = row.try_get::<String, _>("impact")?;
    Ok(Project {
        id: ProjectId(u32::try_from(id).map_err(|_| eyre!("invalid project id {id}"))?),
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        location: row.try_get("location")?,
        beneficiaries: u64::try_from(beneficiaries)
            .map_err(|_| eyre!("project {id} has a negative number of beneficiaries"))?,
        status: status.parse().wrap_err_with(|| format!("project {id}"))?,
        impact: impact.parse().wrap_err_with(|| format!("project {id}"))?,
        category: row.try_get("category")?,
        icon: row.try_get::<Option<String>, _>("icon")?.unwrap_or_default(),
        color: row.try_get::<Option<String>, _>("color")?.unwrap_or_default(),
    })
}
