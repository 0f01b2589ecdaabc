//! CLI client for the OctoFit API
//!
//! `octofit list <resource>` fetches one collection and prints it through
//! the same typed decode and table model the web UI uses.

use clap::{Args, ValueEnum};
use octofit_shared::{
    decode_collection, Activity, ApiBase, Resource, ResourceKind, TableView, Team, User, Workout,
};
use reqwest::Client;
use std::time::Duration;

/// CLI client for the OctoFit API
pub struct CliClient {
    client: Client,
    base: ApiBase,
}

impl CliClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base = ApiBase::parse(base_url)?;
        if base.is_relative() {
            anyhow::bail!("A server URL is required, e.g. --url http://localhost:8000");
        }

        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
            base,
        })
    }

    /// GET a collection and return its body
    pub async fn fetch_body(&self, kind: ResourceKind) -> anyhow::Result<String> {
        let url = self.base.endpoint(kind);
        tracing::debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            anyhow::bail!("GET {} failed: HTTP {}", url, resp.status());
        }

        Ok(resp.text().await?)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ResourceArg {
    Activities,
    Teams,
    Users,
    Workouts,
}

impl From<ResourceArg> for ResourceKind {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Activities => ResourceKind::Activities,
            ResourceArg::Teams => ResourceKind::Teams,
            ResourceArg::Users => ResourceKind::Users,
            ResourceArg::Workouts => ResourceKind::Workouts,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// List one collection
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Collection to list
    #[arg(value_enum)]
    pub resource: ResourceArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ListArgs {
    pub async fn execute(&self, client: &CliClient) -> anyhow::Result<()> {
        let kind = ResourceKind::from(self.resource);
        let body = client.fetch_body(kind).await?;
        print!("{}", render_collection(kind, &body, self.format)?);
        Ok(())
    }
}

/// Decode a collection body and render it in the requested format
pub fn render_collection(
    kind: ResourceKind,
    body: &str,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match kind {
        ResourceKind::Activities => render::<Activity>(body, format),
        ResourceKind::Teams => render::<Team>(body, format),
        ResourceKind::Users => render::<User>(body, format),
        ResourceKind::Workouts => render::<Workout>(body, format),
    }
}

fn render<R: Resource>(body: &str, format: OutputFormat) -> anyhow::Result<String> {
    let records = decode_collection::<R>(body)?;

    Ok(match format {
        OutputFormat::Table => TableView::from_records(&records).render_text(),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&records)?),
    })
}
