// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Backend probe tool.
//!
//! A standalone CLI for checking the backend client against a running CMS
//! server, and a short tour of the `ApiClient` API.

use std::error::Error;
use std::io::Write as _;

use clap::{Parser, Subcommand};
use colored::Colorize as _;
use launchdesk_client::{ApiClient, ClientConfig, ClientError, Keywords};

/// Backend probe tool.
#[derive(Parser)]
#[command(name = "api_probe")]
#[command(about = "Landing-page CMS backend probe", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend API URL
    #[arg(long)]
    server: Option<String>,
    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List uploaded media objects
    Media,
    /// Show the launch window of one launch
    Launch {
        /// Launch identifier
        id: String,
    },
    /// List all launches
    Launches,
    /// List SEO settings of all launches
    Seo,
    /// Delete a media object
    Delete {
        /// Storage object key
        key: String,
    },
}

impl Cli {
    fn build_config(&self) -> Result<ClientConfig, Box<dyn Error>> {
        let server = self
            .server
            .clone()
            .or_else(|| std::env::var("LAUNCHDESK_API_URL").ok())
            .ok_or_else(|| {
                "LAUNCHDESK_API_URL must be provided via --server or LAUNCHDESK_API_URL env var"
                    .to_string()
            })?;

        Ok(ClientConfig {
            timeout_secs: self.timeout,
            user_agent: "launchdesk-api-probe/0.1.0".to_string(),
            ..ClientConfig::new(server)
        })
    }
}

async fn cmd_media(client: &ApiClient) -> Result<(), ClientError> {
    let media = client.list_media().await?;
    if media.is_empty() {
        println!("No media found");
        return Ok(());
    }

    println!("{:-<100}", "");
    println!("{:<50} {:<26} {:<20}", "Key", "Last modified", "Launch");
    println!("{:-<100}", "");
    for obj in &media {
        println!(
            "{:<50} {:<26} {}",
            obj.key.as_str(),
            obj.last_modified.as_deref().unwrap_or("-"),
            obj.launch_name.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}

async fn cmd_launch(client: &ApiClient, id: &str) -> Result<(), ClientError> {
    let dates = client.get_launch(id).await?;
    println!("Launch: {id}");
    println!("  start: {}", dates.launch_date);
    println!("  end:   {}", dates.end_date);
    Ok(())
}

async fn cmd_launches(client: &ApiClient) -> Result<(), ClientError> {
    let launches = client.list_launches().await?;
    if launches.is_empty() {
        println!("No launches found");
        return Ok(());
    }

    println!("{:-<80}", "");
    println!("{:<26} {:<30} {:<10} {:<10}", "Id", "Name", "Start", "End");
    println!("{:-<80}", "");
    for launch in &launches {
        println!(
            "{:<26} {:<30} {:<10} {:<10}",
            launch.id, launch.launch_name, launch.launch_date, launch.end_date
        );
    }
    Ok(())
}

async fn cmd_seo(client: &ApiClient) -> Result<(), ClientError> {
    let records = client.list_seo_settings().await?;
    if records.is_empty() {
        println!("No SEO settings found");
        return Ok(());
    }

    for record in &records {
        println!("{} {}", record.launch_id.bold(), record.title);
        let keywords = match &record.keywords {
            Some(Keywords::List(list)) => list.join(", "),
            Some(Keywords::Text(text)) => text.clone(),
            None => String::new(),
        };
        if !keywords.is_empty() {
            println!("  keywords: {keywords}");
        }
    }
    Ok(())
}

async fn cmd_delete(client: &ApiClient, key: &str) -> Result<(), ClientError> {
    client.delete_media(key).await?;
    println!("{}", "✓ Media deleted successfully".green());
    Ok(())
}

/// Format error for user-friendly display.
fn format_error(err: &ClientError) -> String {
    match err {
        ClientError::NotFound(path) => format!("{} Resource not found: {path}", "Error:".red().bold()),
        ClientError::Http(_) => format!(
            "{} Network error - check server URL and connection",
            "Error:".red().bold()
        ),
        other => format!("{} {other}", "Error:".red().bold()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Priority: .env.local (highest) -> .env -> existing environment variables (lowest)
    dotenvy::dotenv().ok();
    dotenvy::from_filename(".env.local").ok();

    let cli = Cli::parse();
    let config = cli.build_config()?;
    let client = ApiClient::new(config)?;

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        match cli.command {
            Commands::Media => cmd_media(&client).await,
            Commands::Launch { id } => cmd_launch(&client, &id).await,
            Commands::Launches => cmd_launches(&client).await,
            Commands::Seo => cmd_seo(&client).await,
            Commands::Delete { key } => cmd_delete(&client, &key).await,
        }
    });

    if let Err(e) = result {
        std::io::stdout().flush().ok();
        eprintln!("{}", format_error(&e));
        std::process::exit(1);
    }

    Ok(())
}
