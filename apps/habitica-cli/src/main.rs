//! Habitica export CLI - fetch tasks and profile data, write CSV files

use clap::Parser;
use habitica_cli::{
    logging, print_summary, run_profile_export, run_tasks_export, Cli, Commands, RunSummary,
};
use habitica_core::{
    DataExporter, ExportConfig, HabiticaClient, HabiticaConfig, HabiticaError, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // a missing .env file is fine; required variables are checked below
    let _ = dotenvy::dotenv();

    // missing credentials abort here, before any network call
    let config = HabiticaConfig::from_env()?;
    let export_config = match &cli.output_dir {
        Some(dir) => ExportConfig::new(dir),
        None => ExportConfig::from_env(),
    }
    .with_include_rewards(cli.include_rewards)
    .with_write_empty_files(!cli.skip_empty);

    let client = HabiticaClient::new(&config)?;
    let exporter = DataExporter::new(export_config);

    let mut summary = RunSummary::default();
    match cli.command {
        Commands::Export => {
            summary.profile = run_profile_export(&client, &exporter).await;
            summary.tasks = run_tasks_export(&client, &exporter).await;
        }
        Commands::Tasks => {
            summary.tasks = run_tasks_export(&client, &exporter).await;
        }
        Commands::Profile => {
            summary.profile = run_profile_export(&client, &exporter).await;
        }
    }

    print_summary(&summary, &mut std::io::stdout())?;

    if summary.all_failed() {
        return Err(HabiticaError::api("no data source could be exported"));
    }
    Ok(())
}
