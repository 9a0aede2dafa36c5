use anyhow::Context;
use clap::Parser;
use std::path::Path;
use sum_check::utils::{logger, validation::Validate};
use sum_check::{CliConfig, EnvConfig, HttpChecker, RunConfig, SumCheckPipeline, TaskError, TaskRunner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let dispatch = logger::build_run_logger(cli.verbose, Path::new(&cli.log_file))
        .with_context(|| format!("failed to open log file '{}'", cli.log_file))?;
    let _guard = tracing::dispatcher::set_default(&dispatch);

    tracing::info!("Starting sum-check");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {}", e);
            exit_with(&e);
        }
    };
    tracing::info!("Source: {}, endpoint: {}", config.source, config.url);

    let pipeline = SumCheckPipeline::new(config, HttpChecker::new());
    match TaskRunner::new(pipeline).run().await {
        Ok(summary) => {
            tracing::debug!("Run summary: {:?}", summary);
            tracing::info!("✅ Program completed successfully.");
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn resolve_config(cli: &CliConfig) -> sum_check::Result<RunConfig> {
    cli.validate()?;
    let env = EnvConfig::from_file(&cli.env_file)?;
    let config = RunConfig::new(cli.source_mode()?, cli.input.clone(), env.url);
    config.validate()?;
    Ok(config)
}

fn exit_with(e: &TaskError) -> ! {
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
