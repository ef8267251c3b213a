use clap::Parser;
use resume_booklet::{cli, config, error, logging, pipeline, prompt, tools};
use cli::Cli;
use config::Config;
use error::Result;
use pipeline::RunOptions;
use std::process::ExitCode;
use tools::Toolchain;

#[tokio::main]
async fn main() -> ExitCode {
    // usage errors exit 1, --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let options = RunOptions::from_cli(&cli, &config);

    pipeline::check_inputs(&options)?;
    let tools = Toolchain::discover(&config).await?;
    tracing::debug!(
        merger = %tools.merger.program.display(),
        converter = %tools.converter.program.display(),
        "tools resolved"
    );

    let mut prompter = prompt::stdio_prompter();
    let mut stdout = std::io::stdout();
    pipeline::run(&options, &tools, prompter.as_mut(), &mut stdout).await?;

    Ok(())
}
