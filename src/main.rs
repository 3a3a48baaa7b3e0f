use clap::Parser;
use petstore_e2e::cli::commands::{cmd_list, cmd_run, cmd_setup};
use petstore_e2e::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref());

    // Resolve base URL: CLI > env (applied in load_config) > config > default
    if let Some(ref url) = cli.base_url {
        config.base_url = url.clone();
    }

    match cli.command {
        Commands::Run {
            tag,
            workers,
            headed,
            format,
            output,
        } => {
            if let Some(n) = workers {
                config.workers = n;
            }
            if headed {
                config.headed = true;
            }
            let all_passed = cmd_run(
                &config,
                tag.as_deref(),
                &format,
                output.as_deref(),
                cli.verbose,
            )?;
            if !all_passed {
                std::process::exit(1);
            }
        }
        Commands::Setup => {
            cmd_setup(&config)?;
        }
        Commands::List => {
            cmd_list();
        }
    }

    Ok(())
}
