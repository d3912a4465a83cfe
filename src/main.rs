use clap::Parser;
use pintidy::application::{ConsolidateService, ListTagsService, UnmappedService};
use pintidy::cli::{format_report, format_tag_list, Cli, Commands};
use pintidy::error::PintidyError;
use pintidy::infrastructure::{Config, PinboardClient};

fn main() {
    // init logging from RUST_LOG env var with warn as default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PintidyError> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_from_path(&config_path)?;
    let client = PinboardClient::new(config.api_url.as_str(), config.get_token());

    match cli.command {
        Commands::Consolidate => {
            let service = ConsolidateService::new(client, config.tag_map());
            let report = service.execute()?;
            print!("{}", format_report(&report));
            Ok(())
        }
        Commands::Tags => {
            let service = ListTagsService::new(client);
            let tags = service.execute()?;
            print!("{}", format_tag_list(&tags));
            Ok(())
        }
        Commands::Unmapped => {
            let service = UnmappedService::new(client, config.tag_map());
            let tags = service.execute()?;
            print!("{}", format_tag_list(&tags));
            Ok(())
        }
    }
}
