use clap::Parser;
use ghost_import::application::{init::init, ImportOptions, ImportService};
use ghost_import::cli::{format_import_summary, Cli, Commands};
use ghost_import::error::ImportError;
use ghost_import::infrastructure::{FileSystemSite, SiteDirectories, SiteRepository, SiteTemplates};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ImportError> {
    match cli.command {
        Some(Commands::Import { file }) => {
            let Some(file) = file else {
                println!("Usage: ghost-import import <FILE>");
                println!("Import a Ghost blog export file");
                return Ok(());
            };

            let site = FileSystemSite::discover()?;
            let config = site.load_config()?;

            let service = ImportService::new(
                SiteDirectories::new(site.root(), &config),
                SiteTemplates::new(site.root().to_path_buf()),
                ImportOptions::from(&config),
            );
            let summary = service.run(&file)?;

            println!("{}", format_import_summary(&summary));
            Ok(())
        }
        Some(Commands::Init { path }) => init(&path),
        None => {
            println!("ghost-import - Ghost blog export converter");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
