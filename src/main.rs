use brag::application::{
    add_entry::parse_entry_date, init::init, AddEntryService, InitOutcome, ListEntriesService,
    StatsService, TopicService,
};
use brag::cli::prompt::{complete_draft, confirm_save, AddArgs};
use brag::cli::{format_entries, format_stats, format_topic_list, Cli, Commands, TopicCommands};
use brag::domain::{entry, FilterCriteria};
use brag::error::BragError;
use brag::infrastructure::FileSystemRepository;
use chrono::{Datelike, Local};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), BragError> {
    let repo = FileSystemRepository::discover(cli.dir.as_deref())?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Init => {
            match init(&repo)? {
                InitOutcome::Created => {
                    println!("Initialized brag directory at: {}", repo.root.display());
                    println!("  Created: {}", repo.config_path().display());
                    println!("  Created: {}/", repo.entries_dir().display());
                    println!();
                    println!("Next steps:");
                    println!("  1. Add a topic: brag topic add \"Your Topic\"");
                    println!("  2. Add an entry: brag add");
                }
                InitOutcome::AlreadyInitialized => {
                    println!("Brag directory already initialized at: {}", repo.root.display());
                }
            }
            Ok(())
        }
        Commands::Add {
            topic,
            title,
            impact,
            tags,
            date,
            yes,
        } => {
            let entry_date = match date {
                Some(input) => parse_entry_date(&input)?,
                None => today,
            };

            let service = AddEntryService::new(repo);
            let topics = service.topics()?;

            let args = AddArgs {
                topic,
                title,
                impact,
                tags,
            };
            let interactive = !args.is_complete();
            let draft = complete_draft(args, &topics)?;
            let new_entry = service.prepare(&draft, entry_date)?;

            if interactive && !yes {
                println!();
                println!("{}", entry::date_header(entry_date));
                println!("{}", entry::encode(&new_entry));
                println!();
                if !confirm_save()? {
                    println!("Entry discarded.");
                    return Ok(());
                }
            }

            let week = service.save(&new_entry)?;
            println!(
                "Entry saved to week {} ({})",
                week.week,
                new_entry.entry_date().format("%Y-%m-%d")
            );
            Ok(())
        }
        Commands::List {
            week,
            month,
            quarter,
            semester,
            year,
            topic,
        } => {
            let criteria = FilterCriteria {
                year,
                week,
                month,
                quarter,
                semester,
                topic,
            };

            let entries = ListEntriesService::new(repo).execute(&criteria, today)?;
            print!("{}", format_entries(&entries, &criteria.describe(today)));
            Ok(())
        }
        Commands::Topic { command } => {
            let service = TopicService::new(repo);
            match command {
                TopicCommands::Add { name } => {
                    let name = service.add(&name)?;
                    println!("Added topic: {}", name);
                }
                TopicCommands::List => {
                    print!("{}", format_topic_list(&service.list()?));
                }
            }
            Ok(())
        }
        Commands::Stats {
            year,
            from_week,
            to_week,
        } => {
            let year = year.unwrap_or_else(|| today.year());
            let stats = StatsService::new(repo).execute(year, from_week, to_week)?;
            print!("{}", format_stats(&stats));
            Ok(())
        }
    }
}
