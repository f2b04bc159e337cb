use cairn::api::{CmdMessage, JournalApi, MessageLevel};
use cairn::config::JournalConfig;
use cairn::error::{CairnError, Result};
use cairn::location::StubGps;
use cairn::model::{EntryKind, PayloadSource};
use cairn::store::fs::FileStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands};

type Api = JournalApi<FileStore, StubGps>;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = JournalApi::new(FileStore::new(resolve_store_root(&cli)?), StubGps);

    match cli.command {
        Some(Commands::Start { name }) => handle_start(&mut api, &name),
        Some(Commands::Log {
            kind,
            content,
            name,
        }) => handle_log(&mut api, kind.into(), content, name),
        Some(Commands::End) => handle_end(&mut api),
        Some(Commands::List) => handle_list(&api),
        Some(Commands::Clear { yes }) => handle_clear(&mut api, yes),
        None => run_menu(&mut api),
    }
}

/// Store root precedence: --data-dir flag, CAIRN_DATA_DIR, configured
/// data_dir, platform data directory.
fn resolve_store_root(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("CAIRN_DATA_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    let proj_dirs = ProjectDirs::from("com", "cairn", "cairn")
        .ok_or_else(|| CairnError::Store("Could not determine a home directory".to_string()))?;
    let config = JournalConfig::load(proj_dirs.config_dir()).unwrap_or_default();
    Ok(config
        .data_dir
        .unwrap_or_else(|| proj_dirs.data_dir().to_path_buf()))
}

fn handle_start(api: &mut Api, name: &str) -> Result<()> {
    let result = api.start(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_log(
    api: &mut Api,
    kind: EntryKind,
    content: Option<String>,
    name: Option<String>,
) -> Result<()> {
    // Prompt for a new climb name up front when nothing is active, so
    // the auto-start goes through the same path `start` uses.
    let name_for_new = match api.active_climb()? {
        Some(_) => None,
        None => Some(match name {
            Some(n) => n,
            None => prompt("No active climb. Enter a name for your climb (no spaces): ")?,
        }),
    };

    let content = match content {
        Some(c) => c,
        None => prompt(match kind {
            EntryKind::Text => "Journal entry (text): ",
            EntryKind::Audio => "Path to audio file (or placeholder): ",
            EntryKind::Image => "Path to image file (or placeholder): ",
        })?,
    };

    let result = api.log_entry(kind, payload_from_input(kind, content), name_for_new.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn payload_from_input(kind: EntryKind, content: String) -> PayloadSource {
    match kind {
        EntryKind::Text => PayloadSource::Text(content),
        EntryKind::Audio | EntryKind::Image => {
            if Path::new(&content).is_file() {
                PayloadSource::FileRef(PathBuf::from(content))
            } else {
                PayloadSource::Placeholder(content)
            }
        }
    }
}

fn handle_end(api: &mut Api) -> Result<()> {
    let result = api.end()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &Api) -> Result<()> {
    let result = api.list()?;
    for summary in &result.climbs {
        let line = format!(
            "{}  {} entries, started {}",
            summary.id,
            summary.entry_count,
            summary.start_time.format("%Y-%m-%d %H:%M")
        );
        if summary.active {
            println!("{} {}", line.green(), "(active)".green().bold());
        } else {
            println!("{}", line);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(api: &mut Api, skip_confirm: bool) -> Result<()> {
    // Surface the guard before bothering the user with a prompt.
    if let Some(id) = api.active_climb()? {
        return Err(CairnError::ActiveClimb(id));
    }

    if !skip_confirm {
        let answer = prompt(
            "Are you sure you want to delete all climbs? This action cannot be undone. (yes/no): ",
        )?;
        if answer.to_lowercase() != "yes" {
            println!("Operation cancelled. Climbs were not deleted.");
            return Ok(());
        }
    }

    let result = api.clear_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn run_menu(api: &mut Api) -> Result<()> {
    loop {
        println!();
        println!("{}", "Mountaineering Journal".bold());
        println!("1. Start a new climb");
        println!("2. Log a journal entry");
        println!("3. End the climb");
        println!("4. List all climbs");
        println!("5. Clear all climbs");
        println!("6. Exit");
        let choice = prompt("Choose an option: ")?;

        let outcome = match choice.as_str() {
            "1" => menu_start(api),
            "2" => menu_log(api),
            "3" => handle_end(api),
            "4" => handle_list(api),
            "5" => handle_clear(api, false),
            "6" => {
                if menu_exit(api)? {
                    return Ok(());
                }
                Ok(())
            }
            _ => {
                println!("Invalid option. Try again.");
                Ok(())
            }
        };

        // A failed command aborts that command, not the session.
        if let Err(e) = outcome {
            eprintln!("{} {}", "Error:".red().bold(), e);
        }
    }
}

fn menu_start(api: &mut Api) -> Result<()> {
    // Check first so the user is not prompted for a name in vain.
    if let Some(id) = api.active_climb()? {
        return Err(CairnError::AlreadyActive(id));
    }
    let name = prompt("Enter a name for your climb (no spaces): ")?;
    handle_start(api, &name)
}

fn menu_log(api: &mut Api) -> Result<()> {
    let kind: EntryKind = prompt("Entry type (text, audio, image): ")?.parse()?;
    handle_log(api, kind, None, None)
}

/// Returns true when the REPL should terminate.
fn menu_exit(api: &mut Api) -> Result<bool> {
    match api.active_climb()? {
        Some(id) => {
            let answer = prompt(&format!(
                "An active climb is ongoing: '{}'. Exiting will end the current climb. Do you want to proceed? (yes/no): ",
                id
            ))?;
            if answer.to_lowercase() == "yes" {
                handle_end(api)?;
                Ok(true)
            } else {
                println!("Continuing the current climb.");
                Ok(false)
            }
        }
        None => Ok(true),
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush().map_err(CairnError::Io)?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input).map_err(CairnError::Io)?;
    if read == 0 {
        return Err(CairnError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed",
        )));
    }
    Ok(input.trim().to_string())
}

fn print_messages(messages: &[CmdMessage]) {
    for msg in messages {
        match msg.level {
            MessageLevel::Info => println!("{}", msg.content),
            MessageLevel::Success => println!("{}", msg.content.green()),
            MessageLevel::Warning => println!("{}", msg.content.yellow()),
        }
    }
}
