use clap::Parser;
use colored::*;
use desnote::api::{CmdMessage, DesnoteApi, MessageLevel};
use desnote::commands::{helpers, list};
use desnote::error::{DesnoteError, Result};
use desnote::model::{Folder, Location, Note};
use desnote::peek;
use desnote::store::fs::FileBackend;
use directories::ProjectDirs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    // Stderr logger; level from RUST_LOG-style env, warnings by default.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn").and_then(|l| l.start());

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = DesnoteApi::load(FileBackend::new(data_dir()));

    match cli.command {
        Some(Commands::List { search }) => handle_list(&api, search),
        Some(Commands::Note { title, folder }) => handle_note(&mut api, title, folder),
        Some(Commands::Folder { name }) => handle_folder(&mut api, name),
        Some(Commands::Edit { selector, content }) => handle_edit(&mut api, selector, content),
        Some(Commands::Mv { selectors, to }) => handle_mv(&mut api, selectors, to),
        Some(Commands::Delete { selectors }) => handle_delete(&mut api, selectors),
        Some(Commands::Peek { selector }) => handle_peek(&mut api, selector),
        Some(Commands::Open { selector }) => handle_open(&mut api, selector),
        Some(Commands::Export { output }) => handle_export(&api, output),
        Some(Commands::Import { file, yes }) => handle_import(&mut api, file, yes),
        None => handle_list(&api, None),
    }?;

    // Persistence is best-effort; surface a failed mirror without failing
    // the command itself.
    if let Some(err) = api.last_persist_error() {
        eprintln!("{}", format!("Warning: changes not saved: {}", err).yellow());
    }
    Ok(())
}

fn data_dir() -> PathBuf {
    if let Ok(home) = std::env::var("DESNOTE_HOME") {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "desnote", "desnote")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".desnote"))
}

fn handle_list<S: desnote::store::StorageBackend>(
    api: &DesnoteApi<S>,
    search: Option<String>,
) -> Result<()> {
    let result = list::run(api.workspace(), search.as_deref());
    if result.listed_folders.is_empty() && result.listed_notes.is_empty() {
        println!("{}", "[EMPTY SYSTEM]".dimmed());
        return Ok(());
    }
    for folder in &result.listed_folders {
        print_folder(folder);
    }
    for note in &result.listed_notes {
        print_note(note, "");
    }
    Ok(())
}

fn handle_note<S: desnote::store::StorageBackend>(
    api: &mut DesnoteApi<S>,
    title: String,
    folder: Option<String>,
) -> Result<()> {
    let location = match folder {
        Some(selector) => helpers::resolve_container(api.workspace(), &selector)?,
        None => Location::Root,
    };
    let result = api.create_note(&title, &location)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_folder<S: desnote::store::StorageBackend>(
    api: &mut DesnoteApi<S>,
    name: String,
) -> Result<()> {
    let result = api.create_folder(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit<S: desnote::store::StorageBackend>(
    api: &mut DesnoteApi<S>,
    selector: String,
    content: Option<String>,
) -> Result<()> {
    let (location, note_id) = helpers::resolve_note(api.workspace(), &selector)?;
    let content = match content {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(DesnoteError::Io)?;
            buf
        }
    };
    let result = api.edit_note_content(&note_id, &location, &content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_mv<S: desnote::store::StorageBackend>(
    api: &mut DesnoteApi<S>,
    selectors: Vec<String>,
    to: String,
) -> Result<()> {
    for selector in &selectors {
        let entry = helpers::resolve_entry(api.workspace(), selector)?;
        api.toggle_select(entry);
    }
    if !api.can_bulk_move() {
        api.clear_selection();
        return Err(DesnoteError::Api(
            "Only notes can be moved; folders stay where they are.".to_string(),
        ));
    }
    let target = helpers::resolve_container(api.workspace(), &to)?;
    let result = api.bulk_move(&target)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete<S: desnote::store::StorageBackend>(
    api: &mut DesnoteApi<S>,
    selectors: Vec<String>,
) -> Result<()> {
    for selector in &selectors {
        let entry = helpers::resolve_entry(api.workspace(), selector)?;
        api.toggle_select(entry);
    }
    let result = api.bulk_delete()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_peek<S: desnote::store::StorageBackend>(
    api: &mut DesnoteApi<S>,
    selector: String,
) -> Result<()> {
    let (location, note_id) = helpers::resolve_note(api.workspace(), &selector)?;
    let result = api.toggle_peek(&note_id, &location)?;
    print_messages(&result.messages);
    if let Some(note) = result.affected_notes.first() {
        if note.is_peeked {
            println!("{}", peek::preview(&note.content).dimmed());
        }
    }
    Ok(())
}

fn handle_open<S: desnote::store::StorageBackend>(
    api: &mut DesnoteApi<S>,
    selector: String,
) -> Result<()> {
    let folder_id = helpers::resolve_folder(api.workspace(), &selector)?;
    let result = api.toggle_folder_expanded(&folder_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export<S: desnote::store::StorageBackend>(
    api: &DesnoteApi<S>,
    output: Option<PathBuf>,
) -> Result<()> {
    let blob = api.export_all()?;
    let path = output.unwrap_or_else(|| {
        let date = chrono::Utc::now().format("%Y-%m-%d");
        PathBuf::from(format!("desnote_backup_{}.json", date))
    });
    std::fs::write(&path, blob).map_err(DesnoteError::Io)?;
    println!("{}", format!("Exported to {}", path.display()).green());
    Ok(())
}

fn handle_import<S: desnote::store::StorageBackend>(
    api: &mut DesnoteApi<S>,
    file: PathBuf,
    yes: bool,
) -> Result<()> {
    let raw = std::fs::read_to_string(&file).map_err(DesnoteError::Io)?;
    let preview = api.preview_import(&raw)?;

    if !yes {
        let when = preview.timestamp.as_deref().unwrap_or("unknown");
        println!(
            "Restore backup from {}? Current data will be overwritten.",
            when
        );
        print!("[Y] To restore: ");
        io::stdout().flush().map_err(DesnoteError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(DesnoteError::Io)?;
        if input.trim() != "Y" {
            println!("{}", "Operation cancelled.".dimmed());
            return Ok(());
        }
    }

    let result = api.commit_import(preview);
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn print_folder(folder: &Folder) {
    let marker = if folder.is_expanded { "▾" } else { "▸" };
    println!(
        "{} {}  {}",
        marker,
        folder.name.bold(),
        format!("[{}] {} files", short_id(&folder.id), folder.notes.len()).dimmed()
    );
    if folder.is_expanded {
        if folder.notes.is_empty() {
            println!("    {}", "Empty Folder".dimmed());
        }
        for note in &folder.notes {
            print_note(note, "    ");
        }
    }
}

fn print_note(note: &Note, indent: &str) {
    println!(
        "{}• {}  {}",
        indent,
        note.title,
        format!("[{}]", short_id(&note.id)).dimmed()
    );
    if note.is_peeked {
        for line in peek::preview(&note.content).lines() {
            println!("{}  {}", indent, line.dimmed());
        }
    }
}
