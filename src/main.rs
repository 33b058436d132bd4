//! Photo Todo - Main Entry Point
//!
//! Drives the todo app from stdin, one command per line. The camera, gallery
//! and date picker are stand-ins answered by the command arguments.

use anyhow::{Context, Result, bail};
use clap::Parser;
use photo_todo::local::{Answer, FilePhotoSource, ScriptedDatePicker, TerminalAlert};
use photo_todo::logging::init_tracing;
use photo_todo::picker::parse_date;
use photo_todo::render::{format_draft, format_list};
use photo_todo::{
    AppConfig, CaptureOutcome, Collaborators, CommitOutcome, SourceKind, StoreObserver, TaskId,
    TaskRecord, TodoApp,
};
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Photo Todo - a todo list with due dates and photo attachments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "photo-todo.toml")]
    config: PathBuf,

    /// Log filter directive, overrides the config file (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,
}

const HELP: &str = "\
Commands:
  title <text>       set the draft title
  date <YYYY-MM-DD>  pick a due date (no argument = cancel the picker)
  camera <path>      take a photo (no argument = cancel)
  gallery <path>     choose a photo (no argument = cancel)
  nophoto            remove the draft photo
  save               add or save the draft
  new                discard the draft and start over
  edit <n>           edit task number n
  delete <n>         delete task number n
  list               show the task list
  draft              show the input form
  dump               print the task list as TOML
  config             print the effective configuration
  help               show this help
  quit               exit";

#[derive(Debug, PartialEq)]
enum Command {
    Title(String),
    Date(Option<String>),
    Camera(Option<PathBuf>),
    Gallery(Option<PathBuf>),
    NoPhoto,
    Save,
    New,
    Edit(usize),
    Delete(usize),
    List,
    Draft,
    Dump,
    Config,
    Help,
    Quit,
}

fn optional_arg(rest: &str) -> Option<String> {
    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

fn parse_index(rest: &str) -> Result<usize> {
    let n: usize = rest
        .trim()
        .parse()
        .with_context(|| format!("Invalid task number '{}'", rest.trim()))?;
    if n == 0 {
        bail!("Task numbers start at 1");
    }
    Ok(n - 1)
}

fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let command = match word {
        // Untrimmed; the store trims on commit
        "title" => Command::Title(rest.to_string()),
        "date" => Command::Date(optional_arg(rest)),
        "camera" => Command::Camera(optional_arg(rest).map(PathBuf::from)),
        "gallery" => Command::Gallery(optional_arg(rest).map(PathBuf::from)),
        "nophoto" => Command::NoPhoto,
        "save" => Command::Save,
        "new" => Command::New,
        "edit" => Command::Edit(parse_index(rest)?),
        "delete" => Command::Delete(parse_index(rest)?),
        "list" => Command::List,
        "draft" => Command::Draft,
        "dump" => Command::Dump,
        "config" => Command::Config,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => bail!("Unknown command '{}'. Type 'help' for a list.", other),
    };
    Ok(command)
}

/// Re-renders the list after every change
struct ListPrinter;

impl StoreObserver for ListPrinter {
    fn tasks_changed(&self, tasks: &[TaskRecord]) {
        println!("{}", format_list(tasks));
    }

    fn edit_started(&self, id: &TaskId) {
        info!(task_id = %id, "form loaded for editing");
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    tasks: &'a [TaskRecord],
}

/// Answers queued by commands before the matching collaborator runs
struct Scripts {
    date: Answer<chrono::NaiveDate>,
    camera: Answer<PathBuf>,
    gallery: Answer<PathBuf>,
}

fn build_app(config: AppConfig) -> (TodoApp, Scripts) {
    let scripts = Scripts {
        date: Answer::new(),
        camera: Answer::new(),
        gallery: Answer::new(),
    };
    let services = Collaborators {
        picker: Box::new(ScriptedDatePicker::new(scripts.date.clone())),
        camera: Box::new(FilePhotoSource::new(
            SourceKind::Camera,
            config.capture.camera_permission,
            scripts.camera.clone(),
        )),
        gallery: Box::new(FilePhotoSource::new(
            SourceKind::Gallery,
            config.capture.gallery_permission,
            scripts.gallery.clone(),
        )),
        alert: Box::new(TerminalAlert),
    };
    let mut app = TodoApp::new(config, services);
    app.subscribe(Box::new(ListPrinter));
    (app, scripts)
}

fn report_capture(outcome: &CaptureOutcome) {
    match outcome {
        CaptureOutcome::Granted(photo) => println!("Photo attached: {}", photo),
        CaptureOutcome::Cancelled => println!("No photo selected"),
        // The alert has already been shown
        CaptureOutcome::Denied => {}
    }
}

fn task_at(app: &TodoApp, index: usize) -> Result<TaskId> {
    match app.store().id_at(index) {
        Some(id) => Ok(id.clone()),
        None => bail!("No task number {}", index + 1),
    }
}

/// Run one command; returns `false` when the loop should stop
async fn execute(app: &mut TodoApp, scripts: &Scripts, command: Command) -> Result<bool> {
    match command {
        Command::Title(text) => app.type_title(text),
        Command::Date(arg) => {
            let date = arg.as_deref().map(parse_date).transpose()?;
            scripts.date.set(date);
            if !app.press_date().await {
                println!("Date unchanged");
            }
            println!("{}", format_draft(app.store().draft()));
        }
        Command::Camera(path) => {
            scripts.camera.set(path);
            report_capture(&app.press_camera().await);
        }
        Command::Gallery(path) => {
            scripts.gallery.set(path);
            report_capture(&app.press_gallery().await);
        }
        Command::NoPhoto => app.clear_photo(),
        Command::Save => match app.press_commit() {
            CommitOutcome::Rejected => println!("Enter a title first"),
            CommitOutcome::Vanished(id) => println!("Task {} was deleted while editing", id),
            CommitOutcome::Created(_) | CommitOutcome::Updated(_) => {}
        },
        Command::New => {
            app.new_entry();
            println!("{}", format_draft(app.store().draft()));
        }
        Command::Edit(index) => {
            let id = task_at(app, index)?;
            app.press_edit(&id);
            println!("{}", format_draft(app.store().draft()));
        }
        Command::Delete(index) => {
            let id = task_at(app, index)?;
            app.long_press(&id).await;
        }
        Command::List => println!("{}", format_list(app.store().tasks())),
        Command::Draft => println!("{}", format_draft(app.store().draft())),
        Command::Dump => {
            let snapshot = Snapshot {
                tasks: app.store().tasks(),
            };
            print!("{}", toml::to_string_pretty(&snapshot)?);
        }
        Command::Config => print!("{}", app.config().to_toml()?),
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;
    let level = args.log_level.as_deref().unwrap_or(&config.log.level);
    init_tracing(level)?;

    info!(config_path = %args.config.display(), "starting photo-todo");
    let (mut app, scripts) = build_app(config);
    println!("{}", format_list(app.store().tasks()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        let keep_going = match parse_command(&line) {
            Ok(command) => execute(&mut app, &scripts, command).await.unwrap_or_else(|e| {
                eprintln!("Error: {:#}", e);
                true
            }),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                true
            }
        };
        if !keep_going {
            break;
        }
    }

    info!(tasks = app.store().len(), "exiting");
    Ok(())
}
