use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::Result;
use color_eyre::eyre::eyre;

use slotclip::clipboard::{JsonRpcTransport, LocalClipboard, MultiSlotClipboard, RemoteTransport};
use slotclip::config::{self, Config};
use slotclip::storage;

/// Multi-slot clipboard
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Multi-slot clipboard with named buffers on top of the system clipboard"
)]
struct Args {
    /// Clipboard file to load and save (default: configured path or the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the text held in a slot
    Get {
        #[arg(default_value = "1")]
        slot: String,
    },
    /// Store text in a slot, reading stdin when TEXT is omitted
    Set { slot: String, text: Option<String> },
    /// Print whether a slot holds text
    Has {
        #[arg(default_value = "1")]
        slot: String,
    },
    /// Empty a slot
    Clear {
        #[arg(default_value = "1")]
        slot: String,
    },
    /// Empty every slot
    ClearAll,
    /// Copy the system clipboard into a slot
    Copy {
        #[arg(default_value = "1")]
        slot: String,
        /// Clear the system clipboard afterwards
        #[arg(long)]
        clear: bool,
    },
    /// Copy a slot onto the system clipboard
    Paste {
        #[arg(default_value = "1")]
        slot: String,
    },
    /// List slots holding text with their first line
    List,
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    let args = Args::parse();

    let config_result = config::load_config();
    if let Some(warning) = &config_result.warning {
        log::warn!("{}; using defaults", warning);
    }
    let config = config_result.config;

    let path = match args.file.or_else(|| config.storage.path.clone()) {
        Some(path) => path,
        None => storage::default_clipboard_path()?,
    };

    let mut clipboard = build_clipboard(&config);
    if path.exists() {
        clipboard.load(&path)?;
    }

    run(args.command, &mut clipboard, &path)
}

/// Logs go to stderr, `warn` and above unless RUST_LOG says otherwise
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn build_clipboard(config: &Config) -> MultiSlotClipboard<LocalClipboard> {
    let remote = config.remote.endpoint().and_then(|url| {
        match JsonRpcTransport::new(url, config.remote.timeout()) {
            Ok(transport) => Some(Box::new(transport) as Box<dyn RemoteTransport>),
            Err(e) => {
                log::warn!("{}; remote clipboard disabled", e);
                None
            }
        }
    });

    MultiSlotClipboard::with_remote(LocalClipboard::new(config.clipboard.backend), remote)
}

fn run(
    command: Command,
    clipboard: &mut MultiSlotClipboard<LocalClipboard>,
    path: &Path,
) -> Result<()> {
    match command {
        Command::Get { slot } => {
            let text = clipboard
                .get_text(&slot)?
                .ok_or_else(|| eyre!("Slot {} is empty", slot))?;
            print!("{}", text);
            io::stdout().flush()?;
            return Ok(());
        }
        Command::Has { slot } => {
            println!("{}", clipboard.has_text(&slot)?);
            return Ok(());
        }
        Command::List => {
            for key in clipboard.slots() {
                let text = clipboard.get_text(&key)?.unwrap_or_default();
                println!("{}\t{}", key, text.lines().next().unwrap_or_default());
            }
            return Ok(());
        }
        Command::Paste { slot } => {
            clipboard.copy_to_system(&slot)?;
            return Ok(());
        }
        Command::Set { slot, text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            clipboard.set_text(Some(text), &slot)?;
        }
        Command::Clear { slot } => clipboard.clear_text(&slot)?,
        Command::ClearAll => clipboard.clear_all_text(),
        Command::Copy { slot, clear } => clipboard.copy_from_system(clear, &slot)?,
    }

    clipboard.save(path)?;
    Ok(())
}
