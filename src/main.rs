#![forbid(unsafe_code)]

use std::io::{BufRead, IsTerminal};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use chatlog_html::config::{ConfigOverrides, resolve_config};
use chatlog_html::{ChatResult, convert_cmd};

#[derive(Parser, Debug)]
#[command(name = "chatlog-html")]
#[command(about = "Render a plain-text chat transcript as a static HTML chat page", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set CHATLOG_HTML_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a transcript into an HTML page (the default)
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Transcript to read (default: chatlog.txt)
    #[arg(long)]
    input: Option<std::path::PathBuf>,
    /// HTML page to write, overwritten if present (default: index.html)
    #[arg(long)]
    output: Option<std::path::PathBuf>,
    /// Directory prefix for avatar images (default: images)
    #[arg(long)]
    icon_dir: Option<String>,
    /// Avatar image extension (default: png)
    #[arg(long)]
    icon_ext: Option<String>,
    /// TOML file with input/output/icon_dir/icon_ext settings
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    /// Also write the parsed messages as JSON to this file
    #[arg(long)]
    json: Option<std::path::PathBuf>,
    /// Exit right away instead of waiting for Enter on a terminal
    #[arg(long)]
    no_pause: bool,
}

impl ConvertArgs {
    /// Combine flags given before and after `convert`; values after the subcommand win.
    fn merge(self, later: ConvertArgs) -> ConvertArgs {
        ConvertArgs {
            input: later.input.or(self.input),
            output: later.output.or(self.output),
            icon_dir: later.icon_dir.or(self.icon_dir),
            icon_ext: later.icon_ext.or(self.icon_ext),
            config: later.config.or(self.config),
            json: later.json.or(self.json),
            no_pause: self.no_pause || later.no_pause,
        }
    }
}

impl Cli {
    fn into_convert_args(self) -> ConvertArgs {
        match self.command {
            Some(Commands::Convert(args)) => self.convert.merge(args),
            None => self.convert,
        }
    }
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("CHATLOG_HTML_LOG").unwrap_or_else(|_| {
        if verbose { "chatlog_html=debug".to_string() } else { "chatlog_html=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::ACTIVE)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn wait_for_keypress() {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return;
    }
    println!("何かキーを押すと終了します…");
    let mut line = String::new();
    let _ = stdin.lock().read_line(&mut line);
}

fn convert(args: ConvertArgs) -> ChatResult<bool> {
    let overrides = ConfigOverrides {
        input: args.input,
        output: args.output,
        icon_dir: args.icon_dir,
        icon_ext: args.icon_ext,
    };
    let config = resolve_config(args.config.as_deref(), overrides)?;
    let summary = convert_cmd::run(&config, args.json)?;
    println!("✅ {} を作成しました！", summary.output.display());
    Ok(!args.no_pause)
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match convert(cli.into_convert_args()) {
        Ok(pause) => {
            if pause {
                wait_for_keypress();
            }
        }
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }
}
