use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use mindgraph_core::{
    GraphOptions, LayoutEngine, Orientation, build_graph, extract_labels, render_prompt,
    render_prompt_with,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Core(#[from] mindgraph_core::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported config file {0} (expected .json, .yaml or .yml)")]
    ConfigFormat(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "mindgraph",
    about = "Turn indented dash outlines into mind map graphs (Graphviz DOT / JSON)",
    version
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the graph and print it as DOT (default) or JSON
    Build(BuildArgs),
    /// Print the flat list of item labels, ignoring hierarchy
    Labels {
        /// Outline file; omit or use '-' for stdin
        input: Option<String>,
        /// Print a JSON array instead of one label per line
        #[arg(long)]
        json: bool,
    },
    /// Print the outline request prompt for a topic
    Prompt {
        topic: String,
        /// Custom template file containing a `{topic}` slot
        #[arg(long, value_name = "FILE")]
        template: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Dot,
    Json,
}

#[derive(clap::Args, Debug)]
struct BuildArgs {
    /// Outline file; omit or use '-' for stdin
    input: Option<String>,

    /// Options file (.json, .yaml or .yml); flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Write output to a file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<String>,

    /// LR, TB, RL or BT
    #[arg(long)]
    orientation: Option<Orientation>,

    /// Drop items at this depth or deeper
    #[arg(long)]
    max_depth: Option<usize>,

    /// Replace the label of depth-0 items
    #[arg(long, value_name = "LABEL")]
    custom_root: Option<String>,

    /// Suppress items without children
    #[arg(long)]
    hide_leaves: bool,

    /// Highlight nodes whose label contains TERM (case-insensitive)
    #[arg(long, value_name = "TERM")]
    highlight: Option<String>,

    /// dot, neato, fdp, sfdp, twopi or circo
    #[arg(long)]
    engine: Option<LayoutEngine>,

    /// Add a bottom-right watermark caption
    #[arg(long, value_name = "TEXT")]
    watermark: Option<String>,

    /// Topic recorded as a `// Mind Map for TOPIC` comment in the output
    #[arg(long)]
    topic: Option<String>,

    /// Report the emitted node count on stderr
    #[arg(long)]
    show_count: bool,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!(path, bytes = text.len(), "wrote output");
            Ok(())
        }
    }
}

fn load_options(path: Option<&Path>) -> Result<GraphOptions, CliError> {
    let Some(path) = path else {
        return Ok(GraphOptions::default());
    };
    let text = std::fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let options = match ext.as_deref() {
        Some("json") => GraphOptions::from_json_str(&text)?,
        Some("yaml" | "yml") => GraphOptions::from_yaml_str(&text)?,
        _ => return Err(CliError::ConfigFormat(path.display().to_string())),
    };
    tracing::debug!(path = %path.display(), "loaded options");
    Ok(options)
}

fn resolve_options(args: &BuildArgs) -> Result<GraphOptions, CliError> {
    let mut options = load_options(args.config.as_deref())?;
    if let Some(orientation) = args.orientation {
        options.orientation = orientation;
    }
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    if let Some(root) = &args.custom_root {
        options.custom_root = Some(root.clone());
    }
    if args.hide_leaves {
        options.hide_leaf_nodes = true;
    }
    if let Some(term) = &args.highlight {
        options.highlight.term = Some(term.clone());
    }
    if let Some(engine) = args.engine {
        options.engine = engine;
    }
    if let Some(topic) = &args.topic {
        options.topic = Some(topic.clone());
    }
    if let Some(text) = &args.watermark {
        options = options.with_watermark(text.clone());
    }
    options.validate()?;
    Ok(options)
}

fn run_build(args: &BuildArgs) -> Result<(), CliError> {
    let options = resolve_options(args)?;
    let text = read_input(args.input.as_deref())?;
    let (graph, node_count) = build_graph(&text, &options);

    if args.show_count {
        eprintln!("Total nodes: {node_count}");
    }

    let rendered = match args.format {
        OutputFormat::Dot => graph.to_dot(),
        OutputFormat::Json => {
            let mut json = if args.pretty {
                serde_json::to_string_pretty(&graph)?
            } else {
                serde_json::to_string(&graph)?
            };
            json.push('\n');
            json
        }
    };
    write_text(&rendered, args.out.as_deref())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Build(args) => run_build(args),
        Command::Labels { input, json } => {
            let text = read_input(input.as_deref())?;
            let labels = extract_labels(&text);
            if *json {
                println!("{}", serde_json::to_string(&labels)?);
            } else {
                for label in &labels {
                    println!("{label}");
                }
            }
            Ok(())
        }
        Command::Prompt { topic, template } => {
            let prompt = match template {
                Some(path) => render_prompt_with(&std::fs::read_to_string(path)?, topic)?,
                None => render_prompt(topic),
            };
            print!("{prompt}");
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
