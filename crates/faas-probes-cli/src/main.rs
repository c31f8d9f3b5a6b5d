use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "faas-probes",
    about = "Render liveness and readiness probes for function deployments",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Provider probe config (TOML). Built-in defaults when omitted.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the probe pair for one function
    Build {
        /// Function name, used for logging only
        #[arg(short, long, default_value = "function")]
        service: String,
        /// Annotation as key=value. Repeatable; wins over --annotations-file.
        #[arg(short = 'a', long = "annotation", value_parser = commands::build::parse_annotation)]
        annotations: Vec<(String, String)>,
        /// JSON object of annotations
        #[arg(long)]
        annotations_file: Option<String>,
        /// Output format: json or text
        #[arg(short, long, default_value = "json")]
        format: String,
    },
    /// Print the effective provider config as TOML
    Config,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("faas_probes=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Build {
            service,
            annotations,
            annotations_file,
            format,
        } => commands::build::build(
            config,
            &service,
            annotations,
            annotations_file.as_deref(),
            &format,
        ),
        Commands::Config => commands::config::show(&config),
    }
}
