use clap::{Parser, Subcommand};
use reqstool_logger as logger;
use reqstool_poetry::{commands::config, dispatch, GlobalOpts, HookContext, LifecycleEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reqstool-poetry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "reqstool build hooks for Poetry projects",
    long_about = "reqstool-poetry packages reqstool traceability data (requirements, \
                  verification cases, test results and code annotations) with a Poetry build. \
                  The host build calls one subcommand per lifecycle event."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate annotations and write reqstool_config.yml
    BuildStart,
    /// Add the reqstool files to [tool.poetry].include
    InstallStart,
    /// Remove reqstool_config.yml after the build
    BuildTerminate,
    /// Print the resolved [tool.reqstool] configuration
    ShowConfig,
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| logger::verbosity_to_filter().into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level(), cli.global.quiet) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing();

    let ctx = match HookContext::load(&cli.global.project_dir, cli.global.python.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            logger::error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let event = match cli.command {
        Commands::BuildStart => LifecycleEvent::BuildStart,
        Commands::InstallStart => LifecycleEvent::InstallStart,
        Commands::BuildTerminate => LifecycleEvent::BuildTerminate,
        Commands::ShowConfig => {
            config::show_config(&ctx);
            return;
        }
    };

    if let Err(e) = dispatch(event, &ctx) {
        logger::error(&format!("{:#}", e));
        if cli.global.verbosity_level() > 0 {
            logger::show_log_path();
        }
        std::process::exit(1);
    }
}
