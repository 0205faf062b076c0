use crate::demo::{run_catalog_validate, run_demo, CatalogValidateArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use yojna_mitra::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Yojna Mitra",
    about = "Run and demonstrate the Yojna Mitra program finder from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect and validate program catalog files
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Run a scripted conversation end to end on the terminal
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Validate a catalog file and print a summary
    Validate(CatalogValidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog {
            command: CatalogCommand::Validate(args),
        } => run_catalog_validate(args),
        Command::Demo(args) => run_demo(args),
    }
}
