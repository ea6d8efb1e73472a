use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "podsetup")]
#[command(version)]
#[command(about = "Configure the pod library template into a ready-to-build project", long_about = None)]
struct Cli {
    /// Name for the new pod (prompted for when omitted)
    name: Option<String>,

    /// Template root to configure
    #[arg(short, long, default_value = ".")]
    directory: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = podsetup::configure(cli.directory, cli.name.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
