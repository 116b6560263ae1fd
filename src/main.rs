use log::LevelFilter;
use treeview::cli::Cli;

fn main() {
    let cli = Cli::new();

    let level = if cli.args().verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = cli.run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
