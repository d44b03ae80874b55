// spatialmedia-cli/src/main.rs
//
// Entry point for the `spatialmedia` binary: set up logging, resolve the
// command line into a Configuration (help and input errors exit inside the
// parser) and print what was resolved.

use log::info;

fn main() {
    spatialmedia_cli::logging::init();

    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let config = spatialmedia_cli::parse(args);
    info!("Resolved configuration: {:?}", config);

    spatialmedia_cli::output::print_configuration(&config);
}
