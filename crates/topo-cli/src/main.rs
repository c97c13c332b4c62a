#![forbid(unsafe_code)]

fn main() {
    if let Err(error) = topo_cli::run_from_env() {
        eprintln!("topo: {error}");
        std::process::exit(error.exit_code());
    }
}
