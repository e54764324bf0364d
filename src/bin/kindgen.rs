fn main() {
    if let Err(err) = kindgen::cli::run_cli() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
