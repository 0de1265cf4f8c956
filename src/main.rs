fn main() {
    if let Err(e) = readable::run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
