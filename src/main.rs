fn main() {
    if let Err(e) = pss78::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
