fn main() {
    if let Err(err) = sku_matcher::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
