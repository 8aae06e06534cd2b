use wallet_ledger::{app, common::logging};

fn main() {
    logging::init_tracing();

    if let Err(e) = app::run(std::env::args()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
