mod app;
mod logging;

use std::io;

use engine_logging::engine_error;
use log::LevelFilter;

fn main() {
    logging::initialize(LevelFilter::Info);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(err) = app::run_session(&mut stdin.lock(), &mut stdout) {
        engine_error!("{err:#}");
    }
}
