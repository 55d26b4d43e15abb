use clap::Parser;

use demos_common::clock::{LocalClock, TimeSource};
use demos_common::logging::{init_logging, LoggingConfig};

mod app;
mod args;

use app::App;
use args::Args;

fn main() {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..Default::default()
    });

    let time_source = LocalClock;
    if time_source.now().is_none() {
        log::warn!("Could not determine the local time, all hands will point to 12");
    }

    let app = match App::new(&args, time_source) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(-1);
        }
    };

    app.run();
}
