use clap::Parser;

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

    let app = match App::new(&args) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(-1);
        }
    };

    log::info!("1: transparency, 2: colour, 3: move along X, 4: move along Z, space: wireframe");

    app.run();
}
