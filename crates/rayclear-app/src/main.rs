use std::process::ExitCode;

use rayclear_engine::logging::init_logging;
use rayclear_engine::window::WinitPlatform;

fn main() -> ExitCode {
    init_logging(rayclear_app::logging_config());

    let mut platform = WinitPlatform::default();
    match rayclear_app::run(&mut platform) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
