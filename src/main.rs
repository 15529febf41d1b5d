use human_panic::setup_panic;
use log::error;

use photo_cull::cli::{check_for_stdout_stream, get_config_path, get_matches, should_pause};
use photo_cull::prelude::*;
use photo_cull::prompt::ConsolePrompter;

fn main() {
    setup_panic!();

    let matches = get_matches();

    let log_file = match get_log_file(&matches) {
        Ok(log_file) => log_file,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = init_logger(get_verbosity(&matches), &log_file) {
        eprintln!("Error: Failed to initialise logger: {e}");
        std::process::exit(1);
    }

    let exit_code = match read_or_default(&get_config_path(&matches))
        .and_then(|settings| run(&matches, &settings, &mut ConsolePrompter))
    {
        Ok(()) => 0,
        Err(e) => {
            error!("Error: {e:#}");
            1
        }
    };

    if should_pause(&matches) {
        check_for_stdout_stream();
    }
    std::process::exit(exit_code);
}
