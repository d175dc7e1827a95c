use std::process::ExitCode;

use shipcrawl::cli::args;
use shipcrawl::logging;
use shipcrawl::services::game::Game;

fn main() -> ExitCode {
    let args = args::parse();
    logging::init(args.verbose);

    println!("*** SHIPCRAWL ***");
    println!();

    let mut game = match Game::new(&args) {
        Ok(game) => game,
        Err(e) => {
            log::error!("failed to set up the deck: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match game.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
