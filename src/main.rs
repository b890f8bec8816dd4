use ip_calculator::cli::{self, CommandLine};
use ip_calculator::config::Config;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = CommandLine::parse_args();
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("logging disabled, could not load log4rs.yml: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env();
    let code = cli::run(
        &args,
        config,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )?;
    std::process::exit(code);
}
