fn main() {
    env_logger::init();

    let result = tileseam_cli::utf8_args(std::env::args_os().skip(1))
        .and_then(|args| tileseam_cli::run(&args));

    if let Err(err) = result {
        log::debug!("{err:?}");
        println!("{err}");
        std::process::exit(err.exit_code());
    }
}
