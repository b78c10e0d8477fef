use clap::crate_version;
use log::LevelFilter;

fn main() {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let m = fcrypt::cmd::cli().version(crate_version!()).get_matches();
    if let Err(e) = fcrypt::cmd::run(&m) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
