use clap::{crate_version, value_parser, Arg, Command};

mod logger;
mod menu;

fn main() {
    logger::init();

    let matches = Command::new("filmlab")
        .version(crate_version!())
        .about("Interactive BMP image processing")
        .arg(
            Arg::new("input_file")
                .help("Path to the initial input BMP file")
                .value_parser(value_parser!(String))
                .required(false),
        )
        .get_matches();

    let input_file = matches.get_one::<String>("input_file").cloned();
    menu::run(input_file);
}
