use super::Algorithm;
use clap::builder::EnumValueParser;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

pub fn cli() -> Command {
    Command::new("fcrypt")
        .about("file encryption & signature toolkit")
        .arg(
            Arg::new("algo")
                .long("algo")
                .short('a')
                .action(ArgAction::Set)
                .required(true)
                .value_parser(EnumValueParser::<Algorithm>::new())
                .help("algorithm: rsa, des, sha, aes, sign"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .action(ArgAction::Set)
                .required_unless_present("generate-key")
                .value_parser(value_parser!(PathBuf))
                .help("input file path"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .action(ArgAction::Set)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("output file path [default: <input>.enc|.dec|.sgn|.sha256]"),
        )
        .arg(
            Arg::new("decrypt")
                .long("decrypt")
                .short('d')
                .action(ArgAction::SetTrue)
                .required(false)
                .help("decrypt instead of encrypt"),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .short('k')
                .action(ArgAction::Set)
                .required(false)
                .value_parser(value_parser!(PathBuf))
                .help("key file path [default: default.key]"),
        )
        .arg(
            Arg::new("generate-key")
                .long("generate-key")
                .short('g')
                .action(ArgAction::SetTrue)
                .required(false)
                .help("generate and save a key, then exit"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .action(ArgAction::Set)
                .required(false)
                .value_parser(value_parser!(u64))
                .help("prime search start seed; the same seed reproduces the same rsa key"),
        )
}

#[cfg(test)]
mod tests {
    use super::cli;

    #[test]
    fn cli_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn input_required_unless_generating() {
        assert!(cli()
            .try_get_matches_from(["fcrypt", "-a", "rsa", "-g"])
            .is_ok());
        assert!(cli().try_get_matches_from(["fcrypt", "-a", "rsa"]).is_err());
        assert!(cli()
            .try_get_matches_from(["fcrypt", "-a", "aes", "-i", "x.bin", "-d"])
            .is_ok());
    }

    #[test]
    fn rejects_unknown_algorithm() {
        assert!(cli()
            .try_get_matches_from(["fcrypt", "-a", "rot13", "-i", "x.bin"])
            .is_err());
    }
}
