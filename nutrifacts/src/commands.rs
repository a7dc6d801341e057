use crate::CLAP_STYLING;
use clap::{arg, command};
use nutrifacts_client::DEFAULT_BASE_URL;
use std::net::SocketAddr;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("nutrifacts")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("nutrifacts")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(--"api-key" <KEY>)
                .required(false)
                .global(true)
                .env("USDA_API_KEY")
                .hide_env_values(true)
                .help("USDA FoodData Central API key"),
        )
        .arg(
            arg!(--"api-url" <URL>)
                .required(false)
                .global(true)
                .env("USDA_API_URL")
                .help("Base URL of the FoodData Central API")
                .value_parser(clap::value_parser!(Url))
                .default_value(DEFAULT_BASE_URL),
        )
        .subcommand_required(false)
        .subcommand(
            command!("serve")
                .about("Serve nutrition lookups over HTTP at /api/nutrition?query=<food>")
                .arg(
                    arg!(-b --"bind" <ADDR>)
                        .required(false)
                        .help("Address to listen on")
                        .value_parser(clap::value_parser!(SocketAddr))
                        .default_value("127.0.0.1:3000"),
                ),
        )
        .subcommand(
            command!("lookup")
                .about("Look up the nutrition facts of a single food and print them")
                .arg(
                    arg!(<FOOD>)
                        .required(true)
                        .num_args(1..)
                        .help("The food to search for, e.g. `peanut butter`"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        command_argument_builder().debug_assert();
    }

    #[test]
    fn test_lookup_collects_words() {
        let matches = command_argument_builder()
            .try_get_matches_from(["nutrifacts", "--api-key", "k", "lookup", "peanut", "butter", "-f", "json"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "lookup");

        let words: Vec<&String> = sub.get_many::<String>("FOOD").unwrap().collect();
        assert_eq!(words, ["peanut", "butter"]);
        assert_eq!(sub.get_one::<String>("format").unwrap(), "json");
        assert_eq!(sub.get_one::<String>("api-key").unwrap(), "k");
    }

    #[test]
    fn test_serve_defaults() {
        let matches = command_argument_builder()
            .try_get_matches_from(["nutrifacts", "serve"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(
            sub.get_one::<SocketAddr>("bind").unwrap().to_string(),
            "127.0.0.1:3000"
        );
        assert!(sub.get_one::<Url>("api-url").is_some());
    }
}
