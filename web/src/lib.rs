use clap::Parser;
use wasm_bindgen::prelude::*;

mod api;
mod board;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    board: board::BoardProps,
}

impl Args {
    /// Options come from the url fragment, e.g. `#-vv&--seed=42`
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("jeopardy")
        .expect("Could not find id=\"jeopardy\" element");

    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(root, args.board).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.board.seed, None);
        assert_eq!(args.board.api_url, api::DEFAULT_API_URL);
    }

    #[test]
    fn hash_options_are_split_on_ampersand() {
        let args =
            Args::from_location_hash("#--seed=42&--api-url=http://localhost:3000/api&-vv").unwrap();

        assert_eq!(args.board.seed, Some(42));
        assert_eq!(args.board.api_url, "http://localhost:3000/api");
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn bad_seed_is_rejected() {
        assert!(Args::from_location_hash("#--seed=abc").is_err());
    }
}
