use clap::Parser;
use numerica_core::Campaign;
use wasm_bindgen::prelude::*;

mod app;
mod level;
mod menu;
mod storage;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Play the legacy 1-6 level set instead of the current campaign
    #[arg(long)]
    legacy: bool,
}

impl Args {
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn campaign(&self) -> Campaign {
        if self.legacy {
            Campaign::Legacy
        } else {
            Campaign::Standard
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location: web_sys::Location = window().location();
    let location_hash = location.hash().unwrap_or_else(|_| "".to_string());

    let args = Args::from_location_hash(&location_hash).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("campaign: {:?}", args.campaign());

    let root: web_sys::Element = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<app::App>::with_root_and_props(
        root,
        app::AppProps {
            campaign: args.campaign(),
        },
    )
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_selects_standard_campaign() {
        let args = Args::from_location_hash("").unwrap();

        assert_eq!(args.campaign(), Campaign::Standard);
    }

    #[test]
    fn hash_flags_are_parsed() {
        let args = Args::from_location_hash("#--legacy&-vv").unwrap();

        assert_eq!(args.campaign(), Campaign::Legacy);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn unknown_hash_flag_is_rejected() {
        assert!(Args::from_location_hash("#--fast").is_err());
    }
}
