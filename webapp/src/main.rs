use tracing::{Level, error};

mod bootstrap;
mod dom;
mod features;
mod listener;

// baked in at build time; see the comments in the file for the available keys
const PAGE_CONFIG: &str = include_str!("../page.toml");

// failures that abort the bootstrap are logged and then rethrown into js, so they show up in
// the browser's unhandled error reporting the same way an exception in a page script would
pub(crate) fn report(err: anyhow::Error) -> ! {
    error!("page bootstrap failed: {err:#}");
    wasm_bindgen::throw_str(&format!("{err:#}"))
}

fn main() {
    let config = common::config::read_config(PAGE_CONFIG);

    let level = config
        .as_ref()
        .map(|config| config.log_level.level())
        .unwrap_or(Level::DEBUG);
    dioxus_logger::init(level).expect("failed to init logger");

    if let Err(err) = config.and_then(bootstrap::launch) {
        report(err);
    }
}
