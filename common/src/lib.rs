pub mod config;
pub mod element;
pub mod error;
pub mod header;
pub mod nav;
pub mod smooth;
pub mod style;

// console diagnostic
//
// emitted exactly once, after every page behavior has been attached.  nothing parses it,
// but people do grep the console for it when checking a deploy
pub const LOADED_MESSAGE: &str = "CFD Website loaded successfully";
