use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// page behavior configuration
//
// every field defaults to the values the site markup and stylesheet were written against,
// so an empty document yields the stock behavior.  the webapp embeds page.toml at build time
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub nav: NavConfig,
    pub header: HeaderConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub log_level: LogLevel,
}

// the only coupling to the html structure
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Selectors {
    pub hamburger: String,
    pub nav_links: String,
    pub header: String,

    // in-page links handled by the smooth scroller
    pub anchors: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            hamburger: String::from(".hamburger"),
            nav_links: String::from(".nav-links"),
            header: String::from("header"),
            anchors: String::from("a[href^=\"#\"]"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavConfig {
    // the stylesheet keys the mobile menu layout off this class
    pub marker_class: String,

    // inline display values for the two menu states
    pub open_display: String,
    pub closed_display: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        NavConfig {
            marker_class: String::from("mobile-menu-open"),
            open_display: String::from("flex"),
            closed_display: String::from("none"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    // vertical offset in css pixels; the comparison is strict, so the threshold itself
    // still counts as near the top
    pub threshold: f64,

    pub scrolled_background: String,
    pub scrolled_filter: String,

    // relies on --primary-color and --secondary-color being defined by the stylesheet
    pub top_background: String,
    pub top_filter: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            threshold: 100.0,
            scrolled_background: String::from("rgba(37, 99, 235, 0.95)"),
            scrolled_filter: String::from("blur(10px)"),
            top_background: String::from(
                "linear-gradient(135deg, var(--primary-color), var(--secondary-color))",
            ),
            top_filter: String::from("none"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub enabled: bool,
    pub block: ScrollBlock,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        SmoothScrollConfig {
            enabled: true,
            block: ScrollBlock::Start,
        }
    }
}

// vertical alignment of the scroll target, mirrors ScrollLogicalPosition
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
    End,
    Nearest,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn level(&self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

// as with the server configs, the page table lives under [config] so that it can share a
// document with other tables
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: PageConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn read_config(doc: &str) -> anyhow::Result<PageConfig> {
    debug!("parsing page config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse page config: {err}")))?;

    if !data.config.header.threshold.is_finite() {
        return Err(anyhow::Error::msg(
            "page config: header.threshold must be a finite number",
        ));
    }

    debug!("successfully parsed page config");
    Ok(data.config)
}
