use crate::config::{ScrollBlock, SmoothScrollConfig};

// fragment id of an in-page link
//
// only hrefs of the form #id qualify.  a bare # is the usual "top of page" placeholder and
// is left to the browser
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;

    if id.is_empty() { None } else { Some(id) }
}

// a click on an in-page link that should become a smooth scroll
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollRequest<'a> {
    pub target_id: &'a str,
    pub block: ScrollBlock,
}

pub fn scroll_request<'a>(
    href: Option<&'a str>,
    config: &SmoothScrollConfig,
) -> Option<ScrollRequest<'a>> {
    if !config.enabled {
        return None;
    }

    Some(ScrollRequest {
        target_id: anchor_target(href?)?,
        block: config.block,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_become_targets() {
        assert_eq!(anchor_target("#services"), Some("services"));
        assert_eq!(anchor_target(" #contact "), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/about#team"), None);
        assert_eq!(anchor_target("https://example.com/#top"), None);
    }

    #[test]
    fn requests_carry_configured_alignment() {
        let config = SmoothScrollConfig {
            enabled: true,
            block: ScrollBlock::Center,
        };

        assert_eq!(
            scroll_request(Some("#pricing"), &config),
            Some(ScrollRequest {
                target_id: "pricing",
                block: ScrollBlock::Center,
            })
        );
        assert_eq!(scroll_request(None, &config), None);
        assert_eq!(scroll_request(Some("#"), &config), None);
    }

    #[test]
    fn disabled_scroller_leaves_clicks_alone() {
        let config = SmoothScrollConfig {
            enabled: false,
            ..SmoothScrollConfig::default()
        };

        assert_eq!(scroll_request(Some("#pricing"), &config), None);
    }
}
