use tracing::trace;

use crate::{
    config::HeaderConfig,
    element::StyleTarget,
    error::PageError,
    style::{BACKDROP_FILTER, BACKGROUND, StylePatch},
};

// which side of the threshold the page is scrolled to
//
// derived fresh from the offset on every event, never stored
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScrollBand {
    Top,
    Scrolled,
}

impl ScrollBand {
    // strict comparison: an offset equal to the threshold is still the top band
    pub fn classify(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            ScrollBand::Scrolled
        } else {
            ScrollBand::Top
        }
    }
}

pub fn header_patch(band: ScrollBand, config: &HeaderConfig) -> StylePatch {
    match band {
        ScrollBand::Scrolled => StylePatch::new()
            .set(BACKGROUND, config.scrolled_background.as_str())
            .set(BACKDROP_FILTER, config.scrolled_filter.as_str()),
        ScrollBand::Top => StylePatch::new()
            .set(BACKGROUND, config.top_background.as_str())
            .set(BACKDROP_FILTER, config.top_filter.as_str()),
    }
}

#[derive(Clone, Debug)]
pub struct HeaderScrollStyler<E> {
    header: Option<E>,
    config: HeaderConfig,
}

impl<E: StyleTarget> HeaderScrollStyler<E> {
    pub fn new(header: Option<E>, config: &HeaderConfig) -> Self {
        HeaderScrollStyler {
            header,
            config: config.clone(),
        }
    }

    // re-applies both properties on every call, whether or not the band changed.  without a
    // header this is a no-op and returns None
    pub fn on_scroll(&self, offset: f64) -> Result<Option<ScrollBand>, PageError> {
        let Some(header) = self.header.as_ref() else {
            return Ok(None);
        };

        let band = ScrollBand::classify(offset, self.config.threshold);
        header_patch(band, &self.config).apply(header)?;

        trace!({ offset, band = ?band }, "restyled header");
        Ok(Some(band))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::testing::MemoryElement;

    const GRADIENT: &str = "linear-gradient(135deg, var(--primary-color), var(--secondary-color))";
    const TRANSLUCENT: &str = "rgba(37, 99, 235, 0.95)";

    fn styler() -> (MemoryElement, HeaderScrollStyler<MemoryElement>) {
        let header = MemoryElement::new();
        let styler = HeaderScrollStyler::new(Some(header.clone()), &HeaderConfig::default());
        (header, styler)
    }

    #[test]
    fn classify_is_strict_at_threshold() {
        assert_eq!(ScrollBand::classify(0.0, 100.0), ScrollBand::Top);
        assert_eq!(ScrollBand::classify(100.0, 100.0), ScrollBand::Top);
        assert_eq!(ScrollBand::classify(100.5, 100.0), ScrollBand::Scrolled);
        assert_eq!(ScrollBand::classify(5000.0, 100.0), ScrollBand::Scrolled);
    }

    #[test]
    fn styles_follow_the_band_for_all_offsets() {
        let (header, styler) = styler();

        for offset in [0.0, 1.0, 99.0, 100.0, 101.0, 150.0, 2400.0] {
            styler.on_scroll(offset).unwrap();

            if offset > 100.0 {
                assert_eq!(header.style(BACKGROUND).unwrap(), TRANSLUCENT);
                assert_eq!(header.style(BACKDROP_FILTER).unwrap(), "blur(10px)");
            } else {
                assert_eq!(header.style(BACKGROUND).unwrap(), GRADIENT);
                assert_eq!(header.style(BACKDROP_FILTER).unwrap(), "none");
            }
        }
    }

    #[test]
    fn jump_from_50_to_150_switches_to_frosted_bar() {
        let (header, styler) = styler();

        assert_eq!(styler.on_scroll(50.0).unwrap(), Some(ScrollBand::Top));
        assert_eq!(header.style(BACKGROUND).unwrap(), GRADIENT);
        assert_eq!(header.style(BACKDROP_FILTER).unwrap(), "none");

        assert_eq!(styler.on_scroll(150.0).unwrap(), Some(ScrollBand::Scrolled));
        assert_eq!(header.style(BACKGROUND).unwrap(), TRANSLUCENT);
        assert_eq!(header.style(BACKDROP_FILTER).unwrap(), "blur(10px)");
    }

    #[test]
    fn same_offset_twice_is_idempotent() {
        let (header, styler) = styler();

        styler.on_scroll(180.0).unwrap();
        let first = (header.style(BACKGROUND).unwrap(), header.style(BACKDROP_FILTER).unwrap());

        styler.on_scroll(180.0).unwrap();
        let second = (header.style(BACKGROUND).unwrap(), header.style(BACKDROP_FILTER).unwrap());

        assert_eq!(first, second);
        assert_eq!(header_patch(ScrollBand::Scrolled, &HeaderConfig::default()).styles.len(), 2);
    }

    #[test]
    fn missing_header_is_a_no_op() {
        let styler: HeaderScrollStyler<MemoryElement> =
            HeaderScrollStyler::new(None, &HeaderConfig::default());

        assert_eq!(styler.on_scroll(500.0).unwrap(), None);
    }
}
