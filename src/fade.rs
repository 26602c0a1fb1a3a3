//! Scroll-driven fade of the fixed hero layer.

use serde::Deserialize;

pub const DEFAULT_FADE_START_RATIO: f64 = 0.15;
pub const DEFAULT_FADE_END_RATIO: f64 = 0.85;

/// Window of the viewport height over which the hero fades out, as ratios.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct FadeWindow {
    pub start_ratio: f64,
    pub end_ratio: f64,
}

impl Default for FadeWindow {
    fn default() -> Self {
        Self {
            start_ratio: DEFAULT_FADE_START_RATIO,
            end_ratio: DEFAULT_FADE_END_RATIO,
        }
    }
}

impl FadeWindow {
    pub fn is_valid(&self) -> bool {
        let unit = 0.0..=1.0;
        unit.contains(&self.start_ratio)
            && unit.contains(&self.end_ratio)
            && self.start_ratio < self.end_ratio
    }

    /// Returns `self` if usable, otherwise the default window.
    pub fn or_default(self) -> Self {
        if self.is_valid() {
            self
        } else {
            log::warn!(
                "fade window {:.2}..{:.2} is out of range, using defaults",
                self.start_ratio,
                self.end_ratio
            );
            Self::default()
        }
    }

    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        let height = if viewport_height.is_finite() {
            viewport_height.max(0.0)
        } else {
            0.0
        };
        (self.start_ratio * height, self.end_ratio * height)
    }

    /// Opacity of the hero layer at `offset` for a viewport `viewport_height` tall.
    pub fn opacity(&self, offset: f64, viewport_height: f64) -> f64 {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        let (fade_start, fade_end) = self.bounds(viewport_height);

        if offset <= fade_start {
            return 1.0;
        }
        if offset >= fade_end {
            return 0.0;
        }

        let progress = (offset - fade_start) / (fade_end - fade_start);
        let eased = 1.0 - (1.0 - progress).powi(3);
        1.0 - eased
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvents {
    Auto,
    None,
}

impl PointerEvents {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::None => "none",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub opacity: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            opacity: 1.0,
        }
    }
}

impl ScrollState {
    pub fn observe(window: &FadeWindow, offset: f64, viewport_height: f64) -> Self {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        Self {
            offset,
            opacity: window.opacity(offset, viewport_height),
        }
    }

    /// Interactivity follows opacity: gone at zero, back as soon as it is positive.
    pub fn pointer_events(&self) -> PointerEvents {
        if self.opacity > 0.0 {
            PointerEvents::Auto
        } else {
            PointerEvents::None
        }
    }

    /// The hero is also inert while a project overlay covers it.
    pub fn hero_pointer_events(&self, overlay_open: bool) -> PointerEvents {
        if overlay_open {
            PointerEvents::None
        } else {
            self.pointer_events()
        }
    }

    pub fn hero_style(&self, overlay_open: bool) -> String {
        format!(
            "opacity: {:.4}; pointer-events: {};",
            self.opacity,
            self.hero_pointer_events(overlay_open).as_css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHT: f64 = 1000.0;

    fn opacity(offset: f64) -> f64 {
        FadeWindow::default().opacity(offset, HEIGHT)
    }

    #[test]
    fn fully_visible_before_fade_start() {
        for offset in [0.0, 10.0, 100.0, 149.9, 150.0] {
            assert_eq!(opacity(offset), 1.0, "offset {offset}");
        }
    }

    #[test]
    fn fully_hidden_after_fade_end() {
        for offset in [850.0, 850.1, 900.0, 5_000.0] {
            assert_eq!(opacity(offset), 0.0, "offset {offset}");
        }
    }

    #[test]
    fn midpoint_matches_cubic_ease_out() {
        let value = opacity(500.0);
        assert!((value - 0.125).abs() < 1e-12);
        assert!(value > 0.0 && value < 1.0);
    }

    #[test]
    fn opacity_never_increases_inside_window() {
        let mut previous = opacity(150.0);
        let mut offset = 150.0;
        while offset <= 850.0 {
            let current = opacity(offset);
            assert!(current <= previous, "rose at offset {offset}");
            previous = current;
            offset += 0.5;
        }
    }

    #[test]
    fn degenerate_inputs_do_not_produce_nan() {
        let window = FadeWindow::default();
        assert_eq!(window.opacity(-40.0, HEIGHT), 1.0);
        assert_eq!(window.opacity(f64::NAN, HEIGHT), 1.0);
        assert_eq!(window.opacity(0.0, 0.0), 1.0);
        assert_eq!(window.opacity(12.0, 0.0), 0.0);
        assert_eq!(window.opacity(12.0, f64::INFINITY), 0.0);
    }

    #[test]
    fn invalid_window_falls_back_to_defaults() {
        let inverted = FadeWindow {
            start_ratio: 0.9,
            end_ratio: 0.2,
        };
        assert_eq!(inverted.or_default(), FadeWindow::default());

        let out_of_range = FadeWindow {
            start_ratio: 0.1,
            end_ratio: 1.5,
        };
        assert_eq!(out_of_range.or_default(), FadeWindow::default());

        let custom = FadeWindow {
            start_ratio: 0.0,
            end_ratio: 0.5,
        };
        assert_eq!(custom.or_default(), custom);
    }

    #[test]
    fn pointer_events_track_opacity() {
        let window = FadeWindow::default();
        let visible = ScrollState::observe(&window, 500.0, HEIGHT);
        assert_eq!(visible.pointer_events(), PointerEvents::Auto);

        let hidden = ScrollState::observe(&window, 900.0, HEIGHT);
        assert_eq!(hidden.pointer_events(), PointerEvents::None);
        assert_eq!(hidden.hero_style(false), "opacity: 0.0000; pointer-events: none;");
    }

    #[test]
    fn open_overlay_makes_hero_inert() {
        let state = ScrollState::observe(&FadeWindow::default(), 0.0, HEIGHT);
        assert_eq!(state.hero_pointer_events(true), PointerEvents::None);
        assert_eq!(state.hero_pointer_events(false), PointerEvents::Auto);
    }
}
