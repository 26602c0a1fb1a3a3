//! Geometry and timing for the shared-element banner transition.

use serde::Deserialize;

/// Padding of the overlay content; the banner frame is relative to it.
pub const OVERLAY_PADDING: f64 = 32.0;
pub const BANNER_HEIGHT_RATIO: f64 = 0.6;

pub const DEFAULT_SHARED_ELEMENT_MS: u32 = 600;
pub const DEFAULT_BACKDROP_MS: u32 = 300;
pub const DEFAULT_DETAILS_MS: u32 = 200;
pub const DEFAULT_REVEAL_MS: u32 = 700;
pub const DEFAULT_REVEAL_WIDE_MS: u32 = 800;
pub const DEFAULT_REVEAL_STAGGER_MS: u32 = 150;

const DURATION_MS_BOUNDS: (u32, u32) = (0, 5_000);

pub const BACKDROP_ALPHA: f64 = 0.95;
pub const REVEAL_OFFSET_Y: f64 = 30.0;
pub const REVEAL_INITIAL_SCALE: f64 = 0.95;
/// Share of the viewport, from the top, an item's top edge must pass to reveal.
pub const REVEAL_THRESHOLD_RATIO: f64 = 0.9;

/// A measured rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Accepts a rectangle only if it has been laid out: finite with a positive area.
    pub fn measured(x: f64, y: f64, width: f64, height: f64) -> Option<Self> {
        let finite = [x, y, width, height].iter().all(|value| value.is_finite());
        if !finite || width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Self {
            x,
            y,
            width,
            height,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// CSS `cubic-bezier()` control points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier(pub f64, pub f64, pub f64, pub f64);

impl CubicBezier {
    /// The standard `ease` curve.
    pub const EASE: Self = Self(0.25, 0.1, 0.25, 1.0);

    pub fn as_css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

/// A duration paired with an easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub duration_ms: u32,
    pub easing: CubicBezier,
}

impl Tween {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            easing: CubicBezier::EASE,
        }
    }

    pub fn delayed_css(&self, properties: &[&str], delay_ms: u32) -> String {
        properties
            .iter()
            .map(|property| {
                format!(
                    "{property} {}ms {} {delay_ms}ms",
                    self.duration_ms,
                    self.easing.as_css()
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn css(&self, properties: &[&str]) -> String {
        self.delayed_css(properties, 0)
    }
}

/// Position and size of the banner relative to the padded overlay content box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn style(&self, transition: Option<&Tween>) -> String {
        let transition = transition
            .map(|tween| tween.css(&["transform", "width", "height"]))
            .unwrap_or_else(|| "none".to_string());
        format!(
            "transform: translate({:.2}px, {:.2}px); width: {:.2}px; height: {:.2}px; transition: {transition};",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Animates the card image rectangle to the banner rectangle and back.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SharedElementTransition {
    pub from: Frame,
    pub to: Frame,
    pub tween: Tween,
}

impl SharedElementTransition {
    pub fn new(origin: Rect, viewport: Viewport, tween: Tween) -> Self {
        let from = Frame {
            x: origin.x - OVERLAY_PADDING,
            y: origin.y - OVERLAY_PADDING,
            width: origin.width,
            height: origin.height,
        };
        let to = Frame {
            x: 0.0,
            y: 0.0,
            width: (viewport.width - 2.0 * OVERLAY_PADDING).max(0.0),
            height: (viewport.height * BANNER_HEIGHT_RATIO).max(0.0),
        };
        Self { from, to, tween }
    }

    /// First frame: pinned at the origin without a transition.
    pub fn initial_style(&self) -> String {
        self.from.style(None)
    }

    pub fn expanded_style(&self) -> String {
        self.to.style(Some(&self.tween))
    }

    pub fn collapsed_style(&self) -> String {
        self.from.style(Some(&self.tween))
    }
}

/// Durations for every overlay animation, loaded from site config.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionTimings {
    pub shared_element_ms: u32,
    pub backdrop_ms: u32,
    pub details_ms: u32,
    pub reveal_ms: u32,
    pub reveal_wide_ms: u32,
    pub reveal_stagger_ms: u32,
}

impl Default for MotionTimings {
    fn default() -> Self {
        Self {
            shared_element_ms: DEFAULT_SHARED_ELEMENT_MS,
            backdrop_ms: DEFAULT_BACKDROP_MS,
            details_ms: DEFAULT_DETAILS_MS,
            reveal_ms: DEFAULT_REVEAL_MS,
            reveal_wide_ms: DEFAULT_REVEAL_WIDE_MS,
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
        }
    }
}

fn bounded_ms(name: &str, value: u32, default: u32) -> u32 {
    if (DURATION_MS_BOUNDS.0..=DURATION_MS_BOUNDS.1).contains(&value) {
        value
    } else {
        log::warn!("motion timing {name}={value}ms is out of range, using {default}ms");
        default
    }
}

impl MotionTimings {
    /// Replaces out-of-range durations with their defaults.
    pub fn bounded(self) -> Self {
        let defaults = Self::default();
        Self {
            shared_element_ms: bounded_ms(
                "shared_element_ms",
                self.shared_element_ms,
                defaults.shared_element_ms,
            ),
            backdrop_ms: bounded_ms("backdrop_ms", self.backdrop_ms, defaults.backdrop_ms),
            details_ms: bounded_ms("details_ms", self.details_ms, defaults.details_ms),
            reveal_ms: bounded_ms("reveal_ms", self.reveal_ms, defaults.reveal_ms),
            reveal_wide_ms: bounded_ms(
                "reveal_wide_ms",
                self.reveal_wide_ms,
                defaults.reveal_wide_ms,
            ),
            reveal_stagger_ms: bounded_ms(
                "reveal_stagger_ms",
                self.reveal_stagger_ms,
                defaults.reveal_stagger_ms,
            ),
        }
    }

    /// All durations collapse to zero for `prefers-reduced-motion`.
    pub fn reduced(self) -> Self {
        Self {
            shared_element_ms: 0,
            backdrop_ms: 0,
            details_ms: 0,
            reveal_ms: 0,
            reveal_wide_ms: 0,
            reveal_stagger_ms: 0,
        }
    }

    pub fn shared_element(&self) -> Tween {
        Tween::new(self.shared_element_ms)
    }

    pub fn backdrop(&self) -> Tween {
        Tween::new(self.backdrop_ms)
    }

    pub fn details(&self) -> Tween {
        Tween::new(self.details_ms)
    }

    pub fn reveal_delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.reveal_stagger_ms.saturating_mul(index)
    }
}

pub fn backdrop_style(visible: bool, tween: &Tween) -> String {
    let alpha = if visible { BACKDROP_ALPHA } else { 0.0 };
    format!(
        "background-color: rgba(0, 0, 0, {alpha}); transition: {};",
        tween.css(&["background-color"])
    )
}

pub fn fade_style(visible: bool, tween: &Tween) -> String {
    let opacity = if visible { 1 } else { 0 };
    format!(
        "opacity: {opacity}; transition: {};",
        tween.css(&["opacity"])
    )
}

/// Whether an element whose top edge sits at `top` has scrolled far enough into view.
pub fn should_reveal(top: f64, viewport_height: f64) -> bool {
    top.is_finite() && top < viewport_height * REVEAL_THRESHOLD_RATIO
}

pub fn reveal_style(revealed: bool, tween: &Tween, delay_ms: u32) -> String {
    let transition = tween.delayed_css(&["opacity", "transform"], delay_ms);
    if revealed {
        format!("opacity: 1; transform: translateY(0px) scale(1); transition: {transition};")
    } else {
        format!(
            "opacity: 0; transform: translateY({REVEAL_OFFSET_Y}px) scale({REVEAL_INITIAL_SCALE}); transition: {transition};"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_rects_are_rejected() {
        assert!(Rect::measured(0.0, 0.0, 0.0, 100.0).is_none());
        assert!(Rect::measured(0.0, 0.0, 100.0, -1.0).is_none());
        assert!(Rect::measured(f64::NAN, 0.0, 100.0, 100.0).is_none());
        assert!(Rect::measured(-20.0, 400.0, 320.0, 180.0).is_some());
    }

    #[test]
    fn transition_starts_at_origin_and_ends_at_banner() {
        let origin = Rect::measured(100.0, 400.0, 320.0, 180.0).expect("measured rect");
        let viewport = Viewport {
            width: 1280.0,
            height: 800.0,
        };
        let transition = SharedElementTransition::new(origin, viewport, Tween::new(600));

        assert_eq!(
            transition.from,
            Frame {
                x: 68.0,
                y: 368.0,
                width: 320.0,
                height: 180.0
            }
        );
        assert_eq!(
            transition.to,
            Frame {
                x: 0.0,
                y: 0.0,
                width: 1216.0,
                height: 480.0
            }
        );
        assert!(transition.initial_style().ends_with("transition: none;"));
        assert!(transition
            .expanded_style()
            .contains("transform 600ms cubic-bezier(0.25, 0.1, 0.25, 1) 0ms"));
    }

    #[test]
    fn tiny_viewport_never_produces_negative_banner() {
        let origin = Rect::measured(0.0, 0.0, 10.0, 10.0).expect("measured rect");
        let viewport = Viewport {
            width: 40.0,
            height: 0.0,
        };
        let transition = SharedElementTransition::new(origin, viewport, Tween::new(600));
        assert_eq!(transition.to.width, 0.0);
        assert_eq!(transition.to.height, 0.0);
    }

    #[test]
    fn out_of_range_timings_fall_back() {
        let timings = MotionTimings {
            shared_element_ms: 90_000,
            backdrop_ms: 120,
            ..MotionTimings::default()
        }
        .bounded();

        assert_eq!(timings.shared_element_ms, DEFAULT_SHARED_ELEMENT_MS);
        assert_eq!(timings.backdrop_ms, 120);
    }

    #[test]
    fn reveal_delays_stagger_by_index() {
        let timings = MotionTimings::default();
        assert_eq!(timings.reveal_delay_ms(0), 0);
        assert_eq!(timings.reveal_delay_ms(1), 150);
        assert_eq!(timings.reveal_delay_ms(2), 300);
        assert_eq!(timings.reduced().reveal_delay_ms(2), 0);
    }

    #[test]
    fn reveal_threshold_uses_lower_edge_of_viewport() {
        assert!(should_reveal(100.0, 1000.0));
        assert!(!should_reveal(950.0, 1000.0));
        assert!(!should_reveal(f64::NAN, 1000.0));
    }

    #[test]
    fn backdrop_fades_to_near_black() {
        let tween = Tween::new(300);
        assert!(backdrop_style(true, &tween).starts_with("background-color: rgba(0, 0, 0, 0.95);"));
        assert!(backdrop_style(false, &tween).starts_with("background-color: rgba(0, 0, 0, 0);"));
    }
}
