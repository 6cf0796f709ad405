//! Progress Ring Component
//!
//! Annular SVG progress indicator: a full background track plus an arc
//! whose drawn share of the circumference encodes `done / max`.

use std::f64::consts::PI;

use leptos::prelude::*;

/// Geometry shared by the two circle strokes.
#[derive(Debug, Clone, Copy)]
pub struct RingGeometry {
    pub radius: f64,
    pub stroke_width: f64,
}

impl RingGeometry {
    /// Side of the square viewport.
    pub fn size(&self) -> f64 {
        (self.radius + self.stroke_width) * 2.0
    }

    /// Center coordinate on both axes.
    pub fn center(&self) -> f64 {
        self.radius + self.stroke_width
    }

    /// Dash length: the circumference, rounded up to a whole unit.
    pub fn circumference(&self) -> f64 {
        (2.0 * PI * self.radius).ceil()
    }

    /// Blank share of the circumference when `done` out of `max` is
    /// complete. `max` must be positive; the result is unspecified for
    /// `max == 0`.
    pub fn dash_offset(&self, done: f64, max: f64) -> f64 {
        let length = self.circumference();
        length - length * (done / max)
    }
}

/// Radial progress indicator.
#[component]
pub fn ProgressRing(
    #[prop(into)] done: Signal<f64>,
    #[prop(default = 24.0)] max: f64,
    #[prop(default = 72.0)] radius: f64,
    #[prop(default = 8.0)] stroke_width: f64,
    #[prop(default = "#e91e63")] stroke: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let ring = RingGeometry {
        radius,
        stroke_width,
    };
    let size = ring.size();
    let center = ring.center();
    let length = ring.circumference();

    view! {
        <svg
            class=class
            width=size
            height=size
            viewBox=format!("0 0 {size} {size}")
            xmlns="http://www.w3.org/2000/svg"
        >
            <g>
                <circle
                    class="circle"
                    r=radius
                    cx=center
                    cy=center
                    stroke=stroke
                    stroke-dasharray=length
                    stroke-dashoffset=move || ring.dash_offset(done.get(), max)
                    stroke-linecap="round"
                    stroke-width=stroke_width
                    fill="none"
                />
                // The track paints second, over the arc.
                <circle
                    class="circle--bg"
                    r=radius
                    cx=center
                    cy=center
                    stroke="rgba(0, 0, 0, .1)"
                    stroke-linecap="round"
                    stroke-width=stroke_width
                    fill="none"
                />
            </g>
        </svg>
    }
}
