//! Pill Icon Component
//!
//! Renders symbolic icon names from the catalog as inline Lucide-style SVG.
//! Unknown names draw the grid glyph, matching the catalog fallback.

use dioxus::prelude::*;

/// One SVG primitive of a glyph (24x24 viewbox)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Polyline(&'static str),
    Polygon(&'static str),
    Rect { x: f32, y: f32, w: f32, h: f32, rx: f32 },
    Circle { cx: f32, cy: f32, r: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
}

const GRID: &[Shape] = &[
    Shape::Rect { x: 3.0, y: 3.0, w: 7.0, h: 7.0, rx: 1.0 },
    Shape::Rect { x: 14.0, y: 3.0, w: 7.0, h: 7.0, rx: 1.0 },
    Shape::Rect { x: 14.0, y: 14.0, w: 7.0, h: 7.0, rx: 1.0 },
    Shape::Rect { x: 3.0, y: 14.0, w: 7.0, h: 7.0, rx: 1.0 },
];

const BOLT_CIRCLE: &[Shape] = &[
    Shape::Circle { cx: 12.0, cy: 12.0, r: 10.0 },
    Shape::Path("M13 6.5 8.5 13H12l-1 4.5L15.5 11H12z"),
];

const WATCH: &[Shape] = &[
    Shape::Circle { cx: 12.0, cy: 12.0, r: 6.0 },
    Shape::Polyline("12 10 12 12 13 13"),
    Shape::Path("m16.13 7.66-.81-4.05a2 2 0 0 0-2-1.61h-2.68a2 2 0 0 0-2 1.61l-.78 4.05"),
    Shape::Path("m7.88 16.36.8 4a2 2 0 0 0 2 1.61h2.72a2 2 0 0 0 2-1.61l.81-4.05"),
];

const PHONE: &[Shape] = &[
    Shape::Rect { x: 5.0, y: 2.0, w: 14.0, h: 20.0, rx: 2.0 },
    Shape::Path("M12 18h.01"),
];

const TABLET: &[Shape] = &[
    Shape::Rect { x: 4.0, y: 2.0, w: 16.0, h: 20.0, rx: 2.0 },
    Shape::Line { x1: 12.0, y1: 18.0, x2: 12.01, y2: 18.0 },
];

const LAPTOP: &[Shape] = &[Shape::Path(
    "M20 16V7a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v9m16 0H4m16 0 1.28 2.55a1 1 0 0 1-.9 1.45H3.62a1 1 0 0 1-.9-1.45L4 16",
)];

const HEADPHONES: &[Shape] = &[Shape::Path(
    "M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3",
)];

const TV: &[Shape] = &[
    Shape::Rect { x: 2.0, y: 7.0, w: 20.0, h: 15.0, rx: 2.0 },
    Shape::Polyline("17 2 12 7 7 2"),
];

const TAG: &[Shape] = &[
    Shape::Path(
        "M12.586 2.586A2 2 0 0 0 11.172 2H4a2 2 0 0 0-2 2v7.172a2 2 0 0 0 .586 1.414l8.704 8.704a2.426 2.426 0 0 0 3.42 0l6.58-6.58a2.426 2.426 0 0 0 0-3.42z",
    ),
    Shape::Circle { cx: 7.5, cy: 7.5, r: 0.5 },
];

const STAR: &[Shape] = &[Shape::Polygon(
    "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
)];

const SHARE: &[Shape] = &[
    Shape::Path("M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"),
    Shape::Polyline("16 6 12 2 8 6"),
    Shape::Line { x1: 12.0, y1: 2.0, x2: 12.0, y2: 15.0 },
];

/// Primitives for a symbolic icon name
pub fn glyph(name: &str) -> &'static [Shape] {
    match name {
        "square.grid.2x2" => GRID,
        "bolt.circle" => BOLT_CIRCLE,
        "applewatch" => WATCH,
        "iphone" => PHONE,
        "ipad" => TABLET,
        "laptopcomputer" => LAPTOP,
        "airpodspro" => HEADPHONES,
        "appletv.fill" => TV,
        "tag" => TAG,
        "star" => STAR,
        "square.and.arrow.up" => SHARE,
        _ => GRID,
    }
}

fn render_shape(shape: &Shape) -> Element {
    match *shape {
        Shape::Path(d) => rsx! { path { d } },
        Shape::Polyline(points) => rsx! { polyline { points } },
        Shape::Polygon(points) => rsx! { polygon { points } },
        Shape::Rect { x, y, w, h, rx } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{w}", height: "{h}", rx: "{rx}" }
        },
        Shape::Circle { cx, cy, r } => rsx! {
            circle { cx: "{cx}", cy: "{cy}", r: "{r}" }
        },
        Shape::Line { x1, y1, x2, y2 } => rsx! {
            line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}" }
        },
    }
}

/// Inline SVG icon drawn with the current text colour
#[component]
pub fn PillIcon(name: String, #[props(default = 18)] size: u32) -> Element {
    let shapes = glyph(&name);

    rsx! {
        svg {
            class: "pill-icon",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for shape in shapes.iter() {
                {render_shape(shape)}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pillbar_core::{items, ContextAction};

    #[test]
    fn every_catalog_icon_has_a_glyph() {
        for item in items() {
            let shapes = glyph(&item.icon_name);
            assert!(!shapes.is_empty(), "no glyph for {}", item.icon_name);
        }
    }

    #[test]
    fn catalog_icons_are_distinct() {
        let mut seen: Vec<&[Shape]> = Vec::new();
        for item in items() {
            let shapes = glyph(&item.icon_name);
            assert!(!seen.contains(&shapes), "shared glyph for {}", item.icon_name);
            seen.push(shapes);
        }
    }

    #[test]
    fn menu_icons_have_glyphs() {
        for action in ContextAction::ALL {
            assert_ne!(glyph(action.icon_name()), GRID);
        }
    }

    #[test]
    fn unknown_name_draws_grid() {
        assert_eq!(glyph("vision.pro"), GRID);
    }
}
