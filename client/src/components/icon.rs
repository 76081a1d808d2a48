//! Inline SVG icon set used by the navbar and room detail page.
//!
//! Outline icons are 24x24 stroked paths; the star is a 20x20 solid path so
//! its colour comes from `fill`.

#[cfg(test)]
#[path = "icon_test.rs"]
mod icon_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    Home,
    Info,
    Phone,
    Login,
    Search,
    Adjustments,
    MapPin,
    Currency,
    Bed,
    ClipboardList,
    Star,
}

impl IconKind {
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::Info,
        Self::Phone,
        Self::Login,
        Self::Search,
        Self::Adjustments,
        Self::MapPin,
        Self::Currency,
        Self::Bed,
        Self::ClipboardList,
        Self::Star,
    ];

    pub fn is_solid(self) -> bool {
        matches!(self, Self::Star)
    }

    pub fn view_box(self) -> &'static str {
        if self.is_solid() { "0 0 20 20" } else { "0 0 24 24" }
    }

    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Home => &[
                "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
            ],
            Self::Info => &["M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"],
            Self::Phone => &[
                "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z",
            ],
            Self::Login => &[
                "M11 16l-4-4m0 0l4-4m-4 4h14m-5 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h7a3 3 0 013 3v1",
            ],
            Self::Search => &["M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"],
            Self::Adjustments => &[
                "M12 6V4m0 2a2 2 0 100 4m0-4a2 2 0 110 4m-6 8a2 2 0 100-4m0 4a2 2 0 110-4m0 4v2m0-6V4m6 6v10m6-2a2 2 0 100-4m0 4a2 2 0 110-4m0 4v2m0-6V4",
            ],
            Self::MapPin => &[
                "M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z",
                "M15 11a3 3 0 11-6 0 3 3 0 016 0z",
            ],
            Self::Currency => &[
                "M12 8c-1.657 0-3 .895-3 2s1.343 2 3 2 3 .895 3 2-1.343 2-3 2m0-8c1.11 0 2.08.402 2.599 1M12 8V7m0 1v8m0 0v1m0-1c-1.11 0-2.08-.402-2.599-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            ],
            Self::Bed => &["M3 7v11m0-4h18m0 4v-7a3 3 0 00-3-3h-8v6", "M7 11a1.5 1.5 0 100-3 1.5 1.5 0 000 3z"],
            Self::ClipboardList => &[
                "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-3 7h3m-3 4h3m-6-4h.01M9 16h.01",
            ],
            Self::Star => &[
                "M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z",
            ],
        }
    }
}

/// Render one icon. `class` sizes and colours it.
#[component]
pub fn Icon(kind: IconKind, #[prop(optional, into)] class: String) -> impl IntoView {
    let class = format!("icon {class}");
    let (fill, stroke) = if kind.is_solid() { ("currentColor", "none") } else { ("none", "currentColor") };

    view! {
        <svg class=class viewBox=kind.view_box() fill=fill stroke=stroke aria-hidden="true">
            {kind
                .paths()
                .iter()
                .map(|d| {
                    view! { <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=*d></path> }
                })
                .collect_view()}
        </svg>
    }
}
