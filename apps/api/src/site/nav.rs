//! Page navigation state: which section is active and which theme is shown.
//!
//! The page script is rendered from these values, so section order and
//! scroll offsets live in one place.

/// Distance below the viewport top at which a section counts as reached.
pub const ACTIVE_SCROLL_OFFSET_PX: f64 = 150.0;
/// Header clearance when jumping to a section on narrow viewports.
pub const NAV_OFFSET_MOBILE_PX: f64 = 60.0;
pub const NAV_OFFSET_DESKTOP_PX: f64 = 80.0;
/// Viewports narrower than this get the collapsible menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Experience,
    Projects,
    Certifications,
    Skills,
    Contact,
}

impl Section {
    /// Document order.
    pub const ALL: [Section; 6] = [
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Certifications,
        Section::Skills,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Certifications => "Certifications",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads a `Sec-CH-Prefers-Color-Scheme` value. Anything but `dark` is light.
    pub fn from_color_scheme_hint(hint: Option<&str>) -> Theme {
        match hint.map(|h| h.trim().trim_matches('"').to_ascii_lowercase()) {
            Some(h) if h == "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Class applied to the document element.
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }
}
