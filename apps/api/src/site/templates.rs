//! Askama Templates
//!
//! The single portfolio page. Markup lives in `templates/index.html`; askama
//! escapes every profile string on the way in.

use std::sync::Arc;

use askama::Template;
use askama_web::WebTemplate;

use crate::site::nav::{
    Section, Theme, ACTIVE_SCROLL_OFFSET_PX, MOBILE_BREAKPOINT_PX, NAV_OFFSET_DESKTOP_PX,
    NAV_OFFSET_MOBILE_PX,
};
use crate::site::profile::Profile;

/// Full page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct PageTemplate {
    pub profile: Arc<Profile>,
    pub theme: Theme,
    pub year: i32,
    pub sections: &'static [Section],
    /// Section ids as a JSON array for the page script.
    pub sections_json: String,
    /// `tel:` target derived from the profile phone; empty when there is none.
    pub tel: String,
    pub active_offset: f64,
    pub nav_offset_mobile: f64,
    pub nav_offset_desktop: f64,
    pub mobile_breakpoint: f64,
    pub narrow_max_width: f64,
}

impl PageTemplate {
    pub fn new(profile: Arc<Profile>, theme: Theme, year: i32) -> Self {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        let sections_json = serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string());
        let tel = profile
            .phone
            .as_deref()
            .map(dial_string)
            .unwrap_or_default();

        Self {
            profile,
            theme,
            year,
            sections: &Section::ALL,
            sections_json,
            tel,
            active_offset: ACTIVE_SCROLL_OFFSET_PX,
            nav_offset_mobile: NAV_OFFSET_MOBILE_PX,
            nav_offset_desktop: NAV_OFFSET_DESKTOP_PX,
            mobile_breakpoint: MOBILE_BREAKPOINT_PX,
            narrow_max_width: MOBILE_BREAKPOINT_PX - 1.0,
        }
    }
}

/// Keeps the leading `+` and digits of a display phone number.
fn dial_string(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| *c == '+' || c.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::load(None).unwrap()
    }

    fn render(profile: Profile, theme: Theme) -> String {
        PageTemplate::new(Arc::new(profile), theme, 2026)
            .render()
            .unwrap()
    }

    #[test]
    fn test_page_has_every_section_in_order() {
        let html = render(profile(), Theme::Light);
        let mut last = 0;
        for section in Section::ALL {
            let marker = format!("<section id=\"{}\">", section.id());
            let pos = html.find(&marker).unwrap_or_else(|| panic!("missing {marker}"));
            assert!(pos >= last, "{} out of order", section.id());
            last = pos;
        }
    }

    #[test]
    fn test_desktop_and_mobile_nav_both_list_every_section() {
        let html = render(profile(), Theme::Light);
        for section in Section::ALL {
            let button = format!("data-section=\"{}\"", section.id());
            assert_eq!(html.matches(&button).count(), 2, "{button}");
        }
    }

    #[test]
    fn test_mobile_menu_toggle_controls_collapsed_nav() {
        let html = render(profile(), Theme::Light);
        assert!(html.contains("id=\"menu-toggle\""));
        assert!(html.contains("aria-label=\"Toggle menu\""));
        assert!(html.contains("aria-controls=\"mobile-nav\""));
        assert!(html.contains("<nav id=\"mobile-nav\" class=\"sections mobile\" hidden>"));
        // Desktop nav only disappears where the toggle appears.
        assert!(html.contains("@media (max-width: 767px)"));
        assert!(html.contains(".menu-toggle { display: inline-block; }"));
    }

    #[test]
    fn test_theme_class_on_root() {
        let dark = render(profile(), Theme::Dark);
        assert!(dark.contains("<html lang=\"en\" class=\"dark\">"));
        let light = render(profile(), Theme::Light);
        assert!(light.contains("<html lang=\"en\" class=\"\">"));
    }

    #[test]
    fn test_profile_text_is_escaped() {
        let mut p = profile();
        p.skills = vec!["<script>alert(1)</script>".to_string()];
        let html = render(p, Theme::Light);
        assert!(html.contains("alert(1)"));
        assert!(!html.contains("<script>alert(1)"));
        assert!(!html.contains("<span><script>"));
    }

    #[test]
    fn test_footer_and_resume_link() {
        let p = profile();
        let name = p.name.clone();
        let html = PageTemplate::new(Arc::new(p), Theme::Light, 2031)
            .render()
            .unwrap();
        assert!(html.contains(&format!("&copy; 2031 {name}")));
        assert!(html.contains("Download Resume"));
    }

    #[test]
    fn test_resume_link_omitted_when_absent() {
        let mut p = profile();
        p.resume = None;
        let html = render(p, Theme::Light);
        assert!(!html.contains("Download Resume"));
    }

    #[test]
    fn test_phone_link_uses_dial_string() {
        let mut p = profile();
        p.phone = Some("+1 (555) 010-0199".to_string());
        let html = render(p, Theme::Light);
        assert!(html.contains("href=\"tel:+15550100199\""));
    }

    #[test]
    fn test_script_takes_values_from_nav() {
        let html = render(profile(), Theme::Light);
        assert!(html.contains(
            r#"const SECTIONS = ["about","experience","projects","certifications","skills","contact"];"#
        ));
        assert!(html.contains(&format!("const ACTIVE_OFFSET = {ACTIVE_SCROLL_OFFSET_PX};")));
        assert!(html.contains(&format!("const NAV_OFFSET_MOBILE = {NAV_OFFSET_MOBILE_PX};")));
        assert!(html.contains(&format!("const NAV_OFFSET_DESKTOP = {NAV_OFFSET_DESKTOP_PX};")));
        assert!(html.contains(&format!("const MOBILE_BREAKPOINT = {MOBILE_BREAKPOINT_PX};")));
        // Last reached section wins, and the breakpoint picks the offset.
        assert!(html.contains("el.offsetTop <= position"));
        assert!(html.contains(
            "window.innerWidth < MOBILE_BREAKPOINT ? NAV_OFFSET_MOBILE : NAV_OFFSET_DESKTOP"
        ));
        assert!(html.contains("/api/contact"));
    }
}
