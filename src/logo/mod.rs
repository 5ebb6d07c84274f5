// src/logo/mod.rs - hexagon logo SVG markup
use crate::core::helpers::escape_html;
use std::fmt::Write as _;

pub const DEFAULT_LOGO_SIZE: u32 = 40;
pub const DEFAULT_HERO_SIZE: u32 = 120;
pub const DEFAULT_FOOTER_SIZE: u32 = 32;
pub const DEFAULT_GRADIENT_ID: &str = "hexGrad";

const HEXAGON_POINTS: &str = "50,15 80,32.5 80,67.5 50,85 20,67.5 20,32.5";
const VERTICES: [(f32, f32); 6] = [
    (50.0, 15.0),
    (80.0, 32.5),
    (80.0, 67.5),
    (50.0, 85.0),
    (20.0, 67.5),
    (20.0, 32.5),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoVariant {
    Standard,
    Hero,
    Footer,
}

impl LogoVariant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "standard" | "nav" | "default" => Some(Self::Standard),
            "hero" => Some(Self::Hero),
            "footer" => Some(Self::Footer),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hero => "hero",
            Self::Footer => "footer",
        }
    }

    pub fn default_size(self) -> u32 {
        match self {
            Self::Standard => DEFAULT_LOGO_SIZE,
            Self::Hero => DEFAULT_HERO_SIZE,
            Self::Footer => DEFAULT_FOOTER_SIZE,
        }
    }

    /// `None` uses the variant's default size.
    pub fn render(self, size: Option<u32>) -> String {
        let size = size.unwrap_or_else(|| self.default_size());
        match self {
            Self::Standard => create_logo(size, DEFAULT_GRADIENT_ID),
            Self::Hero => create_hero_logo(size),
            Self::Footer => create_footer_logo(size),
        }
    }
}

/// Navigation logo. `gradient_id` scopes the gradient definition so several
/// logos can share one document.
pub fn create_logo(size: u32, gradient_id: &str) -> String {
    let id = if gradient_id.trim().is_empty() {
        DEFAULT_GRADIENT_ID.to_string()
    } else {
        escape_html(gradient_id)
    };

    let mut svg = open_svg(size, "");
    push_frame(&mut svg, &id);
    push_circle(
        &mut svg,
        12.0,
        "fill=\"none\" stroke=\"#3b82f6\" stroke-width=\"2\" opacity=\"0.7\"",
    );
    push_circle(&mut svg, 3.0, "fill=\"#3b82f6\"");
    push_vertices(&mut svg, "");
    svg.push_str("</svg>");
    svg
}

pub fn create_hero_logo(size: u32) -> String {
    let mut svg = open_svg(size, " class=\"mx-auto\"");
    push_frame(&mut svg, "heroHexGrad");
    push_circle(
        &mut svg,
        12.0,
        "fill=\"none\" stroke=\"#3b82f6\" stroke-width=\"2\" opacity=\"0.7\"",
    );
    push_circle(
        &mut svg,
        7.0,
        "fill=\"none\" stroke=\"#60a5fa\" stroke-width=\"1.5\" opacity=\"0.8\"",
    );
    push_circle(&mut svg, 3.0, "fill=\"#3b82f6\"");
    push_vertices(&mut svg, " stroke=\"#818cf8\" stroke-width=\"1\"");
    svg.push_str("</svg>");
    svg
}

pub fn create_footer_logo(size: u32) -> String {
    let mut svg = open_svg(size, "");
    push_frame(&mut svg, "footerHexGrad");
    push_circle(&mut svg, 8.0, "fill=\"none\" stroke=\"#60a5fa\" stroke-width=\"2\"");
    push_circle(&mut svg, 3.0, "fill=\"#3b82f6\"");
    svg.push_str("</svg>");
    svg
}

fn open_svg(size: u32, extra: &str) -> String {
    format!(
        "<svg width=\"{0}\" height=\"{0}\" viewBox=\"0 0 100 100\"{1}>",
        size, extra
    )
}

fn push_frame(svg: &mut String, id: &str) {
    let _ = write!(
        svg,
        "<defs><linearGradient id=\"{0}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">\
         <stop offset=\"0%\" style=\"stop-color:#818cf8\"/>\
         <stop offset=\"100%\" style=\"stop-color:#a78bfa\"/>\
         </linearGradient></defs>\
         <polygon points=\"{1}\" fill=\"none\" stroke=\"url(#{0})\" stroke-width=\"3\"/>",
        id, HEXAGON_POINTS
    );
}

fn push_circle(svg: &mut String, r: f32, attrs: &str) {
    let _ = write!(svg, "<circle cx=\"50\" cy=\"50\" r=\"{}\" {}/>", r, attrs);
}

fn push_vertices(svg: &mut String, stroke: &str) {
    for (x, y) in VERTICES {
        let _ = write!(
            svg,
            "<circle cx=\"{}\" cy=\"{}\" r=\"3\" fill=\"#c4b5fd\"{}/>",
            x, y, stroke
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_logo_uses_given_size_and_scope() {
        let svg = create_logo(64, "navGrad");
        assert!(svg.starts_with("<svg width=\"64\" height=\"64\""));
        assert!(svg.contains("<linearGradient id=\"navGrad\""));
        assert!(svg.contains("stroke=\"url(#navGrad)\""));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("fill=\"#c4b5fd\"").count(), 6);
    }

    #[test]
    fn blank_scope_falls_back_to_default_id() {
        assert!(create_logo(40, "  ").contains("id=\"hexGrad\""));
    }

    #[test]
    fn scope_is_attribute_escaped() {
        let svg = create_logo(40, "a\"b");
        assert!(svg.contains("id=\"a&quot;b\""));
    }

    #[test]
    fn hero_logo_has_inner_ring_and_stroked_vertices() {
        let svg = create_hero_logo(DEFAULT_HERO_SIZE);
        assert!(svg.contains("class=\"mx-auto\""));
        assert!(svg.contains("id=\"heroHexGrad\""));
        assert!(svg.contains("r=\"7\""));
        assert_eq!(svg.matches("stroke=\"#818cf8\"").count(), 6);
    }

    #[test]
    fn footer_logo_is_reduced() {
        let svg = create_footer_logo(DEFAULT_FOOTER_SIZE);
        assert!(svg.contains("width=\"32\""));
        assert!(svg.contains("id=\"footerHexGrad\""));
        assert!(svg.contains("r=\"8\""));
        assert!(!svg.contains("#c4b5fd"));
    }

    #[test]
    fn variants_render_default_sizes() {
        assert!(LogoVariant::Standard.render(None).contains("width=\"40\""));
        assert!(LogoVariant::Hero.render(None).contains("width=\"120\""));
        assert!(LogoVariant::Footer.render(Some(16)).contains("width=\"16\""));
        assert_eq!(LogoVariant::from_name("HERO"), Some(LogoVariant::Hero));
        assert_eq!(LogoVariant::from_name("banner"), None);
    }
}
