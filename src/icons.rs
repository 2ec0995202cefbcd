//! Category glyphs for the sidebar.
//!
//! Known category names map to a fixed glyph. Any other category still
//! groups and renders normally, with [`CategoryIcon::Generic`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryIcon {
    Play,
    Book,
    Chart,
    Bolt,
    Mail,
    Gear,
    Document,
    Phone,
    Message,
    UserCog,
    Support,
    Ellipsis,
    Generic,
}

impl CategoryIcon {
    pub fn for_category(category: &str) -> Self {
        match category {
            "Get Started" => Self::Play,
            "Lead Management" => Self::Book,
            "Reports and Analytics" => Self::Chart,
            "Marketing Automation" => Self::Bolt,
            "Integrations" => Self::Mail,
            "Configuration" => Self::Gear,
            "Invoice & Quotation" => Self::Document,
            "IVR" => Self::Phone,
            "WABA" => Self::Message,
            "User Management" => Self::UserCog,
            "Support & Training" => Self::Support,
            "Others" => Self::Ellipsis,
            _ => Self::Generic,
        }
    }

    /// Single-column glyph for terminal rendering.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Book => "≡",
            Self::Chart => "▲",
            Self::Bolt => "ϟ",
            Self::Mail => "✉",
            Self::Gear => "⚙",
            Self::Document => "▤",
            Self::Phone => "☎",
            Self::Message => "✎",
            Self::UserCog => "☺",
            Self::Support => "✚",
            Self::Ellipsis => "…",
            Self::Generic => "•",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_map() {
        assert_eq!(CategoryIcon::for_category("IVR"), CategoryIcon::Phone);
        assert_eq!(
            CategoryIcon::for_category("Invoice & Quotation"),
            CategoryIcon::Document
        );
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(CategoryIcon::for_category("ivr"), CategoryIcon::Generic);
        assert_eq!(CategoryIcon::for_category("IVR "), CategoryIcon::Generic);
    }

    #[test]
    fn unknown_category_gets_generic_glyph() {
        let icon = CategoryIcon::for_category("Brand New Section");
        assert_eq!(icon, CategoryIcon::Generic);
        assert_eq!(icon.glyph(), "•");
    }
}
