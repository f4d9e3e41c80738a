use std::fmt;

/// Style vocabulary offered by the style picker.
///
/// [`BeerStyle::All`] matches every beer; other variants match a beer whose
/// free-text style contains the variant's label, ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BeerStyle {
    All,
    Ipa,
    Lager,
    Pilsner,
    Stout,
    Porter,
    Wheat,
    PaleAle,
    Amber,
    Brown,
    Blonde,
    Saison,
    Sour,
    Belgian,
    Bock,
    Doppelbock,
    Hefeweizen,
    Kolsch,
    Marzen,
    Oktoberfest,
}

impl BeerStyle {
    pub const ALL_STYLES: [BeerStyle; 20] = [
        BeerStyle::All,
        BeerStyle::Ipa,
        BeerStyle::Lager,
        BeerStyle::Pilsner,
        BeerStyle::Stout,
        BeerStyle::Porter,
        BeerStyle::Wheat,
        BeerStyle::PaleAle,
        BeerStyle::Amber,
        BeerStyle::Brown,
        BeerStyle::Blonde,
        BeerStyle::Saison,
        BeerStyle::Sour,
        BeerStyle::Belgian,
        BeerStyle::Bock,
        BeerStyle::Doppelbock,
        BeerStyle::Hefeweizen,
        BeerStyle::Kolsch,
        BeerStyle::Marzen,
        BeerStyle::Oktoberfest,
    ];

    /// The short list shown before the picker is expanded.
    #[must_use]
    pub fn popular_styles() -> [BeerStyle; 8] {
        [
            BeerStyle::All,
            BeerStyle::Ipa,
            BeerStyle::Lager,
            BeerStyle::Pilsner,
            BeerStyle::Stout,
            BeerStyle::PaleAle,
            BeerStyle::Wheat,
            BeerStyle::Amber,
        ]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BeerStyle::All => "All",
            BeerStyle::Ipa => "IPA",
            BeerStyle::Lager => "Lager",
            BeerStyle::Pilsner => "Pilsner",
            BeerStyle::Stout => "Stout",
            BeerStyle::Porter => "Porter",
            BeerStyle::Wheat => "Wheat Beer",
            BeerStyle::PaleAle => "Pale Ale",
            BeerStyle::Amber => "Amber Ale",
            BeerStyle::Brown => "Brown Ale",
            BeerStyle::Blonde => "Blonde Ale",
            BeerStyle::Saison => "Saison",
            BeerStyle::Sour => "Sour",
            BeerStyle::Belgian => "Belgian",
            BeerStyle::Bock => "Bock",
            BeerStyle::Doppelbock => "Doppelbock",
            BeerStyle::Hefeweizen => "Hefeweizen",
            BeerStyle::Kolsch => "Kölsch",
            BeerStyle::Marzen => "Märzen",
            BeerStyle::Oktoberfest => "Oktoberfest",
        }
    }

    /// Looks up a style by its label, ignoring case.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim().to_lowercase();
        Self::ALL_STYLES
            .iter()
            .copied()
            .find(|s| s.label().to_lowercase() == wanted)
    }

    /// Returns `true` if a beer with free-text `style` belongs to this style.
    #[must_use]
    pub fn matches(self, style: &str) -> bool {
        match self {
            BeerStyle::All => true,
            other => style
                .to_lowercase()
                .contains(&other.label().to_lowercase()),
        }
    }
}

impl fmt::Display for BeerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_anything() {
        assert!(BeerStyle::All.matches(""));
        assert!(BeerStyle::All.matches("Imperial Stout"));
    }

    #[test]
    fn matches_substring_ignoring_case() {
        assert!(BeerStyle::Ipa.matches("Double ipa"));
        assert!(BeerStyle::Stout.matches("Imperial STOUT"));
        assert!(!BeerStyle::Lager.matches("Pale Ale"));
    }

    #[test]
    fn from_label_handles_non_ascii_labels() {
        assert_eq!(BeerStyle::from_label("kölsch"), Some(BeerStyle::Kolsch));
        assert_eq!(BeerStyle::from_label("pale ale"), Some(BeerStyle::PaleAle));
        assert_eq!(BeerStyle::from_label("barleywine"), None);
    }

    #[test]
    fn popular_styles_start_with_all() {
        let popular = BeerStyle::popular_styles();
        assert_eq!(popular[0], BeerStyle::All);
        assert!(popular.contains(&BeerStyle::Ipa));
    }
}
