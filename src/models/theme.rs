//! Colour themes.

/// Editor colour theme.
///
/// The id is written to the `data-theme` attribute on `<html>` and persisted
/// to localStorage; `assets/themes.css` defines the variables per id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    VsCodeDark,
    Monokai,
    Dracula,
    OneDark,
    SolarizedDark,
    Nord,
    TokyoNight,
    GithubDark,
}

impl Theme {
    /// All themes in menu order.
    pub const ALL: [Theme; 8] = [
        Theme::VsCodeDark,
        Theme::Monokai,
        Theme::Dracula,
        Theme::OneDark,
        Theme::SolarizedDark,
        Theme::Nord,
        Theme::TokyoNight,
        Theme::GithubDark,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Theme::VsCodeDark => "vscode-dark",
            Theme::Monokai => "monokai",
            Theme::Dracula => "dracula",
            Theme::OneDark => "one-dark",
            Theme::SolarizedDark => "solarized-dark",
            Theme::Nord => "nord",
            Theme::TokyoNight => "tokyo-night",
            Theme::GithubDark => "github-dark",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Theme::VsCodeDark => "VS Code Dark",
            Theme::Monokai => "Monokai",
            Theme::Dracula => "Dracula",
            Theme::OneDark => "One Dark",
            Theme::SolarizedDark => "Solarized Dark",
            Theme::Nord => "Nord",
            Theme::TokyoNight => "Tokyo Night",
            Theme::GithubDark => "GitHub Dark",
        }
    }

    /// Look up a theme by id. Returns `None` for unrecognized ids.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Look up a theme by id, falling back to the default theme.
    pub fn from_id_or_default(id: Option<&str>) -> Self {
        id.and_then(Self::from_id).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id() {
        assert_eq!(Theme::from_id("nord"), Some(Theme::Nord));
        assert_eq!(Theme::from_id("tokyo-night"), Some(Theme::TokyoNight));
        assert_eq!(Theme::from_id("Nord"), None);
        assert_eq!(Theme::from_id("solarized-light"), None);
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(Theme::from_id_or_default(None), Theme::VsCodeDark);
        assert_eq!(Theme::from_id_or_default(Some("bogus")), Theme::VsCodeDark);
        assert_eq!(Theme::from_id_or_default(Some("dracula")), Theme::Dracula);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = Theme::ALL.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Theme::ALL.len());
    }
}
