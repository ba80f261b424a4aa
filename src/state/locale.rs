/// Display language of a dashboard page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    pub fn all() -> &'static [Self] {
        &[Self::En, Self::Fr]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    /// Resolves the value of a container's `language` attribute.
    ///
    /// Only the exact value `"fr"` selects French; anything else, including an
    /// absent attribute, is English.
    pub fn resolve(attribute: Option<&str>) -> Self {
        match attribute {
            Some("fr") => Self::Fr,
            _ => Self::En,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::En => "language.option.en",
            Self::Fr => "language.option.fr",
        }
    }
}

/// The element whose `language` attribute is the single source of truth for
/// the active locale.
pub trait LocaleSource {
    fn language_attribute(&self) -> Option<&str>;

    fn resolve_locale(&self) -> Locale {
        Locale::resolve(self.language_attribute())
    }
}

/// Attributes of the table container element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainerAttributes {
    pub language: Option<String>,
}

impl ContainerAttributes {
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
        }
    }
}

impl LocaleSource for ContainerAttributes {
    fn language_attribute(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

impl LocaleSource for Option<String> {
    fn language_attribute(&self) -> Option<&str> {
        self.as_deref()
    }
}
