use std::collections::HashMap;

/// A lookup table mapping message templates to their translations.
///
/// Translation is keyed by the literal, untranslated template string. The
/// catalog is passed explicitly to every call that needs it, so message
/// construction never depends on process-wide state.
///
/// # Example
/// ```
/// use minimath::message::Catalog;
///
/// let catalog = Catalog::with_translations([("Not yet done.", "Pas encore fait.")]);
/// assert_eq!(catalog.message("Not yet done.", &[]), "Pas encore fait.");
/// assert_eq!(catalog.message("Hello $0.", &["world"]), "Hello world.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    translations: HashMap<String, String>,
}

impl Catalog {
    /// Constructs an empty catalog. Every template passes through untranslated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a catalog from `(template, translation)` pairs.
    ///
    /// # Example
    /// ```
    /// use minimath::message::Catalog;
    ///
    /// let catalog = Catalog::with_translations([("Hello $0.", "Bonjour $0.")]);
    /// assert_eq!(catalog.message("Hello $0.", &["Ada"]), "Bonjour Ada.");
    /// ```
    #[must_use]
    pub fn with_translations<'a, I>(translations: I) -> Self
        where I: IntoIterator<Item = (&'a str, &'a str)>
    {
        Self { translations: translations.into_iter()
                                         .map(|(template, text)| {
                                             (template.to_string(), text.to_string())
                                         })
                                         .collect(), }
    }

    /// Adds or replaces the translation for a template.
    pub fn insert(&mut self, template: &str, translation: &str) -> &mut Self {
        self.translations
            .insert(template.to_string(), translation.to_string());
        self
    }

    /// Looks up the translation for a template, falling back to the template
    /// itself.
    #[must_use]
    pub fn translate<'a>(&'a self, template: &'a str) -> &'a str {
        self.translations
            .get(template)
            .map_or(template, String::as_str)
    }

    /// Translates a template through this catalog, then substitutes the
    /// positional variables into it.
    ///
    /// # Example
    /// ```
    /// use minimath::message::Catalog;
    ///
    /// let catalog = Catalog::new();
    /// assert_eq!(catalog.message("$0 and $1.", &["one", "two"]), "one and two.");
    /// ```
    #[must_use]
    pub fn message(&self, template: &str, vars: &[&str]) -> String {
        message(self.translate(template), vars)
    }
}

/// Substitutes positional variables into a message template.
///
/// Every occurrence of `$0`, `$1`, ... is replaced by the variable with the
/// matching index. Higher indices are substituted first so that `$1` never
/// clobbers part of `$10`. Placeholders without a matching variable are left
/// in place.
///
/// # Example
/// ```
/// use minimath::message::message;
///
/// let text = message("The requested function is not defined for $0.",
///                    &["complex numbers"]);
/// assert_eq!(text, "The requested function is not defined for complex numbers.");
///
/// assert_eq!(message("$0 + $0 = $1", &["1", "2"]), "1 + 1 = 2");
/// ```
#[must_use]
pub fn message(template: &str, vars: &[&str]) -> String {
    let mut text = template.to_string();

    for (i, var) in vars.iter().enumerate().rev() {
        text = text.replace(&format!("${i}"), var);
    }

    text
}
