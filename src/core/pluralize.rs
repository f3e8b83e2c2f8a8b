//! Pluralization of entity names into REST resource paths

/// Utility for converting entity table names into plural URL segments
pub struct Pluralizer;

impl Pluralizer {
    /// Convert a singular noun to its plural form
    ///
    /// # Examples
    ///
    /// ```
    /// use saha::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::pluralize("karbar"), "karbars");
    /// assert_eq!(Pluralizer::pluralize("gozaresh"), "gozareshes");
    /// assert_eq!(Pluralizer::pluralize("company"), "companies");
    /// ```
    pub fn pluralize(singular: &str) -> String {
        if singular.is_empty() {
            return singular.to_string();
        }

        match singular {
            // Words ending in consonant + y -> ies
            s if s.ends_with('y')
                && !s.ends_with("ay")
                && !s.ends_with("ey")
                && !s.ends_with("iy")
                && !s.ends_with("oy")
                && !s.ends_with("uy")
                && s.len() > 1 =>
            {
                format!("{}ies", &s[..s.len() - 1])
            }

            // Words ending in s, sh, ch, x, z -> es
            s if s.ends_with('s')
                || s.ends_with("sh")
                || s.ends_with("ch")
                || s.ends_with('x')
                || s.ends_with('z') =>
            {
                format!("{}es", s)
            }

            s => format!("{}s", s),
        }
    }

    /// Build the resource path for a snake_case table name
    ///
    /// Only the last word is pluralized; words are joined with dashes.
    ///
    /// ```
    /// use saha::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::resource_path("barname_hesab_resi"), "barname-hesab-resis");
    /// assert_eq!(Pluralizer::resource_path("file_gozaresh"), "file-gozareshes");
    /// ```
    pub fn resource_path(table_name: &str) -> String {
        match table_name.rsplit_once('_') {
            Some((head, last)) => {
                format!("{}-{}", head.replace('_', "-"), Self::pluralize(last))
            }
            None => Self::pluralize(table_name),
        }
    }
}
