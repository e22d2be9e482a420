//! Translation completeness validation.
//!
//! Checks that every `MessageKey` has an entry in every enabled locale's
//! table and that no table defines a key twice. Run once at startup; missing
//! entries are reported as warnings (they still render through the default
//! locale), duplicates and missing tables as errors.

use crate::i18n::strings::{table_for, MessageKey, TableSource};
use crate::i18n::Locale;
use std::collections::HashSet;

/// Validation report containing errors and warnings about the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems (a locale without a table, a duplicated key)
    pub errors: Vec<String>,

    /// Keys that will fall back to the default locale
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the message tables.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Audit every enabled locale.
    pub fn validate() -> ValidationReport {
        Self::validate_locales(&Locale::all())
    }

    /// Audit the given locales.
    pub fn validate_locales(locales: &[Locale]) -> ValidationReport {
        Self::validate_tables(table_for, locales)
    }

    /// Audit the given locales against an explicit table source.
    pub fn validate_tables(tables: TableSource, locales: &[Locale]) -> ValidationReport {
        let mut report = ValidationReport::new();

        for locale in locales {
            let Some(table) = tables(*locale) else {
                report
                    .errors
                    .push(format!("Locale '{}' has no message table", locale));
                continue;
            };

            let mut seen = HashSet::new();
            for (key, _) in table {
                if !seen.insert(*key) {
                    report.errors.push(format!(
                        "Locale '{}' defines '{}' more than once",
                        locale,
                        key.as_str()
                    ));
                }
            }

            for key in MessageKey::ALL {
                if !seen.contains(&key) {
                    report.warnings.push(format!(
                        "Locale '{}' is missing '{}'",
                        locale,
                        key.as_str()
                    ));
                }
            }
        }

        report
    }
}
