// 🗂️ Format Registry - catalog of every display format
//
// "The id is the identity, the name is a value"
//
// - Identifiers are persisted in saved dashboards and must resolve forever
// - Display names and grouping may change without breaking anyone
// - The table is immutable once built; lookups go through a flat index

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::categories::default_categories;
use crate::error::{Error, Result};
use crate::formatter::ValueFormatter;
use crate::numeric::DecimalCount;

// ============================================================================
// DESCRIPTORS
// ============================================================================

/// One selectable format: display name, stable id and formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatDescriptor {
    /// Human-readable name (e.g., "bytes/sec")
    pub name: String,

    /// Stable identifier (e.g., "Bps") - NEVER rename
    pub id: String,

    pub formatter: ValueFormatter,
}

impl FormatDescriptor {
    pub fn new(name: impl Into<String>, id: impl Into<String>, formatter: ValueFormatter) -> Self {
        FormatDescriptor {
            name: name.into(),
            id: id.into(),
            formatter,
        }
    }

    pub fn format(&self, value: f64, decimals: DecimalCount, scaled_decimals: DecimalCount) -> String {
        self.formatter.format(value, decimals, scaled_decimals)
    }
}

/// Named group of related formats (e.g., "data rate").
#[derive(Debug, Clone, PartialEq)]
pub struct FormatCategory {
    pub name: String,
    pub formats: Vec<FormatDescriptor>,
}

impl FormatCategory {
    pub fn new(name: impl Into<String>) -> Self {
        FormatCategory {
            name: name.into(),
            formats: Vec::new(),
        }
    }

    /// Builder: append a format
    pub fn with(
        mut self,
        name: impl Into<String>,
        id: impl Into<String>,
        formatter: ValueFormatter,
    ) -> Self {
        self.formats.push(FormatDescriptor::new(name, id, formatter));
        self
    }
}

// ============================================================================
// MENU VIEW
// ============================================================================

/// Leaf of the unit picker menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub text: String,
    pub value: String,
}

/// Category entry of the unit picker menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub text: String,
    pub submenu: Vec<MenuItem>,
}

// ============================================================================
// FORMAT REGISTRY
// ============================================================================

/// Ordered categories plus an id → (category, position) index.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    categories: Vec<FormatCategory>,
    index: HashMap<String, (usize, usize)>,
}

impl FormatRegistry {
    /// Create new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create registry with the built-in table pre-loaded
    pub fn with_defaults() -> Self {
        let mut registry = FormatRegistry::new();
        for category in default_categories() {
            let result = registry.register_category(category);
            // persisted ids must never vanish from the built-in table
            debug_assert!(result.is_ok(), "built-in table is inconsistent: {:?}", result);
            if let Err(e) = result {
                tracing::error!(error = %e, "skipping built-in category");
            }
        }
        tracing::debug!(
            categories = registry.categories.len(),
            formats = registry.count(),
            "format registry built"
        );
        registry
    }

    /// Build from an explicit table, failing on the first duplicate id.
    pub fn from_categories(categories: impl IntoIterator<Item = FormatCategory>) -> Result<Self> {
        let mut registry = FormatRegistry::new();
        for category in categories {
            registry.register_category(category)?;
        }
        Ok(registry)
    }

    /// Append a category. Any id already present (or repeated inside the
    /// category) rejects the whole category and leaves the registry as it was.
    pub fn register_category(&mut self, category: FormatCategory) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for format in &category.formats {
            if self.index.contains_key(&format.id) || !seen.insert(format.id.as_str()) {
                return Err(Error::DuplicateId(format.id.clone()));
            }
        }

        let cat_pos = self.categories.len();
        for (pos, format) in category.formats.iter().enumerate() {
            self.index.insert(format.id.clone(), (cat_pos, pos));
        }
        self.categories.push(category);
        Ok(())
    }

    /// Get descriptor by id
    pub fn get(&self, id: &str) -> Option<&FormatDescriptor> {
        self.index
            .get(id)
            .map(|&(cat, pos)| &self.categories[cat].formats[pos])
    }

    /// Name of the category holding `id`
    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.index
            .get(id)
            .map(|&(cat, _)| self.categories[cat].name.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Format `value` with the format registered under `id`.
    pub fn format(
        &self,
        id: &str,
        value: f64,
        decimals: DecimalCount,
        scaled_decimals: DecimalCount,
    ) -> Result<String> {
        let descriptor = self
            .get(id)
            .ok_or_else(|| Error::UnknownFormat(id.to_string()))?;
        Ok(descriptor.format(value, decimals, scaled_decimals))
    }

    pub fn categories(&self) -> &[FormatCategory] {
        &self.categories
    }

    /// Get category by name
    pub fn category(&self, name: &str) -> Option<&FormatCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// All ids in table order
    pub fn list_ids(&self) -> Vec<&str> {
        self.iter().map(|f| f.id.as_str()).collect()
    }

    /// Every descriptor in table order
    pub fn iter(&self) -> impl Iterator<Item = &FormatDescriptor> {
        self.categories.iter().flat_map(|c| c.formats.iter())
    }

    /// Count total formats
    pub fn count(&self) -> usize {
        self.index.len()
    }

    /// Category → formats tree for unit pickers.
    pub fn menu(&self) -> Vec<MenuCategory> {
        self.categories
            .iter()
            .map(|category| MenuCategory {
                text: category.name.clone(),
                submenu: category
                    .formats
                    .iter()
                    .map(|format| MenuItem {
                        text: format.name.clone(),
                        value: format.id.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// SHA-256 over the ordered id list, hex encoded.
    ///
    /// Changes whenever an id is added, removed, renamed or reordered;
    /// display-name edits leave it untouched.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for id in self.list_ids() {
            hasher.update(id.as_bytes());
            hasher.update([0u8]);
        }
        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// Process-wide registry holding the built-in table.
pub fn default_registry() -> &'static FormatRegistry {
    &DEFAULT_REGISTRY
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::PLACEHOLDER;

    fn small_category() -> FormatCategory {
        FormatCategory::new("custom")
            .with("widgets", "widgets", ValueFormatter::fixed_unit("wdg"))
            .with("gadgets/sec", "gadgetsps", ValueFormatter::count("gps"))
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.count(), 170, "Registry should hold the built-in table");
        assert_eq!(registry.categories().len(), 23);
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = FormatRegistry::with_defaults();
        let total: usize = registry.categories().iter().map(|c| c.formats.len()).sum();
        assert_eq!(total, registry.count(), "every built-in id should be indexed once");
    }

    #[test]
    fn test_builtin_table_registers_strictly() {
        let strict = FormatRegistry::from_categories(default_categories())
            .expect("built-in table must not repeat an id");
        assert_eq!(strict.count(), 170);
        assert_eq!(strict.fingerprint(), FormatRegistry::with_defaults().fingerprint());
    }

    #[test]
    fn test_get_by_id() {
        let registry = FormatRegistry::with_defaults();

        let bps = registry.get("Bps").expect("Bps should exist");
        assert_eq!(bps.name, "bytes/sec");
        assert_eq!(registry.category_of("Bps"), Some("data rate"));
        assert!(registry.get("nope").is_none());
    }

    #[test]
    fn test_format_unknown_id() {
        let registry = FormatRegistry::with_defaults();
        let err = registry.format("furlongs", 1.0, None, None).unwrap_err();
        assert!(matches!(err, Error::UnknownFormat(id) if id == "furlongs"));
    }

    #[test]
    fn test_format_known_ids() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.format("bytes", 1024.0, None, None).unwrap(), "1 KiB");
        assert_eq!(registry.format("decbytes", 1000.0, None, None).unwrap(), "1 kB");
        assert_eq!(registry.format("currencyUSD", 1500.0, Some(1), None).unwrap(), "$1.5K");
        assert_eq!(registry.format("percentunit", 0.5, None, None).unwrap(), "50%");
        assert_eq!(registry.format("short", 2_000_000.0, None, None).unwrap(), "2 Mil");
        assert_eq!(registry.format("celsius", 21.5, Some(1), None).unwrap(), "21.5 °C");
        assert_eq!(registry.format("ms", f64::NAN, None, None).unwrap(), PLACEHOLDER);
    }

    #[test]
    fn test_register_custom_category() {
        let mut registry = FormatRegistry::with_defaults();
        let initial = registry.count();

        registry.register_category(small_category()).unwrap();

        assert_eq!(registry.count(), initial + 2);
        assert_eq!(registry.format("widgets", 3.0, None, None).unwrap(), "3 wdg");
    }

    #[test]
    fn test_duplicate_id_rejected_atomically() {
        let mut registry = FormatRegistry::with_defaults();
        let initial = registry.count();

        let clash = FormatCategory::new("clash")
            .with("fresh", "fresh_id", ValueFormatter::Fixed)
            .with("bytes again", "bytes", ValueFormatter::Fixed);

        let err = registry.register_category(clash).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(id) if id == "bytes"));
        assert_eq!(registry.count(), initial);
        assert!(!registry.contains("fresh_id"));
    }

    #[test]
    fn test_duplicate_within_category_rejected() {
        let dup = FormatCategory::new("dup")
            .with("a", "same", ValueFormatter::Fixed)
            .with("b", "same", ValueFormatter::Fixed);
        assert!(FormatRegistry::from_categories([dup]).is_err());
    }

    #[test]
    fn test_menu_mirrors_table() {
        let registry = FormatRegistry::with_defaults();
        let menu = registry.menu();

        assert_eq!(menu.len(), registry.categories().len());
        assert_eq!(menu[0].text, "none");
        assert_eq!(menu[0].submenu[0], MenuItem { text: "none".into(), value: "none".into() });
    }

    #[test]
    fn test_fingerprint_tracks_ids_only() {
        let base = FormatRegistry::from_categories([small_category()]).unwrap();

        let mut renamed = small_category();
        renamed.formats[0].name = "Widgets (wdg)".into();
        let renamed = FormatRegistry::from_categories([renamed]).unwrap();
        assert_eq!(base.fingerprint(), renamed.fingerprint());

        let mut extended = small_category();
        extended.formats.push(FormatDescriptor::new("x", "x", ValueFormatter::Fixed));
        let extended = FormatRegistry::from_categories([extended]).unwrap();
        assert_ne!(base.fingerprint(), extended.fingerprint());

        assert_eq!(base.fingerprint().len(), 64);
    }

    #[test]
    fn test_default_registry_is_shared() {
        let a = default_registry() as *const FormatRegistry;
        let b = default_registry() as *const FormatRegistry;
        assert_eq!(a, b);
        assert!(default_registry().contains("none"));
    }
}
