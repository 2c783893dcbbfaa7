//! Column layout derived from a pod schema.

use crate::config::GridConfig;
use crate::fmt::split_field_name;
use crate::storage::PodSchema;

pub const TIME_TITLE: &str = "time";
pub const TAGS_TITLE: &str = "tags";

/// Which class of value a column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    Time,
    Identifier,
    Measurement,
    Category,
    Tags,
}

impl ColumnClass {
    /// Whether cells of this class carry numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Time | Self::Measurement)
    }
}

/// One grid column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Leaf of the field name.
    pub title: String,
    /// Namespace prefix of the field name, `""` if none.
    pub group: String,
    /// Width in pixels, always positive.
    pub width: f64,
    pub class: ColumnClass,
}

impl Column {
    fn field(name: &str, width: f64, class: ColumnClass) -> Self {
        let (group, title) = split_field_name(name);
        Self {
            title: title.to_string(),
            group: group.to_string(),
            width,
            class,
        }
    }

    pub fn key(&self) -> ColumnKey {
        ColumnKey::new(&self.title, &self.group)
    }

    pub fn matches(&self, key: &ColumnKey) -> bool {
        self.title == key.title && self.group == key.group
    }
}

/// Identifies a column by `(title, group)` rather than by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    pub title: String,
    pub group: String,
}

impl ColumnKey {
    pub fn new(title: &str, group: &str) -> Self {
        Self {
            title: title.to_string(),
            group: group.to_string(),
        }
    }
}

impl std::fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}.{}", self.group, self.title)
        }
    }
}

/// Builds the ordered column list for `schema`.
///
/// Order: time, identifiers, measurements, categories, tags. The time column
/// gets a fixed width; the rest of `total_width` (minus the fixed margin) is
/// split evenly, never below `config.min_column_width`.
pub fn build_columns(schema: &PodSchema, total_width: f64, config: &GridConfig) -> Vec<Column> {
    // +1 for tags
    let remaining_columns = schema.field_count() + 1;
    let time_width = config.time_width();
    let remaining = total_width - time_width - config.fixed_margin;
    let per_column = (remaining / remaining_columns as f64).max(config.min_column_width);

    let mut columns = Vec::with_capacity(schema.column_count());
    columns.push(Column {
        title: TIME_TITLE.to_string(),
        group: String::new(),
        width: time_width,
        class: ColumnClass::Time,
    });

    let fields = [
        (&schema.identifiers, ColumnClass::Identifier),
        (&schema.measurements, ColumnClass::Measurement),
        (&schema.categories, ColumnClass::Category),
    ];
    for (names, class) in fields {
        columns.extend(names.iter().map(|name| Column::field(name, per_column, class)));
    }

    columns.push(Column {
        title: TAGS_TITLE.to_string(),
        group: String::new(),
        width: per_column,
        class: ColumnClass::Tags,
    });

    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(ids: &[&str], measurements: &[&str], categories: &[&str]) -> PodSchema {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        PodSchema::new(owned(ids), owned(measurements), owned(categories))
    }

    fn titles(columns: &[Column]) -> Vec<(&str, &str)> {
        columns
            .iter()
            .map(|c| (c.title.as_str(), c.group.as_str()))
            .collect()
    }

    #[test]
    fn test_layout_order_and_groups() {
        let s = schema(&["site"], &["engine.temp"], &[]);
        let columns = build_columns(&s, 1200.0, &GridConfig::default());

        assert_eq!(
            titles(&columns),
            vec![("time", ""), ("site", ""), ("temp", "engine"), ("tags", "")]
        );
        assert_eq!(columns[0].class, ColumnClass::Time);
        assert_eq!(columns[2].class, ColumnClass::Measurement);
        assert_eq!(columns[3].class, ColumnClass::Tags);
        assert!(columns[0].class.is_numeric());
        assert!(!columns[1].class.is_numeric());
        assert_eq!(columns[2].key(), ColumnKey::new("temp", "engine"));
    }

    #[test]
    fn test_even_width_distribution() {
        let config = GridConfig::default();
        let s = schema(&["a", "b"], &["m"], &["c"]);
        let columns = build_columns(&s, 1010.0, &config);

        assert_eq!(columns.len(), s.column_count());
        assert_eq!(columns[0].width, config.time_column_width);
        // (1010 - 170 - 40) / 5
        for column in &columns[1..] {
            assert_eq!(column.width, 160.0);
        }
    }

    #[test]
    fn test_narrow_viewport_keeps_positive_widths() {
        let config = GridConfig::default();
        let s = schema(&["a"], &["b"], &["c"]);
        let columns = build_columns(&s, 100.0, &config);
        assert!(columns.iter().all(|c| c.width > 0.0));
        assert_eq!(columns[1].width, config.min_column_width);
    }

    #[test]
    fn test_empty_schema_has_time_and_tags() {
        let columns = build_columns(&PodSchema::default(), 1200.0, &GridConfig::default());
        assert_eq!(titles(&columns), vec![("time", ""), ("tags", "")]);
    }

    #[test]
    fn test_permuted_schema_permutes_columns() {
        let config = GridConfig::default();
        let a = build_columns(
            &schema(&["site", "rack.slot"], &["x.one", "y.two"], &["state.mode", "kind"]),
            1400.0,
            &config,
        );
        let b = build_columns(
            &schema(&["rack.slot", "site"], &["y.two", "x.one"], &["kind", "state.mode"]),
            1400.0,
            &config,
        );

        assert_eq!(a.len(), 8);
        assert_eq!(
            titles(&a),
            vec![
                ("time", ""),
                ("site", ""),
                ("slot", "rack"),
                ("one", "x"),
                ("two", "y"),
                ("mode", "state"),
                ("kind", ""),
                ("tags", "")
            ]
        );
        // each class swaps within its own segment only
        for (i, j) in [(1, 2), (3, 4), (5, 6)] {
            assert_eq!(a[i], b[j]);
            assert_eq!(a[j], b[i]);
        }
        assert_eq!(a[0], b[0]);
        assert_eq!(a[7], b[7]);
    }

    #[test]
    fn test_bad_time_width_keeps_all_widths_positive() {
        let s = schema(&["site"], &["engine.temp"], &[]);
        for time_column_width in [-10.0, 0.0, f64::NAN] {
            let config = GridConfig {
                time_column_width,
                ..GridConfig::default()
            };
            let columns = build_columns(&s, 1000.0, &config);
            assert!(
                columns.iter().all(|c| c.width.is_finite() && c.width > 0.0),
                "time width {}: {:?}",
                time_column_width,
                columns.iter().map(|c| c.width).collect::<Vec<_>>()
            );
        }
        let config = GridConfig {
            time_column_width: -10.0,
            ..GridConfig::default()
        };
        let columns = build_columns(&s, 1000.0, &config);
        assert_eq!(columns[0].width, config.min_column_width);
        // (1000 - 60 - 40) / 3
        assert_eq!(columns[1].width, 300.0);
    }

    #[test]
    fn test_build_is_idempotent() {
        let config = GridConfig::default();
        let s = schema(&["site", "rack.slot"], &["engine.temp", "rpm"], &["state.mode"]);
        assert_eq!(
            build_columns(&s, 1440.0, &config),
            build_columns(&s, 1440.0, &config)
        );
    }

    #[test]
    fn test_column_key_display() {
        assert_eq!(ColumnKey::new("temp", "engine").to_string(), "engine.temp");
        assert_eq!(ColumnKey::new("site", "").to_string(), "site");
    }
}
