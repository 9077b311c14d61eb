//! Report rows, the length weighted mean speed and plain text tables.

use std::fmt;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::element::Element;

pub const HEADER: [&str; 9] = [
    "Id",
    "Type",
    "Length",
    "Radius",
    "Vp",
    "MinLength",
    "AMin",
    "AMax",
    "Errors",
];

/// Length weighted mean design speed of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeanVp {
    Defined(f64),
    /// The alignment has no length.
    Undefined,
}

impl MeanVp {
    pub fn value(self) -> Option<f64> {
        match self {
            MeanVp::Defined(v) => Some(v),
            MeanVp::Undefined => None,
        }
    }
}

impl fmt::Display for MeanVp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeanVp::Defined(v) => write!(f, "{v:.2} km/h"),
            MeanVp::Undefined => f.write_str("undefined"),
        }
    }
}

/// `Σ(length · vp) / Σ(length)` over all elements.
pub fn mean_vp(elements: &[Element]) -> MeanVp {
    let (total_length, weighted) = elements.iter().fold((0.0, 0.0), |(len, sum), e| {
        (len + e.length, sum + e.length * f64::from(e.vp))
    });
    if total_length == 0.0 {
        warn!("alignment has zero total length, mean vp is undefined");
        return MeanVp::Undefined;
    }
    MeanVp::Defined(weighted / total_length)
}

/// Which elements end up in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowFilter {
    All,
    /// Only elements with at least one finding.
    #[default]
    Flagged,
}

impl RowFilter {
    fn accepts(self, element: &Element) -> bool {
        match self {
            RowFilter::All => true,
            RowFilter::Flagged => !element.errors.is_empty(),
        }
    }
}

/// One reported element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub length: f64,
    pub radius: f64,
    pub vp: u32,
    pub min_length: f64,
    pub a_min: f64,
    pub a_max: f64,
    pub errors: Vec<String>,
}

impl ReportRow {
    pub fn from_element(e: &Element) -> Self {
        Self {
            id: e.id,
            kind: e.kind.name().to_string(),
            length: e.length,
            radius: e.radius,
            vp: e.vp,
            min_length: e.min_length,
            a_min: e.a_min,
            a_max: e.a_max,
            errors: e.errors.names().into_iter().map(String::from).collect(),
        }
    }

    /// Cells as shown in the text table and the CSV export.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kind.clone(),
            format!("{:.2}", self.length),
            format!("{:.2}", self.radius),
            self.vp.to_string(),
            format!("{:.2}", self.min_length),
            format!("{:.2}", self.a_min),
            format!("{:.2}", self.a_max),
            self.errors.join(", "),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    /// Mean over the whole alignment, independent of the row filter.
    pub mean_vp: MeanVp,
}

impl Report {
    pub fn new(elements: &[Element], filter: RowFilter) -> Self {
        Self {
            rows: elements
                .iter()
                .filter(|e| filter.accepts(e))
                .map(ReportRow::from_element)
                .collect(),
            mean_vp: mean_vp(elements),
        }
    }

    /// Header followed by one line of cells per row.
    pub fn table(&self) -> Vec<Vec<String>> {
        let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
        std::iter::once(header)
            .chain(self.rows.iter().map(ReportRow::cells))
            .collect()
    }

    pub fn mean_line(&self) -> String {
        format!("mean vp: {}", self.mean_vp)
    }
}

/// Renders a table with a boxed border, the first line being the header.
pub fn render_table(table: &[Vec<String>]) -> String {
    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for line in table {
        for (w, cell) in widths.iter_mut().zip(line) {
            *w = (*w).max(cell.chars().count());
        }
    }
    let rule: String = widths
        .iter()
        .map(|w| format!("+{}", "-".repeat(w + 2)))
        .collect::<String>()
        + "+\n";

    let mut out = rule.clone();
    for (i, line) in table.iter().enumerate() {
        for (c, &w) in widths.iter().enumerate() {
            let cell = line.get(c).map_or("", String::as_str);
            out.push_str(&format!("| {cell:<w$} "));
        }
        out.push_str("|\n");
        if i == 0 {
            out.push_str(&rule);
        }
    }
    if table.len() > 1 {
        out.push_str(&rule);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ErrorFlags;

    #[test]
    fn mean_vp_weights_by_length() {
        let mut a = Element::straight(0, 100.0);
        a.vp = 50;
        let mut b = Element::straight(1, 200.0);
        b.vp = 80;
        let mean = mean_vp(&[a, b]).value().unwrap();
        assert!((mean - 70.0).abs() < 1e-9);
    }

    #[test]
    fn zero_length_mean_is_undefined() {
        let mut a = Element::straight(0, 0.0);
        a.vp = 50;
        assert_eq!(mean_vp(&[a]), MeanVp::Undefined);
        assert_eq!(mean_vp(&[]), MeanVp::Undefined);
        assert_eq!(MeanVp::Undefined.to_string(), "undefined");
    }

    #[test]
    fn flagged_filter_drops_clean_rows() {
        let clean = Element::straight(0, 10.0);
        let mut bad = Element::arc(1, 5.0, -250.0);
        bad.errors.insert(ErrorFlags::BELOW_MIN_LENGTH);
        let elements = [clean, bad];
        assert_eq!(Report::new(&elements, RowFilter::All).rows.len(), 2);
        let flagged = Report::new(&elements, RowFilter::Flagged);
        assert_eq!(flagged.rows.len(), 1);
        assert_eq!(
            flagged.table()[1],
            vec!["1", "Radius", "5.00", "-250.00", "0", "0.00", "0.00", "0.00", "MinLength"]
        );
    }

    #[test]
    fn rendered_table_is_aligned() {
        let table = vec![
            vec!["Id".to_string(), "Type".to_string()],
            vec!["12".to_string(), "Clothoid".to_string()],
        ];
        let text = render_table(&table);
        let expected = "\
+----+----------+
| Id | Type     |
+----+----------+
| 12 | Clothoid |
+----+----------+
";
        assert_eq!(text, expected);
    }

    #[test]
    fn header_only_table_has_two_rules() {
        let table = vec![HEADER.iter().map(|h| h.to_string()).collect::<Vec<_>>()];
        let text = render_table(&table);
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("| Id | Type | Length |"));
    }

    #[test]
    fn mean_vp_serializes_as_number_or_null() {
        assert_eq!(serde_json::to_string(&MeanVp::Defined(70.0)).unwrap(), "70.0");
        assert_eq!(serde_json::to_string(&MeanVp::Undefined).unwrap(), "null");
    }
}
