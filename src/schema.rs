
/// A row exactly as read from a CSV file, header included.
pub type RawRow = Vec<String>;

pub const SUBCATEGORY_LABEL: &str = "Undirflokkur";
pub const AMOUNT_LABEL: &str = "Upphæð";
pub const DATE_LABEL: &str = "Dagsetning";
pub const DEFAULT_CATEGORY_LABEL: &str = "Yfirflokkur";

pub const MINISTRY_ID_LABEL: &str = "Auðkenni ráðuneytis";
pub const REPORT_DATE_LABEL: &str = "Lokadagsetning ársfjórðungs";

/// Date stamped on a previous-period table. Its value never reaches the
/// output since only amounts are read from the previous period.
pub const PREVIOUS_PERIOD_PLACEHOLDER: &str = "don't care";

/// One output cell. Text is always quoted on write, integers never are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Integer(i64),
    Text(String),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Integer(value)
    }
}

/// Anything that can be laid out as rows of output cells.
pub trait ToCells {
    fn to_cells(&self) -> Vec<Vec<Cell>>;
}

fn text_row(labels: &[String]) -> Vec<Cell> {
    labels.iter().map(|label| Cell::from(label.as_str())).collect()
}

/// A single (category, subcategory, month) fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongCategoryRow {
    pub category: String,
    pub subcategory: String,
    pub amount: i64,
    /// Last day of the month as `YYYY-MM-DD`.
    pub period_end: String,
}

impl LongCategoryRow {
    pub fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.category.as_str()),
            Cell::from(self.subcategory.as_str()),
            Cell::Integer(self.amount),
            Cell::from(self.period_end.as_str()),
        ]
    }
}

/// Long-format output of the category spreader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    pub header: Vec<String>,
    pub rows: Vec<LongCategoryRow>,
}

impl CategoryTable {
    pub fn with_label(category_label: &str) -> Self {
        Self {
            header: vec![
                category_label.to_string(),
                SUBCATEGORY_LABEL.to_string(),
                AMOUNT_LABEL.to_string(),
                DATE_LABEL.to_string(),
            ],
            rows: Vec::new(),
        }
    }
}

impl ToCells for CategoryTable {
    fn to_cells(&self) -> Vec<Vec<Cell>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push(text_row(&self.header));
        out.extend(self.rows.iter().map(LongCategoryRow::to_cells));
        out
    }
}

/// Identity of a ministry line across reporting periods.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MinistryKey {
    pub ministry_name: String,
    pub agency: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuarterRow {
    /// First two characters of the composite ministry field.
    pub ministry_id: String,
    pub ministry_name: String,
    pub other: String,
    pub agency: String,
    pub amount: i64,
    pub report_date: String,
}

impl NormalizedQuarterRow {
    pub fn key(&self) -> MinistryKey {
        MinistryKey {
            ministry_name: self.ministry_name.clone(),
            agency: self.agency.clone(),
        }
    }

    pub fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.ministry_id.as_str()),
            Cell::from(self.ministry_name.as_str()),
            Cell::from(self.other.as_str()),
            Cell::from(self.agency.as_str()),
            Cell::Integer(self.amount),
            Cell::from(self.report_date.as_str()),
        ]
    }
}

/// Normalized quarterly table. `header` is `None` only for empty input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuarterTable {
    pub header: Option<Vec<String>>,
    pub rows: Vec<NormalizedQuarterRow>,
}

impl ToCells for QuarterTable {
    fn to_cells(&self) -> Vec<Vec<Cell>> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        if let Some(header) = &self.header {
            out.push(text_row(header));
        }
        out.extend(self.rows.iter().map(NormalizedQuarterRow::to_cells));
        out
    }
}
