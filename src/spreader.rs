use crate::calendar::MonthResolver;
use crate::error::{Result, WrangleError};
use crate::schema::{CategoryTable, LongCategoryRow, RawRow};
use crate::utils::{parse_float_cell, round_half_up};
use log::debug;

/// Index of the first month column in a wide category table.
pub const FIRST_MONTH_COLUMN: usize = 2;

/// Pivots a category × month wide table into one row per (category, month).
///
/// The first input row is the header holding the month names from column 2
/// onward. The last input row holds totals and is skipped.
#[derive(Debug, Clone, Default)]
pub struct CategorySpreader {
    resolver: MonthResolver,
}

impl CategorySpreader {
    pub fn new(resolver: MonthResolver) -> Self {
        Self { resolver }
    }

    pub fn spread(
        &self,
        rows: &[RawRow],
        year: i32,
        category_label: &str,
    ) -> Result<CategoryTable> {
        let mut table = CategoryTable::with_label(category_label);

        let Some((header, rest)) = rows.split_first() else {
            return Ok(table);
        };
        let Some((_totals, data)) = rest.split_last() else {
            return Ok(table);
        };

        let month_columns = header.len().saturating_sub(FIRST_MONTH_COLUMN);
        table.rows.reserve(data.len() * month_columns);

        for (offset, row) in data.iter().enumerate() {
            // Source row index, counting the header as row 0.
            let row_idx = offset + 1;

            if row.len() != header.len() || row.len() < FIRST_MONTH_COLUMN {
                return Err(WrangleError::MalformedRow {
                    row: row_idx,
                    expected: header.len().max(FIRST_MONTH_COLUMN),
                    found: row.len(),
                });
            }

            let category = &row[0];
            let subcategory = &row[1];

            for (column, raw) in row.iter().enumerate().skip(FIRST_MONTH_COLUMN) {
                let period_end = self.resolver.last_date_string(&header[column], year)?;
                let value = parse_float_cell(raw).ok_or_else(|| WrangleError::InvalidAmount {
                    row: row_idx,
                    column,
                    value: raw.clone(),
                })?;

                table.rows.push(LongCategoryRow {
                    category: category.clone(),
                    subcategory: subcategory.clone(),
                    amount: round_half_up(value),
                    period_end,
                });
            }
        }

        debug!(
            "Spread {} data rows across {} month columns into {} rows",
            data.len(),
            month_columns,
            table.rows.len()
        );

        Ok(table)
    }
}

/// Spreads with the Icelandic month table.
pub fn spread(rows: &[RawRow], year: i32, category_label: &str) -> Result<CategoryTable> {
    CategorySpreader::default().spread(rows, year, category_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::ICELANDIC_MONTHS;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn full_year_header() -> RawRow {
        let mut header = row(&["", ""]);
        header.extend(ICELANDIC_MONTHS.iter().map(|m| m.to_string()));
        header
    }

    fn full_year_row(category: &str, subcategory: &str, value: &str) -> RawRow {
        let mut out = row(&[category, subcategory]);
        out.extend(std::iter::repeat(value.to_string()).take(12));
        out
    }

    #[test]
    fn test_two_month_scenario() {
        let rows = vec![
            row(&["", "", "Janúar", "Febrúar"]),
            row(&["Rekstur", "Laun", "100.4", "200.6"]),
            row(&["Samtals", "", "100.4", "200.6"]),
        ];

        let table = spread(&rows, 2013, "Yfirflokkur").unwrap();

        assert_eq!(
            table.header,
            vec!["Yfirflokkur", "Undirflokkur", "Upphæð", "Dagsetning"]
        );
        assert_eq!(
            table.rows,
            vec![
                LongCategoryRow {
                    category: "Rekstur".to_string(),
                    subcategory: "Laun".to_string(),
                    amount: 100,
                    period_end: "2013-01-31".to_string(),
                },
                LongCategoryRow {
                    category: "Rekstur".to_string(),
                    subcategory: "Laun".to_string(),
                    amount: 201,
                    period_end: "2013-02-28".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_output_count_is_rows_times_months() {
        let mut rows = vec![full_year_header()];
        for i in 0..5 {
            rows.push(full_year_row(&format!("Flokkur {}", i), "Undir", "1"));
        }
        rows.push(full_year_row("Samtals", "", "5"));

        let table = spread(&rows, 2016, "Yfirflokkur").unwrap();
        assert_eq!(table.rows.len(), 5 * 12);

        // Source row order first, then month column order.
        assert_eq!(table.rows[0].category, "Flokkur 0");
        assert_eq!(table.rows[0].period_end, "2016-01-31");
        assert_eq!(table.rows[1].period_end, "2016-02-29");
        assert_eq!(table.rows[11].period_end, "2016-12-31");
        assert_eq!(table.rows[12].category, "Flokkur 1");
        assert!(table.rows.iter().all(|r| r.category != "Samtals"));
    }

    #[test]
    fn test_rounding_boundaries() {
        let rows = vec![
            row(&["", "", "Janúar", "Febrúar", "Mars"]),
            row(&["A", "B", "41.5", "41.49", "-0.5"]),
            row(&["Samtals", "", "0", "0", "0"]),
        ];

        let amounts: Vec<i64> = spread(&rows, 2013, "Yfirflokkur")
            .unwrap()
            .rows
            .iter()
            .map(|r| r.amount)
            .collect();
        assert_eq!(amounts, vec![42, 41, 0]);
    }

    #[test]
    fn test_category_label_is_used_in_header_only() {
        let rows = vec![
            row(&["", "", "Maí"]),
            row(&["Tekjur", "Skattar", "7"]),
            row(&["Samtals", "", "7"]),
        ];

        let table = spread(&rows, 2013, "Tekjuflokkur").unwrap();
        assert_eq!(table.header[0], "Tekjuflokkur");
        assert_eq!(table.rows[0].category, "Tekjur");
        assert_eq!(table.rows[0].period_end, "2013-05-31");
    }

    #[test]
    fn test_short_row_is_malformed() {
        let rows = vec![
            row(&["", "", "Janúar", "Febrúar"]),
            row(&["Rekstur", "Laun", "100"]),
            row(&["Samtals", "", "100", "0"]),
        ];

        match spread(&rows, 2013, "Yfirflokkur") {
            Err(WrangleError::MalformedRow {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_long_row_is_malformed() {
        let rows = vec![
            row(&["", "", "Janúar"]),
            row(&["Rekstur", "Laun", "100", "200"]),
            row(&["Samtals", "", "300"]),
        ];

        assert!(matches!(
            spread(&rows, 2013, "Yfirflokkur"),
            Err(WrangleError::MalformedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_unknown_month_in_header() {
        let rows = vec![
            row(&["", "", "January"]),
            row(&["Rekstur", "Laun", "100"]),
            row(&["Samtals", "", "100"]),
        ];

        match spread(&rows, 2013, "Yfirflokkur") {
            Err(WrangleError::UnknownMonth { month }) => assert_eq!(month, "January"),
            other => panic!("expected UnknownMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_amount() {
        let rows = vec![
            row(&["", "", "Janúar", "Febrúar"]),
            row(&["Rekstur", "Laun", "100", "n/a"]),
            row(&["Samtals", "", "100", "0"]),
        ];

        match spread(&rows, 2013, "Yfirflokkur") {
            Err(WrangleError::InvalidAmount { row, column, value }) => {
                assert_eq!(row, 1);
                assert_eq!(column, 3);
                assert_eq!(value, "n/a");
            }
            other => panic!("expected InvalidAmount, got {:?}", other),
        }
    }

    #[test]
    fn test_header_and_totals_only() {
        let rows = vec![full_year_header(), full_year_row("Samtals", "", "0")];
        let table = spread(&rows, 2013, "Yfirflokkur").unwrap();
        assert_eq!(table.header.len(), 4);
        assert!(table.rows.is_empty());

        let table = spread(&[], 2013, "Yfirflokkur").unwrap();
        assert_eq!(table.header.len(), 4);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_precision_noise_is_absorbed() {
        let rows = vec![
            row(&["", "", "Júní"]),
            row(&["Rekstur", "Laun", "1234.0000000002"]),
            row(&["Samtals", "", "1234"]),
        ];

        let table = spread(&rows, 2013, "Yfirflokkur").unwrap();
        assert_eq!(table.rows[0].amount, 1234);
        assert_eq!(table.rows[0].period_end, "2013-06-30");
    }
}
