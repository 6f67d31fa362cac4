//!
//! XLSX worksheet for comparison data.
//!

use crate::comparison::ratio::Ratio;
use crate::comparison::row::Row;

///
/// XLSX worksheet for comparison data.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The number of data rows written.
    pub rows: u32,
}

impl Worksheet {
    /// The benchmark name column.
    const NAME_COLUMN: u16 = 0;
    /// The baseline column.
    const BASELINE_COLUMN: u16 = 1;
    /// The current column.
    const CURRENT_COLUMN: u16 = 2;
    /// The speedup column.
    const SPEEDUP_COLUMN: u16 = 3;
    /// The percent change column.
    const PERCENT_COLUMN: u16 = 4;

    ///
    /// Creates a new worksheet with a frozen header row of `(name, width)` columns.
    ///
    pub fn new(name: &str, headers: &[(&str, u16)]) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;

        let header_format = Self::column_header_format();
        for (column_index, (header_name, column_width)) in (0u16..).zip(headers.iter()) {
            worksheet.write_with_format(0, column_index, *header_name, &header_format)?;
            worksheet.set_column_width(column_index, *column_width)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(Self { worksheet, rows: 0 })
    }

    ///
    /// Appends a compared benchmark.
    ///
    pub fn write_benchmark(&mut self, row: &Row) -> anyhow::Result<()> {
        let row_index = self.next_row(row.name.as_str())?;
        let value_format = Self::value_format();
        self.worksheet.write_with_format(
            row_index,
            Self::BASELINE_COLUMN,
            row.baseline,
            &value_format,
        )?;
        self.worksheet.write_with_format(
            row_index,
            Self::CURRENT_COLUMN,
            row.current,
            &value_format,
        )?;
        self.write_ratio(row_index, Self::SPEEDUP_COLUMN, row.speedup, value_format)?;
        self.write_ratio(
            row_index,
            Self::PERCENT_COLUMN,
            row.percent_change,
            Self::signed_percent_format(),
        )?;
        Ok(())
    }

    ///
    /// Appends the summary row with the average speedup and the time saved at it.
    ///
    pub fn write_average(
        &mut self,
        caption: &str,
        speedup: f64,
        percent_change: f64,
    ) -> anyhow::Result<()> {
        let row_index = self.next_row(caption)?;
        self.worksheet.write_with_format(
            row_index,
            Self::SPEEDUP_COLUMN,
            speedup,
            &Self::value_format(),
        )?;
        self.worksheet.write_with_format(
            row_index,
            Self::PERCENT_COLUMN,
            percent_change,
            &Self::percent_format(),
        )?;
        Ok(())
    }

    ///
    /// Starts a new row with its name cell and returns its index.
    ///
    fn next_row(&mut self, name: &str) -> anyhow::Result<u32> {
        self.rows += 1;
        self.worksheet.write_with_format(
            self.rows,
            Self::NAME_COLUMN,
            name,
            &Self::row_header_format(),
        )?;
        Ok(self.rows)
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Writes a ratio, using the textual marker for unbounded values.
    ///
    fn write_ratio(
        &mut self,
        row_index: u32,
        column_index: u16,
        ratio: Ratio,
        format: rust_xlsxwriter::Format,
    ) -> anyhow::Result<()> {
        match ratio {
            Ratio::Finite(value) => {
                self.worksheet
                    .write_with_format(row_index, column_index, value, &format)?;
            }
            Ratio::Infinite => {
                self.worksheet.write_with_format(
                    row_index,
                    column_index,
                    Ratio::INFINITE_MARKER,
                    &Self::value_format(),
                )?;
            }
        }
        Ok(())
    }

    ///
    /// The font shared by all cells.
    ///
    fn base_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(11)
            .set_font_color("#202124")
    }

    ///
    /// The header row format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        Self::base_format()
            .set_bold()
            .set_background_color("#E8EAED")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_border_bottom(rust_xlsxwriter::FormatBorder::Thin)
    }

    ///
    /// The benchmark name column format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        Self::base_format().set_align(rust_xlsxwriter::FormatAlign::Left)
    }

    ///
    /// The measurement and speedup format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        Self::base_format()
            .set_align(rust_xlsxwriter::FormatAlign::Right)
            .set_num_format("0.000")
    }

    ///
    /// The percent format.
    ///
    fn percent_format() -> rust_xlsxwriter::Format {
        Self::value_format().set_num_format("0.00")
    }

    ///
    /// The per-benchmark percent change format, with an explicit sign.
    ///
    fn signed_percent_format() -> rust_xlsxwriter::Format {
        Self::value_format().set_num_format("+0.00;-0.00;0.00")
    }
}
