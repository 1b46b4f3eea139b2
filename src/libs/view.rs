use super::messages::Message;
use super::report::Report;
use crate::msg_print;
use anyhow::Result;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    /// Prints the report as one table per page, framed by header and footer.
    pub fn report(report: &Report) -> Result<()> {
        msg_print!(Message::ReportTitle(report.header.subject.clone(), report.header.window_days), true);

        let pages = report.pages.len();
        for (index, page) in report.pages.iter().enumerate() {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
            table.set_titles(row![bc->Message::ReportPage(index + 1, pages)]);
            for section in &page.sections {
                table.add_row(row![b->section.title]);
                table.add_row(row![section.body]);
            }
            table.printstd();
        }

        msg_print!(Message::PeriodSummary(report.footer.total.clone()), true);

        Ok(())
    }

    /// Prints the report as pretty JSON.
    pub fn report_json(report: &Report) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(report)?);

        Ok(())
    }
}
