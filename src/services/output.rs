use crate::domain::models::{CheckReport, JsonOut};
use crate::services::report::render_text;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// The `ok` field of the check envelope carries the gate verdict, so JSON
/// consumers don't have to dig into the report for it.
pub fn print_check(json: bool, report: &CheckReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.pass,
                data: report
            })?
        );
    } else {
        print!("{}", render_text(report));
    }
    Ok(())
}
