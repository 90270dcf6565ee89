//! `prontuario list`: administrative listing of one record kind.

use clap::ValueEnum as _;
use serde_json::{Map, Value};

use prontuario_core::application::{ListTable, ListingService};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let format = resolve_format(args.format, output.format(), &config.output.format)?;

    let service = ListingService::new(super::open_store(config)?);
    let table = service.table(args.kind)?;

    match format {
        ListFormat::Table => {
            if table.is_empty() {
                output.info(&format!("No {} stored", table.kind.plural()))?;
                return Ok(());
            }
            let mut lines = render_table(&table).into_iter();
            if let Some(head) = lines.next() {
                output.header(&head)?;
            }
            for line in lines {
                output.data(&line)?;
            }
        }
        ListFormat::List => {
            for row in &table.rows {
                let name = row.cells.first().map(String::as_str).unwrap_or_default();
                output.data(&format!("{}\t{name}", row.id))?;
            }
        }
        ListFormat::Json => output.json(&to_json(&table))?,
        ListFormat::Csv => {
            for line in render_csv(&table) {
                output.data(&line)?;
            }
        }
    }

    Ok(())
}

/// `--format` wins, then `--output-format json`, then `output.format`.
fn resolve_format(
    flag: Option<ListFormat>,
    global: OutputFormat,
    configured: &str,
) -> CliResult<ListFormat> {
    if let Some(format) = flag {
        return Ok(format);
    }
    if global == OutputFormat::Json {
        return Ok(ListFormat::Json);
    }
    ListFormat::from_str(configured, true).map_err(|reason| CliError::ConfigError {
        message: format!("output.format '{configured}' is not a list format: {reason}"),
        source: None,
    })
}

fn render_table(table: &ListTable) -> Vec<String> {
    let mut widths: Vec<usize> = std::iter::once("id")
        .chain(table.columns.iter().copied())
        .map(|c| c.chars().count())
        .collect();

    for row in &table.rows {
        widths[0] = widths[0].max(row.id.to_string().chars().count());
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(line(
        std::iter::once("id")
            .chain(table.columns.iter().copied())
            .map(str::to_uppercase)
            .collect(),
    ));
    for row in &table.rows {
        lines.push(line(
            std::iter::once(row.id.to_string())
                .chain(row.cells.iter().cloned())
                .collect(),
        ));
    }
    lines
}

fn render_csv(table: &ListTable) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(
        std::iter::once("id")
            .chain(table.columns.iter().copied())
            .map(csv_field)
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in &table.rows {
        lines.push(
            std::iter::once(row.id.to_string())
                .chain(row.cells.iter().cloned())
                .map(|c| csv_field(&c))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn to_json(table: &ListTable) -> Value {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            object.insert("id".into(), Value::from(row.id.get()));
            for (column, cell) in table.columns.iter().zip(&row.cells) {
                object.insert((*column).to_string(), Value::from(cell.as_str()));
            }
            Value::Object(object)
        })
        .collect();
    Value::Array(rows)
}

#[cfg(test)]
mod tests {
    use prontuario_core::{
        application::ListRow,
        domain::{RecordId, RecordKind},
    };

    use super::*;

    fn doctors() -> ListTable {
        ListTable {
            kind: RecordKind::Doctor,
            columns: &["name", "crm", "status"],
            rows: vec![
                ListRow {
                    id: RecordId::new(2),
                    cells: vec!["Helena Prado".into(), "123456SP".into(), "active".into()],
                },
                ListRow {
                    id: RecordId::new(10),
                    cells: vec!["Silva, Ana".into(), "654321MG".into(), "inactive".into()],
                },
            ],
        }
    }

    #[test]
    fn flag_beats_global_and_config() {
        assert_eq!(
            resolve_format(Some(ListFormat::Csv), OutputFormat::Json, "table").unwrap(),
            ListFormat::Csv
        );
        assert_eq!(
            resolve_format(None, OutputFormat::Json, "table").unwrap(),
            ListFormat::Json
        );
        assert_eq!(
            resolve_format(None, OutputFormat::Plain, "list").unwrap(),
            ListFormat::List
        );
        assert!(resolve_format(None, OutputFormat::Plain, "yaml").is_err());
    }

    #[test]
    fn table_columns_are_aligned() {
        let lines = render_table(&doctors());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID  NAME          CRM       STATUS");
        assert_eq!(lines[1], "2   Helena Prado  123456SP  active");
        assert_eq!(lines[2], "10  Silva, Ana    654321MG  inactive");
    }

    #[test]
    fn csv_quotes_commas() {
        let lines = render_csv(&doctors());
        assert_eq!(lines[0], "id,name,crm,status");
        assert_eq!(lines[2], "10,\"Silva, Ana\",654321MG,inactive");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn json_rows_are_keyed_by_column() {
        let value = to_json(&doctors());
        assert_eq!(value[0]["id"], 2);
        assert_eq!(value[1]["name"], "Silva, Ana");
        assert_eq!(value[1]["status"], "inactive");
    }
}
