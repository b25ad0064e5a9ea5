use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

/// ANSI color per operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "partition_add" => Colour::Green,
        "del" | "partition_del" => Colour::Red,
        "edit" | "partition_edit" => Colour::Yellow,
        "done" | "undone" => Colour::Cyan,
        "backup" | "export" => Colour::Blue,
        "load_error" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, _cfg: &Config) -> AppResult<()> {
        let entries = queries::load_log(pool)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let mut rows = Vec::new();
        for (id, raw_date, operation, target, message) in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // single op+target column, op part colored
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{} ({})", operation, target)
            };

            let colored = {
                let color = color_for_operation(&operation);
                match op_target.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(op_target.as_str()).to_string(),
                }
            };

            rows.push((id, date, colored, message));
        }

        let id_w = rows.iter().map(|(id, ..)| id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|(_, date, ..)| date.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).len())
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, op, message) in rows {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
