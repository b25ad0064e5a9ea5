use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Print store information: file size, collection sizes, nearest deadline.
pub fn print_store_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COLLECTION SIZES
    //
    let state = queries::load_state(pool)?;
    let open = state.events().iter().filter(|e| !e.completed).count();
    let done = state.events().len() - open;

    println!(
        "{}• Events:{} {}{}{} ({} open, {} completed)",
        CYAN,
        RESET,
        GREEN,
        state.events().len(),
        RESET,
        open,
        done
    );
    println!(
        "{}• Partitions:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        state.partitions().len(),
        RESET
    );

    //
    // 3) NEAREST DEADLINE
    //
    let next = state
        .events()
        .iter()
        .filter(|e| !e.completed)
        .min_by_key(|e| e.deadline);

    match next {
        Some(ev) => println!(
            "{}• Next deadline:{} {} ({})",
            CYAN,
            RESET,
            ev.deadline.format("%Y-%m-%d %H:%M"),
            ev.title
        ),
        None => println!("{}• Next deadline:{} {}--{}", CYAN, RESET, GREY, RESET),
    }

    //
    // 4) LOG ROWS
    //
    let log_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
