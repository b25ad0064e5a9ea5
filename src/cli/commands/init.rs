use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_store;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite event store with its empty collections
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1. Prepare configuration
    //
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        cfg.database.clone()
    };

    println!("⚙️  Initializing rDeadliner…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Event store : {}", &db_path);

    //
    // 2. Open store
    //
    let conn = Connection::open(&db_path)?;

    //
    // 3. Create schema + seed empty collections
    //
    init_store(&conn)?;

    println!("✅ Event store initialized at {}", &db_path);

    //
    // 4. Internal log (non-blocking)
    //
    if let Err(e) = log::ttlog(
        &conn,
        "init",
        "Event store initialized",
        &format!("Event store initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rDeadliner initialization completed!");
    Ok(())
}
