use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "assignments.db";

pub fn open_db(workspace: &Path) -> anyhow::Result<Connection> {
    std::fs::create_dir_all(workspace)?;
    let db_path = workspace.join(DB_FILE_NAME);
    let conn = Connection::open(db_path)?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Creates the assignments table and brings older layouts up to date.
/// Safe to call any number of times on the same connection.
pub fn init_schema(conn: &Connection) -> anyhow::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS assignments(
            id INTEGER PRIMARY KEY,
            title TEXT,
            description TEXT,
            due_date DATE,
            priority_level TEXT
        )",
        [],
    )?;

    // Earlier stores were created before the priority and completion columns existed.
    ensure_assignments_priority_level(conn)?;
    ensure_assignments_completed(conn)?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_assignments_due ON assignments(due_date, id)",
        [],
    )?;
    Ok(())
}

fn ensure_assignments_priority_level(conn: &Connection) -> anyhow::Result<()> {
    if table_has_column(conn, "assignments", "priority_level")? {
        return Ok(());
    }
    tracing::info!("adding assignments.priority_level column");
    conn.execute("ALTER TABLE assignments ADD COLUMN priority_level TEXT", [])?;
    Ok(())
}

fn ensure_assignments_completed(conn: &Connection) -> anyhow::Result<()> {
    if table_has_column(conn, "assignments", "completed")? {
        return Ok(());
    }
    tracing::info!("adding assignments.completed column");
    conn.execute(
        "ALTER TABLE assignments ADD COLUMN completed INTEGER DEFAULT 0",
        [],
    )?;
    Ok(())
}

pub fn table_has_column(conn: &Connection, table: &str, column: &str) -> anyhow::Result<bool> {
    let sql = format!("PRAGMA table_info({})", table);
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
