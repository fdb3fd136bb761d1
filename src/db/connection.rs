use rusqlite::{Connection, Result};

/// Opens the database and creates both transaction tables if needed.
///
/// The connection is acquired once at startup and held for the process
/// lifetime; every CRUD call is its own implicit unit of work.
pub fn establish_connection(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    create_tables(&conn)?;
    tracing::info!(db_path, "database connection established");
    Ok(conn)
}

fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS income (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            amount TEXT NOT NULL,
            source TEXT NOT NULL,
            date TEXT NOT NULL
        )",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            amount TEXT NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

#[cfg(test)]
pub fn establish_test_connection() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(conn)
}
