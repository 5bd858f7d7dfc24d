use chrono::NaiveDate;
use rusqlite::Connection;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Stored as `YYYY-MM-DD`, which keeps text ordering equal to date ordering.
    pub due_date: String,
    pub priority_color: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub due_date: NaiveDate,
    pub priority_color: &'a str,
    pub completed: bool,
}

pub fn insert_assignment(conn: &Connection, a: &NewAssignment<'_>) -> anyhow::Result<i64> {
    let due = a.due_date.format(DATE_FORMAT).to_string();
    conn.execute(
        "INSERT INTO assignments(title, description, due_date, priority_level, completed)
         VALUES(?, ?, ?, ?, ?)",
        (a.title, a.description, &due, a.priority_color, a.completed as i64),
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_assignments(conn: &Connection) -> anyhow::Result<Vec<Assignment>> {
    let mut stmt = conn.prepare(
        "SELECT id,
                CAST(title AS TEXT),
                CAST(description AS TEXT),
                CAST(due_date AS TEXT),
                CAST(priority_level AS TEXT),
                CAST(completed AS INTEGER)
         FROM assignments
         ORDER BY due_date ASC, id ASC",
    )?;
    let rows = stmt
        .query_map([], |row| {
            // Rows from older stores may carry NULLs or non-text values in any non-key column.
            let title: Option<String> = row.get(1)?;
            let description: Option<String> = row.get(2)?;
            let due_date: Option<String> = row.get(3)?;
            let completed: Option<i64> = row.get(5)?;
            Ok(Assignment {
                id: row.get(0)?,
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
                due_date: due_date.unwrap_or_default(),
                priority_color: row.get(4)?,
                completed: completed.unwrap_or(0) != 0,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Returns whether a row with `id` exists. Completing twice is not an error.
pub fn mark_completed(conn: &Connection, id: i64) -> anyhow::Result<bool> {
    let changed = conn.execute("UPDATE assignments SET completed = 1 WHERE id = ?", [id])?;
    Ok(changed > 0)
}

pub fn clear_assignments(conn: &Connection) -> anyhow::Result<usize> {
    let removed = conn.execute("DELETE FROM assignments", [])?;
    Ok(removed)
}

pub fn count_assignments(conn: &Connection) -> anyhow::Result<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM assignments", [], |r| r.get(0))?;
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn mem_db() -> Connection {
        let conn = Connection::open_in_memory().expect("open");
        db::init_schema(&conn).expect("schema");
        conn
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).expect("date")
    }

    fn add(conn: &Connection, title: &str, due: &str, color: &str) -> i64 {
        insert_assignment(
            conn,
            &NewAssignment {
                title,
                description: "",
                due_date: date(due),
                priority_color: color,
                completed: false,
            },
        )
        .expect("insert")
    }

    #[test]
    fn insert_then_list_returns_row_uncompleted() {
        let conn = mem_db();
        let id = insert_assignment(
            &conn,
            &NewAssignment {
                title: "Essay",
                description: "Write 500 words",
                due_date: date("2024-05-01"),
                priority_color: "#FF0000",
                completed: false,
            },
        )
        .expect("insert");

        let rows = list_assignments(&conn).expect("list");
        assert_eq!(
            rows,
            vec![Assignment {
                id,
                title: "Essay".into(),
                description: "Write 500 words".into(),
                due_date: "2024-05-01".into(),
                priority_color: Some("#FF0000".into()),
                completed: false,
            }]
        );
    }

    #[test]
    fn list_orders_by_due_date_then_insertion() {
        let conn = mem_db();
        let a = add(&conn, "A", "2024-06-01", "#FF0000");
        let b = add(&conn, "B", "2024-04-01", "#008000");
        let c = add(&conn, "C", "2024-06-01", "#FFA500");
        let d = add(&conn, "D", "2023-12-31", "#FF0000");

        let ids: Vec<i64> = list_assignments(&conn)
            .expect("list")
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![d, b, a, c]);
    }

    #[test]
    fn mark_completed_is_idempotent_and_ignores_missing_ids() {
        let conn = mem_db();
        let id = add(&conn, "Quiz", "2024-04-20", "#008000");

        assert!(mark_completed(&conn, id).expect("first"));
        assert!(mark_completed(&conn, id).expect("second"));
        assert!(list_assignments(&conn).expect("list")[0].completed);

        let before = list_assignments(&conn).expect("list");
        assert!(!mark_completed(&conn, id + 100).expect("missing"));
        assert_eq!(list_assignments(&conn).expect("list"), before);
    }

    #[test]
    fn clear_empties_the_table() {
        let conn = mem_db();
        add(&conn, "A", "2024-06-01", "#FF0000");
        add(&conn, "B", "2024-06-02", "#FF0000");
        assert_eq!(clear_assignments(&conn).expect("clear"), 2);
        assert!(list_assignments(&conn).expect("list").is_empty());
        assert_eq!(clear_assignments(&conn).expect("clear empty"), 0);
        assert_eq!(count_assignments(&conn).expect("count"), 0);
    }

    #[test]
    fn legacy_rows_with_nulls_are_readable() {
        let conn = mem_db();
        conn.execute(
            "INSERT INTO assignments(title, due_date) VALUES('Old', '2022-01-01')",
            [],
        )
        .expect("raw insert");
        let rows = list_assignments(&conn).expect("list");
        assert_eq!(rows[0].description, "");
        assert_eq!(rows[0].priority_color, None);
        assert!(!rows[0].completed);
    }

    #[test]
    fn legacy_rows_with_numeric_columns_still_list() {
        let conn = mem_db();
        add(&conn, "Essay", "2024-05-01", "#FF0000");
        conn.execute(
            "INSERT INTO assignments(title, description, due_date, priority_level, completed)
             VALUES(42, 1.5, 20240101, 7, '1')",
            [],
        )
        .expect("raw insert");

        let rows = list_assignments(&conn).expect("list");
        assert_eq!(rows.len(), 2);
        let odd = rows.iter().find(|r| r.title == "42").expect("numeric title row");
        assert_eq!(odd.description, "1.5");
        assert_eq!(odd.due_date, "20240101");
        assert_eq!(odd.priority_color.as_deref(), Some("7"));
        assert!(odd.completed);
    }
}
