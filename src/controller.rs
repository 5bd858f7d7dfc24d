use crate::priority::Priority;
use crate::store::{self, NewAssignment};
use crate::view::{self, AssignmentsView, Layout};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

pub const ACK_ADDED: &str = "Assignment added successfully!";
pub const ACK_COMPLETED: &str = "Assignment marked as completed!";
pub const ACK_CLEARED: &str = "All assignments have been cleared.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddForm {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl AddForm {
    /// The add action is only attempted with a title and a due date.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && self.due_date.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(AddForm),
    Complete(i64),
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Applied,
    /// Add form incomplete; nothing was written.
    Skipped,
    /// Complete targeted an id that is not in the store.
    NotFound,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ack: Option<&'static str>,
    pub view: AssignmentsView,
}

pub fn show(conn: &Connection, layout: Layout) -> anyhow::Result<AssignmentsView> {
    let rows = store::list_assignments(conn)?;
    Ok(view::render(rows, layout))
}

// Applies one intent with at most one store call, then re-fetches and renders.
// Write failures come back as `Status::Failed`; only the re-fetch can fail the call.
pub fn dispatch(conn: &Connection, intent: Intent, layout: Layout) -> anyhow::Result<Outcome> {
    let ack_on_success = match &intent {
        Intent::Add(_) => ACK_ADDED,
        Intent::Complete(_) => ACK_COMPLETED,
        Intent::Clear => ACK_CLEARED,
    };
    let (status, id) = apply(conn, intent);
    let ack = (status == Status::Applied).then_some(ack_on_success);
    Ok(Outcome {
        status,
        id,
        ack,
        view: show(conn, layout)?,
    })
}

fn apply(conn: &Connection, intent: Intent) -> (Status, Option<i64>) {
    match intent {
        Intent::Add(form) => {
            let Some(due_date) = form.due_date.filter(|_| form.is_submittable()) else {
                return (Status::Skipped, None);
            };
            let new = NewAssignment {
                title: &form.title,
                description: &form.description,
                due_date,
                priority_color: form.priority.color(),
                completed: false,
            };
            match store::insert_assignment(conn, &new) {
                Ok(id) => {
                    tracing::info!(id, due = %due_date, "assignment added");
                    (Status::Applied, Some(id))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "insert failed; assignment not stored");
                    (Status::Failed, None)
                }
            }
        }
        Intent::Complete(id) => match store::mark_completed(conn, id) {
            Ok(true) => {
                tracing::info!(id, "assignment marked completed");
                (Status::Applied, None)
            }
            Ok(false) => {
                tracing::debug!(id, "complete requested for unknown assignment");
                (Status::NotFound, None)
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "mark completed failed");
                (Status::Failed, None)
            }
        },
        Intent::Clear => match store::clear_assignments(conn) {
            Ok(removed) => {
                tracing::info!(removed, "assignments cleared");
                (Status::Applied, None)
            }
            Err(e) => {
                tracing::warn!(error = %e, "clear failed");
                (Status::Failed, None)
            }
        },
    }
}
