use crate::priority::Priority;
use crate::store::Assignment;
use serde::Serialize;

pub const APP_TITLE: &str = "Trakr";
pub const GRID_COLUMNS: usize = 3;
pub const SWATCH_PLACEHOLDER: &str = "---";
pub const EMPTY_PLACEHOLDER: &str = "No assignments available yet, add one now!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    #[default]
    Grid,
    List,
}

impl Layout {
    pub fn parse(s: &str) -> Option<Layout> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Some(Layout::Grid),
            "list" => Some(Layout::List),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority_color: Option<String>,
    pub swatch_label: &'static str,
    pub completed: bool,
    pub can_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentsView {
    pub title: &'static str,
    pub layout: Layout,
    pub total: usize,
    pub empty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    /// Grid: rows of at most three cards. List: one card per row.
    pub rows: Vec<Vec<Card>>,
}

fn card(a: Assignment) -> Card {
    if let Some(color) = a.priority_color.as_deref() {
        if Priority::from_color(color).is_none() {
            tracing::debug!(id = a.id, color, "assignment has an unrecognised priority color");
        }
    }
    Card {
        id: a.id,
        can_complete: !a.completed,
        completed: a.completed,
        title: a.title,
        description: a.description,
        due_date: a.due_date,
        priority_color: a.priority_color,
        swatch_label: SWATCH_PLACEHOLDER,
    }
}

/// Expects `assignments` already ordered by due date.
pub fn render(assignments: Vec<Assignment>, layout: Layout) -> AssignmentsView {
    let total = assignments.len();
    if total == 0 {
        return AssignmentsView {
            title: APP_TITLE,
            layout,
            total,
            empty: true,
            placeholder: Some(EMPTY_PLACEHOLDER),
            rows: Vec::new(),
        };
    }

    let per_row = match layout {
        Layout::Grid => GRID_COLUMNS,
        Layout::List => 1,
    };
    let mut rows: Vec<Vec<Card>> = Vec::with_capacity(total.div_ceil(per_row));
    let mut current: Vec<Card> = Vec::with_capacity(per_row);
    for a in assignments {
        current.push(card(a));
        if current.len() == per_row {
            rows.push(std::mem::replace(&mut current, Vec::with_capacity(per_row)));
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }

    AssignmentsView {
        title: APP_TITLE,
        layout,
        total,
        empty: false,
        placeholder: None,
        rows,
    }
}
