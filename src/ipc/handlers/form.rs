use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};
use crate::priority::Priority;
use crate::store::DATE_FORMAT;
use crate::view::APP_TITLE;
use chrono::Local;
use serde_json::json;

fn handle_form_get(_state: &mut AppState, req: &Request) -> serde_json::Value {
    let today = Local::now().date_naive().format(DATE_FORMAT).to_string();
    let options: Vec<serde_json::Value> = Priority::ALL
        .into_iter()
        .map(|p| json!({ "label": p.label(), "color": p.color() }))
        .collect();

    ok(
        &req.id,
        json!({
            "title": APP_TITLE,
            "header": "Add Assignment",
            "fields": [
                { "name": "title", "label": "Title", "kind": "text", "required": true },
                { "name": "description", "label": "Description", "kind": "textarea", "required": false },
                { "name": "dueDate", "label": "Due Date", "kind": "date", "required": true, "default": today },
                {
                    "name": "priority",
                    "label": "Select Priority Color",
                    "kind": "select",
                    "required": true,
                    "default": Priority::default().label(),
                    "options": options,
                },
            ],
            "actions": [
                { "method": "assignments.add", "label": "Add" },
                { "method": "assignments.clear", "label": "Clear Assignments" },
                { "method": "assignments.complete", "label": "Mark as Completed", "perRow": true },
            ],
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "form.get" => Some(handle_form_get(state, req)),
        _ => None,
    }
}
