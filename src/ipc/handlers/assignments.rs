use crate::controller::{self, AddForm, Intent};
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::priority::Priority;
use crate::store::DATE_FORMAT;
use crate::view::{self, Layout};
use chrono::NaiveDate;
use serde_json::json;

fn parse_layout(params: &serde_json::Value) -> Result<Layout, String> {
    match params.get("layout") {
        None | Some(serde_json::Value::Null) => Ok(Layout::default()),
        Some(v) => v
            .as_str()
            .and_then(Layout::parse)
            .ok_or_else(|| format!("layout must be \"grid\" or \"list\", got {v}")),
    }
}

fn opt_str<'a>(params: &'a serde_json::Value, key: &str) -> Result<Option<&'a str>, String> {
    match params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(format!("{key} must be a string")),
    }
}

fn parse_add_form(params: &serde_json::Value) -> Result<AddForm, String> {
    let title = opt_str(params, "title")?.unwrap_or("").to_string();
    let description = opt_str(params, "description")?.unwrap_or("").to_string();

    // A blank date is an unfilled picker, not a malformed one.
    let due_date = match opt_str(params, "dueDate")?.map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(
            NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map_err(|e| format!("dueDate must be YYYY-MM-DD: {e}"))?,
        ),
    };

    let priority = match opt_str(params, "priority")? {
        None => Priority::default(),
        Some(label) => Priority::from_label(label)
            .ok_or_else(|| format!("unknown priority: {label}"))?,
    };

    Ok(AddForm {
        title,
        description,
        due_date,
        priority,
    })
}

fn handle_assignments_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let layout = match parse_layout(&req.params) {
        Ok(v) => v,
        Err(m) => return err(&req.id, "bad_params", m, None),
    };
    let Some(conn) = state.db.as_ref() else {
        return ok(&req.id, json!({ "view": view::render(Vec::new(), layout) }));
    };

    match controller::show(conn, layout) {
        Ok(v) => ok(&req.id, json!({ "view": v })),
        Err(e) => err(&req.id, "db_query_failed", e.to_string(), None),
    }
}

fn run_intent(state: &mut AppState, req: &Request, intent: Intent) -> serde_json::Value {
    let layout = match parse_layout(&req.params) {
        Ok(v) => v,
        Err(m) => return err(&req.id, "bad_params", m, None),
    };
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };

    match controller::dispatch(conn, intent, layout) {
        Ok(outcome) => match serde_json::to_value(&outcome) {
            Ok(v) => ok(&req.id, v),
            Err(e) => err(&req.id, "internal", e.to_string(), None),
        },
        Err(e) => err(&req.id, "db_query_failed", e.to_string(), None),
    }
}

fn handle_assignments_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    match parse_add_form(&req.params) {
        Ok(form) => run_intent(state, req, Intent::Add(form)),
        Err(m) => err(&req.id, "bad_params", m, None),
    }
}

fn handle_assignments_complete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(id) = req.params.get("id").and_then(|v| v.as_i64()) else {
        return err(&req.id, "bad_params", "missing or non-integer id", None);
    };
    run_intent(state, req, Intent::Complete(id))
}

fn handle_assignments_clear(state: &mut AppState, req: &Request) -> serde_json::Value {
    run_intent(state, req, Intent::Clear)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "assignments.list" => Some(handle_assignments_list(state, req)),
        "assignments.add" => Some(handle_assignments_add(state, req)),
        "assignments.complete" => Some(handle_assignments_complete(state, req)),
        "assignments.clear" => Some(handle_assignments_clear(state, req)),
        _ => None,
    }
}
