//! Server-rendered HTML pages.

use std::fmt::Write;

use chrono::NaiveDate;
use goaltracker_core::goals::{CompletedGoal, GoalStatus, GoalView, DATE_FORMAT};

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 48rem; }
table { border-collapse: collapse; width: 100%; margin-bottom: 2rem; }
th, td { border-bottom: 1px solid #ddd; padding: 0.4rem; text-align: left; }
.status-upcoming { color: #2a7a2a; }
.status-due-today { color: #b36b00; font-weight: bold; }
.status-past-due { color: #b00020; font-weight: bold; }
form.inline { margin: 0; }
";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn status_class(status: GoalStatus) -> &'static str {
    match status {
        GoalStatus::Upcoming => "status-upcoming",
        GoalStatus::DueToday => "status-due-today",
        GoalStatus::PastDue => "status-past-due",
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

pub fn render_index(active: &[GoalView], completed: &[CompletedGoal], today: NaiveDate) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Goal Tracker</h1>");
    let _ = writeln!(
        body,
        "<p>Today is {}. <a href=\"/add\">Add a goal</a></p>",
        today.format(DATE_FORMAT)
    );

    let _ = writeln!(body, "<h2>Active Goals</h2>");
    if active.is_empty() {
        let _ = writeln!(body, "<p>No active goals.</p>");
    } else {
        let _ = writeln!(
            body,
            "<table>\n<tr><th>Description</th><th>Deadline</th><th>Status</th><th></th></tr>"
        );
        for goal in active {
            let _ = writeln!(
                body,
                "<tr><td>{description}</td><td>{deadline}</td>\
                 <td class=\"{class}\">{status}</td>\
                 <td><form class=\"inline\" method=\"post\" action=\"/complete/{id}\">\
                 <button type=\"submit\">Complete</button></form></td></tr>",
                description = escape_html(&goal.description),
                deadline = goal.deadline.format(DATE_FORMAT),
                class = status_class(goal.status),
                status = goal.status,
                id = goal.id,
            );
        }
        let _ = writeln!(body, "</table>");
    }

    let _ = writeln!(body, "<h2>Completed Goals</h2>");
    if completed.is_empty() {
        let _ = writeln!(body, "<p>No completed goals yet.</p>");
    } else {
        let _ = writeln!(
            body,
            "<table>\n<tr><th>Description</th><th>Deadline</th><th>Completed On</th></tr>"
        );
        for goal in completed {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&goal.description),
                goal.deadline.format(DATE_FORMAT),
                goal.completion_date.format(DATE_FORMAT),
            );
        }
        let _ = writeln!(body, "</table>");
    }

    page("Goal Tracker", &body)
}

pub fn render_add_form() -> String {
    let body = "<h1>Add a Goal</h1>\n\
        <form method=\"post\" action=\"/add\">\n\
        <p><label for=\"description\">Description</label><br>\n\
        <input type=\"text\" id=\"description\" name=\"description\"></p>\n\
        <p><label for=\"deadline\">Deadline (YYYY-MM-DD)</label><br>\n\
        <input type=\"date\" id=\"deadline\" name=\"deadline\" required></p>\n\
        <p><button type=\"submit\">Add Goal</button> <a href=\"/\">Cancel</a></p>\n\
        </form>\n";
    page("Add a Goal", body)
}
