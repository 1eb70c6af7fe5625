//! Task Card Rendering
//!
//! Pure projection of tasks onto card view-models. Card bodies are inserted
//! as raw markup, so every text field goes through `escape_html` first.

use chrono::NaiveDate;

use crate::models::Task;

/// One rendered task card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub id: u32,
    pub completed: bool,
    pub class: &'static str,
    /// Escaped markup for title, description and meta row
    pub body_html: String,
}

/// Escape the five HTML-significant characters
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

/// `YYYY-MM-DD` as `MM/DD/YYYY`; anything else is shown verbatim
pub fn display_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub fn task_card(task: &Task) -> TaskCard {
    let mut body = String::new();
    body.push_str(&format!(r#"<div class="task-title">{}</div>"#, escape_html(&task.title)));

    if let Some(description) = non_empty(&task.description) {
        body.push_str(&format!(r#"<div class="task-description">{}</div>"#, escape_html(description)));
    }

    let date = non_empty(&task.date);
    let time = non_empty(&task.time);
    if date.is_some() || time.is_some() {
        body.push_str(r#"<div class="task-meta">"#);
        if let Some(date) = date {
            body.push_str(&format!(r#"<span class="task-date">📅 {}</span>"#, escape_html(&display_date(date))));
        }
        if let Some(time) = time {
            body.push_str(&format!(r#"<span class="task-time">🕐 {}</span>"#, escape_html(time)));
        }
        body.push_str("</div>");
    }

    TaskCard {
        id: task.id,
        completed: task.completed,
        class: if task.completed { "task-card completed" } else { "task-card" },
        body_html: body,
    }
}

/// Full rebuild of the visible list
pub fn render_cards(tasks: &[Task]) -> Vec<TaskCard> {
    tasks.iter().map(task_card).collect()
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            date: None,
            time: None,
            completed: false,
            owner_id: 1,
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_card_escapes_script_in_title_and_description() {
        let mut task = make_task(1, "<script>alert(1)</script>");
        task.description = Some("<img src=x onerror=alert(2)>".into());
        let card = task_card(&task);
        assert!(!card.body_html.contains("<script>"));
        assert!(!card.body_html.contains("<img"));
        assert!(card.body_html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(card.body_html.contains("&lt;img src=x onerror=alert(2)&gt;"));
    }

    #[test]
    fn test_meta_row_only_with_date_or_time() {
        let bare = task_card(&make_task(1, "Buy milk"));
        assert!(!bare.body_html.contains("task-meta"));
        assert!(!bare.body_html.contains("task-description"));

        let mut scheduled = make_task(2, "Dentist");
        scheduled.date = Some("2024-03-09".into());
        scheduled.time = Some("14:30".into());
        let card = task_card(&scheduled);
        assert!(card.body_html.contains(r#"<span class="task-date">📅 03/09/2024</span>"#));
        assert!(card.body_html.contains(r#"<span class="task-time">🕐 14:30</span>"#));

        let mut time_only = make_task(3, "Call");
        time_only.time = Some("09:00".into());
        let card = task_card(&time_only);
        assert!(card.body_html.contains("task-meta"));
        assert!(!card.body_html.contains("task-date"));
    }

    #[test]
    fn test_display_date_fallback() {
        assert_eq!(display_date("2024-12-31"), "12/31/2024");
        assert_eq!(display_date("tomorrow"), "tomorrow");
    }

    #[test]
    fn test_completed_class() {
        let mut task = make_task(1, "Done");
        task.completed = true;
        let card = task_card(&task);
        assert_eq!(card.class, "task-card completed");
        assert!(card.completed);
        assert_eq!(task_card(&make_task(2, "Open")).class, "task-card");
    }

    #[test]
    fn test_render_is_idempotent() {
        let tasks = vec![make_task(1, "a"), make_task(2, "b & c")];
        assert_eq!(render_cards(&tasks), render_cards(&tasks));
        assert_eq!(render_cards(&tasks).len(), 2);
    }
}
