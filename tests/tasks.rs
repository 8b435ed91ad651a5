#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use std::collections::HashSet;
    use taskboard::libs::task::{timestamp, NewTask, Stats, Task, TaskId, TaskPatch};

    #[test]
    fn test_task_from_backend_json() {
        let json = r#"{
            "id": 3,
            "title": "Water plants",
            "completed": true,
            "created_at": "2026-10-18T08:00:00.000001",
            "updated_at": "2026-10-18T09:30:15"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, TaskId::Number(3));
        assert_eq!(task.title, "Water plants");
        assert!(task.completed);
        assert_eq!(task.updated_at.hour(), 9);
        assert_eq!(task.updated_at.minute(), 30);
        assert_eq!(task.created_at.day(), 18);
    }

    #[test]
    fn test_task_with_string_id_and_offset_timestamps() {
        let json = r#"{
            "id": "a1b2",
            "title": "Ship it",
            "created_at": "2026-10-18T08:00:00Z",
            "updated_at": "2026-10-18T08:00:00+02:00"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, TaskId::Text("a1b2".to_string()));
        assert!(!task.completed);
        assert!(task.updated_at < task.created_at);
    }

    #[test]
    fn test_invalid_timestamp_is_rejected() {
        let json = r#"{"id": 1, "title": "x", "created_at": "yesterday", "updated_at": "yesterday"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
        assert!(timestamp::parse("2026-13-40T00:00:00").is_none());
    }

    #[test]
    fn test_task_id_parsing_and_display() {
        assert_eq!(TaskId::from(" 42 "), TaskId::Text("42".to_string()));
        assert_eq!(TaskId::from("007").to_string(), "007");
        assert_eq!(TaskId::Number(42).to_string(), "42");
        assert_eq!(TaskId::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_task_ids_compare_by_text() {
        let wire_text: TaskId = serde_json::from_str(r#""42""#).unwrap();
        let wire_number: TaskId = serde_json::from_str("42").unwrap();

        assert_eq!(wire_text, TaskId::Text("42".to_string()));
        assert_eq!(wire_number, TaskId::Number(42));
        assert_eq!(TaskId::from("42"), wire_text);
        assert_eq!(TaskId::from("42"), wire_number);
        assert_ne!(TaskId::from("007"), TaskId::Number(7));

        let ids: HashSet<TaskId> = [wire_text, wire_number, TaskId::from("42")].into_iter().collect();
        assert_eq!(ids.len(), 1);
    }

    #[test]
    fn test_new_task_trims_and_rejects_blank() {
        assert_eq!(NewTask::new("  Buy milk\n").unwrap().title, "Buy milk");
        assert!(NewTask::new("").is_none());
        assert!(NewTask::new(" \t\n ").is_none());
    }

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_string(&NewTask::new("Buy milk").unwrap()).unwrap();
        assert_eq!(body, r#"{"title":"Buy milk"}"#);

        let body = serde_json::to_string(&TaskPatch { completed: false }).unwrap();
        assert_eq!(body, r#"{"completed":false}"#);
    }

    #[test]
    fn test_stats_pending() {
        let stats: Stats = serde_json::from_str(r#"{"total": 3, "completed": 1, "progress": 33.333333333333336}"#).unwrap();
        assert_eq!(stats.pending(), 2);

        let empty: Stats = serde_json::from_str(r#"{"total": 0, "completed": 0, "progress": 0}"#).unwrap();
        assert_eq!(empty.pending(), 0);

        let odd = Stats { total: 1, completed: 2, progress: f64::NAN };
        assert_eq!(odd.pending(), 0);
    }
}
