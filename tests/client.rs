#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use taskboard::api::taskboard::extract_detail;
    use taskboard::api::{ApiError, TaskApi, TaskBoardClient};
    use taskboard::libs::board::Board;
    use taskboard::libs::config::ServerConfig;
    use taskboard::libs::state::Connectivity;
    use taskboard::libs::task::{NewTask, TaskId, TaskPatch};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Request line and body as seen by the fake server.
    struct Captured {
        request_line: String,
        body: String,
    }

    /// Serves exactly one HTTP response and hands back what was requested.
    async fn serve_once(status: &str, body: &str) -> (TaskBoardClient, oneshot::Receiver<Captured>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            let (head_len, content_length) = loop {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(pos) = text.find("\r\n\r\n") {
                    let content_length = text[..pos]
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    break (pos + 4, content_length);
                }
            };
            while raw.len() < head_len + content_length {
                let n = socket.read(&mut buf).await.unwrap();
                raw.extend_from_slice(&buf[..n]);
            }

            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            let text = String::from_utf8_lossy(&raw).to_string();
            let _ = tx.send(Captured {
                request_line: text.lines().next().unwrap_or_default().to_string(),
                body: text[head_len..].to_string(),
            });
        });

        let config = ServerConfig {
            api_url: format!("http://{}/api/", addr),
            timeout_secs: Some(5),
        };
        (TaskBoardClient::new(&config).unwrap(), rx)
    }

    const TASK_JSON: &str =
        r#"{"id": 7, "title": "Buy milk", "completed": false, "created_at": "2026-10-18T09:15:00.123456", "updated_at": "2026-10-18T09:15:00.123456"}"#;

    #[tokio::test]
    async fn test_probe_accepts_any_success() {
        let (client, rx) = serve_once("200 OK", r#"{"message": "Task Board API is running"}"#).await;

        client.probe().await.unwrap();

        let captured = rx.await.unwrap();
        assert_eq!(captured.request_line, "GET / HTTP/1.1");
    }

    #[tokio::test]
    async fn test_probe_rejects_error_status() {
        let (client, _rx) = serve_once("404 Not Found", r#"{"detail": "Not Found"}"#).await;

        match client.probe().await {
            Err(ApiError::Status { status, detail, .. }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(detail.as_deref(), Some("Not Found"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_probe_reports_unreachable_backend() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TaskBoardClient::new(&ServerConfig {
            api_url: format!("http://{}/api", addr),
            timeout_secs: Some(5),
        })
        .unwrap();

        let error = client.probe().await.unwrap_err();
        assert!(error.is_connection());
        assert!(error.detail().is_none());
    }

    #[tokio::test]
    async fn test_list_tasks_parses_backend_payload() {
        let (client, rx) = serve_once("200 OK", &format!("[{}]", TASK_JSON)).await;

        let tasks = client.list_tasks().await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::Number(7));
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(!tasks[0].completed);
        assert_eq!(rx.await.unwrap().request_line, "GET /api/tasks HTTP/1.1");
    }

    #[tokio::test]
    async fn test_create_task_posts_title() {
        let (client, rx) = serve_once("200 OK", TASK_JSON).await;

        let task = client.create_task(&NewTask::new("Buy milk").unwrap()).await.unwrap();

        assert_eq!(task.title, "Buy milk");
        let captured = rx.await.unwrap();
        assert_eq!(captured.request_line, "POST /api/tasks HTTP/1.1");
        assert_eq!(captured.body, r#"{"title":"Buy milk"}"#);
    }

    #[tokio::test]
    async fn test_create_task_error_carries_detail() {
        let (client, _rx) = serve_once("400 Bad Request", r#"{"detail": "Title too long"}"#).await;

        let error = client.create_task(&NewTask::new("Buy milk").unwrap()).await.unwrap_err();

        assert_eq!(error.detail(), Some("Title too long"));
    }

    #[tokio::test]
    async fn test_update_task_puts_completion() {
        let (client, rx) = serve_once("200 OK", &TASK_JSON.replace("\"completed\": false", "\"completed\": true")).await;

        let task = client.update_task(&TaskId::Number(7), &TaskPatch { completed: true }).await.unwrap();

        assert!(task.completed);
        let captured = rx.await.unwrap();
        assert_eq!(captured.request_line, "PUT /api/tasks/7 HTTP/1.1");
        assert_eq!(captured.body, r#"{"completed":true}"#);
    }

    #[tokio::test]
    async fn test_delete_task_sends_delete() {
        let (client, rx) = serve_once("200 OK", r#"{"message": "Task deleted successfully"}"#).await;

        client.delete_task(&TaskId::Number(7)).await.unwrap();

        assert_eq!(rx.await.unwrap().request_line, "DELETE /api/tasks/7 HTTP/1.1");
    }

    #[tokio::test]
    async fn test_stats_parses_counts() {
        let (client, rx) = serve_once("200 OK", r#"{"total": 5, "completed": 2, "progress": 40.0}"#).await;

        let stats = client.stats().await.unwrap();

        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.progress, 40.0);
        assert_eq!(rx.await.unwrap().request_line, "GET /api/stats HTTP/1.1");
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let (client, _rx) = serve_once("200 OK", r#"{"total": "many"}"#).await;

        let error = client.stats().await.unwrap_err();

        assert!(matches!(error, ApiError::Decode { .. }));
    }

    #[test]
    fn test_base_url_drops_trailing_slash() {
        let client = TaskBoardClient::new(&ServerConfig {
            api_url: "http://localhost:8000/api/".to_string(),
            timeout_secs: None,
        })
        .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.probe_url(), "http://localhost:8000/");
    }

    #[test]
    fn test_extract_detail_variants() {
        assert_eq!(extract_detail(r#"{"detail": "Task not found"}"#).as_deref(), Some("Task not found"));
        assert_eq!(
            extract_detail(r#"{"detail": [{"loc": ["body", "title"], "msg": "field required"}, {"msg": "too short"}]}"#).as_deref(),
            Some("field required; too short")
        );
        assert_eq!(extract_detail(r#"{"detail": null}"#), None);
        assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
    }

    /// Serves the liveness route at `/` and the data routes under `/api`,
    /// answering 404 everywhere else. Returns the paths it saw.
    async fn serve_task_board(connections: usize) -> (String, oneshot::Receiver<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut paths = Vec::new();
            for _ in 0..connections {
                let (mut socket, _) = listener.accept().await.unwrap();
                let mut raw = Vec::new();
                let mut buf = [0u8; 1024];
                while !String::from_utf8_lossy(&raw).contains("\r\n\r\n") {
                    let n = socket.read(&mut buf).await.unwrap();
                    raw.extend_from_slice(&buf[..n]);
                }
                let text = String::from_utf8_lossy(&raw).to_string();
                let path = text.split_whitespace().nth(1).unwrap_or_default().to_string();

                let (status, body) = match path.as_str() {
                    "/" => ("200 OK", r#"{"message": "Task Board API is running"}"#.to_string()),
                    "/api/tasks" => ("200 OK", format!("[{}]", TASK_JSON)),
                    "/api/stats" => ("200 OK", r#"{"total": 1, "completed": 0, "progress": 0.0}"#.to_string()),
                    _ => ("404 Not Found", r#"{"detail": "Not Found"}"#.to_string()),
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                socket.write_all(response.as_bytes()).await.unwrap();
                socket.shutdown().await.unwrap();
                paths.push(path);
            }
            let _ = tx.send(paths);
        });

        (format!("http://{}/api", addr), rx)
    }

    #[tokio::test]
    async fn test_board_comes_online_against_root_liveness_route() {
        let (api_url, rx) = serve_task_board(3).await;
        let client = TaskBoardClient::new(&ServerConfig {
            api_url,
            timeout_secs: Some(5),
        })
        .unwrap();
        let mut board = Board::new(client);

        board.connect().await.unwrap();

        assert_eq!(board.state().connectivity, Connectivity::Online);
        assert!(board.state().error.is_none());
        assert_eq!(board.state().tasks.len(), 1);
        assert_eq!(board.state().stats.total, 1);
        assert_eq!(rx.await.unwrap(), vec!["/", "/api/tasks", "/api/stats"]);
    }
}
