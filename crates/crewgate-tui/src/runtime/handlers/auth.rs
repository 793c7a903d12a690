use crewgate_core::auth::{AuthClient, AuthRequest};

use crate::common::TaskId;
use crate::events::UiEvent;

/// Sends one submission and reports its outcome.
pub async fn auth_submit(client: AuthClient, task: TaskId, request: AuthRequest) -> UiEvent {
    let result = client.send(&request).await;
    UiEvent::AuthFinished { task, result }
}

#[cfg(test)]
mod tests {
    use crewgate_core::auth::{AuthErrorKind, FALLBACK_MESSAGE, LoginPayload};

    use super::*;

    #[tokio::test]
    async fn unreachable_server_yields_transport_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = AuthClient::new(format!("http://{addr}"), None).unwrap();
        let request = AuthRequest::Login(LoginPayload {
            userid: "a1".to_string(),
            password: "p".to_string(),
        });

        let event = auth_submit(client, TaskId(7), request).await;
        let UiEvent::AuthFinished { task, result } = event else {
            panic!("expected AuthFinished");
        };
        assert_eq!(task, TaskId(7));
        let err = result.unwrap_err();
        assert_eq!(err.kind, AuthErrorKind::Transport);
        assert_eq!(err.notice_message(), FALLBACK_MESSAGE);
    }
}
