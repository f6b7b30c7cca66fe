pub mod events_pipeline;
pub mod homework_pipeline;
pub mod marks_pipeline;

use crate::domain::model::{DateRange, RecordKind};
use crate::domain::ports::SchoolSource;
use crate::utils::error::Result;
use serde_json::Value;

/// Authenticate, then ask for one kind within the window.
pub(crate) async fn fetch_with_token<S: SchoolSource>(
    source: &S,
    kind: RecordKind,
    range: &DateRange,
) -> Result<Value> {
    let token = source.access_token().await?;
    tracing::debug!("🔑 {}: access token acquired", kind);
    source.fetch(&token, kind, range).await
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::model::{DateRange, RecordKind};
    use crate::domain::ports::{LineSink, SchoolSource};
    use crate::utils::error::{EtlError, Result};
    use serde_json::Value;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    pub struct MockSource {
        payload: Value,
        reject_login: bool,
        pub requests: Arc<Mutex<Vec<(String, RecordKind, String, String)>>>,
    }

    impl MockSource {
        pub fn new(payload: Value) -> Self {
            Self {
                payload,
                reject_login: false,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        pub fn rejecting_login() -> Self {
            Self {
                reject_login: true,
                ..Self::new(Value::Null)
            }
        }
    }

    impl SchoolSource for MockSource {
        async fn access_token(&self) -> Result<String> {
            if self.reject_login {
                return Err(EtlError::AuthError {
                    message: "invalid credentials".to_string(),
                });
            }
            Ok("token-1".to_string())
        }

        async fn fetch(&self, token: &str, kind: RecordKind, range: &DateRange) -> Result<Value> {
            self.requests.lock().await.push((
                token.to_string(),
                kind,
                range.from_param(),
                range.to_param(),
            ));
            Ok(self.payload.clone())
        }
    }

    #[derive(Clone, Default)]
    pub struct MockSink {
        pub submitted: Arc<Mutex<Vec<String>>>,
    }

    impl LineSink for MockSink {
        async fn submit(&self, payload: &str) -> Result<()> {
            self.submitted.lock().await.push(payload.to_string());
            Ok(())
        }
    }
}
