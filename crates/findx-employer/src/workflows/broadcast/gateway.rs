use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::message::{BroadcastMessage, MessageError};

pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Device tokens known to the console, kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRegistry {
    tokens: BTreeSet<String>,
}

impl TokenRegistry {
    /// Returns false when the token was already registered.
    pub fn register(&mut self, token: &str) -> Result<bool, BroadcastError> {
        let token = normalize_token(token).ok_or(BroadcastError::InvalidToken)?;
        Ok(self.tokens.insert(token))
    }

    pub fn unregister(&mut self, token: &str) -> bool {
        self.tokens.remove(token.trim())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token.trim())
    }

    pub fn list(&self) -> Vec<String> {
        self.tokens.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

fn normalize_token(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Outcome the push provider reports for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeliveryStatus {
    Delivered,
    Failed { reason: String },
    Unregistered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStatus {
    pub token: String,
    #[serde(flatten)]
    pub status: DeliveryStatus,
}

impl TokenStatus {
    pub fn new(token: impl Into<String>, status: DeliveryStatus) -> Self {
        Self {
            token: token.into(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("push transport failed: {0}")]
pub struct PushTransportError(pub String);

/// Push delivery provider; one call per batch of tokens.
#[async_trait]
pub trait PushSink: Send + Sync {
    async fn send(
        &self,
        message: &BroadcastMessage,
        tokens: &[String],
    ) -> Result<Vec<TokenStatus>, PushTransportError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tokens", rename_all = "snake_case")]
pub enum BroadcastTarget {
    #[default]
    All,
    Tokens(Vec<String>),
}

/// A token that did not receive the notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("delivery to {token} failed: {reason}")]
pub struct NotificationDeliveryError {
    pub token: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BroadcastReport {
    pub requested: usize,
    pub delivered: usize,
    pub failures: Vec<NotificationDeliveryError>,
    pub pruned: Vec<String>,
}

impl BroadcastReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BroadcastError {
    #[error(transparent)]
    InvalidMessage(#[from] MessageError),
    #[error("device token must not be blank")]
    InvalidToken,
}

impl BroadcastError {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidMessage(_) => "invalid_message",
            Self::InvalidToken => "invalid_token",
        }
    }
}

/// Owns the token registry and fans messages out to the push sink.
pub struct NotificationGateway<S> {
    sink: Arc<S>,
    registry: Mutex<TokenRegistry>,
    batch_size: usize,
}

impl<S> NotificationGateway<S>
where
    S: PushSink + 'static,
{
    pub fn new(sink: Arc<S>, batch_size: usize) -> Self {
        Self::with_registry(sink, TokenRegistry::default(), batch_size)
    }

    pub fn with_registry(sink: Arc<S>, registry: TokenRegistry, batch_size: usize) -> Self {
        Self {
            sink,
            registry: Mutex::new(registry),
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn register_token(&self, token: &str) -> Result<bool, BroadcastError> {
        self.registry().register(token)
    }

    pub fn unregister_token(&self, token: &str) -> bool {
        self.registry().unregister(token)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.registry().list()
    }

    /// Best-effort delivery: transport and per-token failures land in the report.
    pub async fn broadcast(
        &self,
        message: &BroadcastMessage,
        target: BroadcastTarget,
    ) -> Result<BroadcastReport, BroadcastError> {
        message.validate()?;

        let recipients = self.resolve(target);
        let mut report = BroadcastReport {
            requested: recipients.len(),
            ..BroadcastReport::default()
        };

        for batch in recipients.chunks(self.batch_size) {
            match self.sink.send(message, batch).await {
                Ok(statuses) => record_batch(batch, statuses, &mut report),
                Err(error) => {
                    warn!(batch_len = batch.len(), %error, "push batch failed");
                    report
                        .failures
                        .extend(batch.iter().map(|token| NotificationDeliveryError {
                            token: token.clone(),
                            reason: error.to_string(),
                        }));
                }
            }
        }

        if !report.pruned.is_empty() {
            let mut registry = self.registry();
            for token in &report.pruned {
                registry.unregister(token);
            }
            warn!(
                pruned = report.pruned.len(),
                "removed tokens the provider no longer recognises"
            );
        }

        info!(
            requested = report.requested,
            delivered = report.delivered,
            failed = report.failed(),
            "broadcast finished"
        );
        Ok(report)
    }

    fn resolve(&self, target: BroadcastTarget) -> Vec<String> {
        match target {
            BroadcastTarget::All => self.tokens(),
            BroadcastTarget::Tokens(tokens) => {
                let mut seen = BTreeSet::new();
                tokens
                    .iter()
                    .filter_map(|token| normalize_token(token))
                    .filter(|token| seen.insert(token.clone()))
                    .collect()
            }
        }
    }

    fn registry(&self) -> MutexGuard<'_, TokenRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn record_batch(
    batch: &[String],
    statuses: Vec<TokenStatus>,
    report: &mut BroadcastReport,
) {
    let mut by_token: HashMap<String, DeliveryStatus> = statuses
        .into_iter()
        .map(|entry| (entry.token, entry.status))
        .collect();

    for token in batch {
        let status = by_token.remove(token).unwrap_or(DeliveryStatus::Failed {
            reason: "provider returned no status".to_string(),
        });
        match status {
            DeliveryStatus::Delivered => report.delivered += 1,
            DeliveryStatus::Failed { reason } => {
                report.failures.push(NotificationDeliveryError {
                    token: token.clone(),
                    reason,
                })
            }
            DeliveryStatus::Unregistered => {
                report.failures.push(NotificationDeliveryError {
                    token: token.clone(),
                    reason: "token is no longer registered".to_string(),
                });
                report.pruned.push(token.clone());
            }
        }
    }
}
