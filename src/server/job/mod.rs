//! Background job bridge.
//!
//! The job orchestrator discovers the functions this app provides with `GET /api/inngest` and
//! invokes one per event with `POST /api/inngest?fnId=<id>`. Each [`JobFunction`] is bound to
//! exactly one trigger event and deserializes the event data it needs.

mod user;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::server::error::{job::JobError, AppError};

/// Application id reported to the job orchestrator.
pub const APP_ID: &str = "codearena";

/// Job functions served by this application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFunction {
    /// Creates or refreshes a user when the auth provider reports a sign-up.
    SyncUser,
    /// Removes a user when the auth provider reports a deletion.
    DeleteUser,
}

impl JobFunction {
    pub const ALL: [JobFunction; 2] = [JobFunction::SyncUser, JobFunction::DeleteUser];

    pub fn id(&self) -> &'static str {
        match self {
            JobFunction::SyncUser => "sync-user",
            JobFunction::DeleteUser => "delete-user",
        }
    }

    /// Name of the event that triggers this function.
    pub fn trigger(&self) -> &'static str {
        match self {
            JobFunction::SyncUser => "auth/user.created",
            JobFunction::DeleteUser => "auth/user.deleted",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.id() == id)
    }

    /// Runs the function for an event's data.
    ///
    /// # Returns
    /// - `Ok(Value)` - Function output returned to the orchestrator
    /// - `Err(JobError::InvalidEventData)` - Data doesn't match the function's payload
    /// - `Err(AppError::DbErr)` - Database error while handling the event
    async fn run(&self, db: &DatabaseConnection, data: Value) -> Result<Value, AppError> {
        match self {
            JobFunction::SyncUser => user::sync_user(db, self.parse(data)?).await,
            JobFunction::DeleteUser => user::delete_user(db, self.parse(data)?).await,
        }
    }

    fn parse<T: serde::de::DeserializeOwned>(&self, data: Value) -> Result<T, JobError> {
        serde_json::from_value(data).map_err(|e| JobError::InvalidEventData {
            function: self.id().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Event delivered by the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEvent {
    pub name: String,
    #[serde(default)]
    pub data: Value,
}

/// Body of an invocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeRequest {
    pub event: JobEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDescriptor {
    pub id: String,
    pub trigger: String,
}

/// Registration payload returned to the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Introspection {
    pub app_id: String,
    pub functions: Vec<FunctionDescriptor>,
}

/// Registry dispatching orchestrator requests to job functions.
pub struct JobBridge<'a> {
    db: &'a DatabaseConnection,
    signing_key: &'a str,
}

impl<'a> JobBridge<'a> {
    pub fn new(db: &'a DatabaseConnection, signing_key: &'a str) -> Self {
        Self { db, signing_key }
    }

    pub fn introspect() -> Introspection {
        Introspection {
            app_id: APP_ID.to_string(),
            functions: JobFunction::ALL
                .iter()
                .map(|function| FunctionDescriptor {
                    id: function.id().to_string(),
                    trigger: function.trigger().to_string(),
                })
                .collect(),
        }
    }

    /// Checks the signing key presented by the caller.
    pub fn verify(&self, presented_key: Option<&str>) -> Result<(), JobError> {
        match presented_key {
            Some(key) if key == self.signing_key => Ok(()),
            _ => Err(JobError::InvalidSigningKey),
        }
    }

    /// Invokes the function registered as `function_id` for `event`.
    ///
    /// # Returns
    /// - `Ok(Value)` - Function output
    /// - `Err(JobError::UnknownFunction)` - No function with that id
    /// - `Err(JobError::TriggerMismatch)` - Event isn't the function's trigger
    /// - `Err(JobError::InvalidEventData)` - Event data doesn't fit the function
    pub async fn invoke(&self, function_id: &str, event: JobEvent) -> Result<Value, AppError> {
        let function = JobFunction::from_id(function_id)
            .ok_or_else(|| JobError::UnknownFunction(function_id.to_string()))?;

        if event.name != function.trigger() {
            return Err(JobError::TriggerMismatch {
                function: function.id().to_string(),
                event: event.name,
            }
            .into());
        }

        function.run(self.db, event.data).await
    }
}
