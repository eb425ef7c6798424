//! First-run / upgrade gate.
//!
//! On startup the build id stored by the previous run is compared with the
//! running build. When they differ (or nothing was stored, or this is a
//! debug build) the local schema is (re)created and a forced full sync is
//! queued.

use crate::ports::{SchemaStore, SettingsStore, SyncTrigger};
use anyhow::{Context, Result};

/// Settings key holding the build id of the last run.
pub const LAST_BUILD_KEY: &str = "lastBuild";

/// Whether this binary was built with debug assertions.
pub fn is_debug_build() -> bool {
    cfg!(debug_assertions)
}

/// Result of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub ran_tasks: bool,
}

/// Decide whether the update tasks have to run.
pub fn resolve_update_gate(
    persisted_build_id: Option<&str>,
    running_build_id: &str,
    is_debug: bool,
) -> UpdateOutcome {
    let ran_tasks = is_debug || persisted_build_id != Some(running_build_id);
    UpdateOutcome { ran_tasks }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Pending,
    Resolved(UpdateOutcome),
}

/// Runs the update tasks at most once per gate.
///
/// The once-only guarantee belongs to the instance: a second gate built in
/// the same process evaluates again. Outside debug builds that second gate
/// finds the stored build id and does nothing, but in debug builds it runs
/// the tasks again. Create one gate at startup.
pub struct UpdateGate<'a> {
    settings: &'a dyn SettingsStore,
    schema: &'a dyn SchemaStore,
    sync: &'a dyn SyncTrigger,
    running_build_id: String,
    is_debug: bool,
    state: GateState,
}

impl<'a> UpdateGate<'a> {
    pub fn new(
        settings: &'a dyn SettingsStore,
        schema: &'a dyn SchemaStore,
        sync: &'a dyn SyncTrigger,
        running_build_id: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            schema,
            sync,
            running_build_id: running_build_id.into(),
            is_debug: is_debug_build(),
            state: GateState::Pending,
        }
    }

    /// Override debug detection.
    pub fn debug(mut self, is_debug: bool) -> Self {
        self.is_debug = is_debug;
        self
    }

    /// Evaluate the gate. Later calls return the first outcome without
    /// touching any collaborator.
    pub fn run(&mut self) -> Result<UpdateOutcome> {
        if let GateState::Resolved(outcome) = self.state {
            return Ok(outcome);
        }

        let persisted = self
            .settings
            .get(LAST_BUILD_KEY)
            .context("Failed to read last build id")?;
        let outcome =
            resolve_update_gate(persisted.as_deref(), &self.running_build_id, self.is_debug);

        if outcome.ran_tasks {
            tracing::info!(
                "Running update tasks (last build {:?}, running {}, debug {})",
                persisted,
                self.running_build_id,
                self.is_debug
            );
            // The build id is only recorded once the schema exists, so a
            // failed initialization is retried on the next start.
            self.schema
                .initialize()
                .context("Failed to initialize local schema")?;
            self.settings
                .set(LAST_BUILD_KEY, &self.running_build_id)
                .context("Failed to store build id")?;
            self.sync.request_full_sync(true);
        } else {
            tracing::debug!("Build {} already initialized", self.running_build_id);
        }

        self.state = GateState::Resolved(outcome);
        Ok(outcome)
    }
}
