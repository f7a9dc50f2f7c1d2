//! Job specification and its validating builder.
//!
//! A [`JobSpec`] describes one schedulable unit of work: the key it is
//! addressed by, its trigger period and constraints, and the notification
//! payload shown while it runs in the foreground. Specs are immutable once
//! built. Raw caller parameters enter through [`JobSpecBuilder`], which
//! rejects empty keys and negative durations; everything downstream can
//! rely on a spec being well formed.

use serde::{Deserialize, Serialize};

use crate::constraint::{Lifetime, NetworkConstraint};
use crate::error::ValidationError;

/// Display payload for the notification shown while a job runs in the
/// foreground.
///
/// The scheduling core never interprets these fields; they ride along for
/// the rendering side. Absent values are normalized to empty strings so the
/// payload is always fully formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification title.
    #[serde(default)]
    pub title: String,
    /// Icon resource name.
    #[serde(default)]
    pub icon: String,
    /// Body text.
    #[serde(default)]
    pub text: String,
}

/// A validated, immutable job specification.
///
/// The key is the primary identifier: cancellation and override checks are
/// addressed by it, and at most one live registration exists per key.
/// Construction goes through [`JobSpecBuilder`], so a `JobSpec` in hand is
/// always well formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSpec {
    key: String,
    period_secs: u64,
    timeout_secs: u64,
    persist: bool,
    override_existing: bool,
    network: NetworkConstraint,
    requires_charging: bool,
    requires_device_idle: bool,
    always_running: bool,
    allow_execution_in_foreground: bool,
    notification: Notification,
}

impl JobSpec {
    /// Start building a spec for the given job key.
    pub fn builder(key: impl Into<String>) -> JobSpecBuilder {
        JobSpecBuilder::new(key)
    }

    /// The unique job key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Trigger period in seconds.
    pub fn period_secs(&self) -> u64 {
        self.period_secs
    }

    /// Execution timeout in seconds, enforced by the executing side.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Whether the registration survives a reboot.
    pub fn persist(&self) -> bool {
        self.persist
    }

    /// Engine lifetime implied by the persist flag.
    pub fn lifetime(&self) -> Lifetime {
        if self.persist {
            Lifetime::Forever
        } else {
            Lifetime::UntilNextBoot
        }
    }

    /// Whether scheduling this spec replaces an existing registration under
    /// the same key.
    pub fn override_existing(&self) -> bool {
        self.override_existing
    }

    /// Network condition required before the trigger fires.
    pub fn network(&self) -> NetworkConstraint {
        self.network
    }

    /// Whether the device must be charging.
    pub fn requires_charging(&self) -> bool {
        self.requires_charging
    }

    /// Whether the device should be idle. Travels in the payload for the
    /// executing side; never part of the engine constraint set.
    pub fn requires_device_idle(&self) -> bool {
        self.requires_device_idle
    }

    /// Whether this spec takes the always-running foreground path instead
    /// of the recurring registry.
    pub fn always_running(&self) -> bool {
        self.always_running
    }

    /// Whether the recurring job may also fire while the application is
    /// foregrounded.
    pub fn allow_execution_in_foreground(&self) -> bool {
        self.allow_execution_in_foreground
    }

    /// Display payload for the foreground notification.
    pub fn notification(&self) -> &Notification {
        &self.notification
    }
}

/// Builder for [`JobSpec`], the boundary where raw input is checked.
///
/// Durations are accepted as signed integers so negative caller input stays
/// representable and is rejected explicitly rather than silently wrapped.
/// All parameters except the key are optional.
#[derive(Debug, Clone)]
pub struct JobSpecBuilder {
    key: String,
    period_secs: i64,
    timeout_secs: i64,
    persist: bool,
    override_existing: bool,
    network: NetworkConstraint,
    requires_charging: bool,
    requires_device_idle: bool,
    always_running: bool,
    allow_execution_in_foreground: bool,
    title: Option<String>,
    icon: Option<String>,
    text: Option<String>,
}

impl JobSpecBuilder {
    /// Create a builder with the given key and default parameters: zero
    /// period and timeout, any network, no device constraints, background
    /// path.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            period_secs: 0,
            timeout_secs: 0,
            persist: false,
            override_existing: false,
            network: NetworkConstraint::default(),
            requires_charging: false,
            requires_device_idle: false,
            always_running: false,
            allow_execution_in_foreground: false,
            title: None,
            icon: None,
            text: None,
        }
    }

    /// Set the trigger period in seconds.
    pub fn with_period_secs(mut self, secs: i64) -> Self {
        self.period_secs = secs;
        self
    }

    /// Set the execution timeout in seconds, passed through to the
    /// executing side.
    pub fn with_timeout_secs(mut self, secs: i64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Keep the registration across reboots.
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// Replace an existing registration under the same key instead of
    /// leaving it in place.
    pub fn with_override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    /// Set the required network condition.
    pub fn with_network(mut self, network: NetworkConstraint) -> Self {
        self.network = network;
        self
    }

    /// Require the device to be charging.
    pub fn with_requires_charging(mut self, required: bool) -> Self {
        self.requires_charging = required;
        self
    }

    /// Ask for an idle device. This is a hint for the executing side, not
    /// an engine constraint.
    pub fn with_requires_device_idle(mut self, required: bool) -> Self {
        self.requires_device_idle = required;
        self
    }

    /// Route this job to the always-running foreground path.
    pub fn with_always_running(mut self, always: bool) -> Self {
        self.always_running = always;
        self
    }

    /// Allow the recurring job to fire while the application is
    /// foregrounded.
    pub fn with_allow_execution_in_foreground(mut self, allow: bool) -> Self {
        self.allow_execution_in_foreground = allow;
        self
    }

    /// Set the notification title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the notification icon resource name.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the notification body text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Validate the collected parameters and build the spec.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyKey`] when the key is empty and
    /// [`ValidationError::NegativeDuration`] when the period or timeout is
    /// below zero.
    pub fn build(self) -> Result<JobSpec, ValidationError> {
        if self.key.is_empty() {
            return Err(ValidationError::EmptyKey);
        }
        if self.period_secs < 0 {
            return Err(ValidationError::NegativeDuration {
                field: "period_secs",
                value: self.period_secs,
            });
        }
        if self.timeout_secs < 0 {
            return Err(ValidationError::NegativeDuration {
                field: "timeout_secs",
                value: self.timeout_secs,
            });
        }

        Ok(JobSpec {
            key: self.key,
            period_secs: self.period_secs as u64,
            timeout_secs: self.timeout_secs as u64,
            persist: self.persist,
            override_existing: self.override_existing,
            network: self.network,
            requires_charging: self.requires_charging,
            requires_device_idle: self.requires_device_idle,
            always_running: self.always_running,
            allow_execution_in_foreground: self.allow_execution_in_foreground,
            notification: Notification {
                title: self.title.unwrap_or_default(),
                icon: self.icon.unwrap_or_default(),
                text: self.text.unwrap_or_default(),
            },
        })
    }
}
