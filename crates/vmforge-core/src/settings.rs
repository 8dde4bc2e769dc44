//! Install settings and validation.
//!
//! `InstallSettings` is built once at startup and borrowed by the
//! orchestrator and installer for the whole run. It is never mutated
//! after validation.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default CPU threshold (percent) above which fetches are held back.
pub const DEFAULT_CPU_THRESHOLD: u8 = 70;

/// Default cooldown between load samples and between retries.
pub const DEFAULT_COOLDOWN_SECS: u64 = 10;

/// Default pause after every processed image.
pub const DEFAULT_PAUSE_SECS: u64 = 5;

/// Default number of extra attempts after the first.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Upper bound for `max_retries`.
pub const MAX_RETRIES_LIMIT: u32 = 100;

/// Parameters consumed by the installer and orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallSettings {
    /// The gate loop waits while sampled load is at or above this value.
    pub cpu_threshold: u8,
    /// Sleep inside the gate loop and between retries.
    pub cooldown: Duration,
    /// Sleep after every completed image, success or failure.
    pub pause_after: Duration,
    /// Extra attempts after the first before giving up on an image.
    pub max_retries: u32,
    /// Optional bound on a single gate wait. `None` waits indefinitely.
    pub gate_timeout: Option<Duration>,
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            cpu_threshold: DEFAULT_CPU_THRESHOLD,
            cooldown: Duration::from_secs(DEFAULT_COOLDOWN_SECS),
            pause_after: Duration::from_secs(DEFAULT_PAUSE_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            gate_timeout: None,
        }
    }
}

impl InstallSettings {
    #[must_use]
    pub const fn with_cpu_threshold(mut self, threshold: u8) -> Self {
        self.cpu_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    #[must_use]
    pub const fn with_pause_after(mut self, pause: Duration) -> Self {
        self.pause_after = pause;
        self
    }

    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    #[must_use]
    pub const fn with_gate_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.gate_timeout = timeout;
        self
    }

    /// Total attempts allowed per image: the first plus `max_retries`.
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("CPU threshold must be between 1 and 100, got {0}")]
    InvalidCpuThreshold(u8),

    #[error("Max retries must be at most {MAX_RETRIES_LIMIT}, got {0}")]
    TooManyRetries(u32),

    #[error("Cooldown must be non-zero when a gate timeout is set")]
    ZeroCooldownWithTimeout,
}

/// Validate settings before a run.
///
/// A threshold of 0 would hold every fetch forever, so it is rejected.
pub fn validate_settings(settings: &InstallSettings) -> Result<(), SettingsError> {
    if settings.cpu_threshold == 0 || settings.cpu_threshold > 100 {
        return Err(SettingsError::InvalidCpuThreshold(settings.cpu_threshold));
    }

    if settings.max_retries > MAX_RETRIES_LIMIT {
        return Err(SettingsError::TooManyRetries(settings.max_retries));
    }

    if settings.gate_timeout.is_some() && settings.cooldown.is_zero() {
        return Err(SettingsError::ZeroCooldownWithTimeout);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = InstallSettings::default();
        assert!(validate_settings(&settings).is_ok());
        assert_eq!(settings.cpu_threshold, 70);
        assert_eq!(settings.max_attempts(), 4);
        assert!(settings.gate_timeout.is_none());
    }

    #[test]
    fn rejects_zero_and_overflowing_threshold() {
        let zero = InstallSettings::default().with_cpu_threshold(0);
        assert_eq!(
            validate_settings(&zero),
            Err(SettingsError::InvalidCpuThreshold(0))
        );

        let high = InstallSettings::default().with_cpu_threshold(101);
        assert!(validate_settings(&high).is_err());

        let full = InstallSettings::default().with_cpu_threshold(100);
        assert!(validate_settings(&full).is_ok());
    }

    #[test]
    fn rejects_excessive_retries() {
        let settings = InstallSettings::default().with_max_retries(500);
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::TooManyRetries(500))
        );
    }

    #[test]
    fn gate_timeout_needs_a_cooldown() {
        let settings = InstallSettings::default()
            .with_cooldown(Duration::ZERO)
            .with_gate_timeout(Some(Duration::from_secs(60)));
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::ZeroCooldownWithTimeout)
        );
    }

    #[test]
    fn zero_retries_means_one_attempt() {
        assert_eq!(InstallSettings::default().with_max_retries(0).max_attempts(), 1);
    }
}
