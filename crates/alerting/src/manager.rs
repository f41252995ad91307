//! Alert Manager Implementation

use forest_model::{FaultClass, NUM_CLASSES};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Alert configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Minimum vote share for a fault to notify (default: 0.5)
    pub min_confidence: f32,
    /// Cooldown between notifications for the same fault (seconds)
    pub cooldown_seconds: u64,
    /// Maximum alerts per hour before throttling
    pub max_alerts_per_hour: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            cooldown_seconds: 60,
            max_alerts_per_hour: 10,
        }
    }
}

/// State of an alert
#[derive(Debug, Clone)]
pub struct AlertState {
    /// Last time this alert was fired
    pub last_fired: Instant,
    /// Number of times fired
    pub fire_count: usize,
    /// Whether alert is acknowledged
    pub acknowledged: bool,
}

/// Alert manager for deduplication and throttling
pub struct AlertManager {
    /// Configuration
    config: AlertConfig,
    /// Alert states indexed by fault class
    states: [Option<AlertState>; NUM_CLASSES],
    /// Alerts fired in current hour
    hourly_count: usize,
    /// Hour start time
    hour_start: Instant,
}

impl AlertManager {
    /// Create a new alert manager
    pub fn new(config: AlertConfig) -> Self {
        info!("Creating alert manager with config: {:?}", config);
        Self {
            config,
            states: Default::default(),
            hourly_count: 0,
            hour_start: Instant::now(),
        }
    }

    /// Check if an alert should be fired for a prediction
    pub fn should_fire(&mut self, fault: FaultClass, confidence: f32) -> bool {
        self.should_fire_at(fault, confidence, Instant::now())
    }

    /// [`should_fire`](Self::should_fire) against an explicit clock
    pub fn should_fire_at(&mut self, fault: FaultClass, confidence: f32, now: Instant) -> bool {
        if !fault.is_fault() {
            return false;
        }

        if confidence < self.config.min_confidence {
            debug!(
                "Alert suppressed: confidence {} < threshold {}",
                confidence, self.config.min_confidence
            );
            return false;
        }

        // Reset hourly counter if needed
        if now.saturating_duration_since(self.hour_start) > Duration::from_secs(3600) {
            self.hourly_count = 0;
            self.hour_start = now;
        }

        if self.hourly_count >= self.config.max_alerts_per_hour {
            warn!("Alert throttled: max alerts per hour reached");
            return false;
        }

        if let Some(state) = &self.states[fault.index()] {
            let cooldown = Duration::from_secs(self.config.cooldown_seconds);
            if now.saturating_duration_since(state.last_fired) < cooldown {
                debug!("Alert suppressed: {} in cooldown period", fault);
                return false;
            }
        }

        true
    }

    /// Record that an alert was fired
    pub fn record_fire(&mut self, fault: FaultClass) {
        self.record_fire_at(fault, Instant::now());
    }

    /// [`record_fire`](Self::record_fire) against an explicit clock
    pub fn record_fire_at(&mut self, fault: FaultClass, now: Instant) {
        self.hourly_count += 1;

        let state = self.states[fault.index()].get_or_insert(AlertState {
            last_fired: now,
            fire_count: 0,
            acknowledged: false,
        });

        state.last_fired = now;
        state.fire_count += 1;
        state.acknowledged = false;

        info!("Alert recorded: {} (count: {})", fault, state.fire_count);
    }

    /// Acknowledge an alert
    pub fn acknowledge(&mut self, fault: FaultClass) -> bool {
        match &mut self.states[fault.index()] {
            Some(state) => {
                state.acknowledged = true;
                info!("Alert acknowledged: {}", fault);
                true
            }
            None => false,
        }
    }

    /// State of one fault's alert, if it ever fired
    pub fn state(&self, fault: FaultClass) -> Option<&AlertState> {
        self.states[fault.index()].as_ref()
    }

    /// Get pending (unacknowledged) alerts
    pub fn pending(&self) -> Vec<(FaultClass, &AlertState)> {
        FaultClass::ALL
            .into_iter()
            .zip(&self.states)
            .filter_map(|(fault, state)| state.as_ref().map(|s| (fault, s)))
            .filter(|(_, state)| !state.acknowledged)
            .collect()
    }

    /// Get hourly alert count
    pub fn hourly_count(&self) -> usize {
        self.hourly_count
    }

    /// Clear all alert states
    pub fn clear(&mut self) {
        self.states = Default::default();
        self.hourly_count = 0;
    }
}

impl Default for AlertManager {
    fn default() -> Self {
        Self::new(AlertConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_never_fires() {
        let mut manager = AlertManager::default();
        assert!(!manager.should_fire(FaultClass::Normal, 1.0));
    }

    #[test]
    fn test_confidence_threshold() {
        let mut manager = AlertManager::default();
        assert!(!manager.should_fire(FaultClass::ShortCircuit, 0.4));
        assert!(manager.should_fire(FaultClass::ShortCircuit, 0.5));
        assert!(manager.should_fire(FaultClass::ShortCircuit, 0.9));
    }

    #[test]
    fn test_cooldown_per_fault() {
        let mut manager = AlertManager::default();
        let t0 = Instant::now();

        assert!(manager.should_fire_at(FaultClass::OpenCircuit, 0.9, t0));
        manager.record_fire_at(FaultClass::OpenCircuit, t0);

        // Same fault inside cooldown is suppressed, a different one is not
        let t1 = t0 + Duration::from_secs(30);
        assert!(!manager.should_fire_at(FaultClass::OpenCircuit, 0.9, t1));
        assert!(manager.should_fire_at(FaultClass::PartialShading, 0.9, t1));

        let t2 = t0 + Duration::from_secs(61);
        assert!(manager.should_fire_at(FaultClass::OpenCircuit, 0.9, t2));
    }

    #[test]
    fn test_hourly_throttle() {
        let config = AlertConfig {
            cooldown_seconds: 0,
            max_alerts_per_hour: 2,
            ..Default::default()
        };
        let mut manager = AlertManager::new(config);
        let t0 = Instant::now();

        for _ in 0..2 {
            assert!(manager.should_fire_at(FaultClass::ShortCircuit, 1.0, t0));
            manager.record_fire_at(FaultClass::ShortCircuit, t0);
        }
        assert!(!manager.should_fire_at(FaultClass::ShortCircuit, 1.0, t0));
        assert_eq!(manager.hourly_count(), 2);

        // Budget resets once the hour rolls over
        let later = t0 + Duration::from_secs(3601);
        assert!(manager.should_fire_at(FaultClass::ShortCircuit, 1.0, later));
        assert_eq!(manager.hourly_count(), 0);
    }

    #[test]
    fn test_acknowledgement() {
        let mut manager = AlertManager::default();
        assert!(!manager.acknowledge(FaultClass::OpenCircuit));

        manager.record_fire(FaultClass::OpenCircuit);
        manager.record_fire(FaultClass::ShortCircuit);
        assert_eq!(manager.pending().len(), 2);

        assert!(manager.acknowledge(FaultClass::OpenCircuit));
        assert!(manager.state(FaultClass::OpenCircuit).unwrap().acknowledged);

        let pending = manager.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].0, FaultClass::ShortCircuit);
        assert_eq!(pending[0].1.fire_count, 1);
    }

    #[test]
    fn test_clear() {
        let mut manager = AlertManager::default();
        manager.record_fire(FaultClass::PartialShading);
        manager.clear();
        assert!(manager.pending().is_empty());
        assert_eq!(manager.hourly_count(), 0);
    }
}
