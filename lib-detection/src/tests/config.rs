use crate::*;

#[test]
fn defaults_match_reference_device() {
    let config = DetectorConfig::default();
    assert_eq!(config, DetectorConfig::DEFAULT);
    assert_eq!(config.vibration_threshold, 0.2);
    assert_eq!(config.tilt_threshold, 1.0);
    assert_eq!(config.voltage_threshold, 3.0);
    assert_eq!(config.grace_ms, 500);
    assert_eq!(config.required_spikes, 2);
    assert_eq!(config.orientation_samples, 100);
    assert_eq!(config.baseline_samples, 100);
    assert_eq!(config.cooldown_ms, 5000);
    assert_eq!(config.sample_period_ms, 50);
    assert_eq!(config.voltage_scale, 800.0);
    assert_eq!(config.amplification, 1.5);
    assert_eq!(config.read_policy, ReadPolicy::Halt);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn structural_mistakes_are_rejected() {
    let base = DetectorConfig::DEFAULT;
    assert_eq!(
        DetectorConfig { baseline_samples: 0, ..base }.validate(),
        Err(ConfigError::NoCalibrationSamples)
    );
    assert_eq!(
        DetectorConfig { sample_period_ms: 0, ..base }.validate(),
        Err(ConfigError::NoSamplePeriod)
    );
    assert_eq!(
        DetectorConfig { tilt_threshold: -1.0, ..base }.validate(),
        Err(ConfigError::NegativeThreshold)
    );
    assert_eq!(
        DetectorConfig { voltage_scale: f32::NAN, ..base }.validate(),
        Err(ConfigError::NegativeThreshold)
    );
    assert_eq!(
        DetectorConfig { read_policy: ReadPolicy::Retry { attempts: 0, backoff_ms: 10 }, ..base }.validate(),
        Err(ConfigError::NoRetryAttempts)
    );
}
