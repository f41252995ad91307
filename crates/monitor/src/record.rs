//! Input Records

use feature_scaler::SensorReading;
use serde::{Deserialize, Serialize};

/// Aggregated record forwarded by a field gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRecord {
    /// Station that produced the reading
    pub sender_id: u32,
    /// Raw light sensor value, used as lux
    pub ldr_value: u32,
    /// Ambient temperature from the DHT sensor (°C)
    pub dht_temp: f32,
    /// Relative humidity (%)
    pub humidity: f32,
    /// Panel surface temperature from the thermistor (°C)
    pub thermistor_temp: f32,
    pub voltage: f32,
    pub current: f32,
    /// Whether the gateway trusted this sample
    pub valid: bool,
    #[serde(rename = "gateway_timestamp_ms")]
    pub gateway_timestamp_ms: u64,
}

impl GatewayRecord {
    /// Model input for this record
    ///
    /// The model was trained on the DHT temperature and the LDR value.
    pub fn to_reading(&self) -> SensorReading {
        SensorReading::new(
            self.voltage,
            self.current,
            self.dht_temp,
            self.ldr_value as f32,
        )
    }
}

/// One line of monitor input
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InputRecord {
    Gateway(GatewayRecord),
    Reading(SensorReading),
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATEWAY_LINE: &str = r#"{"senderId":3,"ldrValue":950,"dhtTemp":32.5,"humidity":40.0,"thermistorTemp":36.1,"voltage":22.5,"current":0.07,"valid":true,"gateway_timestamp_ms":1700000000000}"#;

    #[test]
    fn test_parse_gateway_record() {
        let record: InputRecord = serde_json::from_str(GATEWAY_LINE).unwrap();
        let InputRecord::Gateway(gateway) = record else {
            panic!("expected gateway record");
        };
        assert_eq!(gateway.sender_id, 3);
        assert!(gateway.valid);
        assert_eq!(gateway.gateway_timestamp_ms, 1_700_000_000_000);
        assert_eq!(gateway.to_reading(), SensorReading::new(22.5, 0.07, 32.5, 950.0));
    }

    #[test]
    fn test_parse_plain_reading() {
        let line = r#"{"voltage":19.5,"current":5.0,"temperature":35.0,"light_intensity":1000.0,"efficiency":18.2}"#;
        let record: InputRecord = serde_json::from_str(line).unwrap();
        assert_eq!(
            record,
            InputRecord::Reading(SensorReading::new(19.5, 5.0, 35.0, 1000.0))
        );
    }

    #[test]
    fn test_reject_incomplete_line() {
        assert!(serde_json::from_str::<InputRecord>(r#"{"voltage":19.5}"#).is_err());
    }
}
