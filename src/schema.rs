use serde::{Deserialize, Serialize};

/// One candidate CO₂ storage site. Column names and order are fixed; the
/// serde renames match the CSV headers used by the upstream formation
/// datasets, so uploaded tables deserialize without remapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormationRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Depth (m)")]
    pub depth_m: f64,
    #[serde(rename = "P (MPa)")]
    pub pressure_mpa: f64,
    #[serde(rename = "T (°C)")]
    pub temperature_c: f64,
    #[serde(rename = "CO2 Density (kg/m3)")]
    pub co2_density_kg_m3: f64,
    #[serde(rename = "Storage Capacity (Mt)")]
    pub storage_capacity_mt: f64,
    /// 1 if the reservoir is faulted, 0 otherwise.
    #[serde(rename = "Fault")]
    pub fault: u8,
    #[serde(rename = "Seal Thickness (m)")]
    pub seal_thickness_m: f64,
    #[serde(rename = "Reservoir Thickness (m)")]
    pub reservoir_thickness_m: f64,
    /// 1 for stacked reservoir systems, 0 otherwise.
    #[serde(rename = "Stacked")]
    pub stacked: u8,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Positive-class probability in [0,1]; absent until a security
    /// assessment has run. Never user-set.
    #[serde(rename = "Security", default, skip_serializing_if = "Option::is_none")]
    pub security: Option<f64>,
}

/// Model feature vector x = [depth_m,
///                           pressure_mpa,
///                           temperature_c,
///                           co2_density_kg_m3,
///                           storage_capacity_mt,
///                           fault,
///                           seal_thickness_m,
///                           reservoir_thickness_m,
///                           stacked]
pub type FeatureVector = [f64; 9];

/// Feature column labels in model order.
pub const FEATURE_COLUMNS: [&str; 9] = [
    "Depth (m)",
    "P (MPa)",
    "T (°C)",
    "CO2 Density (kg/m3)",
    "Storage Capacity (Mt)",
    "Fault",
    "Seal Thickness (m)",
    "Reservoir Thickness (m)",
    "Stacked",
];

impl FormationRecord {
    /// Projects the record onto the classifier's fixed feature order.
    pub fn feature_vector(&self) -> FeatureVector {
        [
            self.depth_m,
            self.pressure_mpa,
            self.temperature_c,
            self.co2_density_kg_m3,
            self.storage_capacity_mt,
            f64::from(self.fault),
            self.seal_thickness_m,
            self.reservoir_thickness_m,
            f64::from(self.stacked),
        ]
    }
}

/// Yes/No input control state for the fault and stacked flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Toggle {
    Yes,
    No,
}

impl Toggle {
    /// 0/1 encoding used by the record schema; an unset control encodes to 0.
    pub fn encode(flag: Option<Toggle>) -> u8 {
        match flag {
            Some(Toggle::Yes) => 1,
            Some(Toggle::No) | None => 0,
        }
    }
}

/// Security band over the classifier score. Thresholds are inclusive on the
/// low edge: 0.90 is Secure, 0.50 is Moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityBand {
    Secure,
    Moderate,
    Insecure,
}

impl SecurityBand {
    pub fn classify(score: f64) -> SecurityBand {
        if score >= 0.9 {
            SecurityBand::Secure
        } else if score >= 0.5 {
            SecurityBand::Moderate
        } else {
            SecurityBand::Insecure
        }
    }

    /// Map color for the scatter layer.
    pub fn color(self) -> [u8; 3] {
        match self {
            SecurityBand::Secure => [0, 200, 0],
            SecurityBand::Moderate => [255, 165, 0],
            SecurityBand::Insecure => [200, 0, 0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_vector_follows_model_order() {
        let rec = FormationRecord {
            name: "Utsira".to_string(),
            depth_m: 1012.0,
            pressure_mpa: 10.3,
            temperature_c: 37.0,
            co2_density_kg_m3: 700.0,
            storage_capacity_mt: 4200.0,
            fault: 1,
            seal_thickness_m: 250.0,
            reservoir_thickness_m: 50.0,
            stacked: 0,
            longitude: 2.82,
            latitude: 58.36,
            security: None,
        };
        let x = rec.feature_vector();
        assert_eq!(x[0], 1012.0);
        assert_eq!(x[4], 4200.0);
        assert_eq!(x[5], 1.0);
        assert_eq!(x[8], 0.0);
    }

    #[test]
    fn toggle_encoding() {
        assert_eq!(Toggle::encode(Some(Toggle::Yes)), 1);
        assert_eq!(Toggle::encode(Some(Toggle::No)), 0);
        assert_eq!(Toggle::encode(None), 0);
    }

    #[test]
    fn band_boundaries_are_inclusive_low() {
        assert_eq!(SecurityBand::classify(0.95), SecurityBand::Secure);
        assert_eq!(SecurityBand::classify(0.9), SecurityBand::Secure);
        assert_eq!(SecurityBand::classify(0.89), SecurityBand::Moderate);
        assert_eq!(SecurityBand::classify(0.5), SecurityBand::Moderate);
        assert_eq!(SecurityBand::classify(0.49), SecurityBand::Insecure);
        assert_eq!(SecurityBand::classify(0.0), SecurityBand::Insecure);
    }

    #[test]
    fn band_colors() {
        assert_eq!(SecurityBand::Secure.color(), [0, 200, 0]);
        assert_eq!(SecurityBand::Moderate.color(), [255, 165, 0]);
        assert_eq!(SecurityBand::Insecure.color(), [200, 0, 0]);
    }

    #[test]
    fn defaulted_record_is_all_zero() {
        let rec = FormationRecord::default();
        assert_eq!(rec.name, "");
        assert_eq!(rec.depth_m, 0.0);
        assert_eq!(rec.fault, 0);
        assert!(rec.security.is_none());
    }
}
