use crate::schema::{FormationRecord, Toggle};

/// Volumetric capacity estimate in megatonnes.
///
/// capacity_Mt = area * thickness * (porosity/100) * rho_CO2 * (eff/100) / 1e6
///
/// Porosity and efficiency arrive as percentages in [0,100]. Any zero factor
/// yields zero capacity; this is a valid estimate, not an error.
pub fn storage_capacity_mt(
    area_m2: f64,
    thickness_m: f64,
    porosity_pct: f64,
    co2_density_kg_m3: f64,
    eff_factor_pct: f64,
) -> f64 {
    area_m2 * thickness_m * (porosity_pct / 100.0) * co2_density_kg_m3 * (eff_factor_pct / 100.0)
        / 1e6
}

/// Current values of every input panel, one field per control. This is the
/// only mutable session state outside the formation store; records are built
/// from it by value, so later edits never reach rows already stored.
///
/// CO₂ density and reservoir thickness are collected twice (once with the
/// capacity parameters, once with the injectivity parameters); the
/// injectivity-panel values are optional overrides resolved by
/// [`SessionInputs::resolved_co2_density`] and
/// [`SessionInputs::resolved_reservoir_thickness`].
#[derive(Debug, Clone, Default)]
pub struct SessionInputs {
    // General
    pub reservoir_name: String,
    pub location: String,
    pub longitude: f64,
    pub latitude: f64,

    // Storage capacity
    pub storage_capacity_mt: f64,
    pub area_m2: f64,
    pub thickness_m: f64,
    pub porosity_pct: f64,
    pub co2_density_kg_m3: f64,
    pub eff_factor_pct: f64,

    // Injectivity
    pub pressure_mpa: f64,
    pub temperature_c: f64,
    pub depth_m: f64,
    pub co2_density_override: Option<f64>,
    pub reservoir_thickness_override: Option<f64>,

    // Seal integrity
    pub seal_thickness_m: f64,
    pub faulted: Option<Toggle>,
    pub stacked: Option<Toggle>,
}

impl SessionInputs {
    /// Injectivity-panel density wins over the capacity-panel one.
    pub fn resolved_co2_density(&self) -> f64 {
        self.co2_density_override.unwrap_or(self.co2_density_kg_m3)
    }

    /// Injectivity-panel thickness wins over the capacity-panel one.
    pub fn resolved_reservoir_thickness(&self) -> f64 {
        self.reservoir_thickness_override.unwrap_or(self.thickness_m)
    }

    /// Recomputes the capacity field from the reservoir parameters,
    /// overwriting any directly entered value. Runs only on explicit user
    /// action, never on ordinary input edits.
    pub fn calculate_capacity(&mut self) {
        self.storage_capacity_mt = storage_capacity_mt(
            self.area_m2,
            self.thickness_m,
            self.porosity_pct,
            self.co2_density_kg_m3,
            self.eff_factor_pct,
        );
    }

    /// Freezes the current panel values into one formation record. Unset
    /// toggles encode to 0 and the override precedence above applies; the
    /// security score starts absent.
    pub fn snapshot_record(&self) -> FormationRecord {
        FormationRecord {
            name: self.reservoir_name.clone(),
            depth_m: self.depth_m,
            pressure_mpa: self.pressure_mpa,
            temperature_c: self.temperature_c,
            co2_density_kg_m3: self.resolved_co2_density(),
            storage_capacity_mt: self.storage_capacity_mt,
            fault: Toggle::encode(self.faulted),
            seal_thickness_m: self.seal_thickness_m,
            reservoir_thickness_m: self.resolved_reservoir_thickness(),
            stacked: Toggle::encode(self.stacked),
            longitude: self.longitude,
            latitude: self.latitude,
            security: None,
        }
    }
}
