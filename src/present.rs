use serde::Serialize;

use crate::schema::SecurityBand;
use crate::store::FormationStore;

/// Radius multiplier for the scatter layer; scores are in [0,1] and map
/// radii are in meters.
const RADIUS_SCALE: f64 = 100_000.0;

pub const NO_FORMATIONS_MSG: &str =
    "No formations added yet. Add formations before running a security assessment.";
pub const NO_SCORES_MSG: &str =
    "No formations with security scores to visualize. Run a security assessment first.";

/// The three headline figures shown for a selected formation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    pub security: Option<f64>,
    pub storage_capacity_mt: f64,
    pub seal_thickness_m: f64,
}

/// First-match metrics for a selector choice; `None` when the name is not in
/// the store.
pub fn metrics_for(store: &FormationStore, name: &str) -> Option<SummaryMetrics> {
    store.select_by_name(name).map(|r| SummaryMetrics {
        security: r.security,
        storage_capacity_mt: r.storage_capacity_mt,
        seal_thickness_m: r.seal_thickness_m,
    })
}

/// One plotted formation: position, band color, score-scaled radius, and the
/// hover text a deck-style renderer interpolates.
#[derive(Debug, Clone, Serialize)]
pub struct MapPoint {
    pub position: [f64; 2],
    pub color: [u8; 3],
    pub radius: f64,
    pub tooltip: String,
}

/// Initial camera for the scatter layer, centered on the mean coordinate.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub pitch: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapLayer {
    pub view: MapView,
    pub points: Vec<MapPoint>,
}

/// Builds the scatter layer from every scored record. Returns `None` when
/// the store is empty or no record has been scored yet; callers show the
/// matching placeholder message instead.
pub fn build_map_layer(store: &FormationStore) -> Option<MapLayer> {
    let scored: Vec<_> = store
        .records()
        .iter()
        .filter_map(|r| r.security.map(|s| (r, s)))
        .collect();
    if scored.is_empty() {
        return None;
    }

    let n = scored.len() as f64;
    let latitude = scored.iter().map(|(r, _)| r.latitude).sum::<f64>() / n;
    let longitude = scored.iter().map(|(r, _)| r.longitude).sum::<f64>() / n;

    let points = scored
        .into_iter()
        .map(|(r, security)| MapPoint {
            position: [r.longitude, r.latitude],
            color: SecurityBand::classify(security).color(),
            radius: security * RADIUS_SCALE,
            tooltip: format!(
                "{}\nSecurity: {}%\nStorage Capacity: {:.2} Mt",
                r.name,
                (security * 100.0).round() as i64,
                r.storage_capacity_mt
            ),
        })
        .collect();

    Some(MapLayer {
        view: MapView {
            latitude,
            longitude,
            zoom: 3,
            pitch: 30,
        },
        points,
    })
}

/// Plain-text table of the working set, fixed column order, one comma-joined
/// line per record. Security prints empty until scored.
pub fn render_table(store: &FormationStore) -> String {
    let mut out = String::from(
        "Name,Depth (m),P (MPa),T (°C),CO2 Density (kg/m3),Storage Capacity (Mt),\
         Fault,Seal Thickness (m),Reservoir Thickness (m),Stacked,Longitude,Latitude,Security\n",
    );
    for r in store.records() {
        let security = r
            .security
            .map(|s| format!("{s:.2}"))
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{},{:.2},{:.2},{},{:.4},{:.4},{}\n",
            r.name,
            r.depth_m,
            r.pressure_mpa,
            r.temperature_c,
            r.co2_density_kg_m3,
            r.storage_capacity_mt,
            r.fault,
            r.seal_thickness_m,
            r.reservoir_thickness_m,
            r.stacked,
            r.longitude,
            r.latitude,
            security,
        ));
    }
    out
}
