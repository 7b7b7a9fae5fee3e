#![forbid(unsafe_code)]

//! Long-term CO₂ storage security assessment over formation records.
//!
//! The crate keeps a session-scoped table of candidate storage formations,
//! derives volumetric storage capacity from reservoir parameters, and scores
//! each formation's 10,000-year containment security through a pre-trained
//! classifier reached via the [`scorer::SecurityModel`] trait. Presentation
//! helpers turn the scored table into summary metrics and a geospatial
//! scatter layer; rendering itself is left to the consumer.

pub mod csv_io;
pub mod present;
pub mod schema;
pub mod scorer;
pub mod session;
pub mod store;

pub use schema::{FeatureVector, FormationRecord, SecurityBand, Toggle};
pub use scorer::{score_store, LogisticSurrogate, ScoreError, SecurityModel};
pub use session::{storage_capacity_mt, SessionInputs};
pub use store::FormationStore;
