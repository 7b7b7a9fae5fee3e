use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::schema::FormationRecord;

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("cannot read upload: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv parse failed: {0}")]
    Parse(#[from] csv::Error),
}

/// Reads a whole uploaded table. Headers must match the fixed record schema;
/// any parse or header failure propagates to the caller unrecovered. The
/// Security column is optional and usually absent in uploads.
pub fn read_formations<R: Read>(reader: R) -> Result<Vec<FormationRecord>, CsvError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// File-path convenience for the CLI upload path.
pub fn read_formations_path(path: &Path) -> Result<Vec<FormationRecord>, CsvError> {
    let file = File::open(path)?;
    read_formations(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name,Depth (m),P (MPa),T (°C),CO2 Density (kg/m3),\
Storage Capacity (Mt),Fault,Seal Thickness (m),Reservoir Thickness (m),\
Stacked,Longitude,Latitude";

    #[test]
    fn parses_schema_matching_table() {
        let data = format!(
            "{HEADER}\n\
             Utsira,1012,10.3,37,700,4200,0,250,50,0,2.82,58.36\n\
             \"St. Johns, Dome\",600,5.2,25,450,120,1,80,30,1,-109.4,34.5\n"
        );
        let records = read_formations(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Utsira");
        assert_eq!(records[0].depth_m, 1012.0);
        assert!(records[0].security.is_none());
        assert_eq!(records[1].name, "St. Johns, Dome");
        assert_eq!(records[1].fault, 1);
        assert_eq!(records[1].stacked, 1);
    }

    #[test]
    fn security_column_roundtrips_when_present() {
        let data = format!("{HEADER},Security\nA,1,1,1,1,1,0,1,1,0,0,0,0.88\n");
        let records = read_formations(data.as_bytes()).unwrap();
        assert_eq!(records[0].security, Some(0.88));
    }

    #[test]
    fn header_mismatch_is_an_error() {
        let data = "Name,Depth\nA,1000\n";
        assert!(matches!(
            read_formations(data.as_bytes()),
            Err(CsvError::Parse(_))
        ));
    }

    #[test]
    fn non_numeric_cell_is_an_error() {
        let data = format!("{HEADER}\nA,deep,1,1,1,1,0,1,1,0,0,0\n");
        assert!(read_formations(data.as_bytes()).is_err());
    }

    #[test]
    fn empty_table_parses_to_empty_vec() {
        let data = format!("{HEADER}\n");
        let records = read_formations(data.as_bytes()).unwrap();
        assert!(records.is_empty());
    }
}
