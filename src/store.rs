use crate::schema::FormationRecord;

/// Ordered, append-only working set of formation records. Created empty at
/// session start; the only bulk mutation is a wholesale override from an
/// uploaded table. Individual rows are never edited or deleted.
#[derive(Debug, Clone, Default)]
pub struct FormationStore {
    records: Vec<FormationRecord>,
}

impl FormationStore {
    pub fn new() -> Self {
        FormationStore::default()
    }

    /// Appends one record. Duplicate names are allowed.
    pub fn append(&mut self, record: FormationRecord) {
        self.records.push(record);
    }

    /// Discards the current collection and substitutes an externally
    /// supplied table. The substitute is trusted to match the fixed schema;
    /// a mismatch surfaces later as a scoring failure.
    pub fn replace_all(&mut self, records: Vec<FormationRecord>) {
        self.records = records;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FormationRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [FormationRecord] {
        &mut self.records
    }

    /// Selector options, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// First record with the given name. With duplicate names the first
    /// insertion wins; callers must not rely on anything stronger.
    pub fn select_by_name(&self, name: &str) -> Option<&FormationRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// True once at least one record carries a security score.
    pub fn has_scores(&self) -> bool {
        self.records.iter().any(|r| r.security.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionInputs;

    fn named(name: &str, depth_m: f64) -> FormationRecord {
        FormationRecord {
            name: name.to_string(),
            depth_m,
            ..FormationRecord::default()
        }
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = FormationStore::new();
        store.append(named("A", 800.0));

        let mut session = SessionInputs::default();
        session.reservoir_name = "B".to_string();
        session.depth_m = 1200.0;
        store.append(session.snapshot_record());

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "A");
        assert_eq!(store.records()[1].name, "B");
        assert_eq!(store.records()[1].depth_m, 1200.0);
    }

    #[test]
    fn replace_all_with_empty_table_empties_the_store() {
        let mut store = FormationStore::new();
        store.append(named("A", 800.0));
        store.replace_all(Vec::new());
        assert!(store.is_empty());
        assert!(!store.has_scores());
    }

    #[test]
    fn replace_all_discards_previous_records() {
        let mut store = FormationStore::new();
        store.append(named("A", 800.0));
        store.replace_all(vec![named("C", 950.0), named("D", 1100.0)]);
        assert_eq!(store.names(), vec!["C", "D"]);
    }

    #[test]
    fn duplicate_name_selection_returns_first_match() {
        let mut store = FormationStore::new();
        store.append(named("X", 700.0));
        store.append(named("X", 1400.0));
        let row = store.select_by_name("X").unwrap();
        assert_eq!(row.depth_m, 700.0);
    }

    #[test]
    fn select_missing_name_is_none() {
        let store = FormationStore::new();
        assert!(store.select_by_name("nowhere").is_none());
    }
}
