use std::collections::HashMap;

use approx::assert_relative_eq;
use cad_equations_rs::{EquationError, EquationSlots, EquationStore};

/// Host double that records every write.
struct RecordingHost {
    slots: Vec<String>,
    writes: Vec<(usize, String)>,
}

impl RecordingHost {
    fn new(texts: &[&str]) -> Self {
        RecordingHost {
            slots: texts.iter().map(|text| text.to_string()).collect(),
            writes: Vec::new(),
        }
    }
}

impl EquationSlots for RecordingHost {
    fn count(&self) -> usize {
        self.slots.len()
    }

    fn text(&self, index: usize) -> String {
        self.slots[index].clone()
    }

    fn set_text(&mut self, index: usize, text: String) {
        self.writes.push((index, text.clone()));
        self.slots[index] = text;
    }
}

#[test]
fn get_all_keeps_raw_value_text() {
    let mut host = RecordingHost::new(&["\"D1\" = 5mm", "\"D2\" = 2in"]);
    let store = EquationStore::new(&mut host);
    let expected = HashMap::from([
        ("D1".to_string(), "5mm".to_string()),
        ("D2".to_string(), "2in".to_string()),
    ]);
    assert_eq!(store.get_all(), Ok(expected));
}

#[test]
fn get_all_fails_on_slot_without_separator() {
    let mut host = RecordingHost::new(&["\"D1\" = 5mm", "\"D2\" 2in"]);
    let store = EquationStore::new(&mut host);
    assert_eq!(
        store.get_all(),
        Err(EquationError::MissingSeparator("\"D2\" 2in".to_string()))
    );
    assert!(store.get_one("D1").is_err());
}

#[test]
fn get_one_returns_none_for_unknown_name() {
    let mut host = RecordingHost::new(&["\"D1\" = 5mm"]);
    let store = EquationStore::new(&mut host);
    assert_eq!(store.get_one("D1"), Ok(Some("5mm".to_string())));
    assert_eq!(store.get_one("D9"), Ok(None));
}

#[test]
fn set_one_rewrites_numeral_and_keeps_unit() {
    let mut host = RecordingHost::new(&["\"D1\" = 5mm", "\"D2\" = 2in"]);
    let mut store = EquationStore::new(&mut host);
    assert_eq!(store.set_one("D2", 10.0), Ok(true));
    assert_eq!(host.slots, vec!["\"D1\" = 5mm", "\"D2\" = 10in"]);
    assert_eq!(host.writes, vec![(1, "\"D2\" = 10in".to_string())]);
}

#[test]
fn set_one_keeps_name_containing_old_numeral() {
    let mut host = RecordingHost::new(&["\"D2\" = 2in"]);
    let mut store = EquationStore::new(&mut host);
    assert_eq!(store.set_one("D2", 10.0), Ok(true));
    assert_eq!(host.slots, vec!["\"D2\" = 10in"]);
}

#[test]
fn set_one_non_finite_value_does_not_write() {
    let mut host = RecordingHost::new(&["\"D1\" = 5mm"]);
    let mut store = EquationStore::new(&mut host);
    assert!(store.set_one("D1", f64::NAN).is_err());
    assert!(store.set_one("D1", f64::NEG_INFINITY).is_err());
    assert!(host.writes.is_empty());
}

#[test]
fn set_one_unknown_name_does_not_write() {
    let mut host = RecordingHost::new(&["\"D1\" = 5mm", "\"D2\" = 2in"]);
    let mut store = EquationStore::new(&mut host);
    assert_eq!(store.set_one("D9", 1.0), Ok(false));
    assert!(host.writes.is_empty());
}

#[test]
fn set_one_replaces_every_occurrence_of_the_old_value() {
    // The old value text also appears in the name, so the name is rewritten as well.
    let mut host = RecordingHost::new(&["\"A5mm\" = 5mm"]);
    let mut store = EquationStore::new(&mut host);
    assert_eq!(store.set_one("A5mm", 7.0), Ok(true));
    assert_eq!(host.slots, vec!["\"A7mm\" = 7mm"]);
}

#[test]
fn equations_are_converted_to_si() {
    let mut host = RecordingHost::new(&["\"D1\" = 5mm", "\"A1\" = 180deg", "\"D1\" = 1cm"]);
    let store = EquationStore::new(&mut host);
    let equations = store.equations().unwrap();
    assert_eq!(equations.len(), 3);
    assert_relative_eq!(equations[1].value_si(), std::f64::consts::PI);
    let last = store.equation("D1").unwrap().unwrap();
    assert_relative_eq!(last.value_si(), 0.01);
    assert_eq!(store.equation("D9"), Ok(None));
}

#[test]
fn equations_fail_on_any_bad_slot() {
    let mut host = RecordingHost::new(&["\"D1\" = 5mm", "\"D2\" = 2undefined"]);
    let store = EquationStore::new(&mut host);
    assert_eq!(
        store.equations(),
        Err(EquationError::UnsupportedUnit("undefined".to_string()))
    );
}
