use ndarray::array;

use crate::config::SubMode;
use crate::solver::{EpochRecord, History};

fn record(epoch: usize, w: Option<ndarray::Array1<f64>>) -> EpochRecord {
    EpochRecord {
        epoch,
        time: epoch as f64 * 0.5,
        grad_calc_count: epoch as u64 * 9,
        cost: 10.0 / (epoch as f64 + 1.0),
        optgap: 5.0 / (epoch as f64 + 1.0),
        w,
    }
}

#[test]
fn test_history_appends_parallel_sequences() {
    let mut history = History::new();
    assert!(history.is_empty());

    for epoch in 0..4 {
        history.push(record(epoch, None));
    }

    assert_eq!(history.len(), 4);
    assert_eq!(history.epoch(), &[0, 1, 2, 3]);
    assert_eq!(history.time(), &[0.0, 0.5, 1.0, 1.5]);
    assert_eq!(history.grad_calc_count(), &[0, 9, 18, 27]);
    assert_eq!(history.cost().len(), 4);
    assert_eq!(history.optgap().len(), 4);
    assert!(history.w().is_empty());
}

#[test]
fn test_history_push_keeps_earlier_records() {
    let mut history = History::new();
    history.push(record(0, None));
    let first = history.get(0).unwrap();

    history.push(record(1, None));
    history.push(record(2, None));
    assert_eq!(history.get(0).unwrap(), first);
    assert_eq!(history.last().unwrap().epoch, 2);
    assert!(history.get(3).is_none());
}

#[test]
fn test_history_records_iterate_in_epoch_order() {
    let mut history = History::new();
    for epoch in 0..3 {
        history.push(record(epoch, Some(array![epoch as f64, -(epoch as f64)])));
    }

    let records: Vec<EpochRecord> = history.records().collect();
    assert_eq!(records.len(), 3);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(r, &record(i, Some(array![i as f64, -(i as f64)])));
    }
    assert_eq!(history.w().len(), 3);
}

#[test]
fn test_history_to_json() {
    let mut history = History::new();
    history.push(record(0, None));
    history.push(EpochRecord {
        optgap: f64::INFINITY,
        ..record(1, None)
    });

    let json = history.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["epoch"], serde_json::json!([0, 1]));
    assert_eq!(value["grad_calc_count"], serde_json::json!([0, 9]));
    assert!(value["optgap"][1].is_null());
    assert!(value.get("w").is_none());
}

#[test]
fn test_epoch_record_summary() {
    let r = EpochRecord {
        epoch: 3,
        time: 0.0,
        grad_calc_count: 0,
        cost: 0.25,
        optgap: 1e-3,
        w: None,
    };
    assert_eq!(
        r.summary(SubMode::Adam),
        "Adam: Epoch = 003, cost = 2.5000000000000000e-1, optgap = 1.0000e-3"
    );
    assert!(r.summary(SubMode::AdaMax).starts_with("AdaMax: Epoch = 003"));
}
