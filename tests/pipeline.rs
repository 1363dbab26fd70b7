//! End-to-end pipeline: raw CSV on disk through partitioning,
//! standardization and windowing.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roadflow::{DatasetConfig, Partition, Standardizer, TrafficDataset};
use std::path::PathBuf;

const DAY_SLOT: usize = 12;
const N_ROUTE: usize = 3;
const N_DAYS: usize = 4;

fn write_series_csv(name: &str) -> Result<PathBuf> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = StdRng::seed_from_u64(42);
    let mut contents = String::new();

    for _ in 0..N_DAYS * DAY_SLOT {
        let row: Vec<String> = (0..N_ROUTE)
            .map(|_| format!("{:.4}", rng.gen_range(20.0..70.0)))
            .collect();
        contents.push_str(&row.join(","));
        contents.push('\n');
    }

    let path = std::env::temp_dir().join(format!("roadflow-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents)?;
    Ok(path)
}

fn config(data_path: PathBuf) -> DatasetConfig {
    DatasetConfig {
        data_path,
        n_route: N_ROUTE,
        day_slot: DAY_SLOT,
        n_his: 4,
        n_pred: 2,
        aux_step: 2,
        n_train: 2,
        n_val: 1,
        standardize: true,
    }
}

#[test]
fn test_full_pipeline_partition_lengths_and_shapes() -> Result<()> {
    let path = write_series_csv("pipeline.csv")?;
    let cfg = config(path.clone());
    let scaler = Standardizer::shared();

    let train = TrafficDataset::from_csv(&cfg, Partition::Train, &scaler)?;
    let val = TrafficDataset::from_csv(&cfg, Partition::Validation, &scaler)?;
    let test = TrafficDataset::from_csv(&cfg, Partition::Test, &scaler)?;

    // Train: 2 days * (12 - 4 - 2 - 2 + 2) windows; eval: 12 - 4 - 2 + 1
    assert_eq!(train.len(), 12);
    assert_eq!(val.len(), 7);
    assert_eq!(test.len(), 7);

    let (x, y) = train.get(0).expect("train dataset is non-empty");
    assert_eq!(x.shape(), &[N_ROUTE, 4, 1]);
    assert_eq!(y.shape(), &[N_ROUTE, 3, 1]);

    let (x, y) = val.get(0).expect("validation dataset is non-empty");
    assert_eq!(x.shape(), &[N_ROUTE, 4, 1]);
    assert_eq!(y.shape(), &[N_ROUTE, 2, 1]);

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_pipeline_is_deterministic() -> Result<()> {
    let path = write_series_csv("determinism.csv")?;
    let cfg = config(path.clone());

    let scaler_a = Standardizer::shared();
    let train_a = TrafficDataset::from_csv(&cfg, Partition::Train, &scaler_a)?;
    let val_a = TrafficDataset::from_csv(&cfg, Partition::Validation, &scaler_a)?;

    let scaler_b = Standardizer::shared();
    let train_b = TrafficDataset::from_csv(&cfg, Partition::Train, &scaler_b)?;
    let val_b = TrafficDataset::from_csv(&cfg, Partition::Validation, &scaler_b)?;

    assert_eq!(train_a.inputs(), train_b.inputs());
    assert_eq!(train_a.targets(), train_b.targets());
    assert_eq!(val_a.inputs(), val_b.inputs());
    assert_eq!(val_a.targets(), val_b.targets());

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_standardized_training_inputs_round_trip() -> Result<()> {
    let path = write_series_csv("roundtrip.csv")?;
    let cfg = config(path.clone());
    let scaler = Standardizer::shared();

    let train = TrafficDataset::from_csv(&cfg, Partition::Train, &scaler)?;
    let raw = roadflow::CsvConnector::load_series(&path)?;

    // First training input window covers raw rows [0, n_his)
    let (x, _) = train.get(0).expect("train dataset is non-empty");
    let guard = scaler.read().unwrap();
    for sensor in 0..N_ROUTE {
        for step in 0..cfg.n_his {
            let standardized = x[[sensor, step, 0]];
            let restored = standardized * guard.scale()[sensor] + guard.mean()[sensor];
            assert!((restored - raw[[step, sensor]]).abs() < 1e-9);
        }
    }

    std::fs::remove_file(path).ok();
    Ok(())
}

#[test]
fn test_iteration_matches_indexed_access() -> Result<()> {
    let path = write_series_csv("iter.csv")?;
    let cfg = config(path.clone());
    let scaler = Standardizer::shared();

    let train = TrafficDataset::from_csv(&cfg, Partition::Train, &scaler)?;

    let mut count = 0;
    for (i, (x, y)) in train.iter().enumerate() {
        let (xi, yi) = train.get(i).expect("index within bounds");
        assert_eq!(x, xi);
        assert_eq!(y, yi);
        count += 1;
    }
    assert_eq!(count, train.len());

    std::fs::remove_file(path).ok();
    Ok(())
}
