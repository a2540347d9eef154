//! Integration tests for the tabular library
//!
//! These tests verify end-to-end loading from files on disk and the
//! behavior a training loop relies on.

use approx::assert_relative_eq;
use std::io::Write;
use tabular::api::{quick, DatasetLoader};
use tabular::{CSVDataset, Dataset, DatasetError, LabelColumn, LoadOptions};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    write!(temp_file, "{}", contents).expect("Failed to write");
    temp_file.flush().expect("Failed to flush");
    temp_file
}

/// N rows of M fields report N and M
#[test]
fn test_row_and_column_counts() {
    for (n, m) in [(1, 1), (3, 3), (10, 4), (250, 13)] {
        let mut contents = String::new();
        for r in 0..n {
            let fields: Vec<String> = (0..m).map(|c| format!("{}", r * m + c)).collect();
            contents.push_str(&fields.join(","));
            contents.push('\n');
        }
        let temp_file = write_temp(&contents);

        let dataset = CSVDataset::from_file(temp_file.path()).expect("Failed to load dataset");
        assert_eq!(dataset.row_count(), n, "rows for {n}x{m}");
        assert_eq!(dataset.column_count().unwrap(), m, "columns for {n}x{m}");
    }
}

/// The literal three-line file keeps its first line as data
#[test]
fn test_no_header_skip() {
    let temp_file = write_temp("a,b,c\n1,2,3\n4,5,6\n");
    let dataset = CSVDataset::from_file(temp_file.path()).unwrap();

    assert_eq!(dataset.row_count(), 3);
    assert_eq!(dataset.column_count().unwrap(), 3);
    assert_eq!(dataset.row(0).unwrap(), &vec!["a", "b", "c"]);
    assert_eq!(dataset.row(2).unwrap(), &vec!["4", "5", "6"]);
}

#[test]
fn test_embedded_commas_stay_in_one_field() {
    let temp_file = write_temp("6,\"Charizard, Mega X\",Fire\n");
    let dataset = CSVDataset::from_file(temp_file.path()).unwrap();

    assert_eq!(dataset.column_count().unwrap(), 3);
    assert_eq!(dataset.row(0).unwrap()[1], "Charizard, Mega X");
}

#[test]
fn test_missing_file() {
    let result = CSVDataset::from_file("/definitely/not/here.csv");
    assert!(matches!(result, Err(DatasetError::FileNotFound { .. })));
}

#[test]
fn test_empty_file_policy() {
    let temp_file = write_temp("");

    let result = CSVDataset::from_file(temp_file.path());
    assert!(matches!(result, Err(DatasetError::EmptyDataset)));

    let dataset = DatasetLoader::new()
        .with_allow_empty(true)
        .load(temp_file.path())
        .unwrap();
    assert_eq!(dataset.row_count(), 0);
    assert!(matches!(
        dataset.column_count(),
        Err(DatasetError::IndexOutOfRange { .. })
    ));
}

/// File can be removed right after loading, so the handle is not held
#[test]
fn test_file_released_after_load() {
    let temp_file = write_temp("1,2\n3,4\n");
    let path = temp_file.path().to_path_buf();

    let dataset = CSVDataset::from_file(&path).unwrap();
    temp_file.close().expect("Failed to remove temp file");

    assert!(!path.exists());
    assert_eq!(dataset.row_count(), 2);
}

/// Workflow: load -> split -> parse numeric features for a training loop
#[test]
fn test_training_loop_workflow() {
    let temp_file = write_temp(
        "#,Name,Total,HP,Attack,Legendary\n\
         1,Bulbasaur,318,45,49,0\n\
         4,Charmander,309,39,52,0\n\
         150,Mewtwo,680,106,110,1\n",
    );

    let dataset = DatasetLoader::new()
        .with_header(true)
        .with_label_column(LabelColumn::Last)
        .load(temp_file.path())
        .expect("Failed to load dataset");

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.headers().unwrap()[1], "Name");

    let mut legendary = 0;
    for i in 0..dataset.len() {
        let sample = dataset.get_sample(i).unwrap();
        assert_eq!(sample.n_features(), 5);

        // Name is not numeric, so parse only the stat columns
        let stats: Vec<f64> = sample.features[2..]
            .iter()
            .map(|f| f.parse::<f64>().unwrap())
            .collect();
        assert_eq!(stats.len(), 3);

        legendary += sample.parse_label::<u32>().unwrap();
    }
    assert_eq!(legendary, 1);

    let mewtwo = dataset.get(2).unwrap();
    assert!(mewtwo.parse_features::<f64>().is_err());
    assert_relative_eq!(mewtwo.features[3].parse::<f64>().unwrap(), 106.0);
}

#[test]
fn test_quick_load_labeled() {
    let temp_file = write_temp("0.5,1.5,1\n-0.5,-1.5,0\n");
    let dataset = quick::load_labeled_csv(temp_file.path(), false).unwrap();

    let sample = dataset.get(1).unwrap();
    let features: Vec<f64> = sample.parse_features().unwrap();
    assert_relative_eq!(features[0], -0.5);
    assert_relative_eq!(features[1], -1.5);
    assert_eq!(sample.label, "0");
}

#[test]
fn test_options_struct_directly() {
    let temp_file = write_temp("x|y\n1|2\n");
    let options = LoadOptions {
        delimiter: b'|',
        has_header: true,
        label_column: Some(LabelColumn::First),
        ..LoadOptions::default()
    };

    let dataset = CSVDataset::from_file_with_options(temp_file.path(), options).unwrap();
    assert_eq!(dataset.row_count(), 1);
    assert_eq!(dataset.get(0).unwrap().label, "1");
    assert_eq!(dataset.summary().source.as_deref(), Some(temp_file.path()));
}
