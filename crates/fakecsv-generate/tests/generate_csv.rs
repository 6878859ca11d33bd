use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use fakecsv_generate::{GenerateOptions, GenerationEngine, GenerationError, GenerationRequest};

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("fakecsv_generate_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

fn engine_for(out_dir: &Path) -> GenerationEngine {
    GenerationEngine::new(GenerateOptions {
        out_dir: out_dir.to_path_buf(),
    })
}

fn hash_file(path: &Path) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0_u8; 8192];
    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn read_records(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .expect("open csv");
    reader
        .records()
        .map(|record| {
            record
                .expect("csv record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

#[test]
fn default_request_writes_header_and_one_row() {
    let out_dir = temp_out_dir("default");
    let request = GenerationRequest::new(1, "name,age", "output.csv", 1).expect("valid request");

    let result = engine_for(&out_dir).run(&request).expect("run generation");

    assert_eq!(result.path, out_dir.join("output.csv"));
    let records = read_records(&result.path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], vec!["name", "age"]);

    let age: i64 = records[1][1].parse().expect("age is an integer");
    assert!((18..=99).contains(&age));
    assert!(records[1][0].contains(' '));
}

#[test]
fn two_rows_have_independent_values() {
    let out_dir = temp_out_dir("two_rows");
    let request = GenerationRequest::new(2, "name,age", "output.csv", 1).expect("valid request");

    let result = engine_for(&out_dir).run(&request).expect("run generation");

    let records = read_records(&result.path);
    assert_eq!(records.len(), 3);
    assert_eq!(result.report.rows_requested, 2);
    assert_eq!(result.report.rows_written, 2);
    for record in &records[1..] {
        let age: i64 = record[1].parse().expect("age is an integer");
        assert!((18..=99).contains(&age));
    }
}

#[test]
fn row_count_matches_request() {
    let out_dir = temp_out_dir("row_count");
    let request =
        GenerationRequest::new(250, "city,jobTitle", "many.csv", 9).expect("valid request");

    let result = engine_for(&out_dir).run(&request).expect("run generation");

    assert_eq!(read_records(&result.path).len(), 251);
    assert_eq!(result.report.rows_written, 250);
    assert_eq!(
        result.report.bytes_written,
        fs::metadata(&result.path).expect("metadata").len()
    );
}

#[test]
fn header_is_field_list_verbatim_with_duplicates() {
    let out_dir = temp_out_dir("header");
    let fields = "email,age,email,city,age";
    let request = GenerationRequest::new(3, fields, "dupes.csv", 4).expect("valid request");

    let result = engine_for(&out_dir).run(&request).expect("run generation");

    let records = read_records(&result.path);
    assert_eq!(records[0], vec!["email", "age", "email", "city", "age"]);
    for record in &records[1..] {
        assert_eq!(record.len(), 5);
        assert_eq!(record[0], record[2], "identity duplicates must match");
    }
}

#[test]
fn same_seed_is_byte_identical() {
    let fields = "name,age,email,firstName,lastName,middleName,city,jobTitle";
    let request = GenerationRequest::new(100, fields, "seeded.csv", 42).expect("valid request");

    let result_a = engine_for(&temp_out_dir("seed_a"))
        .run(&request)
        .expect("run generation A");
    let result_b = engine_for(&temp_out_dir("seed_b"))
        .run(&request)
        .expect("run generation B");

    assert_eq!(
        hash_file(&result_a.path).expect("hash A"),
        hash_file(&result_b.path).expect("hash B"),
        "same seed should produce identical files"
    );
}

#[test]
fn different_seeds_differ() {
    let request_a = GenerationRequest::new(20, "name,email", "a.csv", 1).expect("valid request");
    let request_b = GenerationRequest::new(20, "name,email", "b.csv", 2).expect("valid request");
    let out_dir = temp_out_dir("seeds");
    let engine = engine_for(&out_dir);

    let result_a = engine.run(&request_a).expect("run A");
    let result_b = engine.run(&request_b).expect("run B");

    assert_ne!(read_records(&result_a.path), read_records(&result_b.path));
}

#[test]
fn identity_fields_agree_within_a_row() {
    let out_dir = temp_out_dir("identity");
    let request = GenerationRequest::new(200, "name,firstName,lastName,email", "people.csv", 5)
        .expect("valid request");

    let result = engine_for(&out_dir).run(&request).expect("run generation");

    for record in &read_records(&result.path)[1..] {
        let (name, first, last, email) = (&record[0], &record[1], &record[2], &record[3]);
        assert_eq!(name, &format!("{first} {last}"));
        let (local, domain) = email.split_once('@').expect("email has @");
        assert_eq!(
            local,
            format!("{}.{}", first.to_lowercase(), last.to_lowercase())
        );
        assert!(domain.contains('.'));
    }
}

#[test]
fn identity_stream_is_independent_of_selection() {
    // Base fields are drawn for every row, so the same seed yields the same
    // people whether or not `name` was asked for.
    let out_dir = temp_out_dir("selection");
    let engine = engine_for(&out_dir);
    let with_name = GenerationRequest::new(10, "name,email", "with_name.csv", 11)
        .expect("valid request");
    let email_only =
        GenerationRequest::new(10, "email", "email_only.csv", 11).expect("valid request");

    let a = read_records(&engine.run(&with_name).expect("run A").path);
    let b = read_records(&engine.run(&email_only).expect("run B").path);

    for (row_a, row_b) in a[1..].iter().zip(&b[1..]) {
        assert_eq!(row_a[1], row_b[0]);
    }
}

#[test]
fn existing_file_is_overwritten() {
    let out_dir = temp_out_dir("overwrite");
    let engine = engine_for(&out_dir);
    let big = GenerationRequest::new(50, "name", "out.csv", 1).expect("valid request");
    let small = GenerationRequest::new(1, "age", "out.csv", 1).expect("valid request");

    engine.run(&big).expect("first run");
    let result = engine.run(&small).expect("second run");

    let records = read_records(&result.path);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], vec!["age"]);
}

#[test]
fn nested_output_directory_is_created() {
    let out_dir = temp_out_dir("nested").join("a").join("b");
    let request = GenerationRequest::new(1, "city", "city.csv", 0).expect("valid request");

    let result = engine_for(&out_dir).run(&request).expect("run generation");

    assert!(result.path.is_file());
}

#[test]
fn directory_creation_failure_is_reported() {
    let blocker = temp_out_dir("blocker");
    fs::write(&blocker, b"not a directory").expect("write blocker file");
    let request = GenerationRequest::new(1, "name", "output.csv", 1).expect("valid request");

    let result = engine_for(&blocker).run(&request);

    assert!(matches!(result, Err(GenerationError::CreateDir { .. })));
}

#[test]
fn file_creation_failure_is_reported() {
    let out_dir = temp_out_dir("create_file");
    fs::create_dir_all(out_dir.join("taken.csv")).expect("create blocking dir");
    let request = GenerationRequest::new(1, "name", "taken.csv", 1).expect("valid request");

    let result = engine_for(&out_dir).run(&request);

    assert!(matches!(result, Err(GenerationError::CreateFile { .. })));
}
