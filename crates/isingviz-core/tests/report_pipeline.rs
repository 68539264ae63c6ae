use isingviz::core::io::dat::{DatError, DatFile};
use isingviz::core::models::series::{Observable, Series};
use isingviz::render::config::RenderConfig;
use isingviz::render::peak::find_peak;
use isingviz::render::progress::ProgressReporter;
use isingviz::workflows::report;
use std::fs;
use tempfile::tempdir;

fn write_dat(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn count_page_objects(bytes: &[u8]) -> usize {
    let needle = b"/Type/Page";
    bytes
        .windows(needle.len() + 1)
        .filter(|w| w.starts_with(needle) && w[needle.len()] != b's')
        .count()
}

#[test]
fn full_pipeline_produces_a_three_page_report() {
    let dir = tempdir().unwrap();
    let input = write_dat(
        &dir,
        "ising2d_vs_T.dat",
        "1.0 0.98 -1.99 0.12\n\
         1.5 0.95 -1.90 0.35\n\
         2.0 0.88 -1.74 0.93\n\
         2.3 0.55 -1.40 1.92\n\
         2.6 0.25 -1.10 1.10\n\
         3.0 0.12 -0.95 0.60\n",
    );
    let output = dir.path().join("ising.pdf");

    let samples = DatFile::load(&input).unwrap();
    assert_eq!(samples.len(), 6);

    let summary = report::run(
        &samples,
        &RenderConfig::default(),
        &output,
        &ProgressReporter::new(),
    )
    .unwrap();

    assert_eq!(summary.page_count, 3);
    assert_eq!(summary.peak.temperature, 2.3);
    assert_eq!(summary.peak.value, 1.92);

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(count_page_objects(&bytes), 3);
}

#[test]
fn derived_series_keep_the_length_invariant() {
    let dir = tempdir().unwrap();
    let input = write_dat(&dir, "run.dat", "1.0 0.9 -1.9 0.3\n2.0 0.7 -1.4 1.1\n");
    let samples = DatFile::load(&input).unwrap();

    for &observable in Observable::ALL.iter() {
        let series = Series::project(&samples, observable);
        assert_eq!(series.len(), samples.len());
        let xs: Vec<f64> = series.xs().collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }
}

#[test]
fn tie_break_reports_the_lowest_temperature() {
    let dir = tempdir().unwrap();
    let input = write_dat(
        &dir,
        "tie.dat",
        "1.0 0.5 -1.0 5.0\n2.0 0.4 -0.9 7.0\n3.0 0.3 -0.8 7.0\n",
    );
    let samples = DatFile::load(&input).unwrap();
    let heat = Series::project(&samples, Observable::SpecificHeat);

    let peak = find_peak(&heat).unwrap();
    assert_eq!(peak.temperature, 2.0);
    assert_eq!(peak.value, 7.0);
}

#[test]
fn single_row_input_renders_and_reports_itself_as_the_peak() {
    let dir = tempdir().unwrap();
    let input = write_dat(&dir, "single.dat", "2.5 0.1 -1.2 0.9\n");
    let output = dir.path().join("single.pdf");

    let samples = DatFile::load(&input).unwrap();
    let summary = report::run(
        &samples,
        &RenderConfig::default(),
        &output,
        &ProgressReporter::new(),
    )
    .unwrap();

    assert_eq!(summary.peak.temperature, 2.5);
    assert_eq!(summary.peak.value, 0.9);
    assert_eq!(summary.page_count, 3);
}

#[test]
fn malformed_line_aborts_before_any_document_is_written() {
    let dir = tempdir().unwrap();
    let input = write_dat(&dir, "bad.dat", "1.0 0.9 -1.9 0.3\n2.0 0.7\n");
    let output = dir.path().join("bad.pdf");

    let result = DatFile::load(&input);
    assert!(matches!(result, Err(DatError::Parse { line: 2, .. })));
    assert!(!output.exists());
}

#[test]
fn empty_file_aborts_before_any_document_is_written() {
    let dir = tempdir().unwrap();
    let input = write_dat(&dir, "empty.dat", "");
    let output = dir.path().join("empty.pdf");

    let result = DatFile::load(&input);
    assert!(matches!(result, Err(DatError::Empty)));
    assert!(!output.exists());
}

#[test]
fn reruns_produce_byte_identical_documents() {
    let dir = tempdir().unwrap();
    let input = write_dat(
        &dir,
        "run.dat",
        "1.0 0.9 -1.9 0.3\n2.0 0.7 -1.4 1.1\n3.0 0.1 -0.8 0.5\n",
    );
    let samples = DatFile::load(&input).unwrap();

    let first = dir.path().join("first.pdf");
    let second = dir.path().join("second.pdf");
    let config = RenderConfig::default();

    report::run(&samples, &config, &first, &ProgressReporter::new()).unwrap();
    report::run(&samples, &config, &second, &ProgressReporter::new()).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
