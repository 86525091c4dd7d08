use stabping_view::{Record, RecordWriter, SENTINEL_ERROR, SENTINEL_NODATA};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn view_window(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_view-window"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn fixture(dir: &Path) -> (String, String) {
    let data = dir.join("tcpping.dat");
    let index = dir.join("tcpping.idx");
    fs::write(&index, "google.com:80\n8.8.8.8:53\n").unwrap();

    let mut writer = RecordWriter::open(&data).unwrap();
    writer.append_results(0, &[(0, 31), (1, 12)]).unwrap();
    writer.append_results(60, &[(0, 33), (1, SENTINEL_ERROR)]).unwrap();
    writer.append_results(120, &[(1, 14)]).unwrap();
    writer.finalize().unwrap();

    (
        data.to_str().unwrap().to_string(),
        format!("--index={}", index.to_str().unwrap()),
    )
}

#[test]
fn records_in_range_with_addresses() {
    let dir = tempfile::tempdir().unwrap();
    let (data, index) = fixture(dir.path());

    let out = view_window(&[&data, "--from=60", "--to=120", &index]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "1970-01-01T00:01:00Z google.com:80 33\n\
         1970-01-01T00:01:00Z 8.8.8.8:53 error\n\
         1970-01-01T00:02:00Z 8.8.8.8:53 14\n"
    );
}

#[test]
fn segments_fill_gaps() {
    let dir = tempfile::tempdir().unwrap();
    let (data, index) = fixture(dir.path());

    let out = view_window(&[&data, &index, "--segments"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "time\tgoogle.com:80\t8.8.8.8:53\n\
         1970-01-01T00:00:00Z\t31\t12\n\
         1970-01-01T00:01:00Z\t33\t!\n\
         1970-01-01T00:02:00Z\t-\t14\n"
    );
}

#[test]
fn bad_arguments_exit_with_usage() {
    let out = view_window(&[]);
    assert_eq!(out.status.code(), Some(2));

    let dir = tempfile::tempdir().unwrap();
    let (data, _) = fixture(dir.path());
    let out = view_window(&[&data, "--from=soon"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_data_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("none.dat");
    let out = view_window(&[missing.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr).unwrap().contains("none.dat"));
}

#[test]
fn without_index_labels_are_raw_indices() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("plain.dat");
    let mut writer = RecordWriter::open(&data).unwrap();
    writer.append(&Record::new(2, 3, 1)).unwrap();
    writer.append(&Record::new(2, 1, 2)).unwrap();
    writer.append(&Record::new(5, 3, SENTINEL_NODATA)).unwrap();
    writer.finalize().unwrap();
    let data = data.to_str().unwrap();

    let out = view_window(&[data]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "1970-01-01T00:00:02Z #3 1\n\
         1970-01-01T00:00:02Z #1 2\n\
         1970-01-01T00:00:05Z #3 nodata\n"
    );

    let out = view_window(&["--segments", data]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "time\t#1\t#3\n\
         1970-01-01T00:00:02Z\t2\t1\n\
         1970-01-01T00:00:05Z\t-\t-\n"
    );
}

#[test]
fn unknown_options_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (data, _) = fixture(dir.path());

    let out = view_window(&[&data, "--form=60"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("--form=60"));
    assert!(stderr.contains("Usage:"));

    let out = view_window(&[&data, &data]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn data_path_after_double_dash() {
    let dir = tempfile::tempdir().unwrap();
    let (data, _) = fixture(dir.path());
    let dashed = dir.path().join("--odd.dat");
    fs::copy(&data, &dashed).unwrap();

    let out = view_window(&["--to=0", "--", dashed.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "1970-01-01T00:00:00Z #0 31\n1970-01-01T00:00:00Z #1 12\n"
    );
}

#[cfg(unix)]
#[test]
fn non_utf8_path_is_an_open_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join(OsStr::from_bytes(b"no\xffpe.dat"));
    let out = Command::new(env!("CARGO_BIN_EXE_view-window"))
        .arg(&missing)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot open"));
}
