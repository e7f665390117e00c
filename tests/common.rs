#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, isolated from the real user: HOME points to a per-test
/// directory (config + seed file live there) and colours are disabled.
pub fn evl(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("evlogbook");
    cmd.env("HOME", home).env("NO_COLOR", "1");
    cmd
}

/// Fresh, empty HOME directory for one test.
pub fn temp_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_evlogbook_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_evlogbook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path.
pub fn temp_file(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(name);
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}

/// Header + two sessions, in canonical column order.
pub const SAMPLE_CSV: &str = "\
Date,Location,Starting Time,Ending Time,Duration,Starting-Distance,Ending-Distance,Distance-Added,Claimed-Power,Claimed-Current,Distance-Rate,Energy-Added,Fully-Charged,Full-Distance,Charging-Fee,Parking-Fee,Cost-Per-Energy,Cost-Per-Distance,Odometer,Maintenance-Note,Remarks
2025-08-30,Mall,10:00,11:30,1:30,120,300,180.00,50,,120,35,yes,420,$12.00,$3,0.43,0.08,10500,,\"slow, busy\"
2025-09-02,Home,22:00,06:00,8:00,80,410,330.00,7,32,45,60,no,420,9,0,0.15,0.03,10900,Tyre rotation,
";

/// Init DB and add one full session through the CLI.
pub fn init_db_with_data(home: &str, db_path: &str) {
    evl(home)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    evl(home)
        .args([
            "--db",
            db_path,
            "add",
            "--date",
            "2025-09-01",
            "--location",
            "Home",
            "--start",
            "22:00",
            "--end",
            "02:00",
            "--start-distance",
            "100",
            "--end-distance",
            "250",
            "--energy",
            "30",
            "--charging-fee",
            "$10",
            "--parking-fee",
            "5",
            "--full",
            "yes",
        ])
        .assert()
        .success();
}
