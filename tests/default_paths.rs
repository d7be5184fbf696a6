//! Exercises the fixed default output paths. Everything lives in one test because
//! the working directory is process-wide state.

use std::collections::BTreeSet;
use std::env;
use std::fs;

use tempfile::tempdir;
use topogen::{export, TopologyError};

#[test]
fn export_uses_default_paths_in_working_directory() {
    let dir = tempdir().unwrap();
    env::set_current_dir(dir.path()).unwrap();

    // Unknown kinds fail before any file is touched.
    let err = export(4, "Bogus", 0, false).unwrap_err();
    assert!(matches!(err, TopologyError::InvalidTopologyKind(ref kind) if kind.0 == "Bogus"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0, "No files may be created.");

    export(5, "Full", 0, false).unwrap();
    let text = fs::read_to_string("connlist.dat").unwrap();
    let pairs: BTreeSet<(usize, usize)> = text
        .lines()
        .map(|line| {
            let mut ids = line.split(' ').map(|id| id.parse::<usize>().unwrap());
            (ids.next().unwrap(), ids.next().unwrap())
        })
        .collect();
    assert_eq!(text.lines().count(), 10);
    assert_eq!(pairs.len(), 10, "Every pair of 0..5 should appear once.");
    assert!(!dir.path().join("ElFarol.svg").exists(), "No plot without the render flag.");

    // A failing call leaves the previous artifacts alone.
    let before = fs::read("connlist.dat").unwrap();
    assert!(export(4, "Bogus", 0, true).is_err());
    assert_eq!(fs::read("connlist.dat").unwrap(), before);

    export(6, "CloseRing", 0, true).unwrap();
    assert_eq!(fs::read_to_string("connlist.dat").unwrap().lines().count(), 6);
    let svg = fs::read_to_string("ElFarol.svg").unwrap();
    assert!(svg.contains("<title>ClosedRing</title>"));
}
