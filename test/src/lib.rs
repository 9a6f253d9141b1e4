//! Instruction list fixtures shared by the tests of each crate.
//!
//! A fixture is named by its file stem under `resources/test`. The `.il`
//! file holds the instruction list and the `.st` file holds the Structured
//! Text that the instruction list translates to.
use std::{fs, path::PathBuf};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("resources")
        .join("test")
}

/// Path of the instruction list file of the fixture.
pub fn il_path(name: &str) -> PathBuf {
    fixture_dir().join(format!("{name}.il"))
}

/// Path of the expected Structured Text file of the fixture.
pub fn st_path(name: &str) -> PathBuf {
    fixture_dir().join(format!("{name}.st"))
}

pub fn read_il(name: &str) -> String {
    let path = il_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Unable to read {}: {e}", path.display()))
}

pub fn read_st(name: &str) -> String {
    let path = st_path(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Unable to read {}: {e}", path.display()))
}

/// Reads the instruction list and the expected Structured Text of the fixture.
pub fn read_fixture_pair(name: &str) -> (String, String) {
    (read_il(name), read_st(name))
}

/// Names of every fixture that has both an instruction list and an
/// expected Structured Text file, in sorted order.
pub fn fixture_names() -> Vec<String> {
    let entries = fs::read_dir(fixture_dir()).expect("Unable to list fixtures");
    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "il"))
        .filter_map(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .filter(|name| st_path(name).is_file())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixture_names_when_pairs_exist_then_lists_stems() {
        let names = fixture_names();
        assert!(names.contains(&"first_steps".to_string()));
        assert!(names.contains(&"fail_soft".to_string()));
    }

    #[test]
    fn read_fixture_pair_when_first_steps_then_il_and_st() {
        let (il, st) = read_fixture_pair("first_steps");
        assert!(il.contains("LD X0"));
        assert!(st.starts_with("(* Rung 1 *)"));
    }
}
