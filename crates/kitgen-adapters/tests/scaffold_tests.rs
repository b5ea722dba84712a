//! End-to-end scaffolding against real and in-memory filesystems.

use std::{fs, path::Path};

use kitgen_adapters::{BuiltinManifest, LocalFilesystem, MemoryFilesystem, TomlManifest};
use kitgen_core::{
    application::{ApplicationError, ManifestSource, NoopReporter, ScaffoldService},
    domain::{Manifest, normalize_body},
    error::{KitError, KitResult},
};
use tempfile::TempDir;
use walkdir::WalkDir;

struct Fixed(Manifest);

impl ManifestSource for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    fn load(&self) -> KitResult<Manifest> {
        Ok(self.0.clone())
    }
}

fn acme_service() -> ScaffoldService {
    ScaffoldService::new(
        Box::new(BuiltinManifest::acme_pharmacy()),
        Box::new(LocalFilesystem::new()),
    )
}

fn files_under(root: &Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

#[test]
fn acme_kit_materializes_every_file_with_normalized_content() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("acme-pharmacy-analytics-spec");

    let report = acme_service().scaffold(&base, &NoopReporter).unwrap();
    assert_eq!(report.files_created, 20);
    assert_eq!(files_under(&base).len(), 20);

    let manifest = BuiltinManifest::acme_pharmacy().load().unwrap();
    for entry in &manifest {
        let on_disk = fs::read_to_string(entry.path.resolve(&base)).unwrap();
        assert_eq!(on_disk, normalize_body(&entry.body), "{}", entry.path);
        assert!(on_disk.ends_with('\n') && !on_disk.ends_with("\n\n"));
        assert_eq!(on_disk.trim_start(), on_disk);
    }

    for dir in ["personas", "user_stories", "requirements"] {
        assert!(base.join(dir).is_dir(), "{dir} missing");
    }
}

#[test]
fn second_run_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("kit");
    let service = acme_service();

    service.scaffold(&base, &NoopReporter).unwrap();
    let first: Vec<_> = files_under(&base)
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();

    service.scaffold(&base, &NoopReporter).unwrap();
    let second: Vec<_> = files_under(&base)
        .iter()
        .map(|p| fs::read(p).unwrap())
        .collect();

    assert_eq!(first, second);
}

#[test]
fn deleted_subdirectory_is_recreated() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().join("kit");
    let service = acme_service();

    service.scaffold(&base, &NoopReporter).unwrap();
    fs::remove_dir_all(base.join("personas")).unwrap();
    assert!(!base.join("personas").exists());

    service.scaffold(&base, &NoopReporter).unwrap();
    assert!(base.join("personas/client_exec.md").is_file());
    assert!(base.join("personas/client_data_analyst.md").is_file());
}

#[test]
fn existing_files_are_overwritten() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().to_path_buf();
    fs::write(base.join("security_privacy.md"), "stale local edits\n").unwrap();

    acme_service().scaffold(&base, &NoopReporter).unwrap();
    let content = fs::read_to_string(base.join("security_privacy.md")).unwrap();
    assert!(content.starts_with("# Security & Privacy\n"));
}

#[test]
fn concrete_security_privacy_scenario() {
    let tmp = TempDir::new().unwrap();
    let manifest = Manifest::new("one")
        .with_entry("security_privacy.md", "# Security & Privacy\n\nBody text.\n\n")
        .unwrap();
    let service = ScaffoldService::new(Box::new(Fixed(manifest)), Box::new(LocalFilesystem::new()));

    service.scaffold(tmp.path(), &NoopReporter).unwrap();
    assert_eq!(
        fs::read_to_string(tmp.path().join("security_privacy.md")).unwrap(),
        "# Security & Privacy\n\nBody text.\n"
    );
}

#[test]
fn duplicate_path_last_write_wins() {
    let tmp = TempDir::new().unwrap();
    let manifest = Manifest::new("dups")
        .with_entry("personas/client_exec.md", "# First")
        .unwrap()
        .with_entry("personas/client_exec.md", "# Second")
        .unwrap();
    let service = ScaffoldService::new(Box::new(Fixed(manifest)), Box::new(LocalFilesystem::new()));

    let report = service.scaffold(tmp.path(), &NoopReporter).unwrap();
    assert_eq!(report.files_created, 1);
    assert_eq!(
        fs::read_to_string(tmp.path().join("personas/client_exec.md")).unwrap(),
        "# Second\n"
    );
}

#[test]
fn file_blocking_directory_fails_fast() {
    let tmp = TempDir::new().unwrap();
    let base = tmp.path().to_path_buf();
    fs::write(base.join("personas"), "I am a file").unwrap();

    let err = acme_service().scaffold(&base, &NoopReporter).unwrap_err();
    assert!(matches!(
        err,
        KitError::Application(ApplicationError::FilesystemError { .. })
    ));

    // The three top-level documents precede the first persona; nothing after it.
    assert!(base.join("acceptance_tests.md").is_file());
    assert!(!base.join("user_stories").exists());
    assert!(!base.join("requirements").exists());
}

#[test]
fn memory_filesystem_run_matches_manifest() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(
        Box::new(BuiltinManifest::acme_pharmacy()),
        Box::new(fs.clone()),
    );

    service.scaffold("/kit", &NoopReporter).unwrap();
    assert_eq!(fs.list_files().len(), 20);
    assert!(fs.is_dir(Path::new("/kit/user_stories")));

    fs.remove_dir_all(Path::new("/kit/personas")).unwrap();
    service.scaffold("/kit", &NoopReporter).unwrap();
    assert!(
        fs.read_file(Path::new("/kit/personas/client_exec.md"))
            .is_some_and(|c| c.starts_with("# Persona: Client Executive"))
    );
}

#[test]
fn toml_manifest_scaffolds_like_builtin() {
    let tmp = TempDir::new().unwrap();
    let manifest_path = tmp.path().join("kit.toml");
    fs::write(
        &manifest_path,
        "[[entries]]\npath = \"docs/intro.md\"\nbody = \"\"\"\n\n# Intro\n\n\"\"\"\n",
    )
    .unwrap();

    let out = tmp.path().join("out");
    let service = ScaffoldService::new(
        Box::new(TomlManifest::from_path(&manifest_path)),
        Box::new(LocalFilesystem::new()),
    );
    service.scaffold(&out, &NoopReporter).unwrap();

    assert_eq!(
        fs::read_to_string(out.join("docs/intro.md")).unwrap(),
        "# Intro\n"
    );
}
