use std::fs;

use defdump::{
    DefinitionRegistry, DirectoryByteSource, DumpAll, DumpSettings, JsonSink, MANIFEST_FILE,
    Properties, PropertiesError, RecordProvider, Scheduler, SerializationSink,
    core::{ByteSource, Definition, PartitionId, RecordKind, SourceError},
    definitions::{RecordCollection, UnderlayDefinition, VarbitDefinition},
};
use serde_json::Value;

// ── helpers ──────────────────────────────────────────────────────────────────

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn write_file(dir: &std::path::Path, name: &str, data: &[u8]) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), data).unwrap();
}

// ── json sink ────────────────────────────────────────────────────────────────

#[test]
fn json_sink_writes_kind_files_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dump");
    let mut sink = JsonSink::new(&out);

    let underlays = RecordCollection::new(
        vec![UnderlayDefinition::blank(1), UnderlayDefinition::blank(2)],
        true,
    );
    let varbits = RecordCollection::new(vec![VarbitDefinition::blank(3)], false);
    sink.publish(RecordKind::Underlay, underlays.records(), true).unwrap();
    sink.publish(RecordKind::Varbit, varbits.records(), false).unwrap();
    sink.finish().unwrap();

    let json = read_json(&out.join("underlays.json"));
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[1]["id"], 2);
    assert_eq!(list[0]["texture"], -1);
    assert!(out.join("varbits.json").exists());

    assert_eq!(
        read_json(&out.join(MANIFEST_FILE)),
        serde_json::json!(["underlays"])
    );
}

#[test]
fn json_sink_manifest_lists_kind_once() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = JsonSink::new(dir.path());
    let varbits = RecordCollection::new(vec![VarbitDefinition::blank(0)], true);
    sink.publish(RecordKind::Varbit, varbits.records(), true).unwrap();
    sink.publish(RecordKind::Varbit, varbits.records(), true).unwrap();
    sink.finish().unwrap();

    assert_eq!(
        read_json(&dir.path().join(MANIFEST_FILE)),
        serde_json::json!(["varbits"])
    );
}

#[test]
fn json_sink_path_naming() {
    let sink = JsonSink::new("/tmp/out");
    assert_eq!(
        sink.path_for(RecordKind::SpotAnimation),
        std::path::Path::new("/tmp/out/spotanims.json")
    );
}

// ── properties ───────────────────────────────────────────────────────────────

#[test]
fn missing_property_file_is_created_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.toml");

    let properties = Properties::load(&path).unwrap();

    assert!(properties.is_empty());
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn properties_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.toml");
    let mut properties = Properties::new();
    properties.set("cache.path", "/data/cache");
    properties.set("output.path", "out");
    properties.save(&path).unwrap();

    let loaded = Properties::load(&path).unwrap();
    assert_eq!(loaded, properties);
    assert_eq!(loaded.get("cache.path"), Some("/data/cache"));
}

#[test]
fn nested_tables_flatten_to_dotted_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.toml");
    fs::write(&path, "[cache]\npath = \"c\"\nthreads = 4\n").unwrap();

    let properties = Properties::load(&path).unwrap();
    assert_eq!(properties.get("cache.path"), Some("c"));
    assert_eq!(properties.get("cache.threads"), Some("4"));
}

#[test]
fn malformed_property_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    assert!(matches!(
        Properties::load(&path),
        Err(PropertiesError::Parse { .. })
    ));
}

#[test]
fn set_default_keeps_existing_value() {
    let mut properties = Properties::new();
    assert!(properties.set_default("cache.path", "a"));
    assert!(!properties.set_default("cache.path", "b"));
    assert_eq!(properties.get("cache.path"), Some("a"));
}

#[test]
fn settings_use_defaults_and_revision_subdirectory() {
    let settings = DumpSettings::from_properties(&Properties::new(), 0);
    assert_eq!(settings.cache_dir(), std::path::Path::new("./cache/0"));
    assert_eq!(settings.output, std::path::Path::new("./dump"));

    let mut properties = Properties::new();
    properties.set(DumpSettings::CACHE_PATH_KEY, "/srv/cache");
    let settings = DumpSettings::from_properties(&properties, 197);
    assert_eq!(settings.cache_dir(), std::path::Path::new("/srv/cache/197"));
}

// ── directory byte source ────────────────────────────────────────────────────

#[test]
fn directory_source_lists_sorted_dat_files() {
    let dir = tempfile::tempdir().unwrap();
    let partition = PartitionId::archive(2, 1);
    let archive_dir = dir.path().join("2").join("1");
    write_file(&archive_dir, "9.dat", &[0]);
    write_file(&archive_dir, "10.dat", &[0]);
    write_file(&archive_dir, "5.dat", &[1, 0, 0x10, 0x20, 0]);
    write_file(&archive_dir, "notes.txt", b"ignored");
    write_file(&archive_dir, "x.dat", b"ignored");

    let source = DirectoryByteSource::new(dir.path());

    assert_eq!(source.file_ids(partition).unwrap(), vec![5, 9, 10]);
    assert_eq!(
        source.fetch(partition, 5).unwrap().as_deref(),
        Some(&[1u8, 0, 0x10, 0x20, 0][..])
    );
    assert!(source.fetch(partition, 6).unwrap().is_none());
}

#[test]
fn directory_source_ignores_non_canonical_names() {
    let dir = tempfile::tempdir().unwrap();
    let partition = PartitionId::archive(2, 14);
    let archive_dir = dir.path().join("2").join("14");
    write_file(&archive_dir, "007.dat", &[1, 0, 0, 0, 0]);
    write_file(&archive_dir, "+8.dat", &[0]);
    write_file(&archive_dir, "9.dat", &[0]);

    let source = DirectoryByteSource::new(dir.path());
    assert_eq!(source.file_ids(partition).unwrap(), vec![9]);

    write_file(&archive_dir, "7.dat", &[0]);
    assert_eq!(source.file_ids(partition).unwrap(), vec![7, 9]);

    let varbits = RecordProvider::new(RecordKind::Varbit)
        .load(&source)
        .unwrap();
    assert_eq!(varbits.records().ids(), vec![7, 9]);
}

#[test]
fn directory_source_index_layout() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("8"), "3.dat", &[0]);

    let source = DirectoryByteSource::new(dir.path());
    assert_eq!(source.file_ids(PartitionId::Index(8)).unwrap(), vec![3]);
}

#[test]
fn directory_source_missing_partition() {
    let dir = tempfile::tempdir().unwrap();
    let source = DirectoryByteSource::new(dir.path());
    assert!(matches!(
        source.file_ids(PartitionId::archive(2, 35)),
        Err(SourceError::PartitionNotFound { .. })
    ));
}

#[test]
fn directory_source_to_json_dump() {
    let cache = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let archive_dir = cache.path().join("2").join("1");
    write_file(&archive_dir, "5.dat", &[1, 0x00, 0x10, 0x20, 0]);
    write_file(&archive_dir, "9.dat", &[0]);

    let source = DirectoryByteSource::new(cache.path());
    let scheduler = Scheduler::new(&source, DefinitionRegistry::new());
    let mut dump = DumpAll::with_kinds(JsonSink::new(out.path()), vec![RecordKind::Underlay]);
    scheduler.run_with(&mut dump).unwrap();

    let json = read_json(&out.path().join("underlays.json"));
    assert_eq!(json[0]["id"], 5);
    assert_eq!(json[0]["color"], 0x001020);
    assert_eq!(json[0]["hue"], 19);
    assert_eq!(json[0]["saturation"], 255);
    assert_eq!(json[0]["lightness"], 16);
    assert_eq!(json[0]["hueMultiplier"], 32);
    assert_eq!(json[1]["lightness"], -1);
    assert_eq!(
        read_json(&out.path().join(MANIFEST_FILE)),
        serde_json::json!([])
    );
}
