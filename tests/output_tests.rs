use footprint::aggregator::NamespaceNode;
use footprint::flamegraph::{generate_flamegraph, FlamegraphConfig};
use footprint::output::{read_report, to_report, validate_path, write_report, write_svg};
use footprint::parser::{parse_lines, SymbolType};
use std::path::Path;
use tempfile::NamedTempFile;

fn sample_report() -> footprint::output::FootprintReport {
    let symbols = parse_lines([
        "00000010 00000004 t foo\tsrc/foo.c:1",
        "00000020 00000008 t Foo::bar\tsrc/foo.c:5",
        "20000000 00000010 D counter",
    ])
    .unwrap();
    to_report(Path::new("a.out"), &symbols)
}

#[test]
fn test_report_contents() {
    let report = sample_report();
    assert_eq!(report.symbol_count, 3);
    assert_eq!(report.categories.len(), 2);

    let text = report.category(SymbolType::Text).unwrap();
    assert_eq!(text.tree.size, 12);
    assert_eq!(text.summary.sized_count, 2);

    let foo = report
        .files
        .iter()
        .find(|f| f.file == "src/foo.c")
        .unwrap();
    assert_eq!(foo.size, 12);
    assert_eq!(foo.symbols[0].name, "Foo::bar");
}

#[test]
fn test_write_and_read_report() {
    let report = sample_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.binary, "a.out");
    assert_eq!(
        loaded.category(SymbolType::Text).unwrap().tree,
        report.category(SymbolType::Text).unwrap().tree
    );
}

#[test]
fn test_report_without_sources_has_no_files() {
    let symbols = parse_lines(["00000010 00000004 t foo"]).unwrap();
    let report = to_report(Path::new("a.out"), &symbols);
    assert!(report.files.is_empty());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/footprint.json");

    write_report(&sample_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_flamegraph_svg() {
    let mut tree = NamespaceNode::root();
    tree.insert(&["Foo", "bar"], 8);
    tree.insert(&["foo"], 4);

    let config = FlamegraphConfig::new().with_title("sizes");
    let svg = generate_flamegraph(&tree, Some(&config)).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("sizes"));

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("out/footprint.svg");
    write_svg(&svg, &path).unwrap();
    assert!(path.exists());
}
