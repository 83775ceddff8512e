/// Tests for the taxoline binary
mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use std::fs;

fn taxoline() -> Command {
    let mut cmd = Command::cargo_bin("taxoline").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("TAXOLINE_LOG");
    cmd
}

#[test]
fn test_resolve_with_explicit_paths() {
    let fixture = TaxdumpFixture::fox();
    let input = fixture.write("accessions.tsv", "MN001\ttaxon:9627\nACC999\tbadformat\nMN002\ttaxon:9615\n");
    let output = fixture.path("labels.tsv");

    taxoline()
        .arg("resolve")
        .arg("--nodes")
        .arg(fixture.nodes())
        .arg("--names")
        .arg(fixture.names())
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid taxon format"))
        .stderr(predicate::str::contains("Line 2 has invalid taxon format: 'badformat'"));

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        format!(
            "MN001\t{}\nMN002\ttax=k__Metazoa;p__Chordata;c__Mammalia;o__Carnivora;f__Canidae;g__;s__\n",
            FOX_LABEL
        )
    );
}

#[test]
fn test_resolve_uses_default_file_names() {
    let fixture = TaxdumpFixture::fox();
    fixture.write("ids_and_taxon.txt", "MN001\ttaxon:9627\n");

    taxoline()
        .current_dir(fixture.dir())
        .arg("resolve")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(fixture.path("ncbi_taxa.tsv")).unwrap(),
        format!("MN001\t{}\n", FOX_LABEL)
    );
}

#[test]
fn test_resolve_missing_input_exit_code() {
    let fixture = TaxdumpFixture::fox();

    taxoline()
        .current_dir(fixture.dir())
        .args(["resolve", "-i", "absent.txt"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("absent.txt"));
}

#[test]
fn test_resolve_malformed_nodes_exit_code() {
    let fixture = TaxdumpFixture::fox();
    fs::write(fixture.nodes(), "1\t|\t1\n").unwrap();
    fixture.write("ids_and_taxon.txt", "MN001\ttaxon:9627\n");

    taxoline()
        .current_dir(fixture.dir())
        .arg("resolve")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nodes.dmp:1"));
}

#[test]
fn test_lineage_json() {
    let fixture = TaxdumpFixture::fox();

    let assert = taxoline()
        .current_dir(fixture.dir())
        .args(["lineage", "9627", "--json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["tax_id"], "9627");
    assert_eq!(report["root_id"], "1");
    assert_eq!(report["label"], FOX_LABEL);
    assert_eq!(report["lineage"][0]["name"], "cellular organisms");
    assert_eq!(report["lineage"].as_array().unwrap().len(), 10);
}

#[test]
fn test_lineage_unknown_tax_id() {
    let fixture = TaxdumpFixture::fox();

    taxoline()
        .current_dir(fixture.dir())
        .args(["lineage", "424242"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("424242"));
}

#[test]
fn test_config_file_root_id() {
    let fixture = TaxdumpFixture::fox();
    fixture.write("taxoline.toml", "[taxonomy]\nroot_id = \"2759\"\n");

    let assert = taxoline()
        .current_dir(fixture.dir())
        .args(["lineage", "9627", "--json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["lineage"][0]["rank"], "kingdom");
}

#[test]
fn test_root_id_flag_overrides_config() {
    let fixture = TaxdumpFixture::fox();
    fixture.write("taxoline.toml", "[taxonomy]\nroot_id = \"2759\"\n");

    let assert = taxoline()
        .current_dir(fixture.dir())
        .args(["lineage", "9627", "--json", "--root-id", "1"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["lineage"][0]["rank"], "no rank");
}

#[test]
fn test_config_init_and_show() {
    let fixture = TaxdumpFixture::fox();

    taxoline()
        .current_dir(fixture.dir())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(fixture.path("taxoline.toml").exists());

    taxoline()
        .current_dir(fixture.dir())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    taxoline()
        .current_dir(fixture.dir())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("root_id = \"1\""))
        .stdout(predicate::str::contains("ids_and_taxon.txt"));
}

#[test]
fn test_invalid_config_exit_code() {
    let fixture = TaxdumpFixture::fox();
    fixture.write("taxoline.toml", "[taxonomy\n");

    taxoline()
        .current_dir(fixture.dir())
        .args(["config", "show"])
        .assert()
        .code(2);
}

#[test]
fn test_lineage_without_canonical_ranks_warns() {
    let fixture = TaxdumpFixture::fox();

    taxoline()
        .current_dir(fixture.dir())
        .args(["lineage", "131567"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cellular organisms"))
        .stdout(predicate::str::contains("None of the ancestors carries a kingdom..species rank"))
        .stdout(predicate::str::contains("tax=k__;p__;c__;o__;f__;g__;s__"));
}
