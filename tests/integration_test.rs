//! Integration tests for lab-inventory
//!
//! These tests run the full workflow from provisioning output to files on disk.

use lab_inventory::cli::Cli;
use lab_inventory::inventory::inventory_file_name;
use lab_inventory::{
    extract_labs, parse_lab_config, run, save_inventory_files, save_lab_summary, MergePolicy,
};
use std::path::{Path, PathBuf};

const SAMPLE: &str = "src/tests/test_data/lab_config_01.txt";

fn cli(output_dir: &Path, policy: MergePolicy) -> Cli {
    Cli {
        config_file: PathBuf::from(SAMPLE),
        output_dir: output_dir.to_path_buf(),
        merge_policy: policy,
    }
}

#[test]
fn test_sample_records() {
    let labs = parse_lab_config(Path::new(SAMPLE), MergePolicy::FragmentWins)
        .expect("Failed to parse sample");
    assert_eq!(labs.len(), 2, "Expected 2 labs in sample");

    let first = &labs[0];
    assert_eq!(first.service_name(), "openshift-cnv.osp-on-ocp-cnv.dev-x7k2p");
    assert_eq!(first.get_str("bastion_hostname"), Some("ssh.ocpv06.example.com"));
    assert_eq!(first.get_str("bastion_port"), Some("30417"));
    assert_eq!(first.get_str("bastion_password"), Some("bAsT1onPw"));
    assert_eq!(first.get_str("allocation_name"), Some("cluster-x7k2p"));
    assert_eq!(first.get_str("cluster_name"), Some("ocpv06"));
    assert_eq!(first.get_str("network_cidr"), Some("192.168.64.0/18"));
    assert_eq!(first.get_str("conversion_host_ip"), Some("192.168.64.20"));
    // fragment fields
    assert_eq!(first.get_str("guid"), Some("x7k2p"));
    assert_eq!(first.get_str("cloud_provider"), Some("openshift_cnv"));
    assert!(first.get("workers").is_some_and(|w| w.is_mapping()));

    // second lab has a broken fragment and only part of the IP table
    let second = &labs[1];
    assert_eq!(second.lab_guid(), "q9w4m");
    assert!(!second.contains("guid"), "broken fragment must add nothing");
    assert_eq!(second.get_str("bastion_port"), Some("31022"));
    assert_eq!(second.get_str("openshift_admin_password"), Some("Q9pass"));
    assert_eq!(second.get_str("external_ip_worker_1"), Some("10.10.0.5"));
    assert!(!second.contains("external_ip_worker_2"));
    assert!(!second.contains("openshift_api_url"));
    assert!(!second.contains("network_subnet"));
}

#[test]
fn test_full_workflow_writes_one_file_per_lab() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out = dir.path().join("generated_inventories");

    let result = run(&cli(&out, MergePolicy::FragmentWins)).expect("Run failed");

    assert_eq!(result.inventory_files.len(), 2);
    assert_eq!(result.inventory_files[0], out.join("hosts-cluster-x7k2p.yml"));
    assert_eq!(result.inventory_files[1], out.join("hosts-cluster-q9w4m.yml"));
    for path in &result.inventory_files {
        let text = std::fs::read_to_string(path).expect("Missing inventory file");
        assert!(text.starts_with("---\n# Ansible inventory for RHOSO deployment"));
        let doc: serde_yaml::Value = serde_yaml::from_str(&text).expect("Invalid YAML");
        assert!(doc["all"]["vars"].is_mapping());
    }

    let summary = std::fs::read_to_string(&result.summary_file).expect("Missing summary");
    let json: serde_json::Value = serde_json::from_str(&summary).expect("Invalid JSON");
    assert_eq!(json.as_array().map(Vec::len), Some(2));
    assert_eq!(json[0]["lab_guid"], "x7k2p");
    assert_eq!(json[0]["workers"]["count"], 3);

    let entries = std::fs::read_dir(&out).unwrap().count();
    assert_eq!(entries, 3, "2 inventories and lab_summary.json");
}

#[test]
fn test_rerun_overwrites() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("hosts-cluster-x7k2p.yml");
    std::fs::write(&target, "stale content\n").unwrap();

    run(&cli(dir.path(), MergePolicy::KeepExtracted)).expect("Run failed");

    let text = std::fs::read_to_string(&target).unwrap();
    assert!(!text.contains("stale content"));
    assert!(text.contains("ssh.ocpv06.example.com"));
}

#[test]
fn test_zero_labs_writes_no_inventories() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let labs = extract_labs("nothing provisioned yet\n", MergePolicy::FragmentWins);
    assert!(labs.is_empty());

    let written = save_inventory_files(&labs, dir.path()).expect("Save failed");
    assert!(written.is_empty());
    let summary = save_lab_summary(&labs, dir.path()).expect("Save failed");
    assert_eq!(std::fs::read_to_string(summary).unwrap(), "[]");
}

#[test]
fn test_distinct_file_names() {
    let input = "openshift-cnv.osp-on-ocp-cnv.dev-aaa\n\
openshift-cnv.osp-on-ocp-cnv.dev-bbb\n\
openshift-cnv.osp-on-ocp-cnv.dev-ccc\n";
    let labs = extract_labs(input, MergePolicy::FragmentWins);
    let names: Vec<String> = labs.iter().map(inventory_file_name).collect();
    assert_eq!(
        names,
        vec![
            "hosts-cluster-aaa.yml",
            "hosts-cluster-bbb.yml",
            "hosts-cluster-ccc.yml"
        ]
    );
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut args = cli(dir.path(), MergePolicy::FragmentWins);
    args.config_file = PathBuf::from("src/tests/test_data/missing.txt");
    let err = run(&args).unwrap_err();
    assert!(err.to_string().contains("Configuration file not found"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
