//! Ansible inventory document model.
//!
//! The shape is fixed: one `all` group with global vars and three host groups
//! holding exactly one host each. Field declaration order is the emitted order.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::BTreeMap;

/// One inventory document for one lab.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Inventory {
    pub all: GlobalGroup,
    pub bastion: HostGroup,
    pub nfsserver: HostGroup,
    pub compute_nodes: HostGroup,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GlobalGroup {
    pub vars: InventoryVars,
}

/// Global variables. Record-sourced values stay [`Value`] so fragment
/// overrides keep their YAML type.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InventoryVars {
    // Lab environment
    pub lab_guid: Value,
    pub bastion_user: String,
    pub bastion_hostname: Value,
    pub bastion_port: Value,
    pub bastion_password: Value,

    // OpenShift console
    pub ocp_console_url: Value,
    pub ocp_admin_password: Value,

    // Filled in by hand after generation
    pub registry_username: String,
    pub registry_password: String,
    pub rhc_username: String,
    pub rhc_password: String,

    // Internal lab hostnames
    pub nfs_server_hostname: String,
    pub compute_hostname: String,

    // External IPs
    pub rhoso_external_ip_worker_1: Value,
    pub rhoso_external_ip_worker_2: Value,
    pub rhoso_external_ip_worker_3: Value,
    pub rhoso_external_ip_bastion: Value,

    // Network
    pub public_net_start: Value,
    pub public_net_end: Value,
    pub conversion_host_ip: Value,
    pub network_subnet: Value,
    pub network_cidr: Value,
    pub allocation_name: Value,
    pub cluster_name: Value,
}

/// A host group keyed by host name.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HostGroup {
    pub hosts: BTreeMap<String, HostVars>,
}

impl HostGroup {
    pub fn single(name: &str, host: HostVars) -> Self {
        HostGroup {
            hosts: BTreeMap::from([(name.to_string(), host)]),
        }
    }
}

/// Connection parameters for one host. Values are Ansible templates, not resolved values.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct HostVars {
    pub ansible_host: String,
    pub ansible_user: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_ssh_pass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansible_ssh_private_key_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_to: Option<String>,
}
