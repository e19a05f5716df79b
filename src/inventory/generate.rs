//! Maps a lab record onto the fixed inventory shape.

use crate::config::{
    BASTION_USER, CLOUD_USER, COMPUTE_HOSTNAME, JUMPHOST_NAME, NFS_SERVER_HOSTNAME,
};
use crate::models::{GlobalGroup, HostGroup, HostVars, Inventory, InventoryVars, LabRecord};
use serde_yaml::Value;

/// Record field, or `""` when absent.
fn field_or_empty(record: &LabRecord, field: &str) -> Value {
    record
        .get(field)
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
}

/// Key path on the bastion for hosts reached through the jump host.
pub fn private_key_path(lab_guid: &str) -> String {
    format!("/home/{{{{ bastion_user }}}}/.ssh/{lab_guid}key.pem")
}

/// Build the inventory for one lab. Never fails; absent fields become `""`.
pub fn generate_inventory(record: &LabRecord) -> Inventory {
    let f = |field: &str| field_or_empty(record, field);

    let vars = InventoryVars {
        lab_guid: f("lab_guid"),
        bastion_user: BASTION_USER.to_string(),
        bastion_hostname: f("bastion_hostname"),
        bastion_port: f("bastion_port"),
        bastion_password: f("bastion_password"),

        ocp_console_url: f("openshift_console_url"),
        ocp_admin_password: f("openshift_admin_password"),

        registry_username: String::new(),
        registry_password: String::new(),
        rhc_username: String::new(),
        rhc_password: String::new(),

        nfs_server_hostname: NFS_SERVER_HOSTNAME.to_string(),
        compute_hostname: COMPUTE_HOSTNAME.to_string(),

        rhoso_external_ip_worker_1: f("external_ip_worker_1"),
        rhoso_external_ip_worker_2: f("external_ip_worker_2"),
        rhoso_external_ip_worker_3: f("external_ip_worker_3"),
        rhoso_external_ip_bastion: f("external_ip_bastion"),

        public_net_start: f("public_net_start"),
        public_net_end: f("public_net_end"),
        conversion_host_ip: f("conversion_host_ip"),
        network_subnet: f("network_subnet"),
        network_cidr: f("network_cidr"),
        allocation_name: f("allocation_name"),
        cluster_name: f("cluster_name"),
    };

    let key_file = private_key_path(&record.lab_guid());
    let internal_host = |host_var: &str| HostVars {
        ansible_host: format!("{{{{ {host_var} }}}}"),
        ansible_user: CLOUD_USER.to_string(),
        ansible_ssh_private_key_file: Some(key_file.clone()),
        delegate_to: Some(JUMPHOST_NAME.to_string()),
        ..Default::default()
    };

    Inventory {
        all: GlobalGroup { vars },
        bastion: HostGroup::single(
            JUMPHOST_NAME,
            HostVars {
                ansible_host: "{{ bastion_hostname }}".to_string(),
                ansible_user: "{{ bastion_user }}".to_string(),
                ansible_port: Some("{{ bastion_port }}".to_string()),
                ansible_ssh_pass: Some("{{ bastion_password }}".to_string()),
                ..Default::default()
            },
        ),
        nfsserver: HostGroup::single("nfs-server", internal_host("nfs_server_hostname")),
        compute_nodes: HostGroup::single(COMPUTE_HOSTNAME, internal_host("compute_hostname")),
    }
}
