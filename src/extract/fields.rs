//! Pattern-based field extraction from a lab block.

use regex::Regex;
use std::sync::OnceLock;

/// A labelled pattern; capture group `n` fills `fields[n - 1]`.
struct FieldPattern {
    fields: &'static [&'static str],
    pattern: &'static str,
}

const LABELLED_PATTERNS: &[FieldPattern] = &[
    FieldPattern {
        fields: &["lab_ui_url"],
        pattern: r"Lab UI\s*\n(https://\S+)",
    },
    FieldPattern {
        fields: &["openshift_console_url"],
        pattern: r"OpenShift Console: (https://\S+)",
    },
    FieldPattern {
        fields: &["openshift_api_url"],
        pattern: r"OpenShift API for command line 'oc' client: (https://\S+)",
    },
    FieldPattern {
        fields: &["openshift_admin_password"],
        pattern: r"User admin with password (\S+) is cluster admin",
    },
    FieldPattern {
        fields: &["bastion_hostname", "bastion_port"],
        pattern: r"ssh lab-user@(\S+) -p (\d+)",
    },
    FieldPattern {
        fields: &["bastion_password"],
        pattern: r"Enter ssh password when prompted: (\S+)",
    },
    FieldPattern {
        fields: &["allocation_name"],
        pattern: r"Allocation Name: (cluster-\w+)",
    },
    FieldPattern {
        fields: &["cluster_name"],
        pattern: r"Cluster: (\w+)",
    },
    FieldPattern {
        fields: &["network_subnet"],
        pattern: r"Network Subnet: ([\d.]+/\d+)",
    },
    FieldPattern {
        fields: &["network_cidr"],
        pattern: r"Network CIDR: ([\d.]+/\d+)",
    },
];

/// IP fields keyed by their `NAME=value` variable name.
pub const IP_FIELDS: &[(&str, &str)] = &[
    ("external_ip_worker_1", "EXTERNAL_IP_WORKER_1"),
    ("external_ip_worker_2", "EXTERNAL_IP_WORKER_2"),
    ("external_ip_worker_3", "EXTERNAL_IP_WORKER_3"),
    ("external_ip_bastion", "EXTERNAL_IP_BASTION"),
    ("public_net_start", "PUBLIC_NET_START"),
    ("public_net_end", "PUBLIC_NET_END"),
    ("conversion_host_ip", "CONVERSION_HOST_IP"),
];

static LABELLED_REGEXES: OnceLock<Vec<(&'static [&'static str], Regex)>> = OnceLock::new();
static IP_REGEXES: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();

fn get_labelled_regexes() -> &'static [(&'static [&'static str], Regex)] {
    LABELLED_REGEXES.get_or_init(|| {
        LABELLED_PATTERNS
            .iter()
            .map(|p| (p.fields, Regex::new(p.pattern).expect("Invalid Regex")))
            .collect()
    })
}

fn get_ip_regexes() -> &'static [(&'static str, Regex)] {
    IP_REGEXES.get_or_init(|| {
        IP_FIELDS
            .iter()
            .map(|(field, var)| {
                let re = Regex::new(&format!(r"{var}=([\d.]+)")).expect("Invalid Regex");
                (*field, re)
            })
            .collect()
    })
}

/// Fields from the labelled patterns, first match per pattern, in table order.
pub fn extract_labelled_fields(body: &str) -> Vec<(&'static str, String)> {
    let mut found = Vec::new();
    for (fields, re) in get_labelled_regexes() {
        let Some(caps) = re.captures(body) else {
            log::trace!("no match for {fields:?}");
            continue;
        };
        for (i, field) in fields.iter().enumerate() {
            if let Some(m) = caps.get(i + 1) {
                found.push((*field, m.as_str().to_string()));
            }
        }
    }
    found
}

/// Fields from the `NAME=a.b.c.d` table, each evaluated independently.
pub fn extract_ip_fields(body: &str) -> Vec<(&'static str, String)> {
    get_ip_regexes()
        .iter()
        .filter_map(|(field, re)| {
            re.captures(body)
                .and_then(|c| c.get(1))
                .map(|m| (*field, m.as_str().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(found: &'a [(&str, String)], field: &str) -> Option<&'a str> {
        found
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_ssh_and_password() {
        let body = "\nssh lab-user@bastion.example.com -p 2222\nUser admin with password Secr3t! is cluster admin\n";
        let found = extract_labelled_fields(body);
        assert_eq!(lookup(&found, "bastion_hostname"), Some("bastion.example.com"));
        assert_eq!(lookup(&found, "bastion_port"), Some("2222"));
        assert_eq!(lookup(&found, "openshift_admin_password"), Some("Secr3t!"));
        assert_eq!(found.len(), 3);
    }

    #[test]
    fn test_urls() {
        let body = "Lab UI\nhttps://lab.example.com/ui\n\
OpenShift Console: https://console.apps.example.com\n\
OpenShift API for command line 'oc' client: https://api.example.com:6443\n";
        let found = extract_labelled_fields(body);
        assert_eq!(lookup(&found, "lab_ui_url"), Some("https://lab.example.com/ui"));
        assert_eq!(
            lookup(&found, "openshift_console_url"),
            Some("https://console.apps.example.com")
        );
        assert_eq!(
            lookup(&found, "openshift_api_url"),
            Some("https://api.example.com:6443")
        );
    }

    #[test]
    fn test_allocation_and_network() {
        let body = "Allocation Name: cluster-x7k2\nCluster: ocpv04\n\
Network Subnet: 192.168.10.0/24\nNetwork CIDR: 10.0.0.0/16\n";
        let found = extract_labelled_fields(body);
        assert_eq!(lookup(&found, "allocation_name"), Some("cluster-x7k2"));
        assert_eq!(lookup(&found, "cluster_name"), Some("ocpv04"));
        assert_eq!(lookup(&found, "network_subnet"), Some("192.168.10.0/24"));
        assert_eq!(lookup(&found, "network_cidr"), Some("10.0.0.0/16"));
    }

    #[test]
    fn test_first_match_only() {
        let body = "Enter ssh password when prompted: first\nEnter ssh password when prompted: second\n";
        let found = extract_labelled_fields(body);
        assert_eq!(lookup(&found, "bastion_password"), Some("first"));
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_no_match_omits_field() {
        let found = extract_labelled_fields("ssh lab-user@host -p notaport\n");
        assert!(found.is_empty());
    }

    #[test]
    fn test_ip_fields_subset() {
        let body = "export EXTERNAL_IP_WORKER_1=10.0.0.5\nEXTERNAL_IP_BASTION=10.0.0.1\n";
        let found = extract_ip_fields(body);
        assert_eq!(
            found,
            vec![
                ("external_ip_worker_1", "10.0.0.5".to_string()),
                ("external_ip_bastion", "10.0.0.1".to_string()),
            ]
        );
    }

    #[test]
    fn test_ip_fields_all() {
        let body = "EXTERNAL_IP_WORKER_1=1.1.1.1\nEXTERNAL_IP_WORKER_2=1.1.1.2\n\
EXTERNAL_IP_WORKER_3=1.1.1.3\nEXTERNAL_IP_BASTION=1.1.1.4\nPUBLIC_NET_START=1.1.1.10\n\
PUBLIC_NET_END=1.1.1.20\nCONVERSION_HOST_IP=1.1.1.30\n";
        let found = extract_ip_fields(body);
        assert_eq!(found.len(), IP_FIELDS.len());
        assert_eq!(lookup(&found, "public_net_end"), Some("1.1.1.20"));
    }
}
