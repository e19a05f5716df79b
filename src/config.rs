//! Fixed names and defaults shared across the crate.

/// Namespace prefix every lab service name starts with.
pub const SERVICE_PREFIX: &str = "openshift-cnv.osp-on-ocp-cnv.dev";

/// Root key of the embedded YAML fragment inside a lab block.
pub const FRAGMENT_ROOT_KEY: &str = "openshift-cnv.osp-on-ocp-cnv.dev";

/// Output directory used when neither `--output-dir` nor the env var is set.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_inventories";

/// Env var (also read from `.env`) overriding the output directory.
pub const OUTPUT_DIR_ENV: &str = "LAB_INVENTORY_OUTPUT_DIR";

/// File holding every extracted record as JSON.
pub const SUMMARY_FILE_NAME: &str = "lab_summary.json";

/// log4rs config read from the working directory at startup.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

// Inventory constants
pub const BASTION_USER: &str = "lab-user";
pub const CLOUD_USER: &str = "cloud-user";
pub const JUMPHOST_NAME: &str = "bastion-jumphost";
pub const NFS_SERVER_HOSTNAME: &str = "nfsserver";
pub const COMPUTE_HOSTNAME: &str = "compute01";
