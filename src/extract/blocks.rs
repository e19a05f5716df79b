//! Splits provisioning output into per-lab blocks.

use regex::Regex;
use std::sync::OnceLock;

/// Delimiter: a service name at the start of a line.
static SERVICE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_service_regex() -> &'static Regex {
    SERVICE_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^(openshift-cnv\.osp-on-ocp-cnv\.dev-\w+)").expect("Invalid Regex")
    })
}

/// Text belonging to one lab, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabBlock<'a> {
    /// The delimiter token, e.g. `openshift-cnv.osp-on-ocp-cnv.dev-abc123`.
    pub service_name: &'a str,
    /// Everything after the delimiter up to the next delimiter or end of input.
    pub body: &'a str,
}

/// Split `content` into lab blocks in input order.
///
/// Text before the first delimiter is dropped. No delimiter means no blocks.
pub fn split_blocks(content: &str) -> Vec<LabBlock<'_>> {
    let starts: Vec<regex::Match> = get_service_regex().find_iter(content).collect();
    log::debug!("split_blocks() found {} service delimiters", starts.len());

    starts
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = starts.get(i + 1).map_or(content.len(), |next| next.start());
            LabBlock {
                service_name: m.as_str().trim(),
                body: &content[m.end()..end],
            }
        })
        .collect()
}
