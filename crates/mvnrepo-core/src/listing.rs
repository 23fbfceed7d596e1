//! Plain-text rendering of artifact lists.

use std::collections::BTreeMap;

/// Artifacts keyed by `group:artifact`, then repository priority, then
/// version; the value is the URL the artifact is available from.
pub type ArtifactList = BTreeMap<String, BTreeMap<u32, BTreeMap<String, String>>>;

/// One line per artifact: `<url>\t<group:artifact>:<version>`.
///
/// Ordered by coordinates, then priority, then version. Writing the lines
/// out is left to the caller.
pub fn format_artifact_list(list: &ArtifactList) -> Vec<String> {
    let mut lines = Vec::new();
    for (ga, by_priority) in list {
        for by_version in by_priority.values() {
            for (version, url) in by_version {
                lines.push(format!("{url}\t{ga}:{version}"));
            }
        }
    }
    lines
}
