//! Integration test: existence probing against a local HTTP server.
//!
//! Covers the status-200 rule, redirects, HEAD vs GET, and the mapping of
//! transport failures (refused connection, timeout) to "does not exist".

mod common;

use common::status_server::{self, Route};
use mvnrepo_core::config::{ProbeConfig, ProbeMethod};
use mvnrepo_core::error::ProbeError;
use mvnrepo_core::probe::ResourceProbe;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn repo() -> String {
    let big: Vec<u8> = (0u8..200).cycle().take(1024 * 1024).collect();
    status_server::start(vec![
        ("/org/jboss/jboss-parent/10/jboss-parent-10.pom", Route::ok("<project/>")),
        ("/big.jar", Route::ok(big)),
        ("/empty.sha1", Route::ok(Vec::<u8>::new())),
        ("/forbidden.jar", Route::status(403)),
        ("/broken.jar", Route::status(500)),
        ("/old.jar", Route::redirect("/big.jar")),
    ])
}

#[test]
fn status_200_exists() {
    let base = repo();
    let probe = ResourceProbe::default();
    assert!(probe.exists(&format!(
        "{base}/org/jboss/jboss-parent/10/jboss-parent-10.pom"
    )));
    assert!(probe.exists(&format!("{base}/empty.sha1")));
}

#[test]
fn large_body_is_not_downloaded_in_full() {
    let base = repo();
    let probe = ResourceProbe::default();
    assert_eq!(probe.status(&format!("{base}/big.jar")).unwrap(), 200);
    assert!(probe.exists(&format!("{base}/big.jar")));
}

#[test]
fn non_200_does_not_exist() {
    let base = repo();
    let probe = ResourceProbe::default();
    assert!(!probe.exists(&format!("{base}/somefilethatdoesnotexist")));
    assert!(!probe.exists(&format!("{base}/forbidden.jar")));
    assert!(!probe.exists(&format!("{base}/broken.jar")));
    assert_eq!(
        probe.status(&format!("{base}/somefilethatdoesnotexist")).unwrap(),
        404
    );
}

#[test]
fn redirects_follow_config() {
    let base = repo();
    let url = format!("{base}/old.jar");

    let following = ResourceProbe::default();
    assert!(following.exists(&url));

    let strict = ResourceProbe::new(ProbeConfig {
        follow_redirects: false,
        ..ProbeConfig::default()
    });
    assert_eq!(strict.status(&url).unwrap(), 302);
    assert!(!strict.exists(&url));
}

#[test]
fn head_method() {
    let base = repo();
    let probe = ResourceProbe::new(ProbeConfig {
        method: ProbeMethod::Head,
        ..ProbeConfig::default()
    });
    assert!(probe.exists(&format!("{base}/big.jar")));
    assert!(!probe.exists(&format!("{base}/missing.jar")));
}

#[test]
fn refused_connection_is_false() {
    let url = status_server::refused_url();
    let probe = ResourceProbe::default();
    assert!(!probe.exists(&url));
    assert!(matches!(probe.status(&url), Err(ProbeError::Curl { .. })));
}

#[test]
fn timeout_is_false() {
    let (_listener, url) = status_server::silent();
    let probe = ResourceProbe::new(ProbeConfig {
        connect_timeout_secs: 1,
        timeout_secs: 1,
        ..ProbeConfig::default()
    });
    assert!(!probe.exists(&url));
}

#[test]
fn zero_timeout_still_bounded() {
    let (_listener, url) = status_server::silent();
    let probe = ResourceProbe::new(ProbeConfig {
        connect_timeout_secs: 0,
        timeout_secs: 0,
        ..ProbeConfig::default()
    });
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(probe.exists(&url));
    });
    let found = rx
        .recv_timeout(Duration::from_secs(8))
        .expect("exists() did not return with timeout_secs = 0");
    assert!(!found);
}

#[test]
fn mirror_sweep_continues_past_failures() {
    let base = repo();
    let dead = status_server::refused_url();
    let missing = format!("{base}/missing.pom");
    let found = format!("{base}/org/jboss/jboss-parent/10/jboss-parent-10.pom");

    let probe = ResourceProbe::default();
    let candidates = [dead.as_str(), missing.as_str(), found.as_str()];
    assert_eq!(probe.first_available(candidates), Some(found.as_str()));
}
