//! Manifest Merger.
//!
//! Two targets: the Example Podfile (and its prefix header), and the
//! enclosing MainApp Podfile. Each merge is designed for exactly one
//! application per manifest; a missing marker is fatal, never skipped.

use std::fs;

use crate::domain::AppError;
use crate::domain::placeholders::{self, Substitutions};
use crate::domain::session::Session;
use crate::services::instantiate::read_required;
use crate::services::layout::TemplateLayout;

/// Replace the `${INCLUDED_PODS}` block with one declaration per session
/// pod, joined with the Podfile's continuation indent.
pub fn add_pods_to_podfile(layout: &TemplateLayout, session: &Session) -> Result<(), AppError> {
    let path = layout.example_podfile();
    let podfile = read_required(&path)?;
    if !podfile.contains(placeholders::INCLUDED_PODS) {
        return Err(AppError::MissingMergeMarker {
            marker: placeholders::INCLUDED_PODS.to_string(),
            file: path,
        });
    }
    let block = session
        .pods()
        .iter()
        .map(|pod| format!("pod '{}'", pod))
        .collect::<Vec<_>>()
        .join("\n    ");
    fs::write(&path, podfile.replace(placeholders::INCLUDED_PODS, &block))?;
    Ok(())
}

/// Inject the session's prefix lines into the test prefix header. The file
/// only exists in the ObjC subtree; its absence is not an error.
pub fn customise_prefix(layout: &TemplateLayout, session: &Session) -> Result<(), AppError> {
    let path = layout.prefix_header();
    if !path.exists() {
        return Ok(());
    }
    let pch = fs::read_to_string(&path)?;
    if !pch.contains(placeholders::INCLUDED_PREFIXES) {
        return Err(AppError::MissingMergeMarker {
            marker: placeholders::INCLUDED_PREFIXES.to_string(),
            file: path,
        });
    }
    fs::write(&path, pch.replace(placeholders::INCLUDED_PREFIXES, &session.prefixes().join("\n  ")))?;
    Ok(())
}

/// Insert the pod's target stanza and dependency reference into the MainApp
/// Podfile. Both markers are re-appended so the manifest stays open to
/// future module insertions.
pub fn add_pods_to_main_app_podfile(
    layout: &TemplateLayout,
    session: &Session,
) -> Result<(), AppError> {
    let stanza_template = read_required(&layout.pod_target_template())?;
    let mut subs = Substitutions::new();
    subs.set(placeholders::POD_NAME, session.pod_name().as_str());
    subs.set(placeholders::POD_NAME_LOWERCASE, session.pod_name().lowercase());
    let stanza = subs.render(&stanza_template);

    let path = layout.main_app_podfile();
    let podfile = read_required(&path)?;
    for marker in [placeholders::NEW_TARGET_GOES_HERE, placeholders::NEW_POD_GOES_HERE] {
        if !podfile.contains(marker) {
            return Err(AppError::MissingMergeMarker { marker: marker.to_string(), file: path });
        }
    }
    let merged = podfile
        .replace(
            placeholders::NEW_TARGET_GOES_HERE,
            &format!("{}\n{}", placeholders::NEW_TARGET_GOES_HERE, stanza),
        )
        .replace(
            placeholders::NEW_POD_GOES_HERE,
            &format!("{}\n  {}_pod", placeholders::NEW_POD_GOES_HERE, session.pod_name().lowercase()),
        );
    fs::write(&path, merged)?;
    Ok(())
}
