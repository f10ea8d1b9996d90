//! Plain-text rendering of what the profile screen shows.

use lostfound_config::{ConfigMetadata, ConfigSource};
use lostfound_contracts::push::PushError;
use lostfound_core::{
    ProfileView, SignOutOutcome,
    profile::ProfileBody,
};
use std::fmt::Write;

pub fn view(view: &ProfileView) -> String {
    let mut out = String::new();
    match &view.body {
        ProfileBody::Empty => {}
        ProfileBody::Loading { label } => {
            let _ = writeln!(out, "{label}");
        }
        ProfileBody::Details(details) => {
            let _ = writeln!(out, "{}", details.name);
            let _ = writeln!(out, "{}", details.contact);
            let _ = writeln!(out, "{}", details.points_label);
            for action in &details.actions {
                let _ = writeln!(out, "[{}]", action.label);
            }
        }
    }
    if let Some(alert) = &view.alert {
        let _ = writeln!(
            out,
            "{}: {} [{}]",
            alert.title, alert.message, alert.dismiss_label
        );
    }
    let _ = writeln!(out, "[{}]", view.sign_out_label);
    out
}

pub fn outcome(outcome: &SignOutOutcome) -> String {
    match outcome {
        SignOutOutcome::SignedOut => "signed out".to_string(),
        SignOutOutcome::Failed { reason } => format!("sign-out failed: {reason}"),
    }
}

pub fn unregister(result: &Result<(), PushError>) -> String {
    match result {
        Ok(()) => "push subscription removed".to_string(),
        Err(err) => format!("push unregister failed: {err}"),
    }
}

pub fn source(metadata: &ConfigMetadata) -> String {
    let base = match &metadata.source {
        ConfigSource::Default => "defaults".to_string(),
        ConfigSource::EnvPath(path) | ConfigSource::File(path) => {
            path.display().to_string()
        }
        ConfigSource::EnvInline => "inline JSON".to_string(),
    };
    if metadata.overrides.is_empty() {
        base
    } else {
        format!("{base} (overridden: {})", metadata.overrides.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lostfound_core::LoadState;
    use lostfound_model::{ErrorInfo, UserId, UserProfile};

    #[test]
    fn loaded_view_lists_fields_and_actions() {
        let profile = UserProfile::new(UserId::new("u123").unwrap())
            .with_display_name("Asha")
            .with_phone_number("555-0100")
            .with_points(5);
        let text = view(&ProfileView::project(&LoadState::Loaded(profile), false));

        assert_eq!(
            text,
            "Asha\n555-0100\nPoints : 5\n[Personal Belongings]\n[Posted Lost Items]\n\
             [Posted Found Items]\n[Upload Image]\n[Settings]\n[Sign Out]\n"
        );
    }

    #[test]
    fn failed_view_shows_alert() {
        let state = LoadState::Failed(ErrorInfo::new("Error", "Data fetching failed"));
        assert_eq!(
            view(&ProfileView::project(&state, false)),
            "Error: Data fetching failed [Close]\n[Sign Out]\n"
        );
    }

    #[test]
    fn source_lists_overrides() {
        let metadata = ConfigMetadata {
            overrides: vec!["LOSTFOUND_PUSH_APP_ID"],
            ..Default::default()
        };
        assert_eq!(
            source(&metadata),
            "defaults (overridden: LOSTFOUND_PUSH_APP_ID)"
        );
    }
}
