//! What the profile screen shows for a given load state.
//!
//! Layout and styling belong to the rendering layer; this module only
//! decides which texts and actions are present.

use super::state::LoadState;

use lostfound_model::{ErrorInfo, Route, UserProfile};

pub const LOADING_LABEL: &str = "Loading Profile...";
pub const SIGN_OUT_LABEL: &str = "Sign Out";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub body: ProfileBody,
    pub alert: Option<AlertView>,
    /// Sign-out is offered in every state, including while loading.
    pub sign_out_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileBody {
    Empty,
    Loading { label: &'static str },
    Details(ProfileDetails),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    pub name: String,
    pub contact: String,
    pub points_label: String,
    pub actions: Vec<ActionButton>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub route: Route,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView {
    pub title: String,
    pub message: String,
    pub dismiss_label: &'static str,
}

impl From<&ErrorInfo> for AlertView {
    fn from(info: &ErrorInfo) -> Self {
        Self {
            title: info.title.clone(),
            message: info.message.clone(),
            dismiss_label: info.dismiss_label(),
        }
    }
}

impl ProfileDetails {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.display_name.clone().unwrap_or_default(),
            contact: profile.contact().unwrap_or_default().to_string(),
            points_label: format!("Points : {}", profile.points_or_default()),
            actions: Route::PROFILE_ACTIONS
                .into_iter()
                .map(|route| ActionButton {
                    route,
                    label: route.name(),
                })
                .collect(),
        }
    }
}

impl ProfileView {
    pub fn project(state: &LoadState, alert_dismissed: bool) -> Self {
        let (body, alert) = match state {
            LoadState::Idle => (ProfileBody::Empty, None),
            LoadState::Loading => (
                ProfileBody::Loading {
                    label: LOADING_LABEL,
                },
                None,
            ),
            LoadState::Loaded(profile) => (
                ProfileBody::Details(ProfileDetails::from_profile(profile)),
                None,
            ),
            LoadState::Failed(info) => (
                ProfileBody::Empty,
                (!alert_dismissed).then(|| AlertView::from(info)),
            ),
        };

        Self {
            body,
            alert,
            sign_out_label: SIGN_OUT_LABEL,
        }
    }

    pub fn details(&self) -> Option<&ProfileDetails> {
        match &self.body {
            ProfileBody::Details(details) => Some(details),
            _ => None,
        }
    }
}
