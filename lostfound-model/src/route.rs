use crate::error::ModelError;

use std::str::FromStr;

/// Named destinations reachable from the profile screen.
///
/// Only the names are modelled; wiring them to screens belongs to the
/// navigation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Route {
    PersonalBelongings,
    PostedLostItems,
    PostedFoundItems,
    UploadImage,
    Settings,
}

impl Route {
    /// Profile screen buttons, in display order.
    pub const PROFILE_ACTIONS: [Route; 5] = [
        Route::PersonalBelongings,
        Route::PostedLostItems,
        Route::PostedFoundItems,
        Route::UploadImage,
        Route::Settings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Route::PersonalBelongings => "Personal Belongings",
            Route::PostedLostItems => "Posted Lost Items",
            Route::PostedFoundItems => "Posted Found Items",
            Route::UploadImage => "Upload Image",
            Route::Settings => "Settings",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Route {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::PROFILE_ACTIONS
            .into_iter()
            .find(|route| route.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ModelError::UnknownRoute(s.to_string()))
    }
}
