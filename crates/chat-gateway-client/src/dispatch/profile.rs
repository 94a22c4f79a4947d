//! Profile domain dispatch

use serde_json::Value;
use std::fmt;

use super::handler::{builder, installed, invoke, Handler};
use crate::events::{
    decode_profile_gateway_event, is_profile_gateway_event_type, EventKind,
    ProfileAvatarUpdatePayload, ProfileBannerUpdatePayload, ProfileEventKind, ProfileGatewayEvent,
    ProfileUpdatePayload,
};

#[derive(Default)]
pub struct ProfileHandlers<'a> {
    pub on_profile_update: Handler<'a, ProfileUpdatePayload>,
    pub on_profile_avatar_update: Handler<'a, ProfileAvatarUpdatePayload>,
    pub on_profile_banner_update: Handler<'a, ProfileBannerUpdatePayload>,
}

impl<'a> ProfileHandlers<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    builder! {
        on_profile_update: ProfileUpdatePayload,
        on_profile_avatar_update: ProfileAvatarUpdatePayload,
        on_profile_banner_update: ProfileBannerUpdatePayload,
    }
}

impl fmt::Debug for ProfileHandlers<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileHandlers")
            .field(
                "installed",
                &installed(&[
                    ("on_profile_update", self.on_profile_update.is_some()),
                    ("on_profile_avatar_update", self.on_profile_avatar_update.is_some()),
                    ("on_profile_banner_update", self.on_profile_banner_update.is_some()),
                ]),
            )
            .finish()
    }
}

impl ProfileGatewayEvent {
    pub fn dispatch(self, handlers: &mut ProfileHandlers<'_>) {
        let event_type = self.kind().as_str();
        match self {
            Self::ProfileUpdate(payload) => {
                invoke(event_type, &mut handlers.on_profile_update, payload);
            }
            Self::ProfileAvatarUpdate(payload) => {
                invoke(event_type, &mut handlers.on_profile_avatar_update, payload);
            }
            Self::ProfileBannerUpdate(payload) => {
                invoke(event_type, &mut handlers.on_profile_banner_update, payload);
            }
        }
    }
}

pub fn profile_event_types() -> Vec<&'static str> {
    ProfileEventKind::event_types()
}

pub fn dispatch_profile_gateway_event(
    event_type: &str,
    payload: &Value,
    handlers: &mut ProfileHandlers<'_>,
) -> bool {
    if !is_profile_gateway_event_type(event_type) {
        return false;
    }
    if let Some(event) = decode_profile_gateway_event(event_type, payload) {
        event.dispatch(handlers);
    }
    true
}
