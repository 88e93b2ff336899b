use std::sync::Arc;

use tracing::{info, warn};

use super::action::Action;
use crate::api::AuthApi;
use crate::models::{
    FailurePayload, FieldErrors, LoginCredentials, LoginPayload, SignupPayload, SignupRequest,
    SocialLoginRequest, SocialProfile, UserData,
};
use crate::store::{Dispatchable, Store};

/// Message used when a social provider hands back no email.
pub const SOCIAL_EMAIL_MISSING: &str = "The social provider did not share an email address.";

// -- Plain creators

pub fn login_success(payload: LoginPayload) -> Action {
    Action::LoginUserSuccess(payload)
}

pub fn login_failure(payload: FailurePayload) -> Action {
    Action::LoginUserFailure(payload)
}

pub fn login_success_social(user: UserData) -> Action {
    Action::SocialLoginSuccess(user)
}

pub fn logout() -> Action {
    Action::LogoutUser
}

pub fn signup_success(payload: SignupPayload) -> Action {
    Action::SignupUserSuccess(payload)
}

pub fn signup_failure(payload: FailurePayload) -> Action {
    Action::SignupUserFailure(payload)
}

/// Adapts a social provider's identity payload. Only an email is required;
/// without one the login fails with an `email` field error.
pub fn social_action(profile: SocialProfile) -> Action {
    if profile.email().is_some() {
        login_success_social(profile.into())
    } else {
        warn!(
            event_name = "actions.social.email_missing",
            event_domain = "actions",
            "social login payload has no email"
        );
        login_failure(FailurePayload::new(
            FieldErrors::single("email", SOCIAL_EMAIL_MISSING),
            None,
        ))
    }
}

// -- Resolving creators: one backend call, settled into a single action.

pub async fn resolve_login(api: &dyn AuthApi, credentials: &LoginCredentials) -> Action {
    match api.login(credentials).await {
        Ok(payload) => {
            info!(
                event_name = "actions.login.success",
                event_domain = "actions",
                api_name = api.get_name(),
                "login succeeded"
            );
            login_success(payload)
        }
        Err(e) => {
            warn!(
                event_name = "actions.login.failure",
                event_domain = "actions",
                api_name = api.get_name(),
                error = %e,
                "login failed"
            );
            login_failure(e.into())
        }
    }
}

pub async fn resolve_social_login(api: &dyn AuthApi, request: &SocialLoginRequest) -> Action {
    match api.social_login(request).await {
        Ok(profile) => social_action(profile),
        Err(e) => {
            warn!(
                event_name = "actions.social.failure",
                event_domain = "actions",
                provider = request.provider.as_str(),
                error = %e,
                "social login failed"
            );
            login_failure(e.into())
        }
    }
}

pub async fn resolve_signup(api: &dyn AuthApi, request: &SignupRequest) -> Action {
    match api.signup(request).await {
        Ok(payload) => signup_success(payload),
        Err(e) => {
            warn!(
                event_name = "actions.signup.failure",
                event_domain = "actions",
                error = %e,
                "signup failed"
            );
            signup_failure(e.into())
        }
    }
}

// -- Deferred creators: mark the request in flight, await, dispatch the result.

pub fn login_user(api: Arc<dyn AuthApi>, credentials: LoginCredentials) -> Dispatchable {
    Dispatchable::thunk(move |store: Store| async move {
        store.dispatch(Action::LoginUserRequest).await;
        let action = resolve_login(api.as_ref(), &credentials).await;
        store.dispatch(action).await;
    })
}

pub fn social_login(api: Arc<dyn AuthApi>, request: SocialLoginRequest) -> Dispatchable {
    Dispatchable::thunk(move |store: Store| async move {
        store.dispatch(Action::LoginUserRequest).await;
        let action = resolve_social_login(api.as_ref(), &request).await;
        store.dispatch(action).await;
    })
}

pub fn signup_user(api: Arc<dyn AuthApi>, request: SignupRequest) -> Dispatchable {
    Dispatchable::thunk(move |store: Store| async move {
        store.dispatch(Action::SignupUserRequest).await;
        let action = resolve_signup(api.as_ref(), &request).await;
        store.dispatch(action).await;
    })
}
