//! # Submit flow — register, sign in, then notify and navigate
//!
//! [`SignUpFlow`] drives the two remote calls behind the sign-up form and
//! maps every outcome to user feedback. It is generic over its four
//! collaborators so the UI can plug in server functions, toasts and the
//! router, while tests plug in recording fakes.
//!
//! Ordering: sign-in only runs after registration returned without an
//! error, and navigation only happens after sign-in succeeded. Each outcome
//! produces exactly one notification. A call that fails outright
//! ([`ServiceError`]) is logged and shown to the user like any other error.

use serde::{Deserialize, Serialize};

use crate::config::SignUpConfig;
use crate::controller::FormStatus;
use crate::error::ServiceError;
use crate::input::{AuthResponse, RegistrationInput};

/// Creates the account.
#[allow(async_fn_in_trait)]
pub trait RegistrationService {
    async fn register(&self, input: &RegistrationInput) -> Result<AuthResponse, ServiceError>;
}

/// Establishes a session for freshly registered credentials.
#[allow(async_fn_in_trait)]
pub trait SessionService {
    async fn sign_in(
        &self,
        provider: &str,
        input: &RegistrationInput,
        options: SignInOptions,
    ) -> Result<AuthResponse, ServiceError>;
}

/// Fire-and-forget user notification (toast).
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Moves the user to another page.
pub trait Navigator {
    fn navigate(&self, to: Destination);
}

/// Options passed with the sign-in call. `redirect` stays false so the
/// form decides where to go next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInOptions {
    pub redirect: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Pages the sign-up form can send the user to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    #[default]
    Profile,
    SignIn,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::Profile => "/profile",
            Destination::SignIn => "/sign-in",
        }
    }
}

/// How a submission attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    SignedUp,
    RegistrationRejected(String),
    SessionRejected(String),
    Failed(ServiceError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::SignedUp)
    }
}

pub struct SignUpFlow<R, S, N, V> {
    registration: R,
    session: S,
    notifier: N,
    navigator: V,
    config: SignUpConfig,
}

impl<R, S, N, V> SignUpFlow<R, S, N, V>
where
    R: RegistrationService,
    S: SessionService,
    N: Notifier,
    V: Navigator,
{
    pub fn new(registration: R, session: S, notifier: N, navigator: V) -> Self {
        Self {
            registration,
            session,
            notifier,
            navigator,
            config: SignUpConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SignUpConfig) -> Self {
        self.config = config;
        self
    }

    /// Run one submission. `on_phase` sees `SigningIn` and `Navigated` as
    /// the attempt advances; the caller has already moved to `Registering`.
    pub async fn submit(
        &self,
        input: &RegistrationInput,
        mut on_phase: impl FnMut(FormStatus),
    ) -> SubmitOutcome {
        let registered = match self.registration.register(input).await {
            Ok(response) => response,
            Err(e) => return self.unexpected("register", e),
        };
        if let Some(message) = registered.error_message() {
            self.notifier.notify(NoticeKind::Error, message);
            return SubmitOutcome::RegistrationRejected(message.to_string());
        }

        on_phase(FormStatus::SigningIn);
        let signed_in = match self
            .session
            .sign_in(&self.config.provider, input, SignInOptions::default())
            .await
        {
            Ok(response) => response,
            Err(e) => return self.unexpected("sign in", e),
        };
        if let Some(message) = signed_in.error_message() {
            self.notifier.notify(NoticeKind::Error, message);
            return SubmitOutcome::SessionRejected(message.to_string());
        }

        self.notifier
            .notify(NoticeKind::Success, &self.config.success_message);
        self.navigator.navigate(self.config.success_destination);
        on_phase(FormStatus::Navigated);
        SubmitOutcome::SignedUp
    }

    fn unexpected(&self, step: &str, error: ServiceError) -> SubmitOutcome {
        tracing::error!("Sign-up {} failed: {}", step, error);
        let message = format!("{}: {}", self.config.unexpected_error_prefix, error);
        self.notifier.notify(NoticeKind::Error, &message);
        SubmitOutcome::Failed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::FormState;
    use crate::input::Field;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Register(String),
        SignIn { provider: String, redirect: bool },
        Notify(NoticeKind, String),
        Navigate(Destination),
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    struct FakeRegistration {
        log: Log,
        reply: Result<AuthResponse, ServiceError>,
    }

    impl RegistrationService for FakeRegistration {
        async fn register(
            &self,
            input: &RegistrationInput,
        ) -> Result<AuthResponse, ServiceError> {
            self.log
                .borrow_mut()
                .push(Call::Register(input.email.clone()));
            self.reply.clone()
        }
    }

    struct FakeSession {
        log: Log,
        reply: Result<AuthResponse, ServiceError>,
    }

    impl SessionService for FakeSession {
        async fn sign_in(
            &self,
            provider: &str,
            _input: &RegistrationInput,
            options: SignInOptions,
        ) -> Result<AuthResponse, ServiceError> {
            self.log.borrow_mut().push(Call::SignIn {
                provider: provider.to_string(),
                redirect: options.redirect,
            });
            self.reply.clone()
        }
    }

    struct FakeNotifier(Log);

    impl Notifier for FakeNotifier {
        fn notify(&self, kind: NoticeKind, message: &str) {
            self.0
                .borrow_mut()
                .push(Call::Notify(kind, message.to_string()));
        }
    }

    struct FakeNavigator(Log);

    impl Navigator for FakeNavigator {
        fn navigate(&self, to: Destination) {
            self.0.borrow_mut().push(Call::Navigate(to));
        }
    }

    fn flow(
        register: Result<AuthResponse, ServiceError>,
        sign_in: Result<AuthResponse, ServiceError>,
    ) -> (
        SignUpFlow<FakeRegistration, FakeSession, FakeNotifier, FakeNavigator>,
        Log,
    ) {
        let log: Log = Rc::default();
        let flow = SignUpFlow::new(
            FakeRegistration {
                log: log.clone(),
                reply: register,
            },
            FakeSession {
                log: log.clone(),
                reply: sign_in,
            },
            FakeNotifier(log.clone()),
            FakeNavigator(log.clone()),
        );
        (flow, log)
    }

    fn alice() -> RegistrationInput {
        RegistrationInput::new("a@b.com", "alice", "p1", "p1")
    }

    #[tokio::test]
    async fn test_happy_path_registers_then_signs_in_then_navigates() {
        let (flow, log) = flow(Ok(AuthResponse::ok()), Ok(AuthResponse::ok()));
        let mut phases = Vec::new();

        let outcome = flow.submit(&alice(), |p| phases.push(p)).await;

        assert_eq!(outcome, SubmitOutcome::SignedUp);
        assert_eq!(phases, vec![FormStatus::SigningIn, FormStatus::Navigated]);
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Register("a@b.com".to_string()),
                Call::SignIn {
                    provider: "credentials".to_string(),
                    redirect: false,
                },
                Call::Notify(
                    NoticeKind::Success,
                    "Account created successfully".to_string()
                ),
                Call::Navigate(Destination::Profile),
            ]
        );
    }

    #[tokio::test]
    async fn test_registration_error_skips_sign_in() {
        let (flow, log) = flow(
            Ok(AuthResponse::failed("Email already registered")),
            Ok(AuthResponse::ok()),
        );

        let outcome = flow.submit(&alice(), |_| {}).await;

        assert_eq!(
            outcome,
            SubmitOutcome::RegistrationRejected("Email already registered".to_string())
        );
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Register("a@b.com".to_string()),
                Call::Notify(NoticeKind::Error, "Email already registered".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_sign_in_error_does_not_navigate() {
        let (flow, log) = flow(
            Ok(AuthResponse::ok()),
            Ok(AuthResponse::failed("CredentialsSignin")),
        );

        let outcome = flow.submit(&alice(), |_| {}).await;

        assert_eq!(
            outcome,
            SubmitOutcome::SessionRejected("CredentialsSignin".to_string())
        );
        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert_eq!(
            log[2],
            Call::Notify(NoticeKind::Error, "CredentialsSignin".to_string())
        );
        assert!(!log.iter().any(|c| matches!(c, Call::Navigate(_))));
    }

    #[tokio::test]
    async fn test_empty_error_counts_as_success() {
        let (flow, log) = flow(Ok(AuthResponse::failed("")), Ok(AuthResponse::ok()));

        let outcome = flow.submit(&alice(), |_| {}).await;

        assert_eq!(outcome, SubmitOutcome::SignedUp);
        assert!(log
            .borrow()
            .iter()
            .any(|c| *c == Call::Navigate(Destination::Profile)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_shown_to_user() {
        let (flow, log) = flow(
            Err(ServiceError::Transport("connection refused".to_string())),
            Ok(AuthResponse::ok()),
        );

        let outcome = flow.submit(&alice(), |_| {}).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Register("a@b.com".to_string()),
                Call::Notify(
                    NoticeKind::Error,
                    "Something went wrong: request failed: connection refused".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_sign_in_server_failure_is_shown_to_user() {
        let (flow, log) = flow(
            Ok(AuthResponse::ok()),
            Err(ServiceError::Server("backend unavailable".to_string())),
        );

        let outcome = flow.submit(&alice(), |_| {}).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(ServiceError::Server("backend unavailable".to_string()))
        );
        let log = log.borrow();
        let notices: Vec<_> = log
            .iter()
            .filter(|c| matches!(c, Call::Notify(..)))
            .collect();
        assert_eq!(notices.len(), 1);
        assert!(!log.iter().any(|c| matches!(c, Call::Navigate(_))));
    }

    #[tokio::test]
    async fn test_config_overrides_message_and_destination() {
        let (flow, log) = flow(Ok(AuthResponse::ok()), Ok(AuthResponse::ok()));
        let flow = flow.with_config(SignUpConfig {
            success_message: "Welcome!".to_string(),
            success_destination: Destination::SignIn,
            ..SignUpConfig::default()
        });

        flow.submit(&alice(), |_| {}).await;

        let log = log.borrow();
        assert!(log.contains(&Call::Notify(NoticeKind::Success, "Welcome!".to_string())));
        assert!(log.contains(&Call::Navigate(Destination::SignIn)));
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_services() {
        let (flow, log) = flow(Ok(AuthResponse::ok()), Ok(AuthResponse::ok()));
        let mut form = FormState::with_values(RegistrationInput::new(
            "a@b.com", "alice", "p1", "p2",
        ));

        if let Ok(input) = form.begin_submit() {
            flow.submit(&input, |_| {}).await;
        }

        assert!(log.borrow().is_empty());
        assert_eq!(
            form.error(Field::ConfirmPassword),
            Some("passwords don't match")
        );
    }

    #[tokio::test]
    async fn test_form_and_flow_together() {
        let (flow, log) = flow(Ok(AuthResponse::ok()), Ok(AuthResponse::ok()));
        let mut form = FormState::with_values(alice());

        let input = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        let outcome = flow.submit(&input, |p| form.set_status(p)).await;
        form.finish_submit(&outcome);

        assert_eq!(form.status(), FormStatus::Navigated);
        let navigations = log
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Navigate(_)))
            .count();
        assert_eq!(navigations, 1);
    }
}
