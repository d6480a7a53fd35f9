use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;

use crate::application::account::{
    ResetOutcome, ResetRequestOutcome, Submission, submit_login, submit_register, submit_reset_password,
    submit_reset_request,
};
use crate::domain::{
    forms::FieldErrors,
    logging::{LogComponent, get_logger},
    session::{AuthOutcome, LoginData, RegisterData, ResetPasswordData},
};
use crate::presentation::context::{use_api, use_auth, use_config};

#[component]
fn FormField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="register-form-row">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
        </div>
    }
}

#[component]
fn OutcomeMessage(#[prop(into)] outcome: Signal<Option<AuthOutcome>>) -> impl IntoView {
    move || {
        outcome.get().map(|outcome| {
            let class = if outcome.is_success { "success" } else { "fail" };
            view! { <p class=class>{outcome.message}</p> }
        })
    }
}

fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> Signal<Option<&'static str>> {
    Signal::derive(move || errors.with(|e| e.get(field)))
}

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::default());
    let submitting = create_rw_signal(false);
    let outcome = create_rw_signal(None::<AuthOutcome>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let data = LoginData { username: username.get_untracked(), password: password.get_untracked() };
        let session = auth.session();
        let navigate = navigate.clone();
        submitting.set(true);
        spawn_local(async move {
            let submission = submit_login(&session, &data).await;
            submitting.set(false);
            match submission {
                Submission::Invalid(field_errors) => errors.set(field_errors),
                Submission::Submitted(result) => {
                    errors.set(FieldErrors::default());
                    let logged_in = result.is_success;
                    outcome.set(Some(result));
                    if logged_in {
                        navigate("/home", NavigateOptions::default());
                    }
                }
            }
        });
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <h1>"Login"</h1>
            <FormField
                id="username"
                label="User Name"
                input_type="text"
                placeholder="your user name"
                value=username
                error=field_error(errors, "username")
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                placeholder="your password"
                value=password
                error=field_error(errors, "password")
            />
            <button class="register-form-button" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Logging in..." } else { "Login" }}
            </button>
            <OutcomeMessage outcome=outcome />
            <p class="form-footer">
                <A href="/reset_password">"Forgot your password?"</A>
            </p>
        </form>
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let api = use_api();
    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let errors = create_rw_signal(FieldErrors::default());
    let submitting = create_rw_signal(false);
    let outcome = create_rw_signal(None::<AuthOutcome>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let data = RegisterData {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let api = api.clone();
        submitting.set(true);
        spawn_local(async move {
            let submission = submit_register(&api, &data).await;
            submitting.set(false);
            match submission {
                Submission::Invalid(field_errors) => errors.set(field_errors),
                Submission::Submitted(result) => {
                    errors.set(FieldErrors::default());
                    outcome.set(Some(result));
                }
            }
        });
    };

    view! {
        <form class="register-form" on:submit=on_submit>
            <h1>"Register"</h1>
            <FormField
                id="username"
                label="User Name"
                input_type="text"
                placeholder="your user name, e.g., luntaixia"
                value=username
                error=field_error(errors, "username")
            />
            <FormField
                id="email"
                label="Email"
                input_type="email"
                placeholder="your email"
                value=email
                error=field_error(errors, "email")
            />
            <FormField
                id="password"
                label="Password"
                input_type="password"
                placeholder="your password"
                value=password
                error=field_error(errors, "password")
            />
            <button class="register-form-button" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Registering..." } else { "Register" }}
            </button>
            <OutcomeMessage outcome=outcome />
        </form>
    }
}

/// Email step, then the token + new password step once the email is accepted.
#[component]
pub fn ResetPasswordForms() -> impl IntoView {
    let api = use_api();
    let redirect_delay_ms = use_config().redirect_delay_ms;
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let email_errors = create_rw_signal(FieldErrors::default());
    let email_submitting = create_rw_signal(false);
    let request_outcome = create_rw_signal(None::<ResetRequestOutcome>);
    let email_sent = Signal::derive(move || request_outcome.get() == Some(ResetRequestOutcome::Sent));

    let token = create_rw_signal(String::new());
    let new_password = create_rw_signal(String::new());
    let reset_errors = create_rw_signal(FieldErrors::default());
    let reset_submitting = create_rw_signal(false);
    let reset_outcome = create_rw_signal(None::<ResetOutcome>);

    let request_api = api.clone();
    let on_request = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if email_submitting.get_untracked() || email_sent.get_untracked() {
            return;
        }
        let address = email.get_untracked();
        let api = request_api.clone();
        email_submitting.set(true);
        spawn_local(async move {
            let submission = submit_reset_request(&api, &address).await;
            email_submitting.set(false);
            match submission {
                Submission::Invalid(field_errors) => email_errors.set(field_errors),
                Submission::Submitted(result) => {
                    email_errors.set(FieldErrors::default());
                    request_outcome.set(Some(result));
                }
            }
        });
    };

    let on_reset = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if reset_submitting.get_untracked() {
            return;
        }
        let data = ResetPasswordData { token: token.get_untracked(), new_password: new_password.get_untracked() };
        let api = api.clone();
        let navigate = navigate.clone();
        reset_submitting.set(true);
        spawn_local(async move {
            let submission = submit_reset_password(&api, &data).await;
            reset_submitting.set(false);
            match submission {
                Submission::Invalid(field_errors) => reset_errors.set(field_errors),
                Submission::Submitted(result) => {
                    reset_errors.set(FieldErrors::default());
                    reset_outcome.set(Some(result));
                    if result == ResetOutcome::Success {
                        get_logger().info(LogComponent::Presentation("ResetPassword"), "redirecting to login");
                        Timeout::new(redirect_delay_ms, move || navigate("/login", NavigateOptions::default()))
                            .forget();
                    }
                }
            }
        });
    };

    let token_form = move || {
        email_sent.get().then(|| {
            view! {
                <form class="register-form reset-password-form" on:submit=on_reset.clone()>
                    <FormField
                        id="token"
                        label="Token"
                        input_type="text"
                        placeholder="Paste the token here"
                        value=token
                        error=field_error(reset_errors, "token")
                    />
                    <FormField
                        id="new-password"
                        label="New Password"
                        input_type="password"
                        placeholder="New Password"
                        value=new_password
                        error=field_error(reset_errors, "new_password")
                    />
                    <button class="register-form-button" type="submit" disabled=move || reset_submitting.get()>
                        {move || if reset_submitting.get() { "Submitting..." } else { "Reset Password" }}
                    </button>
                    {move || {
                        reset_outcome.get().and_then(|outcome| {
                            let class = if outcome == ResetOutcome::Success { "success" } else { "fail" };
                            outcome.message().map(|message| view! { <p class=class>{message}</p> })
                        })
                    }}
                </form>
            }
        })
    };

    view! {
        <form class="register-form reset-password-form" on:submit=on_request>
            <h1>"Forget your password?"</h1>
            <FormField
                id="email"
                label="Enter your email below to reset your password."
                input_type="email"
                placeholder="Email"
                value=email
                error=field_error(email_errors, "email")
                disabled=email_sent
            />
            {move || match request_outcome.get() {
                Some(ResetRequestOutcome::Sent) => {
                    view! { <p class="success">{ResetRequestOutcome::Sent.message()}</p> }.into_view()
                }
                other => view! {
                    <button class="register-form-button" type="submit" disabled=move || email_submitting.get()>
                        {move || if email_submitting.get() { "Submitting..." } else { "Send Reset Instruction" }}
                    </button>
                    {other.map(|outcome| view! { <p class="fail">{outcome.message()}</p> })}
                }
                .into_view(),
            }}
        </form>
        {token_form}
    }
}
