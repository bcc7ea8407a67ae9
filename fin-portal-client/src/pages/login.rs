use fin_portal_common::session::{Credentials, Session};
use leptos::*;
use leptos_router::*;

use crate::{
    api::{self, PortalApi},
    components::credentials::CredentialsForm,
    pages::Page,
};

#[component]
pub fn login(cx: Scope, session: RwSignal<Option<Session>>, api: PortalApi) -> impl IntoView {
    // Arriving here with a live session acts as a logout
    if session.get_untracked().is_some() {
        session.set(None);
    }

    let (login_error, set_login_error) = create_signal(cx, None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(cx, false);
    let login_action = create_action(cx, move |credentials: &Credentials| {
        let credentials = credentials.clone();
        async move {
            set_wait_for_response.update(|w| *w = true);
            let result = api.login(&credentials).await;
            set_wait_for_response.update(|w| *w = false);
            match result {
                Ok(new_session) => {
                    set_login_error.update(|e| *e = None);
                    session.set(Some(new_session));
                }
                Err(err) => {
                    let msg = match err {
                        api::Error::Fetch(js_err) => {
                            format!("{js_err:?}")
                        }
                        api::Error::Rejected(detail) => detail,
                        other => format!("{other}"),
                    };
                    error!("Unable to login with {}: {msg}", credentials.username);
                    set_login_error.update(|e| *e = Some(msg));
                }
            }
        }
    });
    let disabled = Signal::derive(cx, move || wait_for_response.get());

    // A fresh session means the login round trip succeeded; leave for home
    let navigate = use_navigate(cx);
    create_effect(cx, move |_| {
        if session.get().is_some() {
            if let Err(error) = navigate(Page::Home.path(), NavigateOptions::default()) {
                error!("{error:?}");
            }
        }
    });

    view! { cx,
        <div class="login-container">
            <section class="login-hero">"Prefinity & InsightGen"</section>
            <section class="login-form-container">
                <h3>"Login to FinPortal"</h3>
                <CredentialsForm action=login_action disabled=disabled/>
                {move || {
                    login_error
                        .get()
                        .map(|err| {
                            let title = format!("Error: {err}, click to dismiss");
                            view! { cx,
                                <p
                                    class="form-error"
                                    title=title
                                    on:click=move |_| set_login_error.set(None)
                                >
                                    {err}
                                </p>
                            }
                        })
                }}
            </section>
        </div>
    }
}
