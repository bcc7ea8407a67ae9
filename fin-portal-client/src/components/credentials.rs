use fin_portal_common::session::Credentials;
use leptos::*;

/// Username/password form feeding the login action. Inputs are controlled
/// signals so submit and reset can both clear them.
#[component]
pub fn credentials_form(
    cx: Scope,
    action: Action<Credentials, ()>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let (username, set_username) = create_signal(cx, String::new());
    let (password, set_password) = create_signal(cx, String::new());
    let clear = move || {
        set_username.set(String::new());
        set_password.set(String::new());
    };
    view! { cx,
        <form
            class="login-form"
            on:submit=move |ev| {
                ev.prevent_default();
                action
                    .dispatch(Credentials {
                        username: username.get_untracked(),
                        password: password.get_untracked(),
                    });
                clear();
            }
        >
            <div class="form-group">
                <label for="username">"Username"</label>
                <input
                    class="form-control"
                    type="text"
                    id="username"
                    name="username"
                    required=true
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                    prop:disabled=move || disabled.get()
                />
            </div>
            <div class="form-group">
                <label for="password">"Password"</label>
                <input
                    class="form-control"
                    type="password"
                    id="password"
                    name="password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:disabled=move || disabled.get()
                />
            </div>
            <section class="submit-section">
                <input
                    class="btn btn-primary"
                    value="Submit"
                    type="submit"
                    prop:disabled=move || disabled.get()
                />
                <button type="reset" on:click=move |_| clear()>"Reset"</button>
            </section>
        </form>
    }
}
