use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::prelude::*;

/// Sign-in dialog shown after a valid postcode. Accounts are not wired up yet,
/// so the only way forward is continuing as a guest.
#[component]
pub fn LoginModal(open: RwSignal<bool>, on_continue_as_guest: Callback<()>) -> impl IntoView {
    let (show_password, set_show_password) = create_signal(false);
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let handle_login = move |ev: SubmitEvent| {
        ev.prevent_default();
        log!("Login attempted for {} ({} character password)", email.get_untracked(), password.get_untracked().len());
    };

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40 bg-black/50" on:click=move |_| open.set(false)></div>
            <div class="fixed left-1/2 top-1/2 z-50 w-full max-w-md -translate-x-1/2 -translate-y-1/2 rounded-lg bg-white p-6 shadow-xl">
                <h2 class="text-center text-2xl font-semibold">Log in to Sportscanner</h2>
                <form class="mt-4 space-y-4" on:submit=handle_login>
                    <div class="space-y-2">
                        <label for="email" class="text-sm font-medium">Email address</label>
                        <input
                            id="email"
                            type="email"
                            required
                            class="h-12 w-full rounded-md border px-3"
                            prop:value=email
                            on:input=move |ev| set_email(event_target_value(&ev))
                        />
                    </div>
                    <div class="space-y-2">
                        <label for="password" class="text-sm font-medium">Password</label>
                        <div class="relative">
                            <input
                                id="password"
                                type={move || if show_password.get() { "text" } else { "password" }}
                                required
                                class="h-12 w-full rounded-md border px-3 pr-10"
                                prop:value=password
                                on:input=move |ev| set_password(event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="absolute right-3 top-1/2 -translate-y-1/2 text-gray-500"
                                on:click=move |_| set_show_password.update(|v| *v = !*v)
                            >
                                <i class={move || if show_password.get() { "fas fa-eye-slash" } else { "fas fa-eye" }}></i>
                            </button>
                        </div>
                    </div>
                    <button type="submit" class="h-12 w-full rounded-md bg-[#936de8] text-white hover:bg-[#936de8]/90">
                        "Log in"
                    </button>
                </form>
                <div class="mt-4 text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <a href="/join" class="font-medium text-[#936de8] hover:underline">Sign up</a>
                </div>
                <button
                    type="button"
                    class="mt-4 h-12 w-full rounded-md border text-gray-700 hover:bg-gray-50"
                    on:click=move |_| on_continue_as_guest.run(())
                >
                    "Continue as guest"
                </button>
            </div>
        </Show>
    }
}
