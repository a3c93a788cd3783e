use leptos::prelude::*;

/// Bottom sheet overlay. Clicking the backdrop closes it.
#[component]
pub fn Drawer(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-40 bg-black/40"
                on:click=move |_| open.set(false)
            ></div>
            <div class="fixed inset-x-0 bottom-0 z-50 max-h-[85vh] overflow-y-auto rounded-t-2xl bg-white shadow-2xl">
                <div class="mx-auto mt-3 h-1.5 w-12 rounded-full bg-gray-300"></div>
                <div class="p-4 text-center sm:text-left">
                    <h2 class="text-lg font-semibold text-[#001C3C]">{title.clone()}</h2>
                    <p class="text-sm text-gray-500">{description.clone()}</p>
                </div>
                <div class="px-4 pb-6">
                    {children()}
                </div>
            </div>
        </Show>
    }
}
